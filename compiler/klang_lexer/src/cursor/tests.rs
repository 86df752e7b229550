use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_starts_at_line_one_column_zero() {
    let cursor = Cursor::new("abc");
    assert_eq!((cursor.line(), cursor.column(), cursor.pos()), (1, 0, 0));
    assert_eq!(cursor.current(), 'a');
    assert_eq!(cursor.peek(), 'b');
}

#[test]
fn test_newline_resets_column() {
    let mut cursor = Cursor::new("ab\ncd");
    cursor.bump();
    cursor.bump();
    assert_eq!((cursor.line(), cursor.column()), (1, 2));
    assert_eq!(cursor.bump(), '\n');
    assert_eq!((cursor.line(), cursor.column()), (2, 0));
    cursor.bump();
    assert_eq!((cursor.line(), cursor.column()), (2, 1));
}

#[test]
fn test_eof_sentinel() {
    let mut cursor = Cursor::new("a");
    assert_eq!(cursor.peek(), '\0');
    assert_eq!(cursor.bump(), 'a');
    assert!(cursor.is_eof());
    assert_eq!(cursor.current(), '\0');
    assert_eq!(cursor.bump(), '\0');
    assert_eq!(cursor.column(), 1);
}

#[test]
fn test_interior_nul_is_not_eof() {
    let cursor = Cursor::new("\0x");
    assert_eq!(cursor.current(), '\0');
    assert!(!cursor.is_eof());
}

#[test]
fn test_columns_count_chars_not_bytes() {
    let mut cursor = Cursor::new("éa");
    cursor.bump();
    assert_eq!(cursor.column(), 1);
    assert_eq!(cursor.pos(), 2);
    assert_eq!(cursor.current(), 'a');
}

#[test]
fn test_eat_and_eat_while() {
    let mut cursor = Cursor::new("==abc1 rest");
    assert!(cursor.eat('='));
    assert!(!cursor.eat('x'));
    assert!(cursor.eat('='));
    assert_eq!(cursor.eat_while(char::is_alphanumeric), "abc1");
    assert_eq!(cursor.current(), ' ');
}

#[test]
fn test_run_length() {
    let cursor = Cursor::new("&&& x");
    assert_eq!(cursor.run_length('&'), 3);
    assert_eq!(cursor.run_length('|'), 0);
}

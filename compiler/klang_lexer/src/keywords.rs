//! Static lookup tables for keywords and operator characters.
//!
//! All three tables are `match` expressions compiled into the binary; nothing
//! is populated at runtime.

use crate::TokenKind;

/// Look up a reserved word by its full text.
///
/// Only called with a maximal identifier match, so `iffy` never resolves to
/// `if`. Length-bucketed: keywords are 2-9 chars.
#[inline]
pub(crate) fn lookup(text: &str) -> Option<TokenKind> {
    match text.len() {
        2 => match text {
            "if" => Some(TokenKind::If),
            _ => None,
        },
        3 => match text {
            "for" => Some(TokenKind::For),
            "try" => Some(TokenKind::Try),
            "new" => Some(TokenKind::New),
            "Use" => Some(TokenKind::Use),
            _ => None,
        },
        4 => match text {
            "true" => Some(TokenKind::True),
            "null" => Some(TokenKind::Null),
            "void" => Some(TokenKind::Void),
            _ => None,
        },
        5 => match text {
            "while" => Some(TokenKind::While),
            "break" => Some(TokenKind::Break),
            "false" => Some(TokenKind::False),
            "catch" => Some(TokenKind::Catch),
            _ => None,
        },
        6 => match text {
            "return" => Some(TokenKind::Return),
            "public" => Some(TokenKind::Public),
            "static" => Some(TokenKind::Static),
            "double" => Some(TokenKind::Double),
            "String" => Some(TokenKind::StringType),
            _ => None,
        },
        7 => match text {
            "integer" => Some(TokenKind::Integer),
            "boolean" => Some(TokenKind::Boolean),
            _ => None,
        },
        8 => match text {
            "afterall" => Some(TokenKind::Afterall),
            "continue" => Some(TokenKind::Continue),
            "internal" => Some(TokenKind::Internal),
            _ => None,
        },
        9 => match text {
            "otherwise" => Some(TokenKind::Otherwise),
            "protected" => Some(TokenKind::Protected),
            "character" => Some(TokenKind::CharacterType),
            _ => None,
        },
        _ => None,
    }
}

/// Token for a character that stands on its own.
#[inline]
pub(crate) fn single_char(c: char) -> Option<TokenKind> {
    let kind = match c {
        '(' => TokenKind::LParen,
        ')' => TokenKind::RParen,
        '{' => TokenKind::LBrace,
        '}' => TokenKind::RBrace,
        '[' => TokenKind::LBracket,
        ']' => TokenKind::RBracket,
        ',' => TokenKind::Comma,
        ';' => TokenKind::Semicolon,
        ':' => TokenKind::Colon,
        '.' => TokenKind::Dot,
        '+' => TokenKind::Plus,
        '-' => TokenKind::Minus,
        '*' => TokenKind::Multiply,
        '/' => TokenKind::Division,
        '%' => TokenKind::Remainder,
        '=' => TokenKind::Assignment,
        '<' => TokenKind::Lt,
        '>' => TokenKind::Gt,
        '!' => TokenKind::Bang,
        '@' => TokenKind::At,
        _ => return None,
    };
    Some(kind)
}

/// Token for a two-character operator, if `first` and `second` form one.
///
/// `&&` and `||` are listed here too; the lexer checks the surrounding run
/// length before accepting them.
#[inline]
pub(crate) fn pair(first: char, second: char) -> Option<TokenKind> {
    let kind = match (first, second) {
        ('=', '=') => TokenKind::DoubleEqual,
        ('+', '+') => TokenKind::Increment,
        ('-', '-') => TokenKind::Decrement,
        ('-', '>') => TokenKind::Arrow,
        ('*', '*') => TokenKind::Power,
        ('>', '=') => TokenKind::Gte,
        ('<', '=') => TokenKind::Lte,
        ('!', '=') => TokenKind::NotEqual,
        ('&', '&') => TokenKind::And,
        ('|', '|') => TokenKind::Or,
        _ => return None,
    };
    Some(kind)
}

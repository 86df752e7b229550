use super::*;
use klang_diagnostic::DiagnosticCode;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn lex(source: &str) -> TokenList {
    Lexer::new(source, "test.k").tokenize().unwrap()
}

fn kinds(source: &str) -> Vec<TokenKind> {
    lex(source).kinds()
}

fn lex_err(source: &str) -> Diagnostic {
    Lexer::new(source, "test.k").tokenize().unwrap_err()
}

// Success paths

#[test]
fn test_empty_source_is_just_eof() {
    let tokens = lex("");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0], Token::new(TokenKind::Eof, 1, 0));
}

#[test]
fn test_declaration() {
    let tokens = lex("integer x = 10;");
    assert_eq!(
        tokens.into_vec(),
        vec![
            Token::new(TokenKind::Integer, 1, 7),
            Token::with_value(TokenKind::Identifier, "x", 1, 9),
            Token::new(TokenKind::Assignment, 1, 11),
            Token::with_value(TokenKind::Number, "10", 1, 14),
            Token::new(TokenKind::Semicolon, 1, 15),
            Token::new(TokenKind::Eof, 1, 15),
        ]
    );
}

#[test]
fn test_keyword_precedence() {
    assert_eq!(kinds("if"), [TokenKind::If, TokenKind::Eof]);
    assert_eq!(kinds("   if   "), [TokenKind::If, TokenKind::Eof]);
    assert_eq!(kinds("\tif\n"), [TokenKind::If, TokenKind::Eof]);
    assert_eq!(
        kinds("iffy"),
        [TokenKind::Identifier, TokenKind::Eof],
        "keywords only match whole identifiers"
    );
}

#[test]
fn test_type_keywords() {
    assert_eq!(
        kinds("integer double boolean character String void"),
        [
            TokenKind::Integer,
            TokenKind::Double,
            TokenKind::Boolean,
            TokenKind::CharacterType,
            TokenKind::StringType,
            TokenKind::Void,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_line_bookkeeping() {
    let tokens = lex("a\nb");
    assert_eq!(tokens[0], Token::with_value(TokenKind::Identifier, "a", 1, 1));
    assert_eq!(tokens[1], Token::with_value(TokenKind::Identifier, "b", 2, 1));
}

#[test]
fn test_columns_count_chars() {
    let tokens = lex("café x");
    assert_eq!(tokens[0].text(), "café");
    assert_eq!(tokens[0].column, 4);
    assert_eq!(tokens[1].column, 6);
}

#[test]
fn test_dollar_identifiers() {
    let tokens = lex("$total _tmp a$b");
    assert_eq!(tokens[0].text(), "$total");
    assert_eq!(tokens[1].text(), "_tmp");
    // `$` only leads an identifier, so it splits `a$b` in two.
    assert_eq!(tokens[2].text(), "a");
    assert_eq!(tokens[3].text(), "$b");
    assert_eq!(tokens[3].column, 15);
    assert_eq!(tokens[4].kind, TokenKind::Eof);
}

#[test]
fn test_numbers() {
    let tokens = lex("42 3.14");
    assert_eq!(tokens[0].text(), "42");
    assert_eq!(tokens[1].text(), "3.14");

    // No trailing or leading dot forms.
    assert_eq!(
        kinds("1."),
        [TokenKind::Number, TokenKind::Dot, TokenKind::Eof]
    );
    assert_eq!(
        kinds(".5"),
        [TokenKind::Dot, TokenKind::Number, TokenKind::Eof]
    );
    assert_eq!(
        kinds("list.size"),
        [
            TokenKind::Identifier,
            TokenKind::Dot,
            TokenKind::Identifier,
            TokenKind::Eof
        ]
    );
}

#[test]
fn test_string_escapes() {
    let tokens = lex(r#""a\tb\n\"q\" \\""#);
    assert_eq!(tokens[0].kind, TokenKind::StringLiteral);
    assert_eq!(tokens[0].text(), "a\tb\n\"q\" \\");
}

#[test]
fn test_empty_string() {
    let tokens = lex(r#""""#);
    assert_eq!(tokens[0], Token::with_value(TokenKind::StringLiteral, "", 1, 2));
}

#[test]
fn test_character_literals() {
    let tokens = lex(r"'a' '\n' '\'' '\\'");
    let values: Vec<&str> = tokens.iter().map(Token::text).collect();
    assert_eq!(values, ["a", "\n", "'", "\\", ""]);
    assert!(tokens
        .iter()
        .take(4)
        .all(|t| t.kind == TokenKind::CharacterLiteral));
}

#[test]
fn test_two_char_operators_longest_match() {
    assert_eq!(
        kinds("== ++ -- -> ** >= <= != && ||"),
        [
            TokenKind::DoubleEqual,
            TokenKind::Increment,
            TokenKind::Decrement,
            TokenKind::Arrow,
            TokenKind::Power,
            TokenKind::Gte,
            TokenKind::Lte,
            TokenKind::NotEqual,
            TokenKind::And,
            TokenKind::Or,
            TokenKind::Eof,
        ]
    );
    assert_eq!(
        kinds("a=-b"),
        [
            TokenKind::Identifier,
            TokenKind::Assignment,
            TokenKind::Minus,
            TokenKind::Identifier,
            TokenKind::Eof,
        ]
    );
    assert_eq!(
        kinds("+++"),
        [TokenKind::Increment, TokenKind::Plus, TokenKind::Eof]
    );
}

#[test]
fn test_single_char_operators() {
    assert_eq!(
        kinds("( ) { } [ ] , ; : . @ + - * / % = < > !"),
        [
            TokenKind::LParen,
            TokenKind::RParen,
            TokenKind::LBrace,
            TokenKind::RBrace,
            TokenKind::LBracket,
            TokenKind::RBracket,
            TokenKind::Comma,
            TokenKind::Semicolon,
            TokenKind::Colon,
            TokenKind::Dot,
            TokenKind::At,
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Multiply,
            TokenKind::Division,
            TokenKind::Remainder,
            TokenKind::Assignment,
            TokenKind::Lt,
            TokenKind::Gt,
            TokenKind::Bang,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_comments_are_discarded() {
    assert_eq!(
        kinds("a // line comment\n/* block\n comment */ b"),
        [TokenKind::Identifier, TokenKind::Identifier, TokenKind::Eof]
    );
    let tokens = lex("/* one\ntwo */ x");
    assert_eq!(tokens[0].line, 2, "block comments track newlines");
}

#[test]
fn test_comment_beats_division() {
    assert_eq!(
        kinds("a / b // c"),
        [
            TokenKind::Identifier,
            TokenKind::Division,
            TokenKind::Identifier,
            TokenKind::Eof
        ]
    );
}

#[test]
fn test_comment_markers_inside_string() {
    let tokens = lex(r#""// not a comment""#);
    assert_eq!(tokens[0].text(), "// not a comment");
}

// Failure paths

#[test]
fn test_unterminated_string_at_eof() {
    let err = lex_err("integer x = 1;\nString s = \"abc");
    assert_eq!(err.code, Some(DiagnosticCode::E002));
    assert_eq!(err.location, SourceLocation::new("test.k", 2, 11));
    assert_eq!(
        err.context.last().map(String::as_str),
        Some("String s = \"abc")
    );
    assert_eq!(err.context.len(), 2);
    assert_eq!(err.example.as_deref(), Some("\"abc\""));
    assert_eq!(err.span_len, 3);
}

#[test]
fn test_string_line_break() {
    let err = lex_err("\"ab\ncd\"");
    assert_eq!(err.code, Some(DiagnosticCode::E002));
    assert_eq!(err.message, "String literal cannot span multiple lines.");
    assert_eq!((err.location.line, err.location.column), (1, 0));
}

#[test]
fn test_escape_at_end_of_input() {
    let err = lex_err("\"ab\\");
    assert_eq!(err.code, Some(DiagnosticCode::E002));
}

#[test]
fn test_invalid_string_escape() {
    let err = lex_err(r#"x = "a\qb";"#);
    assert_eq!(err.code, Some(DiagnosticCode::E003));
    assert_eq!(err.message, "Invalid escape sequence: \\q");
    assert_eq!(err.location.column, 4);
    assert_eq!(err.example.as_deref(), Some("\"a\""));
}

#[test]
fn test_bare_ampersand_names_the_run() {
    let err = lex_err("a & b");
    assert_eq!(err.code, Some(DiagnosticCode::E001));
    assert_eq!(err.message, "Character '&' is not valid alone.");
    assert_eq!(err.location.column, 2);
    assert_eq!(err.span_len, 1);
}

#[test]
fn test_tripled_pipe_names_the_run() {
    let err = lex_err("a ||| b");
    assert_eq!(err.message, "Character sequence '|||' is not valid.");
    assert_eq!(err.span_len, 3);
}

#[test]
fn test_number_suffix_reports_trailing_letters() {
    let err = lex_err("123abc");
    assert_eq!(err.code, Some(DiagnosticCode::E101));
    assert!(err.message.contains("'abc'"), "{}", err.message);
    assert_eq!(err.location.column, 3);
    assert_eq!(err.span_len, 3);
}

#[test]
fn test_underscore_after_number_starts_an_identifier() {
    let tokens = lex("123_x");
    assert_eq!(
        tokens.kinds(),
        [TokenKind::Number, TokenKind::Identifier, TokenKind::Eof]
    );
    assert_eq!(tokens[0].text(), "123");
    assert_eq!(tokens[1].text(), "_x");
}

#[test]
fn test_number_suffix_span_covers_the_whole_name() {
    let err = lex_err("7a_b");
    assert_eq!(err.code, Some(DiagnosticCode::E101));
    assert!(err.message.contains("'a_b'"), "{}", err.message);
    assert_eq!(err.location.column, 1);
    assert_eq!(err.span_len, 3);
}

#[test]
fn test_lone_dollar() {
    for source in ["$", "$ x", "$1"] {
        let err = lex_err(source);
        assert_eq!(err.code, Some(DiagnosticCode::E001), "{source:?}");
        assert_eq!(err.location.column, 0);
    }
}

#[test]
fn test_invalid_character() {
    let err = lex_err("x = 1 # 2");
    assert_eq!(err.code, Some(DiagnosticCode::E001));
    assert_eq!(err.message, "Character '#' is not valid in Klang.");
    assert_eq!(err.location.column, 6);
}

#[test]
fn test_empty_char_literal() {
    let err = lex_err("''");
    assert_eq!(err.code, Some(DiagnosticCode::E004));
    assert_eq!(err.message, "Empty character literal.");
}

#[test]
fn test_unterminated_char_literal() {
    for source in ["'", "'a", "'a\n'", "'\n"] {
        let err = lex_err(source);
        assert_eq!(err.code, Some(DiagnosticCode::E004), "{source:?}");
        assert_eq!(err.location.column, 0);
    }
}

#[test]
fn test_raw_newline_is_not_a_character_literal() {
    let err = lex_err("character c = '\n';");
    assert_eq!(err.code, Some(DiagnosticCode::E004));
    assert_eq!(err.location.line, 1);
    assert_eq!(err.location.column, 14);
}

#[test]
fn test_invalid_char_escape() {
    let err = lex_err(r"'\q'");
    assert_eq!(err.code, Some(DiagnosticCode::E003));
}

#[test]
fn test_multi_char_literal() {
    let err = lex_err("character c = 'abc';");
    assert_eq!(err.code, Some(DiagnosticCode::E103));
    assert_eq!(err.location.column, 16);
    assert_eq!(err.span_len, 2);
}

#[test]
fn test_unterminated_block_comment() {
    let err = lex_err("x\n  /* never closed");
    assert_eq!(err.code, Some(DiagnosticCode::E005));
    assert_eq!((err.location.line, err.location.column), (2, 2));
}

#[test]
fn test_first_error_wins() {
    let err = lex_err("# and then \"unterminated");
    assert_eq!(err.code, Some(DiagnosticCode::E001));
}

#[test]
fn test_context_window_follows_config() {
    let source = "a\nb\nc\nd\n#";
    let wide = lex_err(source);
    assert_eq!(wide.context, ["c", "d", "#"]);

    let narrow = Lexer::new(source, "test.k")
        .with_config(LexerConfig { context_lines: 0 })
        .tokenize()
        .unwrap_err();
    assert_eq!(narrow.context, ["#"]);
}

#[test]
fn test_every_lexical_failure_has_a_fix() {
    let sources = [
        "$", "&", "#", "\"a\nb\"", "\"abc", r#""\q""#, "''", "'a", r"'\q'", "'ab'", "1x",
        "/*",
    ];
    for source in sources {
        let err = lex_err(source);
        assert!(err.code.is_some(), "{source:?}");
        assert!(err.fix.is_some(), "{source:?} has no fix");
        assert_eq!(err.location.file, "test.k");
    }
}

// Properties

const VOCABULARY: &[&str] = &[
    "if", "otherwise", "x", "total_1", "42", "3.14", "\"hi\"", "'c'", "==", "&&", "||", "(",
    ")", "{", "}", ";", "->", "// note\n", "/* block */", "\n",
];

proptest! {
    #[test]
    fn prop_valid_input_ends_with_one_eof(
        words in prop::collection::vec(prop::sample::select(VOCABULARY), 0..40)
    ) {
        let source = words.join(" ");
        let tokens = lex(&source);
        let eofs = tokens.iter().filter(|t| t.kind == TokenKind::Eof).count();
        prop_assert_eq!(eofs, 1);
        prop_assert_eq!(tokens.as_slice().last().map(|t| t.kind), Some(TokenKind::Eof));
        prop_assert_eq!(lex(&source), tokens, "tokenizing is deterministic");
    }

    #[test]
    fn prop_string_payload_is_verbatim(s in "[^\"\\\\\n]{0,40}") {
        let tokens = lex(&format!("\"{s}\""));
        prop_assert_eq!(tokens.len(), 2);
        prop_assert_eq!(tokens[0].kind, TokenKind::StringLiteral);
        prop_assert_eq!(tokens[0].text(), s.as_str());
    }

    #[test]
    fn prop_identifier_payload_is_verbatim(name in "[A-Za-z_][A-Za-z0-9_]{0,20}") {
        prop_assume!(keywords::lookup(&name).is_none());
        let tokens = lex(&name);
        prop_assert_eq!(tokens.len(), 2);
        prop_assert_eq!(tokens[0].kind, TokenKind::Identifier);
        prop_assert_eq!(tokens[0].text(), name.as_str());
    }
}

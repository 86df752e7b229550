//! Tokens produced by the lexer.

mod list;

pub use list::TokenList;

use std::fmt;

/// Token kinds for Klang.
///
/// Literal payloads live on [`Token::value`], so the kind itself is `Copy`
/// and cheap to compare.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    // Literals
    Number,
    StringLiteral,
    CharacterLiteral,
    Identifier,

    // Keywords
    Return,
    If,
    Otherwise,
    Afterall,
    For,
    While,
    Break,
    Continue,
    Public,
    Internal,
    Protected,
    Static,
    True,
    False,
    Try,
    Catch,
    Null,
    New,
    Use,

    // Type keywords
    Integer,
    Double,
    Boolean,
    CharacterType,
    StringType,
    Void,

    // Punctuation
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Comma,
    Semicolon,
    Colon,
    Dot,
    At,

    // Operators
    Plus,
    Minus,
    Multiply,
    Division,
    Remainder,
    Assignment,
    Lt,
    Gt,
    Bang,
    DoubleEqual,
    NotEqual,
    Gte,
    Lte,
    Increment,
    Decrement,
    Arrow,
    Power,
    And,
    Or,

    Eof,
}

impl TokenKind {
    /// Upper-case display name (e.g., `STRING_LITERAL`).
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Number => "NUMBER",
            TokenKind::StringLiteral => "STRING_LITERAL",
            TokenKind::CharacterLiteral => "CHARACTER_LITERAL",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Return => "RETURN",
            TokenKind::If => "IF",
            TokenKind::Otherwise => "OTHERWISE",
            TokenKind::Afterall => "AFTERALL",
            TokenKind::For => "FOR",
            TokenKind::While => "WHILE",
            TokenKind::Break => "BREAK",
            TokenKind::Continue => "CONTINUE",
            TokenKind::Public => "PUBLIC",
            TokenKind::Internal => "INTERNAL",
            TokenKind::Protected => "PROTECTED",
            TokenKind::Static => "STATIC",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
            TokenKind::Try => "TRY",
            TokenKind::Catch => "CATCH",
            TokenKind::Null => "NULL",
            TokenKind::New => "NEW",
            TokenKind::Use => "USE",
            TokenKind::Integer => "INTEGER",
            TokenKind::Double => "DOUBLE",
            TokenKind::Boolean => "BOOLEAN",
            TokenKind::CharacterType => "CHARACTER_TYPE",
            TokenKind::StringType => "STRING_TYPE",
            TokenKind::Void => "VOID",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::LBrace => "LBRACE",
            TokenKind::RBrace => "RBRACE",
            TokenKind::LBracket => "LBRACKET",
            TokenKind::RBracket => "RBRACKET",
            TokenKind::Comma => "COMMA",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Colon => "COLON",
            TokenKind::Dot => "DOT",
            TokenKind::At => "AT",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Multiply => "MULTIPLY",
            TokenKind::Division => "DIVISION",
            TokenKind::Remainder => "REMAINDER",
            TokenKind::Assignment => "ASSIGNMENT",
            TokenKind::Lt => "LT",
            TokenKind::Gt => "GT",
            TokenKind::Bang => "BANG",
            TokenKind::DoubleEqual => "DOUBLEEQUAL",
            TokenKind::NotEqual => "NOTEQUAL",
            TokenKind::Gte => "GTE",
            TokenKind::Lte => "LTE",
            TokenKind::Increment => "INCREMENT",
            TokenKind::Decrement => "DECREMENT",
            TokenKind::Arrow => "ARROW",
            TokenKind::Power => "POWER",
            TokenKind::And => "AND",
            TokenKind::Or => "OR",
            TokenKind::Eof => "EOF",
        }
    }

    /// Fixed source text for keywords, operators and punctuation.
    ///
    /// `None` for literals, identifiers and `Eof`, whose text varies.
    pub fn spelling(self) -> Option<&'static str> {
        let text = match self {
            TokenKind::Number
            | TokenKind::StringLiteral
            | TokenKind::CharacterLiteral
            | TokenKind::Identifier
            | TokenKind::Eof => return None,
            TokenKind::Return => "return",
            TokenKind::If => "if",
            TokenKind::Otherwise => "otherwise",
            TokenKind::Afterall => "afterall",
            TokenKind::For => "for",
            TokenKind::While => "while",
            TokenKind::Break => "break",
            TokenKind::Continue => "continue",
            TokenKind::Public => "public",
            TokenKind::Internal => "internal",
            TokenKind::Protected => "protected",
            TokenKind::Static => "static",
            TokenKind::True => "true",
            TokenKind::False => "false",
            TokenKind::Try => "try",
            TokenKind::Catch => "catch",
            TokenKind::Null => "null",
            TokenKind::New => "new",
            TokenKind::Use => "Use",
            TokenKind::Integer => "integer",
            TokenKind::Double => "double",
            TokenKind::Boolean => "boolean",
            TokenKind::CharacterType => "character",
            TokenKind::StringType => "String",
            TokenKind::Void => "void",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            TokenKind::Colon => ":",
            TokenKind::Dot => ".",
            TokenKind::At => "@",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Multiply => "*",
            TokenKind::Division => "/",
            TokenKind::Remainder => "%",
            TokenKind::Assignment => "=",
            TokenKind::Lt => "<",
            TokenKind::Gt => ">",
            TokenKind::Bang => "!",
            TokenKind::DoubleEqual => "==",
            TokenKind::NotEqual => "!=",
            TokenKind::Gte => ">=",
            TokenKind::Lte => "<=",
            TokenKind::Increment => "++",
            TokenKind::Decrement => "--",
            TokenKind::Arrow => "->",
            TokenKind::Power => "**",
            TokenKind::And => "&&",
            TokenKind::Or => "||",
        };
        Some(text)
    }

    /// Check if this is a reserved word (including type keywords).
    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::Return
                | TokenKind::If
                | TokenKind::Otherwise
                | TokenKind::Afterall
                | TokenKind::For
                | TokenKind::While
                | TokenKind::Break
                | TokenKind::Continue
                | TokenKind::Public
                | TokenKind::Internal
                | TokenKind::Protected
                | TokenKind::Static
                | TokenKind::True
                | TokenKind::False
                | TokenKind::Try
                | TokenKind::Catch
                | TokenKind::Null
                | TokenKind::New
                | TokenKind::Use
        ) || self.is_type_keyword()
    }

    /// Check if this keyword names a built-in type.
    pub fn is_type_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::Integer
                | TokenKind::Double
                | TokenKind::Boolean
                | TokenKind::CharacterType
                | TokenKind::StringType
                | TokenKind::Void
        )
    }

    /// Check if tokens of this kind carry a payload.
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            TokenKind::Number
                | TokenKind::StringLiteral
                | TokenKind::CharacterLiteral
                | TokenKind::Identifier
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A token: kind, optional payload, and the cursor position (1-based line,
/// 0-based column) at the moment the lexeme was completed.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Token {
    pub kind: TokenKind,
    pub value: Option<String>,
    pub line: u32,
    pub column: u32,
}

impl Token {
    pub fn new(kind: TokenKind, line: u32, column: u32) -> Self {
        Token {
            kind,
            value: None,
            line,
            column,
        }
    }

    pub fn with_value(kind: TokenKind, value: impl Into<String>, line: u32, column: u32) -> Self {
        Token {
            kind,
            value: Some(value.into()),
            line,
            column,
        }
    }

    /// The payload, or `""` for tokens without one.
    pub fn text(&self) -> &str {
        self.value.as_deref().unwrap_or_default()
    }
}

/// `KIND(value)` for tokens with a payload, `KIND` otherwise.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{}({value})", self.kind),
            None => write!(f, "{}", self.kind),
        }
    }
}

//! Parser-facing view over a [`TokenList`].
//!
//! Lookahead never runs past the trailing `Eof`: once the stream is at the
//! end, `advance` keeps returning the `Eof` token without moving.

use klang_diagnostic::{Category, Diagnostic, DiagnosticCode, SourceLocation};

use crate::{Token, TokenKind, TokenList};

/// Read position over a borrowed token list.
#[derive(Clone, Debug)]
pub struct TokenStream<'a> {
    tokens: &'a TokenList,
    pos: usize,
}

impl<'a> TokenStream<'a> {
    pub fn new(tokens: &'a TokenList) -> Self {
        TokenStream { tokens, pos: 0 }
    }

    /// Index of the next unread token.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    // Lookahead

    /// The next unread token.
    #[inline]
    pub fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    /// Kind of the next unread token; `Eof` when there is none.
    #[inline]
    pub fn peek_kind(&self) -> TokenKind {
        self.peek().map_or(TokenKind::Eof, |t| t.kind)
    }

    /// The token `n` places ahead (`peek_nth(0)` is `peek()`), clamped to
    /// the final `Eof`.
    pub fn peek_nth(&self, n: usize) -> Option<&'a Token> {
        self.tokens
            .get(self.pos.saturating_add(n))
            .or_else(|| self.tokens.as_slice().last())
    }

    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.peek_kind() == kind
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.check(TokenKind::Eof)
    }

    // Consumption

    /// Consume the next token and return it.
    pub fn advance(&mut self) -> Option<&'a Token> {
        let token = self.peek();
        if !self.is_at_end() {
            self.pos += 1;
        }
        token
    }

    /// Consume the next token if it is `kind`.
    pub fn eat(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume a token of `kind` or report what was expected.
    ///
    /// The diagnostic points just past the previous token, where the
    /// missing token belongs. A missing `;` is [`DiagnosticCode::E102`].
    pub fn expect(&mut self, kind: TokenKind, file: &str) -> Result<&'a Token, Diagnostic> {
        match self.peek() {
            Some(token) if token.kind == kind => {
                self.advance();
                Ok(token)
            }
            found => Err(self.expected(kind, found, file)),
        }
    }

    #[cold]
    fn expected(&self, kind: TokenKind, found: Option<&Token>, file: &str) -> Diagnostic {
        let anchor = self
            .pos
            .checked_sub(1)
            .and_then(|prev| self.tokens.get(prev))
            .or(found);
        let location = match anchor {
            Some(token) => SourceLocation::new(file, token.line, token.column),
            None => SourceLocation::new(file, 1, 0),
        };
        let found = found.map_or(TokenKind::Eof, |t| t.kind);
        tracing::debug!(expected = %kind, %found, %location, "unexpected token");

        if kind == TokenKind::Semicolon {
            return Diagnostic::coded(DiagnosticCode::E102, location, "Expected ';' after statement.")
                .with_fix("End the statement with a semicolon.")
                .with_example("integer x = 10;");
        }
        let (expected, found) = (describe(kind), describe(found));
        Diagnostic::new(
            Category::Syntax,
            format!("Expected {expected}, found {found}."),
            location,
        )
        .with_fix(format!("Insert {expected} before {found}."))
    }
}

/// `';'` for fixed tokens, the kind name otherwise.
fn describe(kind: TokenKind) -> String {
    match kind.spelling() {
        Some(text) => format!("'{text}'"),
        None => kind.name().to_owned(),
    }
}

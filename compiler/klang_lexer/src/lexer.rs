//! The tokenizer state machine.
//!
//! Walks the source once, left to right, with at most two characters of
//! lookahead. There is no error recovery: the first malformed lexeme ends
//! the pass with a [`Diagnostic`], and no partial token list is returned.

use klang_diagnostic::{Diagnostic, SourceLines, SourceLocation};

use crate::cursor::Cursor;
use crate::keywords;
use crate::lex_error::LexError;
use crate::{Token, TokenKind, TokenList};

/// Lexer settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LexerConfig {
    /// How many lines before the error line a diagnostic captures.
    pub context_lines: usize,
}

impl Default for LexerConfig {
    fn default() -> Self {
        LexerConfig { context_lines: 2 }
    }
}

/// Single-use tokenizer over one source buffer.
///
/// ```text
/// let tokens = Lexer::new(source, "main.k").tokenize()?;
/// ```
pub struct Lexer<'src> {
    cursor: Cursor<'src>,
    file: String,
    config: LexerConfig,
    tokens: Vec<Token>,
}

/// Where a failing lexeme started.
#[derive(Copy, Clone)]
struct Mark {
    line: u32,
    column: u32,
}

impl<'src> Lexer<'src> {
    /// `file` is used only to label diagnostics; it is never opened.
    pub fn new(source: &'src str, file: impl Into<String>) -> Self {
        Lexer {
            cursor: Cursor::new(source),
            file: file.into(),
            config: LexerConfig::default(),
            tokens: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: LexerConfig) -> Self {
        self.config = config;
        self
    }

    /// Run the pass. Consumes the lexer; it cannot be restarted.
    pub fn tokenize(mut self) -> Result<TokenList, Diagnostic> {
        tracing::debug!(
            file = %self.file,
            bytes = self.cursor.source().len(),
            "tokenizing"
        );

        while !self.cursor.is_eof() {
            if let Err((err, at)) = self.next_token() {
                return Err(self.fail(err, at));
            }
        }

        let eof = Token::new(TokenKind::Eof, self.cursor.line(), self.cursor.column());
        self.tokens.push(eof);
        tracing::debug!(file = %self.file, tokens = self.tokens.len(), "tokenized");
        Ok(TokenList::from_vec(self.tokens))
    }

    fn mark(&self) -> Mark {
        Mark {
            line: self.cursor.line(),
            column: self.cursor.column(),
        }
    }

    fn push(&mut self, kind: TokenKind, value: Option<String>) {
        let token = Token {
            kind,
            value,
            line: self.cursor.line(),
            column: self.cursor.column(),
        };
        tracing::trace!(%token, line = token.line, column = token.column, "token");
        self.tokens.push(token);
    }

    /// Anchor a failure and capture its context window.
    ///
    /// The line index is built here, on the error path only.
    #[cold]
    fn fail(&self, err: LexError, at: Mark) -> Diagnostic {
        tracing::debug!(
            code = %err.code(),
            file = %self.file,
            line = at.line,
            column = at.column,
            "lexical error"
        );
        let lines = SourceLines::new(self.cursor.source());
        let context = lines.context_lines(at.line as usize, self.config.context_lines);
        err.into_diagnostic(SourceLocation::new(self.file.clone(), at.line, at.column), context)
    }

    /// Consume one lexeme (or one run of trivia).
    fn next_token(&mut self) -> Result<(), (LexError, Mark)> {
        let c = self.cursor.current();

        if c.is_whitespace() {
            self.cursor.bump();
            return Ok(());
        }

        match c {
            '"' => self.string(),
            '\'' => self.character(),
            '/' if self.cursor.peek() == '/' => {
                self.line_comment();
                Ok(())
            }
            '/' if self.cursor.peek() == '*' => self.block_comment(),
            '&' | '|' => self.logical_operator(c),
            c if is_ident_start(c) => self.identifier(),
            c if c.is_ascii_digit() => self.number(),
            _ => self.operator(c),
        }
    }

    fn line_comment(&mut self) {
        self.cursor.eat_while(|c| c != '\n');
    }

    fn block_comment(&mut self) -> Result<(), (LexError, Mark)> {
        let start = self.mark();
        self.cursor.bump();
        self.cursor.bump();
        while !self.cursor.is_eof() {
            if self.cursor.current() == '*' && self.cursor.peek() == '/' {
                self.cursor.bump();
                self.cursor.bump();
                return Ok(());
            }
            self.cursor.bump();
        }
        Err((LexError::unterminated_block_comment(), start))
    }

    fn identifier(&mut self) -> Result<(), (LexError, Mark)> {
        let start = self.mark();
        if self.cursor.current() == '$' {
            let next = self.cursor.peek();
            if !(next.is_alphabetic() || next == '_') {
                return Err((LexError::lone_dollar(), start));
            }
        }

        let source = self.cursor.source();
        let begin = self.cursor.pos();
        // `$` may only lead.
        self.cursor.bump();
        self.cursor.eat_while(is_ident_continue);
        let text = &source[begin..self.cursor.pos()];
        match keywords::lookup(text) {
            Some(kind) => self.push(kind, None),
            None => self.push(TokenKind::Identifier, Some(text.to_owned())),
        }
        Ok(())
    }

    /// Digits, optionally `.` and more digits. No exponents, no leading dot.
    fn number(&mut self) -> Result<(), (LexError, Mark)> {
        let source = self.cursor.source();
        let begin = self.cursor.pos();
        self.cursor.eat_while(|c| c.is_ascii_digit());
        if self.cursor.current() == '.' && self.cursor.peek().is_ascii_digit() {
            self.cursor.bump();
            self.cursor.eat_while(|c| c.is_ascii_digit());
        }
        let text = &source[begin..self.cursor.pos()];

        if self.cursor.current().is_alphabetic() {
            let suffix_at = self.mark();
            let suffix = self.cursor.eat_while(is_ident_continue);
            return Err((LexError::number_suffix(suffix), suffix_at));
        }

        self.push(TokenKind::Number, Some(text.to_owned()));
        Ok(())
    }

    fn string(&mut self) -> Result<(), (LexError, Mark)> {
        let open = self.mark();
        self.cursor.bump();
        let mut content = String::new();

        while !self.cursor.is_eof() {
            match self.cursor.bump() {
                '"' => {
                    self.push(TokenKind::StringLiteral, Some(content));
                    return Ok(());
                }
                '\n' => return Err((LexError::string_line_break(&content), open)),
                '\\' => {
                    if self.cursor.is_eof() {
                        return Err((LexError::unterminated_string(&content), open));
                    }
                    match self.cursor.bump() {
                        'n' => content.push('\n'),
                        't' => content.push('\t'),
                        '"' => content.push('"'),
                        '\\' => content.push('\\'),
                        other => {
                            return Err((LexError::invalid_string_escape(other, &content), open));
                        }
                    }
                }
                c => content.push(c),
            }
        }

        Err((LexError::unterminated_string(&content), open))
    }

    fn character(&mut self) -> Result<(), (LexError, Mark)> {
        let open = self.mark();
        self.cursor.bump();

        if self.cursor.is_eof() || self.cursor.current() == '\n' {
            return Err((LexError::unterminated_char(), open));
        }
        if self.cursor.current() == '\'' {
            return Err((LexError::empty_char(), open));
        }

        let value = match self.cursor.bump() {
            '\\' => {
                if self.cursor.is_eof() {
                    return Err((LexError::unterminated_char(), open));
                }
                match self.cursor.bump() {
                    'n' => '\n',
                    't' => '\t',
                    '\'' => '\'',
                    '\\' => '\\',
                    other => return Err((LexError::invalid_char_escape(other), open)),
                }
            }
            c => c,
        };

        if self.cursor.eat('\'') {
            self.push(TokenKind::CharacterLiteral, Some(value.to_string()));
            return Ok(());
        }

        // More text before a closing quote on this line means the literal is
        // too long; otherwise it was never closed.
        let extra_at = self.mark();
        let rest = &self.cursor.source()[self.cursor.pos()..];
        let line_rest = rest.split('\n').next().unwrap_or_default();
        match line_rest.find('\'') {
            Some(end) => Err((LexError::multi_char(line_rest[..end].chars().count()), extra_at)),
            None => Err((LexError::unterminated_char(), open)),
        }
    }

    /// `&&` / `||`. Any other run length of `&` or `|` is rejected, naming
    /// the exact run found.
    fn logical_operator(&mut self, c: char) -> Result<(), (LexError, Mark)> {
        let start = self.mark();
        let run = self.cursor.run_length(c);
        if run != 2 {
            return Err((LexError::bare_logical_operator(c, run), start));
        }
        self.cursor.bump();
        self.cursor.bump();
        let kind = if c == '&' { TokenKind::And } else { TokenKind::Or };
        self.push(kind, None);
        Ok(())
    }

    /// Punctuation and arithmetic/comparison operators, longest match first.
    fn operator(&mut self, c: char) -> Result<(), (LexError, Mark)> {
        let start = self.mark();
        if let Some(kind) = keywords::pair(c, self.cursor.peek()) {
            self.cursor.bump();
            self.cursor.bump();
            self.push(kind, None);
            return Ok(());
        }
        match keywords::single_char(c) {
            Some(kind) => {
                self.cursor.bump();
                self.push(kind, None);
                Ok(())
            }
            None => Err((LexError::invalid_character(c), start)),
        }
    }
}

#[inline]
fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '$'
}

#[inline]
fn is_ident_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;

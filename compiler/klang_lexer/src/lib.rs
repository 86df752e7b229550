//! Hand-written lexer for Klang.
//!
//! Produces a [`TokenList`] ending in exactly one `Eof`, or the first
//! lexical [`Diagnostic`] found. There is no recovery: one failure ends the
//! pass, and callers re-run after a fix.
//!
//! ```text
//! let tokens = klang_lexer::tokenize("integer x = 10;", "main.k")?;
//! assert_eq!(tokens.len(), 6);
//! ```

mod cursor;
mod keywords;
mod lex_error;
mod lexer;
mod stream;
mod token;

pub use lexer::{Lexer, LexerConfig};
pub use stream::TokenStream;
pub use token::{Token, TokenKind, TokenList};

use klang_diagnostic::Diagnostic;

/// Tokenize `source` with the default [`LexerConfig`].
///
/// `file` only labels diagnostics.
pub fn tokenize(source: &str, file: &str) -> Result<TokenList, Diagnostic> {
    Lexer::new(source, file).tokenize()
}

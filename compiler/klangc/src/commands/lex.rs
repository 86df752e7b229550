//! The `lex` command: print the tokens of a source file.

use std::io::Write;

use crate::CliError;

use super::read_source;

/// Tokenize `path` and write one token per line (`KIND(value)`).
///
/// Returns the number of tokens written, `Eof` included.
pub fn lex_file(path: &str, out: &mut impl Write) -> Result<usize, CliError> {
    let source = read_source(path, "lex")?;
    let tokens = klang_lexer::tokenize(&source, path)?;
    tracing::debug!(path, tokens = tokens.len(), "lex command");
    for token in &tokens {
        writeln!(out, "{token}")?;
    }
    Ok(tokens.len())
}

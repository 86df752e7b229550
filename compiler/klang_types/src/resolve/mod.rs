//! Type names in source: `integer`, `String`, `double[]`.

use klang_diagnostic::{Category, Diagnostic, DiagnosticCode, SourceLocation};
use klang_lexer::{Token, TokenKind, TokenStream};

use crate::{Type, TypeSymbol};

/// Resolve a single type keyword.
///
/// An identifier in type position is [`DiagnosticCode::E201`]; Klang has no
/// user-defined types.
pub fn resolve_type_token(token: &Token, file: &str) -> Result<TypeSymbol, Diagnostic> {
    if let Some(ty) = Type::from_keyword(token.kind).filter(|_| token.kind.is_type_keyword()) {
        return Ok(TypeSymbol::Primitive(ty));
    }

    // Token columns mark where the lexeme ended.
    let width = token_width(token);
    let start = token.column.saturating_sub(u32::try_from(width).unwrap_or(u32::MAX));
    let location = SourceLocation::new(file, token.line, start);

    if token.kind == TokenKind::Identifier {
        let name = token.text();
        tracing::debug!(%name, %location, "unknown type");
        let fix = match builtin_named(name) {
            Some(ty) => format!("Type names are case-sensitive: write '{ty}'."),
            None => "Use a built-in type: integer, double, boolean, character, String or void."
                .to_owned(),
        };
        return Err(
            Diagnostic::coded(DiagnosticCode::E201, location, format!("Unknown type '{name}'."))
                .with_span_len(width)
                .with_fix(fix)
                .with_example("integer count = 0;"),
        );
    }

    Err(Diagnostic::new(
        Category::Syntax,
        format!("Expected a type, found {}.", token.kind),
        location,
    )
    .with_span_len(width)
    .with_fix("Start the declaration with a type such as integer or String."))
}

/// Resolve a type at the stream position, including an optional `[]`
/// array suffix.
pub fn resolve_type(stream: &mut TokenStream<'_>, file: &str) -> Result<TypeSymbol, Diagnostic> {
    let Some(token) = stream.peek() else {
        return Err(Diagnostic::new(
            Category::Syntax,
            "Expected a type, found end of input.",
            SourceLocation::new(file, 1, 0),
        )
        .with_fix("Start the declaration with a type such as integer or String."));
    };
    let symbol = resolve_type_token(token, file)?;
    stream.advance();

    if stream.eat(TokenKind::LBracket) {
        stream.expect(TokenKind::RBracket, file)?;
        if let TypeSymbol::Primitive(ty) = symbol {
            return Ok(TypeSymbol::Array(ty));
        }
    }
    Ok(symbol)
}

fn token_width(token: &Token) -> usize {
    match token.kind.spelling() {
        Some(text) => text.chars().count(),
        None => token.text().chars().count().max(1),
    }
}

/// A built-in type whose name differs from `name` only in case.
fn builtin_named(name: &str) -> Option<Type> {
    [
        Type::Integer,
        Type::Double,
        Type::Boolean,
        Type::Character,
        Type::String,
        Type::Void,
    ]
    .into_iter()
    .find(|ty| ty.name().eq_ignore_ascii_case(name))
}

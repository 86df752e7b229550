//! Command handlers for the `kc` CLI.
//!
//! Each submodule implements one command. Shared helpers for reading
//! sources and choosing a render mode live here in the module root.

use std::path::Path;

use klang_diagnostic::{Environment, RenderMode};

use crate::CliError;

mod explain;
mod lex;

pub use explain::explain_error;
pub use lex::lex_file;

/// Extension of Klang source files.
pub const SOURCE_EXTENSION: &str = "k";

/// Read a Klang source file, rejecting anything without a `.k` extension.
pub(crate) fn read_source(path: &str, command: &'static str) -> Result<String, CliError> {
    let is_source = Path::new(path)
        .extension()
        .is_some_and(|ext| ext == SOURCE_EXTENSION);
    if !is_source {
        return Err(CliError::InvalidFileType {
            path: path.to_owned(),
            command,
        });
    }

    std::fs::read_to_string(path).map_err(|e| {
        let path = path.to_owned();
        match e.kind() {
            std::io::ErrorKind::NotFound => CliError::NotFound { path },
            std::io::ErrorKind::PermissionDenied => CliError::PermissionDenied { path },
            std::io::ErrorKind::InvalidData => CliError::InvalidUtf8 { path },
            _ => CliError::Read { path, source: e },
        }
    })
}

/// Pick the render mode for diagnostics.
///
/// An explicit `--color=<mode>` flag wins over `KLANG_COLOR`; `Auto` is
/// then resolved against `env`.
pub fn resolve_render_mode(
    flag: Option<&str>,
    env_value: Option<&str>,
    env: &Environment,
) -> Result<RenderMode, CliError> {
    let mode = match flag.or(env_value) {
        Some(value) => value
            .parse::<RenderMode>()
            .map_err(|()| CliError::InvalidColorMode(value.to_owned()))?,
        None => RenderMode::Auto,
    };
    Ok(mode.resolve(env))
}

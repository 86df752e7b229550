//! Errors raised by `kc` commands and their stderr rendering.

use std::fmt::Write as _;
use std::io;

use klang_diagnostic::emitter::Color;
use klang_diagnostic::{render, Diagnostic, DiagnosticCode, RenderMode};

/// Everything a `kc` command can fail with.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// The source file has a lexical (or later) problem.
    #[error(transparent)]
    Diagnostic(Box<Diagnostic>),

    #[error("cannot find file '{path}'")]
    NotFound { path: String },

    #[error("permission denied reading '{path}'")]
    PermissionDenied { path: String },

    #[error("'{path}' contains invalid UTF-8 data")]
    InvalidUtf8 { path: String },

    #[error("error reading '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("'{path}' is not a Klang source file")]
    InvalidFileType { path: String, command: &'static str },

    #[error("unknown error code: {0}")]
    UnknownCode(String),

    #[error("no documentation available for {0}")]
    MissingDocs(DiagnosticCode),

    #[error("invalid color mode '{0}'")]
    InvalidColorMode(String),

    #[error("missing argument for `kc {command}`")]
    Usage {
        command: &'static str,
        usage: &'static str,
    },

    #[error("failed to write output: {0}")]
    Write(#[from] io::Error),
}

impl From<Diagnostic> for CliError {
    fn from(diagnostic: Diagnostic) -> Self {
        CliError::Diagnostic(Box::new(diagnostic))
    }
}

impl CliError {
    /// Render the failure for stderr.
    pub fn render(&self, mode: RenderMode) -> String {
        match self {
            CliError::Diagnostic(diagnostic) => render(diagnostic, mode),
            CliError::InvalidFileType { path, command } => {
                render_invalid_file_type(path, command, mode)
            }
            other => {
                let mut out = format!("{}: {other}\n", mode.paint("error", Color::Error));
                if let Some(hint) = other.hint() {
                    let _ = writeln!(out, "{}", mode.paint(&hint, Color::Help));
                }
                out
            }
        }
    }

    fn hint(&self) -> Option<String> {
        match self {
            CliError::UnknownCode(_) => {
                let codes: Vec<&str> = DiagnosticCode::ALL.iter().map(|c| c.as_str()).collect();
                Some(format!("Known codes: {}", codes.join(", ")))
            }
            CliError::InvalidColorMode(_) => {
                Some("Expected one of: auto, always, never, debug.".to_owned())
            }
            CliError::Usage { usage, .. } => Some(format!("Usage: {usage}")),
            _ => None,
        }
    }
}

fn render_invalid_file_type(path: &str, command: &str, mode: RenderMode) -> String {
    let structure = |text: &str| mode.paint(text, Color::Structure);
    let neutral = |text: &str| mode.paint(text, Color::Neutral);

    let mut out = String::new();
    let _ = writeln!(out, "{}", mode.paint("InvalidFileType", Color::Error));
    let _ = writeln!(out, "{}", structure("ERROR (Cli)"));
    let _ = writeln!(out, "{}", structure("at input file"));
    out.push('\n');
    let _ = writeln!(
        out,
        "{}{}{}",
        structure("The file '"),
        neutral(path),
        structure("' is not a Klang source file.")
    );
    for (title, body) in [
        ("Cause:", "Klang only processes files with the '.k' extension.".to_owned()),
        ("Fix:", "Rename the file or select a valid '.k' source.".to_owned()),
        ("Example:", format!("kc {command} program.k")),
    ] {
        let _ = write!(out, "\n{}\n  {}\n", structure(title), neutral(&body));
    }
    out
}

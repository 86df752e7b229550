//! Diagnostic Emitters
//!
//! Turns [`Diagnostic`] values into human-readable text. Coded diagnostics
//! that captured their source context get the full layout (header, context
//! window with caret, cause / fix / example / note); everything else gets
//! the compact annotated layout.

mod palette;
mod terminal;

pub use palette::{Color, Environment, RenderMode};
pub use terminal::TerminalEmitter;

use crate::Diagnostic;

/// Trait for emitting diagnostics in various formats.
pub trait DiagnosticEmitter {
    /// Emit a single diagnostic.
    fn emit(&mut self, diagnostic: &Diagnostic);

    /// Emit multiple diagnostics.
    fn emit_all(&mut self, diagnostics: &[Diagnostic]) {
        for diag in diagnostics {
            self.emit(diag);
        }
    }

    /// Flush any buffered output.
    fn flush(&mut self);

    /// Emit a summary of errors/warnings.
    fn emit_summary(&mut self, error_count: usize, warning_count: usize);
}

/// Render one diagnostic to a string in the given mode.
pub fn render(diagnostic: &Diagnostic, mode: RenderMode) -> String {
    if diagnostic.code.is_some() && !diagnostic.context.is_empty() {
        terminal::render_full(diagnostic, mode)
    } else {
        terminal::render_annotated(diagnostic, mode)
    }
}

/// Render without any escape sequences, for logs and files.
pub fn render_plain(diagnostic: &Diagnostic) -> String {
    render(diagnostic, RenderMode::Plain)
}

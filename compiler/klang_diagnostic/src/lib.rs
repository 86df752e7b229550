//! Diagnostic system for Klang error reporting.
//!
//! Every reportable problem is a [`Diagnostic`]: a plain value carrying
//! - a code for searchability (`E001`, bound to exactly one [`Phase`]),
//! - a cause (what went wrong) and a primary location (where),
//! - a fix, and optionally an example and a note (how to resolve it).
//!
//! Diagnostics are rendered through [`emitter::TerminalEmitter`] with an
//! explicit [`RenderMode`]; there is no process-wide color state.
//!
//! ```text
//! [K:E002] UnterminatedStringLiteral
//! ERROR (Lexical)
//! at main.k:3:11
//!
//! 2 | integer x = 1;
//! 3 | String s = "abc
//!   |            ^^^
//! ```

pub mod collector;
mod diagnostic;
pub mod emitter;
mod error_code;
pub mod errors;
pub mod source_lines;

pub use collector::{DiagnosticCollector, Policy};
pub use diagnostic::{Category, Diagnostic, Note, SourceLocation, Span};
pub use emitter::{
    render, render_plain, DiagnosticEmitter, Environment, RenderMode, TerminalEmitter,
};
pub use error_code::{DiagnosticCode, Phase};
pub use errors::ErrorDocs;
pub use source_lines::SourceLines;

//! Embedded error documentation for `kc explain` support.
//!
//! Each diagnostic code has a markdown file that explains the error, shows
//! an example, and provides a solution. These are embedded at compile time
//! and can be accessed via `ErrorDocs::get()`.
//!
//! # Adding New Documentation
//!
//! 1. Create a new file `EXXX.md` in this directory
//! 2. Add an entry to the `DOCS` array below

use crate::DiagnosticCode;

/// Registry of embedded error documentation.
pub struct ErrorDocs;

impl ErrorDocs {
    /// Get the documentation for a diagnostic code.
    ///
    /// # Example
    ///
    /// ```text
    /// if let Some(doc) = ErrorDocs::get(DiagnosticCode::E002) {
    ///     println!("{doc}");
    /// }
    /// ```
    pub fn get(code: DiagnosticCode) -> Option<&'static str> {
        DOCS.iter().find(|(c, _)| *c == code).map(|(_, doc)| *doc)
    }

    /// Get all documented codes.
    pub fn all_codes() -> impl Iterator<Item = DiagnosticCode> {
        DOCS.iter().map(|(code, _)| *code)
    }

    /// Check if a code has documentation.
    pub fn has_docs(code: DiagnosticCode) -> bool {
        DOCS.iter().any(|(c, _)| *c == code)
    }
}

static DOCS: &[(DiagnosticCode, &str)] = &[
    // Lexical (E0xx)
    (DiagnosticCode::E001, include_str!("E001.md")),
    (DiagnosticCode::E002, include_str!("E002.md")),
    (DiagnosticCode::E003, include_str!("E003.md")),
    (DiagnosticCode::E004, include_str!("E004.md")),
    (DiagnosticCode::E005, include_str!("E005.md")),
    // Syntax (E1xx)
    (DiagnosticCode::E101, include_str!("E101.md")),
    (DiagnosticCode::E102, include_str!("E102.md")),
    (DiagnosticCode::E103, include_str!("E103.md")),
    // Semantic (E2xx)
    (DiagnosticCode::E201, include_str!("E201.md")),
];

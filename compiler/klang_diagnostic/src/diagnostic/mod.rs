//! Core diagnostic types for structured error reporting.
//!
//! Defines [`Diagnostic`], [`SourceLocation`], [`Span`], [`Note`], and
//! [`Category`], the building blocks every compiler phase uses to report
//! problems. One diagnostic type serves both the phase-coded lexical reports
//! (cause / fix / example / note with captured context) and the looser
//! parser-facing reports (message, primary span, secondary spans, notes).

use std::fmt;

use crate::{DiagnosticCode, Phase};

/// Classification of a diagnostic, deciding whether it aborts a pass.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Category {
    Lexical,
    Syntax,
    Semantic,
    Type,
    Warning,
    Info,
}

impl Category {
    /// Lexical, syntax, semantic, and type problems stop compilation;
    /// warnings and infos never do.
    pub fn is_abort_worthy(self) -> bool {
        matches!(
            self,
            Category::Lexical | Category::Syntax | Category::Semantic | Category::Type
        )
    }

    /// Upper-case label used by the annotated report layout.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Lexical => "LEXICAL",
            Category::Syntax => "SYNTAX",
            Category::Semantic => "SEMANTIC",
            Category::Type => "TYPE",
            Category::Warning => "WARNING",
            Category::Info => "INFO",
        }
    }
}

impl From<Phase> for Category {
    fn from(phase: Phase) -> Self {
        match phase {
            Phase::Lexical => Category::Lexical,
            Phase::Syntax => Category::Syntax,
            Phase::Semantic => Category::Semantic,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The point where a diagnostic's caret is drawn.
///
/// `line` is 1-based, `column` is a 0-based character offset into the line.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct SourceLocation {
    pub file: String,
    pub line: u32,
    pub column: u32,
}

impl SourceLocation {
    pub fn new(file: impl Into<String>, line: u32, column: u32) -> Self {
        SourceLocation {
            file: file.into(),
            line,
            column,
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", display_file(&self.file), self.line, self.column)
    }
}

/// A source range. Lines and columns are 1-based on both ends.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Span {
    pub file: String,
    pub start_line: u32,
    pub start_column: u32,
    pub end_line: u32,
    pub end_column: u32,
}

impl Span {
    pub fn new(
        file: impl Into<String>,
        start_line: u32,
        start_column: u32,
        end_line: u32,
        end_column: u32,
    ) -> Self {
        Span {
            file: file.into(),
            start_line,
            start_column,
            end_line,
            end_column,
        }
    }

    /// A one-character span.
    pub fn point(file: impl Into<String>, line: u32, column: u32) -> Self {
        Self::new(file, line, column, line, column)
    }

    pub fn is_single_line(&self) -> bool {
        self.start_line == self.end_line
    }

    /// The caret position of the span's first character.
    pub fn start_location(&self) -> SourceLocation {
        SourceLocation::new(
            self.file.clone(),
            self.start_line,
            self.start_column.saturating_sub(1),
        )
    }

    /// Width in characters for a single-line span; `1` otherwise.
    pub fn width(&self) -> usize {
        if self.is_single_line() && self.end_column >= self.start_column {
            (self.end_column - self.start_column + 1) as usize
        } else {
            1
        }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}",
            display_file(&self.file),
            self.start_line,
            self.start_column
        )
    }
}

fn display_file(file: &str) -> &str {
    if file.is_empty() {
        "<input>"
    } else {
        file
    }
}

/// A note attached to a diagnostic, optionally pointing somewhere else.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Note {
    pub message: String,
    pub span: Option<Span>,
}

impl Note {
    pub fn new(message: impl Into<String>) -> Self {
        Note {
            message: message.into(),
            span: None,
        }
    }

    pub fn with_span(message: impl Into<String>, span: Span) -> Self {
        Note {
            message: message.into(),
            span: Some(span),
        }
    }
}

/// One detected problem.
///
/// Immutable once finalized; the builder methods below only append.
/// A diagnostic is data, not an unwinding error: passes return it in a
/// `Result` and the CLI renders it.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be reported or returned, not silently dropped"]
pub struct Diagnostic {
    /// Catalog code, for phase-coded diagnostics.
    pub code: Option<DiagnosticCode>,
    /// Classification; derived from the code's phase when a code is present.
    pub category: Category,
    /// The cause: what went wrong.
    pub message: String,
    /// Primary location (caret position).
    pub location: SourceLocation,
    /// Width of the offending text, in characters.
    pub span_len: usize,
    /// Source lines captured at detection time, error line last.
    /// Empty when the renderer should fetch the line itself.
    pub context: Vec<String>,
    /// How to fix it.
    pub fix: Option<String>,
    /// Example of valid code.
    pub example: Option<String>,
    /// Free-form note shown after the example.
    pub note: Option<String>,
    /// Related locations.
    pub secondary: Vec<Span>,
    /// Annotations, each optionally pointing at a span.
    pub notes: Vec<Note>,
}

impl Diagnostic {
    /// Create a diagnostic with an explicit category and no code.
    #[cold]
    pub fn new(category: Category, message: impl Into<String>, location: SourceLocation) -> Self {
        Diagnostic {
            code: None,
            category,
            message: message.into(),
            location,
            span_len: 1,
            context: Vec::new(),
            fix: None,
            example: None,
            note: None,
            secondary: Vec::new(),
            notes: Vec::new(),
        }
    }

    /// Create a phase-coded diagnostic; its category follows the code's phase.
    #[cold]
    pub fn coded(code: DiagnosticCode, location: SourceLocation, cause: impl Into<String>) -> Self {
        let mut diag = Self::new(code.phase().into(), cause, location);
        diag.code = Some(code);
        diag
    }

    /// Attach the source lines around the error (error line last).
    pub fn with_context(mut self, lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.context = lines.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_fix(mut self, fix: impl Into<String>) -> Self {
        self.fix = Some(fix.into());
        self
    }

    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        self.example = Some(example.into());
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Set the width of the offending text. Zero is widened to one.
    pub fn with_span_len(mut self, len: usize) -> Self {
        self.span_len = len.max(1);
        self
    }

    /// Add a related location.
    pub fn with_secondary_span(mut self, span: Span) -> Self {
        self.secondary.push(span);
        self
    }

    /// Add an annotation.
    pub fn with_annotation(mut self, note: Note) -> Self {
        self.notes.push(note);
        self
    }

    /// The primary location as a single-line span.
    pub fn primary_span(&self) -> Span {
        let start = self.location.column + 1;
        let width = u32::try_from(self.span_len).unwrap_or(u32::MAX);
        Span::new(
            self.location.file.clone(),
            self.location.line,
            start,
            self.location.line,
            start.saturating_add(width.saturating_sub(1)),
        )
    }

    /// The compiler phase, when the diagnostic carries a code.
    pub fn phase(&self) -> Option<Phase> {
        self.code.map(DiagnosticCode::phase)
    }

    /// Check if this diagnostic stops compilation.
    pub fn is_error(&self) -> bool {
        self.category.is_abort_worthy()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "[K:{code}] {}: {}", code.name(), self.message)?,
            None => write!(f, "{} ERROR: {}", self.category, self.message)?,
        }
        write!(f, " (at {})", self.location)
    }
}

impl std::error::Error for Diagnostic {}

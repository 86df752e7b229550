//! Lexical failures, before they are anchored in the source.
//!
//! Each factory fills in WHAT went wrong (code and cause) and HOW to fix it
//! (fix, example, note). The lexer adds WHERE (location and context lines)
//! when it converts the error into a [`Diagnostic`].

use klang_diagnostic::{Diagnostic, DiagnosticCode, SourceLocation};

/// A lexical failure awaiting a location.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub(crate) struct LexError {
    code: DiagnosticCode,
    cause: String,
    fix: String,
    example: Option<String>,
    note: Option<String>,
    span_len: usize,
}

impl LexError {
    fn new(code: DiagnosticCode, cause: impl Into<String>, fix: impl Into<String>) -> Self {
        LexError {
            code,
            cause: cause.into(),
            fix: fix.into(),
            example: None,
            note: None,
            span_len: 1,
        }
    }

    fn example(mut self, example: impl Into<String>) -> Self {
        self.example = Some(example.into());
        self
    }

    fn note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    fn span_len(mut self, len: usize) -> Self {
        self.span_len = len;
        self
    }

    pub(crate) fn code(&self) -> DiagnosticCode {
        self.code
    }

    /// Anchor the failure at `location` with the captured `context` lines.
    pub(crate) fn into_diagnostic(self, location: SourceLocation, context: &[String]) -> Diagnostic {
        let mut diag = Diagnostic::coded(self.code, location, self.cause)
            .with_context(context.iter().cloned())
            .with_fix(self.fix)
            .with_span_len(self.span_len);
        if let Some(example) = self.example {
            diag = diag.with_example(example);
        }
        if let Some(note) = self.note {
            diag = diag.with_note(note);
        }
        diag
    }

    // Characters

    #[cold]
    pub(crate) fn lone_dollar() -> Self {
        Self::new(
            DiagnosticCode::E001,
            "The character '$' cannot start an identifier alone.",
            "Identifiers starting with '$' must contain a letter or underscore.",
        )
        .example("integer $variableName = 10;")
    }

    /// A run of `&` or `|` that is not exactly two long.
    #[cold]
    pub(crate) fn bare_logical_operator(c: char, run: usize) -> Self {
        let found: String = std::iter::repeat(c).take(run).collect();
        let cause = if run == 1 {
            format!("Character '{found}' is not valid alone.")
        } else {
            format!("Character sequence '{found}' is not valid.")
        };
        let (fix, example) = if c == '&' {
            (
                "Use '&&' for logical AND.",
                "if (firstCondition && secondCondition) {\n    println(\"Both conditions hold.\");\n}",
            )
        } else {
            (
                "Use '||' for logical OR.",
                "if (firstCondition || secondCondition) {\n    println(\"At least one condition holds.\");\n}",
            )
        };
        Self::new(DiagnosticCode::E001, cause, fix)
            .example(example)
            .note("Klang has no bitwise operators.")
            .span_len(run)
    }

    #[cold]
    pub(crate) fn invalid_character(c: char) -> Self {
        Self::new(
            DiagnosticCode::E001,
            format!("Character '{}' is not valid in Klang.", c.escape_debug()),
            "Remove or replace it.",
        )
    }

    // Strings

    #[cold]
    pub(crate) fn string_line_break(partial: &str) -> Self {
        Self::new(
            DiagnosticCode::E002,
            "String literal cannot span multiple lines.",
            "Close the string before the line break, or write the break as '\\n'.",
        )
        .example(quoted(partial))
        .span_len(partial.chars().count())
    }

    #[cold]
    pub(crate) fn unterminated_string(partial: &str) -> Self {
        Self::new(
            DiagnosticCode::E002,
            "Unclosed string literal.",
            "Add a closing double quote (\").",
        )
        .example(quoted(partial))
        .span_len(partial.chars().count())
    }

    #[cold]
    pub(crate) fn invalid_string_escape(escaped: char, partial: &str) -> Self {
        Self::new(
            DiagnosticCode::E003,
            format!("Invalid escape sequence: \\{}", escaped.escape_debug()),
            "Use a valid escape: \\n, \\t, \\\" or \\\\.",
        )
        .example(quoted(partial))
        .span_len(partial.chars().count())
    }

    // Character literals

    #[cold]
    pub(crate) fn empty_char() -> Self {
        Self::new(
            DiagnosticCode::E004,
            "Empty character literal.",
            "Put exactly one character between the quotes.",
        )
        .example("'a'")
    }

    #[cold]
    pub(crate) fn unterminated_char() -> Self {
        Self::new(
            DiagnosticCode::E004,
            "Unclosed character literal.",
            "Add a closing single quote (').",
        )
        .example("'a'")
    }

    #[cold]
    pub(crate) fn invalid_char_escape(escaped: char) -> Self {
        Self::new(
            DiagnosticCode::E003,
            format!(
                "Invalid escape in character literal: \\{}",
                escaped.escape_debug()
            ),
            "Use a valid escape: \\n, \\t, \\' or \\\\.",
        )
        .example("'\\n'")
    }

    /// `extra` characters sit between the first character and the closing quote.
    #[cold]
    pub(crate) fn multi_char(extra: usize) -> Self {
        Self::new(
            DiagnosticCode::E103,
            "A character literal may only contain one character.",
            "Keep a single character, or use a String for text.",
        )
        .example("character c = 'a';\nString s = \"ab\";")
        .span_len(extra)
    }

    // Numbers

    #[cold]
    pub(crate) fn number_suffix(suffix: &str) -> Self {
        Self::new(
            DiagnosticCode::E101,
            format!("Invalid numeric literal: a number cannot be followed by '{suffix}'."),
            "Separate the number from the name, or start the identifier with a letter.",
        )
        .example("integer count = 123;")
        .note("Identifiers cannot start with a digit.")
        .span_len(suffix.chars().count())
    }

    // Comments

    #[cold]
    pub(crate) fn unterminated_block_comment() -> Self {
        Self::new(
            DiagnosticCode::E005,
            "Unclosed block comment.",
            "Add '*/' to close the comment.",
        )
        .example("/* comment */")
        .span_len(2)
    }
}

fn quoted(partial: &str) -> String {
    format!("\"{}\"", partial.trim())
}

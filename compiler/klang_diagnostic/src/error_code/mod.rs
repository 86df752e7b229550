//! Diagnostic codes for all compiler diagnostics.
//!
//! Each code is a unique identifier (e.g., `E002`) bound to exactly one
//! compiler [`Phase`] and a display name. Used in report headers and for
//! `kc explain` lookups.

use std::fmt;

/// Compiler phase that can produce a coded diagnostic.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Phase {
    Lexical,
    Syntax,
    Semantic,
}

impl Phase {
    /// Capitalized phase label used in report headers (`ERROR (Lexical)`).
    pub fn label(self) -> &'static str {
        match self {
            Phase::Lexical => "Lexical",
            Phase::Syntax => "Syntax",
            Phase::Semantic => "Semantic",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Diagnostic codes.
///
/// Format: E### where the first digit indicates the phase:
/// - E0xx: Lexical errors
/// - E1xx: Syntax errors
/// - E2xx: Semantic errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum DiagnosticCode {
    // Lexical (E0xx)
    /// Character that cannot appear in source (`#`, lone `&`, lone `$`)
    E001,
    /// String literal without a closing `"`
    E002,
    /// Invalid escape sequence in a string or character literal
    E003,
    /// Unterminated or empty character literal
    E004,
    /// Block comment without a closing `*/`
    E005,

    // Syntax (E1xx)
    /// Numeric literal followed by letters
    E101,
    /// Statement not terminated by `;`
    E102,
    /// Character literal holding more than one character
    E103,

    // Semantic (E2xx)
    /// Identifier used where a type name is expected
    E201,
}

impl DiagnosticCode {
    /// Every code, in catalog order.
    pub const ALL: &'static [DiagnosticCode] = &[
        DiagnosticCode::E001,
        DiagnosticCode::E002,
        DiagnosticCode::E003,
        DiagnosticCode::E004,
        DiagnosticCode::E005,
        DiagnosticCode::E101,
        DiagnosticCode::E102,
        DiagnosticCode::E103,
        DiagnosticCode::E201,
    ];

    /// The code as a string (e.g., `"E101"`).
    pub fn as_str(self) -> &'static str {
        match self {
            DiagnosticCode::E001 => "E001",
            DiagnosticCode::E002 => "E002",
            DiagnosticCode::E003 => "E003",
            DiagnosticCode::E004 => "E004",
            DiagnosticCode::E005 => "E005",
            DiagnosticCode::E101 => "E101",
            DiagnosticCode::E102 => "E102",
            DiagnosticCode::E103 => "E103",
            DiagnosticCode::E201 => "E201",
        }
    }

    /// Human-readable category name shown next to the code.
    pub fn name(self) -> &'static str {
        match self {
            DiagnosticCode::E001 | DiagnosticCode::E003 | DiagnosticCode::E004 => {
                "InvalidCharacter"
            }
            DiagnosticCode::E002 => "UnterminatedStringLiteral",
            DiagnosticCode::E005 => "UnterminatedBlockComment",
            DiagnosticCode::E101 => "InvalidNumber",
            DiagnosticCode::E102 => "MissingStatementTerminator",
            DiagnosticCode::E103 => "MultiCharacterOfTypeCharacter",
            DiagnosticCode::E201 => "UnknownTypeIdentifier",
        }
    }

    /// The phase that produces this code.
    pub fn phase(self) -> Phase {
        match self {
            DiagnosticCode::E001
            | DiagnosticCode::E002
            | DiagnosticCode::E003
            | DiagnosticCode::E004
            | DiagnosticCode::E005 => Phase::Lexical,
            DiagnosticCode::E101 | DiagnosticCode::E102 | DiagnosticCode::E103 => Phase::Syntax,
            DiagnosticCode::E201 => Phase::Semantic,
        }
    }

    /// Check if this is a lexical error (E0xx range).
    pub fn is_lexical(self) -> bool {
        self.phase() == Phase::Lexical
    }

    /// Check if this is a syntax error (E1xx range).
    pub fn is_syntax(self) -> bool {
        self.phase() == Phase::Syntax
    }

    /// Check if this is a semantic error (E2xx range).
    pub fn is_semantic(self) -> bool {
        self.phase() == Phase::Semantic
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse a code string like `"E002"`.
///
/// Case-insensitive. Derived from [`DiagnosticCode::ALL`], so new codes are
/// picked up without touching this impl.
impl std::str::FromStr for DiagnosticCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper)
            .copied()
            .ok_or(())
    }
}

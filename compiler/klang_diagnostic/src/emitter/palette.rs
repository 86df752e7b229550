//! Render modes and the diagnostic color palette.
//!
//! Colors are keyed to semantic roles rather than decoration: neutral code
//! text, structural metadata, error focus, and help text. A second,
//! 8-color set tints the annotated layout by [`Category`].
//!
//! The mode is a plain value handed to every render call, so two renders
//! with different modes can never observe each other.

use std::str::FromStr;

use crate::Category;

const RESET: &str = "\x1b[0m";

/// How diagnostics are turned into text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RenderMode {
    /// Detect from the environment; renders as [`Rich`](Self::Rich) if
    /// used without resolving first.
    #[default]
    Auto,
    /// 24-bit ANSI escapes.
    Rich,
    /// No escapes at all.
    Plain,
    /// `[COLOR:<role>]text[/COLOR]` markers, for snapshot tests.
    Debug,
}

impl RenderMode {
    /// Turn `Auto` into `Rich` or `Plain`. Other modes are returned as-is.
    pub fn resolve(self, env: &Environment) -> RenderMode {
        match self {
            RenderMode::Auto if env.supports_color() => RenderMode::Rich,
            RenderMode::Auto => RenderMode::Plain,
            other => other,
        }
    }

    /// Apply `color` to `text` according to this mode.
    pub fn paint(self, text: &str, color: Color) -> String {
        match self {
            RenderMode::Plain => text.to_owned(),
            RenderMode::Debug => format!("[COLOR:{}]{text}[/COLOR]", color.name()),
            RenderMode::Rich | RenderMode::Auto => format!("{}{text}{RESET}", color.escape()),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RenderMode::Auto => "auto",
            RenderMode::Rich => "rich",
            RenderMode::Plain => "plain",
            RenderMode::Debug => "debug",
        }
    }
}

/// Parse a mode name as accepted by `--color=` and `KLANG_COLOR`.
///
/// `always` and `never` are aliases for `rich` and `plain`.
impl FromStr for RenderMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(RenderMode::Auto),
            "always" | "rich" => Ok(RenderMode::Rich),
            "never" | "plain" => Ok(RenderMode::Plain),
            "debug" => Ok(RenderMode::Debug),
            _ => Err(()),
        }
    }
}

/// Snapshot of the process environment that decides `Auto` rendering.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Environment {
    /// `NO_COLOR` is set (any value).
    pub no_color: bool,
    /// Value of `TERM`.
    pub term: Option<String>,
    /// `WT_SESSION` is set (Windows Terminal).
    pub wt_session: bool,
    pub windows: bool,
    /// The diagnostic stream is a terminal.
    pub is_tty: bool,
}

impl Environment {
    /// Read the current process environment.
    ///
    /// `is_tty` comes from the caller, which knows which stream it writes to.
    pub fn capture(is_tty: bool) -> Self {
        Environment {
            no_color: std::env::var_os("NO_COLOR").is_some(),
            term: std::env::var("TERM").ok(),
            wt_session: std::env::var_os("WT_SESSION").is_some(),
            windows: cfg!(windows),
            is_tty,
        }
    }

    pub fn supports_color(&self) -> bool {
        if self.no_color || !self.is_tty {
            return false;
        }
        if self.windows {
            return self.wt_session;
        }
        self.term.as_deref().is_some_and(|term| {
            term.contains("color")
                || term.contains("xterm")
                || term.contains("screen")
                || term == "linux"
        })
    }
}

/// Foreground color roles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    /// Code text, examples, general content.
    Neutral,
    /// Metadata: code brackets, `at file:line:col`, line numbers.
    Structure,
    /// Pipes and colons.
    Separator,
    /// Error name, caret.
    Error,
    ErrorDim,
    /// `Fix:` and `Example:` text.
    Help,
    HelpAccent,
    // Legacy 8-color set (bold), one per category.
    Red,
    Yellow,
    Magenta,
    Cyan,
}

impl Color {
    /// Color used for a category header in the annotated layout.
    pub fn for_category(category: Category) -> Color {
        match category {
            Category::Lexical => Color::Red,
            Category::Syntax | Category::Warning => Color::Yellow,
            Category::Semantic => Color::Magenta,
            Category::Type | Category::Info => Color::Cyan,
        }
    }

    fn escape(self) -> &'static str {
        match self {
            Color::Neutral => "\x1b[38;2;220;220;220m",
            Color::Structure => "\x1b[38;2;150;150;150m",
            Color::Separator => "\x1b[38;2;100;100;100m",
            Color::Error => "\x1b[38;2;220;50;47m",
            Color::ErrorDim => "\x1b[38;2;180;80;77m",
            Color::Help => "\x1b[38;2;100;150;200m",
            Color::HelpAccent => "\x1b[38;2;120;180;220m",
            Color::Red => "\x1b[1;31m",
            Color::Yellow => "\x1b[1;33m",
            Color::Magenta => "\x1b[1;35m",
            Color::Cyan => "\x1b[1;36m",
        }
    }

    /// Role name used by [`RenderMode::Debug`] markers.
    pub fn name(self) -> &'static str {
        match self {
            Color::Neutral => "neutral",
            Color::Structure => "structure",
            Color::Separator => "separator",
            Color::Error => "error",
            Color::ErrorDim => "error_dim",
            Color::Help => "help",
            Color::HelpAccent => "help_accent",
            Color::Red => "red",
            Color::Yellow => "yellow",
            Color::Magenta => "magenta",
            Color::Cyan => "cyan",
        }
    }
}

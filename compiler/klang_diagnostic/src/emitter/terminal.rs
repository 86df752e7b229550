//! Terminal Emitter
//!
//! Human-readable diagnostic output in one of the [`RenderMode`]s.

use std::fmt::Write as _;
use std::io::{self, Write};

use crate::{Diagnostic, DiagnosticCode, Phase};

use super::{render, Color, DiagnosticEmitter, RenderMode};

/// Returns "s" for plural counts, "" for singular.
#[inline]
fn plural_s(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

/// Terminal emitter writing rendered diagnostics to `W`.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    mode: RenderMode,
}

impl<W: Write> TerminalEmitter<W> {
    /// Create an emitter. `Auto` should be resolved by the caller first;
    /// an unresolved `Auto` renders with colors.
    pub fn new(writer: W, mode: RenderMode) -> Self {
        TerminalEmitter { writer, mode }
    }

    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    /// Recover the writer, e.g. a buffer in tests.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl TerminalEmitter<io::Stderr> {
    /// Create a terminal emitter for stderr.
    pub fn stderr(mode: RenderMode) -> Self {
        TerminalEmitter::new(io::stderr(), mode)
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        let text = render(diagnostic, self.mode);
        let _ = self.writer.write_all(text.as_bytes());
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn emit_summary(&mut self, error_count: usize, warning_count: usize) {
        if error_count == 0 && warning_count == 0 {
            return;
        }

        if error_count > 0 {
            let prefix = self.mode.paint("error", Color::Error);
            let error_part = if error_count == 1 {
                "previous error".to_string()
            } else {
                format!("{error_count} previous errors")
            };

            if warning_count > 0 {
                let _ = writeln!(
                    self.writer,
                    "{prefix}: aborting due to {error_part}; {} warning{} emitted",
                    warning_count,
                    plural_s(warning_count)
                );
            } else {
                let _ = writeln!(self.writer, "{prefix}: aborting due to {error_part}");
            }
        } else {
            let prefix = self.mode.paint("warning", Color::Yellow);
            let _ = writeln!(
                self.writer,
                "{prefix}: {} warning{} emitted",
                warning_count,
                plural_s(warning_count)
            );
        }
    }
}

fn generic_fix(code: Option<DiagnosticCode>) -> String {
    match code {
        Some(code) => format!("Run `kc explain {code}` for details on this error."),
        None => "Review the code at the reported location.".to_string(),
    }
}

/// Caret line body: the line prefix up to `column` with tabs kept (so the
/// caret lines up under tab-indented code), then the carets.
fn caret_prefix(line: &str, column: usize) -> String {
    let mut prefix: String = line
        .chars()
        .take(column)
        .map(|c| if c == '\t' { '\t' } else { ' ' })
        .collect();
    let pad = column.saturating_sub(prefix.chars().count());
    prefix.extend(std::iter::repeat(' ').take(pad));
    prefix
}

fn caret_count(line: &str, column: usize, span_len: usize) -> usize {
    let remaining = line.chars().count().saturating_sub(column);
    span_len.min(remaining).max(1)
}

/// Full layout for a coded diagnostic with captured context:
///
/// ```text
/// [K:E002] UnterminatedStringLiteral
/// ERROR (Lexical)
/// at main.k:1:11
///
/// 1 | String s = "abc
///   |            ^^^
///
/// Cause:
///   ...
/// ```
pub(super) fn render_full(diag: &Diagnostic, mode: RenderMode) -> String {
    let mut out = String::new();
    let loc = &diag.location;
    let phase = diag.phase().map_or(diag.category.as_str(), Phase::label);

    if let Some(code) = diag.code {
        let _ = writeln!(
            out,
            "{}{}{}{}",
            mode.paint("[K:", Color::Structure),
            mode.paint(code.as_str(), Color::Error),
            mode.paint("] ", Color::Structure),
            mode.paint(code.name(), Color::Error),
        );
    }
    let _ = writeln!(out, "{}", mode.paint(&format!("ERROR ({phase})"), Color::Structure));
    let _ = writeln!(
        out,
        "{}{}{}{}{}{}",
        mode.paint("at ", Color::Structure),
        mode.paint(&loc.file, Color::Neutral),
        mode.paint(":", Color::Separator),
        mode.paint(&loc.line.to_string(), Color::Structure),
        mode.paint(":", Color::Separator),
        mode.paint(&loc.column.to_string(), Color::Structure),
    );
    out.push('\n');

    let error_line = loc.line as usize;
    let width = error_line.to_string().len();
    let first = (error_line + 1).saturating_sub(diag.context.len());
    let column = loc.column as usize;

    for (i, text) in diag.context.iter().enumerate() {
        let number = first + i;
        let _ = writeln!(
            out,
            "{}{}{}",
            mode.paint(&format!("{number:>width$}"), Color::Structure),
            mode.paint(" | ", Color::Separator),
            mode.paint(text, Color::Neutral),
        );
        if number == error_line {
            let carets = "^".repeat(caret_count(text, column, diag.span_len));
            let _ = writeln!(
                out,
                "{}{}{}{}",
                " ".repeat(width),
                mode.paint(" | ", Color::Separator),
                caret_prefix(text, column),
                mode.paint(&carets, Color::Error),
            );
        }
    }

    push_section(&mut out, mode, "Cause:", Color::Structure, &diag.message, Color::Neutral);
    let fix = diag.fix.clone().unwrap_or_else(|| generic_fix(diag.code));
    push_section(&mut out, mode, "Fix:", Color::Help, &fix, Color::Help);
    if let Some(example) = &diag.example {
        push_section(&mut out, mode, "Example:", Color::Help, example, Color::HelpAccent);
    }
    if let Some(note) = &diag.note {
        push_section(&mut out, mode, "Note:", Color::Structure, note, Color::Neutral);
    }
    out
}

/// A blank line, a colored title, then `body` indented by two spaces
/// (every line of it).
fn push_section(
    out: &mut String,
    mode: RenderMode,
    title: &str,
    title_color: Color,
    body: &str,
    body_color: Color,
) {
    out.push('\n');
    let _ = writeln!(out, "{}", mode.paint(title, title_color));
    for line in body.lines() {
        let _ = writeln!(out, "  {}", mode.paint(line, body_color));
    }
}

/// Annotated layout for everything else:
///
/// ```text
/// SYNTAX ERROR: expected `;`
/// --> main.k:3:14
///
///  3 | integer x = 1
///                   ^
///  note: referenced at main.k:1:1
///  fix: Review the code at the reported location.
/// ```
pub(super) fn render_annotated(diag: &Diagnostic, mode: RenderMode) -> String {
    let mut out = String::from("\n");
    let label = if diag.category.is_abort_worthy() {
        format!("{} ERROR", diag.category)
    } else {
        diag.category.as_str().to_string()
    };
    let _ = writeln!(
        out,
        "{}: {}",
        mode.paint(&label, Color::for_category(diag.category)),
        diag.message
    );

    let span = diag.primary_span();
    let _ = writeln!(out, "--> {span}");
    out.push('\n');

    let line_text = match diag.context.last() {
        Some(line) => line.clone(),
        None => read_line(&span.file, span.start_line as usize),
    };
    let number = span.start_line.to_string();
    let _ = writeln!(out, " {number} | {line_text}");
    let offset = number.len() + 4 + diag.location.column as usize;
    let _ = writeln!(
        out,
        "{}{}",
        " ".repeat(offset),
        mode.paint("^", Color::for_category(diag.category))
    );

    for secondary in &diag.secondary {
        let _ = writeln!(out, " note: referenced at {secondary}");
    }
    for note in &diag.notes {
        match &note.span {
            Some(at) => {
                let _ = writeln!(out, " note: {} --> {at}", note.message);
            }
            None => {
                let _ = writeln!(out, " note: {}", note.message);
            }
        }
    }
    if diag.category.is_abort_worthy() || diag.fix.is_some() {
        let fix = diag.fix.clone().unwrap_or_else(|| generic_fix(diag.code));
        let _ = writeln!(out, " {}: {fix}", mode.paint("fix", Color::Help));
    }
    out.push('\n');
    out
}

/// Fetch one line from disk; an unreadable file or missing line yields an
/// empty string.
fn read_line(path: &str, line: usize) -> String {
    if path.is_empty() {
        return String::new();
    }
    match std::fs::read_to_string(path) {
        Ok(source) => line
            .checked_sub(1)
            .and_then(|idx| source.lines().nth(idx))
            .unwrap_or_default()
            .to_string(),
        Err(err) => {
            tracing::debug!(path, %err, "could not re-read source for diagnostic");
            String::new()
        }
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;

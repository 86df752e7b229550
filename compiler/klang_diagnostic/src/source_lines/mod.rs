//! Line index over a source buffer, used to capture diagnostic context.

/// Source text split into lines.
///
/// Splits on `\n` and keeps trailing empty segments, so `"a\n"` has two
/// lines. Carriage returns are left in place; the renderer prints lines
/// verbatim.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct SourceLines {
    lines: Vec<String>,
}

impl SourceLines {
    pub fn new(source: &str) -> Self {
        SourceLines {
            lines: source.split('\n').map(str::to_owned).collect(),
        }
    }

    /// Number of lines; at least one, even for empty input.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// The 1-based line `n`, if it exists.
    pub fn line(&self, n: usize) -> Option<&str> {
        n.checked_sub(1)
            .and_then(|idx| self.lines.get(idx))
            .map(String::as_str)
    }

    /// Up to `lines_before` lines preceding `error_line`, followed by
    /// `error_line` itself (always last). Clipped at the start of the file.
    ///
    /// `error_line` must name an existing line; callers pass the line they
    /// are reporting. Out-of-range values are clamped in release builds.
    pub fn context_lines(&self, error_line: usize, lines_before: usize) -> &[String] {
        debug_assert!(
            (1..=self.lines.len()).contains(&error_line),
            "error line {error_line} outside 1..={}",
            self.lines.len()
        );
        let end = error_line.clamp(1, self.lines.len());
        let start = end.saturating_sub(lines_before + 1);
        &self.lines[start..end]
    }
}

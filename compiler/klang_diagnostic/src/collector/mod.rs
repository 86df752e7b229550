//! Diagnostic collector for passes that gather several problems before
//! deciding whether to abort.
//!
//! The tokenizer never uses this: it stops at its first failure. Parser-side
//! passes report through a collector whose [`Policy`] decides between
//! stopping at the first abort-worthy diagnostic and accumulating everything.

use crate::{Category, Diagnostic};

/// What a collector does when an abort-worthy diagnostic arrives.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Policy {
    /// Hand the first abort-worthy diagnostic straight back to the caller.
    FailFast,
    /// Keep going; the caller decides in [`DiagnosticCollector::finish`].
    #[default]
    Collect,
}

/// Ordered store of reported diagnostics.
///
/// # Example
///
/// ```text
/// let mut collector = DiagnosticCollector::new(Policy::Collect);
/// collector.report(diagnostic)?;
/// // ... report more
/// let warnings = collector.finish()?;
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
    error_count: usize,
    policy: Policy,
}

impl DiagnosticCollector {
    pub fn new(policy: Policy) -> Self {
        DiagnosticCollector {
            diagnostics: Vec::new(),
            error_count: 0,
            policy,
        }
    }

    pub fn policy(&self) -> Policy {
        self.policy
    }

    /// Record a diagnostic.
    ///
    /// Under [`Policy::FailFast`] an abort-worthy diagnostic is returned as
    /// `Err` (and also kept, so [`all`](Self::all) still sees it).
    pub fn report(&mut self, diagnostic: Diagnostic) -> Result<(), Diagnostic> {
        let is_error = diagnostic.is_error();
        tracing::debug!(
            category = %diagnostic.category,
            code = ?diagnostic.code,
            location = %diagnostic.location,
            "diagnostic reported"
        );
        if is_error {
            self.error_count += 1;
        }
        if is_error && self.policy == Policy::FailFast {
            self.diagnostics.push(diagnostic.clone());
            return Err(diagnostic);
        }
        self.diagnostics.push(diagnostic);
        Ok(())
    }

    /// Check if any abort-worthy diagnostic was reported.
    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }

    /// All diagnostics, in report order.
    pub fn all(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.error_count
    }

    /// Warnings only; `Info` entries are neither errors nor warnings.
    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.category == Category::Warning)
            .count()
    }

    /// Close the collector.
    ///
    /// The first-reported abort-worthy diagnostic wins and becomes the `Err`;
    /// with none, the (non-fatal) diagnostics are returned.
    pub fn finish(self) -> Result<Vec<Diagnostic>, Diagnostic> {
        if !self.has_errors() {
            return Ok(self.diagnostics);
        }
        match self.diagnostics.into_iter().find(Diagnostic::is_error) {
            Some(first) => Err(first),
            None => Ok(Vec::new()),
        }
    }
}

//! Lexical scopes of declared names.
//!
//! The outermost scope always exists; `pop_scope` never removes it.

use klang_diagnostic::{Category, Diagnostic, Note, Span};
use rustc_hash::FxHashMap;

use crate::TypeSymbol;

#[derive(Clone, Debug)]
struct Binding {
    symbol: TypeSymbol,
    declared_at: Span,
}

/// Stack of scopes mapping names to their declared types.
#[derive(Clone, Debug)]
pub struct TypeContext {
    scopes: Vec<FxHashMap<String, Binding>>,
}

impl Default for TypeContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeContext {
    /// A context holding only the outermost scope.
    pub fn new() -> Self {
        TypeContext {
            scopes: vec![FxHashMap::default()],
        }
    }

    /// Number of open scopes, including the outermost one.
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    pub fn push_scope(&mut self) {
        self.scopes.push(FxHashMap::default());
    }

    /// Close the innermost scope. Returns `false` when only the outermost
    /// scope is left.
    pub fn pop_scope(&mut self) -> bool {
        if self.scopes.len() > 1 {
            self.scopes.pop();
            true
        } else {
            false
        }
    }

    /// Declare `name` in the innermost scope.
    ///
    /// Shadowing a name from an enclosing scope is allowed; declaring it
    /// twice in the same scope is not.
    pub fn declare(
        &mut self,
        name: impl Into<String>,
        symbol: TypeSymbol,
        span: Span,
    ) -> Result<(), Diagnostic> {
        let name = name.into();
        let depth = self.scopes.len();
        let Some(scope) = self.scopes.last_mut() else {
            return Ok(());
        };
        if let Some(previous) = scope.get(&name) {
            return Err(Diagnostic::new(
                Category::Semantic,
                format!("Variable '{name}' is already declared in this scope."),
                span.start_location(),
            )
            .with_span_len(span.width())
            .with_fix("Rename one of the variables, or assign to the existing one without redeclaring it.")
            .with_annotation(Note::with_span(
                format!("'{name}' was first declared as {}", previous.symbol),
                previous.declared_at.clone(),
            )));
        }
        tracing::trace!(%name, %symbol, depth, "declare");
        scope.insert(
            name,
            Binding {
                symbol,
                declared_at: span,
            },
        );
        Ok(())
    }

    /// Find the type of `name`, innermost scope first. `span` is the use site.
    pub fn resolve(&self, name: &str, span: &Span) -> Result<&TypeSymbol, Diagnostic> {
        self.lookup(name).map(|b| &b.symbol).ok_or_else(|| {
            Diagnostic::new(
                Category::Semantic,
                format!("Undefined variable '{name}'."),
                span.start_location(),
            )
            .with_span_len(span.width())
            .with_fix(format!("Declare '{name}' before using it."))
            .with_example(format!("integer {name} = 0;"))
        })
    }

    /// Check that a value of type `value` may be assigned to `name`.
    pub fn check_assignment(
        &self,
        name: &str,
        value: &TypeSymbol,
        span: &Span,
    ) -> Result<(), Diagnostic> {
        let target = self.resolve(name, span)?;
        if target.is_constant() {
            let declared_at = self.lookup(name).map(|b| b.declared_at.clone());
            let mut diag = Diagnostic::new(
                Category::Semantic,
                format!("Cannot assign to constant '{name}'."),
                span.start_location(),
            )
            .with_span_len(span.width())
            .with_fix(format!("Declare '{name}' without the constant qualifier."));
            if let Some(declared_at) = declared_at {
                diag = diag.with_secondary_span(declared_at);
            }
            return Err(diag);
        }
        if !target.is_assignable_from(value) {
            return Err(Diagnostic::new(
                Category::Type,
                format!("Cannot assign a value of type {value} to '{name}' of type {target}."),
                span.start_location(),
            )
            .with_span_len(span.width())
            .with_fix(format!("Assign a {target} value to '{name}'.")));
        }
        Ok(())
    }

    fn lookup(&self, name: &str) -> Option<&Binding> {
        self.scopes.iter().rev().find_map(|scope| scope.get(name))
    }
}

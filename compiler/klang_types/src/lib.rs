//! Type symbols for Klang.
//!
//! Covers what the front end needs before full type checking: the built-in
//! types, declared-name scopes, assignability between declared types, and
//! turning type-name tokens into symbols.

mod context;
mod resolve;
mod symbol;

pub use context::TypeContext;
pub use resolve::{resolve_type, resolve_type_token};
pub use symbol::{Type, TypeSymbol};

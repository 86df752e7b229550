//! Klang compiler driver.
//!
//! Command handlers behind the `kc` binary. Handlers write their normal
//! output to a caller-supplied writer and return failures as [`CliError`];
//! `main` decides how failures are rendered and which exit code they map to.

pub mod commands;
mod error;
mod tracing_setup;

pub use error::CliError;
pub use tracing_setup::init_tracing;

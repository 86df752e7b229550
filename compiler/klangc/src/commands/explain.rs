//! The `explain` command: display documentation for diagnostic codes.

use std::io::Write;

use klang_diagnostic::{DiagnosticCode, ErrorDocs};

use crate::CliError;

/// Write the documentation for `code_str` (e.g. `E002`, case-insensitive).
pub fn explain_error(code_str: &str, out: &mut impl Write) -> Result<(), CliError> {
    let code = code_str
        .parse::<DiagnosticCode>()
        .map_err(|()| CliError::UnknownCode(code_str.to_owned()))?;
    let doc = ErrorDocs::get(code).ok_or(CliError::MissingDocs(code))?;
    writeln!(out, "{doc}")?;
    Ok(())
}

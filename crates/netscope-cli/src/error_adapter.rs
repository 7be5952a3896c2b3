//! Error adapter for converting NetscopeError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use netscope::NetscopeError;

/// Adapter giving a [`NetscopeError`] a diagnostic code and help text.
pub struct ErrorAdapter<'a>(pub &'a NetscopeError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.0 {
            NetscopeError::Io(err) | NetscopeError::Write { source: err, .. } => Some(err),
            NetscopeError::Topology(err) => Some(err),
            NetscopeError::Export(err) => Some(err.as_ref()),
            NetscopeError::Config(_) => None,
        }
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            NetscopeError::Io(_) | NetscopeError::Write { .. } => "netscope::io",
            NetscopeError::Topology(_) => "netscope::topology",
            NetscopeError::Config(_) => "netscope::config",
            NetscopeError::Export(_) => "netscope::export",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            NetscopeError::Write { .. } => "check that the output directory is writable",
            NetscopeError::Config(_) => "fix the configuration file or pass --config",
            NetscopeError::Io(_) | NetscopeError::Topology(_) | NetscopeError::Export(_) => {
                return None;
            }
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

/// Wrap a [`NetscopeError`] for rendering by a miette report handler.
pub fn to_reportable(err: &NetscopeError) -> ErrorAdapter<'_> {
    ErrorAdapter(err)
}

//! Error types for Netscope operations.
//!
//! This module provides the main error type [`NetscopeError`] which wraps
//! the failures that can occur while building the topology, rendering the
//! diagram, or writing the configuration bundle.

use std::{io, path::PathBuf};

use thiserror::Error;

use netscope_core::topology::TopologyError;

/// The main error type for Netscope operations.
#[derive(Debug, Error)]
pub enum NetscopeError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to write `{}`: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("Topology error: {0}")]
    Topology(#[from] TopologyError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error>),
}

impl From<crate::export::Error> for NetscopeError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}

impl NetscopeError {
    /// Create a new `Write` error for the file at `path`.
    pub fn new_write_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}

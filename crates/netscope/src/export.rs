//! Export functionality for Netscope diagrams.
//!
//! This module provides the [`Exporter`] trait that turns a computed
//! [`DiagramLayout`] into an output file. It is the last stage of the
//! diagram pipeline.
//!
//! # Pipeline Position
//!
//! ```text
//! Lookup Tables
//!     ↓ structure
//! Topology
//!     ↓ layout
//! Positioned Elements (DiagramLayout)
//!     ↓ export (this module)
//! Output File
//! ```
//!
//! # Available Backends
//!
//! - [`svg`] - SVG output via [`svg::SvgBuilder`] and [`svg::Svg`]
//! - [`raster`] - PNG output rasterized from the SVG document
//!
//! [`Error`] converts into [`NetscopeError::Export`] at the crate boundary.
//!
//! [`NetscopeError::Export`]: crate::NetscopeError::Export

pub mod raster;
pub mod svg;

use crate::layout::DiagramLayout;

/// Abstraction for diagram export backends.
pub trait Exporter {
    /// Exports a positioned diagram to the backend's output format.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] or [`Error::Raster`] if the layout cannot be
    /// converted to the target format, or [`Error::Io`] if writing the output
    /// fails.
    fn export_layout(&mut self, layout: &DiagramLayout) -> Result<(), Error>;
}

/// Errors that can occur during diagram export.
#[derive(Debug)]
pub enum Error {
    /// A rendering or conversion failure described by `message`.
    Render(String),
    /// A failure while rasterizing the SVG document.
    Raster(raster::RasterError),
    /// An I/O error encountered while writing output.
    Io(std::io::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Render(msg) => write!(f, "Render error: {msg}"),
            Self::Raster(err) => write!(f, "Raster error: {err}"),
            Self::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Render(_) => None,
            Self::Raster(err) => Some(err),
            Self::Io(err) => Some(err),
        }
    }
}

impl From<raster::RasterError> for Error {
    fn from(err: raster::RasterError) -> Self {
        Self::Raster(err)
    }
}

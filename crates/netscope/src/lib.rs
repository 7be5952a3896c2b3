//! Netscope - monitoring-stack architecture diagrams and configuration bundles.
//!
//! Two independent generators live here. [`DiagramBuilder`] validates the
//! built-in component tables and renders the architecture diagram as SVG or
//! PNG. [`bundle::Bundle`] renders the configuration files for Zabbix,
//! Prometheus, Alertmanager, Grafana and the install scripts.

pub mod bundle;
pub mod config;
pub mod data;
pub mod export;
pub mod layout;
pub mod structure;

mod error;

pub use netscope_core::{color, draw, geometry, topology};

pub use error::NetscopeError;

use std::path::Path;

use log::{debug, info, trace};

use config::AppConfig;
use export::{Exporter, raster::Png, svg::SvgBuilder};
use layout::LayoutBuilder;
use structure::{Topology, TopologyTables};

/// Output format of a rendered diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Svg,
    Png,
}

impl ImageFormat {
    /// Picks the format from a file extension; anything but `.svg` is PNG.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("svg") => Self::Svg,
            _ => Self::Png,
        }
    }
}

/// Builder for validating and rendering topology diagrams.
///
/// # Examples
///
/// ```rust,no_run
/// use netscope::{DiagramBuilder, config::AppConfig};
///
/// let builder = DiagramBuilder::new(AppConfig::default());
///
/// let topology = builder.builtin_topology()
///     .expect("Built-in tables are consistent");
///
/// let svg = builder.render_svg(&topology)
///     .expect("Failed to render");
///
/// // Or use default config
/// let builder = DiagramBuilder::default();
/// ```
#[derive(Debug, Default)]
pub struct DiagramBuilder {
    config: AppConfig,
}

impl DiagramBuilder {
    /// Create a new diagram builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Build a topology from the lookup tables shipped with the crate.
    ///
    /// # Errors
    ///
    /// Returns [`NetscopeError::Topology`] if the tables are inconsistent.
    pub fn builtin_topology(&self) -> Result<Topology, NetscopeError> {
        self.topology(data::builtin_tables())
    }

    /// Build a topology from arbitrary lookup tables.
    ///
    /// # Errors
    ///
    /// Returns [`NetscopeError::Topology`] on the first missing position,
    /// kind, color or unknown component.
    pub fn topology(&self, tables: TopologyTables<'_>) -> Result<Topology, NetscopeError> {
        info!("Building topology");
        let topology = Topology::from_tables(tables)?;
        trace!(topology:?; "Built topology");
        Ok(topology)
    }

    /// Render a topology to an SVG string.
    ///
    /// # Errors
    ///
    /// Returns [`NetscopeError::Export`] if the configured style is invalid.
    pub fn render_svg(&self, topology: &Topology) -> Result<String, NetscopeError> {
        let layout = LayoutBuilder::new().build(topology, self.config.style());
        let svg = SvgBuilder::new("")
            .with_style(self.config.style())
            .build()?;

        let content = svg.render_document(&layout).to_string();
        info!(bytes = content.len(); "SVG rendered successfully");
        Ok(content)
    }

    /// Render a topology to PNG bytes.
    ///
    /// # Errors
    ///
    /// Returns [`NetscopeError::Export`] if the style is invalid or the
    /// document cannot be rasterized.
    pub fn render_png(&self, topology: &Topology) -> Result<Vec<u8>, NetscopeError> {
        let layout = LayoutBuilder::new().build(topology, self.config.style());
        let svg = SvgBuilder::new("")
            .with_style(self.config.style())
            .build()?;
        let png = Png::new("", svg, self.config.raster());

        let bytes = png
            .render_bytes(&layout)
            .map_err(export::Error::from)?;
        info!(bytes = bytes.len(); "PNG rendered successfully");
        Ok(bytes)
    }

    /// Render a topology into `path`, choosing SVG or PNG by its extension.
    ///
    /// Nothing is written when rendering fails.
    ///
    /// # Errors
    ///
    /// Returns [`NetscopeError::Export`] for rendering or write failures.
    pub fn render_to_file(
        &self,
        topology: &Topology,
        path: impl AsRef<Path>,
    ) -> Result<ImageFormat, NetscopeError> {
        let path = path.as_ref();
        let format = ImageFormat::from_path(path);
        debug!(path:? = path, format:? = format; "Rendering diagram to file");

        let layout = LayoutBuilder::new().build(topology, self.config.style());
        let svg = SvgBuilder::new(path)
            .with_style(self.config.style())
            .build()?;

        let mut exporter: Box<dyn Exporter> = match format {
            ImageFormat::Svg => Box::new(svg),
            ImageFormat::Png => Box::new(Png::new(path, svg, self.config.raster())),
        };
        exporter.export_layout(&layout)?;

        info!(path:? = path; "Diagram written");
        Ok(format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_format_from_path() {
        assert_eq!(ImageFormat::from_path(Path::new("a.svg")), ImageFormat::Svg);
        assert_eq!(ImageFormat::from_path(Path::new("a.SVG")), ImageFormat::Svg);
        assert_eq!(ImageFormat::from_path(Path::new("a.png")), ImageFormat::Png);
        assert_eq!(ImageFormat::from_path(Path::new("diagram")), ImageFormat::Png);
    }
}

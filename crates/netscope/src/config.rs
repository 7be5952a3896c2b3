//! Configuration types for Netscope diagram rendering.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from a
//! TOML file by the CLI. Every field is optional and falls back to the
//! defaults below.
//!
//! - [`AppConfig`] - Top-level configuration combining style and raster settings.
//! - [`StyleConfig`] - Canvas size, title, colors and marker size.
//! - [`RasterConfig`] - PNG output options.
//!
//! # Example
//!
//! ```
//! # use netscope::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.style().width(), 800.0);
//! assert!(config.style().background_color().is_ok());
//! ```

use serde::Deserialize;

use netscope_core::{color::Color, draw::DEFAULT_FONT_FAMILY};

const DEFAULT_TITLE: &str = "Network Monitor Architecture";

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    style: StyleConfig,

    #[serde(default)]
    raster: RasterConfig,
}

impl AppConfig {
    pub fn new(style: StyleConfig, raster: RasterConfig) -> Self {
        Self { style, raster }
    }

    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    pub fn raster(&self) -> &RasterConfig {
        &self.raster
    }
}

/// Visual styling of the topology diagram.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Diagram title drawn above the legend.
    title: String,

    /// Canvas width in pixels.
    width: f32,

    /// Canvas height in pixels.
    height: f32,

    /// Diameter of component markers in pixels.
    node_diameter: f32,

    /// CSS font-family list used for every label.
    font_family: String,

    /// Background color, as a CSS color string.
    background_color: Option<String>,
}

impl StyleConfig {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn node_diameter(&self) -> f32 {
        self.node_diameter
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    /// Returns the parsed background [`Color`], or `None` if none is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_ref()
            .map(|color| Color::new(color))
            .transpose()
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            width: 800.0,
            height: 600.0,
            node_diameter: 40.0,
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            background_color: None,
        }
    }
}

/// PNG rasterization options.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RasterConfig {
    /// Pixel density multiplier applied to the canvas size.
    scale: f32,
}

impl RasterConfig {
    pub fn new(scale: f32) -> Self {
        Self { scale }
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }
}

impl Default for RasterConfig {
    fn default() -> Self {
        Self { scale: 1.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_style() {
        let style = StyleConfig::default();
        assert_eq!(style.title(), "Network Monitor Architecture");
        assert_eq!(style.node_diameter(), 40.0);
        assert!(style.font_family().ends_with("sans-serif"));
        assert_eq!(style.background_color(), Ok(None));
    }

    #[test]
    fn test_invalid_background_color() {
        let style = StyleConfig {
            background_color: Some("no-such-color".to_string()),
            ..StyleConfig::default()
        };
        let err = style.background_color().unwrap_err();
        assert!(err.starts_with("Invalid background color in config"));
    }

    #[test]
    fn test_raster_default_scale() {
        assert_eq!(AppConfig::default().raster().scale(), 1.0);
    }
}

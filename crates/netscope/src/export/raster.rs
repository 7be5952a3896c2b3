//! PNG export backend.
//!
//! The diagram is always drawn as SVG first; this backend parses that
//! document with `usvg` and rasterizes it with `resvg` onto a `tiny-skia`
//! pixmap, so both output formats share one drawing path.

use std::{fs, path::PathBuf};

use log::{debug, error, info, warn};
use usvg::fontdb;
use thiserror::Error;

use crate::{
    config::RasterConfig,
    export::{self, svg::Svg},
    layout::DiagramLayout,
};

/// Failures while turning an SVG document into PNG bytes.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RasterError {
    #[error("failed to parse SVG document")]
    SvgParse,

    #[error("failed to allocate a {width}x{height} pixmap")]
    PixmapAlloc { width: u32, height: u32 },

    #[error("failed to encode PNG")]
    PngEncode,
}

/// Installed families tried, in order, for the generic `sans-serif` family.
const SANS_SERIF_CANDIDATES: &[&str] = &[
    "Arial",
    "Helvetica",
    "Liberation Sans",
    "DejaVu Sans",
    "Noto Sans",
];

/// Points the generic `sans-serif` family at a face that is actually
/// installed, falling back to the first family in the database.
///
/// fontdb maps `sans-serif` to Arial by default, which leaves text blank on
/// hosts without it. Returns the chosen family.
fn resolve_sans_serif(db: &mut fontdb::Database) -> Option<String> {
    let installed = SANS_SERIF_CANDIDATES
        .iter()
        .copied()
        .find(|name| {
            let query = fontdb::Query {
                families: &[fontdb::Family::Name(name)],
                ..fontdb::Query::default()
            };
            db.query(&query).is_some()
        })
        .map(str::to_string)
        .or_else(|| {
            db.faces()
                .find_map(|face| face.families.first().map(|(name, _)| name.clone()))
        });

    match &installed {
        Some(family) => {
            debug!(family = family.as_str(); "Resolved sans-serif font family");
            db.set_sans_serif_family(family.clone());
        }
        None => warn!("No system fonts found, text will not be rasterized"),
    }
    installed
}

/// Rasterizes an SVG document to PNG bytes.
///
/// `scale` multiplies the document's intrinsic size.
///
/// # Errors
///
/// Returns [`RasterError`] if the document cannot be parsed, the pixmap
/// cannot be allocated, or PNG encoding fails.
pub fn svg_to_png(svg: &str, scale: f32) -> Result<Vec<u8>, RasterError> {
    let mut opt = usvg::Options::default();
    let db = opt.fontdb_mut();
    db.load_system_fonts();
    if let Some(family) = resolve_sans_serif(db) {
        opt.font_family = family;
    }

    let tree = usvg::Tree::from_str(svg, &opt).map_err(|_| RasterError::SvgParse)?;

    let size = tree.size();
    let width = (size.width() * scale).ceil().max(1.0) as u32;
    let height = (size.height() * scale).ceil().max(1.0) as u32;
    debug!(width = width, height = height, scale = scale; "Rasterizing SVG");

    let mut pixmap =
        tiny_skia::Pixmap::new(width, height).ok_or(RasterError::PixmapAlloc { width, height })?;
    resvg::render(
        &tree,
        tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );

    pixmap.encode_png().map_err(|_| RasterError::PngEncode)
}

/// PNG exporter that renders through an [`Svg`] exporter.
#[derive(Debug)]
pub struct Png {
    file_name: PathBuf,
    svg: Svg,
    scale: f32,
}

impl Png {
    pub fn new(file_name: impl Into<PathBuf>, svg: Svg, raster: &RasterConfig) -> Self {
        Self {
            file_name: file_name.into(),
            svg,
            scale: raster.scale(),
        }
    }

    /// Renders the diagram to PNG bytes without touching the filesystem.
    ///
    /// # Errors
    ///
    /// Returns [`RasterError`] if rasterization fails.
    pub fn render_bytes(&self, layout: &DiagramLayout) -> Result<Vec<u8>, RasterError> {
        let doc = self.svg.render_document(layout);
        svg_to_png(&doc.to_string(), self.scale)
    }
}

impl export::Exporter for Png {
    fn export_layout(&mut self, layout: &DiagramLayout) -> Result<(), export::Error> {
        let bytes = self.render_bytes(layout)?;

        info!(file_name:? = self.file_name, bytes = bytes.len(); "Creating PNG file");
        fs::write(&self.file_name, bytes).map_err(|err| {
            error!(file_name:? = self.file_name, err:err; "Failed to write PNG file");
            export::Error::Io(err)
        })
    }
}

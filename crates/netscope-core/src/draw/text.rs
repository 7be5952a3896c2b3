//! Text rendering definitions for diagram labels and captions.
//!
//! - [`TextDefinition`] - Reusable text style configuration
//! - [`Text`] - A renderable text element combining content with a [`TextDefinition`]
//!
//! Multi-line content (separated by `\n`) is emitted as one `<text>` element
//! with a `<tspan>` per line, vertically centered on the render position.
//!
//! ```
//! # use netscope_core::draw::{TextDefinition, Text};
//! let mut style = TextDefinition::new();
//! style.set_font_size(10);
//!
//! let text = Text::new(&style, "Node\nExporter");
//! assert_eq!(text.line_count(), 2);
//! assert!(text.calculate_size().width() > 0.0);
//! ```

use std::sync::{Mutex, OnceLock};

use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping};
use log::info;
use svg::{node::Text as SvgText, node::element as svg_element};

use crate::{
    color::Color,
    draw::{Drawable, LayeredOutput, RenderLayer},
    geometry::{Point, Size},
};

/// Line height as a multiple of the font size.
const LINE_HEIGHT_FACTOR: f32 = 1.2;

/// Family list ending in a generic family, so renderers always find a face.
pub const DEFAULT_FONT_FAMILY: &str = "Arial, Helvetica, sans-serif";

/// Horizontal anchoring of text relative to its render position.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    /// Text starts at the position
    Start,
    /// Text is centered on the position
    #[default]
    Middle,
}

impl TextAnchor {
    fn to_svg_value(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
        }
    }
}

/// Visual style for text elements.
///
/// # Default Values
///
/// | Property | Default |
/// |----------|---------|
/// | Font family | [`DEFAULT_FONT_FAMILY`] |
/// | Font size | `12` |
/// | Text color | `None` (SVG default, black) |
/// | Anchor | [`TextAnchor::Middle`] |
#[derive(Debug, Clone)]
pub struct TextDefinition {
    font_family: String,
    font_size: u16,
    color: Option<Color>,
    anchor: TextAnchor,
}

impl TextDefinition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_font_size(&mut self, size: u16) {
        self.font_size = size;
    }

    pub fn set_font_family(&mut self, family: &str) {
        self.font_family = family.to_string();
    }

    /// Sets the fill color. `None` leaves the SVG default.
    pub fn set_color(&mut self, color: Option<Color>) {
        self.color = color;
    }

    pub fn set_anchor(&mut self, anchor: TextAnchor) {
        self.anchor = anchor;
    }

    pub fn font_size(&self) -> u16 {
        self.font_size
    }

    /// The CSS `font-family` list as configured.
    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    /// First entry of the family list, used for measurement.
    fn primary_family(&self) -> Family<'_> {
        let first = self
            .font_family
            .split(',')
            .map(|name| name.trim().trim_matches(['"', '\'']))
            .find(|name| !name.is_empty());
        match first {
            None | Some("sans-serif") => Family::SansSerif,
            Some("serif") => Family::Serif,
            Some("monospace") => Family::Monospace,
            Some(name) => Family::Name(name),
        }
    }

    fn color(&self) -> Option<&Color> {
        self.color.as_ref()
    }

    fn line_height(&self) -> f32 {
        f32::from(self.font_size) * LINE_HEIGHT_FACTOR
    }
}

impl Default for TextDefinition {
    fn default() -> Self {
        Self {
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            font_size: 12,
            color: None,
            anchor: TextAnchor::default(),
        }
    }
}

/// A renderable text element.
#[derive(Debug, Clone)]
pub struct Text<'a> {
    definition: &'a TextDefinition,
    content: &'a str,
}

impl<'a> Text<'a> {
    pub fn new(definition: &'a TextDefinition, content: &'a str) -> Self {
        Self {
            definition,
            content,
        }
    }

    pub fn content(&self) -> &str {
        self.content
    }

    /// Number of rendered lines.
    pub fn line_count(&self) -> usize {
        self.content.lines().count()
    }

    /// Size of the text block: widest line by the stacked line heights.
    pub fn calculate_size(&self) -> Size {
        let width = self
            .content
            .lines()
            .map(|line| {
                TEXT_MANAGER
                    .get_or_init(TextManager::new)
                    .measure_width(line, self.definition)
            })
            .fold(0.0, f32::max);
        Size::new(width, self.line_count() as f32 * self.definition.line_height())
    }
}

impl Drawable for Text<'_> {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let mut output = LayeredOutput::new();

        let line_height = self.definition.line_height();
        let lines: Vec<&str> = self.content.lines().collect();
        let block_height = lines.len() as f32 * line_height;
        // First baseline sits half a line below the block's top edge
        let first_line_y = position.y() - block_height / 2.0 + line_height / 2.0;

        let mut rendered_text = svg_element::Text::new("")
            .set("x", position.x())
            .set("y", first_line_y)
            .set("text-anchor", self.definition.anchor.to_svg_value())
            .set("dominant-baseline", "central")
            .set("font-family", self.definition.font_family())
            .set("font-size", self.definition.font_size());

        if let Some(color) = self.definition.color() {
            rendered_text = rendered_text
                .set("fill", color.to_string())
                .set("fill-opacity", color.alpha());
        }

        for (index, line) in lines.into_iter().enumerate() {
            let dy = if index == 0 { 0.0 } else { line_height };
            let tspan = svg_element::TSpan::new("")
                .set("x", position.x())
                .set("dy", dy)
                .add(SvgText::new(line));
            rendered_text = rendered_text.add(tspan);
        }

        output.add_to_layer(RenderLayer::Text, Box::new(rendered_text));
        output
    }

    fn size(&self) -> Size {
        self.calculate_size()
    }
}

/// Measures text with a shared `FontSystem`, which is expensive to create.
struct TextManager {
    font_system: Mutex<FontSystem>,
}

impl TextManager {
    fn new() -> Self {
        info!("Initializing FontSystem");
        Self {
            font_system: Mutex::new(FontSystem::new()),
        }
    }

    /// Width of a single line in pixels.
    ///
    /// Falls back to an average glyph width estimate when no font could
    /// shape the text (for example on hosts without system fonts).
    fn measure_width(&self, line: &str, text_def: &TextDefinition) -> f32 {
        if line.is_empty() {
            return 0.0;
        }

        let font_size_px = f32::from(text_def.font_size());
        let estimate = line.chars().count() as f32 * font_size_px * 0.55;

        let Ok(mut font_system) = self.font_system.lock() else {
            return estimate;
        };

        let metrics = Metrics::new(font_size_px, text_def.line_height());
        let mut buffer = Buffer::new(&mut font_system, metrics);
        let mut buffer = buffer.borrow_with(&mut font_system);

        let attrs = Attrs::new().family(text_def.primary_family());
        buffer.set_size(None, None);
        buffer.set_text(line, &attrs, Shaping::Advanced, None);
        buffer.shape_until_scroll(true);

        let width = buffer
            .layout_runs()
            .filter_map(|run| run.glyphs.last().map(|last| last.x + last.w))
            .fold(0.0, f32::max);

        if width > 0.0 { width } else { estimate }
    }
}

static TEXT_MANAGER: OnceLock<TextManager> = OnceLock::new();

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_text_definition_defaults() {
        let def = TextDefinition::new();
        assert_eq!(def.font_size(), 12);
        assert_eq!(def.font_family(), "Arial, Helvetica, sans-serif");
        assert!(def.color().is_none());
        assert_eq!(def.anchor, TextAnchor::Middle);
    }

    #[test]
    fn test_text_size_grows_with_lines() {
        let mut def = TextDefinition::new();
        def.set_font_size(10);

        let single = Text::new(&def, "Prometheus").calculate_size();
        let double = Text::new(&def, "Node\nExporter").calculate_size();

        assert_approx_eq!(f32, single.height(), 12.0);
        assert_approx_eq!(f32, double.height(), 24.0);
        assert!(single.width() > 0.0);
    }

    #[test]
    fn test_empty_text_has_zero_size() {
        let def = TextDefinition::new();
        let size = Text::new(&def, "").calculate_size();
        assert_approx_eq!(f32, size.width(), 0.0);
        assert_approx_eq!(f32, size.height(), 0.0);
    }

    #[test]
    fn test_render_emits_one_tspan_per_line() {
        let mut def = TextDefinition::new();
        def.set_color(Some(Color::new("white").unwrap()));

        let text = Text::new(&def, "Blackbox\nExporter");
        let nodes = text.render_to_layers(Point::new(50.0, 50.0)).render();
        assert_eq!(nodes.len(), 1);

        let rendered = nodes[0].to_string();
        assert_eq!(rendered.matches("<tspan").count(), 2);
        assert!(rendered.contains("Blackbox"));
        assert!(rendered.contains("Exporter"));
        assert!(rendered.contains("text-anchor=\"middle\""));
    }

    #[test]
    fn test_render_start_anchor() {
        let mut def = TextDefinition::new();
        def.set_anchor(TextAnchor::Start);

        let nodes = Text::new(&def, "Legend")
            .render_to_layers(Point::new(0.0, 0.0))
            .render();
        let rendered = nodes[0].to_string();
        assert!(rendered.contains("text-anchor=\"start\""));
        assert!(rendered.contains("sans-serif"));
        assert!(!rendered.contains("font-weight"));
    }

    #[test]
    fn test_primary_family() {
        let mut def = TextDefinition::new();
        assert_eq!(def.primary_family(), Family::Name("Arial"));

        def.set_font_family("'DejaVu Sans', sans-serif");
        assert_eq!(def.primary_family(), Family::Name("DejaVu Sans"));

        def.set_font_family("sans-serif");
        assert_eq!(def.primary_family(), Family::SansSerif);
    }
}

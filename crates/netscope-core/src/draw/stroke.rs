//! Stroke definitions.
//!
//! - [`StrokeDefinition`]: color and width of a line or outline
//! - [`apply_stroke!`](crate::apply_stroke!): applies a stroke to an SVG element
//!
//! # SVG Attribute Mapping
//!
//! | Rust Property | SVG Attribute | Example Values |
//! |--------------|---------------|----------------|
//! | `color` | `stroke`, `stroke-opacity` | `"gray"`, `1` |
//! | `width` | `stroke-width` | `2.0` |

use crate::color::Color;

/// A solid stroke for rendering lines and outlines.
///
/// # Examples
///
/// ```
/// use netscope_core::draw::StrokeDefinition;
/// use netscope_core::color::Color;
///
/// let edge = StrokeDefinition::solid(Color::new("gray").unwrap(), 2.0);
/// assert_eq!(edge.width(), 2.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeDefinition {
    color: Color,
    width: f32,
}

impl StrokeDefinition {
    pub fn solid(color: Color, width: f32) -> Self {
        Self { color, width }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn width(&self) -> f32 {
        self.width
    }
}

impl Default for StrokeDefinition {
    fn default() -> Self {
        Self::solid(Color::default(), 1.0)
    }
}

/// Apply all stroke attributes to an SVG element.
///
/// # Examples
///
/// ```
/// use netscope_core::draw::StrokeDefinition;
/// use netscope_core::color::Color;
/// use svg::node::element as svg_element;
///
/// let stroke = StrokeDefinition::solid(Color::new("gray").unwrap(), 2.0);
/// let line = svg_element::Line::new().set("x1", 0).set("y1", 0);
///
/// let line = netscope_core::apply_stroke!(line, &stroke);
/// ```
#[macro_export]
macro_rules! apply_stroke {
    ($element:expr, $stroke:expr) => {
        $element
            .set("stroke", $stroke.color().to_string())
            .set("stroke-opacity", $stroke.color().alpha())
            .set("stroke-width", $stroke.width())
    };
}

//! Drawable Components for Diagram Rendering
//!
//! All drawable components implement the [`Drawable`] trait, which renders
//! into a [`LayeredOutput`] at a given position and reports its size.

mod layer;
mod marker;
mod stroke;
mod text;

pub use layer::{LayeredOutput, RenderLayer, SvgNode};
pub use marker::Marker;
pub use stroke::StrokeDefinition;
pub use text::{DEFAULT_FONT_FAMILY, Text, TextAnchor, TextDefinition};

use crate::geometry::{Point, Size};

pub trait Drawable: std::fmt::Debug {
    fn render_to_layers(&self, position: Point) -> LayeredOutput;
    fn size(&self) -> Size;
}

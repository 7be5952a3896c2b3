//! SVG export backend.
//!
//! [`SvgBuilder`] configures an [`Svg`] exporter. The exporter draws the
//! diagram into a [`LayeredOutput`] so that edges always land beneath the
//! markers, then serializes the document to a file.

use std::{fs::File, io::Write, path::PathBuf};

use log::{debug, error, info};
use svg::{Document, node::element as svg_element};

use netscope_core::{
    color::Color,
    draw::{Drawable, LayeredOutput, Marker, RenderLayer, StrokeDefinition, Text, TextDefinition},
    geometry::Size,
};

use crate::{
    config::StyleConfig,
    export,
    layout::{DiagramLayout, PositionedEdge, PositionedLegendItem, PositionedNode},
};

const EDGE_COLOR: &str = "gray";
const EDGE_WIDTH: f32 = 2.0;
const OUTLINE_COLOR: &str = "white";
const OUTLINE_WIDTH: f32 = 2.0;
const LABEL_COLOR: &str = "white";
const DEFAULT_BACKGROUND: &str = "white";
const LEGEND_TEXT_COLOR: &str = "#2a3f5f";

/// Builder for [`Svg`] exporters.
#[derive(Debug, Default)]
pub struct SvgBuilder<'a> {
    file_name: PathBuf,
    style: Option<&'a StyleConfig>,
}

impl<'a> SvgBuilder<'a> {
    pub fn new(file_name: impl Into<PathBuf>) -> Self {
        Self {
            file_name: file_name.into(),
            style: None,
        }
    }

    pub fn with_style(mut self, style: &'a StyleConfig) -> Self {
        self.style = Some(style);
        self
    }

    /// Resolves the colors used while drawing.
    ///
    /// # Errors
    ///
    /// Returns [`export::Error::Render`] if the configured background color
    /// cannot be parsed.
    pub fn build(self) -> Result<Svg, export::Error> {
        let background = match self.style {
            Some(style) => style.background_color().map_err(export::Error::Render)?,
            None => None,
        };
        let palette = Palette::new(background)?;

        Ok(Svg {
            file_name: self.file_name,
            palette,
        })
    }
}

/// Fixed colors of the diagram chrome.
#[derive(Debug, Clone, Copy)]
struct Palette {
    background: Color,
    edge: Color,
    outline: Color,
    label: Color,
    legend_text: Color,
}

impl Palette {
    fn new(background: Option<Color>) -> Result<Self, export::Error> {
        let parse = |value: &str| Color::new(value).map_err(export::Error::Render);
        Ok(Self {
            background: match background {
                Some(color) => color,
                None => parse(DEFAULT_BACKGROUND)?,
            },
            edge: parse(EDGE_COLOR)?,
            outline: parse(OUTLINE_COLOR)?,
            label: parse(LABEL_COLOR)?,
            legend_text: parse(LEGEND_TEXT_COLOR)?,
        })
    }
}

/// SVG exporter for a positioned topology diagram.
#[derive(Debug)]
pub struct Svg {
    file_name: PathBuf,
    palette: Palette,
}

impl Svg {
    /// Renders the complete diagram to an SVG document.
    pub fn render_document(&self, layout: &DiagramLayout) -> Document {
        let canvas = layout.canvas();
        let doc = Document::new()
            .set(
                "viewBox",
                format!("0 0 {} {}", canvas.width(), canvas.height()),
            )
            .set("width", canvas.width())
            .set("height", canvas.height());

        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Background, Box::new(self.background(canvas)));

        for edge in layout.edges() {
            output.add_to_layer(RenderLayer::Edge, Box::new(self.edge(edge)));
        }

        let mut label_style = layout.text_styles().label().clone();
        label_style.set_color(Some(self.palette.label));
        for node in layout.nodes() {
            output.merge(self.node(node, layout.node_diameter(), &label_style));
        }

        let mut legend_style = layout.text_styles().legend().clone();
        legend_style.set_color(Some(self.palette.legend_text));
        for item in layout.legend() {
            output.merge(self.legend_item(item, layout.swatch_diameter(), &legend_style));
        }

        let mut title_style = layout.text_styles().title().clone();
        title_style.set_color(Some(self.palette.legend_text));
        output.merge(Text::new(&title_style, layout.title()).render_to_layers(layout.title_position()));

        let mut doc = doc;
        for node in output.render() {
            doc = doc.add(node);
        }
        debug!(
            nodes = layout.nodes().len(),
            edges = layout.edges().len();
            "SVG document rendered",
        );
        doc
    }

    fn background(&self, canvas: Size) -> svg_element::Rectangle {
        svg_element::Rectangle::new()
            .set("x", 0)
            .set("y", 0)
            .set("width", canvas.width())
            .set("height", canvas.height())
            .set("fill", self.palette.background.to_string())
            .set("fill-opacity", self.palette.background.alpha())
    }

    fn edge(&self, edge: &PositionedEdge) -> svg_element::Line {
        let stroke = StrokeDefinition::solid(self.palette.edge, EDGE_WIDTH);
        let line = svg_element::Line::new()
            .set("x1", edge.start().x())
            .set("y1", edge.start().y())
            .set("x2", edge.end().x())
            .set("y2", edge.end().y());
        netscope_core::apply_stroke!(line, &stroke)
    }

    fn node(
        &self,
        node: &PositionedNode,
        diameter: f32,
        label_style: &TextDefinition,
    ) -> LayeredOutput {
        Marker::new(diameter, node.component().color())
            .with_outline(StrokeDefinition::solid(self.palette.outline, OUTLINE_WIDTH))
            .with_label(label_style, node.label())
            .with_tooltip(node.tooltip())
            .render_to_layers(node.center())
    }

    fn legend_item(
        &self,
        item: &PositionedLegendItem,
        diameter: f32,
        caption_style: &TextDefinition,
    ) -> LayeredOutput {
        let mut output = Marker::new(diameter, item.color())
            .with_outline(StrokeDefinition::solid(self.palette.outline, 1.0))
            .render_to_layers(item.swatch_center());
        output.merge(Text::new(caption_style, item.kind().name()).render_to_layers(item.caption_start()));
        output
    }

    /// Writes an SVG document to the configured file.
    fn write_document(&self, doc: &Document) -> Result<(), export::Error> {
        info!(file_name:? = self.file_name; "Creating SVG file");
        let mut file = match File::create(&self.file_name) {
            Ok(file) => file,
            Err(err) => {
                error!(file_name:? = self.file_name, err:err; "Failed to create SVG file");
                return Err(export::Error::Io(err));
            }
        };

        if let Err(err) = write!(file, "{doc}") {
            error!(file_name:? = self.file_name, err:err; "Failed to write SVG content");
            return Err(export::Error::Io(err));
        }

        Ok(())
    }
}

impl export::Exporter for Svg {
    fn export_layout(&mut self, layout: &DiagramLayout) -> Result<(), export::Error> {
        let doc = self.render_document(layout);
        self.write_document(&doc)
    }
}

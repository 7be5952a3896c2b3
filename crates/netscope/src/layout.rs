//! Canvas layout for topology diagrams.
//!
//! Component positions are fixed points on a logical canvas
//! (x ∈ [0.5, 5.5], y ∈ [0.5, 4.5], y up). This module projects them into
//! the pixel plot area and places the title and the horizontal legend above
//! it. No positions are computed from the graph itself.
//!
//! # Pipeline Position
//!
//! ```text
//! Topology
//!     ↓ layout (this module)
//! DiagramLayout
//!     ↓ export
//! Output
//! ```

use log::{debug, trace};

use netscope_core::{
    color::Color,
    draw::{Text, TextAnchor, TextDefinition},
    geometry::{Bounds, Insets, Point, Projection, Size},
    topology::{Component, ComponentKind},
};

use crate::{config::StyleConfig, structure::Topology};

/// Logical extent of the plot along x.
pub const LOGICAL_X_RANGE: (f32, f32) = (0.5, 5.5);
/// Logical extent of the plot along y.
pub const LOGICAL_Y_RANGE: (f32, f32) = (0.5, 4.5);

/// Legend row offset above the plot, as a fraction of the plot height.
const LEGEND_OFFSET_FRACTION: f32 = 0.05;

/// A component marker projected into pixel space.
#[derive(Debug, Clone)]
pub struct PositionedNode<'a> {
    component: &'a Component,
    center: Point,
    label: String,
    tooltip: String,
}

impl<'a> PositionedNode<'a> {
    pub fn component(&self) -> &'a Component {
        self.component
    }

    pub fn center(&self) -> Point {
        self.center
    }

    /// Name with each space replaced by a line break.
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn tooltip(&self) -> &str {
        &self.tooltip
    }
}

/// A straight connection between two marker centers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionedEdge {
    start: Point,
    end: Point,
}

impl PositionedEdge {
    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }
}

/// One legend item: a swatch followed by the kind name.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionedLegendItem {
    kind: ComponentKind,
    color: Color,
    swatch_center: Point,
    caption_start: Point,
}

impl PositionedLegendItem {
    pub fn kind(&self) -> ComponentKind {
        self.kind
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn swatch_center(&self) -> Point {
        self.swatch_center
    }

    /// Left edge of the caption, vertically centered on the swatch.
    pub fn caption_start(&self) -> Point {
        self.caption_start
    }
}

/// Text styles shared between layout measurement and rendering.
#[derive(Debug, Clone)]
pub struct TextStyles {
    title: TextDefinition,
    label: TextDefinition,
    legend: TextDefinition,
}

impl TextStyles {
    fn new(font_family: &str) -> Self {
        let mut title = TextDefinition::new();
        title.set_font_family(font_family);
        title.set_font_size(17);
        title.set_anchor(TextAnchor::Start);

        let mut label = TextDefinition::new();
        label.set_font_family(font_family);
        label.set_font_size(10);

        let mut legend = TextDefinition::new();
        legend.set_font_family(font_family);
        legend.set_font_size(12);
        legend.set_anchor(TextAnchor::Start);

        Self {
            title,
            label,
            legend,
        }
    }

    pub fn title(&self) -> &TextDefinition {
        &self.title
    }

    pub fn label(&self) -> &TextDefinition {
        &self.label
    }

    pub fn legend(&self) -> &TextDefinition {
        &self.legend
    }
}

/// Every drawable element of the diagram with its pixel position.
#[derive(Debug, Clone)]
pub struct DiagramLayout<'a> {
    canvas: Size,
    plot: Bounds,
    title: String,
    title_position: Point,
    node_diameter: f32,
    swatch_diameter: f32,
    text_styles: TextStyles,
    nodes: Vec<PositionedNode<'a>>,
    edges: Vec<PositionedEdge>,
    legend: Vec<PositionedLegendItem>,
}

impl<'a> DiagramLayout<'a> {
    pub fn canvas(&self) -> Size {
        self.canvas
    }

    /// Pixel rectangle of the logical canvas.
    pub fn plot(&self) -> Bounds {
        self.plot
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn title_position(&self) -> Point {
        self.title_position
    }

    pub fn node_diameter(&self) -> f32 {
        self.node_diameter
    }

    pub fn swatch_diameter(&self) -> f32 {
        self.swatch_diameter
    }

    pub fn text_styles(&self) -> &TextStyles {
        &self.text_styles
    }

    pub fn nodes(&self) -> &[PositionedNode<'a>] {
        &self.nodes
    }

    pub fn edges(&self) -> &[PositionedEdge] {
        &self.edges
    }

    pub fn legend(&self) -> &[PositionedLegendItem] {
        &self.legend
    }
}

/// Builder for configuring and running the canvas layout.
#[derive(Debug, Clone)]
pub struct LayoutBuilder {
    padding: Insets,
    swatch_diameter: f32,
    swatch_gap: f32,
    legend_item_spacing: f32,
}

impl Default for LayoutBuilder {
    fn default() -> Self {
        Self {
            padding: Insets::new(100.0, 80.0, 80.0, 80.0),
            swatch_diameter: 12.0,
            swatch_gap: 6.0,
            legend_item_spacing: 20.0,
        }
    }
}

impl LayoutBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Positions every element of `topology` on a canvas styled by `style`.
    pub fn build<'a>(&self, topology: &'a Topology, style: &StyleConfig) -> DiagramLayout<'a> {
        let canvas = Size::new(style.width(), style.height());
        let plot = Bounds::new(0.0, 0.0, canvas.width(), canvas.height()).inset(self.padding);
        let projection = Projection::new(
            Bounds::new(
                LOGICAL_X_RANGE.0,
                LOGICAL_Y_RANGE.0,
                LOGICAL_X_RANGE.1,
                LOGICAL_Y_RANGE.1,
            ),
            plot,
        );
        debug!(
            canvas_width = canvas.width(),
            canvas_height = canvas.height(),
            plot_width = plot.width(),
            plot_height = plot.height();
            "Computed plot area",
        );

        let text_styles = TextStyles::new(style.font_family());

        let nodes: Vec<_> = topology
            .components()
            .iter()
            .map(|component| {
                let center = projection.project(component.position());
                trace!(component = component.name(), center:?; "Positioned node");
                PositionedNode {
                    component,
                    center,
                    label: component.wrapped_label(),
                    tooltip: component.hover_text(),
                }
            })
            .collect();

        let edges = topology
            .edges()
            .iter()
            .map(|edge| PositionedEdge {
                start: nodes[edge.source()].center,
                end: nodes[edge.target()].center,
            })
            .collect();

        let legend = self.layout_legend(topology, plot, text_styles.legend());

        // Title sits centered in the band above the legend row
        let title_height = Text::new(text_styles.title(), style.title())
            .calculate_size()
            .height();
        let title_position = Point::new(
            plot.min_x(),
            (self.padding.top() - LEGEND_OFFSET_FRACTION * plot.height() - self.swatch_diameter)
                .max(title_height)
                / 2.0,
        );

        DiagramLayout {
            canvas,
            plot,
            title: style.title().to_string(),
            title_position,
            node_diameter: style.node_diameter(),
            swatch_diameter: self.swatch_diameter,
            text_styles,
            nodes,
            edges,
            legend,
        }
    }

    /// Lays the legend out as a single row, centered horizontally over the
    /// plot with its bottom edge just above the plot.
    fn layout_legend(
        &self,
        topology: &Topology,
        plot: Bounds,
        caption_style: &TextDefinition,
    ) -> Vec<PositionedLegendItem> {
        let captions: Vec<(ComponentKind, Color, f32)> = topology
            .legend()
            .iter()
            .map(|entry| {
                let width = Text::new(caption_style, entry.kind().name())
                    .calculate_size()
                    .width();
                (entry.kind(), entry.color(), width)
            })
            .collect();

        let item_widths = captions
            .iter()
            .map(|(_, _, caption)| self.swatch_diameter + self.swatch_gap + caption);
        let total_width = item_widths.sum::<f32>()
            + self.legend_item_spacing * captions.len().saturating_sub(1) as f32;

        let row_height = self
            .swatch_diameter
            .max(f32::from(caption_style.font_size()));
        let row_y = plot.min_y() - LEGEND_OFFSET_FRACTION * plot.height() - row_height / 2.0;
        let mut cursor = plot.center().x() - total_width / 2.0;

        captions
            .into_iter()
            .map(|(kind, color, caption_width)| {
                let swatch_center = Point::new(cursor + self.swatch_diameter / 2.0, row_y);
                let caption_start = Point::new(cursor + self.swatch_diameter + self.swatch_gap, row_y);
                cursor += self.swatch_diameter
                    + self.swatch_gap
                    + caption_width
                    + self.legend_item_spacing;
                PositionedLegendItem {
                    kind,
                    color,
                    swatch_center,
                    caption_start,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;
    use crate::data::builtin_tables;

    fn builtin_topology() -> Topology {
        Topology::from_tables(builtin_tables()).unwrap()
    }

    #[test]
    fn test_plot_area_respects_padding() {
        let topology = builtin_topology();
        let layout = LayoutBuilder::new().build(&topology, &StyleConfig::default());

        assert_eq!(layout.canvas(), Size::new(800.0, 600.0));
        assert_approx_eq!(f32, layout.plot().min_x(), 80.0);
        assert_approx_eq!(f32, layout.plot().min_y(), 100.0);
        assert_approx_eq!(f32, layout.plot().max_x(), 720.0);
        assert_approx_eq!(f32, layout.plot().max_y(), 520.0);
    }

    #[test]
    fn test_nodes_projected_inside_plot() {
        let topology = builtin_topology();
        let layout = LayoutBuilder::new().build(&topology, &StyleConfig::default());

        assert_eq!(layout.nodes().len(), 9);
        for node in layout.nodes() {
            assert!(layout.plot().contains(node.center()), "{node:?}");
        }
    }

    #[test]
    fn test_logical_y_grows_upward() {
        let topology = builtin_topology();
        let layout = LayoutBuilder::new().build(&topology, &StyleConfig::default());

        let center_of = |name: &str| {
            layout
                .nodes()
                .iter()
                .find(|node| node.component().name() == name)
                .unwrap()
                .center()
        };

        // Zabbix Agent (y = 4) is drawn above Blackbox Exporter (y = 1)
        assert!(center_of("Zabbix Agent").y() < center_of("Blackbox Exporter").y());
        // Prometheus at x = 3 is the horizontal center of [0.5, 5.5]
        assert_approx_eq!(f32, center_of("Prometheus").x(), 400.0);
    }

    #[test]
    fn test_edges_connect_node_centers() {
        let topology = builtin_topology();
        let layout = LayoutBuilder::new().build(&topology, &StyleConfig::default());

        assert_eq!(layout.edges().len(), topology.edges().len());
        for (edge, positioned) in topology.edges().iter().zip(layout.edges()) {
            assert_eq!(positioned.start(), layout.nodes()[edge.source()].center());
            assert_eq!(positioned.end(), layout.nodes()[edge.target()].center());
        }
    }

    #[test]
    fn test_legend_row_above_plot_and_centered() {
        let topology = builtin_topology();
        let layout = LayoutBuilder::new().build(&topology, &StyleConfig::default());
        let legend = layout.legend();

        assert_eq!(legend.len(), 7);
        for item in legend {
            assert!(item.swatch_center().y() < layout.plot().min_y());
            assert!(item.caption_start().x() > item.swatch_center().x());
        }
        for pair in legend.windows(2) {
            assert!(pair[0].swatch_center().x() < pair[1].swatch_center().x());
        }

        let left = legend[0].swatch_center().x() - layout.swatch_diameter() / 2.0;
        assert!(left > 0.0);
        assert!(left < layout.plot().center().x());
    }

    #[test]
    fn test_title_above_legend() {
        let topology = builtin_topology();
        let layout = LayoutBuilder::new().build(&topology, &StyleConfig::default());

        assert_eq!(layout.title(), "Network Monitor Architecture");
        assert!(layout.title_position().y() < layout.legend()[0].swatch_center().y());
    }

    #[test]
    fn test_node_label_and_tooltip() {
        let topology = builtin_topology();
        let layout = LayoutBuilder::new().build(&topology, &StyleConfig::default());

        let node = layout
            .nodes()
            .iter()
            .find(|node| node.component().name() == "Zabbix Server")
            .unwrap();
        assert_eq!(node.label(), "Zabbix\nServer");
        assert!(node.tooltip().contains("Port 80 (HTTP), Port 10051 (TCP)"));
    }
}

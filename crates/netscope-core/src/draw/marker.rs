//! Circular component markers.
//!
//! A [`Marker`] is a filled circle with an outline, an optional label drawn
//! inside it, and an optional hover tooltip emitted as an SVG `<title>`
//! child. The same drawable renders both topology nodes and legend swatches.

use svg::node::element as svg_element;

use crate::{
    apply_stroke,
    color::Color,
    draw::{Drawable, LayeredOutput, RenderLayer, StrokeDefinition, Text, TextDefinition},
    geometry::{Point, Size},
};

/// A filled circle with optional label and tooltip.
#[derive(Debug, Clone)]
pub struct Marker<'a> {
    diameter: f32,
    fill: Color,
    outline: Option<StrokeDefinition>,
    label: Option<Text<'a>>,
    tooltip: Option<&'a str>,
}

impl<'a> Marker<'a> {
    pub fn new(diameter: f32, fill: Color) -> Self {
        Self {
            diameter,
            fill,
            outline: None,
            label: None,
            tooltip: None,
        }
    }

    pub fn with_outline(mut self, outline: StrokeDefinition) -> Self {
        self.outline = Some(outline);
        self
    }

    /// Label centered inside the circle. Lines are split on `\n`.
    pub fn with_label(mut self, definition: &'a TextDefinition, content: &'a str) -> Self {
        self.label = Some(Text::new(definition, content));
        self
    }

    pub fn with_tooltip(mut self, tooltip: &'a str) -> Self {
        self.tooltip = Some(tooltip);
        self
    }

    pub fn diameter(&self) -> f32 {
        self.diameter
    }
}

impl Drawable for Marker<'_> {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let mut output = LayeredOutput::new();

        let mut circle = svg_element::Circle::new()
            .set("cx", position.x())
            .set("cy", position.y())
            .set("r", self.diameter / 2.0)
            .set("fill", self.fill.to_string())
            .set("fill-opacity", self.fill.alpha());

        if let Some(outline) = &self.outline {
            circle = apply_stroke!(circle, outline);
        }

        match self.tooltip {
            Some(tooltip) => {
                let title = svg_element::Title::new(tooltip);
                let group = svg_element::Group::new().add(title).add(circle);
                output.add_to_layer(RenderLayer::Node, Box::new(group));
            }
            None => output.add_to_layer(RenderLayer::Node, Box::new(circle)),
        }

        if let Some(label) = &self.label {
            output.merge(label.render_to_layers(position));
        }

        output
    }

    fn size(&self) -> Size {
        Size::new(self.diameter, self.diameter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(marker: &Marker) -> String {
        marker
            .render_to_layers(Point::new(100.0, 80.0))
            .render()
            .into_iter()
            .map(|node| node.to_string())
            .collect()
    }

    #[test]
    fn test_marker_circle_radius() {
        let marker = Marker::new(40.0, Color::new("#1FB8CD").unwrap());
        let svg = render(&marker);
        assert!(svg.contains("r=\"20\""));
        assert!(svg.contains("cx=\"100\""));
        assert!(!svg.contains("<title>"));
        assert_eq!(marker.size(), Size::new(40.0, 40.0));
    }

    #[test]
    fn test_marker_label_and_tooltip() {
        let label_def = TextDefinition::new();
        let marker = Marker::new(40.0, Color::new("#5D878F").unwrap())
            .with_outline(StrokeDefinition::solid(Color::new("white").unwrap(), 2.0))
            .with_label(&label_def, "Zabbix\nServer")
            .with_tooltip("Zabbix Server");

        let svg = render(&marker);
        assert!(svg.contains("<title>"));
        assert!(svg.contains("Zabbix Server"));
        assert!(svg.contains("data-layer=\"node\""));
        assert!(svg.contains("data-layer=\"text\""));
        assert!(svg.contains("stroke-width=\"2\""));
    }

    #[test]
    fn test_tooltip_groups_title_before_circle() {
        let marker = Marker::new(40.0, Color::new("#D2BA4C").unwrap())
            .with_tooltip("Grafana\nPort 3000: HTTP");

        let svg = render(&marker);
        assert!(svg.starts_with("<g"));
        let title = svg.find("<title>").unwrap();
        let circle = svg.find("<circle").unwrap();
        assert!(title < circle);
        assert!(svg.contains("Port 3000: HTTP"));
    }
}

//! Monitoring topology model.
//!
//! The topology is described by a handful of flat lookup tables, all keyed by
//! component name:
//!
//! - [`PortRecord`] rows: one per exposed port; a component may own several
//! - [`Placement`] rows: position on the logical canvas
//! - [`KindAssignment`] rows: classification of a component
//! - [`PaletteEntry`] rows: fill color per [`ComponentKind`]
//! - [`Connection`] rows: directed data-flow edges
//!
//! The rows are plain `const`-constructible records so that built-in tables
//! can live in static slices. Cross-table consistency is checked when the
//! tables are assembled into a validated topology; [`TopologyError`] lists
//! the ways that can fail.

use std::fmt;

use thiserror::Error;

use crate::{color::Color, geometry::Point};

/// Classification of a monitored component. Drives its fill color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ComponentKind {
    Exporter,
    Agent,
    Collection,
    Server,
    Database,
    Visualization,
    Alerting,
}

impl ComponentKind {
    /// All kinds in declaration order.
    pub const ALL: [ComponentKind; 7] = [
        Self::Exporter,
        Self::Agent,
        Self::Collection,
        Self::Server,
        Self::Database,
        Self::Visualization,
        Self::Alerting,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Exporter => "Exporter",
            Self::Agent => "Agent",
            Self::Collection => "Collection",
            Self::Server => "Server",
            Self::Database => "Database",
            Self::Visualization => "Visualization",
            Self::Alerting => "Alerting",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Transport of an exposed port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Protocol {
    Http,
    Tcp,
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http => f.write_str("HTTP"),
            Self::Tcp => f.write_str("TCP"),
        }
    }
}

/// One exposed port of a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortRecord {
    component: &'static str,
    port: u16,
    protocol: Protocol,
    purpose: &'static str,
    security: &'static str,
}

impl PortRecord {
    pub const fn new(
        component: &'static str,
        port: u16,
        protocol: Protocol,
        purpose: &'static str,
        security: &'static str,
    ) -> Self {
        Self {
            component,
            port,
            protocol,
            purpose,
            security,
        }
    }

    pub fn component(&self) -> &'static str {
        self.component
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn protocol(&self) -> Protocol {
        self.protocol
    }

    pub fn purpose(&self) -> &'static str {
        self.purpose
    }

    /// Access-control mechanism guarding this port.
    pub fn security(&self) -> &'static str {
        self.security
    }
}

impl fmt::Display for PortRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Port {} ({})", self.port, self.protocol)
    }
}

/// Position of a component on the logical canvas (Y grows upward).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    component: &'static str,
    x: f32,
    y: f32,
}

impl Placement {
    pub const fn new(component: &'static str, x: f32, y: f32) -> Self {
        Self { component, x, y }
    }

    pub fn component(&self) -> &'static str {
        self.component
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindAssignment {
    component: &'static str,
    kind: ComponentKind,
}

impl KindAssignment {
    pub const fn new(component: &'static str, kind: ComponentKind) -> Self {
        Self { component, kind }
    }

    pub fn component(&self) -> &'static str {
        self.component
    }

    pub fn kind(&self) -> ComponentKind {
        self.kind
    }
}

/// Fill color for a component kind, as a CSS color string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteEntry {
    kind: ComponentKind,
    color: &'static str,
}

impl PaletteEntry {
    pub const fn new(kind: ComponentKind, color: &'static str) -> Self {
        Self { kind, color }
    }

    pub fn kind(&self) -> ComponentKind {
        self.kind
    }

    pub fn color(&self) -> &'static str {
        self.color
    }
}

/// Directed data-flow relationship between two components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Connection {
    source: &'static str,
    target: &'static str,
}

impl Connection {
    pub const fn new(source: &'static str, target: &'static str) -> Self {
        Self { source, target }
    }

    pub fn source(&self) -> &'static str {
        self.source
    }

    pub fn target(&self) -> &'static str {
        self.target
    }
}

/// A monitored element with all of its lookup-table attributes resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    name: &'static str,
    kind: ComponentKind,
    position: Point,
    color: Color,
    ports: Vec<PortRecord>,
}

impl Component {
    /// Creates a component from its resolved attributes.
    ///
    /// `ports` must be non-empty and keep the order the rows were declared in;
    /// the first row supplies the component's security annotation.
    pub fn new(
        name: &'static str,
        kind: ComponentKind,
        position: Point,
        color: Color,
        ports: Vec<PortRecord>,
    ) -> Self {
        debug_assert!(!ports.is_empty(), "component `{name}` has no port rows");
        Self {
            name,
            kind,
            position,
            color,
            ports,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn kind(&self) -> ComponentKind {
        self.kind
    }

    /// Position on the logical canvas.
    pub fn position(&self) -> Point {
        self.position
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn ports(&self) -> &[PortRecord] {
        &self.ports
    }

    /// Security annotation of the first declared port row.
    pub fn security(&self) -> &'static str {
        self.ports.first().map(PortRecord::security).unwrap_or_default()
    }

    /// Name wrapped at every space, for drawing inside a marker.
    pub fn wrapped_label(&self) -> String {
        self.name.replace(' ', "\n")
    }

    /// Hover text listing the kind, every port and the security annotation.
    ///
    /// ```
    /// # use netscope_core::{color::Color, geometry::Point};
    /// # use netscope_core::topology::{Component, ComponentKind, PortRecord, Protocol};
    /// let component = Component::new(
    ///     "Grafana",
    ///     ComponentKind::Visualization,
    ///     Point::new(5.0, 3.0),
    ///     Color::new("#B4413C").unwrap(),
    ///     vec![PortRecord::new("Grafana", 3000, Protocol::Http, "Dashboard Interface", "User Auth + SSL")],
    /// );
    /// assert_eq!(
    ///     component.hover_text(),
    ///     "Grafana\nType: Visualization\nPorts: Port 3000 (HTTP)\nSecurity: User Auth + SSL",
    /// );
    /// ```
    pub fn hover_text(&self) -> String {
        let ports = self
            .ports
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "{}\nType: {}\nPorts: {}\nSecurity: {}",
            self.name,
            self.kind,
            ports,
            self.security()
        )
    }
}

/// Lookup failures between the topology tables.
///
/// These indicate inconsistent static data, never bad user input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TopologyError {
    #[error("component `{component}` has no position")]
    MissingPosition { component: &'static str },

    #[error("component `{component}` has no kind")]
    MissingKind { component: &'static str },

    #[error("kind `{kind}` has no palette color")]
    MissingColor { kind: ComponentKind },

    #[error("palette color for kind `{kind}` is invalid: {reason}")]
    InvalidColor { kind: ComponentKind, reason: String },

    #[error("{table} table references unknown component `{component}`")]
    UnknownComponent {
        component: &'static str,
        table: &'static str,
    },

    #[error("{table} table lists component `{component}` more than once")]
    DuplicateEntry {
        component: &'static str,
        table: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zabbix_server() -> Component {
        Component::new(
            "Zabbix Server",
            ComponentKind::Server,
            Point::new(3.0, 4.0),
            Color::new("#5D878F").unwrap(),
            vec![
                PortRecord::new(
                    "Zabbix Server",
                    80,
                    Protocol::Http,
                    "Web Interface",
                    "Basic Auth + SSL",
                ),
                PortRecord::new(
                    "Zabbix Server",
                    10051,
                    Protocol::Tcp,
                    "Server Communication",
                    "TLS Encryption",
                ),
            ],
        )
    }

    #[test]
    fn test_hover_text_aggregates_every_port() {
        let hover = zabbix_server().hover_text();
        assert!(hover.contains("Port 80 (HTTP)"));
        assert!(hover.contains("Port 10051 (TCP)"));
        assert!(hover.contains("Ports: Port 80 (HTTP), Port 10051 (TCP)"));
    }

    #[test]
    fn test_security_comes_from_first_row() {
        let component = zabbix_server();
        assert_eq!(component.security(), "Basic Auth + SSL");
        assert!(component.hover_text().ends_with("Security: Basic Auth + SSL"));
    }

    #[test]
    fn test_wrapped_label() {
        assert_eq!(zabbix_server().wrapped_label(), "Zabbix\nServer");
    }

    #[test]
    fn test_kind_names_are_distinct() {
        let mut names: Vec<_> = ComponentKind::ALL.iter().map(|k| k.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), ComponentKind::ALL.len());
    }

    #[test]
    fn test_error_messages() {
        let err = TopologyError::UnknownComponent {
            component: "Grafna",
            table: "connection",
        };
        assert_eq!(
            err.to_string(),
            "connection table references unknown component `Grafna`"
        );

        let err = TopologyError::MissingColor {
            kind: ComponentKind::Alerting,
        };
        assert_eq!(err.to_string(), "kind `Alerting` has no palette color");
    }
}

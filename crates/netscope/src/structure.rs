//! Validated topology structure.
//!
//! [`Topology::from_tables`] joins the flat lookup tables into one node per
//! component, resolves every position, kind and color up front, and fails on
//! the first inconsistency. Once built, a [`Topology`] cannot miss a lookup,
//! so the layout and export stages never need a fallback.

use std::collections::{HashMap, HashSet, hash_map::Entry};

use indexmap::IndexMap;
use log::{debug, trace};

use netscope_core::{
    color::Color,
    topology::{
        Component, ComponentKind, Connection, KindAssignment, PaletteEntry, Placement, PortRecord,
        TopologyError,
    },
};

/// The raw lookup tables a topology is assembled from.
#[derive(Debug, Clone, Copy)]
pub struct TopologyTables<'a> {
    pub ports: &'a [PortRecord],
    pub placements: &'a [Placement],
    pub kinds: &'a [KindAssignment],
    pub palette: &'a [PaletteEntry],
    pub connections: &'a [Connection],
}

/// A directed edge between two components, by index into
/// [`Topology::components`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    source: usize,
    target: usize,
}

impl Edge {
    pub fn source(&self) -> usize {
        self.source
    }

    pub fn target(&self) -> usize {
        self.target
    }
}

/// A legend row: a kind, its color, and the component that introduced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegendEntry {
    kind: ComponentKind,
    color: Color,
    component: usize,
}

impl LegendEntry {
    pub fn kind(&self) -> ComponentKind {
        self.kind
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Index of the first component of this kind.
    pub fn component(&self) -> usize {
        self.component
    }
}

/// Components, edges and legend of a monitoring topology.
///
/// Components are ordered by name. Legend entries follow the order in which
/// each kind first appears among the components.
#[derive(Debug, Clone)]
pub struct Topology {
    components: Vec<Component>,
    edges: Vec<Edge>,
    legend: Vec<LegendEntry>,
}

impl Topology {
    /// Builds a topology from lookup tables.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError`] when a placement, kind assignment or
    /// connection names a component without port rows, when a component lacks
    /// a position or kind, when a kind has no (valid) palette color, or when a
    /// table lists the same key twice.
    pub fn from_tables(tables: TopologyTables<'_>) -> Result<Self, TopologyError> {
        let mut rows: IndexMap<&'static str, Vec<PortRecord>> = IndexMap::new();
        for record in tables.ports {
            rows.entry(record.component()).or_default().push(*record);
        }
        rows.sort_keys();
        debug!(
            rows = tables.ports.len(),
            components = rows.len();
            "Grouped port rows by component",
        );

        let positions = index_by_component(
            tables.placements,
            "placement",
            &rows,
            Placement::component,
            Placement::position,
        )?;
        let kinds = index_by_component(
            tables.kinds,
            "kind",
            &rows,
            KindAssignment::component,
            KindAssignment::kind,
        )?;
        let palette = resolve_palette(tables.palette)?;

        let mut components = Vec::with_capacity(rows.len());
        for (name, ports) in rows {
            let position = *positions
                .get(name)
                .ok_or(TopologyError::MissingPosition { component: name })?;
            let kind = *kinds
                .get(name)
                .ok_or(TopologyError::MissingKind { component: name })?;
            let color = *palette
                .get(&kind)
                .ok_or(TopologyError::MissingColor { kind })?;

            trace!(component = name, kind:% = kind, ports = ports.len(); "Resolved component");
            components.push(Component::new(name, kind, position, color, ports));
        }

        let index: HashMap<&str, usize> = components
            .iter()
            .enumerate()
            .map(|(idx, component)| (component.name(), idx))
            .collect();
        let edges = tables
            .connections
            .iter()
            .map(|connection| {
                let endpoint = |name: &'static str| {
                    index
                        .get(name)
                        .copied()
                        .ok_or(TopologyError::UnknownComponent {
                            component: name,
                            table: "connection",
                        })
                };
                Ok(Edge {
                    source: endpoint(connection.source())?,
                    target: endpoint(connection.target())?,
                })
            })
            .collect::<Result<Vec<_>, TopologyError>>()?;

        let legend = build_legend(&components);

        debug!(
            components = components.len(),
            edges = edges.len(),
            legend_entries = legend.len();
            "Topology built",
        );

        Ok(Self {
            components,
            edges,
            legend,
        })
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn legend(&self) -> &[LegendEntry] {
        &self.legend
    }

    /// Looks up a component by exact name.
    pub fn component(&self, name: &str) -> Option<&Component> {
        self.components.iter().find(|c| c.name() == name)
    }

    /// Resolves an edge to its endpoint components.
    pub fn endpoints(&self, edge: &Edge) -> (&Component, &Component) {
        (
            &self.components[edge.source],
            &self.components[edge.target],
        )
    }
}

/// Indexes a per-component table, rejecting duplicates and unknown names.
fn index_by_component<R, V>(
    table: &[R],
    table_name: &'static str,
    rows: &IndexMap<&'static str, Vec<PortRecord>>,
    key: impl Fn(&R) -> &'static str,
    value: impl Fn(&R) -> V,
) -> Result<HashMap<&'static str, V>, TopologyError> {
    let mut index = HashMap::with_capacity(table.len());
    for row in table {
        let component = key(row);
        if !rows.contains_key(component) {
            return Err(TopologyError::UnknownComponent {
                component,
                table: table_name,
            });
        }
        match index.entry(component) {
            Entry::Occupied(_) => {
                return Err(TopologyError::DuplicateEntry {
                    component,
                    table: table_name,
                });
            }
            Entry::Vacant(slot) => {
                slot.insert(value(row));
            }
        }
    }
    Ok(index)
}

fn resolve_palette(
    palette: &[PaletteEntry],
) -> Result<HashMap<ComponentKind, Color>, TopologyError> {
    let mut colors = HashMap::with_capacity(palette.len());
    for entry in palette {
        let kind = entry.kind();
        let color = Color::new(entry.color())
            .map_err(|reason| TopologyError::InvalidColor { kind, reason })?;
        if colors.insert(kind, color).is_some() {
            return Err(TopologyError::DuplicateEntry {
                component: kind.name(),
                table: "palette",
            });
        }
    }
    Ok(colors)
}

/// One legend entry per kind, attached to the first component of that kind.
///
/// Components are in name order, so entries follow the first component name
/// of each kind (Alerting, Exporter, Visualization, ...) rather than the
/// order the kinds are declared in.
fn build_legend(components: &[Component]) -> Vec<LegendEntry> {
    let mut seen = HashSet::new();
    components
        .iter()
        .enumerate()
        .filter(|(_, component)| seen.insert(component.kind()))
        .map(|(idx, component)| LegendEntry {
            kind: component.kind(),
            color: component.color(),
            component: idx,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use netscope_core::{geometry::Point, topology::Protocol};

    use super::*;
    use crate::data;

    #[test]
    fn test_builtin_tables_are_consistent() {
        let topology = Topology::from_tables(data::builtin_tables()).unwrap();
        assert_eq!(topology.components().len(), 9);
        assert_eq!(topology.edges().len(), data::CONNECTIONS.len());
    }

    #[test]
    fn test_every_connection_resolves() {
        let topology = Topology::from_tables(data::builtin_tables()).unwrap();
        for (edge, connection) in topology.edges().iter().zip(data::CONNECTIONS) {
            let (source, target) = topology.endpoints(edge);
            assert_eq!(source.name(), connection.source());
            assert_eq!(target.name(), connection.target());
        }
    }

    #[test]
    fn test_components_sorted_by_name() {
        let topology = Topology::from_tables(data::builtin_tables()).unwrap();
        let names: Vec<_> = topology.components().iter().map(|c| c.name()).collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
        assert_eq!(names[0], "Alertmanager");
    }

    #[test]
    fn test_multi_port_component_is_one_node() {
        let topology = Topology::from_tables(data::builtin_tables()).unwrap();
        let servers: Vec<_> = topology
            .components()
            .iter()
            .filter(|c| c.name() == "Zabbix Server")
            .collect();
        assert_eq!(servers.len(), 1);

        let server = servers[0];
        assert_eq!(server.ports().len(), 2);
        assert_eq!(server.security(), "Basic Auth + SSL");
        let hover = server.hover_text();
        assert!(hover.contains("Port 80 (HTTP)"));
        assert!(hover.contains("Port 10051 (TCP)"));
    }

    #[test]
    fn test_legend_has_one_entry_per_kind() {
        let topology = Topology::from_tables(data::builtin_tables()).unwrap();
        let legend = topology.legend();
        assert_eq!(legend.len(), ComponentKind::ALL.len());

        let kinds: HashSet<_> = legend.iter().map(LegendEntry::kind).collect();
        assert_eq!(kinds.len(), legend.len());

        // Exporters first appear at "Blackbox Exporter" in name order
        let exporter = legend
            .iter()
            .find(|entry| entry.kind() == ComponentKind::Exporter)
            .unwrap();
        assert_eq!(
            topology.components()[exporter.component()].name(),
            "Blackbox Exporter"
        );
    }

    #[test]
    fn test_legend_follows_component_name_order() {
        let topology = Topology::from_tables(data::builtin_tables()).unwrap();
        let kinds: Vec<_> = topology.legend().iter().map(LegendEntry::kind).collect();
        assert_eq!(
            kinds,
            [
                ComponentKind::Alerting,
                ComponentKind::Exporter,
                ComponentKind::Visualization,
                ComponentKind::Database,
                ComponentKind::Collection,
                ComponentKind::Agent,
                ComponentKind::Server,
            ]
        );
    }

    #[test]
    fn test_legend_independent_of_row_order() {
        let mut reversed_ports = data::PORTS.to_vec();
        reversed_ports.reverse();
        let tables = TopologyTables {
            ports: &reversed_ports,
            ..data::builtin_tables()
        };

        let forward = Topology::from_tables(data::builtin_tables()).unwrap();
        let backward = Topology::from_tables(tables).unwrap();
        assert_eq!(forward.legend(), backward.legend());
    }

    #[test]
    fn test_unknown_connection_endpoint() {
        let connections = [Connection::new("Prometheus", "Grafna")];
        let tables = TopologyTables {
            connections: &connections,
            ..data::builtin_tables()
        };
        assert_eq!(
            Topology::from_tables(tables).unwrap_err(),
            TopologyError::UnknownComponent {
                component: "Grafna",
                table: "connection",
            }
        );
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let connections = [Connection::new("prometheus", "Grafana")];
        let tables = TopologyTables {
            connections: &connections,
            ..data::builtin_tables()
        };
        assert!(Topology::from_tables(tables).is_err());
    }

    #[test]
    fn test_missing_position() {
        let placements: Vec<_> = data::PLACEMENTS
            .iter()
            .copied()
            .filter(|p| p.component() != "Grafana")
            .collect();
        let tables = TopologyTables {
            placements: &placements,
            ..data::builtin_tables()
        };
        assert_eq!(
            Topology::from_tables(tables).unwrap_err(),
            TopologyError::MissingPosition {
                component: "Grafana"
            }
        );
    }

    #[test]
    fn test_missing_kind() {
        let kinds: Vec<_> = data::KINDS
            .iter()
            .copied()
            .filter(|k| k.component() != "Zabbix Agent")
            .collect();
        let tables = TopologyTables {
            kinds: &kinds,
            ..data::builtin_tables()
        };
        assert_eq!(
            Topology::from_tables(tables).unwrap_err(),
            TopologyError::MissingKind {
                component: "Zabbix Agent"
            }
        );
    }

    #[test]
    fn test_missing_color() {
        let palette: Vec<_> = data::PALETTE
            .iter()
            .copied()
            .filter(|p| p.kind() != ComponentKind::Database)
            .collect();
        let tables = TopologyTables {
            palette: &palette,
            ..data::builtin_tables()
        };
        assert_eq!(
            Topology::from_tables(tables).unwrap_err(),
            TopologyError::MissingColor {
                kind: ComponentKind::Database
            }
        );
    }

    #[test]
    fn test_invalid_color() {
        let palette = [PaletteEntry::new(ComponentKind::Exporter, "#zzzzzz")];
        let tables = TopologyTables {
            palette: &palette,
            ..data::builtin_tables()
        };
        assert!(matches!(
            Topology::from_tables(tables),
            Err(TopologyError::InvalidColor {
                kind: ComponentKind::Exporter,
                ..
            })
        ));
    }

    #[test]
    fn test_placement_for_unknown_component() {
        let mut placements = data::PLACEMENTS.to_vec();
        placements.push(Placement::new("Loki", 4.0, 1.0));
        let tables = TopologyTables {
            placements: &placements,
            ..data::builtin_tables()
        };
        assert_eq!(
            Topology::from_tables(tables).unwrap_err(),
            TopologyError::UnknownComponent {
                component: "Loki",
                table: "placement",
            }
        );
    }

    #[test]
    fn test_duplicate_placement() {
        let mut placements = data::PLACEMENTS.to_vec();
        placements.push(Placement::new("Grafana", 4.0, 1.0));
        let tables = TopologyTables {
            placements: &placements,
            ..data::builtin_tables()
        };
        assert_eq!(
            Topology::from_tables(tables).unwrap_err(),
            TopologyError::DuplicateEntry {
                component: "Grafana",
                table: "placement",
            }
        );
    }

    #[test]
    fn test_small_custom_topology() {
        let ports = [
            PortRecord::new("a", 1, Protocol::Tcp, "x", "none"),
            PortRecord::new("b", 2, Protocol::Http, "y", "none"),
        ];
        let placements = [Placement::new("a", 1.0, 1.0), Placement::new("b", 2.0, 2.0)];
        let kinds = [
            KindAssignment::new("a", ComponentKind::Agent),
            KindAssignment::new("b", ComponentKind::Agent),
        ];
        let palette = [PaletteEntry::new(ComponentKind::Agent, "red")];
        let connections = [Connection::new("a", "b")];

        let topology = Topology::from_tables(TopologyTables {
            ports: &ports,
            placements: &placements,
            kinds: &kinds,
            palette: &palette,
            connections: &connections,
        })
        .unwrap();

        assert_eq!(topology.legend().len(), 1);
        assert_eq!(topology.legend()[0].component(), 0);
        assert_eq!(
            topology.component("b").unwrap().position(),
            Point::new(2.0, 2.0)
        );
    }
}

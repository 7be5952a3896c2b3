//! Built-in topology tables for the reference monitoring stack.
//!
//! Zabbix covers agent-based host monitoring, Prometheus with its exporters
//! covers metrics scraping, and Grafana/Alertmanager sit on the right-hand
//! side of the diagram. Exporters and agents are placed at `x = 1`,
//! collectors in the middle, dashboards and alerting at `x = 5`.

use netscope_core::topology::{
    ComponentKind, Connection, KindAssignment, PaletteEntry, Placement, PortRecord, Protocol,
};

use crate::structure::TopologyTables;

pub const PORTS: &[PortRecord] = &[
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
    PortRecord::new(
        "Zabbix Agent",
        10050,
        Protocol::Tcp,
        "Agent Communication",
        "PSK/TLS",
    ),
    PortRecord::new(
        "Prometheus",
        9090,
        Protocol::Http,
        "Metrics Collection",
        "Basic Auth + SSL",
    ),
    PortRecord::new(
        "Grafana",
        3000,
        Protocol::Http,
        "Dashboard Interface",
        "User Auth + SSL",
    ),
    PortRecord::new(
        "Alertmanager",
        9093,
        Protocol::Http,
        "Alert Management",
        "Basic Auth + SSL",
    ),
    PortRecord::new(
        "Node Exporter",
        9100,
        Protocol::Http,
        "System Metrics",
        "Firewall Restricted",
    ),
    PortRecord::new(
        "SNMP Exporter",
        9116,
        Protocol::Http,
        "Network Device Metrics",
        "Internal Only",
    ),
    PortRecord::new(
        "Blackbox Exporter",
        9115,
        Protocol::Http,
        "HTTP/HTTPS Probes",
        "Internal Only",
    ),
    PortRecord::new(
        "MySQL/MariaDB",
        3306,
        Protocol::Tcp,
        "Database",
        "User Auth + SSL",
    ),
];

pub const PLACEMENTS: &[Placement] = &[
    Placement::new("Node Exporter", 1.0, 3.0),
    Placement::new("SNMP Exporter", 1.0, 2.0),
    Placement::new("Blackbox Exporter", 1.0, 1.0),
    Placement::new("Zabbix Agent", 1.0, 4.0),
    Placement::new("Prometheus", 3.0, 2.5),
    Placement::new("Zabbix Server", 3.0, 4.0),
    Placement::new("MySQL/MariaDB", 4.0, 4.0),
    Placement::new("Grafana", 5.0, 3.0),
    Placement::new("Alertmanager", 5.0, 2.0),
];

pub const KINDS: &[KindAssignment] = &[
    KindAssignment::new("Node Exporter", ComponentKind::Exporter),
    KindAssignment::new("SNMP Exporter", ComponentKind::Exporter),
    KindAssignment::new("Blackbox Exporter", ComponentKind::Exporter),
    KindAssignment::new("Zabbix Agent", ComponentKind::Agent),
    KindAssignment::new("Prometheus", ComponentKind::Collection),
    KindAssignment::new("Zabbix Server", ComponentKind::Server),
    KindAssignment::new("MySQL/MariaDB", ComponentKind::Database),
    KindAssignment::new("Grafana", ComponentKind::Visualization),
    KindAssignment::new("Alertmanager", ComponentKind::Alerting),
];

pub const PALETTE: &[PaletteEntry] = &[
    PaletteEntry::new(ComponentKind::Exporter, "#1FB8CD"),
    PaletteEntry::new(ComponentKind::Agent, "#DB4545"),
    PaletteEntry::new(ComponentKind::Collection, "#2E8B57"),
    PaletteEntry::new(ComponentKind::Server, "#5D878F"),
    PaletteEntry::new(ComponentKind::Database, "#D2BA4C"),
    PaletteEntry::new(ComponentKind::Visualization, "#B4413C"),
    PaletteEntry::new(ComponentKind::Alerting, "#964325"),
];

pub const CONNECTIONS: &[Connection] = &[
    Connection::new("Node Exporter", "Prometheus"),
    Connection::new("SNMP Exporter", "Prometheus"),
    Connection::new("Blackbox Exporter", "Prometheus"),
    Connection::new("Zabbix Agent", "Zabbix Server"),
    Connection::new("Zabbix Server", "MySQL/MariaDB"),
    Connection::new("Prometheus", "Grafana"),
    Connection::new("Prometheus", "Alertmanager"),
    Connection::new("Zabbix Server", "Grafana"),
];

/// The built-in tables bundled together.
pub fn builtin_tables() -> TopologyTables<'static> {
    TopologyTables {
        ports: PORTS,
        placements: PLACEMENTS,
        kinds: KINDS,
        palette: PALETTE,
        connections: CONNECTIONS,
    }
}

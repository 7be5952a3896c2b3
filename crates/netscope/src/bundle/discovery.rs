//! Zabbix network auto-discovery policy.
//!
//! The policy is plain data serialized with `serde_json`. Field order in the
//! structs is the order of keys in the emitted JSON.

use serde::{Deserialize, Serialize};

/// A discovery rule: which address range to scan, how, and what to do with
/// the hosts found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoveryPolicy {
    pub name: String,
    pub ip_range: String,
    pub update_interval: String,
    pub checks: Vec<DiscoveryCheck>,
    pub actions: Vec<DiscoveryAction>,
}

/// A single probe run against each address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoveryCheck {
    #[serde(rename = "type")]
    pub check_type: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub community: Option<String>,
}

impl DiscoveryCheck {
    fn new(check_type: &str, port: Option<&str>) -> Self {
        Self {
            check_type: check_type.to_string(),
            port: port.map(str::to_string),
            community: None,
        }
    }

    fn with_community(mut self, community: &str) -> Self {
        self.community = Some(community.to_string());
        self
    }
}

/// Operations applied to discovered hosts matching `condition`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoveryAction {
    pub name: String,
    pub condition: String,
    pub operations: Vec<String>,
}

impl DiscoveryAction {
    fn new(name: &str, condition: &str, operations: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            condition: condition.to_string(),
            operations: operations.iter().map(|op| op.to_string()).collect(),
        }
    }
}

impl DiscoveryPolicy {
    /// The policy shipped with the monitoring stack.
    pub fn builtin() -> Self {
        Self {
            name: "Network Auto Discovery".to_string(),
            ip_range: "192.168.1.1-192.168.1.254".to_string(),
            update_interval: "10m".to_string(),
            checks: vec![
                DiscoveryCheck::new("SNMP", Some("161")).with_community("public"),
                DiscoveryCheck::new("SSH", Some("22")),
                DiscoveryCheck::new("HTTP", Some("80")),
                DiscoveryCheck::new("HTTPS", Some("443")),
                DiscoveryCheck::new("Zabbix_agent", Some("10050")),
                DiscoveryCheck::new("ICMP_ping", None),
            ],
            actions: vec![
                DiscoveryAction::new(
                    "Add Linux Servers",
                    "Zabbix agent and system.uname contains Linux",
                    &[
                        "Add host",
                        "Add to group: Linux servers",
                        "Link template: Linux by Zabbix agent",
                    ],
                ),
                DiscoveryAction::new(
                    "Add Windows Servers",
                    "Zabbix agent and system.uname contains Windows",
                    &[
                        "Add host",
                        "Add to group: Windows servers",
                        "Link template: Windows by Zabbix agent",
                    ],
                ),
                DiscoveryAction::new(
                    "Add Network Devices",
                    "SNMP and sysDescr contains (switch|router|firewall)",
                    &[
                        "Add host",
                        "Add to group: Network devices",
                        "Link template: Generic SNMP",
                    ],
                ),
            ],
        }
    }

    /// Pretty JSON with two-space indentation.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

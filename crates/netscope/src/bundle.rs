//! Configuration bundle for the monitoring stack.
//!
//! A [`Bundle`] maps relative output paths to file contents. It is produced
//! by [`Bundle::generate`] from compile-time data only, so generating it
//! twice yields identical content. Only [`Bundle::write_to`] touches the
//! filesystem.
//!
//! Secrets (SMTP password, Telegram bot token and chat id) are left as
//! placeholders in the emitted files.

pub mod discovery;

use std::{
    fs,
    path::{Path, PathBuf},
};

use indexmap::IndexMap;
use log::{debug, info};

use crate::error::NetscopeError;

pub use discovery::DiscoveryPolicy;

pub const DISCOVERY_KEY: &str = "zabbix_discovery.json";
pub const PROMETHEUS_KEY: &str = "prometheus.yml";
pub const ALERT_RULES_KEY: &str = "alert_rules.yml";
pub const ALERTMANAGER_KEY: &str = "alertmanager.yml";
pub const DOCKER_COMPOSE_KEY: &str = "docker-compose.yml";
pub const GRAFANA_DATASOURCE_KEY: &str = "grafana/provisioning/datasources/prometheus.yml";
pub const INSTALL_KEY: &str = "install.sh";
pub const SECURITY_SETUP_KEY: &str = "security_setup.sh";

/// Literal templates, in bundle order after the discovery policy.
const TEMPLATES: &[(&str, &str)] = &[
    (PROMETHEUS_KEY, include_str!("../templates/prometheus.yml")),
    (ALERT_RULES_KEY, include_str!("../templates/alert_rules.yml")),
    (ALERTMANAGER_KEY, include_str!("../templates/alertmanager.yml")),
    (DOCKER_COMPOSE_KEY, include_str!("../templates/docker-compose.yml")),
    (
        GRAFANA_DATASOURCE_KEY,
        include_str!("../templates/grafana_datasource.yml"),
    ),
    (INSTALL_KEY, include_str!("../templates/install.sh")),
    (SECURITY_SETUP_KEY, include_str!("../templates/security_setup.sh")),
];

/// Rendered configuration files keyed by relative path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bundle {
    entries: IndexMap<&'static str, String>,
}

impl Bundle {
    /// Renders every artifact of the monitoring stack.
    ///
    /// # Errors
    ///
    /// Returns [`NetscopeError::Config`] if the discovery policy cannot be
    /// serialized.
    pub fn generate() -> Result<Self, NetscopeError> {
        let discovery = DiscoveryPolicy::builtin()
            .to_json()
            .map_err(|err| NetscopeError::Config(format!("discovery policy: {err}")))?;

        let mut entries = IndexMap::with_capacity(TEMPLATES.len() + 1);
        entries.insert(DISCOVERY_KEY, discovery);
        for (key, content) in TEMPLATES {
            entries.insert(*key, (*content).to_string());
        }

        debug!(entries = entries.len(); "Bundle generated");
        Ok(Self { entries })
    }

    /// Content of the entry at `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    /// Entries in generation order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.entries
            .iter()
            .map(|(key, content)| (*key, content.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Per-entry character counts and their total.
    pub fn summary(&self) -> BundleSummary {
        let entries: Vec<SummaryEntry> = self
            .iter()
            .map(|(key, content)| SummaryEntry {
                key,
                chars: content.chars().count(),
            })
            .collect();
        let total_chars = entries.iter().map(|entry| entry.chars).sum();

        BundleSummary {
            entries,
            total_chars,
        }
    }

    /// Writes every entry below `dir`, creating parent directories as needed.
    ///
    /// Returns the written paths in bundle order.
    ///
    /// # Errors
    ///
    /// Returns [`NetscopeError::Write`] for the first file or directory that
    /// cannot be created. Files written before the failure are left in place.
    pub fn write_to(&self, dir: impl AsRef<Path>) -> Result<Vec<PathBuf>, NetscopeError> {
        let dir = dir.as_ref();
        let mut written = Vec::with_capacity(self.entries.len());

        for (key, content) in self.iter() {
            let path = dir.join(key);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)
                    .map_err(|err| NetscopeError::new_write_error(parent, err))?;
            }
            fs::write(&path, content).map_err(|err| NetscopeError::new_write_error(&path, err))?;
            debug!(path:? = path, bytes = content.len(); "Wrote bundle entry");
            written.push(path);
        }

        info!(dir:? = dir, files = written.len(); "Bundle written");
        Ok(written)
    }
}

/// Character count of one bundle entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryEntry {
    key: &'static str,
    chars: usize,
}

impl SummaryEntry {
    pub fn key(&self) -> &'static str {
        self.key
    }

    /// Length in characters, not bytes.
    pub fn chars(&self) -> usize {
        self.chars
    }
}

/// Size report over a whole bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleSummary {
    entries: Vec<SummaryEntry>,
    total_chars: usize,
}

impl BundleSummary {
    pub fn entries(&self) -> &[SummaryEntry] {
        &self.entries
    }

    pub fn total_chars(&self) -> usize {
        self.total_chars
    }

    pub fn file_count(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_in_generation_order() {
        let bundle = Bundle::generate().unwrap();
        let keys: Vec<_> = bundle.keys().collect();
        assert_eq!(
            keys,
            [
                DISCOVERY_KEY,
                PROMETHEUS_KEY,
                ALERT_RULES_KEY,
                ALERTMANAGER_KEY,
                DOCKER_COMPOSE_KEY,
                GRAFANA_DATASOURCE_KEY,
                INSTALL_KEY,
                SECURITY_SETUP_KEY,
            ]
        );
    }

    #[test]
    fn test_summary_counts_characters() {
        let bundle = Bundle::generate().unwrap();
        let summary = bundle.summary();

        assert_eq!(summary.file_count(), 8);
        let install = summary
            .entries()
            .iter()
            .find(|entry| entry.key() == INSTALL_KEY)
            .unwrap();
        // The installer contains multi-byte emoji
        assert!(install.chars() < bundle.get(INSTALL_KEY).unwrap().len());
        assert_eq!(install.chars(), 3696);
    }

    #[test]
    fn test_templates_keep_literal_escapes() {
        let bundle = Bundle::generate().unwrap();

        let install = bundle.get(INSTALL_KEY).unwrap();
        assert!(install.starts_with("#!/bin/bash\n"));
        assert!(install.contains(r"RED='\033[0;31m'"));

        let security = bundle.get(SECURITY_SETUP_KEY).unwrap();
        assert!(security.contains(r"return 301 https://\$host\$request_uri;"));
    }

    #[test]
    fn test_secret_placeholders_unresolved() {
        let bundle = Bundle::generate().unwrap();
        let alertmanager = bundle.get(ALERTMANAGER_KEY).unwrap();
        assert!(alertmanager.contains("YOUR_BOT_TOKEN"));
    }

    #[test]
    fn test_missing_key() {
        let bundle = Bundle::generate().unwrap();
        assert_eq!(bundle.get("nginx.conf"), None);
        assert!(!bundle.is_empty());
    }
}

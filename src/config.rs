// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Typed runtime configuration with an optional JSON override file.
//!
//! Defaults are compiled in; an optional `config.json` next to the binary
//! (or wherever `--config` points) may override individual keys:
//!
//! ```json
//! {
//!   "aws": { "region": "eu-west-1" },
//!   "dns": { "ttl": 60, "ignoreZones": ["Z3EXAMPLE", "legacy.example.com"] }
//! }
//! ```
//!
//! The key set is closed: unknown keys fail the parse. A missing or invalid
//! file is not fatal; the run proceeds on defaults with only a debug trace,
//! so a scheduler-invoked run never dies over a config typo.

use std::collections::BTreeSet;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::constants::{DEFAULT_AWS_REGION, DEFAULT_DNS_RECORD_TTL_SECS};

/// Effective configuration for one reconciliation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// AWS service settings
    pub aws: AwsConfig,
    /// DNS record settings
    pub dns: DnsConfig,
}

/// AWS service settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AwsConfig {
    /// Target region for all service calls
    pub region: String,
}

/// DNS record settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsConfig {
    /// TTL in seconds applied to every emitted mutation
    pub ttl: i64,
    /// Zone domains or zone ids excluded entirely from mutation
    pub ignore_zones: BTreeSet<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            aws: AwsConfig {
                region: DEFAULT_AWS_REGION.to_string(),
            },
            dns: DnsConfig {
                ttl: DEFAULT_DNS_RECORD_TTL_SECS,
                ignore_zones: BTreeSet::new(),
            },
        }
    }
}

impl DnsConfig {
    /// True when the zone's domain or id is excluded from mutation.
    #[must_use]
    pub fn ignores(&self, zone_id: &str, zone_domain: &str) -> bool {
        self.ignore_zones.contains(zone_id) || self.ignore_zones.contains(zone_domain)
    }
}

/// Override file shape. Every key optional, unknown keys rejected.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigOverrides {
    /// Overrides for [`AwsConfig`]
    #[serde(default)]
    pub aws: Option<AwsOverrides>,
    /// Overrides for [`DnsConfig`]
    #[serde(default)]
    pub dns: Option<DnsOverrides>,
}

/// Optional overrides for the `aws` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AwsOverrides {
    /// Target region
    #[serde(default)]
    pub region: Option<String>,
}

/// Optional overrides for the `dns` section. Keys are camelCase in the
/// file (`ignoreZones`), matching the historical config format.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct DnsOverrides {
    /// Mutation TTL in seconds
    #[serde(default)]
    pub ttl: Option<i64>,
    /// Zone domains or ids to exclude from mutation
    #[serde(default)]
    pub ignore_zones: Option<Vec<String>>,
}

impl Config {
    /// Load configuration: defaults, overlaid with the file at `path` if it
    /// exists and parses. A missing or invalid file silently yields the
    /// defaults.
    #[must_use]
    pub fn load(path: &Path) -> Self {
        let overrides = match std::fs::read_to_string(path) {
            Ok(raw) => match serde_json::from_str::<ConfigOverrides>(&raw) {
                Ok(overrides) => overrides,
                Err(e) => {
                    debug!(path = %path.display(), error = %e, "Config file invalid, using defaults");
                    return Self::default();
                }
            },
            Err(e) => {
                debug!(path = %path.display(), error = %e, "Config file not readable, using defaults");
                return Self::default();
            }
        };

        Self::default().merged(overrides)
    }

    /// Overlay `overrides` onto this configuration, key by key.
    #[must_use]
    pub fn merged(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(aws) = overrides.aws {
            if let Some(region) = aws.region {
                self.aws.region = region;
            }
        }
        if let Some(dns) = overrides.dns {
            if let Some(ttl) = dns.ttl {
                self.dns.ttl = ttl;
            }
            if let Some(ignore_zones) = dns.ignore_zones {
                self.dns.ignore_zones = ignore_zones.into_iter().collect();
            }
        }
        self
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;

// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Hosted zone index and hostname-to-zone resolution.
//!
//! The index is built once per run from the zone lister's output and is
//! immutable for the duration of the run. Resolution picks the most
//! specific zone whose domain is a literal suffix of the hostname.

use crate::providers::HostedZoneSummary;

/// A hosted DNS zone the reconciler may write into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Zone {
    /// Opaque zone identifier, as used by the record lister and mutator
    pub id: String,
    /// Fully-qualified domain suffix, without the trailing root dot
    pub domain: String,
}

impl Zone {
    /// Build a zone from the lister's raw summary, stripping the zone
    /// service's trailing root dot from the fully-qualified name.
    #[must_use]
    pub fn from_summary(summary: &HostedZoneSummary) -> Self {
        let domain = summary
            .fully_qualified_name
            .strip_suffix('.')
            .unwrap_or(&summary.fully_qualified_name)
            .to_string();
        Self {
            id: summary.id.clone(),
            domain,
        }
    }
}

/// The set of known zones for one reconciliation run.
#[derive(Debug, Clone, Default)]
pub struct ZoneIndex {
    zones: Vec<Zone>,
}

impl ZoneIndex {
    /// Build the index from the zone lister's output, preserving its order.
    #[must_use]
    pub fn new(summaries: &[HostedZoneSummary]) -> Self {
        Self {
            zones: summaries.iter().map(Zone::from_summary).collect(),
        }
    }

    /// Build the index directly from zones. Test and embedding convenience.
    #[must_use]
    pub fn from_zones(zones: Vec<Zone>) -> Self {
        Self { zones }
    }

    /// Resolve a hostname to the most specific zone that could host it.
    ///
    /// A zone matches when its domain is a suffix of `hostname`. The match is
    /// on the literal trailing character sequence and is not required to be
    /// label-aligned: `"notexample.com"` is hosted by a zone for
    /// `"example.com"` if no longer match exists. Among matches the longest
    /// domain wins; when two matching domains have equal length, the *last*
    /// one in index order wins (the scan keeps updating on `<=`). Equal-length
    /// zone domains are not expected in practice, but the tie-break is load
    /// bearing for routing and must not be changed silently.
    ///
    /// Returns `None` when no zone's domain is a suffix of the hostname.
    #[must_use]
    pub fn resolve(&self, hostname: &str) -> Option<&Zone> {
        let mut last_matching: Option<&Zone> = None;
        for zone in &self.zones {
            if hostname.ends_with(&zone.domain)
                && last_matching.is_none_or(|m| m.domain.len() <= zone.domain.len())
            {
                last_matching = Some(zone);
            }
        }
        last_matching
    }

    /// Number of zones in the index.
    #[must_use]
    pub fn len(&self) -> usize {
        self.zones.len()
    }

    /// True when the index holds no zones.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }
}

#[cfg(test)]
#[path = "zones_tests.rs"]
mod zones_tests;

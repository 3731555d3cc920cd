// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Normalization of raw compute inventory into instance descriptors.
//!
//! The instance lister already filters to running instances carrying the
//! hostnames tag, but raw rows stay defensive: a row missing the tag or the
//! private address is excluded here with a debug trace, never an error.

use tracing::debug;

use crate::providers::RawInstance;

/// A running instance in the uniform shape the desired-state builder
/// consumes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceDescriptor {
    /// Instance identifier, for logging only
    pub id: String,
    /// Hostnames from the tag value, split on commas and trimmed; non-empty
    pub hostnames: Vec<String>,
    /// Private address, always present
    pub private_address: String,
    /// Public address, absent for instances without one
    pub public_address: Option<String>,
}

/// Extract descriptors from raw inventory rows, preserving input order.
///
/// Rows without the hostnames tag (or whose tag value trims down to
/// nothing), and rows without a private address, contribute nothing and
/// are skipped per-instance; the run as a whole is unaffected.
#[must_use]
pub fn extract_descriptors(instances: &[RawInstance], tag_key: &str) -> Vec<InstanceDescriptor> {
    instances
        .iter()
        .filter_map(|raw| extract_descriptor(raw, tag_key))
        .collect()
}

/// Extract a single descriptor, or `None` if the row is unusable.
fn extract_descriptor(raw: &RawInstance, tag_key: &str) -> Option<InstanceDescriptor> {
    let Some(tag_value) = raw.tags.get(tag_key) else {
        debug!(instance = %raw.id, tag = tag_key, "Instance has no hostnames tag, skipping");
        return None;
    };

    let hostnames = split_hostnames(tag_value);
    if hostnames.is_empty() {
        debug!(instance = %raw.id, tag = tag_key, "Hostnames tag is empty after trimming, skipping");
        return None;
    }

    let Some(private_address) = raw.private_address.clone() else {
        debug!(instance = %raw.id, "Instance has no private address, skipping");
        return None;
    };

    Some(InstanceDescriptor {
        id: raw.id.clone(),
        hostnames,
        private_address,
        public_address: raw.public_address.clone(),
    })
}

/// Split a hostnames tag value on commas, trimming each segment and
/// dropping segments that trim to nothing.
#[must_use]
pub fn split_hostnames(tag_value: &str) -> Vec<String> {
    tag_value
        .split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
#[path = "inventory_tests.rs"]
mod inventory_tests;

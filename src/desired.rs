// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Desired-state construction from instance descriptors.
//!
//! Walks every hostname of every instance, resolves its owning zone, and
//! accumulates the UPSERT mutations that should exist for it: a public
//! record when the instance has a public address, always a `private.`
//! record, and for cluster members a contribution to the cluster's
//! multi-value records. Cluster mutations are appended after all
//! individual mutations so ordering is deterministic within a run.
//!
//! A mutation with an empty value list is never emitted; the only place
//! that could arise is a cluster whose members all lack public addresses,
//! and that cluster simply gets no public record.

use std::collections::BTreeMap;

use tracing::{debug, trace};

use crate::config::DnsConfig;
use crate::constants::PRIVATE_RECORD_PREFIX;
use crate::hostnames::cluster_key;
use crate::inventory::InstanceDescriptor;
use crate::records::{RecordMutation, ZoneChangeSet};
use crate::zones::ZoneIndex;

/// Addresses gathered for one cluster key across the whole fleet.
///
/// Built fresh each run and discarded after the cluster mutations are
/// emitted. Addresses keep discovery order; duplicates are kept as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClusterGroup {
    /// Zone owning the cluster records, recorded on first sight of the key
    pub zone_id: String,
    /// Private addresses of all members
    pub private_addresses: Vec<String>,
    /// Public addresses of members that have one
    pub public_addresses: Vec<String>,
}

/// The full desired state for one run.
#[derive(Debug, Clone, Default)]
pub struct DesiredState {
    /// Pending mutations per zone
    pub changes: ZoneChangeSet,
    /// Cluster groups by cluster key, for reporting and tests
    pub clusters: BTreeMap<String, ClusterGroup>,
}

/// Build the desired record state for the given fleet.
///
/// Hostnames that resolve to no zone, or to a zone excluded by
/// `dns.ignoreZones` (by id or by domain), contribute nothing at all:
/// no individual records and no cluster membership.
#[must_use]
pub fn build_desired_state(
    instances: &[InstanceDescriptor],
    zones: &ZoneIndex,
    dns: &DnsConfig,
) -> DesiredState {
    let mut changes: ZoneChangeSet = ZoneChangeSet::new();
    let mut clusters: BTreeMap<String, ClusterGroup> = BTreeMap::new();

    for instance in instances {
        for hostname in &instance.hostnames {
            let Some(zone) = zones.resolve(hostname) else {
                debug!(instance = %instance.id, hostname = %hostname, "No zone hosts this hostname, skipping");
                continue;
            };
            if dns.ignores(&zone.id, &zone.domain) {
                debug!(
                    instance = %instance.id,
                    hostname = %hostname,
                    zone = %zone.domain,
                    "Zone is on the ignore list, skipping"
                );
                continue;
            }

            let zone_changes = changes.entry(zone.id.clone()).or_default();

            if let Some(public) = &instance.public_address {
                zone_changes.push(RecordMutation::upsert(
                    hostname.clone(),
                    dns.ttl,
                    vec![public.clone()],
                ));
            }
            zone_changes.push(RecordMutation::upsert(
                format!("{PRIVATE_RECORD_PREFIX}{hostname}"),
                dns.ttl,
                vec![instance.private_address.clone()],
            ));

            if let Some(key) = cluster_key(hostname) {
                let group = clusters.entry(key.to_string()).or_insert_with(|| {
                    trace!(cluster = key, zone = %zone.id, "New cluster group");
                    ClusterGroup {
                        zone_id: zone.id.clone(),
                        ..ClusterGroup::default()
                    }
                });
                group
                    .private_addresses
                    .push(instance.private_address.clone());
                if let Some(public) = &instance.public_address {
                    group.public_addresses.push(public.clone());
                }
            }
        }
    }

    for (key, group) in &clusters {
        let zone_changes = changes.entry(group.zone_id.clone()).or_default();
        if !group.public_addresses.is_empty() {
            zone_changes.push(RecordMutation::upsert(
                key.clone(),
                dns.ttl,
                group.public_addresses.clone(),
            ));
        }
        zone_changes.push(RecordMutation::upsert(
            format!("{PRIVATE_RECORD_PREFIX}{key}"),
            dns.ttl,
            group.private_addresses.clone(),
        ));
    }

    DesiredState { changes, clusters }
}

#[cfg(test)]
#[path = "desired_tests.rs"]
mod desired_tests;

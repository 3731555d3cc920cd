// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Hostname classification for cluster grouping.
//!
//! Hostnames like `0007.worker.example.com` name one member of a cluster:
//! a four-digit ordinal, a dot, then the cluster's shared suffix. Such a
//! hostname gets its own records *and* feeds the cluster's multi-value
//! records under the suffix. Anything else only gets individual records.

use crate::constants::CLUSTER_ORDINAL_DIGITS;

/// How a hostname participates in record generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostnameClass<'a> {
    /// The hostname as given; always gets individual records
    pub hostname: &'a str,
    /// Cluster key the hostname additionally contributes to, if any
    pub cluster_key: Option<&'a str>,
}

/// Classify a hostname for record generation.
#[must_use]
pub fn classify(hostname: &str) -> HostnameClass<'_> {
    HostnameClass {
        hostname,
        cluster_key: cluster_key(hostname),
    }
}

/// Extract the cluster key from a hostname, if it has one.
///
/// The rule is exact: the hostname must start with exactly four ASCII
/// digits, followed by a literal `.`, followed by at least one character;
/// the remainder after the dot is the key. Three or five leading digits,
/// a missing dot, or an empty remainder all mean "not a cluster member".
#[must_use]
pub fn cluster_key(hostname: &str) -> Option<&str> {
    let bytes = hostname.as_bytes();
    if bytes.len() <= CLUSTER_ORDINAL_DIGITS + 1 {
        return None;
    }
    if !bytes[..CLUSTER_ORDINAL_DIGITS]
        .iter()
        .all(u8::is_ascii_digit)
    {
        return None;
    }
    if bytes[CLUSTER_ORDINAL_DIGITS] != b'.' {
        return None;
    }
    Some(&hostname[CLUSTER_ORDINAL_DIGITS + 1..])
}

#[cfg(test)]
#[path = "hostnames_tests.rs"]
mod hostnames_tests;

// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Minimal-change computation against a zone's published records.
//!
//! The desired-state builder emits every record that should exist; this
//! module drops the ones that already do. Comparing sorted value sets makes
//! the check order-independent, which is what makes a repeat run with an
//! unchanged fleet produce zero mutations.

use crate::records::{CurrentRecordSet, RecordMutation};

/// Append the zone service's trailing root dot to a record name.
#[must_use]
pub fn with_trailing_dot(name: &str) -> String {
    format!("{name}.")
}

/// Reduce `desired` to the mutations that would actually change the zone.
///
/// A mutation survives when no current record carries its name (a
/// creation), or when the current record's value set differs from the
/// desired one (an update). Value sets are compared sorted, so
/// `[a, b]` and `[b, a]` never produce a diff. Record names in `current`
/// carry the service's trailing dot; desired names do not.
#[must_use]
pub fn diff_zone_changes(
    desired: &[RecordMutation],
    current: &[CurrentRecordSet],
) -> Vec<RecordMutation> {
    desired
        .iter()
        .filter(|mutation| {
            let fqdn = with_trailing_dot(&mutation.name);
            match current.iter().find(|record| record.name == fqdn) {
                Some(record) => !same_value_set(&mutation.values, &record.values),
                None => true,
            }
        })
        .cloned()
        .collect()
}

/// Set equality over address values, ignoring order.
fn same_value_set(desired: &[String], current: &[String]) -> bool {
    let mut desired_sorted = desired.to_vec();
    let mut current_sorted = current.to_vec();
    desired_sorted.sort();
    current_sorted.sort();
    desired_sorted == current_sorted
}

#[cfg(test)]
#[path = "diff_tests.rs"]
mod diff_tests;

// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Unit tests for `diff.rs`

use crate::diff::{diff_zone_changes, with_trailing_dot};
use crate::records::{CurrentRecordSet, RecordMutation};

fn upsert(name: &str, values: &[&str]) -> RecordMutation {
    RecordMutation::upsert(name, 300, values.iter().map(|v| (*v).to_string()).collect())
}

fn current(name: &str, values: &[&str]) -> CurrentRecordSet {
    CurrentRecordSet {
        name: name.to_string(),
        ttl: 300,
        values: values.iter().map(|v| (*v).to_string()).collect(),
    }
}

#[test]
fn test_creation_is_kept() {
    let desired = vec![upsert("web.example.com", &["10.0.0.5"])];

    let surviving = diff_zone_changes(&desired, &[]);

    assert_eq!(surviving, desired);
}

#[test]
fn test_identical_record_is_dropped() {
    let desired = vec![upsert("web.example.com", &["10.0.0.5"])];
    let published = vec![current("web.example.com.", &["10.0.0.5"])];

    assert!(diff_zone_changes(&desired, &published).is_empty());
}

#[test]
fn test_changed_value_is_kept() {
    let desired = vec![upsert("web.example.com", &["10.0.0.6"])];
    let published = vec![current("web.example.com.", &["10.0.0.5"])];

    let surviving = diff_zone_changes(&desired, &published);

    assert_eq!(surviving.len(), 1);
    assert_eq!(surviving[0].values, vec!["10.0.0.6"]);
}

#[test]
fn test_value_order_never_produces_a_diff() {
    let desired = vec![upsert("worker.example.com", &["10.0.0.7", "10.0.0.12"])];
    let published = vec![current("worker.example.com.", &["10.0.0.12", "10.0.0.7"])];

    assert!(diff_zone_changes(&desired, &published).is_empty());
}

#[test]
fn test_subset_of_values_is_kept() {
    // Fewer desired values than published ones is still a change
    let desired = vec![upsert("worker.example.com", &["10.0.0.7"])];
    let published = vec![current("worker.example.com.", &["10.0.0.7", "10.0.0.12"])];

    assert_eq!(diff_zone_changes(&desired, &published).len(), 1);
}

#[test]
fn test_name_match_requires_trailing_dot_form() {
    // A published record without the service's trailing dot is a different
    // name, so the mutation is treated as a creation
    let desired = vec![upsert("web.example.com", &["10.0.0.5"])];
    let published = vec![current("web.example.com", &["10.0.0.5"])];

    assert_eq!(diff_zone_changes(&desired, &published).len(), 1);
}

#[test]
fn test_unrelated_current_records_are_ignored() {
    let desired = vec![upsert("web.example.com", &["10.0.0.5"])];
    let published = vec![
        current("db.example.com.", &["10.0.0.9"]),
        current("web.example.com.", &["10.0.0.5"]),
    ];

    assert!(diff_zone_changes(&desired, &published).is_empty());
}

#[test]
fn test_mixed_survivors_preserve_order() {
    let desired = vec![
        upsert("a.example.com", &["10.0.0.1"]),
        upsert("b.example.com", &["10.0.0.2"]),
        upsert("c.example.com", &["10.0.0.3"]),
    ];
    let published = vec![current("b.example.com.", &["10.0.0.2"])];

    let surviving = diff_zone_changes(&desired, &published);

    assert_eq!(surviving.len(), 2);
    assert_eq!(surviving[0].name, "a.example.com");
    assert_eq!(surviving[1].name, "c.example.com");
}

#[test]
fn test_rerun_after_apply_is_empty() {
    // A kept mutation, once applied, must not reappear against the updated
    // records
    let desired = vec![upsert("worker.example.com", &["10.0.0.7", "10.0.0.12"])];
    let surviving = diff_zone_changes(&desired, &[]);
    assert_eq!(surviving.len(), 1);

    // Model the service applying the batch
    let published: Vec<CurrentRecordSet> = surviving
        .iter()
        .map(|m| CurrentRecordSet {
            name: with_trailing_dot(&m.name),
            ttl: m.ttl,
            values: m.values.clone(),
        })
        .collect();

    assert!(diff_zone_changes(&desired, &published).is_empty());
}

#[test]
fn test_with_trailing_dot() {
    assert_eq!(with_trailing_dot("web.example.com"), "web.example.com.");
}

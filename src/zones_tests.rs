// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Unit tests for `zones.rs`

use crate::providers::HostedZoneSummary;
use crate::zones::{Zone, ZoneIndex};

fn zone(id: &str, domain: &str) -> Zone {
    Zone {
        id: id.to_string(),
        domain: domain.to_string(),
    }
}

#[test]
fn test_from_summary_strips_trailing_dot() {
    let summary = HostedZoneSummary {
        id: "Z1".to_string(),
        fully_qualified_name: "example.com.".to_string(),
    };

    let zone = Zone::from_summary(&summary);

    assert_eq!(zone.id, "Z1");
    assert_eq!(zone.domain, "example.com");
}

#[test]
fn test_from_summary_without_trailing_dot() {
    // Some test fixtures omit the root dot; the name is taken as-is
    let summary = HostedZoneSummary {
        id: "Z1".to_string(),
        fully_qualified_name: "example.com".to_string(),
    };

    assert_eq!(Zone::from_summary(&summary).domain, "example.com");
}

#[test]
fn test_resolve_single_suffix_match() {
    let index = ZoneIndex::from_zones(vec![zone("Z1", "example.com")]);

    let resolved = index.resolve("web.example.com").expect("zone");

    assert_eq!(resolved.id, "Z1");
}

#[test]
fn test_resolve_prefers_longest_domain() {
    let index = ZoneIndex::from_zones(vec![
        zone("Z1", "example.com"),
        zone("Z2", "prod.example.com"),
    ]);

    let resolved = index.resolve("db.prod.example.com").expect("zone");

    assert_eq!(resolved.id, "Z2");
}

#[test]
fn test_resolve_longest_wins_regardless_of_order() {
    let index = ZoneIndex::from_zones(vec![
        zone("Z2", "prod.example.com"),
        zone("Z1", "example.com"),
    ]);

    let resolved = index.resolve("db.prod.example.com").expect("zone");

    assert_eq!(resolved.id, "Z2");
}

#[test]
fn test_resolve_equal_length_last_wins() {
    // Two zones with equal-length matching domains (e.g. the same domain
    // hosted twice): the scan keeps updating on <=, so the *last* one wins.
    // Pinned behavior, not an accident.
    let index = ZoneIndex::from_zones(vec![zone("Z1", "example.com"), zone("Z2", "example.com")]);

    let resolved = index.resolve("web.example.com").expect("zone");

    assert_eq!(resolved.id, "Z2");
}

#[test]
fn test_resolve_suffix_match_is_not_label_aligned() {
    // Literal trailing-character match: "notexample.com" ends with "example.com"
    let index = ZoneIndex::from_zones(vec![zone("Z1", "example.com")]);

    let resolved = index.resolve("notexample.com").expect("zone");

    assert_eq!(resolved.id, "Z1");
}

#[test]
fn test_resolve_no_match() {
    let index = ZoneIndex::from_zones(vec![zone("Z1", "example.com")]);

    assert!(index.resolve("web.example.org").is_none());
}

#[test]
fn test_resolve_empty_index() {
    let index = ZoneIndex::default();

    assert!(index.is_empty());
    assert!(index.resolve("web.example.com").is_none());
}

#[test]
fn test_new_preserves_lister_order() {
    let summaries = vec![
        HostedZoneSummary {
            id: "Z1".to_string(),
            fully_qualified_name: "example.com.".to_string(),
        },
        HostedZoneSummary {
            id: "Z2".to_string(),
            fully_qualified_name: "example.org.".to_string(),
        },
    ];

    let index = ZoneIndex::new(&summaries);

    assert_eq!(index.len(), 2);
    assert_eq!(index.resolve("a.example.org").expect("zone").id, "Z2");
}

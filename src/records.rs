// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Record set types shared by the desired-state builder, the diff engine
//! and the service layer.

use std::collections::BTreeMap;

use crate::constants::ADDRESS_RECORD_TYPE;

/// Action to take on a record set.
///
/// UPSERT is the only action the reconciler ever issues: records for
/// departed instances age out by being overwritten, never deleted here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordSetAction {
    /// Create the record set, or replace it wholesale if it exists
    Upsert,
}

/// A single desired change to an address record set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordMutation {
    /// Action to take (always UPSERT)
    pub action: RecordSetAction,
    /// Fully-qualified record name, without the trailing root dot
    pub name: String,
    /// Time to live in seconds
    pub ttl: i64,
    /// Address values; never empty
    pub values: Vec<String>,
}

impl RecordMutation {
    /// Build an UPSERT mutation for `name` with the given values.
    #[must_use]
    pub fn upsert(name: impl Into<String>, ttl: i64, values: Vec<String>) -> Self {
        Self {
            action: RecordSetAction::Upsert,
            name: name.into(),
            ttl,
            values,
        }
    }

    /// The record type this mutation targets.
    #[must_use]
    pub fn record_type(&self) -> &'static str {
        ADDRESS_RECORD_TYPE
    }
}

/// An address record set as currently published in a hosted zone.
///
/// Names carry the zone service's trailing root dot, exactly as returned
/// by the record lister.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentRecordSet {
    /// Fully-qualified record name, with the trailing root dot
    pub name: String,
    /// Time to live in seconds
    pub ttl: i64,
    /// Address values
    pub values: Vec<String>,
}

/// Pending mutations per zone id, built fresh each run and consumed once.
///
/// A `BTreeMap` keeps zone processing order deterministic within a run.
pub type ZoneChangeSet = BTreeMap<String, Vec<RecordMutation>>;

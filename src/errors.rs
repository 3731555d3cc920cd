// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Error types for reconciliation runs.
//!
//! Every variant here is fatal for the run it occurs in: the driver never
//! suppresses an inventory, record-fetch, or apply failure, and propagates
//! it unmodified to the caller (the invoking scheduler owns retries).
//!
//! Two conditions from the error design are deliberately *not* variants:
//! a missing or invalid config file falls back to defaults inside
//! [`crate::config`], and an instance without the hostnames tag is silently
//! excluded by [`crate::inventory`].

use thiserror::Error;

/// Errors that abort a reconciliation run.
#[derive(Error, Debug)]
pub enum ReconcileError {
    /// Hosted zone enumeration failed before any mutation was attempted.
    #[error("failed to list hosted zones: {reason}")]
    ZoneListFailed {
        /// Underlying service error, rendered for the operator
        reason: String,
    },

    /// Running-instance enumeration failed before any mutation was attempted.
    #[error("failed to list running instances: {reason}")]
    InstanceListFailed {
        /// Underlying service error, rendered for the operator
        reason: String,
    },

    /// Fetching a zone's current record sets failed.
    ///
    /// Zones processed before this one keep whatever was already applied;
    /// later zones are left untouched.
    #[error("failed to list record sets in zone '{zone_id}': {reason}")]
    RecordFetchFailed {
        /// The zone whose records could not be listed
        zone_id: String,
        /// Underlying service error, rendered for the operator
        reason: String,
    },

    /// Applying a zone's change batch failed.
    ///
    /// The batch is all-or-nothing on the service side; no partial-batch
    /// recovery is attempted here.
    #[error("failed to apply {changes} change(s) to zone '{zone_id}': {reason}")]
    MutationApplyFailed {
        /// The zone whose batch was rejected
        zone_id: String,
        /// Number of mutations in the rejected batch
        changes: usize,
        /// Underlying service error, rendered for the operator
        reason: String,
    },

    /// A mutation the service layer cannot express (e.g. an empty value set).
    ///
    /// The desired-state builder never emits such a mutation; this guards the
    /// invariant at the service boundary.
    #[error("invalid change for record '{name}': {reason}")]
    InvalidChange {
        /// Record name of the offending mutation
        name: String,
        /// Explanation of what is invalid
        reason: String,
    },
}

impl ReconcileError {
    /// Returns true if the error occurred before any mutation could have
    /// been applied in this run.
    #[must_use]
    pub fn is_pre_mutation(&self) -> bool {
        matches!(
            self,
            Self::ZoneListFailed { .. } | Self::InstanceListFailed { .. }
        )
    }
}

#[cfg(test)]
#[path = "errors_tests.rs"]
mod errors_tests;

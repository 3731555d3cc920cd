// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Collaborator interfaces between the reconciliation engine and the
//! outside world.
//!
//! The engine only ever talks to these four traits: zone enumeration,
//! instance inventory, current-record listing and batched record
//! application. Production wires them to Route 53 and EC2 via [`aws`];
//! tests substitute in-memory fakes. Keeping the seam here keeps the core
//! (index, classifier, builder, diff, driver) free of any service types.

pub mod aws;

use std::collections::BTreeMap;

use async_trait::async_trait;

use crate::errors::ReconcileError;
use crate::records::{CurrentRecordSet, RecordMutation};

/// A hosted zone as enumerated by the zone service.
///
/// `fully_qualified_name` carries the service's trailing root dot; the
/// engine strips it when building its [`crate::zones::ZoneIndex`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostedZoneSummary {
    /// Bare zone id (no service path prefix)
    pub id: String,
    /// Fully-qualified zone name, with the trailing root dot
    pub fully_qualified_name: String,
}

/// A running instance row as returned by the compute inventory.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawInstance {
    /// Instance identifier
    pub id: String,
    /// Instance tags as a key/value map
    pub tags: BTreeMap<String, String>,
    /// Private address, if the inventory reported one
    pub private_address: Option<String>,
    /// Public address, if the instance has one
    pub public_address: Option<String>,
}

impl RawInstance {
    /// Build a raw row from borrowed parts. Test and embedding convenience.
    #[must_use]
    pub fn new(
        id: &str,
        tags: &[(&str, &str)],
        private_address: Option<&str>,
        public_address: Option<&str>,
    ) -> Self {
        Self {
            id: id.to_string(),
            tags: tags
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
            private_address: private_address.map(str::to_string),
            public_address: public_address.map(str::to_string),
        }
    }
}

/// Enumerates all hosted zones in the account.
#[async_trait]
pub trait ZoneLister: Send + Sync {
    /// List every hosted zone, in the service's iteration order.
    async fn list_zones(&self) -> Result<Vec<HostedZoneSummary>, ReconcileError>;
}

/// Enumerates running instances that carry the hostnames tag.
#[async_trait]
pub trait InstanceLister: Send + Sync {
    /// List running instances possessing `tag_key`, in the service's
    /// iteration order.
    async fn list_running_instances(
        &self,
        tag_key: &str,
    ) -> Result<Vec<RawInstance>, ReconcileError>;
}

/// Lists a zone's currently published address records.
#[async_trait]
pub trait RecordSetLister: Send + Sync {
    /// List the address-type record sets currently in `zone_id`.
    async fn list_address_records(
        &self,
        zone_id: &str,
    ) -> Result<Vec<CurrentRecordSet>, ReconcileError>;
}

/// Applies record mutations to a zone.
#[async_trait]
pub trait RecordSetMutator: Send + Sync {
    /// Apply `mutations` to `zone_id` as one atomic batch. The service
    /// rejects the whole batch on any validation error; no partial
    /// application happens from the engine's perspective.
    async fn apply_changes(
        &self,
        zone_id: &str,
        mutations: &[RecordMutation],
    ) -> Result<(), ReconcileError>;
}

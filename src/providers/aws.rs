// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Route 53 and EC2 implementations of the collaborator traits.
//!
//! [`AwsCloud`] wraps both SDK clients and implements zone listing, running
//! instance inventory, current-record listing and batched UPSERT
//! application. All listings follow the services' pagination; record
//! application submits one `ChangeBatch` per zone, which Route 53 treats as
//! all-or-nothing.

use std::collections::BTreeMap;

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_ec2::types::{Filter, Instance};
use aws_sdk_route53::types::{
    Change, ChangeAction, ChangeBatch, ResourceRecord, ResourceRecordSet, RrType,
};
use tracing::debug;

use crate::constants::{FILTER_INSTANCE_STATE, FILTER_TAG_KEY, INSTANCE_STATE_RUNNING};
use crate::errors::ReconcileError;
use crate::providers::{
    HostedZoneSummary, InstanceLister, RawInstance, RecordSetLister, RecordSetMutator, ZoneLister,
};
use crate::records::{CurrentRecordSet, RecordMutation, RecordSetAction};

/// AWS-backed collaborators for one reconciliation run.
pub struct AwsCloud {
    route53: aws_sdk_route53::Client,
    ec2: aws_sdk_ec2::Client,
}

impl AwsCloud {
    /// Build clients for the given region using the default credential
    /// chain.
    pub async fn connect(region: &str) -> Self {
        let shared = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(region.to_string()))
            .load()
            .await;
        Self {
            route53: aws_sdk_route53::Client::new(&shared),
            ec2: aws_sdk_ec2::Client::new(&shared),
        }
    }
}

/// Strip the service path prefix from a hosted zone id.
///
/// Route 53 returns ids as `/hostedzone/Z123456`; everything after the
/// final `/` is the bare id the record APIs expect. A bare id passes
/// through unchanged.
#[must_use]
pub fn bare_zone_id(id_path: &str) -> &str {
    id_path.rsplit('/').next().unwrap_or(id_path)
}

/// Flatten an instance's tag list into a key/value map.
///
/// Tags missing a key or value (the SDK models both as optional) are
/// dropped.
#[must_use]
pub fn tag_map(instance: &Instance) -> BTreeMap<String, String> {
    instance
        .tags()
        .iter()
        .filter_map(|tag| match (tag.key(), tag.value()) {
            (Some(key), Some(value)) => Some((key.to_string(), value.to_string())),
            _ => None,
        })
        .collect()
}

/// Convert an SDK instance into the engine's raw inventory row.
#[must_use]
pub fn raw_instance_from(instance: &Instance) -> RawInstance {
    RawInstance {
        id: instance.instance_id().unwrap_or_default().to_string(),
        tags: tag_map(instance),
        private_address: instance.private_ip_address().map(str::to_string),
        public_address: instance.public_ip_address().map(str::to_string),
    }
}

/// Convert a published record set into the engine's current-record shape.
#[must_use]
pub fn current_record_from(record_set: &ResourceRecordSet) -> CurrentRecordSet {
    CurrentRecordSet {
        name: record_set.name().to_string(),
        ttl: record_set.ttl().unwrap_or_default(),
        values: record_set
            .resource_records()
            .iter()
            .map(|record| record.value().to_string())
            .collect(),
    }
}

/// Translate a mutation into a Route 53 change.
///
/// # Errors
///
/// Returns [`ReconcileError::InvalidChange`] for a mutation the service
/// cannot express, such as an empty value set (which the desired-state
/// builder never emits).
pub fn change_from(mutation: &RecordMutation) -> Result<Change, ReconcileError> {
    if mutation.values.is_empty() {
        return Err(ReconcileError::InvalidChange {
            name: mutation.name.clone(),
            reason: "mutation carries no address values".to_string(),
        });
    }

    let invalid = |reason: String| ReconcileError::InvalidChange {
        name: mutation.name.clone(),
        reason,
    };

    let records = mutation
        .values
        .iter()
        .map(|value| {
            ResourceRecord::builder()
                .value(value.clone())
                .build()
                .map_err(|e| invalid(e.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let record_set = ResourceRecordSet::builder()
        .name(mutation.name.clone())
        .r#type(RrType::A)
        .ttl(mutation.ttl)
        .set_resource_records(Some(records))
        .build()
        .map_err(|e| invalid(e.to_string()))?;

    let action = match mutation.action {
        RecordSetAction::Upsert => ChangeAction::Upsert,
    };

    Change::builder()
        .action(action)
        .resource_record_set(record_set)
        .build()
        .map_err(|e| invalid(e.to_string()))
}

#[async_trait]
impl ZoneLister for AwsCloud {
    async fn list_zones(&self) -> Result<Vec<HostedZoneSummary>, ReconcileError> {
        let mut summaries = Vec::new();
        let mut marker: Option<String> = None;

        loop {
            let mut request = self.route53.list_hosted_zones();
            if let Some(marker) = &marker {
                request = request.marker(marker);
            }
            let response = request.send().await.map_err(|e| {
                ReconcileError::ZoneListFailed {
                    reason: aws_sdk_route53::error::DisplayErrorContext(&e).to_string(),
                }
            })?;

            for zone in response.hosted_zones() {
                summaries.push(HostedZoneSummary {
                    id: bare_zone_id(zone.id()).to_string(),
                    fully_qualified_name: zone.name().to_string(),
                });
            }

            if response.is_truncated() {
                marker = response.next_marker().map(str::to_string);
            } else {
                break;
            }
        }

        debug!(zones = summaries.len(), "Listed hosted zones");
        Ok(summaries)
    }
}

#[async_trait]
impl InstanceLister for AwsCloud {
    async fn list_running_instances(
        &self,
        tag_key: &str,
    ) -> Result<Vec<RawInstance>, ReconcileError> {
        let mut instances = Vec::new();
        let mut next_token: Option<String> = None;

        loop {
            let mut request = self
                .ec2
                .describe_instances()
                .filters(Filter::builder().name(FILTER_TAG_KEY).values(tag_key).build())
                .filters(
                    Filter::builder()
                        .name(FILTER_INSTANCE_STATE)
                        .values(INSTANCE_STATE_RUNNING)
                        .build(),
                );
            if let Some(token) = &next_token {
                request = request.next_token(token);
            }
            let response = request.send().await.map_err(|e| {
                ReconcileError::InstanceListFailed {
                    reason: aws_sdk_ec2::error::DisplayErrorContext(&e).to_string(),
                }
            })?;

            for reservation in response.reservations() {
                for instance in reservation.instances() {
                    instances.push(raw_instance_from(instance));
                }
            }

            next_token = response.next_token().map(str::to_string);
            if next_token.is_none() {
                break;
            }
        }

        debug!(instances = instances.len(), tag = tag_key, "Listed running instances");
        Ok(instances)
    }
}

#[async_trait]
impl RecordSetLister for AwsCloud {
    async fn list_address_records(
        &self,
        zone_id: &str,
    ) -> Result<Vec<CurrentRecordSet>, ReconcileError> {
        let mut records = Vec::new();
        let mut start_name: Option<String> = None;
        let mut start_type: Option<RrType> = None;

        loop {
            let mut request = self
                .route53
                .list_resource_record_sets()
                .hosted_zone_id(zone_id);
            if let Some(name) = &start_name {
                request = request.start_record_name(name);
            }
            if let Some(record_type) = &start_type {
                request = request.start_record_type(record_type.clone());
            }
            let response = request.send().await.map_err(|e| {
                ReconcileError::RecordFetchFailed {
                    zone_id: zone_id.to_string(),
                    reason: aws_sdk_route53::error::DisplayErrorContext(&e).to_string(),
                }
            })?;

            for record_set in response.resource_record_sets() {
                if *record_set.r#type() == RrType::A {
                    records.push(current_record_from(record_set));
                }
            }

            if response.is_truncated() {
                start_name = response.next_record_name().map(str::to_string);
                start_type = response.next_record_type().cloned();
            } else {
                break;
            }
        }

        debug!(zone = zone_id, records = records.len(), "Listed current address records");
        Ok(records)
    }
}

#[async_trait]
impl RecordSetMutator for AwsCloud {
    async fn apply_changes(
        &self,
        zone_id: &str,
        mutations: &[RecordMutation],
    ) -> Result<(), ReconcileError> {
        let changes = mutations
            .iter()
            .map(change_from)
            .collect::<Result<Vec<_>, _>>()?;

        let batch = ChangeBatch::builder()
            .set_changes(Some(changes))
            .build()
            .map_err(|e| ReconcileError::MutationApplyFailed {
                zone_id: zone_id.to_string(),
                changes: mutations.len(),
                reason: e.to_string(),
            })?;

        self.route53
            .change_resource_record_sets()
            .hosted_zone_id(zone_id)
            .change_batch(batch)
            .send()
            .await
            .map_err(|e| ReconcileError::MutationApplyFailed {
                zone_id: zone_id.to_string(),
                changes: mutations.len(),
                reason: aws_sdk_route53::error::DisplayErrorContext(&e).to_string(),
            })?;

        Ok(())
    }
}

#[cfg(test)]
#[path = "aws_tests.rs"]
mod aws_tests;

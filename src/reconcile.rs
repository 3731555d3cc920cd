// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! The reconciliation driver.
//!
//! One call to [`run_reconciliation`] is one run: load zones, load
//! instances, build the desired state, then walk the zones that have
//! pending mutations one at a time: fetch current records, diff, and
//! (unless dry-run) apply the survivors as a single atomic batch.
//!
//! All run state is local to the call; nothing is reused across
//! invocations. Zones are processed strictly sequentially so the change
//! summary is deterministic and no two batches ever race on one zone.
//! Any fetch or apply failure propagates immediately: zones already
//! applied stay applied, later zones are left untouched, and retries are
//! the invoking scheduler's business.

use tracing::{debug, info};

use crate::config::Config;
use crate::desired::build_desired_state;
use crate::diff::diff_zone_changes;
use crate::errors::ReconcileError;
use crate::inventory::extract_descriptors;
use crate::providers::{InstanceLister, RecordSetLister, RecordSetMutator, ZoneLister};
use crate::report::{render_table, ReportRow};
use crate::zones::ZoneIndex;

/// What a run did (or, in dry-run, would have done).
#[derive(Debug, Clone, Default)]
pub struct ReconcileOutcome {
    /// One row per surviving mutation, across all zones, in apply order
    pub rows: Vec<ReportRow>,
    /// Zones whose batches were actually applied
    pub zones_applied: usize,
    /// Whether application was suppressed
    pub dry_run: bool,
}

impl ReconcileOutcome {
    /// The rendered change summary, if any mutation survived.
    #[must_use]
    pub fn summary_table(&self) -> Option<String> {
        render_table(&self.rows)
    }
}

/// Execute one reconciliation run.
///
/// `tag_key` names the instance tag carrying the comma-separated hostname
/// list. With `dry_run` set, the full report is produced but the mutator
/// is never called.
///
/// # Errors
///
/// Returns the first [`ReconcileError`] encountered, unmodified. Inventory
/// failures abort before any mutation; a record-fetch or apply failure on
/// zone N leaves zones 1..N applied and zones N+1.. unprocessed.
pub async fn run_reconciliation(
    zone_lister: &dyn ZoneLister,
    instance_lister: &dyn InstanceLister,
    record_lister: &dyn RecordSetLister,
    mutator: &dyn RecordSetMutator,
    config: &Config,
    tag_key: &str,
    dry_run: bool,
) -> Result<ReconcileOutcome, ReconcileError> {
    info!("Querying hosted zones");
    let summaries = zone_lister.list_zones().await?;
    let zones = ZoneIndex::new(&summaries);
    info!(zones = zones.len(), "Hosted zones loaded");

    info!(tag = tag_key, "Querying running instances");
    let raw_instances = instance_lister.list_running_instances(tag_key).await?;
    let instances = extract_descriptors(&raw_instances, tag_key);
    info!(
        instances = instances.len(),
        skipped = raw_instances.len() - instances.len(),
        "Instance inventory loaded"
    );

    let desired = build_desired_state(&instances, &zones, &config.dns);
    debug!(
        zones_with_changes = desired.changes.len(),
        clusters = desired.clusters.len(),
        "Desired state built"
    );

    let mut outcome = ReconcileOutcome {
        dry_run,
        ..ReconcileOutcome::default()
    };

    for (zone_id, mutations) in &desired.changes {
        info!(zone = %zone_id, pending = mutations.len(), "Diffing zone against current records");
        let current = record_lister.list_address_records(zone_id).await?;
        let surviving = diff_zone_changes(mutations, &current);
        debug!(
            zone = %zone_id,
            current = current.len(),
            surviving = surviving.len(),
            "Zone diff complete"
        );

        for mutation in &surviving {
            outcome.rows.push(ReportRow::from_mutation(zone_id, mutation));
        }

        if surviving.is_empty() {
            continue;
        }

        if dry_run {
            info!(zone = %zone_id, changes = surviving.len(), "Dry run, not applying changes");
            continue;
        }

        mutator.apply_changes(zone_id, &surviving).await?;
        outcome.zones_applied += 1;
        info!("{} records modified in {}", surviving.len(), zone_id);
    }

    if let Some(table) = outcome.summary_table() {
        print!("{table}");
    }

    Ok(outcome)
}

#[cfg(test)]
#[path = "reconcile_tests.rs"]
mod reconcile_tests;

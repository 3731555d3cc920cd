// Common test utilities for integration tests

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;

use fleetdns::diff::with_trailing_dot;
use fleetdns::errors::ReconcileError;
use fleetdns::providers::{
    HostedZoneSummary, InstanceLister, RawInstance, RecordSetLister, RecordSetMutator, ZoneLister,
};
use fleetdns::records::{CurrentRecordSet, RecordMutation};

/// In-memory stand-in for the zone service and compute inventory.
///
/// Applied batches are recorded for assertions and also folded back into
/// the record store the way the real service would, so repeat runs observe
/// their own earlier writes.
#[derive(Default)]
pub struct FakeCloud {
    pub zones: Vec<HostedZoneSummary>,
    pub instances: Vec<RawInstance>,
    pub records: Mutex<BTreeMap<String, Vec<CurrentRecordSet>>>,
    pub applied: Mutex<Vec<(String, Vec<RecordMutation>)>>,
    /// Zone id whose record listing fails
    pub fail_record_fetch_for: Option<String>,
    /// Zone id whose batch application fails
    pub fail_apply_for: Option<String>,
}

impl FakeCloud {
    pub fn with_zone(mut self, id: &str, fqdn: &str) -> Self {
        self.zones.push(HostedZoneSummary {
            id: id.to_string(),
            fully_qualified_name: fqdn.to_string(),
        });
        self
    }

    pub fn with_instance(mut self, instance: RawInstance) -> Self {
        self.instances.push(instance);
        self
    }

    pub fn with_record(self, zone_id: &str, name: &str, ttl: i64, values: &[&str]) -> Self {
        self.records
            .lock()
            .expect("lock")
            .entry(zone_id.to_string())
            .or_default()
            .push(CurrentRecordSet {
                name: name.to_string(),
                ttl,
                values: values.iter().map(|v| (*v).to_string()).collect(),
            });
        self
    }

    pub fn applied(&self) -> Vec<(String, Vec<RecordMutation>)> {
        self.applied.lock().expect("lock").clone()
    }

    pub fn published(&self, zone_id: &str) -> Vec<CurrentRecordSet> {
        self.records
            .lock()
            .expect("lock")
            .get(zone_id)
            .cloned()
            .unwrap_or_default()
    }
}

#[async_trait]
impl ZoneLister for FakeCloud {
    async fn list_zones(&self) -> Result<Vec<HostedZoneSummary>, ReconcileError> {
        Ok(self.zones.clone())
    }
}

#[async_trait]
impl InstanceLister for FakeCloud {
    async fn list_running_instances(
        &self,
        _tag_key: &str,
    ) -> Result<Vec<RawInstance>, ReconcileError> {
        Ok(self.instances.clone())
    }
}

#[async_trait]
impl RecordSetLister for FakeCloud {
    async fn list_address_records(
        &self,
        zone_id: &str,
    ) -> Result<Vec<CurrentRecordSet>, ReconcileError> {
        if self.fail_record_fetch_for.as_deref() == Some(zone_id) {
            return Err(ReconcileError::RecordFetchFailed {
                zone_id: zone_id.to_string(),
                reason: "injected failure".to_string(),
            });
        }
        Ok(self.published(zone_id))
    }
}

#[async_trait]
impl RecordSetMutator for FakeCloud {
    async fn apply_changes(
        &self,
        zone_id: &str,
        mutations: &[RecordMutation],
    ) -> Result<(), ReconcileError> {
        if self.fail_apply_for.as_deref() == Some(zone_id) {
            return Err(ReconcileError::MutationApplyFailed {
                zone_id: zone_id.to_string(),
                changes: mutations.len(),
                reason: "injected failure".to_string(),
            });
        }

        self.applied
            .lock()
            .expect("lock")
            .push((zone_id.to_string(), mutations.to_vec()));

        // UPSERT semantics: replace the record set wholesale, or create it
        let mut records = self.records.lock().expect("lock");
        let zone_records = records.entry(zone_id.to_string()).or_default();
        for mutation in mutations {
            let fqdn = with_trailing_dot(&mutation.name);
            zone_records.retain(|record| record.name != fqdn);
            zone_records.push(CurrentRecordSet {
                name: fqdn,
                ttl: mutation.ttl,
                values: mutation.values.clone(),
            });
        }
        Ok(())
    }
}

//! Row assembly.
//!
//! Runs every normalizer over one raw row and folds their outputs into a
//! clean record, a deduplicated step string and an optional anomaly.

use std::collections::BTreeMap;

use inventory_model::{
    AnomalyRecord, CleanRecord, Issue, IssueField, IssueKind, NormalizationStep, RawRow, StepLog,
};
use tracing::{debug, trace};

use crate::normalization::{
    classify_device, normalize_ip, normalize_mac, normalize_names, normalize_site, parse_owner,
    reverse_pointer,
};
use crate::recommendations::recommendations_for;

/// Result of normalizing one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowOutcome {
    pub record: CleanRecord,
    /// Raw step log before deduplication.
    pub steps: StepLog,
    /// Present only when the row produced at least one issue.
    pub anomaly: Option<AnomalyRecord>,
}

impl RowOutcome {
    pub fn issues(&self) -> &[Issue] {
        self.anomaly
            .as_ref()
            .map(|anomaly| anomaly.issues.as_slice())
            .unwrap_or_default()
    }
}

pub fn normalize_row(row: &RawRow) -> RowOutcome {
    let mut steps = StepLog::new();
    let mut issues = Vec::new();

    let ip = normalize_ip(row.ip.as_deref());
    steps.extend(ip.steps.iter());
    issues.extend(ip.issues.iter().cloned());

    let names = normalize_names(row.hostname.as_deref(), row.fqdn.as_deref());
    steps.extend(names.steps.iter());
    issues.extend(names.issues.iter().cloned());

    let reverse_ptr = match ip.address {
        Some(address) => {
            steps.push(NormalizationStep::ReversePtrBuild);
            reverse_pointer(address)
        }
        None => String::new(),
    };

    let mac = normalize_mac(row.mac.as_deref());
    steps.extend(mac.steps.iter());
    issues.extend(mac.issues.iter().cloned());

    let owner = parse_owner(row.owner.as_deref());
    steps.extend(owner.steps.iter());

    let device = classify_device(
        row.device_type.as_deref(),
        &names.hostname,
        row.notes.as_deref(),
    );
    steps.extend(device.steps.iter());

    let site = normalize_site(row.site.as_deref());
    steps.extend(site.steps.iter());

    let anomaly = if issues.is_empty() {
        None
    } else {
        trace!(
            source_row_id = row.source_row_id.as_deref().unwrap_or_default(),
            issue_count = issues.len(),
            "row has issues"
        );
        Some(AnomalyRecord {
            source_row_id: row.source_row_id.clone(),
            recommended_actions: recommendations_for(&issues),
            issues,
        })
    };

    let record = CleanRecord {
        ip_valid: ip.valid.to_string(),
        ip_version: ip.version().to_string(),
        ip: ip.ip,
        subnet_cidr: ip.subnet_cidr,
        hostname: names.hostname,
        hostname_valid: names.hostname_valid.to_string(),
        fqdn: names.fqdn,
        fqdn_consistent: names.fqdn_consistent.to_string(),
        reverse_ptr,
        mac: mac.mac,
        mac_valid: mac.valid.to_string(),
        owner: owner.name,
        owner_email: owner.email,
        owner_team: owner.team,
        device_type: device.device_type,
        device_type_confidence: device.confidence.to_string(),
        site: site.site,
        site_normalized: site.site_normalized,
        source_row_id: row.source_row_id.clone().unwrap_or_default(),
        normalization_steps: steps.joined(),
    };

    RowOutcome {
        record,
        steps,
        anomaly,
    }
}

/// Clean table and anomaly report for a whole inventory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedInventory {
    pub records: Vec<CleanRecord>,
    pub anomalies: Vec<AnomalyRecord>,
}

impl NormalizedInventory {
    pub fn issue_count(&self) -> usize {
        self.anomalies.iter().map(|anomaly| anomaly.issues.len()).sum()
    }

    /// Issue counts keyed by field and type.
    pub fn issue_counts(&self) -> BTreeMap<(IssueField, IssueKind), usize> {
        let mut counts = BTreeMap::new();
        for issue in self.anomalies.iter().flat_map(|anomaly| &anomaly.issues) {
            *counts.entry((issue.field, issue.kind)).or_insert(0) += 1;
        }
        counts
    }
}

/// Normalize rows in order. Rows are independent of one another.
pub fn normalize_rows<'a>(rows: impl IntoIterator<Item = &'a RawRow>) -> NormalizedInventory {
    let mut inventory = NormalizedInventory::default();
    for row in rows {
        let outcome = normalize_row(row);
        inventory.records.push(outcome.record);
        if let Some(anomaly) = outcome.anomaly {
            inventory.anomalies.push(anomaly);
        }
    }
    debug!(
        row_count = inventory.records.len(),
        anomaly_count = inventory.anomalies.len(),
        issue_count = inventory.issue_count(),
        "normalized inventory"
    );
    inventory
}

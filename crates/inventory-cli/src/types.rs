use std::path::PathBuf;

use inventory_model::{CleanRecord, Validity};
use inventory_normalization::NormalizedInventory;
use inventory_output::OutputPaths;

#[derive(Debug)]
pub struct CleanResult {
    pub input: PathBuf,
    /// `None` for dry runs.
    pub outputs: Option<OutputPaths>,
    pub inventory: NormalizedInventory,
}

/// Tally of one ternary validity column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidityCounts {
    pub column: &'static str,
    pub valid: usize,
    pub invalid: usize,
    pub not_applicable: usize,
}

const VALIDITY_COLUMNS: [&str; 4] = ["ip_valid", "hostname_valid", "fqdn_consistent", "mac_valid"];

fn validity_value<'a>(record: &'a CleanRecord, column: &str) -> &'a str {
    match column {
        "ip_valid" => &record.ip_valid,
        "hostname_valid" => &record.hostname_valid,
        "fqdn_consistent" => &record.fqdn_consistent,
        "mac_valid" => &record.mac_valid,
        _ => "",
    }
}

impl CleanResult {
    pub fn row_count(&self) -> usize {
        self.inventory.records.len()
    }

    pub fn anomaly_count(&self) -> usize {
        self.inventory.anomalies.len()
    }

    pub fn has_anomalies(&self) -> bool {
        !self.inventory.anomalies.is_empty()
    }

    pub fn validity_counts(&self) -> Vec<ValidityCounts> {
        VALIDITY_COLUMNS
            .into_iter()
            .map(|column| {
                let mut counts = ValidityCounts {
                    column,
                    valid: 0,
                    invalid: 0,
                    not_applicable: 0,
                };
                for record in &self.inventory.records {
                    match Validity::parse(validity_value(record, column)) {
                        Some(Validity::Valid) => counts.valid += 1,
                        Some(Validity::Invalid) => counts.invalid += 1,
                        Some(Validity::NotApplicable) | None => counts.not_applicable += 1,
                    }
                }
                counts
            })
            .collect()
    }
}

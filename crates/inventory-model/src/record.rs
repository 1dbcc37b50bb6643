//! Output records: the clean table row and the anomaly report entry.

use serde::{Deserialize, Serialize};

use crate::issue::Issue;
use crate::row::RawRow;

/// Clean table header, in output order.
pub const CLEAN_COLUMNS: [&str; 20] = [
    "ip",
    "ip_valid",
    "ip_version",
    "subnet_cidr",
    "hostname",
    "hostname_valid",
    "fqdn",
    "fqdn_consistent",
    "reverse_ptr",
    "mac",
    "mac_valid",
    "owner",
    "owner_email",
    "owner_team",
    "device_type",
    "device_type_confidence",
    "site",
    "site_normalized",
    "source_row_id",
    "normalization_steps",
];

/// One fully normalized row. Field order matches [`CLEAN_COLUMNS`]; every
/// field is a string and an empty string means absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanRecord {
    pub ip: String,
    pub ip_valid: String,
    pub ip_version: String,
    pub subnet_cidr: String,
    pub hostname: String,
    pub hostname_valid: String,
    pub fqdn: String,
    pub fqdn_consistent: String,
    pub reverse_ptr: String,
    pub mac: String,
    pub mac_valid: String,
    pub owner: String,
    pub owner_email: String,
    pub owner_team: String,
    pub device_type: String,
    pub device_type_confidence: String,
    pub site: String,
    pub site_normalized: String,
    pub source_row_id: String,
    pub normalization_steps: String,
}

impl CleanRecord {
    /// Values in [`CLEAN_COLUMNS`] order.
    pub fn values(&self) -> [&str; 20] {
        [
            &self.ip,
            &self.ip_valid,
            &self.ip_version,
            &self.subnet_cidr,
            &self.hostname,
            &self.hostname_valid,
            &self.fqdn,
            &self.fqdn_consistent,
            &self.reverse_ptr,
            &self.mac,
            &self.mac_valid,
            &self.owner,
            &self.owner_email,
            &self.owner_team,
            &self.device_type,
            &self.device_type_confidence,
            &self.site,
            &self.site_normalized,
            &self.source_row_id,
            &self.normalization_steps,
        ]
    }

    /// Feed a clean record back in as raw input.
    ///
    /// Owner name, team and email are recombined so the owner parser sees the
    /// same pieces it extracted the first time.
    pub fn to_raw_row(&self) -> RawRow {
        let team = if self.owner_team.is_empty() {
            String::new()
        } else {
            format!("({})", self.owner_team)
        };
        let owner = [self.owner.as_str(), team.as_str(), self.owner_email.as_str()]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        RawRow {
            ip: Some(self.ip.clone()),
            hostname: Some(self.hostname.clone()),
            fqdn: Some(self.fqdn.clone()),
            mac: Some(self.mac.clone()),
            owner: Some(owner),
            device_type: Some(self.device_type.clone()),
            site: Some(self.site.clone()),
            notes: None,
            source_row_id: Some(self.source_row_id.clone()),
        }
    }
}

/// Report entry for a row with at least one issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnomalyRecord {
    pub source_row_id: Option<String>,
    pub issues: Vec<Issue>,
    pub recommended_actions: Vec<String>,
}

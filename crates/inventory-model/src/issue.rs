//! Row-scoped data-quality issues.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Output field an issue is reported against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueField {
    Ip,
    Hostname,
    Fqdn,
    Mac,
    DeviceType,
}

impl IssueField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ip => "ip",
            Self::Hostname => "hostname",
            Self::Fqdn => "fqdn",
            Self::Mac => "mac",
            Self::DeviceType => "device_type",
        }
    }
}

impl fmt::Display for IssueField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IssueField {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ip" => Ok(Self::Ip),
            "hostname" => Ok(Self::Hostname),
            "fqdn" => Ok(Self::Fqdn),
            "mac" => Ok(Self::Mac),
            "device_type" => Ok(Self::DeviceType),
            other => Err(ModelError::UnknownIssueField(other.to_string())),
        }
    }
}

/// Issue taxonomy. None of these halt row processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    /// Required field absent or a placeholder such as `n/a`.
    Missing,
    /// Unparseable IP address.
    Invalid,
    /// Private IPv4 ending in `.0` or `.255`; still valid.
    ReservedEdge,
    InvalidLabel,
    InvalidFormat,
    /// FQDN first label disagrees with the hostname.
    HostnameMismatch,
    InvalidMac,
}

impl IssueKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Missing => "missing",
            Self::Invalid => "invalid",
            Self::ReservedEdge => "reserved_edge",
            Self::InvalidLabel => "invalid_label",
            Self::InvalidFormat => "invalid_format",
            Self::HostnameMismatch => "hostname_mismatch",
            Self::InvalidMac => "invalid_mac",
        }
    }

    /// Whether the field value is still usable despite the issue.
    pub fn is_blocking(self) -> bool {
        !matches!(self, Self::ReservedEdge | Self::HostnameMismatch)
    }
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IssueKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "missing" => Ok(Self::Missing),
            "invalid" => Ok(Self::Invalid),
            "reserved_edge" => Ok(Self::ReservedEdge),
            "invalid_label" => Ok(Self::InvalidLabel),
            "invalid_format" => Ok(Self::InvalidFormat),
            "hostname_mismatch" => Ok(Self::HostnameMismatch),
            "invalid_mac" => Ok(Self::InvalidMac),
            other => Err(ModelError::UnknownIssueKind(other.to_string())),
        }
    }
}

/// One data-quality defect found in a row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub field: IssueField,
    #[serde(rename = "type")]
    pub kind: IssueKind,
    /// Raw value as it appeared in the source row.
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl Issue {
    pub fn new(field: IssueField, kind: IssueKind, value: impl Into<String>) -> Self {
        Self {
            field,
            kind,
            value: value.into(),
            detail: None,
        }
    }

    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

//! Normalization step vocabulary.
//!
//! Step tokens are written verbatim into the `normalization_steps` column and
//! downstream consumers key off the exact text. Adding a token is a
//! compatible change; renaming or removing one is not.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ModelError;

/// Separator used when steps are joined into a single cell.
pub const STEP_SEPARATOR: char = '|';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NormalizationStep {
    IpMissing,
    IpTrim,
    IpDropZone,
    IpParseRelaxed,
    IpInvalidParse,
    IpParse,
    IpNormalize,
    IpReservedEdge,
    HostnameTrim,
    HostnameLower,
    FqdnTrim,
    FqdnLower,
    HostnameFromFqdn,
    ReversePtrBuild,
    MacMissing,
    MacTrim,
    MacHexExtract,
    MacNormalize,
    OwnerTrim,
    OwnerEmailExtract,
    OwnerTeamParen,
    OwnerFromEmailLocalpart,
    DeviceFromInput,
    DeviceInferred,
    SiteTrim,
    SiteNormalize,
}

/// Field family a step belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepFamily {
    Ip,
    Name,
    ReversePointer,
    Mac,
    Owner,
    DeviceType,
    Site,
}

impl StepFamily {
    pub fn label(self) -> &'static str {
        match self {
            Self::Ip => "ip",
            Self::Name => "hostname/fqdn",
            Self::ReversePointer => "reverse_ptr",
            Self::Mac => "mac",
            Self::Owner => "owner",
            Self::DeviceType => "device_type",
            Self::Site => "site",
        }
    }
}

impl NormalizationStep {
    /// Every token, in the order the pipeline can emit them.
    pub const ALL: [NormalizationStep; 26] = [
        Self::IpMissing,
        Self::IpTrim,
        Self::IpDropZone,
        Self::IpParseRelaxed,
        Self::IpInvalidParse,
        Self::IpParse,
        Self::IpNormalize,
        Self::IpReservedEdge,
        Self::HostnameTrim,
        Self::HostnameLower,
        Self::FqdnTrim,
        Self::FqdnLower,
        Self::HostnameFromFqdn,
        Self::ReversePtrBuild,
        Self::MacMissing,
        Self::MacTrim,
        Self::MacHexExtract,
        Self::MacNormalize,
        Self::OwnerTrim,
        Self::OwnerEmailExtract,
        Self::OwnerTeamParen,
        Self::OwnerFromEmailLocalpart,
        Self::DeviceFromInput,
        Self::DeviceInferred,
        Self::SiteTrim,
        Self::SiteNormalize,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::IpMissing => "ip_missing",
            Self::IpTrim => "ip_trim",
            Self::IpDropZone => "ip_drop_zone",
            Self::IpParseRelaxed => "ip_parse_relaxed",
            Self::IpInvalidParse => "ip_invalid_parse",
            Self::IpParse => "ip_parse",
            Self::IpNormalize => "ip_normalize",
            Self::IpReservedEdge => "ip_reserved_edge",
            Self::HostnameTrim => "hostname_trim",
            Self::HostnameLower => "hostname_lower",
            Self::FqdnTrim => "fqdn_trim",
            Self::FqdnLower => "fqdn_lower",
            Self::HostnameFromFqdn => "hostname_from_fqdn",
            Self::ReversePtrBuild => "reverse_ptr_build",
            Self::MacMissing => "mac_missing",
            Self::MacTrim => "mac_trim",
            Self::MacHexExtract => "mac_hex_extract",
            Self::MacNormalize => "mac_normalize",
            Self::OwnerTrim => "owner_trim",
            Self::OwnerEmailExtract => "owner_email_extract",
            Self::OwnerTeamParen => "owner_team_paren",
            Self::OwnerFromEmailLocalpart => "owner_from_email_localpart",
            Self::DeviceFromInput => "device_from_input",
            Self::DeviceInferred => "device_inferred",
            Self::SiteTrim => "site_trim",
            Self::SiteNormalize => "site_normalize",
        }
    }

    pub fn family(self) -> StepFamily {
        match self {
            Self::IpMissing
            | Self::IpTrim
            | Self::IpDropZone
            | Self::IpParseRelaxed
            | Self::IpInvalidParse
            | Self::IpParse
            | Self::IpNormalize
            | Self::IpReservedEdge => StepFamily::Ip,
            Self::HostnameTrim
            | Self::HostnameLower
            | Self::FqdnTrim
            | Self::FqdnLower
            | Self::HostnameFromFqdn => StepFamily::Name,
            Self::ReversePtrBuild => StepFamily::ReversePointer,
            Self::MacMissing | Self::MacTrim | Self::MacHexExtract | Self::MacNormalize => {
                StepFamily::Mac
            }
            Self::OwnerTrim
            | Self::OwnerEmailExtract
            | Self::OwnerTeamParen
            | Self::OwnerFromEmailLocalpart => StepFamily::Owner,
            Self::DeviceFromInput | Self::DeviceInferred => StepFamily::DeviceType,
            Self::SiteTrim | Self::SiteNormalize => StepFamily::Site,
        }
    }
}

impl fmt::Display for NormalizationStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NormalizationStep {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|step| step.as_str() == s)
            .ok_or_else(|| ModelError::UnknownStep(s.to_string()))
    }
}

impl Serialize for NormalizationStep {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for NormalizationStep {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Ordered log of applied steps.
///
/// Duplicates are kept while recording; [`StepLog::unique`] and
/// [`StepLog::joined`] collapse them to first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepLog {
    steps: Vec<NormalizationStep>,
}

impl StepLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, step: NormalizationStep) {
        self.steps.push(step);
    }

    pub fn extend(&mut self, steps: impl IntoIterator<Item = NormalizationStep>) {
        self.steps.extend(steps);
    }

    pub fn contains(&self, step: NormalizationStep) -> bool {
        self.steps.contains(&step)
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = NormalizationStep> + '_ {
        self.steps.iter().copied()
    }

    pub fn unique(&self) -> Vec<NormalizationStep> {
        let mut seen = Vec::with_capacity(self.steps.len());
        for step in &self.steps {
            if !seen.contains(step) {
                seen.push(*step);
            }
        }
        seen
    }

    /// Pipe-joined, deduplicated form written to the clean table.
    pub fn joined(&self) -> String {
        let mut joined = String::new();
        for step in self.unique() {
            if !joined.is_empty() {
                joined.push(STEP_SEPARATOR);
            }
            joined.push_str(step.as_str());
        }
        joined
    }

    /// Parse a joined cell back into a log. Empty input yields an empty log.
    pub fn parse_joined(value: &str) -> crate::Result<Self> {
        let mut log = Self::new();
        for token in value.split(STEP_SEPARATOR).filter(|token| !token.is_empty()) {
            log.push(token.parse()?);
        }
        Ok(log)
    }
}

impl From<Vec<NormalizationStep>> for StepLog {
    fn from(steps: Vec<NormalizationStep>) -> Self {
        Self { steps }
    }
}

impl IntoIterator for StepLog {
    type Item = NormalizationStep;
    type IntoIter = std::vec::IntoIter<NormalizationStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}

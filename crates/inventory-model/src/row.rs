//! Raw input rows.

use std::str::FromStr;

use crate::error::ModelError;

/// Columns the pipeline reads from the source table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputColumn {
    Ip,
    Hostname,
    Fqdn,
    Mac,
    Owner,
    DeviceType,
    Site,
    Notes,
    SourceRowId,
}

pub const INPUT_COLUMNS: [InputColumn; 9] = [
    InputColumn::Ip,
    InputColumn::Hostname,
    InputColumn::Fqdn,
    InputColumn::Mac,
    InputColumn::Owner,
    InputColumn::DeviceType,
    InputColumn::Site,
    InputColumn::Notes,
    InputColumn::SourceRowId,
];

impl InputColumn {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ip => "ip",
            Self::Hostname => "hostname",
            Self::Fqdn => "fqdn",
            Self::Mac => "mac",
            Self::Owner => "owner",
            Self::DeviceType => "device_type",
            Self::Site => "site",
            Self::Notes => "notes",
            Self::SourceRowId => "source_row_id",
        }
    }
}

impl FromStr for InputColumn {
    type Err = ModelError;

    /// Header names match case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        INPUT_COLUMNS
            .into_iter()
            .find(|column| column.as_str() == lowered)
            .ok_or_else(|| ModelError::UnknownColumn(s.to_string()))
    }
}

/// One source row. `None` means the column was not present at all;
/// `Some("")` means it was present but empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    pub ip: Option<String>,
    pub hostname: Option<String>,
    pub fqdn: Option<String>,
    pub mac: Option<String>,
    pub owner: Option<String>,
    pub device_type: Option<String>,
    pub site: Option<String>,
    pub notes: Option<String>,
    pub source_row_id: Option<String>,
}

impl RawRow {
    pub fn get(&self, column: InputColumn) -> Option<&str> {
        self.slot(column).as_deref()
    }

    pub fn set(&mut self, column: InputColumn, value: impl Into<String>) {
        *self.slot_mut(column) = Some(value.into());
    }

    #[must_use]
    pub fn with(mut self, column: InputColumn, value: impl Into<String>) -> Self {
        self.set(column, value);
        self
    }

    fn slot(&self, column: InputColumn) -> &Option<String> {
        match column {
            InputColumn::Ip => &self.ip,
            InputColumn::Hostname => &self.hostname,
            InputColumn::Fqdn => &self.fqdn,
            InputColumn::Mac => &self.mac,
            InputColumn::Owner => &self.owner,
            InputColumn::DeviceType => &self.device_type,
            InputColumn::Site => &self.site,
            InputColumn::Notes => &self.notes,
            InputColumn::SourceRowId => &self.source_row_id,
        }
    }

    fn slot_mut(&mut self, column: InputColumn) -> &mut Option<String> {
        match column {
            InputColumn::Ip => &mut self.ip,
            InputColumn::Hostname => &mut self.hostname,
            InputColumn::Fqdn => &mut self.fqdn,
            InputColumn::Mac => &mut self.mac,
            InputColumn::Owner => &mut self.owner,
            InputColumn::DeviceType => &mut self.device_type,
            InputColumn::Site => &mut self.site,
            InputColumn::Notes => &mut self.notes,
            InputColumn::SourceRowId => &mut self.source_row_id,
        }
    }
}

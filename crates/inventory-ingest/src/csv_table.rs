use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use csv::ReaderBuilder;
use tracing::{debug, warn};

use inventory_model::{INPUT_COLUMNS, InputColumn, RawRow};

/// Source table as read from disk. Cells are kept verbatim; the normalizers
/// own trimming.
#[derive(Debug, Clone, Default)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

impl CsvTable {
    /// Index of the first header matching `column`, case-insensitively.
    pub fn column_index(&self, column: InputColumn) -> Option<usize> {
        self.headers
            .iter()
            .position(|header| header.eq_ignore_ascii_case(column.as_str()))
    }

    /// Extract recognized columns from every row.
    ///
    /// A column missing from the header is `None` on every row; a column that
    /// is present but short on a given record reads as an empty string.
    pub fn raw_rows(&self) -> Vec<RawRow> {
        let indexes: Vec<(InputColumn, usize)> = INPUT_COLUMNS
            .into_iter()
            .filter_map(|column| self.column_index(column).map(|idx| (column, idx)))
            .collect();
        for header in &self.headers {
            if header.parse::<InputColumn>().is_err() {
                debug!(header = %header, "ignoring unrecognized column");
            }
        }
        self.rows
            .iter()
            .map(|record| {
                let mut row = RawRow::default();
                for (column, idx) in &indexes {
                    let value = record.get(*idx).map(String::as_str).unwrap_or_default();
                    row.set(*column, value);
                }
                row
            })
            .collect()
    }
}

pub fn read_csv_table(path: &Path) -> Result<CsvTable> {
    let reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("read csv: {}", path.display()))?;
    read_table(reader).with_context(|| format!("read records: {}", path.display()))
}

fn read_table<R: Read>(mut reader: csv::Reader<R>) -> Result<CsvTable> {
    let mut records = reader.records();
    let Some(header_record) = records.next() else {
        return Ok(CsvTable::default());
    };
    let headers: Vec<String> = header_record
        .context("read header")?
        .iter()
        .map(normalize_header)
        .collect();
    for column in INPUT_COLUMNS {
        let matches = headers
            .iter()
            .filter(|header| header.eq_ignore_ascii_case(column.as_str()))
            .count();
        if matches > 1 {
            warn!(column = column.as_str(), "duplicate column, using the first");
        }
    }

    // Empty lines never reach here; a line of bare delimiters is a real row.
    let mut rows: Vec<Vec<String>> = Vec::new();
    for (line, record) in records.enumerate() {
        let record = record.with_context(|| format!("read record {}", line + 2))?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    Ok(CsvTable { headers, rows })
}

/// Read an inventory CSV straight into raw rows.
pub fn read_inventory(path: &Path) -> Result<Vec<RawRow>> {
    let table = read_csv_table(path)?;
    for column in INPUT_COLUMNS {
        if table.column_index(column).is_none() {
            debug!(column = column.as_str(), "column not present in source");
        }
    }
    Ok(table.raw_rows())
}

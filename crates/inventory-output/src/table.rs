//! Clean table CSV output.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use csv::WriterBuilder;
use tracing::debug;

use inventory_model::{CLEAN_COLUMNS, CleanRecord};

use crate::common::ensure_parent_dir;

/// Write the clean table. The header is written even when there are no rows.
pub fn write_clean_table(path: &Path, records: &[CleanRecord]) -> Result<()> {
    ensure_parent_dir(path)?;
    let file = std::fs::File::create(path).with_context(|| format!("create {}", path.display()))?;
    write_records(file, records).with_context(|| format!("write {}", path.display()))?;
    debug!(path = %path.display(), rows = records.len(), "wrote clean table");
    Ok(())
}

pub(crate) fn write_records<W: Write>(writer: W, records: &[CleanRecord]) -> Result<()> {
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(writer);
    writer.write_record(CLEAN_COLUMNS)?;
    for record in records {
        writer.write_record(record.values())?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(records: &[CleanRecord]) -> String {
        let mut buffer = Vec::new();
        write_records(&mut buffer, records).expect("write records");
        String::from_utf8(buffer).expect("utf8")
    }

    #[test]
    fn header_only_for_empty_table() {
        insta::assert_snapshot!(
            render(&[]).trim_end(),
            @"ip,ip_valid,ip_version,subnet_cidr,hostname,hostname_valid,fqdn,fqdn_consistent,reverse_ptr,mac,mac_valid,owner,owner_email,owner_team,device_type,device_type_confidence,site,site_normalized,source_row_id,normalization_steps"
        );
    }

    #[test]
    fn values_are_quoted_when_needed() {
        let record = CleanRecord {
            owner: "Doe, Jane".to_string(),
            ip_valid: "false".to_string(),
            normalization_steps: "ip_missing|mac_missing".to_string(),
            ..CleanRecord::default()
        };
        let rendered = render(&[record]);
        let row = rendered.lines().nth(1).expect("data row");
        assert_eq!(row, ",false,,,,,,,,,,\"Doe, Jane\",,,,,,,,ip_missing|mac_missing");
    }
}

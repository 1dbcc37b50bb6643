//! Anomaly report JSON output.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use inventory_model::AnomalyRecord;

use crate::common::ensure_parent_dir;

/// Write the anomaly report as a pretty-printed JSON array.
pub fn write_anomaly_report(path: &Path, anomalies: &[AnomalyRecord]) -> Result<()> {
    ensure_parent_dir(path)?;
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, anomalies)
        .with_context(|| format!("serialize {}", path.display()))?;
    writer
        .write_all(b"\n")
        .and_then(|()| writer.flush())
        .with_context(|| format!("write {}", path.display()))?;
    debug!(path = %path.display(), anomalies = anomalies.len(), "wrote anomaly report");
    Ok(())
}

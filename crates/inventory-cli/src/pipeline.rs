//! Pipeline stages: ingest, normalize, output.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info, info_span, trace};

use inventory_ingest::read_inventory;
use inventory_model::RawRow;
use inventory_normalization::{NormalizedInventory, normalize_rows};
use inventory_output::{OutputPaths, ensure_output_dir, write_outputs};

use crate::logging::redact_value;
use crate::types::CleanResult;

#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub clean_name: String,
    pub anomalies_name: String,
    /// Normalize and report without writing files.
    pub dry_run: bool,
}

pub fn ingest(input: &Path) -> Result<Vec<RawRow>> {
    let start = Instant::now();
    let rows = read_inventory(input).with_context(|| format!("ingest {}", input.display()))?;
    info!(
        input = %input.display(),
        row_count = rows.len(),
        duration_ms = start.elapsed().as_millis(),
        "ingest complete"
    );
    Ok(rows)
}

pub fn normalize(rows: &[RawRow]) -> NormalizedInventory {
    let start = Instant::now();
    let inventory = normalize_rows(rows);
    for anomaly in &inventory.anomalies {
        let row_id = anomaly.source_row_id.as_deref().unwrap_or("-");
        for issue in &anomaly.issues {
            debug!(
                source_row_id = %row_id,
                field = %issue.field,
                issue_type = %issue.kind,
                "row issue"
            );
            trace!(
                source_row_id = %row_id,
                field = %issue.field,
                value = %redact_value(&issue.value),
                "row issue value"
            );
        }
    }
    info!(
        row_count = inventory.records.len(),
        anomaly_count = inventory.anomalies.len(),
        issue_count = inventory.issue_count(),
        duration_ms = start.elapsed().as_millis(),
        "normalize complete"
    );
    inventory
}

pub fn output(
    output_dir: &Path,
    paths: &OutputPaths,
    inventory: &NormalizedInventory,
) -> Result<()> {
    let start = Instant::now();
    ensure_output_dir(output_dir)?;
    write_outputs(paths, inventory)?;
    info!(
        clean_csv = %paths.clean_csv.display(),
        anomalies_json = %paths.anomalies_json.display(),
        duration_ms = start.elapsed().as_millis(),
        "output complete"
    );
    Ok(())
}

pub fn run_pipeline(config: &PipelineConfig) -> Result<CleanResult> {
    let rows = info_span!("ingest", input = %config.input.display())
        .in_scope(|| ingest(&config.input))?;

    let inventory = info_span!("normalize").in_scope(|| normalize(&rows));

    let outputs = if config.dry_run {
        info!("dry run, skipping output");
        None
    } else {
        let paths = OutputPaths::in_dir(
            &config.output_dir,
            &config.clean_name,
            &config.anomalies_name,
        );
        info_span!("output", output_dir = %config.output_dir.display())
            .in_scope(|| output(&config.output_dir, &paths, &inventory))?;
        Some(paths)
    };

    Ok(CleanResult {
        input: config.input.clone(),
        outputs,
        inventory,
    })
}

//! Output generation for normalized inventories.
//!
//! - **Clean table**: CSV with the fixed 20-column header
//! - **Anomaly report**: pretty-printed JSON array, one entry per row with issues

mod common;
mod report;
mod table;

pub use common::{ensure_output_dir, ensure_parent_dir};
pub use report::write_anomaly_report;
pub use table::write_clean_table;

use std::path::{Path, PathBuf};

use anyhow::Result;
use inventory_normalization::NormalizedInventory;

/// Default clean table file name.
pub const DEFAULT_CLEAN_NAME: &str = "inventory_clean.csv";
/// Default anomaly report file name.
pub const DEFAULT_ANOMALIES_NAME: &str = "anomalies.json";

/// Where the two outputs of a run were written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub clean_csv: PathBuf,
    pub anomalies_json: PathBuf,
}

impl OutputPaths {
    pub fn in_dir(output_dir: &Path, clean_name: &str, anomalies_name: &str) -> Self {
        Self {
            clean_csv: output_dir.join(clean_name),
            anomalies_json: output_dir.join(anomalies_name),
        }
    }
}

/// Write both outputs, creating parent directories as needed.
pub fn write_outputs(paths: &OutputPaths, inventory: &NormalizedInventory) -> Result<()> {
    write_clean_table(&paths.clean_csv, &inventory.records)?;
    write_anomaly_report(&paths.anomalies_json, &inventory.anomalies)?;
    Ok(())
}

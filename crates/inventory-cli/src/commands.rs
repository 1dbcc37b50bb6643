use anyhow::Result;
use comfy_table::Table;
use tracing::info_span;

use inventory_cli::pipeline::{PipelineConfig, run_pipeline};
use inventory_cli::types::CleanResult;
use inventory_model::NormalizationStep;

use crate::cli::CleanArgs;
use crate::summary::apply_table_style;

pub fn run_clean(args: &CleanArgs) -> Result<CleanResult> {
    let span = info_span!("clean", input = %args.input.display());
    let _guard = span.enter();
    let config = PipelineConfig {
        input: args.input.clone(),
        output_dir: args.output_dir.clone(),
        clean_name: args.clean_name.clone(),
        anomalies_name: args.anomalies_name.clone(),
        dry_run: args.dry_run,
    };
    run_pipeline(&config)
}

pub fn run_steps() {
    let mut table = Table::new();
    table.set_header(vec!["Step", "Field family"]);
    apply_table_style(&mut table);
    for step in NormalizationStep::ALL {
        table.add_row(vec![step.as_str(), step.family().label()]);
    }
    println!("{table}");
}

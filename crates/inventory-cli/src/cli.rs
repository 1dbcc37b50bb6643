//! CLI argument definitions for the inventory cleaner.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use inventory_cli::logging::LogFormat;
use inventory_output::{DEFAULT_ANOMALIES_NAME, DEFAULT_CLEAN_NAME};
use tracing::level_filters::LevelFilter;

#[derive(Parser)]
#[command(
    name = "inventory-clean",
    version,
    about = "Normalize a network asset inventory and report data-quality anomalies",
    long_about = "Normalize a network asset inventory CSV.\n\n\
                  Canonicalizes IP addresses, hostnames, FQDNs, MAC addresses, owners,\n\
                  device types and sites, and writes a clean table plus a JSON anomaly report."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow raw row values (owners, addresses) in trace logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Normalize an inventory CSV and write the clean table and anomaly report.
    Clean(CleanArgs),

    /// List the normalization step tokens and the field family of each.
    Steps,
}

#[derive(Parser)]
pub struct CleanArgs {
    /// Path to the raw inventory CSV.
    #[arg(value_name = "INPUT", default_value = "inventory_raw.csv")]
    pub input: PathBuf,

    /// Output directory, created when missing.
    #[arg(long = "output-dir", value_name = "DIR", default_value = "deliverables")]
    pub output_dir: PathBuf,

    /// File name of the clean table inside the output directory.
    #[arg(long = "clean-name", value_name = "FILE", default_value = DEFAULT_CLEAN_NAME)]
    pub clean_name: String,

    /// File name of the anomaly report inside the output directory.
    #[arg(long = "anomalies-name", value_name = "FILE", default_value = DEFAULT_ANOMALIES_NAME)]
    pub anomalies_name: String,

    /// Normalize and report without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Exit with status 1 when any row produced an anomaly.
    #[arg(long = "fail-on-anomalies")]
    pub fail_on_anomalies: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl From<LogLevelArg> for LevelFilter {
    fn from(level: LogLevelArg) -> Self {
        match level {
            LogLevelArg::Error => Self::ERROR,
            LogLevelArg::Warn => Self::WARN,
            LogLevelArg::Info => Self::INFO,
            LogLevelArg::Debug => Self::DEBUG,
            LogLevelArg::Trace => Self::TRACE,
        }
    }
}

impl From<LogFormatArg> for LogFormat {
    fn from(format: LogFormatArg) -> Self {
        match format {
            LogFormatArg::Pretty => Self::Pretty,
            LogFormatArg::Compact => Self::Compact,
            LogFormatArg::Json => Self::Json,
        }
    }
}

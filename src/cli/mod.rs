//! Command-line parsing for the inventory KPI analyzer.
//!
//! The goal of this module is to keep **argument parsing** separate from the
//! pipeline; `app` turns these structs into `domain` config objects.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::{DEFAULT_API_URL, DEFAULT_CHART_DIR, DEFAULT_REPORT_FILE, DEFAULT_TIMEOUT_SECS};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "kpi", version, about = "KPI analysis utility for dealer-portal inventory")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch inventory, analyze it, render charts and write the JSON report (default).
    Report(ReportArgs),
    /// Fetch inventory and render the charts only.
    Charts(ChartArgs),
    /// Print a named KPI resource from the inventory service as JSON.
    Fetch(KpiArgs),
}

/// Where inventory data comes from.
#[derive(Debug, Args, Clone)]
pub struct SourceArgs {
    /// Inventory service base URL.
    #[arg(long, env = "API_BASE_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Bearer token for the inventory service.
    #[arg(long, env = "AUTH_TOKEN", hide_env_values = true)]
    pub auth_token: Option<String>,

    /// Read inventory from a local JSON or CSV export instead of the service.
    #[arg(long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// HTTP request timeout (seconds).
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,
}

/// Chart output options.
#[derive(Debug, Args, Clone)]
pub struct ChartOutputArgs {
    /// Directory for the chart PNGs.
    #[arg(long, value_name = "DIR", default_value = DEFAULT_CHART_DIR)]
    pub chart_dir: PathBuf,

    /// TrueType font used for chart text (defaults to a system sans-serif font).
    #[arg(long, value_name = "TTF", env = "KPI_CHART_FONT")]
    pub chart_font: Option<PathBuf>,
}

/// Options for a full report run.
#[derive(Debug, Args, Clone)]
pub struct ReportArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    #[command(flatten)]
    pub charts: ChartOutputArgs,

    /// Output file for the JSON report.
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_REPORT_FILE)]
    pub output: PathBuf,

    /// Generate charts only (skip the JSON report).
    #[arg(long)]
    pub charts_only: bool,
}

/// Options for `kpi charts`.
#[derive(Debug, Args, Clone)]
pub struct ChartArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    #[command(flatten)]
    pub charts: ChartOutputArgs,
}

/// Options for `kpi fetch`.
#[derive(Debug, Args, Clone)]
pub struct KpiArgs {
    /// KPI resource name (requested as `{api-url}/kpi/{KIND}`).
    #[arg(value_name = "KIND")]
    pub kind: String,

    #[command(flatten)]
    pub source: SourceArgs,
}

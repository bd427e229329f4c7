//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - builds run configuration from flags and environment
//! - dispatches to the report pipeline
//! - prints summaries and KPI payloads

use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{ChartArgs, ChartOutputArgs, Command, KpiArgs, ReportArgs, SourceArgs};
use crate::domain::{ReportConfig, SourceConfig};
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `kpi` binary.
pub fn run() -> Result<(), AppError> {
    // `kpi` and `kpi --output x.json` behave like `kpi report ...`; clap needs
    // the subcommand name, so argv is rewritten before parsing.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Report(args) if args.charts_only => {
            let config = report_config_from_args(&args);
            handle_charts(&config)
        }
        Command::Report(args) => handle_report(&report_config_from_args(&args)),
        Command::Charts(args) => handle_charts(&chart_config_from_args(&args)),
        Command::Fetch(args) => handle_fetch(&args),
    }
}

/// Install the `tracing` subscriber (`RUST_LOG` overrides the `info` default).
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();
}

fn handle_report(config: &ReportConfig) -> Result<(), AppError> {
    if let Some(report) = pipeline::generate_report(config)? {
        println!("{}", crate::report::format_report_summary(&report));
    }
    Ok(())
}

fn handle_charts(config: &ReportConfig) -> Result<(), AppError> {
    let written = pipeline::generate_charts(config)?;
    for path in &written {
        println!("{}", path.display());
    }
    Ok(())
}

fn handle_fetch(args: &KpiArgs) -> Result<(), AppError> {
    let payload = pipeline::fetch_kpi(&source_config_from_args(&args.source), &args.kind)?;
    let text = serde_json::to_string_pretty(&payload)
        .map_err(|e| AppError::output(format!("Failed to serialize {} KPI data: {e}", args.kind)))?;
    println!("{text}");
    Ok(())
}

pub fn source_config_from_args(args: &SourceArgs) -> SourceConfig {
    SourceConfig {
        api_url: args.api_url.clone(),
        auth_token: args.auth_token.clone(),
        input: args.input.clone(),
        timeout: Duration::from_secs(args.timeout),
    }
}

pub fn report_config_from_args(args: &ReportArgs) -> ReportConfig {
    with_chart_output(source_config_from_args(&args.source), &args.charts, ReportConfig {
        output: args.output.clone(),
        ..ReportConfig::default()
    })
}

fn chart_config_from_args(args: &ChartArgs) -> ReportConfig {
    with_chart_output(source_config_from_args(&args.source), &args.charts, ReportConfig::default())
}

fn with_chart_output(source: SourceConfig, charts: &ChartOutputArgs, base: ReportConfig) -> ReportConfig {
    ReportConfig {
        source,
        chart_dir: charts.chart_dir.clone(),
        chart_font: charts.chart_font.clone(),
        ..base
    }
}

/// Rewrite argv so `kpi` defaults to `kpi report`.
///
/// Rules:
/// - `kpi`                      -> `kpi report`
/// - `kpi -o out.json ...`      -> `kpi report -o out.json ...`
/// - `kpi --help/--version/-h`  -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("report".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(arg1.as_str(), "-h" | "--help" | "-V" | "--version" | "help");
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "report" | "charts" | "fetch");
    if is_subcommand {
        return argv;
    }

    if arg1.starts_with('-') {
        argv.insert(1, "report".to_string());
        return argv;
    }

    argv
}

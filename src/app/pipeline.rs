//! Shared "report pipeline" logic behind the `report` and `charts` commands.
//!
//! Workflow:
//! load inventory -> analyses + recommendations (`report::build_report`) -> charts -> JSON report
//!
//! The CLI layer only decides what to print.

use std::path::PathBuf;

use serde_json::{Map, Value};

use crate::data::{InventoryClient, load_inventory};
use crate::domain::{InventoryTable, ReportConfig, SourceConfig};
use crate::error::AppError;
use crate::report::{Report, build_report};

/// Execute the full report pipeline.
///
/// Returns `Ok(None)` when no inventory data was available; that is not an error.
pub fn generate_report(config: &ReportConfig) -> Result<Option<Report>, AppError> {
    let table = load_inventory(&config.source)?;
    generate_report_from_table(&table, config)
}

/// Run the report pipeline over an already loaded table.
pub fn generate_report_from_table(table: &InventoryTable, config: &ReportConfig) -> Result<Option<Report>, AppError> {
    let Some(report) = build_report(table) else {
        tracing::info!("No data available for analysis");
        return Ok(None);
    };

    // Charts are a side product of the report; a rendering failure must not
    // cost the JSON output.
    tracing::info!("Generating charts...");
    if let Err(e) = crate::plot::render_charts(table, &config.chart_dir, config.chart_font.as_deref()) {
        tracing::warn!("Chart generation failed: {e}");
    }

    crate::io::export::write_report_json(&config.output, &report)?;
    tracing::info!("KPI report generated: {}", config.output.display());

    Ok(Some(report))
}

/// Load inventory and render the charts only.
pub fn generate_charts(config: &ReportConfig) -> Result<Vec<PathBuf>, AppError> {
    let table = load_inventory(&config.source)?;
    crate::plot::render_charts(&table, &config.chart_dir, config.chart_font.as_deref())
}

/// Fetch a named KPI resource; failures degrade to an empty object.
pub fn fetch_kpi(config: &SourceConfig, kind: &str) -> Result<Map<String, Value>, AppError> {
    Ok(InventoryClient::new(config)?.fetch_kpi(kind))
}

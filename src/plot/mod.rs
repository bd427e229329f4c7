//! Static report charts written as PNG files.
//!
//! - series preparation from the table (`series`)
//! - Plotters drawing (`render`)
//! - runtime font registration for chart text (`fonts`)

use std::fs::create_dir_all;
use std::path::{Path, PathBuf};

use crate::domain::InventoryTable;
use crate::error::AppError;

pub mod fonts;
pub mod render;
pub mod series;

use render::BarChart;

pub const VENDOR_CHART_FILE: &str = "vendor_performance.png";
pub const LOCATION_CHART_FILE: &str = "location_distribution.png";
pub const STATUS_CHART_FILE: &str = "status_distribution.png";
pub const SCATTER_CHART_FILE: &str = "price_quantity_scatter.png";

/// Render all four charts into `output_dir` (created if missing).
///
/// Returns the paths written. An empty table renders nothing and is not an
/// error.
pub fn render_charts(
    table: &InventoryTable,
    output_dir: &Path,
    chart_font: Option<&Path>,
) -> Result<Vec<PathBuf>, AppError> {
    if table.is_empty() {
        tracing::info!("No data available for chart generation");
        return Ok(Vec::new());
    }

    fonts::ensure_chart_font(chart_font)?;

    create_dir_all(output_dir).map_err(|e| {
        AppError::output(format!("Failed to create chart directory '{}': {e}", output_dir.display()))
    })?;

    let mut written = Vec::with_capacity(4);

    // 1) Top vendors by quantity.
    let path = output_dir.join(VENDOR_CHART_FILE);
    let bars = series::vendor_quantity_bars(table, series::TOP_VENDOR_BARS);
    let layout = BarChart {
        title: "Top 10 Vendors by Total Quantity",
        x_desc: "Vendor",
        y_desc: "Total Quantity",
        size: (1200, 600),
    };
    render::draw_bar_chart(&path, &layout, &bars).map_err(|e| render_error(&path, e))?;
    written.push(path);

    // 2) Location share of total quantity.
    let path = output_dir.join(LOCATION_CHART_FILE);
    let slices = series::location_quantity_slices(table);
    if slices.iter().map(|(_, q)| q).sum::<f64>() > 0.0 {
        render::draw_pie_chart(&path, "Inventory Distribution by Location", (1000, 600), &slices)
            .map_err(|e| render_error(&path, e))?;
        written.push(path);
    } else {
        tracing::warn!("Skipping {LOCATION_CHART_FILE}: every location has zero quantity");
    }

    // 3) Status counts.
    let path = output_dir.join(STATUS_CHART_FILE);
    let layout = BarChart {
        title: "Inventory Status Distribution",
        x_desc: "Status",
        y_desc: "Count",
        size: (800, 600),
    };
    render::draw_bar_chart(&path, &layout, &series::status_bars(table)).map_err(|e| render_error(&path, e))?;
    written.push(path);

    // 4) Price vs quantity.
    let path = output_dir.join(SCATTER_CHART_FILE);
    render::draw_price_quantity_scatter(&path, (1000, 600), &series::price_quantity_points(table))
        .map_err(|e| render_error(&path, e))?;
    written.push(path);

    tracing::info!("Charts generated in {}/", output_dir.display());
    Ok(written)
}

fn render_error(path: &Path, err: Box<dyn std::error::Error>) -> AppError {
    AppError::output(format!("Failed to render chart '{}': {err}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::fixtures::row;

    /// Chart text needs a TrueType font; hosts without one skip drawing tests.
    fn font_available() -> bool {
        match fonts::ensure_chart_font(None) {
            Ok(_) => true,
            Err(e) => {
                eprintln!("skipping chart rendering test: {e}");
                false
            }
        }
    }

    fn assert_non_empty_files(paths: &[PathBuf]) {
        for path in paths {
            let len = std::fs::metadata(path).map(|m| m.len()).unwrap_or(0);
            assert!(len > 0, "{} missing or empty", path.display());
        }
    }

    #[test]
    fn writes_all_four_charts() {
        if !font_available() {
            return;
        }
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("reports");
        let table = InventoryTable::new(vec![
            row("AutoParts Pro", "Dallas", 150, 12.99, "ACTIVE"),
            row("AutoParts Pro", "Dallas", 2, 150.0, "OUT_OF_STOCK"),
            row("MotorCity Supplies", "Chicago", 120, 45.99, "ACTIVE"),
        ]);

        let written = render_charts(&table, &out, None).unwrap();
        let expected: Vec<PathBuf> = [VENDOR_CHART_FILE, LOCATION_CHART_FILE, STATUS_CHART_FILE, SCATTER_CHART_FILE]
            .iter()
            .map(|name| out.join(name))
            .collect();
        assert_eq!(written, expected);
        assert_non_empty_files(&written);
    }

    #[test]
    fn zero_quantity_skips_location_pie() {
        if !font_available() {
            return;
        }
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("reports");
        let table = InventoryTable::new(vec![
            row("AutoParts Pro", "Dallas", 0, 12.99, "OUT_OF_STOCK"),
            row("MotorCity Supplies", "Chicago", 0, 45.99, "OUT_OF_STOCK"),
        ]);

        let written = render_charts(&table, &out, None).unwrap();
        assert_eq!(written.len(), 3);
        assert!(!out.join(LOCATION_CHART_FILE).exists());
        assert_non_empty_files(&written);
    }

    #[test]
    fn empty_table_renders_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("reports");

        let written = render_charts(&InventoryTable::default(), &out, None).unwrap();
        assert!(written.is_empty());
        assert!(!out.exists(), "no directory should be created without data");
    }
}

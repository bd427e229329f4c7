//! Formatted terminal output for a finished report.
//!
//! Formatting lives here so the analysis code stays free of presentation and
//! output changes stay localized.

use crate::report::Report;

/// Number of vendor/location rows shown in the terminal tables.
const TABLE_ROWS: usize = 5;

/// Format the run summary printed after the report file is written.
pub fn format_report_summary(report: &Report) -> String {
    let mut out = String::new();
    let summary = &report.data_summary;

    out.push_str("=== kpi - Inventory KPI Report ===\n");
    out.push_str(&format!(
        "Generated: {}\n",
        report.generated_at.format("%Y-%m-%d %H:%M:%S")
    ));
    out.push_str(&format!(
        "Records: {} | vendors: {} | locations: {}\n",
        summary.total_records, summary.unique_vendors, summary.unique_locations
    ));
    if let (Some(lo), Some(hi)) = (summary.date_range.earliest, summary.date_range.latest) {
        out.push_str(&format!("Created: {} .. {}\n", lo.date(), hi.date()));
    }

    let trends = &report.trend_analysis;
    out.push_str(&format!(
        "Stock value: {:.2} | avg unit price: {:.2} | low-stock items: {}\n",
        trends.total_value, trends.avg_unit_price, trends.low_stock_items
    ));

    out.push_str("\nTop vendors (by total unit price):\n");
    out.push_str(&format!("  {:<28} {:>10} {:>8} {:>12}\n", "vendor", "quantity", "items", "total_value"));
    for (name, stats) in report.vendor_analysis.top_vendors.iter().take(TABLE_ROWS) {
        out.push_str(&format!(
            "  {:<28} {:>10} {:>8} {:>12.2}\n",
            truncate(name, 28),
            stats.total_quantity,
            stats.item_count,
            stats.total_value
        ));
    }

    out.push_str("\nTop locations (by quantity):\n");
    out.push_str(&format!("  {:<28} {:>10} {:>8} {:>8}\n", "location", "quantity", "items", "active"));
    for (name, stats) in report.location_analysis.top_locations.iter().take(TABLE_ROWS) {
        out.push_str(&format!(
            "  {:<28} {:>10} {:>8} {:>8}\n",
            truncate(name, 28),
            stats.total_quantity,
            stats.item_count,
            stats.active_items
        ));
    }

    out.push_str("\nRecommendations:\n");
    if report.recommendations.is_empty() {
        out.push_str("  (none)\n");
    }
    for rec in &report.recommendations {
        out.push_str(&format!("  - {rec}\n"));
    }

    out
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max_chars.saturating_sub(1)).collect();
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::InventoryTable;
    use crate::domain::types::fixtures::row;
    use crate::report::build_report;

    #[test]
    fn summary_lists_counts_and_recommendations() {
        let table = InventoryTable::new(vec![
            row("AutoParts Pro", "Dallas", 150, 12.99, "ACTIVE"),
            row("MotorCity Supplies", "Chicago", 3, 150.0, "OUT_OF_STOCK"),
        ]);
        let report = build_report(&table).unwrap();
        let text = format_report_summary(&report);

        assert!(text.contains("Records: 2 | vendors: 2 | locations: 2"), "{text}");
        assert!(text.contains("MotorCity Supplies"));
        assert!(text.contains("- 🚨 1 items are out of stock"));
        assert!(!text.contains("Created:"));
    }

    #[test]
    fn truncate_long_names() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a very long vendor name", 6), "a ver…");
    }
}

//! Report assembly: the JSON document written at the end of a run.
//!
//! Charts are produced separately (`plot`) and never embedded here.

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::analysis::{
    LocationAnalysis, TrendAnalysis, VendorAnalysis, analyze_inventory_trends, analyze_location_distribution,
    analyze_vendor_performance,
};
use crate::domain::InventoryTable;

pub mod format;
pub mod recommend;

pub use format::format_report_summary;
pub use recommend::{Recommendation, generate_recommendations};

/// Earliest/latest `created_at`; both `null` when no row carries one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DateRange {
    pub earliest: Option<NaiveDateTime>,
    pub latest: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataSummary {
    pub total_records: usize,
    pub unique_vendors: usize,
    pub unique_locations: usize,
    pub date_range: DateRange,
}

impl DataSummary {
    pub fn from_table(table: &InventoryTable) -> Self {
        let (earliest, latest) = match table.created_at_range() {
            Some((lo, hi)) => (Some(lo), Some(hi)),
            None => (None, None),
        };
        Self {
            total_records: table.len(),
            unique_vendors: table.unique_vendors(),
            unique_locations: table.unique_locations(),
            date_range: DateRange { earliest, latest },
        }
    }
}

/// The KPI report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub generated_at: NaiveDateTime,
    pub data_summary: DataSummary,
    pub vendor_analysis: VendorAnalysis,
    pub location_analysis: LocationAnalysis,
    pub trend_analysis: TrendAnalysis,
    pub recommendations: Vec<String>,
}

impl Report {
    pub fn new(
        table: &InventoryTable,
        vendor_analysis: VendorAnalysis,
        location_analysis: LocationAnalysis,
        trend_analysis: TrendAnalysis,
        recommendations: &[Recommendation],
    ) -> Self {
        Self {
            generated_at: Local::now().naive_local(),
            data_summary: DataSummary::from_table(table),
            vendor_analysis,
            location_analysis,
            trend_analysis,
            recommendations: recommendations.iter().map(ToString::to_string).collect(),
        }
    }
}

/// Run every analysis over `table` and assemble the report.
///
/// Returns `None` for an empty table: there is nothing to report.
pub fn build_report(table: &InventoryTable) -> Option<Report> {
    if table.is_empty() {
        return None;
    }

    tracing::info!("Analyzing vendor performance...");
    let vendor_analysis = analyze_vendor_performance(table);

    tracing::info!("Analyzing location distribution...");
    let location_analysis = analyze_location_distribution(table);

    tracing::info!("Analyzing inventory trends...");
    let trend_analysis = analyze_inventory_trends(table);

    let recommendations = generate_recommendations(table);
    Some(Report::new(
        table,
        vendor_analysis,
        location_analysis,
        trend_analysis,
        &recommendations,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::fixtures::row;
    use chrono::NaiveDate;

    fn sample_table() -> InventoryTable {
        let mut a = row("AutoParts Pro", "Dallas", 150, 12.99, "ACTIVE");
        a.created_at = NaiveDate::from_ymd_opt(2024, 2, 10).unwrap().and_hms_opt(8, 0, 0);
        let mut b = row("AutoParts Pro", "Dallas", 2, 150.0, "OUT_OF_STOCK");
        b.created_at = NaiveDate::from_ymd_opt(2024, 2, 20).unwrap().and_hms_opt(17, 45, 0);
        let c = row("MotorCity Supplies", "Chicago", 120, 45.99, "ACTIVE");
        InventoryTable::new(vec![a, b, c])
    }

    #[test]
    fn empty_table_builds_no_report() {
        assert!(build_report(&InventoryTable::default()).is_none());
    }

    #[test]
    fn data_summary_counts_and_dates() {
        let report = build_report(&sample_table()).unwrap();
        let summary = &report.data_summary;
        assert_eq!(summary.total_records, 3);
        assert_eq!(summary.unique_vendors, 2);
        assert_eq!(summary.unique_locations, 2);
        assert_eq!(
            summary.date_range.earliest,
            NaiveDate::from_ymd_opt(2024, 2, 10).unwrap().and_hms_opt(8, 0, 0)
        );
        assert_eq!(
            summary.date_range.latest,
            NaiveDate::from_ymd_opt(2024, 2, 20).unwrap().and_hms_opt(17, 45, 0)
        );
    }

    #[test]
    fn missing_timestamps_serialize_as_null() {
        let table = InventoryTable::new(vec![row("V", "L", 50, 1.0, "ACTIVE")]);
        let report = build_report(&table).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert!(json["data_summary"]["date_range"]["earliest"].is_null());
        assert!(json["data_summary"]["date_range"]["latest"].is_null());
        assert!(json["generated_at"].is_string());
    }

    #[test]
    fn json_round_trip_preserves_values() {
        let report = build_report(&sample_table()).unwrap();
        let json = serde_json::to_string_pretty(&report).unwrap();
        let back: Report = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(
            value["vendor_analysis"]["summary"]["AutoParts Pro"]["total_value"],
            serde_json::json!(162.99)
        );
        assert_eq!(value["data_summary"]["date_range"]["earliest"], "2024-02-10T08:00:00");
        assert_eq!(value["trend_analysis"]["price_distribution"]["$100-200"], 1);
    }

    #[test]
    fn fixture_recommendations() {
        let report = build_report(&sample_table()).unwrap();
        assert_eq!(
            report.recommendations,
            vec![
                "⚠️  1 items have low stock (quantity < 10)".to_string(),
                "🚨 1 items are out of stock".to_string(),
                "💰 1 high-value items have low stock".to_string(),
            ]
        );
    }
}

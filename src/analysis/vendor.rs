//! Vendor performance view.

use serde::{Deserialize, Serialize};

use super::group::{GroupTotals, group_totals, round2};
use super::{LOW_STOCK_VENDOR_QUANTITY, TOP_GROUPS};
use crate::domain::{GroupMap, InventoryTable};

/// Per-vendor aggregates, rounded to 2 decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VendorStats {
    pub total_quantity: u64,
    pub avg_quantity: f64,
    pub item_count: usize,
    pub avg_unit_price: f64,
    /// Sum of `unit_price` over the vendor's items (not weighted by quantity).
    pub total_value: f64,
    pub active_items: usize,
}

impl From<&GroupTotals> for VendorStats {
    fn from(t: &GroupTotals) -> Self {
        Self {
            total_quantity: t.total_quantity,
            avg_quantity: round2(t.mean_quantity()),
            item_count: t.item_count,
            avg_unit_price: round2(t.mean_unit_price()),
            total_value: round2(t.unit_price_sum),
            active_items: t.active_items,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VendorAnalysis {
    /// Every vendor, ordered by name.
    pub summary: GroupMap<VendorStats>,
    /// Highest `total_value` first; ties keep name order.
    pub top_vendors: GroupMap<VendorStats>,
    /// Vendors with `total_quantity` under the vendor low-stock threshold.
    pub low_stock_vendors: GroupMap<VendorStats>,
}

pub fn analyze_vendor_performance(table: &InventoryTable) -> VendorAnalysis {
    if table.is_empty() {
        return VendorAnalysis::default();
    }

    let stats: Vec<(String, VendorStats)> = group_totals(table, |r| r.vendor_name.as_str())
        .iter()
        .map(|(name, totals)| (name.clone(), VendorStats::from(totals)))
        .collect();

    let mut ranked = stats.clone();
    // Stable sort: equal values stay in name order.
    ranked.sort_by(|a, b| b.1.total_value.total_cmp(&a.1.total_value));
    ranked.truncate(TOP_GROUPS);

    let low_stock_vendors = stats
        .iter()
        .filter(|(_, s)| s.total_quantity < LOW_STOCK_VENDOR_QUANTITY)
        .cloned()
        .collect();

    VendorAnalysis {
        summary: stats.into_iter().collect(),
        top_vendors: ranked.into_iter().collect(),
        low_stock_vendors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::fixtures::row;

    #[test]
    fn empty_table_yields_empty_analysis() {
        let analysis = analyze_vendor_performance(&InventoryTable::default());
        assert!(analysis.summary.is_empty());
        assert!(analysis.top_vendors.is_empty());
        assert!(analysis.low_stock_vendors.is_empty());
    }

    #[test]
    fn one_entry_per_vendor_covering_every_row() {
        let mut rows = Vec::new();
        for (i, vendor) in ["A", "B", "C", "D", "E", "F", "G"].iter().enumerate() {
            for j in 0..=i {
                rows.push(row(vendor, "Dallas", 20, (i * 10 + j) as f64, "ACTIVE"));
            }
        }
        let n = rows.len();
        let table = InventoryTable::new(rows);

        let analysis = analyze_vendor_performance(&table);
        assert_eq!(analysis.summary.len(), 7);
        let items: usize = analysis.summary.iter().map(|(_, s)| s.item_count).sum();
        assert_eq!(items, n);

        assert_eq!(analysis.top_vendors.len(), 5);
        let values: Vec<f64> = analysis.top_vendors.iter().map(|(_, s)| s.total_value).collect();
        assert!(values.windows(2).all(|w| w[0] >= w[1]), "{values:?}");
        assert_eq!(analysis.top_vendors.keys().next(), Some("G"));
        for key in analysis.top_vendors.keys() {
            assert!(analysis.summary.get(key).is_some());
        }
    }

    #[test]
    fn stats_are_rounded_and_low_stock_flagged() {
        let table = InventoryTable::new(vec![
            row("AutoParts Pro", "Dallas", 150, 12.99, "ACTIVE"),
            row("AutoParts Pro", "Dallas", 200, 8.50, "ACTIVE"),
            row("MotorCity Supplies", "Chicago", 75, 24.99, "ACTIVE"),
            row("MotorCity Supplies", "Chicago", 2, 45.991, "OUT_OF_STOCK"),
        ]);

        let analysis = analyze_vendor_performance(&table);
        let motor = analysis.summary.get("MotorCity Supplies").unwrap();
        assert_eq!(motor.total_quantity, 77);
        assert_eq!(motor.avg_quantity, 38.5);
        assert_eq!(motor.item_count, 2);
        assert_eq!(motor.avg_unit_price, 35.49);
        assert_eq!(motor.total_value, 70.98);
        assert_eq!(motor.active_items, 1);

        assert_eq!(
            analysis.low_stock_vendors.keys().collect::<Vec<_>>(),
            vec!["MotorCity Supplies"]
        );
    }

    #[test]
    fn ties_keep_name_order() {
        let table = InventoryTable::new(vec![
            row("Beta", "L", 1, 10.0, "ACTIVE"),
            row("Alpha", "L", 1, 10.0, "ACTIVE"),
        ]);
        let analysis = analyze_vendor_performance(&table);
        assert_eq!(analysis.top_vendors.keys().collect::<Vec<_>>(), vec!["Alpha", "Beta"]);
    }
}

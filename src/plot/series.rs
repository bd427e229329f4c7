//! Chart series prepared from the inventory table.
//!
//! Kept apart from drawing so the numbers behind each chart can be tested
//! without a font stack or a bitmap backend.

use crate::analysis::{group_totals, status_counts};
use crate::domain::InventoryTable;

/// Vendors shown in the vendor bar chart.
pub const TOP_VENDOR_BARS: usize = 10;

/// Summed quantity per vendor, largest first, at most `limit` vendors.
pub fn vendor_quantity_bars(table: &InventoryTable, limit: usize) -> Vec<(String, f64)> {
    let mut bars = quantity_by(table, |r| r.vendor_name.as_str());
    bars.truncate(limit);
    bars
}

/// Summed quantity per location, largest first.
pub fn location_quantity_slices(table: &InventoryTable) -> Vec<(String, f64)> {
    quantity_by(table, |r| r.location.as_str())
}

/// Item count per status, most common first.
pub fn status_bars(table: &InventoryTable) -> Vec<(String, f64)> {
    status_counts(table)
        .iter()
        .map(|(status, n)| (status.to_string(), *n as f64))
        .collect()
}

/// One `(unit_price, quantity)` point per row.
pub fn price_quantity_points(table: &InventoryTable) -> Vec<(f64, f64)> {
    table
        .rows()
        .iter()
        .map(|r| (r.unit_price, r.quantity as f64))
        .collect()
}

fn quantity_by<F>(table: &InventoryTable, key: F) -> Vec<(String, f64)>
where
    F: Fn(&crate::domain::InventoryRow) -> &str,
{
    let mut out: Vec<(String, u64)> = group_totals(table, key)
        .into_iter()
        .map(|(name, totals)| (name, totals.total_quantity))
        .collect();
    // Stable: equal totals stay in name order.
    out.sort_by(|a, b| b.1.cmp(&a.1));
    out.into_iter().map(|(name, q)| (name, q as f64)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::fixtures::row;

    #[test]
    fn vendor_bars_keep_top_ten_descending() {
        let rows = (0..12)
            .map(|i| row(&format!("Vendor {i:02}"), "Dallas", (i as u64 + 1) * 10, 5.0, "ACTIVE"))
            .collect();
        let table = InventoryTable::new(rows);

        let bars = vendor_quantity_bars(&table, TOP_VENDOR_BARS);
        assert_eq!(bars.len(), 10);
        assert_eq!(bars[0], ("Vendor 11".to_string(), 120.0));
        assert_eq!(bars[9], ("Vendor 02".to_string(), 30.0));
    }

    #[test]
    fn location_slices_and_status_bars() {
        let table = InventoryTable::new(vec![
            row("A", "Dallas", 100, 5.0, "ACTIVE"),
            row("B", "Chicago", 300, 5.0, "ACTIVE"),
            row("C", "Dallas", 50, 5.0, "OUT_OF_STOCK"),
        ]);

        assert_eq!(
            location_quantity_slices(&table),
            vec![("Chicago".to_string(), 300.0), ("Dallas".to_string(), 150.0)]
        );
        assert_eq!(
            status_bars(&table),
            vec![("ACTIVE".to_string(), 2.0), ("OUT_OF_STOCK".to_string(), 1.0)]
        );
        assert_eq!(price_quantity_points(&table)[1], (5.0, 300.0));
    }
}

//! Single grouped pass shared by the vendor and location views.

use std::collections::BTreeMap;

use crate::domain::{InventoryRow, InventoryTable};

/// Raw per-group sums; views derive means and rounding from these.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupTotals {
    pub total_quantity: u64,
    pub item_count: usize,
    pub unit_price_sum: f64,
    pub active_items: usize,
}

impl GroupTotals {
    fn add(&mut self, row: &InventoryRow) {
        self.total_quantity = self.total_quantity.saturating_add(row.quantity);
        self.item_count += 1;
        self.unit_price_sum += row.unit_price;
        if row.status.is_active() {
            self.active_items += 1;
        }
    }

    pub fn mean_quantity(&self) -> f64 {
        if self.item_count == 0 {
            return 0.0;
        }
        self.total_quantity as f64 / self.item_count as f64
    }

    pub fn mean_unit_price(&self) -> f64 {
        if self.item_count == 0 {
            return 0.0;
        }
        self.unit_price_sum / self.item_count as f64
    }
}

/// Group rows by `key`, ordered by key.
pub fn group_totals<F>(table: &InventoryTable, key: F) -> BTreeMap<String, GroupTotals>
where
    F: Fn(&InventoryRow) -> &str,
{
    let mut groups: BTreeMap<String, GroupTotals> = BTreeMap::new();
    for row in table.rows() {
        let k = key(row);
        match groups.get_mut(k) {
            Some(totals) => totals.add(row),
            None => {
                let mut totals = GroupTotals::default();
                totals.add(row);
                groups.insert(k.to_string(), totals);
            }
        }
    }
    groups
}

/// Round to 2 decimals, ties to even.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::fixtures::row;

    #[test]
    fn groups_are_key_ordered_with_sums() {
        let table = InventoryTable::new(vec![
            row("Zeta", "Dallas", 5, 10.0, "ACTIVE"),
            row("Alpha", "Dallas", 7, 2.5, "OUT_OF_STOCK"),
            row("Zeta", "Chicago", 15, 20.0, "ACTIVE"),
        ]);

        let groups = group_totals(&table, |r| r.vendor_name.as_str());
        assert_eq!(groups.keys().collect::<Vec<_>>(), vec!["Alpha", "Zeta"]);

        let zeta = &groups["Zeta"];
        assert_eq!(zeta.total_quantity, 20);
        assert_eq!(zeta.item_count, 2);
        assert_eq!(zeta.active_items, 2);
        assert!((zeta.mean_unit_price() - 15.0).abs() < 1e-12);
        assert!((zeta.mean_quantity() - 10.0).abs() < 1e-12);

        assert_eq!(groups["Alpha"].active_items, 0);
    }

    #[test]
    fn quantity_sums_saturate() {
        let table = InventoryTable::new(vec![
            row("V", "L", u64::MAX - 1, 1.0, "ACTIVE"),
            row("V", "L", 5, 1.0, "ACTIVE"),
        ]);
        let groups = group_totals(&table, |r| r.vendor_name.as_str());
        assert_eq!(groups["V"].total_quantity, u64::MAX);
        assert_eq!(groups["V"].item_count, 2);
    }

    #[test]
    fn round2_behaves() {
        assert_eq!(round2(12.344), 12.34);
        assert_eq!(round2(12.346), 12.35);
        assert_eq!(round2(0.125), 0.12);
        assert_eq!(round2(7.0), 7.0);
    }
}

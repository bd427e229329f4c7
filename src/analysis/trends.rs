//! Inventory trend view: status counts, price/quantity buckets, totals.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::LOW_STOCK_ITEM_QUANTITY;
use crate::domain::{GroupMap, InventoryTable};

/// Price bins as (inclusive upper edge, label). Lower edges are exclusive, so
/// a price of exactly 0 falls in no bin.
const PRICE_BINS: [(f64, &str); 5] = [
    (50.0, "$0-50"),
    (100.0, "$50-100"),
    (200.0, "$100-200"),
    (500.0, "$200-500"),
    (1000.0, "$500-1000"),
];
const PRICE_OPEN_BIN: &str = "$1000+";

/// Quantity bins as (inclusive upper edge, label); quantity 0 falls in no bin.
const QUANTITY_BINS: [(u64, &str); 4] = [(10, "0-10"), (50, "11-50"), (100, "51-100"), (500, "101-500")];
const QUANTITY_OPEN_BIN: &str = "500+";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrendAnalysis {
    /// Item count per status, most common first.
    pub status_distribution: GroupMap<usize>,
    /// Item count per price bin, in bin order. Zero-priced items are not counted.
    pub price_distribution: GroupMap<usize>,
    /// Item count per quantity bin, in bin order. Zero-quantity items are not counted.
    pub quantity_distribution: GroupMap<usize>,
    pub total_items: usize,
    /// Sum of `quantity * unit_price` across rows.
    pub total_value: f64,
    pub avg_unit_price: f64,
    pub low_stock_items: usize,
}

/// Bin label for a price; `None` for prices of 0 or below.
pub fn price_bucket(unit_price: f64) -> Option<&'static str> {
    if unit_price <= 0.0 {
        return None;
    }
    let label = PRICE_BINS
        .iter()
        .find(|(upper, _)| unit_price <= *upper)
        .map_or(PRICE_OPEN_BIN, |(_, label)| *label);
    Some(label)
}

/// Bin label for a quantity; `None` for 0.
pub fn quantity_bucket(quantity: u64) -> Option<&'static str> {
    if quantity == 0 {
        return None;
    }
    let label = QUANTITY_BINS
        .iter()
        .find(|(upper, _)| quantity <= *upper)
        .map_or(QUANTITY_OPEN_BIN, |(_, label)| *label);
    Some(label)
}

/// Status counts, most common first; equal counts in status-name order.
pub fn status_counts(table: &InventoryTable) -> GroupMap<usize> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for row in table.rows() {
        *counts.entry(row.status.as_str()).or_default() += 1;
    }
    let mut ordered: Vec<(&str, usize)> = counts.into_iter().collect();
    ordered.sort_by(|a, b| b.1.cmp(&a.1));
    ordered.into_iter().collect()
}

pub fn analyze_inventory_trends(table: &InventoryTable) -> TrendAnalysis {
    if table.is_empty() {
        return TrendAnalysis::default();
    }

    let price_labels = PRICE_BINS.iter().map(|(_, l)| *l).chain([PRICE_OPEN_BIN]);
    let price_distribution = bucket_counts(price_labels, table.rows().iter().filter_map(|r| price_bucket(r.unit_price)));

    let quantity_labels = QUANTITY_BINS.iter().map(|(_, l)| *l).chain([QUANTITY_OPEN_BIN]);
    let quantity_distribution =
        bucket_counts(quantity_labels, table.rows().iter().filter_map(|r| quantity_bucket(r.quantity)));

    let total_items = table.len();
    let total_value = table.rows().iter().map(|r| r.stock_value()).sum();
    let avg_unit_price = table.rows().iter().map(|r| r.unit_price).sum::<f64>() / total_items as f64;
    let low_stock_items = table
        .rows()
        .iter()
        .filter(|r| r.quantity < LOW_STOCK_ITEM_QUANTITY)
        .count();

    TrendAnalysis {
        status_distribution: status_counts(table),
        price_distribution,
        quantity_distribution,
        total_items,
        total_value,
        avg_unit_price,
        low_stock_items,
    }
}

fn bucket_counts<'a>(
    labels: impl Iterator<Item = &'a str>,
    assigned: impl Iterator<Item = &'a str>,
) -> GroupMap<usize> {
    let mut counts: Vec<(&str, usize)> = labels.map(|l| (l, 0)).collect();
    for label in assigned {
        if let Some(slot) = counts.iter_mut().find(|(l, _)| *l == label) {
            slot.1 += 1;
        }
    }
    counts.into_iter().collect()
}

//! Location distribution view.

use serde::{Deserialize, Serialize};

use super::group::{GroupTotals, group_totals, round2};
use super::{LOW_STOCK_LOCATION_QUANTITY, TOP_GROUPS};
use crate::domain::{GroupMap, InventoryTable};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationStats {
    pub total_quantity: u64,
    pub item_count: usize,
    pub avg_unit_price: f64,
    pub active_items: usize,
}

impl From<&GroupTotals> for LocationStats {
    fn from(t: &GroupTotals) -> Self {
        Self {
            total_quantity: t.total_quantity,
            item_count: t.item_count,
            avg_unit_price: round2(t.mean_unit_price()),
            active_items: t.active_items,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationAnalysis {
    pub summary: GroupMap<LocationStats>,
    pub top_locations: GroupMap<LocationStats>,
    pub low_stock_locations: GroupMap<LocationStats>,
}

pub fn analyze_location_distribution(table: &InventoryTable) -> LocationAnalysis {
    if table.is_empty() {
        return LocationAnalysis::default();
    }

    let stats: Vec<(String, LocationStats)> = group_totals(table, |r| r.location.as_str())
        .iter()
        .map(|(name, totals)| (name.clone(), LocationStats::from(totals)))
        .collect();

    let mut ranked = stats.clone();
    ranked.sort_by(|a, b| b.1.total_quantity.cmp(&a.1.total_quantity));
    ranked.truncate(TOP_GROUPS);

    let low_stock_locations = stats
        .iter()
        .filter(|(_, s)| s.total_quantity < LOW_STOCK_LOCATION_QUANTITY)
        .cloned()
        .collect();

    LocationAnalysis {
        summary: stats.into_iter().collect(),
        top_locations: ranked.into_iter().collect(),
        low_stock_locations,
    }
}

//! Inventory rows and the in-memory table the analyses run over.
//!
//! Rows are validated once at ingest (`io::ingest`) and never mutated after;
//! every view in the report is recomputed from an `InventoryTable`.

use std::collections::BTreeSet;
use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Item status as reported by the inventory service.
///
/// Only `ACTIVE` and `OUT_OF_STOCK` drive any rule; every other value is kept
/// verbatim so it still shows up in the status distribution.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ItemStatus {
    Active,
    OutOfStock,
    Other(String),
}

impl ItemStatus {
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "ACTIVE" => ItemStatus::Active,
            "OUT_OF_STOCK" => ItemStatus::OutOfStock,
            other => ItemStatus::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ItemStatus::Active => "ACTIVE",
            ItemStatus::OutOfStock => "OUT_OF_STOCK",
            ItemStatus::Other(s) => s,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, ItemStatus::Active)
    }
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ItemStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ItemStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(ItemStatus::parse(&raw))
    }
}

/// One validated stocked-item record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryRow {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_name: Option<String>,
    pub vendor_name: String,
    pub location: String,
    /// At most `io::ingest::MAX_QUANTITY` for ingested rows, so the `f64`
    /// conversion in `stock_value` and trend totals is exact.
    pub quantity: u64,
    pub unit_price: f64,
    pub status: ItemStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<NaiveDateTime>,
}

impl InventoryRow {
    /// Extended value of the row (`quantity * unit_price`).
    pub fn stock_value(&self) -> f64 {
        self.quantity as f64 * self.unit_price
    }
}

/// Ordered collection of inventory rows, loaded once per run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InventoryTable {
    rows: Vec<InventoryRow>,
}

impl InventoryTable {
    pub fn new(rows: Vec<InventoryRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[InventoryRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn unique_vendors(&self) -> usize {
        self.rows
            .iter()
            .map(|r| r.vendor_name.as_str())
            .collect::<BTreeSet<_>>()
            .len()
    }

    pub fn unique_locations(&self) -> usize {
        self.rows
            .iter()
            .map(|r| r.location.as_str())
            .collect::<BTreeSet<_>>()
            .len()
    }

    /// Earliest and latest `created_at` across rows that carry one.
    pub fn created_at_range(&self) -> Option<(NaiveDateTime, NaiveDateTime)> {
        let mut stamps = self.rows.iter().filter_map(|r| r.created_at);
        let first = stamps.next()?;
        Some(stamps.fold((first, first), |(lo, hi), t| (lo.min(t), hi.max(t))))
    }
}

impl FromIterator<InventoryRow> for InventoryTable {
    fn from_iter<I: IntoIterator<Item = InventoryRow>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

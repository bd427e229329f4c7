//! Threshold rules that turn the table into advisory strings.

use std::fmt;

use crate::analysis::{LOW_STOCK_ITEM_QUANTITY, LOW_STOCK_VENDOR_QUANTITY, group_totals};
use crate::domain::{InventoryTable, ItemStatus};

/// Items priced above this with quantity below `HIGH_VALUE_MAX_QUANTITY` are flagged.
pub const HIGH_VALUE_MIN_PRICE: f64 = 100.0;
pub const HIGH_VALUE_MAX_QUANTITY: u64 = 5;

/// A matched rule and how many items/vendors matched it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recommendation {
    LowStock(usize),
    OutOfStock(usize),
    HighValueLowStock(usize),
    LowVendorInventory(usize),
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Recommendation::LowStock(n) => {
                write!(f, "⚠️  {n} items have low stock (quantity < {LOW_STOCK_ITEM_QUANTITY})")
            }
            Recommendation::OutOfStock(n) => write!(f, "🚨 {n} items are out of stock"),
            Recommendation::HighValueLowStock(n) => write!(f, "💰 {n} high-value items have low stock"),
            Recommendation::LowVendorInventory(n) => write!(f, "📦 {n} vendors have low total inventory"),
        }
    }
}

/// Evaluate every rule in fixed order; rules with no matches are omitted.
pub fn generate_recommendations(table: &InventoryTable) -> Vec<Recommendation> {
    let rows = table.rows();

    let low_stock = rows.iter().filter(|r| r.quantity < LOW_STOCK_ITEM_QUANTITY).count();
    let out_of_stock = rows
        .iter()
        .filter(|r| r.status == ItemStatus::OutOfStock)
        .count();
    let high_value_low_stock = rows
        .iter()
        .filter(|r| r.unit_price > HIGH_VALUE_MIN_PRICE && r.quantity < HIGH_VALUE_MAX_QUANTITY)
        .count();
    let low_vendors = group_totals(table, |r| r.vendor_name.as_str())
        .values()
        .filter(|t| t.total_quantity < LOW_STOCK_VENDOR_QUANTITY)
        .count();

    [
        Recommendation::LowStock(low_stock),
        Recommendation::OutOfStock(out_of_stock),
        Recommendation::HighValueLowStock(high_value_low_stock),
        Recommendation::LowVendorInventory(low_vendors),
    ]
    .into_iter()
    .filter(|rec| rec.count() > 0)
    .collect()
}

impl Recommendation {
    pub fn count(&self) -> usize {
        match *self {
            Recommendation::LowStock(n)
            | Recommendation::OutOfStock(n)
            | Recommendation::HighValueLowStock(n)
            | Recommendation::LowVendorInventory(n) => n,
        }
    }
}

//! Descriptive aggregates over the inventory table.
//!
//! - per-vendor performance (`vendor`)
//! - per-location distribution (`location`)
//! - status/price/quantity distributions and totals (`trends`)
//!
//! Vendor and location views share one grouped pass (`group`). Every function
//! here is pure; an empty table yields the view's `Default`.

pub mod group;
pub mod location;
pub mod trends;
pub mod vendor;

pub use group::{GroupTotals, group_totals, round2};
pub use location::{LocationAnalysis, LocationStats, analyze_location_distribution};
pub use trends::{TrendAnalysis, analyze_inventory_trends, price_bucket, quantity_bucket, status_counts};
pub use vendor::{VendorAnalysis, VendorStats, analyze_vendor_performance};

/// Items below this quantity count as low stock.
pub const LOW_STOCK_ITEM_QUANTITY: u64 = 10;
/// Vendors whose summed quantity is below this are flagged.
pub const LOW_STOCK_VENDOR_QUANTITY: u64 = 100;
/// Locations whose summed quantity is below this are flagged.
pub const LOW_STOCK_LOCATION_QUANTITY: u64 = 500;
/// Size of the "top vendors" / "top locations" views.
pub const TOP_GROUPS: usize = 5;

//! Inventory data sources: the remote inventory service, or a local export.

pub mod client;

use crate::domain::{InventoryTable, SourceConfig};
use crate::error::AppError;

pub use client::InventoryClient;

/// Load the inventory table for a run.
///
/// A configured `--input` file wins over the service. Service failures yield an
/// empty table; an unreadable local file is an error.
pub fn load_inventory(config: &SourceConfig) -> Result<InventoryTable, AppError> {
    match &config.input {
        Some(path) => {
            tracing::info!("Reading inventory data from {}...", path.display());
            Ok(crate::io::ingest::load_inventory_file(path)?.into_table())
        }
        None => {
            tracing::info!("Fetching inventory data...");
            Ok(InventoryClient::new(config)?.fetch_inventory())
        }
    }
}

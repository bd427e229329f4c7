//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - validated inventory rows and the table they live in (`InventoryRow`, `InventoryTable`)
//! - the ordered name -> value map every report view serializes through (`GroupMap`)
//! - run configuration (`SourceConfig`, `ReportConfig`)

pub mod config;
pub mod group_map;
pub mod types;

pub use config::*;
pub use group_map::GroupMap;
pub use types::*;

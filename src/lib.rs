//! `inventory-kpi` library crate.
//!
//! The binary (`kpi`) is a thin wrapper around this library so that:
//!
//! - analysis logic is testable without spawning processes or a live service
//! - the report pipeline can be driven from a local export as well as the API

pub mod analysis;
pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod io;
pub mod plot;
pub mod report;

//! Input/output helpers.
//!
//! - record ingest + validation from API bodies and local exports (`ingest`)
//! - report JSON persistence (`export`)

pub mod export;
pub mod ingest;

pub use export::*;
pub use ingest::*;

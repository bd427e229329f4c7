//! Persist the KPI report as pretty-printed JSON.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::AppError;
use crate::report::Report;

/// Write the report JSON file, replacing any existing file.
pub fn write_report_json(path: &Path, report: &Report) -> Result<(), AppError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            AppError::output(format!("Failed to create report directory '{}': {e}", parent.display()))
        })?;
    }

    let file = File::create(path)
        .map_err(|e| AppError::output(format!("Failed to create report JSON '{}': {e}", path.display())))?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, report)
        .map_err(|e| AppError::output(format!("Failed to write report JSON: {e}")))?;
    writer
        .flush()
        .map_err(|e| AppError::output(format!("Failed to flush report JSON: {e}")))?;

    Ok(())
}

/// Read a report back to check what was written.
#[cfg(test)]
pub fn read_report_json(path: &Path) -> Result<Report, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::input(format!("Failed to open report JSON '{}': {e}", path.display())))?;
    serde_json::from_reader(std::io::BufReader::new(file))
        .map_err(|e| AppError::input(format!("Invalid report JSON: {e}")))
}

//! Record ingest and validation.
//!
//! This module is responsible for turning loosely-shaped inventory records
//! (JSON from the inventory service, or a local JSON/CSV export) into
//! validated `InventoryRow`s.
//!
//! Design goals:
//! - **Strict schema** for required fields (vendor, location, quantity, price, status)
//! - **Row-level validation** (skip bad rows, but report what happened)
//! - **Deterministic behavior** (row order is preserved)
//! - **Separation of concerns**: no aggregation logic here

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use csv::StringRecord;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::domain::{InventoryRow, InventoryTable, ItemStatus};
use crate::error::AppError;

/// Envelope field some service endpoints wrap the record list in.
const CONTENT_FIELD: &str = "content";

/// Largest quantity accepted on a single record.
///
/// Keeps per-group sums far from `u64` overflow and `quantity as f64` exact.
pub const MAX_QUANTITY: u64 = 1_000_000_000_000;

/// A record rejected during ingest.
#[derive(Debug, Clone, PartialEq)]
pub struct RowError {
    /// 1-based record index (JSON) or file line (CSV).
    pub position: usize,
    pub id: Option<String>,
    pub message: String,
}

/// Ingest output: validated table + rejected records.
#[derive(Debug, Clone, Default)]
pub struct IngestedTable {
    pub table: InventoryTable,
    pub row_errors: Vec<RowError>,
    pub rows_read: usize,
}

impl IngestedTable {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Log every rejected record, then hand back the table.
    pub fn into_table(self) -> InventoryTable {
        for err in &self.row_errors {
            tracing::warn!(
                position = err.position,
                id = err.id.as_deref().unwrap_or("-"),
                "Skipping inventory record: {}",
                err.message
            );
        }
        if !self.row_errors.is_empty() {
            tracing::warn!(
                "{} of {} inventory records were rejected",
                self.row_errors.len(),
                self.rows_read
            );
        }
        self.table
    }
}

/// Raw record as it appears on the wire or in an export.
///
/// Every field is optional here; presence is enforced by `validate_record`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawInventoryRecord {
    #[serde(default, deserialize_with = "lenient_text")]
    pub sku: Option<String>,
    #[serde(default, alias = "itemName")]
    pub item_name: Option<String>,
    #[serde(default, alias = "vendorName")]
    pub vendor_name: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub quantity: Option<f64>,
    #[serde(default, alias = "unitPrice")]
    pub unit_price: Option<f64>,
    #[serde(default)]
    pub status: Option<String>,
    /// Kept untyped: the service may send an ISO string, epoch millis or a
    /// `[y, m, d, h, mi, s, nanos]` array.
    #[serde(default, alias = "createdAt")]
    pub created_at: Option<Value>,
}

/// Accept a string or a number (stringified); any other shape is `None`.
fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Extract the record list from a response body.
///
/// Accepts either a top-level array or an object carrying a `content` array.
/// Returns `None` for any other shape.
pub fn records_from_json(body: Value) -> Option<Vec<Value>> {
    match body {
        Value::Array(items) => Some(items),
        Value::Object(mut map) => match map.remove(CONTENT_FIELD) {
            Some(Value::Array(items)) => Some(items),
            _ => None,
        },
        _ => None,
    }
}

/// Validate JSON records into a table, collecting per-record errors.
pub fn table_from_records(records: Vec<Value>) -> IngestedTable {
    let rows_read = records.len();
    let mut rows = Vec::with_capacity(rows_read);
    let mut row_errors = Vec::new();

    for (idx, value) in records.into_iter().enumerate() {
        let position = idx + 1;
        let raw: RawInventoryRecord = match serde_json::from_value(value) {
            Ok(raw) => raw,
            Err(e) => {
                row_errors.push(RowError {
                    position,
                    id: None,
                    message: format!("malformed record: {e}"),
                });
                continue;
            }
        };
        match validate_record(&raw) {
            Ok(row) => rows.push(row),
            Err(message) => row_errors.push(RowError {
                position,
                id: raw.sku.clone(),
                message,
            }),
        }
    }

    IngestedTable {
        table: InventoryTable::new(rows),
        row_errors,
        rows_read,
    }
}

/// Load a local inventory export (`.csv`, otherwise JSON).
pub fn load_inventory_file(path: &Path) -> Result<IngestedTable, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::input(format!("Failed to open inventory file '{}': {e}", path.display())))?;

    let is_csv = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));

    if is_csv {
        return load_csv(file);
    }

    let body: Value = serde_json::from_reader(BufReader::new(file))
        .map_err(|e| AppError::input(format!("Invalid inventory JSON '{}': {e}", path.display())))?;
    let records = records_from_json(body).ok_or_else(|| {
        AppError::input(format!(
            "Inventory JSON '{}' must be an array or an object with a `content` array.",
            path.display()
        ))
    })?;
    Ok(table_from_records(records))
}

fn load_csv(file: File) -> Result<IngestedTable, AppError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(file);

    let headers = reader
        .headers()
        .map_err(|e| AppError::input(format!("Failed to read CSV headers: {e}")))?
        .clone();
    reader.set_headers(normalize_headers(&headers));

    let mut rows = Vec::new();
    let mut row_errors = Vec::new();
    let mut rows_read = 0usize;

    for (idx, result) in reader.deserialize::<RawInventoryRecord>().enumerate() {
        // +2: header is line 1 and CSV lines are 1-based.
        let line = idx + 2;
        rows_read += 1;

        let raw = match result {
            Ok(raw) => raw,
            Err(e) => {
                row_errors.push(RowError {
                    position: line,
                    id: None,
                    message: format!("CSV parse error: {e}"),
                });
                continue;
            }
        };

        match validate_record(&raw) {
            Ok(row) => rows.push(row),
            Err(message) => row_errors.push(RowError {
                position: line,
                id: raw.sku.clone(),
                message,
            }),
        }
    }

    Ok(IngestedTable {
        table: InventoryTable::new(rows),
        row_errors,
        rows_read,
    })
}

fn normalize_headers(headers: &StringRecord) -> StringRecord {
    // Spreadsheet exports often prefix the first header with a UTF-8 BOM.
    headers
        .iter()
        .map(|name| name.trim().trim_start_matches('\u{feff}').to_ascii_lowercase())
        .collect()
}

/// Turn a raw record into a validated row.
pub fn validate_record(raw: &RawInventoryRecord) -> Result<InventoryRow, String> {
    let vendor_name = required_text(raw.vendor_name.as_deref(), "vendor_name")?;
    let location = required_text(raw.location.as_deref(), "location")?;
    let status = required_text(raw.status.as_deref(), "status")?;

    let quantity = raw.quantity.ok_or("missing required field `quantity`")?;
    if !(quantity.is_finite() && quantity >= 0.0 && quantity.fract() == 0.0) {
        return Err(format!("`quantity` must be a non-negative integer, got {quantity}"));
    }
    if quantity > MAX_QUANTITY as f64 {
        return Err(format!("`quantity` {quantity} exceeds the maximum of {MAX_QUANTITY}"));
    }

    let unit_price = raw.unit_price.ok_or("missing required field `unit_price`")?;
    if !(unit_price.is_finite() && unit_price >= 0.0) {
        return Err(format!("`unit_price` must be a non-negative number, got {unit_price}"));
    }

    let created_at = raw.created_at.as_ref().and_then(|value| {
        let parsed = timestamp_from_value(value);
        if parsed.is_none() && !is_blank(value) {
            tracing::debug!("Ignoring unparseable created_at {value}");
        }
        parsed
    });

    Ok(InventoryRow {
        sku: raw.sku.clone().filter(|s| !s.trim().is_empty()),
        item_name: raw.item_name.clone().filter(|s| !s.trim().is_empty()),
        vendor_name,
        location,
        quantity: quantity as u64,
        unit_price,
        status: ItemStatus::parse(&status),
        created_at,
    })
}

fn required_text(value: Option<&str>, field: &str) -> Result<String, String> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        Some(_) => Err(format!("required field `{field}` is blank")),
        None => Err(format!("missing required field `{field}`")),
    }
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        _ => false,
    }
}

/// Interpret a JSON `created_at`: timestamp string, epoch millis, or a
/// Jackson-style `[year, month, day, hour, minute, second, nanos]` array
/// (trailing parts optional).
pub fn timestamp_from_value(value: &Value) -> Option<NaiveDateTime> {
    match value {
        Value::String(s) => parse_timestamp(s),
        Value::Number(n) => DateTime::from_timestamp_millis(n.as_i64()?).map(|dt| dt.naive_utc()),
        Value::Array(parts) => {
            let parts: Vec<i64> = parts.iter().map(Value::as_i64).collect::<Option<_>>()?;
            if !(3..=7).contains(&parts.len()) {
                return None;
            }
            let part = |i: usize| -> Option<u32> { u32::try_from(parts.get(i).copied().unwrap_or(0)).ok() };
            let year = i32::try_from(parts[0]).ok()?;
            NaiveDate::from_ymd_opt(year, part(1)?, part(2)?)?.and_hms_nano_opt(part(3)?, part(4)?, part(5)?, part(6)?)
        }
        _ => None,
    }
}

/// Parse the timestamp shapes the inventory service and exports emit.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_utc());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

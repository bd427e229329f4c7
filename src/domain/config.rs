//! Run configuration passed into the pipeline.
//!
//! These structs are built from CLI flags and environment variables in
//! `app`; nothing below the app layer reads the environment itself.

use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://localhost:8080/api";
pub const DEFAULT_REPORT_FILE: &str = "kpi_report.json";
pub const DEFAULT_CHART_DIR: &str = "reports";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Where inventory data comes from.
#[derive(Debug, Clone)]
pub struct SourceConfig {
    /// Base URL of the inventory service (e.g. `http://localhost:8080/api`).
    pub api_url: String,
    /// Bearer token; `None` sends unauthenticated requests.
    pub auth_token: Option<String>,
    /// Local JSON/CSV export to read instead of calling the service.
    pub input: Option<PathBuf>,
    pub timeout: Duration,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            auth_token: None,
            input: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Settings for a full report (or charts-only) run.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub source: SourceConfig,
    /// Report JSON path.
    pub output: PathBuf,
    /// Directory receiving the chart PNGs.
    pub chart_dir: PathBuf,
    /// TrueType font for chart text; system fonts are searched when unset.
    pub chart_font: Option<PathBuf>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            source: SourceConfig::default(),
            output: PathBuf::from(DEFAULT_REPORT_FILE),
            chart_dir: PathBuf::from(DEFAULT_CHART_DIR),
            chart_font: None,
        }
    }
}

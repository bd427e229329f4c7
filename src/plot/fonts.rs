//! Runtime font registration for chart text.
//!
//! Plotters is built with `ab_glyph`, which only draws text for fonts that
//! were registered explicitly. We register one TrueType file as `sans-serif`
//! (the family every chart uses) the first time charts are rendered.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use plotters::style::{FontStyle, register_font};

use crate::error::AppError;

pub const CHART_FONT_FAMILY: &str = "sans-serif";

/// Common locations of a plain sans-serif TrueType font.
const SYSTEM_FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu-sans-fonts/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation-sans/LiberationSans-Regular.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

static REGISTERED: OnceLock<Result<PathBuf, String>> = OnceLock::new();

/// Register the chart font once per process.
///
/// `preferred` (from `--chart-font` / `KPI_CHART_FONT`) is tried before the
/// system candidates. Later calls return the first call's outcome.
pub fn ensure_chart_font(preferred: Option<&Path>) -> Result<PathBuf, AppError> {
    REGISTERED
        .get_or_init(|| register_first_available(preferred))
        .clone()
        .map_err(AppError::output)
}

fn register_first_available(preferred: Option<&Path>) -> Result<PathBuf, String> {
    let candidates = preferred
        .map(Path::to_path_buf)
        .into_iter()
        .chain(SYSTEM_FONT_CANDIDATES.iter().map(PathBuf::from));

    for path in candidates {
        let bytes = match std::fs::read(&path) {
            Ok(bytes) => bytes,
            Err(_) => continue,
        };
        // Plotters keeps registered font data for the life of the process.
        let bytes: &'static [u8] = Box::leak(bytes.into_boxed_slice());
        // `InvalidFont` carries no message worth printing.
        match register_font(CHART_FONT_FAMILY, FontStyle::Normal, bytes) {
            Ok(()) => {
                tracing::debug!("Registered chart font {}", path.display());
                return Ok(path);
            }
            Err(_) => tracing::warn!("Ignoring unusable font {}", path.display()),
        }
    }

    Err("No usable TrueType font found for chart text; pass --chart-font <TTF> or set KPI_CHART_FONT".to_string())
}

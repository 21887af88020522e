//! Renderer-facing snapshot of a knob.
//!
//! Everything a renderer needs to draw one frame, already derived:
//! formatted readouts, the indicator rotation, the current-value bar sweep
//! and the reordered gradient.  Built on demand by
//! [`KnobEngine::view`](super::service::KnobEngine::view).

use crate::config::MAX_DECIMALS;
use crate::gradient::GradientStop;

use super::events::EventSource;

pub use crate::control::angle::BAR_START_ANGLE;

const PATTERNS: [&str; MAX_DECIMALS as usize + 1] =
    ["%.0f", "%.1f", "%.2f", "%.3f", "%.4f", "%.5f", "%.6f"];

/// printf-style format string for `decimals`, e.g. `"%.2f"`.
pub fn printf_pattern(decimals: u8) -> heapless::String<8> {
    let pattern = PATTERNS[usize::from(decimals.min(MAX_DECIMALS))];
    heapless::String::try_from(pattern).unwrap_or_default()
}

/// Fixed-point rendering of `value` with `decimals` digits.
pub fn format_value(value: f64, decimals: u8) -> String {
    format!("{:.*}", usize::from(decimals.min(MAX_DECIMALS)), value)
}

#[derive(Debug, Clone, PartialEq)]
pub struct KnobView {
    pub source: EventSource,

    // --- Readouts ---
    pub current_text: String,
    pub target_text: String,
    pub min_text: String,
    pub max_text: String,
    pub unit: String,
    pub format_pattern: heapless::String<8>,

    // --- Geometry (degrees) ---
    /// Rotation of the target indicator from the arc's vertical centre.
    pub indicator_angle: f64,
    /// Start of the current-value bar, see [`BAR_START_ANGLE`].
    pub bar_start_angle: f64,
    /// Sweep of the current-value bar (negative: clockwise).
    pub bar_length: f64,
    /// Reordered stops for the conical bar gradient.
    pub stops: Vec<GradientStop>,

    // --- State and flags ---
    pub adjusted: bool,
    pub target_text_visible: bool,
    pub extrema_visible: bool,
    pub tag_visible: bool,
    pub selected: bool,
    pub disabled: bool,
    /// Whether pointer input currently drives the target.
    pub interactive: bool,
}

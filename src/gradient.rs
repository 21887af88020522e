//! Gradient stop reordering for the knob's bar arc.
//!
//! Callers describe the bar colouring as a plain linear ramp over `0..1`.
//! The renderer paints it with a conical gradient whose `0` sits at the
//! arc's visual top, while the arc itself only covers 280° of the circle.
//! Reordering rotates the ramp so that:
//!
//! ```text
//!   logical 0.0 ──▶ 0.611   (arc start, lower left)
//!   logical 0.5 ──▶ 0.000   (top)
//!   logical 1.0 ──▶ 0.389   (arc end, lower right)
//! ```
//!
//! The two arc ends are not adjacent: `0.389..0.611` is the gap.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::color::Rgba;

/// Fraction of the full turn covered by the arc (280° / 360°).
pub const ARC_COVERAGE: f64 = 0.778;
/// Half of [`ARC_COVERAGE`]; the shift that moves logical 0.5 to the top.
pub const HALF_COVERAGE: f64 = ARC_COVERAGE * 0.5;

/// One `(offset, colour)` point on a `0..1` colour ramp.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    pub offset: f64,
    pub color: Rgba,
}

impl GradientStop {
    /// Build a stop, clamping the offset into `[0, 1]`.  A NaN offset is
    /// kept and later dropped by [`reorder`].
    pub fn new(offset: f64, color: Rgba) -> Self {
        let offset = if offset < 0.0 {
            0.0
        } else if offset > 1.0 {
            1.0
        } else {
            // Folds -0.0 into 0.0 so it collides with an explicit 0.0 stop.
            offset + 0.0
        };
        Self { offset, color }
    }
}

/// Red → yellow → green, the stock bar colouring.
pub const DEFAULT_STOPS: [GradientStop; 3] = [
    GradientStop {
        offset: 0.0,
        color: Rgba::RED,
    },
    GradientStop {
        offset: 0.5,
        color: Rgba::YELLOW,
    },
    GradientStop {
        offset: 1.0,
        color: Rgba::GREEN,
    },
];

/// A fully transparent ramp, for knobs without a coloured bar.
pub const TRANSPARENT_STOPS: [GradientStop; 2] = [
    GradientStop {
        offset: 0.0,
        color: Rgba::TRANSPARENT,
    },
    GradientStop {
        offset: 1.0,
        color: Rgba::new(255, 255, 255, 0),
    },
];

/// Knobs for [`reorder_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReorderOptions {
    /// Sort the output by shifted offset.  Off by default: the wrapped
    /// stops are emitted in logical order, so logical 0.0 (0.611) follows
    /// logical 1.0 (0.389).
    pub sort_output: bool,
}

/// Reorder `stops` with the stock fallback and default options.
pub fn reorder(stops: &[GradientStop]) -> Vec<GradientStop> {
    reorder_with(stops, &DEFAULT_STOPS, ReorderOptions::default())
}

/// Reorder `stops` onto the arc.
///
/// 1. Deduplicate by offset (the last stop given for an offset wins).
/// 2. Extend the first/last colour out to `0.0`/`1.0` when missing.
/// 3. Shift every offset by `f * 0.778 - 0.389`, wrapping negatives.
///
/// An empty input (or one made only of NaN offsets) falls back to
/// `fallback`, and to [`DEFAULT_STOPS`] if that is empty too, so the
/// output is never empty.
pub fn reorder_with(
    stops: &[GradientStop],
    fallback: &[GradientStop],
    options: ReorderOptions,
) -> Vec<GradientStop> {
    let mut ramp = normalize(stops);
    if ramp.is_empty() {
        warn!(
            "empty gradient stop set ({} entries given); using fallback ramp",
            stops.len()
        );
        ramp = normalize(fallback);
        if ramp.is_empty() {
            ramp = normalize(&DEFAULT_STOPS);
        }
    }

    if let Some(&last) = ramp.last() {
        if last.offset < 1.0 {
            ramp.push(GradientStop::new(1.0, last.color));
        }
    }
    if let Some(&first) = ramp.first() {
        if first.offset > 0.0 {
            ramp.insert(0, GradientStop::new(0.0, first.color));
        }
    }

    let mut out: Vec<GradientStop> = ramp
        .into_iter()
        .map(|s| GradientStop {
            offset: shift(s.offset),
            color: s.color,
        })
        .collect();

    if options.sort_output {
        out.sort_by(|a, b| a.offset.total_cmp(&b.offset));
    }
    out
}

/// Logical ramp offset → conical gradient offset.
#[inline]
pub fn shift(offset: f64) -> f64 {
    let shifted = offset * ARC_COVERAGE - HALF_COVERAGE;
    if shifted < 0.0 { 1.0 + shifted } else { shifted }
}

// ── Internal ──────────────────────────────────────────────────

/// Clamp, drop NaN offsets, sort ascending and deduplicate (last wins).
fn normalize(stops: &[GradientStop]) -> Vec<GradientStop> {
    let mut sorted: Vec<GradientStop> = stops
        .iter()
        .filter(|s| !s.offset.is_nan())
        .map(|s| GradientStop::new(s.offset, s.color))
        .collect();
    // Stable: among equal offsets, insertion order is preserved.
    sorted.sort_by(|a, b| a.offset.total_cmp(&b.offset));

    let mut out: Vec<GradientStop> = Vec::with_capacity(sorted.len());
    for stop in sorted {
        match out.last_mut() {
            Some(prev) if prev.offset == stop.offset => *prev = stop,
            _ => out.push(stop),
        }
    }
    out
}

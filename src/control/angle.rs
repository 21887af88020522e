//! Value ↔ arc angle mapping, including the pointer-gesture inverse.
//!
//! The arc covers [`ANGLE_RANGE`] degrees.  The indicator angle is a signed
//! offset from the arc's vertical centre, so the range minimum sits at
//! `-140` and the maximum at `+140`.
//!
//! Gesture geometry (θ measured by `atan2` in pointer coordinates, y down):
//!
//! ```text
//!            θ=270 (top, mid-range)
//!                 │
//!   θ=180 ────────┼──────── θ=0
//!                 │
//!    θ=130 (min) ╱ ╲ θ=50 (max)
//!               dead zone
//! ```
//!
//! After rotating by [`GESTURE_OFFSET`], the arc spans `[0, 280]`; the gap
//! between its two physical ends is split at [`GAP_SPLIT`]: `(280, 320]`
//! snaps to the end, `(320, 360)` snaps to the start.

/// Angular coverage of the arc, in degrees.
pub const ANGLE_RANGE: f64 = 280.0;
/// Start angle of the bar arc in renderer space (degrees, counter-clockwise).
pub const BAR_START_ANGLE: f64 = -130.0;
/// Rotation aligning a raw pointer angle with the arc start.
pub const GESTURE_OFFSET: f64 = 230.0;
/// Where the dead zone switches from "snap to end" to "snap to start".
pub const GAP_SPLIT: f64 = 320.0;
pub const FULL_TURN: f64 = 360.0;

/// Degrees of sweep per unit of value.
#[inline]
pub fn angle_step(min: f64, max: f64) -> f64 {
    ANGLE_RANGE / (max - min)
}

/// Angle derivation for one `[min, max]` range.  Rebuilt whenever a bound
/// changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleMapping {
    min: f64,
    max: f64,
    step: f64,
}

impl AngleMapping {
    pub fn new(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            step: angle_step(min, max),
        }
    }

    pub fn angle_step(&self) -> f64 {
        self.step
    }

    /// Indicator rotation for `value`: `(value - min) * step - 140`.
    ///
    /// An empty range places the indicator at the arc start.
    pub fn indicator_angle(&self, value: f64) -> f64 {
        if self.is_regular() {
            (value - self.min) * self.step - ANGLE_RANGE * 0.5
        } else {
            self.fraction(value) * ANGLE_RANGE - ANGLE_RANGE * 0.5
        }
    }

    /// Sweep of the current-value bar, measured from [`BAR_START_ANGLE`].
    /// Negative values sweep clockwise.
    pub fn arc_length(&self, current: f64) -> f64 {
        if self.is_regular() {
            self.step * (self.min - current)
        } else {
            -self.fraction(current) * ANGLE_RANGE
        }
    }

    /// Map a raw pointer angle (degrees) to a value in the range.
    pub fn value_for_theta(&self, theta: f64) -> f64 {
        let rotated = rotate_into_arc(theta);
        if self.is_regular() {
            rotated / self.step + self.min
        } else {
            let f = rotated / ANGLE_RANGE;
            f * self.max + (1.0 - f) * self.min
        }
    }

    // ── Internal ──────────────────────────────────────────────

    /// Finite, non-zero step: the direct formulas are exact enough.
    fn is_regular(&self) -> bool {
        self.step.is_finite() && self.step != 0.0
    }

    /// Position of `value` in the range as `0..=1`, overflow-safe.
    fn fraction(&self, value: f64) -> f64 {
        let span = self.max * 0.5 - self.min * 0.5;
        if span == 0.0 {
            0.0
        } else {
            (value * 0.5 - self.min * 0.5) / span
        }
    }
}

/// Rotate a raw pointer angle into arc space and resolve the dead zone.
///
/// Returns a value in `[0, ANGLE_RANGE]`.
pub fn rotate_into_arc(theta: f64) -> f64 {
    // rem_euclid can round up to exactly FULL_TURN for tiny negative inputs.
    let rotated = (theta + GESTURE_OFFSET).rem_euclid(FULL_TURN);
    if rotated > GAP_SPLIT {
        0.0
    } else if rotated <= GAP_SPLIT && rotated > ANGLE_RANGE {
        ANGLE_RANGE
    } else {
        rotated
    }
}

/// Pointer angle in degrees `[0, 360)` for an offset from the knob centre.
///
/// `dx`/`dy` are in pointer coordinates (y grows downward).  Returns `None`
/// when the pointer sits exactly on the centre or the offset is not finite.
pub fn pointer_theta(dx: f64, dy: f64) -> Option<f64> {
    let radius = dx.hypot(dy);
    if radius == 0.0 || !radius.is_finite() {
        return None;
    }
    let theta = (dy / radius).atan2(dx / radius).to_degrees();
    Some(if theta < 0.0 { theta + FULL_TURN } else { theta })
}

/// Pointer angle that lands on a given indicator angle.  Inverse of the
/// rotation applied by [`rotate_into_arc`] for angles on the arc.
pub fn theta_for_angle(indicator_angle: f64) -> f64 {
    (indicator_angle + ANGLE_RANGE * 0.5 - GESTURE_OFFSET).rem_euclid(FULL_TURN)
}

//! Proximity evaluation: is the current value close enough to the target?
//!
//! The tolerance window scales with the range:
//! `epsilon = (max - min) * factor`.  The window is an open interval, so a
//! value sitting exactly `epsilon` away from the target is still adjusting.
//! A span too wide for `f64` (e.g. `[-f64::MAX, f64::MAX]`) is halved
//! before scaling so the window stays finite.

/// Result of one proximity evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Proximity {
    pub is_adjusted: bool,
    pub epsilon: f64,
}

/// Evaluate proximity of `current` to `target` over `[min, max]`.
///
/// With a zero window (empty range or zero factor) the values must match
/// exactly.  NaN anywhere yields "not adjusted".
pub fn evaluate(current: f64, target: f64, min: f64, max: f64, factor: f64) -> Proximity {
    let epsilon = window(min, max, factor);
    let is_adjusted = if epsilon == 0.0 {
        current == target
    } else {
        current > target - epsilon && current < target + epsilon
    };
    Proximity {
        is_adjusted,
        epsilon,
    }
}

fn window(min: f64, max: f64, factor: f64) -> f64 {
    let span = max - min;
    if span.is_infinite() && min.is_finite() && max.is_finite() {
        (max * 0.5 - min * 0.5) * factor * 2.0
    } else {
        span * factor
    }
}

//! Bounded value model: min, max, current and target.
//!
//! ```text
//!   -f64::MAX ──── min ──── current/target ──── max ──── f64::MAX
//! ```
//!
//! Every setter clamps silently.  Moving a bound re-clamps the dependent
//! values only when they fall outside the new range, and reports which of
//! them moved so the engine can emit their events.
//!
//! Clamping deliberately avoids `f64::clamp`: that panics on NaN bounds,
//! while here NaN is an ordinary (if degenerate) input that every
//! comparison rejects, so it is stored verbatim.

use log::warn;

pub const DEFAULT_MIN: f64 = 0.0;
pub const DEFAULT_MAX: f64 = 100.0;

/// `value < min ? min : (value > max ? max : value)` with IEEE754 semantics.
#[inline]
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// True when [`clamp`] would change `value`.  Always false for NaN.
#[inline]
pub fn needs_clamping(value: f64, min: f64, max: f64) -> bool {
    value < min || value > max
}

/// Plain copy of the model, handed to the stateless evaluators.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeSnapshot {
    pub min: f64,
    pub max: f64,
    pub current: f64,
    pub target: f64,
}

/// Dependent values that a bound change pushed back into range.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Reclamp {
    /// New current value, if it had to move.
    pub current: Option<f64>,
    /// New target value, if it had to move.
    pub target: Option<f64>,
}

impl Reclamp {
    pub fn is_empty(&self) -> bool {
        self.current.is_none() && self.target.is_none()
    }

    /// Combine two cascades, keeping the latest value of each field.
    fn merge(self, later: Reclamp) -> Reclamp {
        Reclamp {
            current: later.current.or(self.current),
            target: later.target.or(self.target),
        }
    }
}

/// The range model.  Owned exclusively by one engine.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeModel {
    min: f64,
    max: f64,
    current: f64,
    target: f64,
}

impl Default for RangeModel {
    fn default() -> Self {
        Self::new()
    }
}

impl RangeModel {
    pub fn new() -> Self {
        Self {
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
            current: DEFAULT_MIN,
            target: DEFAULT_MIN,
        }
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn current(&self) -> f64 {
        self.current
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn snapshot(&self) -> RangeSnapshot {
        RangeSnapshot {
            min: self.min,
            max: self.max,
            current: self.current,
            target: self.target,
        }
    }

    // ── Value setters ─────────────────────────────────────────

    /// Store `value` clamped into `[min, max]`.  Returns the stored value.
    pub fn set_current(&mut self, value: f64) -> f64 {
        if value.is_nan() {
            warn!("current value set to NaN; stored verbatim");
        }
        self.current = clamp(value, self.min, self.max);
        self.current
    }

    /// Store `value` clamped into `[min, max]`.  Returns the stored value.
    pub fn set_target(&mut self, value: f64) -> f64 {
        if value.is_nan() {
            warn!("target value set to NaN; stored verbatim");
        }
        self.target = clamp(value, self.min, self.max);
        self.target
    }

    // ── Bound setters ─────────────────────────────────────────

    /// Set the lower bound, clamped into `[-f64::MAX, max]`.
    pub fn set_min(&mut self, value: f64) -> Reclamp {
        if value.is_nan() {
            warn!("range minimum set to NaN; stored verbatim");
        }
        self.min = clamp(value, -f64::MAX, self.max);
        self.reclamp_dependents()
    }

    /// Set the upper bound, clamped into `[min, f64::MAX]`.
    pub fn set_max(&mut self, value: f64) -> Reclamp {
        if value.is_nan() {
            warn!("range maximum set to NaN; stored verbatim");
        }
        self.max = clamp(value, self.min, f64::MAX);
        self.reclamp_dependents()
    }

    /// Set both bounds in the order that lands them exactly when
    /// `min <= max`: the upper bound goes first when the new minimum lies
    /// above the present maximum.
    pub fn set_range(&mut self, min: f64, max: f64) -> Reclamp {
        if min > self.max {
            let first = self.set_max(max);
            first.merge(self.set_min(min))
        } else {
            let first = self.set_min(min);
            first.merge(self.set_max(max))
        }
    }

    // ── Internal ──────────────────────────────────────────────

    fn reclamp_dependents(&mut self) -> Reclamp {
        let mut moved = Reclamp::default();
        if needs_clamping(self.current, self.min, self.max) {
            moved.current = Some(self.set_current(self.current));
        }
        if needs_clamping(self.target, self.min, self.max) {
            moved.target = Some(self.set_target(self.target));
        }
        moved
    }
}

//! Knob configuration
//!
//! Every field is optional: an absent value leaves the engine default in
//! place.  The engine applies a config in a fixed order so that later
//! fields are clamped against earlier ones:
//!
//! ```text
//!   range (min/max) ─▶ decimals/proximity ─▶ current ─▶ target ─▶ stops ─▶ flags
//! ```
//!
//! Configs can be loaded from JSON text via [`KnobConfig::from_json`].

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::gradient::GradientStop;

/// Digits after the decimal point when none are configured.
pub const DEFAULT_DECIMALS: u8 = 2;
/// Upper bound for `decimals`; larger requests are clamped.
pub const MAX_DECIMALS: u8 = 6;
/// Proximity factor of the [`ProximityProfile::Fine`] profile.
pub const DEFAULT_PROXIMITY_FACTOR: f64 = 0.001;
/// Proximity factor of the [`ProximityProfile::Coarse`] profile.
pub const COARSE_PROXIMITY_FACTOR: f64 = 0.01;

/// How wide the "adjusted" window is, as a fraction of the range span.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub enum ProximityProfile {
    /// 0.1 % of the span.
    #[default]
    Fine,
    /// 1 % of the span.
    Coarse,
    /// Explicit factor.  Must lie in `(0, 1)` to pass validation.
    Custom(f64),
}

impl ProximityProfile {
    pub fn factor(self) -> f64 {
        match self {
            Self::Fine => DEFAULT_PROXIMITY_FACTOR,
            Self::Coarse => COARSE_PROXIMITY_FACTOR,
            Self::Custom(f) => f,
        }
    }
}

/// Typed replacement for a property bag of knob settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KnobConfig {
    // --- Identity ---
    /// Human-readable name carried in every event's source.
    pub label: Option<String>,

    // --- Range and values ---
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub current: Option<f64>,
    pub target: Option<f64>,

    // --- Presentation ---
    /// Digits after the decimal point (clamped to `0..=6`).
    pub decimals: Option<u8>,
    pub proximity: Option<ProximityProfile>,
    /// Bar colouring as a logical `0..1` ramp.
    pub gradient_stops: Option<Vec<GradientStop>>,
    /// Ramp used when `gradient_stops` ends up empty.
    pub fallback_stops: Option<Vec<GradientStop>>,
    /// Sort the reordered stops by offset.
    pub sort_reordered_stops: Option<bool>,
    /// Unit label shown next to the readouts.
    pub unit: Option<String>,

    // --- Flags ---
    pub extrema_visible: Option<bool>,
    pub target_value_always_visible: Option<bool>,
    pub tag_visible: Option<bool>,
    pub selected: Option<bool>,
    pub disabled: Option<bool>,
    pub drag_disabled: Option<bool>,

    // --- Lifecycle ---
    /// Start in `Initializing` and queue mutations until `mark_ready`.
    pub deferred_init: Option<bool>,
}

impl KnobConfig {
    /// Parse a config from JSON text and validate it.
    pub fn from_json(text: &str) -> anyhow::Result<Self> {
        let config: Self = serde_json::from_str(text).context("parsing knob config JSON")?;
        config.validate().context("validating knob config")?;
        Ok(config)
    }

    /// Reject configs that cannot describe a knob.
    ///
    /// Only the loader rejects: engine setters clamp whatever they get.
    pub fn validate(&self) -> Result<()> {
        let finite = |v: Option<f64>| v.is_none_or(f64::is_finite);
        if !finite(self.min) || !finite(self.max) {
            return Err(Error::Config("range bounds must be finite"));
        }
        if let (Some(min), Some(max)) = (self.min, self.max) {
            if min > max {
                return Err(Error::Config("min above max"));
            }
        }
        if let Some(profile) = self.proximity {
            let f = profile.factor();
            if !(f > 0.0 && f < 1.0) {
                return Err(Error::Config("proximity factor must lie in (0, 1)"));
            }
        }
        Ok(())
    }

    /// Effective proximity factor.
    pub fn proximity_factor(&self) -> f64 {
        self.proximity.unwrap_or_default().factor()
    }

    /// Effective decimals, clamped.
    pub fn decimals(&self) -> u8 {
        self.decimals.unwrap_or(DEFAULT_DECIMALS).min(MAX_DECIMALS)
    }
}

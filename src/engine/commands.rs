//! Inbound commands to the knob engine.
//!
//! Every public setter on [`KnobEngine`](super::service::KnobEngine) is a
//! thin wrapper that submits one of these.  Observers post them through
//! their [`Mailbox`](super::ports::Mailbox) to change the knob from inside
//! an event handler.

use crate::config::ProximityProfile;
use crate::gradient::GradientStop;

/// Mutations and inputs the engine understands.
#[derive(Debug, Clone, PartialEq)]
pub enum KnobCommand {
    // ── Range and values ──────────────────────────────────────
    SetMin(f64),
    SetMax(f64),
    SetRange { min: f64, max: f64 },
    SetCurrent(f64),
    SetTarget(f64),

    /// Set the target and commit it: fires `TargetSet` after the usual
    /// proximity event.  Produced by accepted text entry.
    CommitTarget(f64),

    // ── Presentation ──────────────────────────────────────────
    SetDecimals(u8),
    SetProximity(ProximityProfile),
    SetGradientStops(Vec<GradientStop>),
    SetFallbackStops(Vec<GradientStop>),
    SetSortReorderedStops(bool),
    SetUnit(String),

    // ── Flags ─────────────────────────────────────────────────
    SetExtremaVisible(bool),
    SetTargetValueAlwaysVisible(bool),
    SetTagVisible(bool),
    SetSelected(bool),
    SetDisabled(bool),
    SetDragDisabled(bool),

    // ── Pointer gesture ───────────────────────────────────────
    /// Raw pointer angle in degrees, as produced by `atan2`.
    PointerAngle(f64),
    /// Pointer offset from the knob centre (y grows downward).
    PointerPosition { dx: f64, dy: f64 },
    /// Pointer released.
    GestureEnd,
}


//! Outbound knob events.
//!
//! The [`KnobEngine`](super::service::KnobEngine) fans these out
//! synchronously to every matching subscriber.  `Adjusting`/`Adjusted`
//! carry the current value; `TargetSet` carries the committed target.

use core::fmt;
use core::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

static NEXT_KNOB_ID: AtomicU32 = AtomicU32::new(1);

/// Process-unique identity of one engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KnobId(u32);

impl KnobId {
    /// Allocate the next id.  Ids are never reused within a process.
    pub fn next() -> Self {
        Self(NEXT_KNOB_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for KnobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "knob#{}", self.0)
    }
}

/// Who emitted an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventSource {
    pub id: KnobId,
    pub label: Option<Arc<str>>,
}

impl fmt::Display for EventSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.label {
            Some(label) => write!(f, "{}({})", self.id, label),
            None => write!(f, "{}", self.id),
        }
    }
}

/// Discriminant used to filter subscriptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KnobEventKind {
    Adjusting,
    Adjusted,
    TargetSet,
}

/// Semantic events emitted by the engine.
#[derive(Debug, Clone, PartialEq)]
pub enum KnobEvent {
    /// The current value is outside the target's proximity window.
    Adjusting { source: EventSource, current: f64 },

    /// The current value is within the target's proximity window.
    Adjusted { source: EventSource, current: f64 },

    /// The user committed a target (gesture release or text entry).
    TargetSet { source: EventSource, target: f64 },
}

impl KnobEvent {
    pub fn kind(&self) -> KnobEventKind {
        match self {
            Self::Adjusting { .. } => KnobEventKind::Adjusting,
            Self::Adjusted { .. } => KnobEventKind::Adjusted,
            Self::TargetSet { .. } => KnobEventKind::TargetSet,
        }
    }

    pub fn source(&self) -> &EventSource {
        match self {
            Self::Adjusting { source, .. }
            | Self::Adjusted { source, .. }
            | Self::TargetSet { source, .. } => source,
        }
    }

    /// The carried value: current for proximity events, target for `TargetSet`.
    pub fn value(&self) -> f64 {
        match self {
            Self::Adjusting { current, .. } | Self::Adjusted { current, .. } => *current,
            Self::TargetSet { target, .. } => *target,
        }
    }
}

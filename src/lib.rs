//! Value/state engine for bounded rotary knob controls.
//!
//! A knob maps a `[min, max]` range onto a 280° arc, tracks a *current*
//! value and a separately settable *target*, and reports whether the
//! current value has reached the target.  This crate is the engine only;
//! drawing is left to a renderer reading [`engine::KnobView`].
//!
//! ```text
//!   control::range ─▶ control::proximity ─▶ engine::service ─▶ observers
//!                     control::angle ───────┘      │
//!                     gradient ─────────────────────┘
//! ```

#![deny(unused_must_use)]

pub mod adapters;
pub mod color;
pub mod config;
pub mod control;
pub mod engine;
pub mod error;
pub mod gradient;

pub use color::Rgba;
pub use config::{KnobConfig, ProximityProfile};
pub use engine::{KnobCommand, KnobEngine, KnobEvent, KnobEventKind, KnobObserver, Mailbox};
pub use error::{Error, Result};
pub use gradient::{GradientStop, ReorderOptions};

//! Knob engine: orchestration around the control kernel.
//!
//! The [`service::KnobEngine`] applies [`commands::KnobCommand`]s, keeps
//! the derived state current and emits [`events::KnobEvent`]s to the
//! observers registered through the port traits in [`ports`].  Nothing in
//! here touches a renderer; the renderer reads [`view::KnobView`].

pub mod commands;
pub mod events;
pub mod gesture;
pub mod lifecycle;
pub mod ports;
pub mod queue;
pub mod service;
pub mod view;

pub use commands::KnobCommand;
pub use events::{EventSource, KnobEvent, KnobEventKind, KnobId};
pub use lifecycle::Lifecycle;
pub use ports::{KnobObserver, Mailbox, SubscriptionId};
pub use service::KnobEngine;
pub use view::KnobView;

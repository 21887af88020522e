//! Observer port and the per-engine subscriber registry.
//!
//! ```text
//!   KnobEngine ──▶ Subscribers ──▶ KnobObserver (adapter / closure)
//!        ▲                              │
//!        └────────── Mailbox ◀──────────┘
//! ```
//!
//! Observers never get a handle on the engine.  To react to an event with
//! a mutation they post a [`KnobCommand`] into the [`Mailbox`]; the engine
//! appends it to its processing queue and applies it once the mutation in
//! flight has finished.

use log::trace;

use super::commands::KnobCommand;
use super::events::{KnobEvent, KnobEventKind};

// ───────────────────────────────────────────────────────────────
// Observer port
// ───────────────────────────────────────────────────────────────

/// Receives every event a subscription matches.
pub trait KnobObserver {
    fn on_event(&mut self, event: &KnobEvent, mailbox: &mut Mailbox);
}

impl<F> KnobObserver for F
where
    F: FnMut(&KnobEvent, &mut Mailbox),
{
    fn on_event(&mut self, event: &KnobEvent, mailbox: &mut Mailbox) {
        self(event, mailbox);
    }
}

// ───────────────────────────────────────────────────────────────
// Mailbox
// ───────────────────────────────────────────────────────────────

/// Deferred requests posted by observers during dispatch.
#[derive(Debug, Default)]
pub struct Mailbox {
    commands: Vec<KnobCommand>,
    cancelled: Vec<SubscriptionId>,
}

impl Mailbox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a command for after the current mutation.
    pub fn post(&mut self, command: KnobCommand) {
        self.commands.push(command);
    }

    /// Remove a subscription once the current dispatch completes.
    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.cancelled.push(id);
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty() && self.cancelled.is_empty()
    }

    pub(crate) fn take_commands(&mut self) -> std::vec::Drain<'_, KnobCommand> {
        self.commands.drain(..)
    }

    pub(crate) fn take_cancelled(&mut self) -> std::vec::Drain<'_, SubscriptionId> {
        self.cancelled.drain(..)
    }
}

// ───────────────────────────────────────────────────────────────
// Subscriber registry
// ───────────────────────────────────────────────────────────────

/// Handle returned by a subscription; pass it back to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u32);

struct Subscription {
    id: SubscriptionId,
    filter: Option<KnobEventKind>,
    observer: Box<dyn KnobObserver>,
}

/// Ordered subscriber list.  Dispatch follows subscription order.
#[derive(Default)]
pub struct Subscribers {
    next_id: u32,
    entries: Vec<Subscription>,
}

impl Subscribers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `observer`, optionally restricted to one event kind.
    pub fn add(
        &mut self,
        filter: Option<KnobEventKind>,
        observer: Box<dyn KnobObserver>,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.entries.push(Subscription {
            id,
            filter,
            observer,
        });
        id
    }

    /// Returns `true` if the subscription existed.
    pub fn remove(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|s| s.id != id);
        self.entries.len() != before
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Deliver `event` to every matching observer.  Returns how many saw it.
    pub fn dispatch(&mut self, event: &KnobEvent, mailbox: &mut Mailbox) -> usize {
        let kind = event.kind();
        let mut delivered = 0;
        for sub in &mut self.entries {
            if sub.filter.is_none_or(|k| k == kind) {
                sub.observer.on_event(event, mailbox);
                delivered += 1;
            }
        }
        trace!("{:?} from {} delivered to {}", kind, event.source(), delivered);
        delivered
    }
}

impl core::fmt::Debug for Subscribers {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Subscribers")
            .field("len", &self.len())
            .finish()
    }
}

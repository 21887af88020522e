//! FIFO of pending engine commands.
//!
//! Holds commands submitted before the engine is ready, and commands
//! posted by observers while a mutation is being processed.
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │ setters      │────▶│              │     │              │
//! │ (Init phase) │     │ PendingQueue │────▶│ drain loop   │
//! │ Mailbox      │────▶│   (FIFO)     │     │ (one at once)│
//! └──────────────┘     └──────────────┘     └──────────────┘
//! ```
//!
//! Unbounded: nothing is ever dropped or coalesced.

use std::collections::VecDeque;

use super::commands::KnobCommand;

#[derive(Debug, Default)]
pub struct PendingQueue {
    items: VecDeque<KnobCommand>,
}

impl PendingQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: KnobCommand) {
        self.items.push_back(command);
    }

    /// Next command in arrival order.
    pub fn pop(&mut self) -> Option<KnobCommand> {
        self.items.pop_front()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Extend<KnobCommand> for PendingQueue {
    fn extend<I: IntoIterator<Item = KnobCommand>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

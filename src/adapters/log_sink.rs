//! Log-based observer adapter.
//!
//! Implements [`KnobObserver`] by writing every knob event to the `log`
//! facade.  Whatever logger the host installs decides where the lines go.

use log::{Level, log};

use crate::engine::events::KnobEvent;
use crate::engine::ports::{KnobObserver, Mailbox};

/// Adapter that logs every [`KnobEvent`] in a `KIND | key=value` format.
#[derive(Debug, Clone, Copy)]
pub struct LogObserver {
    level: Level,
}

impl Default for LogObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl LogObserver {
    /// Log at `info`.
    pub fn new() -> Self {
        Self { level: Level::Info }
    }

    pub fn with_level(level: Level) -> Self {
        Self { level }
    }

    /// The line logged for `event`.
    pub fn line(event: &KnobEvent) -> String {
        match event {
            KnobEvent::Adjusting { source, current } => {
                format!("ADJUSTING | source={} | current={}", source, current)
            }
            KnobEvent::Adjusted { source, current } => {
                format!("ADJUSTED | source={} | current={}", source, current)
            }
            KnobEvent::TargetSet { source, target } => {
                format!("TARGET | source={} | target={}", source, target)
            }
        }
    }
}

impl KnobObserver for LogObserver {
    fn on_event(&mut self, event: &KnobEvent, _mailbox: &mut Mailbox) {
        log!(self.level, "{}", Self::line(event));
    }
}

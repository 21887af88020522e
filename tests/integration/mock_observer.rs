//! Recording observer for integration tests.
//!
//! Keeps every event it sees in a shared log so tests can assert on the
//! full event history after driving an engine.

use std::cell::RefCell;
use std::rc::Rc;

use knobs::engine::{KnobEngine, KnobEvent, KnobEventKind, KnobObserver, Mailbox};

// ── RecordingObserver ─────────────────────────────────────────

pub struct RecordingObserver {
    log: Rc<RefCell<Vec<KnobEvent>>>,
}

impl KnobObserver for RecordingObserver {
    fn on_event(&mut self, event: &KnobEvent, _mailbox: &mut Mailbox) {
        self.log.borrow_mut().push(event.clone());
    }
}

// ── EventLog ──────────────────────────────────────────────────

/// Read side of a [`RecordingObserver`].
#[derive(Clone)]
pub struct EventLog {
    log: Rc<RefCell<Vec<KnobEvent>>>,
}

impl EventLog {
    /// Subscribe a recorder to every event of `engine`.
    pub fn attach(engine: &mut KnobEngine) -> Self {
        let (observer, log) = Self::recorder();
        engine.subscribe(observer);
        log
    }

    /// Subscribe a recorder to one event kind of `engine`.
    pub fn attach_kind(engine: &mut KnobEngine, kind: KnobEventKind) -> Self {
        let (observer, log) = Self::recorder();
        engine.subscribe_kind(kind, observer);
        log
    }

    pub fn recorder() -> (RecordingObserver, Self) {
        let log = Rc::new(RefCell::new(Vec::new()));
        (
            RecordingObserver {
                log: Rc::clone(&log),
            },
            Self { log },
        )
    }

    pub fn events(&self) -> Vec<KnobEvent> {
        self.log.borrow().clone()
    }

    pub fn kinds(&self) -> Vec<KnobEventKind> {
        self.log.borrow().iter().map(KnobEvent::kind).collect()
    }

    pub fn values(&self) -> Vec<f64> {
        self.log.borrow().iter().map(KnobEvent::value).collect()
    }

    pub fn len(&self) -> usize {
        self.log.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.log.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.log.borrow_mut().clear();
    }
}

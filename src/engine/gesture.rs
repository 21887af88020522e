//! Pointer gesture tracking.
//!
//! | Input             | Knob interactive        | Knob disabled / drag-disabled |
//! |-------------------|-------------------------|-------------------------------|
//! | pointer sample    | drives the target       | ignored (warned once)         |
//! | release           | commits (`TargetSet`)   | ignored                       |
//!
//! A gesture starts with its first pointer sample; there is no separate
//! "press" input.  Disabling the knob mid-gesture voids it.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GestureState {
    Idle,
    Dragging { samples: u32 },
    /// Pointer input arrived while gated; swallowed until release.
    Blocked,
}

/// What the engine should do with one pointer sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleOutcome {
    /// First sample of a new gesture.
    Started,
    /// Further sample of the running gesture.
    Continued,
    /// Gated.  `first` is set for the first swallowed sample of a gesture.
    Blocked { first: bool },
}

impl SampleOutcome {
    pub fn accepted(self) -> bool {
        !matches!(self, Self::Blocked { .. })
    }
}

#[derive(Debug, Clone)]
pub struct GestureTracker {
    state: GestureState,
}

impl Default for GestureTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl GestureTracker {
    pub fn new() -> Self {
        Self {
            state: GestureState::Idle,
        }
    }

    /// Classify a pointer sample.  `gated` is true while the knob ignores
    /// pointer input.
    pub fn sample(&mut self, gated: bool) -> SampleOutcome {
        if gated {
            let first = self.state != GestureState::Blocked;
            self.state = GestureState::Blocked;
            return SampleOutcome::Blocked { first };
        }
        match self.state {
            GestureState::Idle => {
                self.state = GestureState::Dragging { samples: 1 };
                SampleOutcome::Started
            }
            GestureState::Dragging { samples } => {
                self.state = GestureState::Dragging {
                    samples: samples.saturating_add(1),
                };
                SampleOutcome::Continued
            }
            GestureState::Blocked => SampleOutcome::Blocked { first: false },
        }
    }

    /// Pointer released.  Returns the sample count of a gesture that
    /// should commit, `None` if there is nothing to commit.
    pub fn release(&mut self) -> Option<u32> {
        let state = core::mem::replace(&mut self.state, GestureState::Idle);
        match state {
            GestureState::Dragging { samples } => Some(samples),
            GestureState::Idle | GestureState::Blocked => None,
        }
    }

    /// Void a running gesture; later samples are swallowed until release.
    pub fn cancel(&mut self) {
        if self.is_dragging() {
            self.state = GestureState::Blocked;
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, GestureState::Dragging { .. })
    }
}

//! Two-phase engine lifecycle.
//!
//! ```text
//!   Initializing ──mark_ready()──▶ Ready
//! ```
//!
//! While `Initializing`, submitted commands are queued rather than
//! applied.  There is no way back.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lifecycle {
    #[default]
    Initializing,
    Ready,
}

impl Lifecycle {
    pub fn is_ready(self) -> bool {
        self == Self::Ready
    }
}

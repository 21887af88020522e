//! Integration test driver for the `tests/integration/` submodules.
//!
//! Each `mod` below maps to a file that drives a [`knobs::KnobEngine`]
//! through one subsystem while a recording observer captures every event.

mod deferred_queue_tests;
mod gesture_tests;
mod mock_observer;

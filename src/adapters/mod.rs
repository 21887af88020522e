//! Adapters: concrete implementations of the engine's port traits.
//!
//! | Adapter    | Implements     | Connects to        |
//! |------------|----------------|--------------------|
//! | `log_sink` | KnobObserver   | `log` facade       |

pub mod log_sink;

pub use log_sink::LogObserver;

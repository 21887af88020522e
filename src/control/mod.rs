//! Control kernel: pure value logic, zero I/O.
//!
//! The range model plus the two stateless evaluators the engine runs on
//! every mutation: proximity (adjusting vs adjusted) and angle mapping
//! (indicator placement and the gesture inverse).

pub mod angle;
pub mod proximity;
pub mod range;

pub use angle::{ANGLE_RANGE, AngleMapping};
pub use proximity::{Proximity, evaluate};
pub use range::{RangeModel, RangeSnapshot, Reclamp};

//! Unified error types for the knob engine.
//!
//! Out-of-range numbers are never errors: every setter clamps silently.
//! The variants below cover the only inputs that cannot be corrected into
//! something displayable: text that is not a number, colour strings that
//! are not colours, and structurally broken configuration.
//! All variants are `Copy` so they can be returned from hot paths without
//! allocation.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level error
// ---------------------------------------------------------------------------

/// Every fallible operation in the crate funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A colour string could not be parsed.
    InvalidColor(ColorError),
    /// Text submitted as a target value is not a number.
    InvalidNumber,
    /// Configuration is invalid.  The message names the field and why.
    Config(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidColor(e) => write!(f, "color: {e}"),
            Self::InvalidNumber => write!(f, "not a number"),
            Self::Config(msg) => write!(f, "config: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

// ---------------------------------------------------------------------------
// Colour errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorError {
    /// Expected 6 or 8 hex digits after the optional `#`.
    BadLength,
    /// A channel contained a non-hex character.
    BadDigit,
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadLength => write!(f, "expected 6 or 8 hex digits"),
            Self::BadDigit => write!(f, "invalid hex digit"),
        }
    }
}

impl From<ColorError> for Error {
    fn from(e: ColorError) -> Self {
        Self::InvalidColor(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Crate-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;

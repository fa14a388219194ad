//! Errors surfaced by the strict numbering API
//!
//! The default API never fails: unknown style symbols degrade to decimal and
//! out-of-range levels are corrected. These errors only come from the strict
//! entry points (`LevelStyle::from_str`, `Sequencer::try_new_item`, and
//! `SessionConfig::resolve` with `strict` enabled).

use thiserror::Error;

/// Errors produced when numbering input is rejected instead of corrected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumberingError {
    /// A level outside `1..=max`
    #[error("invalid level {level}: expected 1..={max}")]
    InvalidLevel { level: usize, max: usize },

    /// A style string whose first character is not a known style symbol
    #[error("unknown numbering style '{style}' (expected one of 1, A, a, I, i)")]
    UnknownStyle { style: String },
}

pub type Result<T> = std::result::Result<T, NumberingError>;

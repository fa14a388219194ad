//! Level style: a numeral style plus the tail written after it
//!
//! Styles are written as a single string whose first character selects the
//! numeral family and whose remainder is the tail:
//!
//! ```text
//! "1."   → Decimal,    tail "."
//! "a)"   → LowerAlpha, tail ")"
//! "I"    → UpperRoman, tail "." (bare symbol keeps the default tail)
//! "A -"  → UpperAlpha, tail " -"
//! ```
//!
//! The string is parsed once when the session is configured, so the sequencer
//! never re-reads it per label.

use super::error::NumberingError;
use super::numerals::NumeralStyle;
use std::fmt;
use std::str::FromStr;

/// Tail used when a style string carries none
pub const DEFAULT_TAIL: &str = ".";

/// Numbering style of one level
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelStyle {
    pub style: NumeralStyle,
    pub tail: String,
}

impl LevelStyle {
    pub fn new(style: NumeralStyle, tail: impl Into<String>) -> Self {
        Self {
            style,
            tail: tail.into(),
        }
    }

    /// Parse a style string, falling back to decimal for unknown symbols
    ///
    /// The tail is kept even when the symbol is unknown, so `"x)"` becomes
    /// decimal with a `)` tail. A blank string is the default style.
    pub fn parse_lenient(text: &str) -> Self {
        let (symbol, tail) = split_style(text);
        let style = symbol
            .and_then(NumeralStyle::from_symbol)
            .unwrap_or_default();
        Self::new(style, tail)
    }

    /// Render a sequence number without the tail
    pub fn numeral(&self, n: u32) -> String {
        self.style.format(n)
    }

    /// Render a sequence number followed by the tail
    pub fn label(&self, n: u32) -> String {
        format!("{}{}", self.numeral(n), self.tail)
    }
}

impl Default for LevelStyle {
    fn default() -> Self {
        Self::new(NumeralStyle::Decimal, DEFAULT_TAIL)
    }
}

impl FromStr for LevelStyle {
    type Err = NumberingError;

    /// Strict parse: the first character must be a known style symbol
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let (symbol, tail) = split_style(text);
        let style = symbol
            .and_then(NumeralStyle::from_symbol)
            .ok_or_else(|| NumberingError::UnknownStyle {
                style: text.to_string(),
            })?;
        Ok(Self::new(style, tail))
    }
}

impl fmt::Display for LevelStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.style.symbol(), self.tail)
    }
}

/// Split a style string into its symbol and tail
fn split_style(text: &str) -> (Option<char>, &str) {
    let mut chars = text.chars();
    match chars.next() {
        None => (None, DEFAULT_TAIL),
        Some(symbol) => {
            let tail = chars.as_str();
            if tail.is_empty() {
                (Some(symbol), DEFAULT_TAIL)
            } else {
                (Some(symbol), tail)
            }
        }
    }
}

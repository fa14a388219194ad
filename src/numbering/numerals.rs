//! Numeral styles and conversions
//!
//! A level's counter is rendered in one of five numeral families:
//!
//! ```text
//! 1   → Decimal       1, 2, 3, ...
//! A   → UpperAlpha    A, B, ..., Z, AA, AB, ...
//! a   → LowerAlpha    a, b, ..., z, aa, ab, ...
//! I   → UpperRoman    I, II, III, IV, ...
//! i   → LowerRoman    i, ii, iii, iv, ...
//! ```
//!
//! Alphabetic numbering is bijective base-26 (spreadsheet-column style): there is
//! no zero digit, so 26 is `Z` and 27 is `AA`.

use std::fmt;

/// Numeral family used to render a counter value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NumeralStyle {
    /// Decimal: `1`, `2`, `3`
    #[default]
    Decimal,
    /// Uppercase letters: `A`, `B`, `C`
    UpperAlpha,
    /// Lowercase letters: `a`, `b`, `c`
    LowerAlpha,
    /// Uppercase roman numerals: `I`, `II`, `III`
    UpperRoman,
    /// Lowercase roman numerals: `i`, `ii`, `iii`
    LowerRoman,
}

/// Subtractive roman notation, largest value first
const ROMAN_TABLE: [(&str, u32); 13] = [
    ("M", 1000),
    ("CM", 900),
    ("D", 500),
    ("CD", 400),
    ("C", 100),
    ("XC", 90),
    ("L", 50),
    ("XL", 40),
    ("X", 10),
    ("IX", 9),
    ("V", 5),
    ("IV", 4),
    ("I", 1),
];

impl NumeralStyle {
    /// All styles, in symbol order
    pub const ALL: [NumeralStyle; 5] = [
        NumeralStyle::Decimal,
        NumeralStyle::UpperAlpha,
        NumeralStyle::LowerAlpha,
        NumeralStyle::UpperRoman,
        NumeralStyle::LowerRoman,
    ];

    /// Look up the style selected by a style symbol (`1`, `A`, `a`, `I`, `i`)
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '1' => Some(NumeralStyle::Decimal),
            'A' => Some(NumeralStyle::UpperAlpha),
            'a' => Some(NumeralStyle::LowerAlpha),
            'I' => Some(NumeralStyle::UpperRoman),
            'i' => Some(NumeralStyle::LowerRoman),
            _ => None,
        }
    }

    /// The symbol that selects this style
    pub fn symbol(self) -> char {
        match self {
            NumeralStyle::Decimal => '1',
            NumeralStyle::UpperAlpha => 'A',
            NumeralStyle::LowerAlpha => 'a',
            NumeralStyle::UpperRoman => 'I',
            NumeralStyle::LowerRoman => 'i',
        }
    }

    /// Render a sequence number in this style
    pub fn format(self, n: u32) -> String {
        match self {
            NumeralStyle::Decimal => n.to_string(),
            NumeralStyle::UpperAlpha => int_to_char(n, true),
            NumeralStyle::LowerAlpha => int_to_char(n, false),
            NumeralStyle::UpperRoman => int_to_roman(n),
            NumeralStyle::LowerRoman => int_to_roman(n).to_lowercase(),
        }
    }
}

impl fmt::Display for NumeralStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumeralStyle::Decimal => write!(f, "Decimal"),
            NumeralStyle::UpperAlpha => write!(f, "UpperAlpha"),
            NumeralStyle::LowerAlpha => write!(f, "LowerAlpha"),
            NumeralStyle::UpperRoman => write!(f, "UpperRoman"),
            NumeralStyle::LowerRoman => write!(f, "LowerRoman"),
        }
    }
}

/// Convert a sequence number to letters (1 → A, 26 → Z, 27 → AA, 52 → AZ, 703 → AAA)
///
/// Zero has no bijective representation and yields an empty string.
pub fn int_to_char(n: u32, uppercase: bool) -> String {
    let base = if uppercase { b'A' } else { b'a' };
    let mut letters = Vec::new();
    let mut remaining = n;

    while remaining > 0 {
        // shift to a zero-based digit so that multiples of 26 map to Z
        let digit = (remaining - 1) % 26;
        letters.push(base + digit as u8);
        remaining = (remaining - 1) / 26;
    }

    letters.iter().rev().map(|&b| b as char).collect()
}

/// Convert a sequence number to uppercase roman numerals
///
/// Zero yields an empty string. There is no upper bound; large values repeat `M`.
pub fn int_to_roman(n: u32) -> String {
    let mut result = String::new();
    let mut remaining = n;

    for (numeral, value) in ROMAN_TABLE {
        let matches = remaining / value;
        result.push_str(&numeral.repeat(matches as usize));
        remaining %= value;
    }

    result
}

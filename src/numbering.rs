//! Numbering core: numeral conversion, level styles, options and the sequencer

pub mod error;
pub mod numerals;
pub mod options;
pub mod outline;
pub mod sequencer;
pub mod style;

pub use error::NumberingError;
pub use numerals::{int_to_char, int_to_roman, NumeralStyle};
pub use options::{Indentation, NumberingOptions, SessionConfig, DEFAULT_INDENTATION, LEVEL_COUNT};
pub use outline::{number_outline, OutlineItem, OutlineLine};
pub use sequencer::{Sequencer, MAX_DEPTH};
pub use style::{LevelStyle, DEFAULT_TAIL};

//! # nested-numbering
//!
//! Hierarchical outline numbering for document and report generators.
//!
//! A [`Sequencer`](numbering::Sequencer) tracks one counter per nesting level and
//! turns `new_item(level)` calls, made in document order, into labels such as
//! `A.`, `    1.`, `        a.` or, in full mode, `A.1.a.`.
//!
//! ```text
//! let mut seq = Sequencer::new(NumberingOptions::outline());
//! seq.new_item(1);   // "A."
//! seq.new_item(2);   // "    1."
//! seq.new_item(1);   // "B."
//! ```
//!
//! Options can be built in code or layered from configuration files with
//! [`config::Loader`].

pub mod config;
pub mod numbering;

pub use numbering::{
    int_to_char, int_to_roman, LevelStyle, NumberingError, NumberingOptions, NumeralStyle,
    Sequencer, SessionConfig,
};

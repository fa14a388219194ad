//! Session options
//!
//! [`NumberingOptions`] is the resolved configuration a [`Sequencer`](super::Sequencer)
//! runs with: exactly [`LEVEL_COUNT`] level styles plus layout knobs.
//!
//! [`SessionConfig`] is the partial, deserializable form supplied by callers and
//! config files. Every field is optional; resolving it merges the supplied fields
//! over fresh defaults, never over a previous session's values.

use super::error::Result;
use super::style::LevelStyle;
use serde::Deserialize;
use std::borrow::Cow;

/// Number of styled levels
pub const LEVEL_COUNT: usize = 5;

/// Indentation repeated once per level below the first
pub const DEFAULT_INDENTATION: &str = "    ";

/// Resolved options for one numbering session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberingOptions {
    /// Styles for levels 1 through 5
    pub levels: [LevelStyle; LEVEL_COUNT],
    /// Indentation unit, `None` when disabled. Ignored in full mode.
    pub indentation: Option<String>,
    /// Render the dotted path of every ancestor (`A.1.b.`)
    pub full: bool,
    /// Written before every label
    pub prefix: String,
    /// Written after every label
    pub suffix: String,
    /// Reject malformed style strings and out-of-range levels
    pub strict: bool,
}

impl NumberingOptions {
    /// The classic outline scheme: `A.`, `1.`, `a.`, `i.`, `1)`
    pub fn outline() -> Self {
        Self::default()
            .with_level(1, "A.")
            .with_level(2, "1.")
            .with_level(3, "a.")
            .with_level(4, "i.")
            .with_level(5, "1)")
    }

    /// Set the style of a level from a style string (lenient parse)
    ///
    /// Levels outside `1..=5` are ignored.
    pub fn with_level(mut self, level: usize, style: &str) -> Self {
        if let Some(slot) = level.checked_sub(1).and_then(|i| self.levels.get_mut(i)) {
            *slot = LevelStyle::parse_lenient(style);
        }
        self
    }

    pub fn with_indentation(mut self, indentation: impl Into<String>) -> Self {
        self.indentation = Some(indentation.into());
        self
    }

    pub fn without_indentation(mut self) -> Self {
        self.indentation = None;
        self
    }

    pub fn with_full(mut self, full: bool) -> Self {
        self.full = full;
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Style of a level; levels without a configured style are decimal with a `.` tail
    pub fn style(&self, level: usize) -> Cow<'_, LevelStyle> {
        level
            .checked_sub(1)
            .and_then(|i| self.levels.get(i))
            .map(Cow::Borrowed)
            .unwrap_or_else(|| Cow::Owned(LevelStyle::default()))
    }
}

impl Default for NumberingOptions {
    fn default() -> Self {
        Self {
            levels: std::array::from_fn(|_| LevelStyle::default()),
            indentation: Some(DEFAULT_INDENTATION.to_string()),
            full: false,
            prefix: String::new(),
            suffix: String::new(),
            strict: false,
        }
    }
}

/// Indentation setting as written in configuration: a string, or `false` to disable
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Indentation {
    Text(String),
    /// `true` keeps the default indentation, `false` disables it
    Enabled(bool),
}

/// Partial session configuration
///
/// Keys: `level1`..`level5` (or `0`..`4`), `indentation`, `full`, `prefix`,
/// `suffix`, `strict`. Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    #[serde(alias = "0")]
    pub level1: Option<String>,
    #[serde(alias = "1")]
    pub level2: Option<String>,
    #[serde(alias = "2")]
    pub level3: Option<String>,
    #[serde(alias = "3")]
    pub level4: Option<String>,
    #[serde(alias = "4")]
    pub level5: Option<String>,
    pub indentation: Option<Indentation>,
    pub full: Option<bool>,
    pub prefix: Option<String>,
    pub suffix: Option<String>,
    pub strict: Option<bool>,
}

impl SessionConfig {
    /// Level style strings in level order
    pub fn levels(&self) -> [Option<&str>; LEVEL_COUNT] {
        [
            self.level1.as_deref(),
            self.level2.as_deref(),
            self.level3.as_deref(),
            self.level4.as_deref(),
            self.level5.as_deref(),
        ]
    }

    /// Merge the supplied fields over default options
    ///
    /// With `strict` set, style strings are parsed strictly and a malformed one
    /// is an error. Otherwise unknown symbols fall back to decimal.
    pub fn resolve(&self) -> Result<NumberingOptions> {
        let mut options = NumberingOptions::default();
        options.strict = self.strict.unwrap_or(false);

        for (slot, text) in options.levels.iter_mut().zip(self.levels()) {
            let Some(text) = text else { continue };
            *slot = if options.strict {
                text.parse()?
            } else {
                LevelStyle::parse_lenient(text)
            };
        }

        match &self.indentation {
            Some(Indentation::Text(text)) => options.indentation = Some(text.clone()),
            Some(Indentation::Enabled(false)) => options.indentation = None,
            Some(Indentation::Enabled(true)) | None => {}
        }
        if let Some(full) = self.full {
            options.full = full;
        }
        if let Some(prefix) = &self.prefix {
            options.prefix = prefix.clone();
        }
        if let Some(suffix) = &self.suffix {
            options.suffix = suffix.clone();
        }

        Ok(options)
    }
}

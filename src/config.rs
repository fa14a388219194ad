//! Configuration loading for numbering sessions.
//!
//! `defaults/nestnum.default.toml` is embedded into the crate so that the
//! documented defaults and runtime behavior stay in sync. Callers layer their
//! own files and key overrides on top via [`Loader`]; [`Loader::build`] merges
//! the layers and resolves them into [`NumberingOptions`] in one step.

use crate::numbering::{NumberingError, NumberingOptions, SessionConfig};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use std::path::Path;
use thiserror::Error;

const DEFAULT_TOML: &str = include_str!("../defaults/nestnum.default.toml");

/// Errors from loading session options
#[derive(Debug, Error)]
pub enum LoadError {
    /// A layer is missing, unreadable, or has keys of the wrong type
    #[error("{0}")]
    Config(#[from] ConfigError),

    /// The merged keys describe an invalid session (strict mode only)
    #[error("{0}")]
    Numbering(#[from] NumberingError),
}

/// Builds [`NumberingOptions`] from the embedded defaults plus any layered sources.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Loader holding only `nestnum.default.toml`.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a TOML session file; `build` fails if it is missing.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer a TOML session file that may not exist, e.g. a per-user file.
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer configuration text, e.g. a document's front matter.
    pub fn with_str(mut self, text: &str) -> Self {
        self.builder = self
            .builder
            .add_source(File::from_str(text, FileFormat::Toml));
        self
    }

    /// Override one key such as `level2` or `indentation`; applied after every file.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Merge every layer into the raw session keys. Unknown keys are ignored.
    pub fn session(self) -> Result<SessionConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }

    /// Merge every layer and resolve the result into session options.
    ///
    /// With `strict = true` in any layer, malformed style strings are an error
    /// instead of falling back to decimal.
    pub fn build(self) -> Result<NumberingOptions, LoadError> {
        let session = self.session()?;
        let options = session.resolve()?;
        Ok(options)
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// The embedded defaults alone.
pub fn load_defaults() -> Result<NumberingOptions, LoadError> {
    Loader::new().build()
}

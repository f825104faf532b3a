//! Shared configuration loader for the odtgen toolchain.
//!
//! `defaults/odtgen.default.toml` is embedded into every binary so that docs
//! and runtime behavior stay in sync. Applications layer user-specific files
//! on top of those defaults via [`Loader`] before deserializing into
//! [`OdtgenConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use odtgen_babel::external::{HighlightOptions, IncludeOptions};
use serde::Deserialize;
use std::path::{Path, PathBuf};

const DEFAULT_TOML: &str = include_str!("../defaults/odtgen.default.toml");

/// Name of the optional per-project configuration file.
pub const PROJECT_FILE: &str = "odtgen.toml";

/// Top-level configuration consumed by odtgen applications.
#[derive(Debug, Clone, Deserialize)]
pub struct OdtgenConfig {
    pub latex: LatexConfig,
    pub markdown: MarkdownConfig,
    pub inspect: InspectConfig,
}

/// Where `\sourcecodefile{..}` content comes from.
#[derive(Debug, Clone, Deserialize)]
pub struct LatexConfig {
    pub include_dir: PathBuf,
    pub include_suffix: String,
}

impl From<&LatexConfig> for IncludeOptions {
    fn from(config: &LatexConfig) -> Self {
        IncludeOptions {
            directory: config.include_dir.clone(),
            suffix: config.include_suffix.clone(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct MarkdownConfig {
    pub highlight: HighlightConfig,
}

/// External highlighter for fenced code blocks.
#[derive(Debug, Clone, Deserialize)]
pub struct HighlightConfig {
    pub enabled: bool,
    pub program: String,
    pub args: Vec<String>,
}

impl From<&HighlightConfig> for HighlightOptions {
    fn from(config: &HighlightConfig) -> Self {
        HighlightOptions {
            program: config.program.clone(),
            args: config.args.clone(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct InspectConfig {
    pub dump_ast: bool,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<OdtgenConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<OdtgenConfig, ConfigError> {
    Loader::new().build()
}

//! Shared configuration loader for the quire toolchain.
//!
//! `defaults/quire.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`QuireConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use quire_compiler::options::PagedOptions;
use quire_compiler::schema::paged::{Alignment, TextSize};
use quire_compiler::{CompileOptions, SchemaId};
use serde::Deserialize;
use std::path::Path;

pub use config::ConfigError;

const DEFAULT_TOML: &str = include_str!("../defaults/quire.default.toml");

/// Top-level configuration consumed by quire applications.
#[derive(Debug, Clone, Deserialize)]
pub struct QuireConfig {
    pub compile: CompileConfig,
    pub output: OutputConfig,
}

/// Compiler-facing settings.
#[derive(Debug, Clone, Deserialize)]
pub struct CompileConfig {
    pub default_schema: String,
    pub paged: PagedConfig,
}

/// Wire presentation knobs of the paged schema.
#[derive(Debug, Clone, Deserialize)]
pub struct PagedConfig {
    pub alignment: Alignment,
    pub text_size: TextSize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub pretty: bool,
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    Json,
    Yaml,
}

impl QuireConfig {
    /// The options the compiler should run with.
    pub fn compile_options(&self) -> CompileOptions {
        CompileOptions {
            paged: PagedOptions {
                alignment: self.compile.paged.alignment,
                text_size: self.compile.paged.text_size,
            },
        }
    }
}

/// Layers `quire.toml` files and command-line choices over the embedded defaults.
///
/// Later layers win. [`Loader::build`] rejects a `default_schema` that names no built-in
/// schema, so a typo in a config file fails at startup rather than on the first compile.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a user `quire.toml`. Building fails if the file is missing.
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.layer_toml(path.as_ref(), true)
    }

    /// Layer a `quire.toml` that may not exist, such as one in the working directory.
    pub fn with_optional_file(self, path: impl AsRef<Path>) -> Self {
        self.layer_toml(path.as_ref(), false)
    }

    /// Select the schema compiles and decompiles run against (the CLI's `--to` / `--from`).
    pub fn with_schema_override(self, schema: &str) -> Result<Self, ConfigError> {
        let schema = parse_schema(schema)?;
        self.set_override("compile.default_schema", schema.as_str())
    }

    /// Set one dotted key, e.g. `compile.paged.alignment`.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<QuireConfig, ConfigError> {
        let config: QuireConfig = self.builder.build()?.try_deserialize()?;
        parse_schema(&config.compile.default_schema)?;
        Ok(config)
    }

    fn layer_toml(mut self, path: &Path, required: bool) -> Self {
        let source = File::from(path).format(FileFormat::Toml).required(required);
        self.builder = self.builder.add_source(source);
        self
    }
}

fn parse_schema(name: &str) -> Result<SchemaId, ConfigError> {
    name.parse::<SchemaId>()
        .map_err(|err| ConfigError::Message(err.to_string()))
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<QuireConfig, ConfigError> {
    Loader::new().build()
}

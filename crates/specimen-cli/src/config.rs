//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. `SPECIMEN_*` environment variables, nested keys joined by `__`
//!    (`SPECIMEN_SYNTHESIS__MAX_DEPTH=3`, `SPECIMEN_RENDER__POLICY__WRITE_NULLS=false`)
//! 3. Config file (`--config`, else the platform config directory)
//! 4. Built-in defaults (always present)
//!
//! ```toml
//! [synthesis]
//! max_depth = 5
//!
//! [render]
//! pretty = true
//!
//! [render.policy]
//! write_nulls            = true
//! null_sequence_as_empty = true
//! null_string_as_empty   = true
//! null_bool_as_false     = true
//! null_number_as_zero    = true
//!
//! [output]
//! no_color = false
//! ```

use std::path::PathBuf;

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use specimen_adapters::SerializationPolicy;
use specimen_core::application::DEFAULT_MAX_DEPTH;
use tracing::debug;

/// Prefix of configuration environment variables.
pub const ENV_PREFIX: &str = "SPECIMEN";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub synthesis: SynthesisConfig,
    pub render: RenderConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SynthesisConfig {
    /// Depth at which synthesis stops and yields `null`.
    pub max_depth: usize,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub pretty: bool,
    pub policy: SerializationPolicy,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            pretty: true,
            policy: SerializationPolicy::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration from defaults, the config file and the environment.
    ///
    /// An explicit `config_file` must exist; the default location is optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.clone(), true),
            None => (Self::config_path(), false),
        };
        debug!(path = %path.display(), required, "loading configuration");

        let defaults =
            Config::try_from(&Self::default()).context("failed to seed default configuration")?;

        let cfg = Config::builder()
            .add_source(defaults)
            .add_source(File::from(path.as_path()).format(FileFormat::Toml).required(required))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("failed to read configuration from '{}'", path.display()))?;

        let config: Self = cfg
            .try_deserialize()
            .context("configuration has invalid values")?;
        config.validate()?;
        Ok(config)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.specimen.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "specimen", "specimen")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".specimen.toml"))
    }

    /// Look up a dotted key (`render.policy.write_nulls`).
    pub fn get(&self, key: &str) -> Option<serde_json::Value> {
        let mut value = serde_json::to_value(self).ok()?;
        for part in key.split('.') {
            value = value.get_mut(part)?.take();
        }
        Some(value)
    }

    /// Every leaf key with its value, sorted by key.
    pub fn entries(&self) -> Vec<(String, serde_json::Value)> {
        fn walk(
            prefix: &str,
            value: serde_json::Value,
            out: &mut Vec<(String, serde_json::Value)>,
        ) {
            match value {
                serde_json::Value::Object(map) => {
                    for (key, child) in map {
                        let path = if prefix.is_empty() {
                            key
                        } else {
                            format!("{prefix}.{key}")
                        };
                        walk(&path, child, out);
                    }
                }
                leaf => out.push((prefix.to_string(), leaf)),
            }
        }

        let mut out = Vec::new();
        if let Ok(value) = serde_json::to_value(self) {
            walk("", value, &mut out);
        }
        out
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.synthesis.max_depth == 0 {
            anyhow::bail!("synthesis.max_depth must be at least 1");
        }
        Ok(())
    }
}

//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Config file: `--config <path>` if given, else `$XDG_CONFIG_HOME/bstseq/bstseq.toml`
//! 3. Environment variables: `BSTSEQ_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;

/// Characters that separate values in sequence text by default.
pub const DEFAULT_SEPARATORS: &str = ", \t\r\n;";

/// Unified configuration for bstseq.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Render the tree behind a valid sequence (default: false)
    pub render_tree: bool,
    /// Print the violation for an invalid sequence (default: false)
    pub explain: bool,
    /// Characters splitting sequence text into values
    pub separators: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            render_tree: false,
            explain: false,
            separators: DEFAULT_SEPARATORS.to_string(),
        }
    }
}

/// Raw settings for intermediate parsing (None → not specified, keep base).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub render_tree: Option<bool>,
    pub explain: Option<bool>,
    pub separators: Option<String>,
}

/// Get the XDG config directory for bstseq.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "bstseq").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("bstseq.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Overlay wins where it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            render_tree: overlay.render_tree.unwrap_or(self.render_tree),
            explain: overlay.explain.unwrap_or(self.explain),
            separators: overlay
                .separators
                .clone()
                .unwrap_or_else(|| self.separators.clone()),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_file` - Explicit config file; must exist when given.
    ///   Without it the global file is used if present.
    pub fn load(config_file: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        match config_file {
            Some(path) => {
                if !path.exists() {
                    return Err(ApplicationError::Config {
                        message: format!("config file not found: {}", path.display()),
                    });
                }
                current = current.merge_with(&load_raw_settings(path)?);
            }
            None => {
                if let Some(global_path) = global_config_path() {
                    if global_path.exists() {
                        current = current.merge_with(&load_raw_settings(&global_path)?);
                    }
                }
            }
        }

        current = Self::apply_env_overrides(current)?;
        current.validate()?;
        Ok(current)
    }

    /// Apply BSTSEQ_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("BSTSEQ")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_bool("render_tree") {
            settings.render_tree = val;
        }
        if let Ok(val) = config.get_bool("explain") {
            settings.explain = val;
        }
        if let Ok(val) = config.get_string("separators") {
            settings.separators = val;
        }

        Ok(settings)
    }

    fn validate(&self) -> Result<(), ApplicationError> {
        if self.separators.is_empty() {
            return Err(ApplicationError::Config {
                message: "separators must not be empty".to_string(),
            });
        }
        if self.separators.contains(|c: char| c == '-' || c.is_ascii_digit()) {
            return Err(ApplicationError::Config {
                message: format!(
                    "separators must not contain digits or '-': {:?}",
                    self.separators
                ),
            });
        }
        Ok(())
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# bstseq configuration
#
# Locations (by precedence, lowest to highest):
#   File: ~/.config/bstseq/bstseq.toml (or --config <path>)
#   Env:  BSTSEQ_* environment variables (explicit overrides)

# Render the tree behind a valid sequence
# render_tree = false

# Print why an invalid sequence was rejected
# explain = false

# Characters splitting sequence text into values
# separators = ", \t\r\n;"
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

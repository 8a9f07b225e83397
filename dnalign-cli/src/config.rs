//! Configuration handling for the dnalign CLI
//!
//! Supports loading configuration from dnalign.toml files with CLI argument overrides.

use anyhow::{Context, Result};
use dnalign_core::{AlignerConfig, ErrorPolicy, ScoringScheme, DEFAULT_MAX_CANDIDATES};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::CliError;

/// File name looked up in the working directory when no --config is given
pub const DEFAULT_CONFIG_FILE: &str = "dnalign.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub align: AlignConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Default number of threads to use
    #[serde(default = "default_threads")]
    pub threads: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlignConfig {
    /// Maximum candidates evaluated per line (0 disables the limit)
    #[serde(default = "default_max_candidates")]
    pub max_candidates: u64,

    /// Score candidates and lines in parallel
    #[serde(default = "default_true")]
    pub parallel: bool,

    /// What to do with a failing line ("halt" or "skip")
    #[serde(default)]
    pub on_error: ErrorPolicy,
}

// Default value functions
fn default_threads() -> usize { num_cpus::get() }
fn default_max_candidates() -> u64 { DEFAULT_MAX_CANDIDATES }
fn default_true() -> bool { true }

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            threads: default_threads(),
        }
    }
}

impl Default for AlignConfig {
    fn default() -> Self {
        Self {
            max_candidates: default_max_candidates(),
            parallel: true,
            on_error: ErrorPolicy::default(),
        }
    }
}

impl AlignConfig {
    /// Aligner parameters with the fixed scoring scheme
    pub fn aligner_config(&self) -> AlignerConfig {
        AlignerConfig {
            scheme: ScoringScheme::default(),
            max_candidates: (self.max_candidates > 0).then_some(self.max_candidates),
            parallel: self.parallel,
        }
    }
}

impl Config {
    /// Load configuration from file or use defaults
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let config = match config_path {
            Some(path) => {
                log::info!("Loading configuration from: {}", path.display());
                Self::load_from_file(path)?
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    log::info!("Loading configuration from: {}", DEFAULT_CONFIG_FILE);
                    Self::load_from_file(&default_path)?
                } else {
                    log::debug!("Using default configuration");
                    Self::default()
                }
            }
        };

        Ok(config)
    }

    /// Load configuration from a specific TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CliError::io(format!(
                "Failed to read configuration file {}: {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            CliError::config(format!(
                "Failed to parse configuration file {}: {}",
                path.display(),
                e
            ))
        })?;

        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write configuration file: {}", path.display()))?;

        Ok(())
    }

    /// Generate example configuration file content
    pub fn example_toml() -> Result<String> {
        toml::to_string_pretty(&Self::default()).context("Failed to serialize default configuration")
    }
}

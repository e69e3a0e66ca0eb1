//! Configuration loading from TOML.
//!
//! Reads `config.toml` and deserializes into strongly-typed structs.
//! Every field carries a default so the binary also runs without a
//! config file present.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Top-level application configuration.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub analyzer: AnalyzerConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

/// Tunables for the acquisition analyzer.
#[derive(Debug, Deserialize, Clone)]
pub struct AnalyzerConfig {
    /// Per-trial probability of the target drop, as a fraction in (0, 1).
    #[serde(default = "default_drop_rate")]
    pub drop_rate: f64,
    /// Average cost of one unboxing trial, used for budget-to-trials
    /// conversion. Default matches the established product constant.
    #[serde(default = "default_average_trial_cost")]
    pub average_trial_cost: f64,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            drop_rate: default_drop_rate(),
            average_trial_cost: default_average_trial_cost(),
        }
    }
}

fn default_drop_rate() -> f64 {
    0.0026 // 0.26% per trial
}

fn default_average_trial_cost() -> f64 {
    2.5
}

/// Recipe catalog source. When `path` is unset the built-in catalog is used.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct CatalogConfig {
    #[serde(default)]
    pub path: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_server_enabled")]
    pub enabled: bool,
    #[serde(default = "default_server_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            enabled: default_server_enabled(),
            port: default_server_port(),
        }
    }
}

fn default_server_enabled() -> bool {
    true
}

fn default_server_port() -> u16 {
    8080
}

impl AppConfig {
    /// Load configuration from a TOML file. A missing file yields defaults;
    /// a present-but-malformed file is an error.
    pub fn load(path: &str) -> Result<Self> {
        if !Path::new(path).exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {path}"))?;
        let config: AppConfig = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {path}"))?;
        Ok(config)
    }
}

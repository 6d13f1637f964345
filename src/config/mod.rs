//! Configuration module
//!
//! Handles loading and managing configuration.

mod env;
mod profile;

pub use env::EnvConfig;
pub use profile::profile_from_config;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration file locations (in order of precedence)
const CONFIG_LOCATIONS: &[&str] = &[
    "./parallel-cucumber.yaml",
    "./parallel-cucumber.yml",
    "./.parallel-cucumber.yaml",
];

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AppConfig {
    /// Default number of worker processes
    #[serde(default = "default_processes")]
    pub processes: usize,

    /// Default options passed through to cucumber
    #[serde(default)]
    pub test_options: Option<String>,

    /// Default grouping strategy ("size" or "steps")
    #[serde(default = "default_group_by")]
    pub group_by: String,
}

fn default_processes() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(2)
}

fn default_group_by() -> String {
    "size".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            processes: default_processes(),
            test_options: None,
            group_by: default_group_by(),
        }
    }
}

impl AppConfig {
    /// Find a configuration file in the standard locations
    pub fn find() -> Option<PathBuf> {
        CONFIG_LOCATIONS
            .iter()
            .copied()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Load configuration from the default location, falling back to
    /// defaults when no file exists
    pub fn load_default() -> Result<Self> {
        match Self::find() {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = if is_yaml_file(path) {
            serde_yaml::from_str(&content)
                .with_context(|| format!("Failed to parse YAML config: {}", path.display()))?
        } else {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))?
        };

        Ok(config)
    }
}

fn is_yaml_file(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext == "yaml" || ext == "yml")
        .unwrap_or(false)
}

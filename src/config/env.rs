//! Environment variable configuration
//!
//! Provides environment variable overrides for configuration.

use std::env;

/// Environment variable prefix
const ENV_PREFIX: &str = "PARALLEL_CUCUMBER";

/// Environment configuration from environment variables
#[derive(Clone, Debug, Default)]
pub struct EnvConfig {
    /// Worker count from PARALLEL_CUCUMBER_PROCESSES
    pub processes: Option<usize>,
    /// Passthrough options from PARALLEL_CUCUMBER_TEST_OPTIONS
    pub test_options: Option<String>,
    /// Grouping strategy from PARALLEL_CUCUMBER_GROUP_BY
    pub group_by: Option<String>,
    /// Verbose flag from PARALLEL_CUCUMBER_VERBOSE
    pub verbose: Option<bool>,
    /// Log level from PARALLEL_CUCUMBER_LOG_LEVEL
    pub log_level: Option<String>,
}

impl EnvConfig {
    /// Load configuration from environment variables
    pub fn load() -> Self {
        Self {
            processes: get_env_parse("PROCESSES"),
            test_options: get_env("TEST_OPTIONS"),
            group_by: get_env("GROUP_BY"),
            verbose: get_env_bool("VERBOSE"),
            log_level: get_env("LOG_LEVEL"),
        }
    }
}

fn get_env(name: &str) -> Option<String> {
    env::var(format!("{ENV_PREFIX}_{name}")).ok()
}

fn get_env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
    get_env(name).and_then(|value| value.parse().ok())
}

fn get_env_bool(name: &str) -> Option<bool> {
    get_env(name).map(|value| matches!(value.to_lowercase().as_str(), "1" | "true" | "yes"))
}

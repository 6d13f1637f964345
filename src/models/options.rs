//! Invocation options
//!
//! The options bag threaded through command building and worker execution.

#![allow(dead_code)]

/// Options for one run invocation.
///
/// Immutable per call: helpers that need to adjust the options (for example
/// to force colorized child output) return an augmented copy and never
/// mutate the caller's value.
#[derive(Clone, Debug, Default)]
pub struct RunOptions {
    /// Free-form options string passed through to the cucumber executable
    pub test_options: Option<String>,
    /// Extra environment variables for each worker's child process
    pub env: Vec<(String, String)>,
}

impl RunOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the passthrough test options
    pub fn with_test_options(mut self, options: impl Into<String>) -> Self {
        self.test_options = Some(options.into());
        self
    }

    /// Add an environment variable for worker child processes
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.push((key.into(), value.into()));
        self
    }

    /// Whether an environment variable is already present
    pub fn has_env(&self, key: &str) -> bool {
        self.env.iter().any(|(k, _)| k == key)
    }
}

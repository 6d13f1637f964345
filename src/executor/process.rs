//! Process-backed executor
//!
//! Spawns each worker's command line through the shell and captures its
//! standard output.

use std::process::Stdio;

use tokio::process::Command;
use tracing::debug;

use super::{worker_env_number, Executor, RunnerError};
use crate::models::{RunOptions, WorkerOutput};

/// Runs worker command lines through `/bin/sh -c`.
///
/// Stdout is captured for classification; stderr passes straight through
/// to the invoking terminal. Timeouts and interruption are the caller's
/// concern, not this executor's.
pub struct ProcessExecutor;

impl ProcessExecutor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ProcessExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl Executor for ProcessExecutor {
    async fn run(
        &self,
        command: &str,
        index: usize,
        total: usize,
        options: &RunOptions,
    ) -> Result<WorkerOutput, RunnerError> {
        debug!("worker {}: {}", index + 1, command);

        let mut child = Command::new("/bin/sh");
        child
            .arg("-c")
            .arg(command)
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit());

        for (key, value) in &options.env {
            child.env(key, value);
        }
        child.env("TEST_ENV_NUMBER", worker_env_number(index));
        child.env("PARALLEL_TEST_GROUPS", total.to_string());

        let output = child
            .output()
            .await
            .map_err(|source| RunnerError::Spawn { index, source })?;

        let lines = String::from_utf8_lossy(&output.stdout)
            .lines()
            .map(str::to_string)
            .collect();

        Ok(WorkerOutput::new(
            index,
            lines,
            output.status.code(),
            output.status.success(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_captures_stdout_lines() {
        let executor = ProcessExecutor::new();
        let output = executor
            .run("echo one; echo two", 0, 1, &RunOptions::new())
            .await
            .unwrap();

        assert!(output.success);
        assert_eq!(output.lines, vec!["one", "two"]);
    }

    #[tokio::test]
    async fn test_nonzero_exit_is_captured_not_an_error() {
        let executor = ProcessExecutor::new();
        let output = executor
            .run("echo partial; exit 3", 0, 1, &RunOptions::new())
            .await
            .unwrap();

        assert!(!output.success);
        assert_eq!(output.exit_code, Some(3));
        assert_eq!(output.lines, vec!["partial"]);
    }

    #[tokio::test]
    async fn test_worker_numbering_env() {
        let executor = ProcessExecutor::new();

        let first = executor
            .run("printf '%s' \"$TEST_ENV_NUMBER\"; echo", 0, 2, &RunOptions::new())
            .await
            .unwrap();
        assert_eq!(first.lines, vec![""]);

        let second = executor
            .run(
                "echo \"$TEST_ENV_NUMBER $PARALLEL_TEST_GROUPS\"",
                1,
                2,
                &RunOptions::new(),
            )
            .await
            .unwrap();
        assert_eq!(second.lines, vec!["2 2"]);
    }

    #[tokio::test]
    async fn test_extra_env_reaches_the_child() {
        let executor = ProcessExecutor::new();
        let options = RunOptions::new().with_env("AUTOTEST", "1");

        let output = executor
            .run("echo \"$AUTOTEST\"", 0, 1, &options)
            .await
            .unwrap();
        assert_eq!(output.lines, vec!["1"]);
    }
}

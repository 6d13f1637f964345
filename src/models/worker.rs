//! Worker output capture
//!
//! Holds one worker's captured stdout lines and exit status.

#![allow(dead_code)]

use std::fmt;

/// Captured output of a single worker process.
#[derive(Clone, Debug)]
pub struct WorkerOutput {
    /// Zero-based worker index
    pub index: usize,
    /// Captured stdout, split into lines
    pub lines: Vec<String>,
    /// Exit code, if the process terminated normally
    pub exit_code: Option<i32>,
    /// Whether the process exited with status zero
    pub success: bool,
}

impl WorkerOutput {
    pub fn new(index: usize, lines: Vec<String>, exit_code: Option<i32>, success: bool) -> Self {
        Self {
            index,
            lines,
            exit_code,
            success,
        }
    }

    /// Output of a worker that exited cleanly
    pub fn succeeded(index: usize, lines: Vec<String>) -> Self {
        Self::new(index, lines, Some(0), true)
    }

    /// Output of a worker that exited with a failure code
    pub fn failed(index: usize, lines: Vec<String>, code: i32) -> Self {
        Self::new(index, lines, Some(code), false)
    }
}

impl fmt::Display for WorkerOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = match (self.success, self.exit_code) {
            (true, _) => "ok".to_string(),
            (false, Some(code)) => format!("exit {code}"),
            (false, None) => "killed".to_string(),
        };
        write!(
            f,
            "worker {} [{}] - {} lines",
            self.index + 1,
            status,
            self.lines.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_worker_output_status() {
        let ok = WorkerOutput::succeeded(0, vec!["1 scenario (1 passed)".to_string()]);
        assert!(ok.success);
        assert_eq!(ok.exit_code, Some(0));

        let bad = WorkerOutput::failed(1, Vec::new(), 2);
        assert!(!bad.success);
        assert_eq!(bad.exit_code, Some(2));
    }

    #[test]
    fn test_worker_output_display() {
        let killed = WorkerOutput::new(2, Vec::new(), None, false);
        assert_eq!(killed.to_string(), "worker 3 [killed] - 0 lines");
    }
}

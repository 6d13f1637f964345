//! Worker execution
//!
//! Fans one shell command per worker out to concurrent child processes and
//! collects their captured output.

mod process;

pub use process::ProcessExecutor;

use futures::future::join_all;
use thiserror::Error;

use crate::models::{RunOptions, WorkerOutput};

/// Errors surfaced by worker execution
#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("failed to spawn worker {index}: {source}")]
    Spawn {
        index: usize,
        #[source]
        source: std::io::Error,
    },
}

/// Contract for running one worker's command line.
///
/// Given the command, the worker's index and the total worker count, an
/// executor returns the captured stdout lines and exit status. A non-zero
/// exit is not an error at this layer; the pipeline aggregates whatever
/// lines were captured and surfaces the failure afterwards.
#[allow(async_fn_in_trait)]
pub trait Executor {
    async fn run(
        &self,
        command: &str,
        index: usize,
        total: usize,
        options: &RunOptions,
    ) -> Result<WorkerOutput, RunnerError>;
}

/// Conventional worker-numbering value: empty for the first worker, then
/// "2", "3", ... for the rest.
pub fn worker_env_number(index: usize) -> String {
    if index == 0 {
        String::new()
    } else {
        (index + 1).to_string()
    }
}

/// Run all workers concurrently and collect their outputs in worker order.
pub async fn run_workers<E: Executor>(
    executor: &E,
    commands: &[String],
    options: &RunOptions,
) -> Result<Vec<WorkerOutput>, RunnerError> {
    let total = commands.len();
    let futures = commands
        .iter()
        .enumerate()
        .map(|(index, command)| executor.run(command, index, total, options));

    join_all(futures).await.into_iter().collect()
}

//! Shared data types
//!
//! Defines the invocation options bag and per-worker output capture.

mod options;
mod worker;

pub use options::RunOptions;
pub use worker::WorkerOutput;

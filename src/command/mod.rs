//! Worker command construction
//!
//! Resolves the cucumber executable and composes one shell-safe command
//! line per worker.

mod builder;
mod executable;

pub use builder::{CommandBuilder, RUNTIME_LOG};
pub use executable::resolve_executable;

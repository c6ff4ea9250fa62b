//! Application runtime module.

/// Runtime event loop and background workers.
mod runtime;
/// Terminal setup and restoration utilities.
mod terminal;

pub use runtime::{run, spawn_search_worker};

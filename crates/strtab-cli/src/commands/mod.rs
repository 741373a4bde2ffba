//! CLI command implementations.

mod check;
mod common;
mod sync;

pub use check::{CheckArgs, run_check};
pub use common::ModuleArgs;
pub use sync::{SyncArgs, run_sync};

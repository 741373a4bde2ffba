//! Utility functions shared across CLI commands.

mod discovery;
pub mod ui;

pub use discovery::{
    DEFAULT_PRIMARY, LPROJ_SUFFIX, RESOURCES_DIR, TABLE_FILE, discover_module, load_catalog,
    resolve_primary,
};

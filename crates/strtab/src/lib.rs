#![doc = include_str!("../README.md")]

pub mod catalog;
pub mod diff;
pub mod error;
pub mod placeholder;
pub mod report;
pub mod sync;
pub mod table;

pub use catalog::{Catalog, LanguageState};
pub use diff::{LanguageDiff, LanguageStatus, PlaceholderMismatch, diff_catalog, issue_count};
pub use error::{CatalogError, DecodeError};
pub use placeholder::extract_placeholders;
pub use report::{Report, build_report};
pub use sync::{SyncAction, append_entries, plan_sync, render_missing_entries};
pub use table::{StringsTable, StructuralError};

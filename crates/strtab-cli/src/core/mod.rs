//! Core CLI types and error definitions.

mod errors;
mod types;

pub use errors::{
    CliError, ModuleNotFoundError, NoLanguagesError, PrimaryMissingError, PrimaryUnreadableError,
    ResourcesNotFoundError,
};
pub use types::{LanguageDir, ModuleInfo};

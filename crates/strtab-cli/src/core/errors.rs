//! CLI error types using miette for Rust-style diagnostics.
//!
//! Precondition failures (bad module path, missing Resources directory,
//! missing primary table) abort before any report is produced; everything
//! else is accumulated into the report by the engine.

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Error when the module path does not exist.
#[derive(Debug, Diagnostic, Error)]
#[error("module path does not exist: {path}")]
#[diagnostic(
    code(strtab::module_not_found),
    help("Pass the module root directory, e.g. Modules/AppNexusKit")
)]
pub struct ModuleNotFoundError {
    /// The path that was given on the command line.
    pub path: PathBuf,
}

/// Error when the module has no Resources directory.
#[derive(Debug, Diagnostic, Error)]
#[error("Resources directory not found: {path}")]
#[diagnostic(
    code(strtab::resources_not_found),
    help("Expected a Resources/ directory containing one <lang>.lproj folder per language")
)]
pub struct ResourcesNotFoundError {
    /// The Resources path that was expected.
    pub path: PathBuf,
}

/// Error when the Resources directory contains no language folders.
#[derive(Debug, Diagnostic, Error)]
#[error("no .lproj language directories found in {path}")]
#[diagnostic(
    code(strtab::no_languages),
    help("Create at least the primary language folder, e.g. Resources/en.lproj")
)]
pub struct NoLanguagesError {
    pub path: PathBuf,
}

/// Error when the primary language has no string table to diff against.
#[derive(Debug, Diagnostic, Error)]
#[error("primary language '{language}' has no string table")]
#[diagnostic(
    code(strtab::primary_missing),
    help("Every comparison needs the primary table; create {expected} or pass --primary")
)]
pub struct PrimaryMissingError {
    /// The primary language tag.
    pub language: String,
    /// Where the table was expected, for the help text.
    pub expected: String,
}

/// Error when the primary language's table cannot be decoded.
#[derive(Debug, Diagnostic, Error)]
#[error("primary language '{language}' table could not be read")]
#[diagnostic(code(strtab::primary_unreadable), help("{reason}"))]
pub struct PrimaryUnreadableError {
    pub language: String,
    pub reason: String,
}

#[derive(Debug, Diagnostic, Error)]
pub enum CliError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    ModuleNotFound(#[from] ModuleNotFoundError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    ResourcesNotFound(#[from] ResourcesNotFoundError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    NoLanguages(#[from] NoLanguagesError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    PrimaryMissing(#[from] PrimaryMissingError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    PrimaryUnreadable(#[from] PrimaryUnreadableError),

    #[error("cannot decode string table: {0}")]
    #[diagnostic(code(strtab::decode))]
    Decode(#[from] strtab::DecodeError),

    #[error("IO error: {0}")]
    #[diagnostic(code(strtab::io))]
    Io(#[from] std::io::Error),

    #[error("failed to serialize report: {0}")]
    #[diagnostic(code(strtab::report))]
    Serialize(#[from] serde_json::Error),

    #[error("{0}")]
    #[diagnostic(code(strtab::other))]
    Other(String),
}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::Other(err.to_string())
    }
}

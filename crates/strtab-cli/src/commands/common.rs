use crate::core::CliError;
use clap::Args;
use std::path::PathBuf;
use strtab::Report;

/// Arguments shared by all module-scoped commands.
#[derive(Debug, Clone, Args)]
pub struct ModuleArgs {
    /// Path to the module root (the directory containing Resources/).
    pub module_path: PathBuf,

    /// Primary language tag to compare against. Defaults to "en"; check
    /// falls back to the first discovered language when en has no table.
    #[arg(short, long)]
    pub primary: Option<String>,
}

/// Print the report as pretty JSON on stdout.
pub fn emit_report(report: &Report) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

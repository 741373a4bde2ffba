//! Check command for validating string tables against the primary language.
//!
//! Loads every discovered language into one catalog, diffs each target
//! against the primary, and prints the JSON report. Issues are
//! informational: only precondition failures exit non-zero.

use super::common::{ModuleArgs, emit_report};
use crate::core::CliError;
use crate::utils::{discover_module, load_catalog, resolve_primary, ui};
use clap::Parser;
use jiff::Timestamp;

/// Arguments for the check command.
#[derive(Debug, Parser)]
pub struct CheckArgs {
    #[command(flatten)]
    pub module: ModuleArgs,
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> Result<(), CliError> {
    let module = discover_module(&args.module.module_path)?;
    ui::print_check_header(&module.name);

    let primary = resolve_primary(&module, args.module.primary.as_deref());
    ui::print_languages(module.languages.len(), &primary);

    let catalog = load_catalog(&module, &primary)?;
    let diffs = strtab::diff_catalog(&catalog);
    let report = strtab::build_report(&module.name, &catalog, &diffs, Timestamp::now());

    if report.summary.issues_count == 0 {
        ui::print_no_issues();
    } else {
        ui::print_issues_found(report.summary.issues_count);
    }

    emit_report(&report)
}

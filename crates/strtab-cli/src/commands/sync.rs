//! Sync command for backfilling missing translations.
//!
//! Reuses the same catalog and diff the check command sees, so both paths
//! agree on what counts as missing. The append text comes from the engine;
//! this module only applies it to disk. The report reflects pre-sync state
//! plus the list of files written.

use super::common::{ModuleArgs, emit_report};
use crate::core::CliError;
use crate::utils::{DEFAULT_PRIMARY, discover_module, load_catalog, ui};
use clap::Parser;
use jiff::Timestamp;

/// Arguments for the sync command.
#[derive(Debug, Parser)]
pub struct SyncArgs {
    #[command(flatten)]
    pub module: ModuleArgs,

    /// Dry run - show what would be synced without making changes.
    #[arg(long)]
    pub dry_run: bool,
}

/// Run the sync command.
pub fn run_sync(args: SyncArgs) -> Result<(), CliError> {
    let module = discover_module(&args.module.module_path)?;
    ui::print_sync_header(&module.name);

    // Sync is strict about the primary: without its table there is nothing
    // to copy values from, regardless of what else was discovered.
    let primary = args
        .module
        .primary
        .clone()
        .unwrap_or_else(|| DEFAULT_PRIMARY.to_string());
    ui::print_languages(module.languages.len(), &primary);

    let catalog = load_catalog(&module, &primary)?;
    let diffs = strtab::diff_catalog(&catalog);
    let actions = strtab::plan_sync(&catalog, &diffs);

    let mut synced_files = Vec::new();

    for action in &actions {
        let Some(language) = module.language(&action.language) else {
            continue;
        };

        if args.dry_run {
            ui::print_would_add_keys(action.keys.len(), &action.language);
            continue;
        }

        let bytes = fs_err::read(&language.table_file)?;
        let existing = strtab::table::decode(&bytes)?;
        let updated = strtab::append_entries(&existing, &action.entries);
        fs_err::write(&language.table_file, updated)?;

        ui::print_added_keys(action.keys.len(), &action.language);
        for key in &action.keys {
            ui::print_synced_key(key);
        }
        synced_files.push(language.table_file.display().to_string());
    }

    if actions.is_empty() {
        ui::print_all_in_sync();
    }

    let report = strtab::build_report(&module.name, &catalog, &diffs, Timestamp::now())
        .with_synced_files(synced_files);
    emit_report(&report)
}

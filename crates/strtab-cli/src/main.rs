use clap::{Parser, Subcommand};
use miette::Result as MietteResult;
use strtab_cli::commands::{CheckArgs, SyncArgs, run_check, run_sync};

#[derive(Parser)]
#[command(name = "strtab")]
#[command(about = "Validate and sync .strings localization tables")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check string tables for missing keys, placeholder mismatches, and untranslated values
    Check(CheckArgs),

    /// Backfill missing keys from the primary language as tagged placeholder entries
    Sync(SyncArgs),
}

fn main() -> MietteResult<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .color(true)
                .build(),
        )
    }))
    .ok();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Check(args) => run_check(args),
        Commands::Sync(args) => run_sync(args),
    };

    result.map_err(miette::Report::new)
}

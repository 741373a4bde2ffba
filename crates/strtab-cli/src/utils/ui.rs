// CLI output formatting with consistent styling using colored.
// Status lines go to stderr so stdout stays machine-readable JSON.

use colored::Colorize as _;

const PREFIX: &str = "[strtab]";

pub fn print_check_header(module: &str) {
    eprintln!(
        "{} {} {}",
        PREFIX.cyan().bold(),
        "Checking".dimmed(),
        module.green()
    );
}

pub fn print_sync_header(module: &str) {
    eprintln!(
        "{} {} {}",
        PREFIX.cyan().bold(),
        "Syncing".dimmed(),
        module.green()
    );
}

pub fn print_languages(count: usize, primary: &str) {
    eprintln!(
        "{} {} {} ({} primary)",
        PREFIX.cyan().bold(),
        "Discovered".dimmed(),
        format!("{count} language(s)").green(),
        primary.cyan()
    );
}

pub fn print_no_issues() {
    eprintln!("{} {}", PREFIX.green().bold(), "No issues found!".green());
}

pub fn print_issues_found(count: usize) {
    eprintln!(
        "{} {}",
        PREFIX.yellow().bold(),
        format!("{count} issue(s) found").yellow()
    );
}

pub fn print_would_add_keys(count: usize, language: &str) {
    eprintln!(
        "{} {} {} key(s) to {}",
        PREFIX.yellow().bold(),
        "Would add".yellow(),
        count,
        language.cyan()
    );
}

pub fn print_added_keys(count: usize, language: &str) {
    eprintln!(
        "{} {} {} key(s) to {}",
        PREFIX.green().bold(),
        "Added".green(),
        count,
        language.cyan()
    );
}

pub fn print_synced_key(key: &str) {
    eprintln!("  {} {}", "→".dimmed(), key);
}

pub fn print_all_in_sync() {
    eprintln!(
        "{} {}",
        PREFIX.green().bold(),
        "All languages are in sync!".green()
    );
}

//! Backfill of missing keys with primary-language placeholder values.
//!
//! The engine only renders text: one append block per missing key, tagged
//! with a marker comment for human follow-up. Applying the block to the
//! on-disk file is the caller's job, and the catalog that produced the plan
//! is never mutated, so a report built from it reflects pre-sync state.

use crate::catalog::Catalog;
use crate::diff::{LanguageDiff, LanguageStatus};
use crate::table::StringsTable;

/// Marker comment preceding every backfilled entry.
pub const TRANSLATE_MARKER: &str = "TODO: Translate from English";

/// The append text for one target language.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SyncAction {
    pub language: String,
    /// Keys to be added, sorted.
    pub keys: Vec<String>,
    /// Rendered blocks, ready for [`append_entries`].
    pub entries: String,
}

/// Plan the sync for every language the diff engine found incomplete.
///
/// Languages without a readable file are skipped: sync amends existing
/// files, it never creates them. The primary language never appears in
/// `diffs` and is therefore never written.
pub fn plan_sync(catalog: &Catalog, diffs: &[LanguageDiff]) -> Vec<SyncAction> {
    diffs
        .iter()
        .filter(|diff| diff.status == LanguageStatus::Incomplete)
        .map(|diff| SyncAction {
            language: diff.language.clone(),
            keys: diff.missing.clone(),
            entries: render_missing_entries(catalog.primary_table(), &diff.missing),
        })
        .collect()
}

/// Render one tagged block per missing key, in sorted key order, using the
/// primary value verbatim (escaping is left exactly as parsed).
pub fn render_missing_entries(primary: &StringsTable, missing: &[String]) -> String {
    let blocks: Vec<String> = missing
        .iter()
        .filter_map(|key| {
            primary
                .get(key)
                .map(|value| format!("\n/* {TRANSLATE_MARKER} */\n\"{key}\" = \"{value}\";"))
        })
        .collect();
    blocks.join("\n")
}

/// Append rendered blocks after the existing content: exactly one blank line
/// after the trimmed end, and a single trailing newline.
pub fn append_entries(existing: &str, entries: &str) -> String {
    format!("{}\n{}\n", existing.trim_end(), entries)
}

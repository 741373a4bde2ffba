//! The diff engine: compares every target language against the primary.

use crate::catalog::{Catalog, LanguageState};
use crate::placeholder::extract_placeholders;
use crate::table::StringsTable;
use serde::Serialize;
use std::collections::BTreeSet;

/// Coverage status of one target language.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LanguageStatus {
    /// Every primary key is present.
    Ok,
    /// At least one primary key is missing.
    Incomplete,
    /// The language directory has no table file.
    FileMissing,
    /// The table file could not be decoded.
    Unreadable,
}

/// A key whose primary and translated values disagree on placeholders.
///
/// Both lists are stored as extracted (unsorted); the mismatch decision is
/// made on their sorted forms.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PlaceholderMismatch {
    pub key: String,
    pub primary: Vec<String>,
    pub translated: Vec<String>,
}

/// Everything the diff engine knows about one target language.
#[derive(Clone, Debug, Serialize)]
pub struct LanguageDiff {
    pub language: String,
    pub status: LanguageStatus,
    /// Keys present in this language's table.
    pub total_keys: usize,
    /// Primary keys absent from this language, sorted.
    pub missing: Vec<String>,
    /// Keys absent from the primary, sorted.
    pub extra: Vec<String>,
    /// Keys whose value is byte-identical to a non-empty primary value, sorted.
    pub untranslated: Vec<String>,
    pub placeholder_mismatches: Vec<PlaceholderMismatch>,
    /// `100 × |keys ∩ primary| / |primary|`, one decimal.
    pub completion: f64,
}

/// Diff every target language against the primary, in sorted tag order.
pub fn diff_catalog(catalog: &Catalog) -> Vec<LanguageDiff> {
    catalog
        .targets()
        .map(|(tag, state)| match state {
            LanguageState::Parsed(table) => diff_language(catalog.primary_table(), tag, table),
            LanguageState::FileMissing => {
                degenerate_diff(catalog.primary_table(), tag, LanguageStatus::FileMissing)
            },
            LanguageState::Unreadable { .. } => {
                degenerate_diff(catalog.primary_table(), tag, LanguageStatus::Unreadable)
            },
        })
        .collect()
}

/// Headline issue count: missing keys plus placeholder mismatches, across
/// all languages. Extra and untranslated keys are reported but excluded.
pub fn issue_count(diffs: &[LanguageDiff]) -> usize {
    diffs
        .iter()
        .map(|diff| diff.missing.len() + diff.placeholder_mismatches.len())
        .sum()
}

fn diff_language(primary: &StringsTable, tag: &str, table: &StringsTable) -> LanguageDiff {
    let primary_keys: BTreeSet<&str> = primary.keys().collect();
    let table_keys: BTreeSet<&str> = table.keys().collect();

    // BTreeSet operations yield sorted sequences directly
    let missing: Vec<String> = primary_keys
        .difference(&table_keys)
        .map(|key| (*key).to_string())
        .collect();
    let extra: Vec<String> = table_keys
        .difference(&primary_keys)
        .map(|key| (*key).to_string())
        .collect();

    let mut untranslated = Vec::new();
    let mut placeholder_mismatches = Vec::new();
    let mut shared = 0usize;

    for key in primary_keys.intersection(&table_keys) {
        let (Some(primary_value), Some(translated_value)) = (primary.get(key), table.get(key))
        else {
            continue;
        };
        shared += 1;

        let primary_placeholders = extract_placeholders(primary_value);
        let translated_placeholders = extract_placeholders(translated_value);
        if sorted(&primary_placeholders) != sorted(&translated_placeholders) {
            placeholder_mismatches.push(PlaceholderMismatch {
                key: (*key).to_string(),
                primary: primary_placeholders,
                translated: translated_placeholders,
            });
        }

        if translated_value == primary_value && !primary_value.trim().is_empty() {
            untranslated.push((*key).to_string());
        }
    }

    let status = if missing.is_empty() {
        LanguageStatus::Ok
    } else {
        LanguageStatus::Incomplete
    };

    LanguageDiff {
        language: tag.to_string(),
        status,
        total_keys: table.len(),
        missing,
        extra,
        untranslated,
        placeholder_mismatches,
        completion: completion_percentage(shared, primary.len()),
    }
}

/// A language with no readable table: every primary key is missing and no
/// per-key analysis is possible.
fn degenerate_diff(primary: &StringsTable, tag: &str, status: LanguageStatus) -> LanguageDiff {
    let mut missing: Vec<String> = primary.keys().map(str::to_string).collect();
    missing.sort();

    LanguageDiff {
        language: tag.to_string(),
        status,
        total_keys: 0,
        missing,
        extra: Vec::new(),
        untranslated: Vec::new(),
        placeholder_mismatches: Vec::new(),
        completion: completion_percentage(0, primary.len()),
    }
}

/// An empty primary counts as fully complete, by convention.
fn completion_percentage(shared: usize, primary_total: usize) -> f64 {
    if primary_total == 0 {
        return 100.0;
    }
    let ratio = 100.0 * shared as f64 / primary_total as f64;
    (ratio * 10.0).round() / 10.0
}

fn sorted(placeholders: &[String]) -> Vec<&str> {
    let mut out: Vec<&str> = placeholders.iter().map(String::as_str).collect();
    out.sort_unstable();
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, LanguageState};
    use std::collections::BTreeMap;

    fn catalog(
        primary: &[(&str, &str)],
        targets: &[(&str, LanguageState)],
    ) -> Catalog {
        let mut languages = BTreeMap::from([(
            "en".to_string(),
            LanguageState::Parsed(StringsTable::from_pairs(primary.iter().copied())),
        )]);
        for (tag, state) in targets {
            languages.insert((*tag).to_string(), state.clone());
        }
        Catalog::new("en", languages).unwrap()
    }

    fn parsed(pairs: &[(&str, &str)]) -> LanguageState {
        LanguageState::Parsed(StringsTable::from_pairs(pairs.iter().copied()))
    }

    #[test]
    fn test_fully_translated_table_is_clean() {
        let catalog = catalog(
            &[("a", "Hello"), ("b", "Bye %@")],
            &[("fr", parsed(&[("a", "Bonjour"), ("b", "Au revoir %@")]))],
        );

        let diffs = diff_catalog(&catalog);
        assert_eq!(diffs.len(), 1);

        let diff = &diffs[0];
        assert_eq!(diff.status, LanguageStatus::Ok);
        assert!(diff.missing.is_empty());
        assert!(diff.extra.is_empty());
        assert!(diff.untranslated.is_empty());
        assert!(diff.placeholder_mismatches.is_empty());
        assert_eq!(diff.completion, 100.0);
    }

    #[test]
    fn test_missing_is_exact_set_difference() {
        let catalog = catalog(
            &[("a", "Hello"), ("b", "Bye %@")],
            &[("fr", parsed(&[("a", "Bonjour")]))],
        );

        let diff = &diff_catalog(&catalog)[0];
        assert_eq!(diff.missing, vec!["b"]);
        assert!(diff.extra.is_empty());
        assert!(diff.untranslated.is_empty());
        assert_eq!(diff.completion, 50.0);
        assert_eq!(diff.status, LanguageStatus::Incomplete);
    }

    #[test]
    fn test_extra_keys_are_reported_sorted() {
        let catalog = catalog(
            &[("a", "Hello")],
            &[(
                "fr",
                parsed(&[("a", "Bonjour"), ("z_local", "Z"), ("b_local", "B")]),
            )],
        );

        let diff = &diff_catalog(&catalog)[0];
        assert_eq!(diff.extra, vec!["b_local", "z_local"]);
        assert_eq!(diff.status, LanguageStatus::Ok);
    }

    #[test]
    fn test_untranslated_requires_non_empty_primary() {
        let catalog = catalog(
            &[("same", "Hello"), ("blank", ""), ("spaces", "   ")],
            &[(
                "fr",
                parsed(&[("same", "Hello"), ("blank", ""), ("spaces", "   ")]),
            )],
        );

        let diff = &diff_catalog(&catalog)[0];
        assert_eq!(diff.untranslated, vec!["same"]);
    }

    #[test]
    fn test_placeholder_order_is_not_compared() {
        let catalog = catalog(
            &[("x", "%@ %d")],
            &[("fr", parsed(&[("x", "%d %@")]))],
        );

        let diff = &diff_catalog(&catalog)[0];
        assert!(diff.placeholder_mismatches.is_empty());
    }

    #[test]
    fn test_placeholder_counts_are_compared() {
        let catalog = catalog(
            &[("x", "%@ %@")],
            &[("fr", parsed(&[("x", "%@")]))],
        );

        let diff = &diff_catalog(&catalog)[0];
        assert_eq!(diff.placeholder_mismatches.len(), 1);
        assert_eq!(diff.placeholder_mismatches[0].primary, vec!["%@", "%@"]);
        assert_eq!(diff.placeholder_mismatches[0].translated, vec!["%@"]);
    }

    #[test]
    fn test_placeholder_mismatch_records_lists_as_extracted() {
        let catalog = catalog(
            &[("x", "Count: %d")],
            &[("de", parsed(&[("x", "Anzahl: %@")]))],
        );

        let diff = &diff_catalog(&catalog)[0];
        let mismatch = &diff.placeholder_mismatches[0];
        assert_eq!(mismatch.key, "x");
        assert_eq!(mismatch.primary, vec!["%d"]);
        assert_eq!(mismatch.translated, vec!["%@"]);
    }

    #[test]
    fn test_file_missing_is_degenerate() {
        let catalog = catalog(
            &[("a", "1"), ("b", "2")],
            &[("fr", LanguageState::FileMissing)],
        );

        let diff = &diff_catalog(&catalog)[0];
        assert_eq!(diff.status, LanguageStatus::FileMissing);
        assert_eq!(diff.missing, vec!["a", "b"]);
        assert_eq!(diff.total_keys, 0);
        assert_eq!(diff.completion, 0.0);
    }

    #[test]
    fn test_unreadable_is_degenerate() {
        let catalog = catalog(
            &[("a", "1")],
            &[(
                "fr",
                LanguageState::Unreadable {
                    reason: "bad bytes".to_string(),
                },
            )],
        );

        let diff = &diff_catalog(&catalog)[0];
        assert_eq!(diff.status, LanguageStatus::Unreadable);
        assert_eq!(diff.missing, vec!["a"]);
    }

    #[test]
    fn test_empty_primary_is_complete_by_convention() {
        let catalog = catalog(&[], &[("fr", parsed(&[]))]);

        let diff = &diff_catalog(&catalog)[0];
        assert_eq!(diff.completion, 100.0);
        assert_eq!(diff.status, LanguageStatus::Ok);
    }

    #[test]
    fn test_completion_rounds_to_one_decimal() {
        let catalog = catalog(
            &[("a", "1"), ("b", "2"), ("c", "3")],
            &[("fr", parsed(&[("a", "un")]))],
        );

        let diff = &diff_catalog(&catalog)[0];
        assert_eq!(diff.completion, 33.3);
    }

    #[test]
    fn test_completion_ignores_extra_keys() {
        // Extra keys must not inflate completion past the shared set
        let catalog = catalog(
            &[("a", "1"), ("b", "2")],
            &[("fr", parsed(&[("a", "un"), ("x", "X"), ("y", "Y")]))],
        );

        let diff = &diff_catalog(&catalog)[0];
        assert_eq!(diff.completion, 50.0);
    }

    #[test]
    fn test_issue_count_sums_missing_and_mismatches() {
        let catalog = catalog(
            &[("a", "%d"), ("b", "2"), ("c", "3")],
            &[
                ("de", parsed(&[("a", "%@"), ("b", "zwei"), ("c", "drei")])),
                ("fr", parsed(&[("a", "%d")])),
            ],
        );

        let diffs = diff_catalog(&catalog);
        // de: 1 mismatch; fr: 2 missing
        assert_eq!(issue_count(&diffs), 3);
    }

    #[test]
    fn test_languages_come_out_sorted() {
        let catalog = catalog(
            &[("a", "1")],
            &[
                ("zh", parsed(&[])),
                ("de", parsed(&[])),
                ("fr", parsed(&[])),
            ],
        );

        let diffs = diff_catalog(&catalog);
        let tags: Vec<&str> = diffs.iter().map(|d| d.language.as_str()).collect();
        assert_eq!(tags, vec!["de", "fr", "zh"]);
    }
}

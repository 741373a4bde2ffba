//! Assembly of diff and sync results into one serializable report.
//!
//! No business logic lives here beyond aggregation: the issue maps only
//! contain languages that actually have something to report, and the
//! headline count is the diff engine's [`issue_count`](crate::issue_count).

use crate::catalog::{Catalog, LanguageState};
use crate::diff::{self, LanguageDiff, LanguageStatus, PlaceholderMismatch};
use jiff::Timestamp;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Clone, Debug, Serialize)]
pub struct Report {
    pub summary: Summary,
    pub issues: Issues,
    /// Per-language breakdown, target languages only.
    pub languages: BTreeMap<String, LanguageSummary>,
    /// Files written by a sync run; absent in validate-only reports.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub synced_files: Option<Vec<String>>,
}

#[derive(Clone, Debug, Serialize)]
pub struct Summary {
    pub module: String,
    /// Every discovered language, primary included, sorted.
    pub languages: Vec<String>,
    pub primary_language: String,
    /// Key count of the primary table.
    pub total_keys: usize,
    /// Missing keys plus placeholder mismatches, across all languages.
    pub issues_count: usize,
    /// Injected run timestamp, RFC 3339.
    pub timestamp: String,
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct Issues {
    pub missing_keys: BTreeMap<String, Vec<String>>,
    pub extra_keys: BTreeMap<String, Vec<String>>,
    pub untranslated: BTreeMap<String, Vec<String>>,
    pub placeholder_mismatches: BTreeMap<String, Vec<PlaceholderMismatch>>,
    /// Structural and decode errors, per language.
    pub parse_errors: BTreeMap<String, Vec<String>>,
}

#[derive(Clone, Debug, Serialize)]
pub struct LanguageSummary {
    pub status: LanguageStatus,
    pub total_keys: usize,
    pub missing_count: usize,
    pub extra_count: usize,
    pub completion_percentage: f64,
}

impl Report {
    /// Record the files a sync run wrote (empty for a dry run).
    pub fn with_synced_files(mut self, files: Vec<String>) -> Self {
        self.synced_files = Some(files);
        self
    }
}

/// Build the report for one module from a catalog and its diffs.
///
/// The timestamp is supplied by the caller so the engine stays a pure
/// function of its inputs.
pub fn build_report(
    module: &str,
    catalog: &Catalog,
    diffs: &[LanguageDiff],
    timestamp: Timestamp,
) -> Report {
    let mut issues = Issues::default();
    let mut languages = BTreeMap::new();

    for diff in diffs {
        if !diff.missing.is_empty() {
            issues
                .missing_keys
                .insert(diff.language.clone(), diff.missing.clone());
        }
        if !diff.extra.is_empty() {
            issues
                .extra_keys
                .insert(diff.language.clone(), diff.extra.clone());
        }
        if !diff.untranslated.is_empty() {
            issues
                .untranslated
                .insert(diff.language.clone(), diff.untranslated.clone());
        }
        if !diff.placeholder_mismatches.is_empty() {
            issues.placeholder_mismatches.insert(
                diff.language.clone(),
                diff.placeholder_mismatches.clone(),
            );
        }

        languages.insert(
            diff.language.clone(),
            LanguageSummary {
                status: diff.status,
                total_keys: diff.total_keys,
                missing_count: diff.missing.len(),
                extra_count: diff.extra.len(),
                completion_percentage: diff.completion,
            },
        );
    }

    let primary_errors: Vec<String> = catalog
        .primary_table()
        .errors()
        .iter()
        .map(|error| error.to_string())
        .collect();
    if !primary_errors.is_empty() {
        issues
            .parse_errors
            .insert(catalog.primary_tag().to_string(), primary_errors);
    }

    for (tag, state) in catalog.targets() {
        let errors: Vec<String> = match state {
            LanguageState::Parsed(table) => {
                table.errors().iter().map(|error| error.to_string()).collect()
            },
            LanguageState::Unreadable { reason } => {
                vec![format!("Cannot read file: {reason}")]
            },
            LanguageState::FileMissing => Vec::new(),
        };
        if !errors.is_empty() {
            issues.parse_errors.insert(tag.to_string(), errors);
        }
    }

    Report {
        summary: Summary {
            module: module.to_string(),
            languages: catalog
                .language_tags()
                .into_iter()
                .map(str::to_string)
                .collect(),
            primary_language: catalog.primary_tag().to_string(),
            total_keys: catalog.primary_table().len(),
            issues_count: diff::issue_count(diffs),
            timestamp: timestamp.to_string(),
        },
        issues,
        languages,
        synced_files: None,
    }
}

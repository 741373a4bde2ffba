//! The in-memory aggregate of one primary table plus all target tables.
//!
//! Language enumeration is sorted (not directory order) so that reports and
//! sync output are reproducible across runs and platforms.

use crate::error::CatalogError;
use crate::table::StringsTable;
use std::collections::BTreeMap;

/// Parse outcome for one discovered language.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LanguageState {
    /// The table file was found and decoded.
    Parsed(StringsTable),
    /// The language directory exists but has no table file.
    FileMissing,
    /// The table file could not be decoded under either supported encoding.
    Unreadable { reason: String },
}

impl LanguageState {
    pub fn table(&self) -> Option<&StringsTable> {
        match self {
            LanguageState::Parsed(table) => Some(table),
            _ => None,
        }
    }
}

/// One designated primary table plus zero or more target languages.
///
/// Built fresh per invocation from on-disk content; never cached between
/// runs. The constructor enforces the one hard precondition: without a
/// parsed primary table there is nothing to diff against.
#[derive(Clone, Debug)]
pub struct Catalog {
    primary_tag: String,
    primary: StringsTable,
    targets: BTreeMap<String, LanguageState>,
}

impl Catalog {
    /// Assemble a catalog from every discovered language, primary included.
    ///
    /// Fails when the primary language is absent, has no table file, or its
    /// file could not be decoded.
    pub fn new(
        primary_tag: impl Into<String>,
        mut languages: BTreeMap<String, LanguageState>,
    ) -> Result<Self, CatalogError> {
        let primary_tag = primary_tag.into();

        match languages.remove(&primary_tag) {
            Some(LanguageState::Parsed(primary)) => Ok(Self {
                primary_tag,
                primary,
                targets: languages,
            }),
            Some(LanguageState::Unreadable { reason }) => Err(CatalogError::PrimaryUnreadable {
                tag: primary_tag,
                reason,
            }),
            Some(LanguageState::FileMissing) | None => {
                Err(CatalogError::PrimaryMissing(primary_tag))
            },
        }
    }

    pub fn primary_tag(&self) -> &str {
        &self.primary_tag
    }

    pub fn primary_table(&self) -> &StringsTable {
        &self.primary
    }

    /// Non-primary languages in sorted tag order.
    pub fn targets(&self) -> impl Iterator<Item = (&str, &LanguageState)> {
        self.targets
            .iter()
            .map(|(tag, state)| (tag.as_str(), state))
    }

    pub fn target(&self, tag: &str) -> Option<&LanguageState> {
        self.targets.get(tag)
    }

    /// Every discovered language tag, primary included, sorted.
    pub fn language_tags(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = self.targets.keys().map(String::as_str).collect();
        let insert_at = tags.partition_point(|tag| *tag < self.primary_tag.as_str());
        tags.insert(insert_at, &self.primary_tag);
        tags
    }
}

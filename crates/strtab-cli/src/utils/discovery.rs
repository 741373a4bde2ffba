//! Module discovery: locating language folders and loading their tables.

use crate::core::{
    CliError, LanguageDir, ModuleInfo, ModuleNotFoundError, NoLanguagesError, PrimaryMissingError,
    PrimaryUnreadableError, ResourcesNotFoundError,
};
use anyhow::Context as _;
use std::collections::BTreeMap;
use std::path::Path;
use strtab::{Catalog, CatalogError, LanguageState};

pub const RESOURCES_DIR: &str = "Resources";
pub const LPROJ_SUFFIX: &str = ".lproj";
pub const TABLE_FILE: &str = "Localizable.strings";
pub const DEFAULT_PRIMARY: &str = "en";

/// Locate a module's language folders.
///
/// A missing module path, a missing Resources directory, or an empty
/// Resources directory is a precondition failure.
pub fn discover_module(module_path: &Path) -> Result<ModuleInfo, CliError> {
    if !module_path.exists() {
        return Err(ModuleNotFoundError {
            path: module_path.to_path_buf(),
        }
        .into());
    }

    let resources_dir = module_path.join(RESOURCES_DIR);
    if !resources_dir.is_dir() {
        return Err(ResourcesNotFoundError {
            path: resources_dir,
        }
        .into());
    }

    let mut languages = Vec::new();
    let entries = fs_err::read_dir(&resources_dir)
        .with_context(|| format!("Failed to read {}", resources_dir.display()))?;
    for entry in entries {
        let entry = entry?;
        if !entry.path().is_dir() {
            continue;
        }
        let Some(dir_name) = entry.file_name().to_str().map(str::to_string) else {
            continue;
        };
        let Some(tag) = dir_name.strip_suffix(LPROJ_SUFFIX) else {
            continue;
        };
        languages.push(LanguageDir {
            tag: tag.to_string(),
            table_file: entry.path().join(TABLE_FILE),
        });
    }

    // Sort by tag for consistent ordering
    languages.sort_by(|a, b| a.tag.cmp(&b.tag));

    if languages.is_empty() {
        return Err(NoLanguagesError {
            path: resources_dir,
        }
        .into());
    }

    let name = module_path
        .file_name()
        .and_then(|name| name.to_str())
        .map(str::to_string)
        .unwrap_or_else(|| module_path.display().to_string());

    Ok(ModuleInfo {
        name,
        resources_dir,
        languages,
    })
}

/// Resolve the primary language tag.
///
/// An explicit `--primary` is strict. The default `en` falls back to the
/// first discovered language with a table when no `en` table exists.
pub fn resolve_primary(module: &ModuleInfo, requested: Option<&str>) -> String {
    if let Some(tag) = requested {
        return tag.to_string();
    }

    let default = module
        .language(DEFAULT_PRIMARY)
        .is_some_and(LanguageDir::has_table);
    if default {
        return DEFAULT_PRIMARY.to_string();
    }

    module
        .languages
        .iter()
        .find(|language| language.has_table())
        .map(|language| language.tag.clone())
        .unwrap_or_else(|| DEFAULT_PRIMARY.to_string())
}

/// Read and parse every discovered language into a [`Catalog`].
///
/// Per-language problems (missing file, undecodable content) become
/// [`LanguageState`] values and surface in the report; only a missing or
/// unreadable primary aborts.
pub fn load_catalog(module: &ModuleInfo, primary: &str) -> Result<Catalog, CliError> {
    let mut languages = BTreeMap::new();

    for language in &module.languages {
        let state = if !language.has_table() {
            LanguageState::FileMissing
        } else {
            match fs_err::read(&language.table_file) {
                Ok(bytes) => match strtab::table::parse_bytes(&bytes) {
                    Ok(table) => LanguageState::Parsed(table),
                    Err(err) => LanguageState::Unreadable {
                        reason: err.to_string(),
                    },
                },
                Err(err) => LanguageState::Unreadable {
                    reason: err.to_string(),
                },
            }
        };
        languages.insert(language.tag.clone(), state);
    }

    Catalog::new(primary, languages).map_err(|err| match err {
        CatalogError::PrimaryMissing(language) => {
            let expected = module
                .resources_dir
                .join(format!("{language}{LPROJ_SUFFIX}"))
                .join(TABLE_FILE)
                .display()
                .to_string();
            PrimaryMissingError { language, expected }.into()
        },
        CatalogError::PrimaryUnreadable { tag, reason } => PrimaryUnreadableError {
            language: tag,
            reason,
        }
        .into(),
    })
}

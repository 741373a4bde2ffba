use std::path::PathBuf;

/// A discovered module: its name and language folders, sorted by tag.
#[derive(Clone, Debug)]
pub struct ModuleInfo {
    /// The module directory's name, used in the report summary.
    pub name: String,
    /// The Resources directory under the module root.
    pub resources_dir: PathBuf,
    /// One entry per `<tag>.lproj` directory, sorted by tag.
    pub languages: Vec<LanguageDir>,
}

/// One language folder inside the Resources directory.
#[derive(Clone, Debug)]
pub struct LanguageDir {
    pub tag: String,
    /// The string-table path inside the folder; may not exist.
    pub table_file: PathBuf,
}

impl LanguageDir {
    pub fn has_table(&self) -> bool {
        self.table_file.is_file()
    }
}

impl ModuleInfo {
    pub fn language(&self, tag: &str) -> Option<&LanguageDir> {
        self.languages.iter().find(|language| language.tag == tag)
    }
}

use crate::model::DefinitionMap;
use std::collections::HashMap;

/// Analysis result for a single source file.
///
/// Files that parse but define nothing (import-only files, files whose
/// top-level statements yield no definitions) produce no `Module` at all;
/// they are represented as `None` in the outline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Module {
    /// Non-blank line count of the raw file text. A line is blank only when
    /// it is completely empty; whitespace-only lines count.
    pub lines_of_code: usize,
    /// Top-level definitions, keyed by name, in source order.
    pub definitions: DefinitionMap,
    /// Set when the file could not be parsed. Only the fact of the failure
    /// is recorded, never its reason; `definitions` is empty in that case.
    pub parse_error: bool,
}

impl Module {
    /// Whether this module contributes anything to the rendered report.
    pub fn is_printable(&self) -> bool {
        !self.definitions.is_empty() || self.parse_error
    }
}

/// The whole-repository analysis result: every walked source file, grouped
/// by its containing directory, whether or not it produced a `Module`.
///
/// Built incrementally as files are analyzed; carries no ordering guarantees.
/// The renderer imposes the deterministic order.
#[derive(Debug, Default)]
pub struct RepoOutline {
    /// Files directly under the analyzed root.
    pub root: HashMap<String, Option<Module>>,
    /// Files in subdirectories, keyed by the directory's path components
    /// relative to the root.
    pub directories: HashMap<Vec<String>, HashMap<String, Option<Module>>>,
}

impl RepoOutline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one analyzed file. An empty `directory` means the file sits
    /// directly under the root.
    pub fn insert(&mut self, directory: Vec<String>, file_name: String, module: Option<Module>) {
        if directory.is_empty() {
            self.root.insert(file_name, module);
        } else {
            self.directories
                .entry(directory)
                .or_default()
                .insert(file_name, module);
        }
    }

    /// Total number of walked source files, printable or not.
    pub fn file_count(&self) -> usize {
        self.root.len() + self.directories.values().map(HashMap::len).sum::<usize>()
    }
}

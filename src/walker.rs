//! Source file discovery: a naive recursive descent over the repository.
//!
//! Nothing is filtered beyond the source-file suffix — hidden directories are
//! entered, ignore files of every kind are disregarded, and symlinks are not
//! followed. Selection is the walker's only job; ordering is imposed later by
//! the renderer.

use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

/// File names must end with this suffix to qualify as source files.
const SOURCE_SUFFIX: &str = ".py";

/// A discovered source file, located relative to the walked root.
#[derive(Debug, Clone)]
pub struct SourceFile {
    /// Path usable for reading the file.
    pub path: PathBuf,
    /// Path components of the containing directory relative to the root;
    /// empty for files directly under the root.
    pub directory: Vec<String>,
    /// The file's own name.
    pub file_name: String,
}

/// Collect every source file under `root`.
///
/// A directory that cannot be read is fatal to the whole walk.
pub fn walk_source_files(root: &Path) -> Result<Vec<SourceFile>, ignore::Error> {
    let walker = WalkBuilder::new(root)
        .hidden(false)
        .ignore(false)
        .git_ignore(false)
        .git_global(false)
        .git_exclude(false)
        .parents(false)
        .follow_links(false)
        .build();

    let mut files = Vec::new();

    for entry in walker {
        let entry = entry?;

        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy().into_owned();
        if !file_name.ends_with(SOURCE_SUFFIX) {
            continue;
        }

        let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
        let directory = relative
            .parent()
            .map(|dir| {
                dir.components()
                    .map(|c| c.as_os_str().to_string_lossy().into_owned())
                    .collect()
            })
            .unwrap_or_default();

        files.push(SourceFile {
            path: entry.into_path(),
            directory,
            file_name,
        });
    }

    Ok(files)
}

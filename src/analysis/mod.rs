//! The module analyzer: drives the walk → per-file extraction → outline
//! pipeline.

mod module;

pub use module::extract_module;

use crate::model::RepoOutline;
use crate::walker::walk_source_files;
use rayon::prelude::*;
use std::path::Path;
use thiserror::Error;

/// Fatal pipeline errors. Parse failures are not among them: they degrade to
/// per-file markers inside [`extract_module`].
#[derive(Debug, Error)]
pub enum OutlineError {
    #[error("Failed to list source files: {0}")]
    Walk(#[from] ignore::Error),

    #[error("Failed to read source file: {0}")]
    Io(#[from] std::io::Error),
}

/// Walk `root`, analyze every source file, and fold the results into a
/// repository outline.
///
/// Files are analyzed in parallel; each result lands in a disjoint outline
/// key, so ordering stays a rendering-time concern. The first read failure
/// (including non-UTF-8 content) aborts the whole run.
pub fn analyze_repo(root: &Path) -> Result<RepoOutline, OutlineError> {
    let files = walk_source_files(root)?;

    let analyzed = files
        .into_par_iter()
        .map(|file| {
            let source = std::fs::read_to_string(&file.path)?;
            Ok((file, extract_module(&source)))
        })
        .collect::<Result<Vec<_>, OutlineError>>()?;

    let mut outline = RepoOutline::new();
    for (file, module) in analyzed {
        outline.insert(file.directory, file.file_name, module);
    }

    Ok(outline)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;

    fn write(root: &Path, relative: &str, content: &str) {
        let path = root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    #[test]
    fn groups_results_by_directory() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "top.py", "def f():\n    pass\n");
        write(dir.path(), "pkg/mod.py", "import os\n");
        write(dir.path(), "pkg/util.py", "def g():\n    pass\n");

        let outline = analyze_repo(dir.path()).unwrap();

        assert_eq!(outline.file_count(), 3);
        assert!(outline.root["top.py"].is_some());

        let pkg = &outline.directories[&vec!["pkg".to_string()]];
        assert_eq!(pkg["mod.py"], None);
        assert!(pkg["util.py"].is_some());
    }

    #[test]
    fn parse_failure_does_not_stop_other_files() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "broken.py", "def broken(:\n");
        write(dir.path(), "fine.py", "def f():\n    pass\n");

        let outline = analyze_repo(dir.path()).unwrap();

        assert!(outline.root["broken.py"].as_ref().unwrap().parse_error);
        assert!(!outline.root["fine.py"].as_ref().unwrap().parse_error);
    }

    #[test]
    fn unreadable_file_content_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("bad.py"), [0xff, 0xfe, 0x00]).unwrap();

        assert!(matches!(
            analyze_repo(dir.path()),
            Err(OutlineError::Io(_))
        ));
    }
}

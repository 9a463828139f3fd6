//! The outline renderer: deterministic serialization of a repository outline
//! into one indented text report.
//!
//! Ordering lives entirely here. Directories sort by their path-component
//! sequences, files sort by name within every directory and at the root, so
//! the same outline always renders to byte-identical text no matter what
//! order the walk or the analysis produced it in.

use crate::fs::FileSystem;
use crate::model::{Definition, DefinitionMap, Module, RepoOutline};
use std::collections::{HashMap, HashSet};
use std::io;
use std::path::Path;

/// Fixed report destination, overwritten on every run.
pub const REPORT_FILE_NAME: &str = "repo_outline.txt";

/// The tool's own module name, always excluded from the root listing.
const SELF_MODULE: &str = "repo_outline.py";

const INDENT: &str = "    ";

/// Render the whole outline. Root-level files print after all directories;
/// an outline with nothing printable renders as the empty string.
pub fn render(outline: &RepoOutline) -> String {
    let mut report = String::new();
    let mut printed_prefixes: HashSet<&[String]> = HashSet::new();

    let mut directories: Vec<_> = outline.directories.iter().collect();
    directories.sort_by(|a, b| a.0.cmp(b.0));

    for (components, files) in directories {
        let body = render_files(files, components.len(), false);
        if body.is_empty() {
            continue;
        }

        // Header lines are committed only when their group actually prints,
        // so an all-empty directory never claims a prefix a later sibling
        // still needs to emit.
        for depth in 0..components.len() {
            if printed_prefixes.insert(&components[..depth + 1]) {
                report.push_str(&INDENT.repeat(depth));
                report.push_str(&components[depth]);
                report.push_str("/\n");
            }
        }

        report.push_str(&body);
    }

    report.push_str(&render_files(&outline.root, 0, true));

    report
}

/// Render one directory's files, sorted by name, at the given indent depth.
/// Unprintable files contribute nothing.
fn render_files(
    files: &HashMap<String, Option<Module>>,
    indent: usize,
    exclude_self: bool,
) -> String {
    let mut names: Vec<_> = files.keys().collect();
    names.sort();

    let mut text = String::new();

    for name in names {
        if exclude_self && name.as_str() == SELF_MODULE {
            continue;
        }

        let Some(module) = &files[name] else {
            continue;
        };
        if !module.is_printable() {
            continue;
        }

        let marker = if module.parse_error {
            " [parse error]"
        } else {
            ""
        };
        text.push_str(&format!(
            "{}{} (module){}\n",
            INDENT.repeat(indent),
            name,
            marker
        ));

        render_definitions(&module.definitions, indent + 1, &mut text);
    }

    text
}

fn render_definitions(definitions: &DefinitionMap, indent: usize, text: &mut String) {
    for (name, definition) in definitions {
        match definition {
            Definition::Class(members) => {
                text.push_str(&format!("{}{} (class)\n", INDENT.repeat(indent), name));
                render_definitions(members, indent + 1, text);
            }
            Definition::Function(line_count) => {
                text.push_str(&format!(
                    "{}{} (function): {} objects\n",
                    INDENT.repeat(indent),
                    name,
                    line_count
                ));
            }
        }
    }
}

/// Write the rendered report to [`REPORT_FILE_NAME`] in the current working
/// directory, replacing any previous report.
pub fn write_report(fs: &dyn FileSystem, report: &str) -> io::Result<()> {
    fs.write(Path::new(REPORT_FILE_NAME), report)
}

//! End-to-end: fixture repository on disk → analyzed outline → exact report
//! text.

use repo_outline::{analyze_repo, render};
use std::fs;
use std::path::Path;

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn fixture_repo() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();

    // Excluded from the report by name.
    write(
        root,
        "repo_outline.py",
        "def main():\n    print('hi')\n",
    );

    write(
        root,
        "app.py",
        "\
class App:
    def run(self):
        self.helper()
        return 0

    def helper(self):
        pass
",
    );

    // Import-only files never appear.
    write(root, "setup.py", "import setuptools\n");
    write(root, "pkg/__init__.py", "from .core import Engine\n");

    write(
        root,
        "pkg/core.py",
        "\
import os


class Engine:
    class Inner:
        def spin(self):
            pass

    def stop(self):
        pass
",
    );

    write(
        root,
        "pkg/util/strings.py",
        "def slug(text):\n    return text.lower().replace(' ', '-')\n",
    );

    write(root, "broken.py", "def broken(:\n    pass\n");

    // Nothing printable in this directory at all.
    write(root, "empty/nothing.py", "x = 1\n");

    dir
}

const EXPECTED: &str = "\
pkg/
    core.py (module)
        Engine (class)
            Inner (class)
                spin (function): 2 objects
            stop (function): 2 objects
    util/
        strings.py (module)
            slug (function): 2 objects
app.py (module)
    App (class)
        run (function): 3 objects
        helper (function): 2 objects
broken.py (module) [parse error]
";

#[test]
fn fixture_repo_renders_the_exact_report() {
    let dir = fixture_repo();
    let outline = analyze_repo(dir.path()).unwrap();

    assert_eq!(render(&outline), EXPECTED);
}

#[test]
fn every_walked_file_is_counted_even_when_unprintable() {
    let dir = fixture_repo();
    let outline = analyze_repo(dir.path()).unwrap();

    assert_eq!(outline.file_count(), 8);
}

#[test]
fn reruns_on_an_unmodified_tree_are_byte_identical() {
    let dir = fixture_repo();

    let first = render(&analyze_repo(dir.path()).unwrap());
    let second = render(&analyze_repo(dir.path()).unwrap());

    assert_eq!(first, second);
    assert_eq!(first, EXPECTED);
}

#[test]
fn a_repo_with_nothing_printable_renders_empty() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "a.py", "import os\n");
    write(dir.path(), "sub/b.py", "X = 1\n");

    let outline = analyze_repo(dir.path()).unwrap();

    assert_eq!(outline.file_count(), 2);
    assert_eq!(render(&outline), "");
}

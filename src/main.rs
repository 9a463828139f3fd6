use clap::Parser;
use repo_outline::analysis::analyze_repo;
use repo_outline::cli::Cli;
use repo_outline::fs::default_fs;
use repo_outline::report::{self, REPORT_FILE_NAME};
use repo_outline::style;

fn main() {
    std::process::exit(run(Cli::parse()));
}

fn run(cli: Cli) -> i32 {
    let root = match cli.path.canonicalize() {
        Ok(path) => path,
        Err(_) => {
            style::error(&format!("Could not resolve path: {}", style::path(&cli.path)));
            return 1;
        }
    };

    let outline = match analyze_repo(&root) {
        Ok(outline) => outline,
        Err(e) => {
            style::error(&e.to_string());
            return 1;
        }
    };

    let file_count = outline.file_count();
    let report = report::render(&outline);

    // The report always lands in the invocation directory, regardless of
    // which root was analyzed.
    if let Err(e) = report::write_report(default_fs(), &report) {
        style::error(&format!("Failed to write {REPORT_FILE_NAME}: {e}"));
        return 1;
    }

    style::success(&format!(
        "Outlined {file_count} source files into {REPORT_FILE_NAME}"
    ));
    0
}

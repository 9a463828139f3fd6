use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "repo-outline")]
#[command(about = "Write an indented structural census of a repository's Python sources")]
#[command(version)]
pub struct Cli {
    /// Path to analyze (defaults to current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,
}

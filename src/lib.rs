pub mod analysis;
pub mod cli;
pub mod fs;
pub mod model;
pub mod parser;
pub mod report;
pub mod style;
pub mod walker;

pub use analysis::{OutlineError, analyze_repo, extract_module};
pub use cli::Cli;
pub use model::{Definition, DefinitionMap, Module, RepoOutline};
pub use report::{REPORT_FILE_NAME, render, write_report};

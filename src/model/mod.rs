mod definition;
mod outline;

pub use definition::{Definition, DefinitionMap};
pub use outline::{Module, RepoOutline};

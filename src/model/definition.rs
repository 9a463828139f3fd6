use indexmap::IndexMap;

/// Named members of a class (or of a whole module), in source order.
///
/// Re-inserting an existing name replaces its value but keeps its original
/// position, so a redefined name renders where it first appeared.
pub type DefinitionMap = IndexMap<String, Definition>;

/// A named, lexically scoped unit extracted from a source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Definition {
    /// A class and its immediate class/function members. May be empty when
    /// the class body declares no classes or functions.
    Class(DefinitionMap),
    /// A function; the value is the number of non-blank lines in its
    /// reconstructed source text. Functions are always leaves.
    Function(usize),
}

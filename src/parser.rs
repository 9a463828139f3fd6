//! The parser collaborator: a thread-local tree-sitter parser for Python
//! plus the node-to-source helper used for line counting.

use std::cell::RefCell;
use thiserror::Error;
use tree_sitter::{Node, Tree};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Parser produced no syntax tree")]
    NoTree,
    #[error("Source contains syntax errors")]
    Syntax,
}

thread_local! {
    static PYTHON_PARSER: RefCell<tree_sitter::Parser> = RefCell::new({
        let mut parser = tree_sitter::Parser::new();
        parser
            .set_language(&tree_sitter_python::LANGUAGE.into())
            .expect("Failed to set python language");
        parser
    });
}

/// Parse one file's source text into a syntax tree.
///
/// tree-sitter recovers from malformed input instead of raising, so a tree
/// containing any error or missing node counts as a parse failure here. The
/// error is payload-free: callers record only that a failure occurred.
pub fn parse(source: &str) -> Result<Tree, ParseError> {
    let tree = PYTHON_PARSER
        .with(|parser| parser.borrow_mut().parse(source, None))
        .ok_or(ParseError::NoTree)?;

    if tree.root_node().has_error() {
        return Err(ParseError::Syntax);
    }

    Ok(tree)
}

/// The source text a node spans, exactly as written in the file.
pub fn node_text<'a>(node: Node, source: &'a str) -> &'a str {
    &source[node.start_byte()..node.end_byte()]
}

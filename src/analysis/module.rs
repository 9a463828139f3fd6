//! Per-file structural extraction: one source text in, one optional
//! [`Module`] out.
//!
//! Extraction is a direct recursive descent: the module's top-level
//! statements, then class bodies, recursively. Definitions nested inside
//! function bodies are deliberately not surfaced.

use crate::model::{Definition, DefinitionMap, Module};
use crate::parser::{self, node_text};
use tree_sitter::Node;

const IMPORT_KINDS: [&str; 3] = [
    "import_statement",
    "import_from_statement",
    "future_import_statement",
];

/// Analyze one file's source text.
///
/// Returns `None` when the file parses but defines nothing worth reporting:
/// every top-level statement is an import, or the descent extracts zero
/// definitions. A parse failure still yields a `Module` so the file's
/// non-blank line count survives alongside the error marker.
pub fn extract_module(source: &str) -> Option<Module> {
    let lines_of_code = non_blank_lines(source);

    let tree = match parser::parse(source) {
        Ok(tree) => tree,
        Err(_) => {
            return Some(Module {
                lines_of_code,
                definitions: DefinitionMap::new(),
                parse_error: true,
            });
        }
    };

    let root = tree.root_node();
    if !has_actual_code(root) {
        return None;
    }

    let definitions = module_definitions(root, source);
    if definitions.is_empty() {
        return None;
    }

    Some(Module {
        lines_of_code,
        definitions,
        parse_error: false,
    })
}

/// Lines that are completely empty do not count; whitespace-only lines do.
fn non_blank_lines(text: &str) -> usize {
    text.lines().filter(|line| !line.is_empty()).count()
}

/// Whether any top-level statement is something other than an import.
/// Comments are not statements; an empty module has no actual code.
fn has_actual_code(root: Node) -> bool {
    let mut cursor = root.walk();
    root.named_children(&mut cursor)
        .filter(|node| node.kind() != "comment")
        .any(|node| !IMPORT_KINDS.contains(&node.kind()))
}

/// A decorated definition wraps the real one; the inner node carries the
/// name and kind, the outer node is the source span (decorators included).
fn unwrap_decorated(node: Node) -> (Node, Node) {
    if node.kind() == "decorated_definition" {
        if let Some(inner) = node.child_by_field_name("definition") {
            return (inner, node);
        }
    }
    (node, node)
}

fn definition_name<'a>(node: Node, source: &'a str) -> Option<&'a str> {
    node.child_by_field_name("name")
        .map(|name| node_text(name, source))
}

/// Top-level definitions of the module. A top-level class whose body yields
/// no members is dropped entirely; duplicate names overwrite in place.
fn module_definitions(root: Node, source: &str) -> DefinitionMap {
    let mut definitions = DefinitionMap::new();
    let mut cursor = root.walk();

    for statement in root.named_children(&mut cursor) {
        let (node, span) = unwrap_decorated(statement);

        match node.kind() {
            "function_definition" => {
                if let Some(name) = definition_name(node, source) {
                    let line_count = non_blank_lines(node_text(span, source));
                    definitions.insert(name.to_string(), Definition::Function(line_count));
                }
            }
            "class_definition" => {
                if let Some(name) = definition_name(node, source) {
                    let members = class_members(node, source);
                    if !members.is_empty() {
                        definitions.insert(name.to_string(), Definition::Class(members));
                    }
                }
            }
            _ => {}
        }
    }

    definitions
}

/// Immediate class/function members of a class body, in source order.
/// Unlike at the top level, a nested class is kept even when it has no
/// extractable members of its own.
fn class_members(class_node: Node, source: &str) -> DefinitionMap {
    let mut members = DefinitionMap::new();

    let Some(body) = class_node.child_by_field_name("body") else {
        return members;
    };

    let mut cursor = body.walk();
    for statement in body.named_children(&mut cursor) {
        let (node, span) = unwrap_decorated(statement);

        match node.kind() {
            "function_definition" => {
                if let Some(name) = definition_name(node, source) {
                    let line_count = non_blank_lines(node_text(span, source));
                    members.insert(name.to_string(), Definition::Function(line_count));
                }
            }
            "class_definition" => {
                if let Some(name) = definition_name(node, source) {
                    members.insert(
                        name.to_string(),
                        Definition::Class(class_members(node, source)),
                    );
                }
            }
            _ => {}
        }
    }

    members
}

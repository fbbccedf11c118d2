//! Projection of a tree-sitter-java parse into a categorized [`SyntaxTree`].
//!
//! Only named nodes are projected; punctuation and keywords are dropped, and
//! comments are skipped entirely. Nodes without a category become `Other` so
//! the parent chain stays intact for ancestor resolution.

use std::path::Path;

use astviz_core::{Category, LineSpan, NodeId, SourceFile, SyntaxTree};
use astviz_error::Result;
use tracing::debug;
use tree_sitter::Node;

use crate::fields;
use crate::kinds::{categorize, is_comment};
use crate::source::JavaSource;

/// Parse Java source into a categorized tree.
///
/// A complete compilation unit is rooted at a `CompilationUnit`. A snippet
/// that only parses as class body declarations is rooted at its synthetic
/// enclosing `TypeDeclaration`.
pub fn parse_source(source: &[u8]) -> Result<SyntaxTree> {
    let parsed = JavaSource::parse(source)?;
    let tree = project(&parsed);
    debug!(
        nodes = tree.len(),
        wrapped = parsed.is_wrapped(),
        "projected java syntax tree"
    );
    Ok(tree)
}

pub fn parse_file(path: &Path) -> Result<SyntaxTree> {
    let file = SourceFile::new_file(path)?;
    parse_source(file.content())
}

fn span(source: &JavaSource, node: &Node) -> LineSpan {
    LineSpan {
        start: source.line(node.start_position().row),
        end: source.line(node.end_position().row),
    }
}

fn container_category(node: &Node) -> Category {
    match categorize(node) {
        Category::TypeDeclarationStatement => Category::TypeDeclaration,
        category => category,
    }
}

fn project(source: &JavaSource) -> SyntaxTree {
    let container = source.container();
    let root_category = container_category(&container);
    let mut tree = SyntaxTree::new(root_category);
    let root = tree.root();
    attach(&mut tree, source, root, &container, root_category);

    let mut stack: Vec<(Node, NodeId)> = Vec::new();
    push_children(&mut stack, &container, root);

    while let Some((node, parent)) = stack.pop() {
        let category = categorize(&node);
        let id = tree.push(category, parent);
        attach(&mut tree, source, id, &node, category);
        push_children(&mut stack, &node, id);
    }
    tree
}

fn attach(tree: &mut SyntaxTree, source: &JavaSource, id: NodeId, node: &Node, category: Category) {
    tree.set_span(id, span(source, node));
    for (field, value) in fields::extract(source, node, category) {
        tree.set_field(id, field, value);
    }
}

/// Push named children in reverse so they pop in source order.
fn push_children<'t>(stack: &mut Vec<(Node<'t>, NodeId)>, node: &Node<'t>, parent: NodeId) {
    let mut cursor = node.walk();
    let children: Vec<Node<'t>> = node
        .named_children(&mut cursor)
        .filter(|child| !is_comment(child))
        .collect();
    stack.extend(children.into_iter().rev().map(|child| (child, parent)));
}

//! The categorized source tree handed over by the parser collaborator.
//!
//! Nodes live in an arena indexed by [`NodeId`]. The root is always id 0 and is
//! the only node without a parent; every other node is pushed under an existing
//! parent, so the parent/child links form a single rooted tree by construction.

use std::fmt;

use strum_macros::{Display, IntoStaticStr};

use crate::category::Category;

#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash, Default, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl NodeId {
    pub const ROOT: NodeId = NodeId(0);

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Structured fields a label may show. Which ones a node carries depends on its category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr)]
pub enum Field {
    Name,
    /// `Class` or `Interface` for type declarations.
    Kind,
    Parameters,
    ReturnType,
    Modifiers,
    Type,
    Expression,
    Message,
    Condition,
    Updaters,
    Label,
    IsDefault,
    CaseExpressions,
    DeclaredNames,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    List(Vec<String>),
    Flag(bool),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(text) => write!(f, "{text}"),
            FieldValue::List(items) => write!(f, "{}", items.join(", ")),
            FieldValue::Flag(flag) => write!(f, "{flag}"),
        }
    }
}

/// Source location in 1-based lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineSpan {
    pub start: u32,
    pub end: u32,
}

#[derive(Debug, Clone)]
pub struct SourceNode {
    category: Category,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    fields: Vec<(Field, FieldValue)>,
    span: Option<LineSpan>,
}

impl SourceNode {
    fn new(category: Category, parent: Option<NodeId>) -> Self {
        Self {
            category,
            parent,
            children: Vec::new(),
            fields: Vec::new(),
            span: None,
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    pub fn span(&self) -> Option<LineSpan> {
        self.span
    }

    pub fn fields(&self) -> &[(Field, FieldValue)] {
        &self.fields
    }

    pub fn field(&self, field: Field) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(key, _)| *key == field)
            .map(|(_, value)| value)
    }

    pub fn text(&self, field: Field) -> Option<&str> {
        match self.field(field) {
            Some(FieldValue::Text(text)) => Some(text),
            _ => None,
        }
    }

    pub fn list(&self, field: Field) -> &[String] {
        match self.field(field) {
            Some(FieldValue::List(items)) => items,
            _ => &[],
        }
    }

    pub fn flag(&self, field: Field) -> Option<bool> {
        match self.field(field) {
            Some(FieldValue::Flag(flag)) => Some(*flag),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SyntaxTree {
    nodes: Vec<SourceNode>,
}

impl SyntaxTree {
    /// Create a tree holding only its root container.
    pub fn new(root: Category) -> Self {
        Self {
            nodes: vec![SourceNode::new(root, None)],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Append a node as the last child of `parent`.
    ///
    /// Children must be pushed in source order.
    pub fn push(&mut self, category: Category, parent: NodeId) -> NodeId {
        debug_assert!(parent.index() < self.nodes.len(), "parent {parent} not in tree");
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(SourceNode::new(category, Some(parent)));
        self.nodes[parent.index()].children.push(id);
        id
    }

    /// Attach a field to a node, replacing any previous value.
    pub fn set_field(&mut self, id: NodeId, field: Field, value: FieldValue) {
        let fields = &mut self.nodes[id.index()].fields;
        match fields.iter_mut().find(|(key, _)| *key == field) {
            Some(slot) => slot.1 = value,
            None => fields.push((field, value)),
        }
    }

    pub fn set_span(&mut self, id: NodeId, span: LineSpan) {
        self.nodes[id.index()].span = Some(span);
    }

    pub fn get(&self, id: NodeId) -> Option<&SourceNode> {
        self.nodes.get(id.index())
    }

    /// Get a node by id, panicking if it does not belong to this tree.
    pub fn node(&self, id: NodeId) -> &SourceNode {
        self.get(id)
            .unwrap_or_else(|| panic!("source node not found: {id}"))
    }

    pub fn category(&self, id: NodeId) -> Category {
        self.node(id).category
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.node(id).children
    }

    /// Walk the parent chain upwards, nearest ancestor first.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.parent(id), move |&current| self.parent(current))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: a tree holds at least its root.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &SourceNode)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(index, node)| (NodeId(index as u32), node))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_links_parent_and_children() {
        let mut tree = SyntaxTree::new(Category::CompilationUnit);
        let method = tree.push(Category::MethodDeclaration, tree.root());
        let block = tree.push(Category::Block, method);
        let stmt = tree.push(Category::ReturnStatement, block);

        assert_eq!(tree.len(), 4);
        assert!(tree.node(tree.root()).is_root());
        assert_eq!(tree.parent(stmt), Some(block));
        assert_eq!(tree.children(method), &[block]);
        assert_eq!(tree.ancestors(stmt).collect::<Vec<_>>(), vec![block, method, NodeId::ROOT]);
        assert_eq!(tree.ancestors(tree.root()).count(), 0);
    }

    #[test]
    fn test_fields() {
        let mut tree = SyntaxTree::new(Category::CompilationUnit);
        let id = tree.push(Category::VariableDeclarationStatement, tree.root());
        tree.set_field(id, Field::Type, FieldValue::Text("int".into()));
        tree.set_field(
            id,
            Field::DeclaredNames,
            FieldValue::List(vec!["a".into(), "b".into()]),
        );
        tree.set_field(id, Field::Type, FieldValue::Text("long".into()));

        let node = tree.node(id);
        assert_eq!(node.text(Field::Type), Some("long"));
        assert_eq!(node.list(Field::DeclaredNames), &["a", "b"]);
        assert!(node.list(Field::Modifiers).is_empty());
        assert_eq!(node.flag(Field::IsDefault), None);
        assert_eq!(node.fields().len(), 2);
    }

    #[test]
    fn test_field_value_display() {
        assert_eq!(FieldValue::Text("x > 0".into()).to_string(), "x > 0");
        assert_eq!(
            FieldValue::List(vec!["i++".into(), "j--".into()]).to_string(),
            "i++, j--"
        );
        assert_eq!(FieldValue::List(vec![]).to_string(), "");
        assert_eq!(FieldValue::Flag(true).to_string(), "true");
    }
}

//! The output forest handed to the rendering collaborator.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use crate::category::Category;
use crate::config::NodeSize;
use crate::style::Shape;
use crate::tree::NodeId;

#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash, Default, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct OutputId(pub u32);

impl OutputId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for OutputId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputNode {
    pub id: OutputId,
    #[serde(skip)]
    pub source: NodeId,
    pub category: Category,
    pub label: String,
    pub shape: Shape,
    pub color: String,
    pub filled: bool,
    pub size: NodeSize,
}

/// Directed edge from a graph ancestor to its descendant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Edge {
    pub from: OutputId,
    pub to: OutputId,
}

/// Append-only node and edge sets.
///
/// Node ids are assigned in insertion order, so `nodes()[i].id == OutputId(i)`.
#[derive(Debug, Default, Serialize)]
pub struct OutputGraph {
    nodes: Vec<OutputNode>,
    edges: Vec<Edge>,
    #[serde(skip)]
    by_source: HashMap<NodeId, OutputId>,
    #[serde(skip)]
    parents: Vec<Option<OutputId>>,
}

impl OutputGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// The id the next added node will receive.
    pub fn next_id(&self) -> OutputId {
        OutputId(self.nodes.len() as u32)
    }

    /// Register a node, overwriting its id with the next sequential one.
    pub fn add_node(&mut self, mut node: OutputNode) -> OutputId {
        let id = self.next_id();
        node.id = id;
        debug_assert!(
            !self.by_source.contains_key(&node.source),
            "source node {} registered twice",
            node.source
        );
        self.by_source.insert(node.source, id);
        self.nodes.push(node);
        self.parents.push(None);
        id
    }

    pub fn add_edge(&mut self, from: OutputId, to: OutputId) {
        debug_assert!(from.index() < self.nodes.len(), "edge source {from} missing");
        debug_assert!(to.index() < self.nodes.len(), "edge target {to} missing");
        debug_assert_ne!(from, to, "self-loop on {from}");
        debug_assert!(self.parents[to.index()].is_none(), "{to} already has a parent");
        self.parents[to.index()] = Some(from);
        self.edges.push(Edge { from, to });
    }

    pub fn nodes(&self) -> &[OutputNode] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node(&self, id: OutputId) -> Option<&OutputNode> {
        self.nodes.get(id.index())
    }

    /// The output node created for a source node, if any.
    pub fn output_of(&self, source: NodeId) -> Option<OutputId> {
        self.by_source.get(&source).copied()
    }

    pub fn parent(&self, id: OutputId) -> Option<OutputId> {
        self.parents.get(id.index()).copied().flatten()
    }

    /// Nodes with no incoming edge.
    pub fn roots(&self) -> impl Iterator<Item = &OutputNode> {
        self.nodes
            .iter()
            .filter(|node| self.parent(node.id).is_none())
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(source: u32, category: Category) -> OutputNode {
        OutputNode {
            id: OutputId::default(),
            source: NodeId(source),
            category,
            label: category.to_string(),
            shape: Shape::Box,
            color: "white".to_string(),
            filled: true,
            size: NodeSize { width: 2, height: 2 },
        }
    }

    #[test]
    fn test_ids_are_sequential() {
        let mut graph = OutputGraph::new();
        let a = graph.add_node(node(3, Category::MethodDeclaration));
        let b = graph.add_node(node(7, Category::IfStatement));

        assert_eq!(a, OutputId(0));
        assert_eq!(b, OutputId(1));
        assert_eq!(graph.nodes()[1].id, b);
        assert_eq!(graph.output_of(NodeId(7)), Some(b));
        assert_eq!(graph.output_of(NodeId(4)), None);
    }

    #[test]
    fn test_edges_and_roots() {
        let mut graph = OutputGraph::new();
        let a = graph.add_node(node(1, Category::MethodDeclaration));
        let b = graph.add_node(node(2, Category::IfStatement));
        let c = graph.add_node(node(5, Category::MethodDeclaration));
        graph.add_edge(a, b);

        assert_eq!(graph.edges(), &[Edge { from: a, to: b }]);
        assert_eq!(graph.parent(b), Some(a));
        assert_eq!(graph.parent(a), None);
        let roots: Vec<_> = graph.roots().map(|n| n.id).collect();
        assert_eq!(roots, vec![a, c]);
    }

    #[test]
    #[should_panic(expected = "already has a parent")]
    #[cfg(debug_assertions)]
    fn test_second_parent_is_rejected() {
        let mut graph = OutputGraph::new();
        let a = graph.add_node(node(1, Category::Block));
        let b = graph.add_node(node(2, Category::Block));
        let c = graph.add_node(node(3, Category::Block));
        graph.add_edge(a, c);
        graph.add_edge(b, c);
    }

    #[test]
    fn test_serialize_skips_index() {
        let mut graph = OutputGraph::new();
        let a = graph.add_node(node(1, Category::TypeDeclaration));
        let b = graph.add_node(node(2, Category::MethodDeclaration));
        graph.add_edge(a, b);

        let value = serde_json::to_value(&graph).unwrap();
        assert_eq!(value["nodes"][1]["category"], "MethodDeclaration");
        assert_eq!(value["nodes"][0]["shape"], "box");
        assert_eq!(value["edges"][0]["to"], 1);
        assert!(value.get("by_source").is_none());
        assert!(value["nodes"][0].get("source").is_none());
    }
}

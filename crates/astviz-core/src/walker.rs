//! Builds an [`OutputGraph`] from a [`SyntaxTree`] in one pre-order pass.
//!
//! For every node: resolve its policy; if included, format the label, register
//! an output node and link it to its nearest registered ancestor. Children are
//! always visited, so an excluded node acts as a transparent splice between
//! its included ancestor and included descendants.

use tracing::debug;

use crate::config::GlobalConfig;
use crate::graph::{OutputGraph, OutputId, OutputNode};
use crate::label::LabelFormatter;
use crate::policy::NodePolicy;
use crate::resolver::AncestorResolver;
use crate::tree::{NodeId, SyntaxTree};
use crate::visit::{SyntaxVisitor, walk_preorder};

pub struct TreeWalker<'a> {
    tree: &'a SyntaxTree,
    config: &'a GlobalConfig,
    policy: NodePolicy<'a>,
    labels: LabelFormatter,
    resolver: AncestorResolver<'a>,
    graph: OutputGraph,
}

impl<'a> TreeWalker<'a> {
    pub fn new(tree: &'a SyntaxTree, config: &'a GlobalConfig) -> Self {
        Self {
            tree,
            config,
            policy: NodePolicy::new(config),
            labels: LabelFormatter::new(config.detailed),
            resolver: AncestorResolver::new(tree),
            graph: OutputGraph::new(),
        }
    }

    /// Traverse the whole tree and return the finished graph.
    pub fn build(mut self) -> OutputGraph {
        walk_preorder(self.tree, self.tree.root(), &mut self);
        debug!(
            source_nodes = self.tree.len(),
            output_nodes = self.graph.len(),
            edges = self.graph.edges().len(),
            "built output graph"
        );
        self.graph
    }

    fn register(&mut self, id: NodeId) -> Option<OutputId> {
        let entry = self.policy.resolve_node(self.tree, id);
        if !entry.included {
            return None;
        }

        let node = self.tree.node(id);
        let output = self.graph.add_node(OutputNode {
            id: self.graph.next_id(),
            source: id,
            category: node.category(),
            label: self.labels.format(node),
            shape: entry.shape,
            color: entry.color.to_string(),
            filled: entry.filled,
            size: self.config.node_size,
        });

        if let Some(ancestor) = self.resolver.find_graph_ancestor(&self.graph, id) {
            self.graph.add_edge(ancestor, output);
        }
        Some(output)
    }
}

impl SyntaxVisitor for TreeWalker<'_> {
    fn visit_node(&mut self, _tree: &SyntaxTree, id: NodeId, _depth: usize) {
        self.register(id);
    }
}

/// Convenience wrapper over [`TreeWalker::build`].
pub fn build_output_graph(tree: &SyntaxTree, config: &GlobalConfig) -> OutputGraph {
    TreeWalker::new(tree, config).build()
}

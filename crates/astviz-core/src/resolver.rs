//! Nearest registered ancestor lookup.

use crate::graph::{OutputGraph, OutputId};
use crate::tree::{NodeId, SyntaxTree};

/// Finds the graph ancestor of a source node.
///
/// Walks the parent chain and stops at the first ancestor that already owns an
/// output node. Only included nodes are ever registered, so a registered
/// ancestor is always an included one. Excluded ancestors are skipped over.
///
/// Relies on ancestors being visited before descendants.
#[derive(Debug, Clone, Copy)]
pub struct AncestorResolver<'t> {
    tree: &'t SyntaxTree,
}

impl<'t> AncestorResolver<'t> {
    pub fn new(tree: &'t SyntaxTree) -> Self {
        Self { tree }
    }

    pub fn find_graph_ancestor(&self, graph: &OutputGraph, node: NodeId) -> Option<OutputId> {
        self.tree
            .ancestors(node)
            .find_map(|ancestor| graph.output_of(ancestor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::Category;
    use crate::config::NodeSize;
    use crate::graph::OutputNode;
    use crate::style::Shape;

    fn register(graph: &mut OutputGraph, tree: &SyntaxTree, id: NodeId) -> OutputId {
        graph.add_node(OutputNode {
            id: OutputId::default(),
            source: id,
            category: tree.category(id),
            label: String::new(),
            shape: Shape::Box,
            color: "white".into(),
            filled: false,
            size: NodeSize { width: 1, height: 1 },
        })
    }

    #[test]
    fn test_skips_unregistered_ancestors() {
        let mut tree = SyntaxTree::new(Category::CompilationUnit);
        let a = tree.push(Category::MethodDeclaration, tree.root());
        let b = tree.push(Category::Block, a);
        let c = tree.push(Category::IfStatement, b);

        let mut graph = OutputGraph::new();
        let out_a = register(&mut graph, &tree, a);

        let resolver = AncestorResolver::new(&tree);
        assert_eq!(resolver.find_graph_ancestor(&graph, c), Some(out_a));
        assert_eq!(resolver.find_graph_ancestor(&graph, a), None);
    }

    #[test]
    fn test_nearest_registered_wins() {
        let mut tree = SyntaxTree::new(Category::CompilationUnit);
        let a = tree.push(Category::MethodDeclaration, tree.root());
        let b = tree.push(Category::Block, a);
        let c = tree.push(Category::IfStatement, b);

        let mut graph = OutputGraph::new();
        register(&mut graph, &tree, a);
        let out_b = register(&mut graph, &tree, b);

        let resolver = AncestorResolver::new(&tree);
        assert_eq!(resolver.find_graph_ancestor(&graph, c), Some(out_b));
    }

    #[test]
    fn test_root_has_no_ancestor() {
        let tree = SyntaxTree::new(Category::CompilationUnit);
        let graph = OutputGraph::new();
        let resolver = AncestorResolver::new(&tree);
        assert_eq!(resolver.find_graph_ancestor(&graph, tree.root()), None);
    }
}

//! Pre-order traversal over a [`SyntaxTree`].
//!
//! Traversal uses an explicit stack so deeply nested sources cannot overflow
//! the call stack. Children are visited in source order.

use crate::tree::{NodeId, SyntaxTree};

/// Receives every node of a tree exactly once, parents before children.
pub trait SyntaxVisitor {
    fn visit_node(&mut self, tree: &SyntaxTree, id: NodeId, depth: usize);
}

impl<F> SyntaxVisitor for F
where
    F: FnMut(&SyntaxTree, NodeId, usize),
{
    fn visit_node(&mut self, tree: &SyntaxTree, id: NodeId, depth: usize) {
        self(tree, id, depth)
    }
}

/// Visit `start` and all its descendants in document order.
pub fn walk_preorder<V: SyntaxVisitor + ?Sized>(tree: &SyntaxTree, start: NodeId, visitor: &mut V) {
    let mut stack = vec![(start, 0usize)];
    while let Some((id, depth)) = stack.pop() {
        visitor.visit_node(tree, id, depth);
        for &child in tree.children(id).iter().rev() {
            stack.push((child, depth + 1));
        }
    }
}

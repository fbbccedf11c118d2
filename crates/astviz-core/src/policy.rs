//! Per-category inclusion and style decisions.

use crate::category::Category;
use crate::config::GlobalConfig;
use crate::style::Shape;
use crate::tree::{NodeId, SyntaxTree};

/// Resolved decision for one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolicyEntry<'a> {
    pub included: bool,
    pub shape: Shape,
    pub color: &'a str,
    pub filled: bool,
}

fn is_top_level_type(tree: &SyntaxTree, id: NodeId) -> bool {
    tree.category(id) == Category::TypeDeclaration
        && tree.parent(id) == Some(tree.root())
        && tree.category(tree.root()) == Category::CompilationUnit
}

/// Pure lookup over an immutable [`GlobalConfig`].
///
/// Two overrides sit on top of the per-category `visit` flag: the tree's
/// top-level container is never included, and expression-like categories are
/// excluded outright while `includeExpressions` is off. For a compilation unit
/// the container is both the unit and the type declarations directly under it.
#[derive(Debug, Clone, Copy)]
pub struct NodePolicy<'a> {
    config: &'a GlobalConfig,
}

impl<'a> NodePolicy<'a> {
    pub fn new(config: &'a GlobalConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &'a GlobalConfig {
        self.config
    }

    pub fn resolve(&self, category: Category) -> PolicyEntry<'a> {
        let style = self.config.style(category);
        let gated = category.is_expression_like() && !self.config.include_expressions;
        PolicyEntry {
            included: category.is_visitable() && style.visit && !gated,
            shape: style.shape,
            color: &style.color,
            filled: self.config.fill_nodes,
        }
    }

    /// Resolve a node in place, applying the root-container override.
    pub fn resolve_node(&self, tree: &SyntaxTree, id: NodeId) -> PolicyEntry<'a> {
        let node = tree.node(id);
        let mut entry = self.resolve(node.category());
        if node.is_root() || is_top_level_type(tree, id) {
            entry.included = false;
        }
        entry
    }

    pub fn is_included(&self, tree: &SyntaxTree, id: NodeId) -> bool {
        self.resolve_node(tree, id).included
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_entry_uses_defaults() {
        let config = GlobalConfig::default();
        let entry = NodePolicy::new(&config).resolve(Category::WhileStatement);
        assert_eq!(
            entry,
            PolicyEntry {
                included: false,
                shape: Shape::Box,
                color: "white",
                filled: true,
            }
        );
    }

    #[test]
    fn test_visit_flag_enables_category() {
        let config = GlobalConfig::default()
            .with_visit(&[Category::WhileStatement])
            .with_fill_nodes(false);
        let entry = NodePolicy::new(&config).resolve(Category::WhileStatement);
        assert!(entry.included);
        assert!(!entry.filled);
    }

    #[test]
    fn test_expression_gate_dominates_visit() {
        let config = GlobalConfig::default()
            .with_visit(&[Category::MethodInvocation, Category::ExpressionStatement])
            .with_include_expressions(false);
        let policy = NodePolicy::new(&config);
        assert!(!policy.resolve(Category::MethodInvocation).included);
        assert!(policy.resolve(Category::ExpressionStatement).included);

        let config = config.with_include_expressions(true);
        assert!(NodePolicy::new(&config).resolve(Category::MethodInvocation).included);
    }

    #[test]
    fn test_root_is_never_included() {
        let config = GlobalConfig::default().with_visit(&[Category::TypeDeclaration]);
        let mut tree = SyntaxTree::new(Category::TypeDeclaration);
        let inner = tree.push(Category::TypeDeclaration, tree.root());

        let policy = NodePolicy::new(&config);
        assert!(policy.resolve(Category::TypeDeclaration).included);
        assert!(!policy.is_included(&tree, tree.root()));
        assert!(policy.is_included(&tree, inner));
    }

    #[test]
    fn test_top_level_types_of_a_unit_are_never_included() {
        let config = GlobalConfig::default().with_visit(&[Category::TypeDeclaration]);
        let mut tree = SyntaxTree::new(Category::CompilationUnit);
        let outer = tree.push(Category::TypeDeclaration, tree.root());
        let method = tree.push(Category::MethodDeclaration, outer);
        let nested = tree.push(Category::TypeDeclaration, outer);
        let local = tree.push(Category::TypeDeclaration, method);

        let policy = NodePolicy::new(&config);
        assert!(!policy.is_included(&tree, outer));
        assert!(policy.is_included(&tree, nested));
        assert!(policy.is_included(&tree, local));
    }

    #[test]
    fn test_other_is_never_included() {
        let config = GlobalConfig::default();
        assert!(!NodePolicy::new(&config).resolve(Category::Other).included);
    }
}

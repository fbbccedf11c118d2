//! Text dump of a categorized source tree, one node per line.
//!
//! ```text
//! CompilationUnit
//!   TypeDeclaration [1-9] Name=Snippet Kind=Class
//!     MethodDeclaration [2-8] Name=run Parameters=[int x] ReturnType=void
//! ```

use std::fmt::Write;

use crate::category::Category;
use crate::tree::{FieldValue, NodeId, SyntaxTree};
use crate::visit::walk_preorder;

#[derive(Debug, Clone)]
pub struct PrintConfig {
    /// Append `Field=value` pairs after the category.
    pub include_fields: bool,

    /// Append `[start-end]` line spans.
    pub include_line_info: bool,

    /// Skip `Other` nodes but keep their descendants.
    pub hide_other: bool,

    /// Indentation width in spaces per nesting level
    pub indent_width: usize,

    /// Nodes deeper than this are not printed.
    pub max_depth: usize,
}

impl Default for PrintConfig {
    fn default() -> Self {
        PrintConfig {
            include_fields: true,
            include_line_info: true,
            hide_other: true,
            indent_width: 2,
            max_depth: 1000,
        }
    }
}

impl PrintConfig {
    pub fn new() -> Self {
        Self::default()
    }

    // Builder methods
    // ====================================================================

    pub fn with_fields(mut self, enabled: bool) -> Self {
        self.include_fields = enabled;
        self
    }

    pub fn with_line_info(mut self, enabled: bool) -> Self {
        self.include_line_info = enabled;
        self
    }

    pub fn with_hide_other(mut self, enabled: bool) -> Self {
        self.hide_other = enabled;
        self
    }

    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }

    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Minimal configuration: categories only.
    pub fn minimal() -> Self {
        PrintConfig {
            include_fields: false,
            include_line_info: false,
            ..Default::default()
        }
    }
}

pub fn render_syntax_tree(tree: &SyntaxTree, config: &PrintConfig) -> String {
    let mut out = String::new();
    // Hidden `Other` nodes do not add an indentation level.
    let mut shown_depth: Vec<usize> = vec![0; tree.len()];

    let mut visit = |tree: &SyntaxTree, id: NodeId, depth: usize| {
        let node = tree.node(id);
        let parent_level = node
            .parent()
            .map(|parent| shown_depth[parent.index()])
            .unwrap_or(0);
        let hidden = config.hide_other && node.category() == Category::Other && !node.is_root();
        let level = if hidden || node.is_root() {
            parent_level
        } else {
            parent_level + 1
        };
        shown_depth[id.index()] = level;

        if hidden || depth > config.max_depth {
            return;
        }

        let _ = write!(
            out,
            "{:indent$}{}",
            "",
            node.category(),
            indent = level * config.indent_width
        );
        if let Some(span) = node.span().filter(|_| config.include_line_info) {
            let _ = write!(out, " [{}-{}]", span.start, span.end);
        }
        if config.include_fields {
            for (field, value) in node.fields() {
                let _ = write!(out, " {}={}", field, render_field(value));
            }
        }
        out.push('\n');
    };

    walk_preorder(tree, tree.root(), &mut visit);
    out
}

fn render_field(value: &FieldValue) -> String {
    match value {
        FieldValue::List(items) => format!("[{}]", items.join(", ")),
        other => other.to_string(),
    }
}

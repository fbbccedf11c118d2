//! Parsing Java text with tree-sitter, including the snippet fallback.
//!
//! Inputs are often bare methods or member lists rather than complete
//! compilation units. When a direct parse has no package, import or type
//! declarations and either reports errors or yields top-level methods, the
//! text is parsed again inside a synthetic class and that class becomes the
//! container, unless that parse is worse.

use astviz_error::{Error, ErrorKind, Result};
use tracing::{debug, warn};
use tree_sitter::{Node, Parser, Tree};

pub const SNIPPET_CLASS: &str = "__AstvizSnippet__";

const SNIPPET_OPEN: &str = "class __AstvizSnippet__ {\n";
const SNIPPET_CLOSE: &str = "\n}\n";

fn new_parser() -> Result<Parser> {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_java::LANGUAGE.into())
        .map_err(|err| {
            Error::grammar_error("failed to load the Java grammar")
                .with_operation("java::new_parser")
                .set_source(err)
        })?;
    Ok(parser)
}

fn parse_text(parser: &mut Parser, text: &str) -> Result<Tree> {
    parser.parse(text, None).ok_or_else(|| {
        Error::parse_failed("tree-sitter returned no tree").with_operation("java::parse_text")
    })
}

const UNIT_MARKERS: &[&str] = &[
    "package_declaration",
    "import_declaration",
    "module_declaration",
    "class_declaration",
    "interface_declaration",
    "enum_declaration",
    "record_declaration",
    "annotation_type_declaration",
];

/// Top-level package, import or type declarations mark a compilation unit,
/// even one with syntax errors.
fn looks_like_unit(tree: &Tree) -> bool {
    let root = tree.root_node();
    let mut cursor = root.walk();
    root.named_children(&mut cursor)
        .any(|child| UNIT_MARKERS.contains(&child.kind()))
}

fn has_top_level_method(tree: &Tree) -> bool {
    let root = tree.root_node();
    let mut cursor = root.walk();
    root.named_children(&mut cursor)
        .any(|child| child.kind() == "method_declaration")
}

/// Number of error and missing nodes in the tree.
fn error_count(tree: &Tree) -> usize {
    let mut count = 0;
    let mut stack = vec![tree.root_node()];
    while let Some(node) = stack.pop() {
        if node.is_error() || node.is_missing() {
            count += 1;
        }
        if node.has_error() {
            let mut cursor = node.walk();
            stack.extend(node.children(&mut cursor));
        }
    }
    count
}

/// A parsed Java source together with the text its nodes point into.
pub struct JavaSource {
    text: String,
    tree: Tree,
    wrapped: bool,
}

impl JavaSource {
    pub fn parse(source: &[u8]) -> Result<Self> {
        let text = std::str::from_utf8(source).map_err(|err| {
            Error::new(ErrorKind::EncodingError, "source is not valid UTF-8")
                .with_operation("java::parse")
                .set_source(err)
        })?;

        let mut parser = new_parser()?;
        let tree = parse_text(&mut parser, text)?;
        let direct_errors = error_count(&tree);
        if looks_like_unit(&tree) || (direct_errors == 0 && !has_top_level_method(&tree)) {
            if direct_errors > 0 {
                warn!(
                    errors = direct_errors,
                    "source has syntax errors, continuing with recovered tree"
                );
            }
            return Ok(Self::direct(text, tree));
        }

        debug!("source is not a compilation unit, parsing as class body declarations");
        let wrapped = format!("{SNIPPET_OPEN}{text}{SNIPPET_CLOSE}");
        let wrapped_tree = parse_text(&mut parser, &wrapped)?;
        let wrapped_errors = error_count(&wrapped_tree);
        if wrapped_errors > direct_errors {
            debug!(
                direct_errors,
                wrapped_errors,
                "class body parse is worse, keeping direct parse"
            );
            return Ok(Self::direct(text, tree));
        }
        if wrapped_errors > 0 {
            warn!(
                errors = wrapped_errors,
                "source has syntax errors, continuing with recovered tree"
            );
        }
        Ok(Self {
            text: wrapped,
            tree: wrapped_tree,
            wrapped: true,
        })
    }

    fn direct(text: &str, tree: Tree) -> Self {
        Self {
            text: text.to_string(),
            tree,
            wrapped: false,
        }
    }

    pub fn is_wrapped(&self) -> bool {
        self.wrapped
    }

    /// The top-level container: `program`, or the synthetic class for snippets.
    pub fn container(&self) -> Node<'_> {
        let root = self.tree.root_node();
        if !self.wrapped {
            return root;
        }
        let mut cursor = root.walk();
        let synthetic = root
            .named_children(&mut cursor)
            .find(|child| child.kind() == "class_declaration");
        synthetic.unwrap_or(root)
    }

    pub fn text(&self, node: &Node) -> &str {
        self.text.get(node.byte_range()).unwrap_or_default()
    }

    /// 1-based line of a row in the original input.
    pub fn line(&self, row: usize) -> u32 {
        let offset = usize::from(self.wrapped);
        (row + 1).saturating_sub(offset).max(1) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compilation_unit_is_not_wrapped() {
        let source = JavaSource::parse(b"class A { void f() {} }").unwrap();
        assert!(!source.is_wrapped());
        assert_eq!(source.container().kind(), "program");
    }

    #[test]
    fn test_member_snippet_is_wrapped() {
        let source = JavaSource::parse(b"public void f() { return; }").unwrap();
        assert!(source.is_wrapped());

        let container = source.container();
        assert_eq!(container.kind(), "class_declaration");
        let name = container.child_by_field_name("name").unwrap();
        assert_eq!(source.text(&name), SNIPPET_CLASS);
        assert_eq!(source.line(container.start_position().row + 1), 1);
    }

    #[test]
    fn test_broken_unit_is_not_wrapped() {
        let text = "package p;\nimport java.util.List;\nclass A { void f() { int x = ; } }";
        let source = JavaSource::parse(text.as_bytes()).unwrap();
        assert!(!source.is_wrapped());
        assert_eq!(source.container().kind(), "program");
        assert!(error_count(&source.tree) > 0);
    }

    #[test]
    fn test_invalid_utf8() {
        let err = JavaSource::parse(&[0x63, 0xff, 0xfe]).err().unwrap();
        assert_eq!(err.kind(), ErrorKind::EncodingError);
    }
}

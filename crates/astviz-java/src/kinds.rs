//! Mapping from tree-sitter-java node kinds to [`Category`].
//!
//! Most kinds map one-to-one. A handful depend on where the node sits: a
//! class body under `new` is an anonymous class, a declaration inside a block
//! is a statement, and so on.

use astviz_core::Category;
use tree_sitter::Node;

/// Parent kinds whose parenthesized condition is part of the statement syntax.
const CONDITION_OWNERS: &[&str] = &[
    "if_statement",
    "while_statement",
    "do_statement",
    "switch_expression",
    "synchronized_statement",
];

/// Parent kinds in which a `switch` stands as a statement.
const STATEMENT_CONTAINERS: &[&str] = &[
    "program",
    "block",
    "constructor_body",
    "switch_block_statement_group",
    "labeled_statement",
    "if_statement",
    "while_statement",
    "do_statement",
    "for_statement",
    "enhanced_for_statement",
];

const TYPE_KINDS: &[&str] = &[
    "type_identifier",
    "scoped_type_identifier",
    "generic_type",
    "array_type",
    "integral_type",
    "floating_point_type",
    "boolean_type",
];

const NUMBER_KINDS: &[&str] = &[
    "decimal_integer_literal",
    "hex_integer_literal",
    "octal_integer_literal",
    "binary_integer_literal",
    "decimal_floating_point_literal",
    "hex_floating_point_literal",
];

pub fn is_comment(node: &Node) -> bool {
    matches!(node.kind(), "line_comment" | "block_comment")
}

fn parent_kind(node: &Node) -> Option<&'static str> {
    node.parent().map(|parent| parent.kind())
}

fn first_named_kind(node: &Node) -> Option<&'static str> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .find(|child| !is_comment(child))
        .map(|child| child.kind())
}

fn has_token(node: &Node, token: &str) -> bool {
    let mut cursor = node.walk();
    node.children(&mut cursor)
        .any(|child| !child.is_named() && child.kind() == token)
}

fn field_kind(node: &Node, field: &str) -> Option<&'static str> {
    node.child_by_field_name(field).map(|child| child.kind())
}

pub fn categorize(node: &Node) -> Category {
    let kind = node.kind();
    let parent = parent_kind(node);

    match kind {
        "program" => Category::CompilationUnit,

        "class_declaration" | "interface_declaration" => match parent {
            Some("block") | Some("constructor_body") => Category::TypeDeclarationStatement,
            _ => Category::TypeDeclaration,
        },
        "enum_declaration" => Category::EnumDeclaration,
        "class_body" if parent == Some("object_creation_expression") => {
            Category::AnonymousClassDeclaration
        }
        "method_declaration" | "constructor_declaration" => Category::MethodDeclaration,
        "formal_parameter" | "spread_parameter" | "catch_formal_parameter" => {
            Category::SingleVariableDeclaration
        }
        "field_declaration" => Category::FieldDeclaration,
        "variable_declarator" if parent == Some("spread_parameter") => Category::Other,
        "variable_declarator" => Category::VariableDeclarationFragment,

        "assert_statement" => Category::AssertStatement,
        "block" | "constructor_body" => Category::Block,
        "break_statement" => Category::BreakStatement,
        "continue_statement" => Category::ContinueStatement,
        "do_statement" => Category::DoStatement,
        "enhanced_for_statement" => Category::EnhancedForStatement,
        "expression_statement" => Category::ExpressionStatement,
        "for_statement" => Category::ForStatement,
        "if_statement" => Category::IfStatement,
        "labeled_statement" => Category::LabeledStatement,
        "return_statement" => Category::ReturnStatement,
        "switch_expression" => match parent {
            Some(owner) if STATEMENT_CONTAINERS.contains(&owner) => Category::SwitchStatement,
            _ => Category::Other,
        },
        "switch_label" => Category::SwitchCase,
        "synchronized_statement" => Category::SynchronizedStatement,
        "throw_statement" => Category::ThrowStatement,
        "try_statement" | "try_with_resources_statement" => Category::TryStatement,
        "catch_clause" => Category::CatchClause,
        "local_variable_declaration" => match parent {
            Some("for_statement") => Category::VariableDeclarationExpression,
            _ => Category::VariableDeclarationStatement,
        },
        "resource" if node.child_by_field_name("type").is_some() => {
            Category::VariableDeclarationExpression
        }
        "while_statement" => Category::WhileStatement,
        "yield_statement" => Category::YieldStatement,
        "explicit_constructor_invocation" => match field_kind(node, "constructor") {
            Some("super") => Category::SuperConstructorInvocation,
            _ => Category::ConstructorInvocation,
        },

        "array_access" => Category::ArrayAccess,
        "array_creation_expression" => Category::ArrayCreation,
        "array_initializer" => Category::ArrayInitializer,
        "assignment_expression" => Category::Assignment,
        "method_reference" => categorize_method_reference(node),
        "class_literal" => Category::TypeLiteral,
        "this" if parent == Some("explicit_constructor_invocation") => Category::Other,
        "this" => Category::ThisExpression,
        "method_invocation" => match field_kind(node, "object") {
            Some("super") => Category::SuperMethodInvocation,
            _ => Category::MethodInvocation,
        },
        "field_access" => match field_kind(node, "object") {
            Some("super") => Category::SuperFieldAccess,
            _ => Category::FieldAccess,
        },
        "string_literal" | "text_block" => Category::StringLiteral,
        "unary_expression" => Category::PrefixExpression,
        "update_expression" => categorize_update(node),
        "parenthesized_expression" => match parent {
            Some(owner) if CONDITION_OWNERS.contains(&owner) => Category::Other,
            _ => Category::ParenthesizedExpression,
        },
        k if NUMBER_KINDS.contains(&k) => Category::NumberLiteral,
        "null_literal" => Category::NullLiteral,
        "lambda_expression" => Category::LambdaExpression,
        "instanceof_expression" => Category::InstanceofExpression,
        "binary_expression" => Category::InfixExpression,
        "ternary_expression" => Category::ConditionalExpression,
        "object_creation_expression" => Category::ClassInstanceCreation,
        "character_literal" => Category::CharacterLiteral,
        "cast_expression" => Category::CastExpression,
        "true" | "false" => Category::BooleanLiteral,

        _ => Category::Other,
    }
}

fn categorize_method_reference(node: &Node) -> Category {
    if has_token(node, "new") {
        return Category::CreationReference;
    }
    match first_named_kind(node) {
        Some("super") => Category::SuperMethodReference,
        Some(kind) if TYPE_KINDS.contains(&kind) => Category::TypeMethodReference,
        _ => Category::ExpressionMethodReference,
    }
}

/// `++i` is a prefix update, `i++` a postfix one.
fn categorize_update(node: &Node) -> Category {
    let mut cursor = node.walk();
    let leading_operator = node
        .children(&mut cursor)
        .next()
        .map(|child| matches!(child.kind(), "++" | "--"))
        .unwrap_or(false);
    if leading_operator {
        Category::PrefixExpression
    } else {
        Category::PostfixExpression
    }
}

//! Structured field extraction for label formatting.

use astviz_core::label::collapse_whitespace;
use astviz_core::{Category, Field, FieldValue};
use tree_sitter::Node;

use crate::kinds::is_comment;
use crate::source::JavaSource;

pub type Fields = Vec<(Field, FieldValue)>;

fn named_children<'t>(node: &Node<'t>) -> Vec<Node<'t>> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .filter(|child| !is_comment(child))
        .collect()
}

fn text(source: &JavaSource, node: &Node) -> String {
    collapse_whitespace(source.text(node))
}

fn field_text(source: &JavaSource, node: &Node, name: &str) -> Option<String> {
    node.child_by_field_name(name)
        .map(|child| text(source, &child))
}

fn field_texts(source: &JavaSource, node: &Node, name: &str) -> Vec<String> {
    let mut cursor = node.walk();
    node.children_by_field_name(name, &mut cursor)
        .map(|child| text(source, &child))
        .collect()
}

/// Every modifier written on a declaration, annotations included.
pub fn modifiers(source: &JavaSource, node: &Node) -> Vec<String> {
    modifier_nodes(node)
        .iter()
        .map(|modifier| text(source, modifier))
        .collect()
}

/// Keyword modifiers only, without annotations.
pub fn keyword_modifiers(source: &JavaSource, node: &Node) -> Vec<String> {
    modifier_nodes(node)
        .iter()
        .filter(|modifier| !modifier.kind().ends_with("annotation"))
        .map(|modifier| text(source, modifier))
        .collect()
}

fn modifier_nodes<'t>(node: &Node<'t>) -> Vec<Node<'t>> {
    let mut cursor = node.walk();
    let Some(list) = node
        .named_children(&mut cursor)
        .find(|child| child.kind() == "modifiers")
    else {
        return Vec::new();
    };
    let mut cursor = list.walk();
    list.children(&mut cursor)
        .filter(|child| !is_comment(child))
        .collect()
}

/// The expression inside a statement's `( ... )` condition.
fn condition(source: &JavaSource, node: &Node) -> Option<String> {
    let parens = node.child_by_field_name("condition").or_else(|| {
        named_children(node)
            .into_iter()
            .find(|child| child.kind() == "parenthesized_expression")
    })?;
    match named_children(&parens).first() {
        Some(inner) => Some(text(source, inner)),
        None => Some(text(source, &parens)),
    }
}

fn first_expression(source: &JavaSource, node: &Node) -> Option<String> {
    named_children(node)
        .first()
        .map(|child| text(source, child))
}

/// Declared type and name of a parameter-like node.
pub fn parameter_parts(source: &JavaSource, node: &Node) -> (Option<String>, Option<String>) {
    match node.kind() {
        "spread_parameter" => {
            let children = named_children(node);
            let ty = children
                .iter()
                .find(|child| !matches!(child.kind(), "modifiers" | "variable_declarator"))
                .map(|child| text(source, child));
            let name = children
                .iter()
                .find(|child| child.kind() == "variable_declarator")
                .and_then(|declarator| field_text(source, declarator, "name"));
            (ty, name)
        }
        "catch_formal_parameter" => {
            let ty = named_children(node)
                .into_iter()
                .find(|child| child.kind() == "catch_type")
                .map(|child| text(source, &child));
            (ty, field_text(source, node, "name"))
        }
        _ => (
            field_text(source, node, "type"),
            field_text(source, node, "name"),
        ),
    }
}

/// Parameter nodes of a method or constructor, in order.
pub fn parameters<'t>(node: &Node<'t>) -> Vec<Node<'t>> {
    node.child_by_field_name("parameters")
        .map(|list| {
            named_children(&list)
                .into_iter()
                .filter(|param| matches!(param.kind(), "formal_parameter" | "spread_parameter"))
                .collect()
        })
        .unwrap_or_default()
}

fn declared_names(source: &JavaSource, node: &Node) -> Vec<String> {
    if node.kind() == "resource" {
        return field_text(source, node, "name").into_iter().collect();
    }
    let mut cursor = node.walk();
    node.children_by_field_name("declarator", &mut cursor)
        .filter_map(|declarator| field_text(source, &declarator, "name"))
        .collect()
}

fn push_text(fields: &mut Fields, field: Field, value: Option<String>) {
    if let Some(value) = value {
        fields.push((field, FieldValue::Text(value)));
    }
}

/// Fields shown for `node` once it has been categorized as `category`.
pub fn extract(source: &JavaSource, node: &Node, category: Category) -> Fields {
    let mut fields = Fields::new();

    match category {
        Category::TypeDeclaration | Category::TypeDeclarationStatement => {
            push_text(&mut fields, Field::Name, field_text(source, node, "name"));
            let kind = if node.kind() == "interface_declaration" {
                "Interface"
            } else {
                "Class"
            };
            push_text(&mut fields, Field::Kind, Some(kind.to_string()));
        }
        Category::EnumDeclaration => {
            push_text(&mut fields, Field::Name, field_text(source, node, "name"));
        }
        Category::MethodDeclaration => {
            push_text(&mut fields, Field::Name, field_text(source, node, "name"));
            let params = parameters(node)
                .iter()
                .map(|param| text(source, param))
                .collect();
            fields.push((Field::Parameters, FieldValue::List(params)));
            push_text(&mut fields, Field::ReturnType, field_text(source, node, "type"));
            fields.push((Field::Modifiers, FieldValue::List(modifiers(source, node))));
        }
        Category::SingleVariableDeclaration => {
            let (ty, name) = parameter_parts(source, node);
            fields.push((Field::Modifiers, FieldValue::List(modifiers(source, node))));
            push_text(&mut fields, Field::Name, name);
            push_text(&mut fields, Field::Type, ty);
        }
        Category::FieldDeclaration
        | Category::VariableDeclarationStatement
        | Category::VariableDeclarationExpression => {
            fields.push((Field::Modifiers, FieldValue::List(modifiers(source, node))));
            push_text(&mut fields, Field::Type, field_text(source, node, "type"));
            fields.push((
                Field::DeclaredNames,
                FieldValue::List(declared_names(source, node)),
            ));
        }
        Category::VariableDeclarationFragment => {
            push_text(&mut fields, Field::Name, field_text(source, node, "name"));
        }
        Category::AssertStatement => {
            let parts = named_children(node);
            push_text(
                &mut fields,
                Field::Expression,
                parts.first().map(|part| text(source, part)),
            );
            push_text(
                &mut fields,
                Field::Message,
                parts.get(1).map(|part| text(source, part)),
            );
        }
        Category::DoStatement
        | Category::IfStatement
        | Category::SwitchStatement
        | Category::WhileStatement => {
            push_text(&mut fields, Field::Condition, condition(source, node));
        }
        Category::SynchronizedStatement => {
            push_text(&mut fields, Field::Expression, condition(source, node));
        }
        Category::EnhancedForStatement => {
            push_text(&mut fields, Field::Expression, field_text(source, node, "value"));
        }
        Category::ForStatement => {
            push_text(&mut fields, Field::Condition, field_text(source, node, "condition"));
            fields.push((
                Field::Updaters,
                FieldValue::List(field_texts(source, node, "update")),
            ));
        }
        Category::ExpressionStatement
        | Category::ReturnStatement
        | Category::ThrowStatement
        | Category::YieldStatement => {
            push_text(&mut fields, Field::Expression, first_expression(source, node));
        }
        Category::LabeledStatement => {
            let label = named_children(node)
                .into_iter()
                .find(|child| child.kind() == "identifier")
                .map(|child| text(source, &child));
            push_text(&mut fields, Field::Label, label);
        }
        Category::SwitchCase => {
            let label = source.text(node).trim_start();
            fields.push((
                Field::IsDefault,
                FieldValue::Flag(label.starts_with("default")),
            ));
            let cases = named_children(node)
                .iter()
                .map(|child| text(source, child))
                .collect();
            fields.push((Field::CaseExpressions, FieldValue::List(cases)));
        }
        _ => {}
    }
    fields
}

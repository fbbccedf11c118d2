//! Human-readable node labels.
//!
//! A short label is just the category tag. A detailed label appends the
//! category's fixed field set, one `Title: value` line per field.

use std::fmt::Write;

use crate::category::Category;
use crate::tree::{Field, FieldValue, SourceNode};

#[derive(Debug, Clone, Copy)]
struct FieldSpec {
    title: &'static str,
    field: Field,
}

const fn spec(title: &'static str, field: Field) -> FieldSpec {
    FieldSpec { title, field }
}

const NONE: &[FieldSpec] = &[];
const CONDITION: &[FieldSpec] = &[spec("Condition", Field::Condition)];
const EXPRESSION: &[FieldSpec] = &[spec("Expression", Field::Expression)];
const TYPE_DECLARATION: &[FieldSpec] = &[spec("Name", Field::Name), spec("Kind", Field::Kind)];
const METHOD_DECLARATION: &[FieldSpec] = &[
    spec("Name", Field::Name),
    spec("Parameters", Field::Parameters),
    spec("Return Type", Field::ReturnType),
];
const SINGLE_VARIABLE: &[FieldSpec] = &[
    spec("Modifier", Field::Modifiers),
    spec("Name", Field::Name),
    spec("Type", Field::Type),
];
const ASSERT: &[FieldSpec] = &[
    spec("Expression", Field::Expression),
    spec("Message", Field::Message),
];
const FOR: &[FieldSpec] = &[
    spec("Condition", Field::Condition),
    spec("Update", Field::Updaters),
];
const LABELED: &[FieldSpec] = &[spec("Label", Field::Label)];
const RETURN: &[FieldSpec] = &[spec("Returns", Field::Expression)];
const SWITCH_CASE: &[FieldSpec] = &[
    spec("isDefaultCase", Field::IsDefault),
    spec("Condition", Field::CaseExpressions),
];
const SYNCHRONIZED: &[FieldSpec] = &[spec("Lock", Field::Expression)];
const THROW: &[FieldSpec] = &[spec("Throws", Field::Expression)];
const VARIABLE_STATEMENT: &[FieldSpec] = &[
    spec("Modifier", Field::Modifiers),
    spec("Type", Field::Type),
    spec("Name", Field::DeclaredNames),
];

fn field_specs(category: Category) -> &'static [FieldSpec] {
    match category {
        Category::TypeDeclaration => TYPE_DECLARATION,
        Category::MethodDeclaration => METHOD_DECLARATION,
        Category::SingleVariableDeclaration => SINGLE_VARIABLE,
        Category::AssertStatement => ASSERT,
        Category::DoStatement
        | Category::IfStatement
        | Category::SwitchStatement
        | Category::WhileStatement => CONDITION,
        Category::EnhancedForStatement | Category::ExpressionStatement => EXPRESSION,
        Category::ForStatement => FOR,
        Category::LabeledStatement => LABELED,
        Category::ReturnStatement => RETURN,
        Category::SwitchCase => SWITCH_CASE,
        Category::SynchronizedStatement => SYNCHRONIZED,
        Category::ThrowStatement => THROW,
        Category::VariableDeclarationStatement => VARIABLE_STATEMENT,
        Category::CompilationUnit
        | Category::EnumDeclaration
        | Category::AnonymousClassDeclaration
        | Category::FieldDeclaration
        | Category::VariableDeclarationFragment
        | Category::Block
        | Category::BreakStatement
        | Category::ContinueStatement
        | Category::TryStatement
        | Category::CatchClause
        | Category::TypeDeclarationStatement
        | Category::YieldStatement
        | Category::ConstructorInvocation
        | Category::SuperConstructorInvocation
        | Category::ArrayAccess
        | Category::ArrayCreation
        | Category::ArrayInitializer
        | Category::Assignment
        | Category::VariableDeclarationExpression
        | Category::TypeMethodReference
        | Category::TypeLiteral
        | Category::ThisExpression
        | Category::SuperMethodInvocation
        | Category::SuperMethodReference
        | Category::SuperFieldAccess
        | Category::StringLiteral
        | Category::PrefixExpression
        | Category::PostfixExpression
        | Category::ParenthesizedExpression
        | Category::NumberLiteral
        | Category::NullLiteral
        | Category::MethodInvocation
        | Category::LambdaExpression
        | Category::InstanceofExpression
        | Category::InfixExpression
        | Category::FieldAccess
        | Category::ExpressionMethodReference
        | Category::CreationReference
        | Category::ConditionalExpression
        | Category::ClassInstanceCreation
        | Category::CharacterLiteral
        | Category::CastExpression
        | Category::BooleanLiteral
        | Category::Other => NONE,
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LabelFormatter {
    detailed: bool,
}

impl LabelFormatter {
    pub fn new(detailed: bool) -> Self {
        Self { detailed }
    }

    pub fn is_detailed(&self) -> bool {
        self.detailed
    }

    /// Never fails: absent fields print an empty value.
    pub fn format(&self, node: &SourceNode) -> String {
        let category = node.category();
        let mut label = String::from(category.as_str());
        if !self.detailed {
            return label;
        }

        for spec in field_specs(category) {
            let value = node.field(spec.field).map(render_value).unwrap_or_default();
            // Writing into a String cannot fail.
            let _ = write!(label, "\n{}: {}", spec.title, value);
        }
        label
    }
}

fn render_value(value: &FieldValue) -> String {
    match value {
        FieldValue::Text(text) => collapse_whitespace(text),
        FieldValue::List(items) => items
            .iter()
            .map(|item| collapse_whitespace(item))
            .collect::<Vec<_>>()
            .join(", "),
        FieldValue::Flag(flag) => flag.to_string(),
    }
}

/// Collapse every whitespace run into a single space.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

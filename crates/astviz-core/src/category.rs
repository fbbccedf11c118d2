//! Syntactic categories of source nodes.
//!
//! A category is the closed tag the parser collaborator attaches to every node
//! it projects. Names follow the Eclipse JDT DOM vocabulary because that is what
//! users write in the config store (`[IfStatement] visit = true`).

use serde::Serialize;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::style::Shape;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    EnumIter,
    EnumString,
    IntoStaticStr,
    Display,
    Serialize,
)]
pub enum Category {
    /// The file-level container. Never visitable.
    CompilationUnit,

    // Declarations
    TypeDeclaration,
    EnumDeclaration,
    MethodDeclaration,
    AnonymousClassDeclaration,
    SingleVariableDeclaration,
    FieldDeclaration,
    VariableDeclarationFragment,

    // Statements
    AssertStatement,
    Block,
    BreakStatement,
    ContinueStatement,
    DoStatement,
    EnhancedForStatement,
    ExpressionStatement,
    ForStatement,
    IfStatement,
    LabeledStatement,
    ReturnStatement,
    SwitchStatement,
    SwitchCase,
    SynchronizedStatement,
    ThrowStatement,
    TryStatement,
    CatchClause,
    TypeDeclarationStatement,
    VariableDeclarationStatement,
    WhileStatement,
    YieldStatement,
    ConstructorInvocation,
    SuperConstructorInvocation,

    // Expressions
    ArrayAccess,
    ArrayCreation,
    ArrayInitializer,
    Assignment,
    VariableDeclarationExpression,
    TypeMethodReference,
    TypeLiteral,
    ThisExpression,
    SuperMethodInvocation,
    SuperMethodReference,
    SuperFieldAccess,
    StringLiteral,
    PrefixExpression,
    PostfixExpression,
    ParenthesizedExpression,
    NumberLiteral,
    NullLiteral,
    MethodInvocation,
    LambdaExpression,
    InstanceofExpression,
    InfixExpression,
    FieldAccess,
    ExpressionMethodReference,
    CreationReference,
    ConditionalExpression,
    ClassInstanceCreation,
    CharacterLiteral,
    CastExpression,
    BooleanLiteral,

    /// Syntax with no named category (identifiers, modifiers, argument lists, ...).
    /// Never visitable, always a transparent splice.
    Other,
}

impl Category {
    /// Category name as written in the config store.
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }

    /// Whether the config store can turn this category on.
    pub fn is_visitable(&self) -> bool {
        !matches!(self, Category::CompilationUnit | Category::Other)
    }

    /// The coarse expression-like class gated by `output.includeExpressions`.
    pub fn is_expression_like(&self) -> bool {
        matches!(
            self,
            Category::ArrayAccess
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
        )
    }

    /// Shape and color written into a freshly created config store.
    ///
    /// Categories without a default here still resolve to `box`/`white`.
    pub fn default_style(&self) -> Option<(Shape, &'static str)> {
        let style = match self {
            Category::TypeDeclaration => (Shape::Box, "green"),
            Category::MethodDeclaration => (Shape::Box, "aqua"),
            Category::AnonymousClassDeclaration => (Shape::House, "darkgoldenrod1"),
            Category::SingleVariableDeclaration => (Shape::Circle, "darkgreen"),
            Category::AssertStatement => (Shape::Star, "teal"),
            Category::Block => (Shape::Square, "coral"),
            Category::BreakStatement => (Shape::Trapezium, "orange"),
            Category::ContinueStatement => (Shape::InvTriangle, "sienna"),
            Category::DoStatement => (Shape::Hexagon, "yellow"),
            Category::EnhancedForStatement => (Shape::Parallelogram, "red"),
            Category::ExpressionStatement => (Shape::Triangle, "fuchsia"),
            Category::ForStatement => (Shape::Parallelogram, "red"),
            Category::IfStatement => (Shape::Diamond, "purple"),
            Category::LabeledStatement => (Shape::Pentagon, "lightpink"),
            Category::ReturnStatement => (Shape::Cds, "hotpink"),
            Category::SwitchStatement => (Shape::Diamond, "purple"),
            Category::SynchronizedStatement => (Shape::Octagon, "palegreen"),
            Category::ThrowStatement => (Shape::InvTrapezium, "tan"),
            Category::TryStatement => (Shape::InvHouse, "honeydew4"),
            Category::CatchClause => (Shape::Septagon, "firebrick"),
            Category::TypeDeclarationStatement => (Shape::DoubleOctagon, "royalblue"),
            Category::VariableDeclarationStatement => (Shape::Component, "brown"),
            Category::WhileStatement => (Shape::Hexagon, "yellow"),
            Category::YieldStatement => (Shape::RArrow, "blue"),
            _ => return None,
        };
        Some(style)
    }

    /// All categories a config store may mention.
    pub fn visitable() -> impl Iterator<Item = Category> {
        Category::iter().filter(|category| category.is_visitable())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_category_names_round_trip_through_config_keys() {
        assert_eq!(Category::IfStatement.as_str(), "IfStatement");
        assert_eq!(
            Category::from_str("VariableDeclarationStatement").unwrap(),
            Category::VariableDeclarationStatement
        );
        assert!(Category::from_str("IfStatements").is_err());
    }

    #[test]
    fn test_container_and_other_are_not_visitable() {
        assert!(!Category::CompilationUnit.is_visitable());
        assert!(!Category::Other.is_visitable());
        assert!(Category::Block.is_visitable());
        assert_eq!(Category::visitable().count(), Category::iter().count() - 2);
    }

    #[test]
    fn test_expression_class_membership() {
        assert!(Category::MethodInvocation.is_expression_like());
        assert!(Category::LambdaExpression.is_expression_like());
        assert!(Category::VariableDeclarationExpression.is_expression_like());
        assert!(!Category::ExpressionStatement.is_expression_like());
        assert!(!Category::SwitchCase.is_expression_like());
        assert!(!Category::ConstructorInvocation.is_expression_like());
        assert_eq!(
            Category::iter().filter(|c| c.is_expression_like()).count(),
            29
        );
    }

    #[test]
    fn test_default_styles() {
        assert_eq!(
            Category::IfStatement.default_style(),
            Some((Shape::Diamond, "purple"))
        );
        assert_eq!(Category::NumberLiteral.default_style(), None);
    }
}

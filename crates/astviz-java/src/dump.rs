//! Flat export of the first method in a snippet.
//!
//! Unlike the graph export this applies no filtering: it reports the method
//! signature and each direct statement of its body, nothing deeper.

use astviz_core::Category;
use astviz_core::label::collapse_whitespace;
use astviz_error::{Error, Result};
use serde::Serialize;
use tree_sitter::Node;

use crate::fields::{keyword_modifiers, parameter_parts, parameters};
use crate::kinds::{categorize, is_comment};
use crate::source::JavaSource;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParameterDump {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatementDump {
    #[serde(rename = "type")]
    pub category: Category,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodDump {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_type: Option<String>,
    pub constructor: bool,
    pub varargs: bool,
    pub modifiers: Vec<String>,
    pub parameters: Vec<ParameterDump>,
    /// Absent for methods without a body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statements: Option<Vec<StatementDump>>,
}

impl MethodDump {
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|err| {
            Error::serialization_failed("failed to serialize method dump")
                .with_operation("dump::to_json")
                .set_source(err)
        })
    }
}

fn is_method(node: &Node) -> bool {
    matches!(node.kind(), "method_declaration" | "constructor_declaration")
}

fn first_method<'t>(container: Node<'t>) -> Option<Node<'t>> {
    let mut stack = vec![container];
    while let Some(node) = stack.pop() {
        if is_method(&node) {
            return Some(node);
        }
        let mut cursor = node.walk();
        let children: Vec<Node<'t>> = node.named_children(&mut cursor).collect();
        stack.extend(children.into_iter().rev());
    }
    None
}

pub fn dump_first_method(source: &[u8]) -> Result<MethodDump> {
    let parsed = JavaSource::parse(source)?;
    let method = first_method(parsed.container()).ok_or_else(|| {
        Error::parse_failed("no method declaration found").with_operation("dump::first_method")
    })?;

    let text = |node: &Node| collapse_whitespace(parsed.text(node));
    let params = parameters(&method);

    let parameter_dumps = params
        .iter()
        .map(|param| {
            let (ty, name) = parameter_parts(&parsed, param);
            ParameterDump {
                name: name.unwrap_or_default(),
                ty: ty.unwrap_or_default(),
            }
        })
        .collect();

    let statements = method.child_by_field_name("body").map(|body| {
        let mut cursor = body.walk();
        body.named_children(&mut cursor)
            .filter(|child| !is_comment(child))
            .map(|statement| StatementDump {
                category: categorize(&statement),
                text: text(&statement),
            })
            .collect()
    });

    Ok(MethodDump {
        name: method
            .child_by_field_name("name")
            .map(|name| text(&name))
            .unwrap_or_default(),
        return_type: method.child_by_field_name("type").map(|ty| text(&ty)),
        constructor: method.kind() == "constructor_declaration",
        varargs: params
            .last()
            .is_some_and(|param| param.kind() == "spread_parameter"),
        modifiers: keyword_modifiers(&parsed, &method),
        parameters: parameter_dumps,
        statements,
    })
}

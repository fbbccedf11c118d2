//! Java support for astviz.
//!
//! Parses Java with tree-sitter-java and projects the result into the
//! categorized [`SyntaxTree`] the graph engine consumes.

mod dump;
mod fields;
mod kinds;
mod parse;
mod source;

pub use dump::{MethodDump, ParameterDump, StatementDump, dump_first_method};
pub use kinds::categorize;
pub use parse::{parse_file, parse_source};
pub use source::{JavaSource, SNIPPET_CLASS};

use astviz_core::{LanguageTrait, SyntaxTree};
use astviz_error::Result;

#[derive(Debug, Default, Clone, Copy)]
pub struct LangJava;

impl LanguageTrait for LangJava {
    fn name() -> &'static str {
        "java"
    }

    fn supported_extensions() -> &'static [&'static str] {
        &["java"]
    }

    fn parse(source: &[u8]) -> Result<SyntaxTree> {
        parse_source(source)
    }

    fn flat_dump(source: &[u8]) -> Result<String> {
        dump_first_method(source)?.to_json()
    }
}

pub mod category;
pub mod config;
pub mod file;
pub mod graph;
pub mod label;
pub mod lang_def;
pub mod policy;
pub mod printer;
pub mod resolver;
pub mod style;
pub mod tree;
pub mod visit;
pub mod walker;

pub use astviz_error::{Error, ErrorKind, ErrorScope, Result};

pub use category::Category;
pub use config::{CanvasSize, CategoryStyle, ConfigFile, ConfigStore, GlobalConfig, NodeSize};
pub use file::SourceFile;
pub use graph::{Edge, OutputGraph, OutputId, OutputNode};
pub use label::LabelFormatter;
pub use lang_def::LanguageTrait;
pub use policy::{NodePolicy, PolicyEntry};
pub use printer::{PrintConfig, render_syntax_tree};
pub use resolver::AncestorResolver;
pub use style::Shape;
pub use tree::{Field, FieldValue, LineSpan, NodeId, SourceNode, SyntaxTree};
pub use visit::{SyntaxVisitor, walk_preorder};
pub use walker::{TreeWalker, build_output_graph};

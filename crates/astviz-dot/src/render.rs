//! DOT emission for an [`OutputGraph`].

use astviz_core::{CanvasSize, GlobalConfig, OutputGraph, OutputId, OutputNode};
use tracing::debug;

use crate::dot::DotBuilder;

/// Resolution used to convert the pixel canvas into Graphviz inches.
pub const DOT_DPI: u32 = 72;

/// Canvas attributes applied to the whole graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasOptions {
    pub canvas: CanvasSize,
    pub dpi: u32,
}

impl CanvasOptions {
    pub fn new(canvas: CanvasSize) -> Self {
        Self {
            canvas,
            dpi: DOT_DPI,
        }
    }

    pub fn from_config(config: &GlobalConfig) -> Self {
        Self::new(config.canvas)
    }

    /// Graphviz `size` attribute: the canvas in inches, forced to fill.
    pub fn size_attr(&self) -> String {
        let dpi = f64::from(self.dpi.max(1));
        format!(
            "{:.2},{:.2}!",
            f64::from(self.canvas.width) / dpi,
            f64::from(self.canvas.height) / dpi
        )
    }
}

fn node_id(id: OutputId) -> String {
    format!("n{id}")
}

fn write_node(builder: &mut DotBuilder, node: &OutputNode) {
    let width = node.size.width.to_string();
    let height = node.size.height.to_string();
    let mut attrs: Vec<(&str, &str)> = vec![
        ("label", node.label.as_str()),
        ("shape", node.shape.as_str()),
        ("color", node.color.as_str()),
    ];
    if node.filled {
        attrs.push(("style", "filled"));
        attrs.push(("fillcolor", node.color.as_str()));
    } else {
        attrs.push(("style", "solid"));
    }
    attrs.push(("width", &width));
    attrs.push(("height", &height));
    attrs.push(("fixedsize", "true"));
    builder.node_full(&node_id(node.id), &attrs);
}

/// Render the graph as DOT, nodes and edges in insertion order.
pub fn render_dot(graph: &OutputGraph, options: &CanvasOptions) -> String {
    let mut builder = DotBuilder::new("AST");
    builder
        .attr("dpi", &options.dpi.to_string())
        .attr("size", &options.size_attr())
        .blank();

    for node in graph.nodes() {
        write_node(&mut builder, node);
    }
    if !graph.edges().is_empty() {
        builder.blank();
    }
    for edge in graph.edges() {
        builder.edge(&node_id(edge.from), &node_id(edge.to));
    }

    debug!(
        nodes = graph.len(),
        edges = graph.edges().len(),
        "rendered dot graph"
    );
    builder.build()
}

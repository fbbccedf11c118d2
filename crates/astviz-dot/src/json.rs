//! Serialized graph description for external renderers.

use astviz_core::OutputGraph;
use astviz_error::{Error, Result};

/// Pretty JSON with `nodes` (id, category, label and style) and `edges`.
pub fn render_json(graph: &OutputGraph) -> Result<String> {
    serde_json::to_string_pretty(graph).map_err(|err| {
        Error::serialization_failed("failed to serialize output graph")
            .with_operation("json::render_json")
            .set_source(err)
    })
}

//! Rendering of output graphs: DOT text, JSON descriptions and Graphviz images.

pub mod dot;
pub mod graphviz;
pub mod json;
pub mod render;

pub use graphviz::{GraphvizRenderer, ImageFormat};
pub use json::render_json;
pub use render::{CanvasOptions, render_dot};

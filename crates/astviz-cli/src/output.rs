//! Artifact writing.

use std::fs;
use std::path::{Path, PathBuf};

use astviz_core::{GlobalConfig, OutputGraph};
use astviz_dot::{CanvasOptions, GraphvizRenderer, render_dot, render_json};
use astviz_error::{Error, Result};
use tracing::info;

use crate::options::{AstvizOptions, OutputFormat};

pub fn artifact_path(dir: &Path, stem: &str, extension: &str) -> PathBuf {
    dir.join(format!("{stem}.{extension}"))
}

pub fn write_text(path: &Path, text: &str) -> Result<()> {
    fs::write(path, text).map_err(|err| {
        Error::from(err)
            .with_operation("output::write")
            .with_context("path", path.display().to_string())
    })?;
    info!(path = %path.display(), bytes = text.len(), "output written");
    Ok(())
}

/// Write the graph of one source file in the requested format.
pub fn write_graph(
    opts: &AstvizOptions,
    config: &GlobalConfig,
    graph: &OutputGraph,
    stem: &str,
) -> Result<PathBuf> {
    let path = artifact_path(&opts.output_dir, stem, opts.format.extension());
    match opts.format {
        OutputFormat::Json => write_text(&path, &render_json(graph)?)?,
        OutputFormat::Dot => {
            let dot = render_dot(graph, &CanvasOptions::from_config(config));
            write_text(&path, &dot)?;
        }
        OutputFormat::Png | OutputFormat::Svg => {
            let format = opts.format.image_format().ok_or_else(|| {
                Error::invariant_violation("image output without an image format")
                    .with_operation("output::write_graph")
            })?;
            let dot = render_dot(graph, &CanvasOptions::from_config(config));
            GraphvizRenderer::new().render(&dot, format, &path)?;
        }
    }
    Ok(path)
}

/// Write a flat method dump next to where the graph would go.
pub fn write_dump(opts: &AstvizOptions, stem: &str, json: &str) -> Result<PathBuf> {
    let path = artifact_path(&opts.output_dir, stem, "json");
    write_text(&path, json)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::InputSource;
    use astviz_error::ErrorKind;
    use pretty_assertions::assert_eq;

    fn options(dir: &Path, format: OutputFormat) -> AstvizOptions {
        AstvizOptions {
            input: InputSource::Dir(dir.to_path_buf()),
            output_dir: dir.to_path_buf(),
            config: dir.join("astviz.toml"),
            format,
            dump: false,
            print_tree: false,
        }
    }

    #[test]
    fn test_artifact_path() {
        assert_eq!(
            artifact_path(Path::new("out"), "Hello", "png"),
            PathBuf::from("out/Hello.png")
        );
    }

    #[test]
    fn test_write_dot_and_json() {
        let dir = tempfile::tempdir().unwrap();
        let graph = OutputGraph::new();
        let config = GlobalConfig::default();

        let dot =
            write_graph(&options(dir.path(), OutputFormat::Dot), &config, &graph, "A").unwrap();
        assert_eq!(dot, dir.path().join("A.dot"));
        assert!(fs::read_to_string(&dot).unwrap().starts_with("digraph AST {"));

        let json =
            write_graph(&options(dir.path(), OutputFormat::Json), &config, &graph, "A").unwrap();
        assert_eq!(json, dir.path().join("A.json"));
    }

    #[test]
    fn test_unwritable_target() {
        let dir = tempfile::tempdir().unwrap();
        let err = write_text(&dir.path().join("missing").join("A.dot"), "digraph AST {}")
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::FileNotFound);
    }
}

//! Image rendering through the Graphviz `dot` executable.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use astviz_error::{Error, Result};
use strum_macros::{Display, EnumString, IntoStaticStr};
use tracing::{debug, info};

/// Image formats the renderer can ask Graphviz for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum ImageFormat {
    Png,
    Svg,
}

impl ImageFormat {
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }

    pub fn extension(&self) -> &'static str {
        self.as_str()
    }
}

/// Runs `dot -T<format> -o <path>` with the DOT text on stdin.
#[derive(Debug, Clone)]
pub struct GraphvizRenderer {
    program: PathBuf,
}

impl Default for GraphvizRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphvizRenderer {
    pub fn new() -> Self {
        Self::with_program("dot")
    }

    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn render(&self, dot: &str, format: ImageFormat, path: &Path) -> Result<()> {
        let failed = |message: String| {
            Error::render_failed(message)
                .with_operation("graphviz::render")
                .with_context("path", path.display().to_string())
        };

        debug!(program = %self.program.display(), %format, path = %path.display(), "spawning graphviz");
        let mut child = Command::new(&self.program)
            .arg(format!("-T{format}"))
            .arg("-o")
            .arg(path)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|err| {
                failed(format!("cannot start '{}'", self.program.display())).set_source(err)
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            // A broken pipe here means the process already exited; its status says why.
            if let Err(err) = stdin.write_all(dot.as_bytes()) {
                debug!(error = %err, "failed to feed dot input");
            }
        }

        let output = child
            .wait_with_output()
            .map_err(|err| failed("graphviz did not finish".to_string()).set_source(err))?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(failed(format!(
                "graphviz exited with {}: {}",
                output.status,
                stderr.trim()
            ))
            .with_context("stderr", stderr.trim().to_string()));
        }

        info!(path = %path.display(), "rendered image");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use astviz_error::ErrorKind;
    use std::str::FromStr;

    #[test]
    fn test_format_names() {
        assert_eq!(ImageFormat::Png.as_str(), "png");
        assert_eq!(ImageFormat::Svg.to_string(), "svg");
        assert_eq!(ImageFormat::from_str("svg").unwrap(), ImageFormat::Svg);
    }

    #[test]
    fn test_missing_program() {
        let dir = tempfile::tempdir().unwrap();
        let renderer = GraphvizRenderer::with_program(dir.path().join("no-such-dot"));
        let err = renderer
            .render("digraph AST {}\n", ImageFormat::Png, &dir.path().join("a.png"))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::RenderFailed);
    }

    #[cfg(unix)]
    #[test]
    fn test_nonzero_exit() {
        let dir = tempfile::tempdir().unwrap();
        let renderer = GraphvizRenderer::with_program("false");
        let err = renderer
            .render("digraph AST {}\n", ImageFormat::Svg, &dir.path().join("a.svg"))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::RenderFailed);
        assert!(!dir.path().join("a.svg").exists());
    }
}

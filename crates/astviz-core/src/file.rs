//! Source file handling.
use std::fs;
use std::path::{Path, PathBuf};

use astviz_error::{Error, Result};

#[derive(Debug, Clone)]
pub struct SourceFile {
    path: PathBuf,
    content: Vec<u8>,
}

impl SourceFile {
    pub fn new_file(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let content = fs::read(&path).map_err(|err| {
            Error::from(err)
                .with_operation("file::read")
                .with_context("path", path.display().to_string())
        })?;
        Ok(Self { path, content })
    }

    pub fn new_source(path: impl Into<PathBuf>, content: Vec<u8>) -> Self {
        Self {
            path: path.into(),
            content,
        }
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name for progress messages, e.g. `Snippet.java`.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    /// Base name used for output artifacts, e.g. `Snippet`.
    pub fn stem(&self) -> String {
        self.path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "out".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use astviz_error::ErrorKind;

    #[test]
    fn test_names() {
        let file = SourceFile::new_source("src/Snippet.java", b"class A {}".to_vec());
        assert_eq!(file.file_name(), "Snippet.java");
        assert_eq!(file.stem(), "Snippet");
        assert_eq!(file.content(), b"class A {}");
    }

    #[test]
    fn test_read_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("A.java");
        fs::write(&path, "class A {}").unwrap();

        let file = SourceFile::new_file(&path).unwrap();
        assert_eq!(file.path(), path.as_path());
        assert_eq!(file.content(), b"class A {}");
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = SourceFile::new_file(dir.path().join("Missing.java")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::FileNotFound);
        assert_eq!(err.operation(), "file::read");
    }
}

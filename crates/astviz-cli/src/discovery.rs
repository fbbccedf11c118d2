//! Source file discovery.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::Instant;

use ignore::WalkBuilder;
use tracing::{debug, info};

use astviz_error::{Error, Result};

use crate::options::InputSource;

fn has_extension(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|want| want.eq_ignore_ascii_case(ext)))
}

/// Regular files under `dir` with one of `extensions`, sorted by path.
///
/// Every file is considered, hidden and git-ignored ones included. Symbolic
/// links are not followed.
pub fn walk_dir(dir: &Path, extensions: &[&str]) -> Result<Vec<PathBuf>> {
    let start = Instant::now();
    let path_display = dir.display().to_string();

    let mut builder = WalkBuilder::new(dir);
    builder.standard_filters(false).follow_links(false);

    let mut seen = HashSet::new();
    let mut files = Vec::new();
    for entry in builder.build() {
        let entry = entry.map_err(|err| {
            Error::traversal_failed(&path_display, format!("failed to walk directory: {err}"))
                .with_operation("discovery::walk_dir")
                .set_source(err)
        })?;

        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }
        let path = entry.into_path();
        if has_extension(&path, extensions) && seen.insert(path.clone()) {
            files.push(path);
        }
    }
    files.sort();

    info!(
        dir = %path_display,
        files = files.len(),
        secs = start.elapsed().as_secs_f64(),
        "file discovery"
    );
    Ok(files)
}

/// Files to process for an input source.
pub fn discover_files(input: &InputSource, extensions: &[&str]) -> Result<Vec<PathBuf>> {
    match input {
        InputSource::File(path) => {
            debug!(path = %path.display(), "single input file");
            Ok(vec![path.clone()])
        }
        InputSource::Dir(dir) => walk_dir(dir, extensions),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;

    #[test]
    fn test_walk_dir_sorted_and_filtered() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("b/nested")).unwrap();
        fs::create_dir_all(root.join(".hidden")).unwrap();
        fs::write(root.join("b/nested/Z.java"), "class Z {}").unwrap();
        fs::write(root.join("A.java"), "class A {}").unwrap();
        fs::write(root.join("B.JAVA"), "class B {}").unwrap();
        fs::write(root.join("notes.txt"), "notes").unwrap();
        fs::write(root.join(".hidden/H.java"), "class H {}").unwrap();
        fs::create_dir_all(root.join("Dir.java")).unwrap();

        let files = walk_dir(root, &["java"]).unwrap();
        let relative: Vec<PathBuf> = files
            .iter()
            .map(|path| path.strip_prefix(root).unwrap().to_path_buf())
            .collect();
        assert_eq!(
            relative,
            vec![
                PathBuf::from(".hidden/H.java"),
                PathBuf::from("A.java"),
                PathBuf::from("B.JAVA"),
                PathBuf::from("b/nested/Z.java"),
            ]
        );
    }

    #[test]
    fn test_single_file() {
        let input = InputSource::File(PathBuf::from("A.java"));
        assert_eq!(
            discover_files(&input, &["java"]).unwrap(),
            vec![PathBuf::from("A.java")]
        );
    }

    #[test]
    fn test_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let err = walk_dir(&dir.path().join("missing"), &["java"]).unwrap_err();
        assert_eq!(err.kind(), astviz_error::ErrorKind::TraversalFailed);
    }
}

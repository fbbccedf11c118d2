//! Per-file processing: read, parse, build, write.

use std::path::{Path, PathBuf};
use std::time::Instant;

use astviz_core::{
    GlobalConfig, LanguageTrait, PrintConfig, SourceFile, SyntaxTree, build_output_graph,
    render_syntax_tree,
};
use astviz_error::{Error, Result};
use tracing::{error, info};

use crate::options::AstvizOptions;
use crate::output::{write_dump, write_graph};

/// Outcome of a batch. Failures never stop the remaining files.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub generated: Vec<PathBuf>,
    pub failed: Vec<(PathBuf, Error)>,
}

impl BatchReport {
    pub fn total(&self) -> usize {
        self.generated.len() + self.failed.len()
    }

    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

fn print_tree(tree: &SyntaxTree) {
    println!("{}", render_syntax_tree(tree, &PrintConfig::default()));
}

/// Process one file and return the artifact written for it.
pub fn process_file<L: LanguageTrait>(
    opts: &AstvizOptions,
    config: &GlobalConfig,
    path: &Path,
) -> Result<PathBuf> {
    let file = SourceFile::new_file(path)?;
    let stem = file.stem();

    if opts.dump {
        if opts.print_tree {
            print_tree(&L::parse(file.content())?);
        }
        let json = L::flat_dump(file.content())?;
        return write_dump(opts, &stem, &json);
    }

    let tree = L::parse(file.content())?;
    if opts.print_tree {
        print_tree(&tree);
    }
    let graph = build_output_graph(&tree, config);
    info!(
        path = %path.display(),
        source_nodes = tree.len(),
        graph_nodes = graph.len(),
        "built output graph"
    );
    write_graph(opts, config, &graph, &stem)
}

/// Process files one at a time, reporting each failure and moving on.
pub fn process_files<L: LanguageTrait>(
    opts: &AstvizOptions,
    config: &GlobalConfig,
    files: &[PathBuf],
) -> BatchReport {
    let start = Instant::now();
    let mut report = BatchReport::default();

    for path in files {
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        println!("Creating AST for {name}");
        match process_file::<L>(opts, config, path) {
            Ok(artifact) => {
                println!("Generated AST for {name}");
                report.generated.push(artifact);
            }
            Err(err) => {
                eprintln!("Failed to generate AST for {name}: {err}");
                error!(file = %name, error = %err, "file failed");
                report.failed.push((path.clone(), err));
            }
        }
    }

    info!(
        lang = L::name(),
        files = report.total(),
        failed = report.failed.len(),
        secs = start.elapsed().as_secs_f64(),
        "batch complete"
    );
    report
}

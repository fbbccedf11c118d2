//! astviz command-line interface.
//!
pub mod discovery;
pub mod exit;
pub mod options;
pub mod output;
pub mod pipeline;

use astviz_core::{ConfigStore, LanguageTrait};
use astviz_error::Result;
use tracing::info;

pub use exit::ExitStatus;
pub use options::{AstvizOptions, Cli, InputSource, OutputFormat};
pub use pipeline::{BatchReport, process_file, process_files};

/// Main entry point once the options are validated.
///
/// Configuration and discovery failures end the run; per-file failures are
/// collected in the report.
pub fn run_main<L: LanguageTrait>(opts: &AstvizOptions) -> Result<BatchReport> {
    let config = ConfigStore::new(&opts.config).load_or_create()?;
    let files = discovery::discover_files(&opts.input, L::supported_extensions())?;
    if files.is_empty() {
        info!(input = %opts.input.path().display(), "no source files found");
    }
    Ok(process_files::<L>(opts, &config, &files))
}

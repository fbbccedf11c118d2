//! Command-line surface and validated run options.

use std::path::{Path, PathBuf};

use astviz_core::config::DEFAULT_CONFIG_FILE;
use astviz_dot::ImageFormat;
use astviz_error::{Error, Result};
use clap::{Parser, ValueEnum};

/// Context key naming which input rule a usage error broke.
pub const INPUT_RULE: &str = "input";

/// Artifact written for each input file.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Graphviz source text.
    Dot,
    /// Serialized graph description.
    Json,
    /// PNG image rendered by Graphviz.
    #[default]
    Png,
    /// SVG image rendered by Graphviz.
    Svg,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Dot => "dot",
            OutputFormat::Json => "json",
            OutputFormat::Png => "png",
            OutputFormat::Svg => "svg",
        }
    }

    pub fn image_format(&self) -> Option<ImageFormat> {
        match self {
            OutputFormat::Png => Some(ImageFormat::Png),
            OutputFormat::Svg => Some(ImageFormat::Svg),
            OutputFormat::Dot | OutputFormat::Json => None,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "astviz",
    about = "astviz: draw the syntax trees of Java sources",
    version
)]
pub struct Cli {
    /// Java source file to draw
    #[arg(short = 'f', long = "file", value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Directory scanned recursively for Java sources
    #[arg(short = 'd', long = "dir", visible_alias = "directory", value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Output directory (defaults to the input's directory)
    #[arg(short = 'o', long = "output", visible_alias = "outputDir", value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Config store, created with defaults when missing
    #[arg(long = "config", value_name = "FILE", default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Artifact written per input file
    #[arg(long, value_enum, default_value_t = OutputFormat::Png)]
    pub format: OutputFormat,

    /// Write a flat JSON dump of the first method instead of a graph
    #[arg(long, default_value_t = false)]
    pub dump: bool,

    /// Print the categorized source tree to stdout
    #[arg(long = "print-tree", default_value_t = false)]
    pub print_tree: bool,
}

/// Where the sources come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    File(PathBuf),
    Dir(PathBuf),
}

impl InputSource {
    pub fn path(&self) -> &Path {
        match self {
            InputSource::File(path) | InputSource::Dir(path) => path,
        }
    }

    /// The file's parent directory, or the scanned directory itself.
    pub fn default_output_dir(&self) -> PathBuf {
        match self {
            InputSource::File(path) => match path.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
                _ => PathBuf::from("."),
            },
            InputSource::Dir(path) => path.clone(),
        }
    }
}

/// Validated options for one run.
#[derive(Debug, Clone)]
pub struct AstvizOptions {
    pub input: InputSource,
    pub output_dir: PathBuf,
    pub config: PathBuf,
    pub format: OutputFormat,
    pub dump: bool,
    pub print_tree: bool,
}

impl Cli {
    /// Exactly one of `-f` and `-d` must be given.
    pub fn input(&self) -> Result<InputSource> {
        match (&self.file, &self.dir) {
            (Some(file), None) => Ok(InputSource::File(file.clone())),
            (None, Some(dir)) => Ok(InputSource::Dir(dir.clone())),
            (None, None) => Err(Error::invalid_argument("one of -f or -d is required")
                .with_operation("options::input")
                .with_context(INPUT_RULE, "missing")),
            (Some(_), Some(_)) => Err(Error::invalid_argument("-f and -d cannot be used together")
                .with_operation("options::input")
                .with_context(INPUT_RULE, "conflicting")),
        }
    }

    pub fn into_options(self, input: InputSource) -> Result<AstvizOptions> {
        validate_input(&input)?;
        let output_dir = match self.output {
            Some(dir) => {
                validate_output_dir(&dir)?;
                dir
            }
            None => input.default_output_dir(),
        };
        Ok(AstvizOptions {
            input,
            output_dir,
            config: self.config,
            format: self.format,
            dump: self.dump,
            print_tree: self.print_tree,
        })
    }
}

fn validate_input(input: &InputSource) -> Result<()> {
    let path = input.path();
    let path_display = path.display().to_string();
    match input {
        InputSource::File(_) => {
            if !path.is_file() {
                return Err(Error::invalid_path(&path_display, "not an existing regular file")
                    .with_operation("options::validate_input"));
            }
            let is_java = path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case("java"));
            if !is_java {
                return Err(Error::invalid_path(&path_display, "not a .java file")
                    .with_operation("options::validate_input"));
            }
        }
        InputSource::Dir(_) => {
            if !path.is_dir() {
                return Err(Error::invalid_path(&path_display, "not an existing directory")
                    .with_operation("options::validate_input"));
            }
        }
    }
    Ok(())
}

fn validate_output_dir(dir: &Path) -> Result<()> {
    let path_display = dir.display().to_string();
    let metadata = dir.metadata().map_err(|err| {
        Error::invalid_path(&path_display, "output directory does not exist")
            .with_operation("options::validate_output")
            .set_source(err)
    })?;
    if !metadata.is_dir() {
        return Err(Error::invalid_path(&path_display, "output path is not a directory")
            .with_operation("options::validate_output"));
    }
    if metadata.permissions().readonly() {
        return Err(Error::invalid_path(&path_display, "output directory is not writable")
            .with_operation("options::validate_output"));
    }
    Ok(())
}

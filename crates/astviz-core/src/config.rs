//! Configuration store and the immutable snapshot the engine reads.
//!
//! The store is a TOML file. The `[output]` table holds global settings and
//! every other table is keyed by a category name:
//!
//! ```toml
//! [output]
//! detailed = false
//! includeExpressions = true
//!
//! [IfStatement]
//! visit = true
//! shape = "diamond"
//! color = "purple"
//! ```
//!
//! The store is read once into a [`ConfigFile`], then frozen into a
//! [`GlobalConfig`] that is passed explicitly to the engine.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use astviz_error::{Error, Result};

use crate::category::Category;
use crate::style::Shape;

pub const DEFAULT_CONFIG_FILE: &str = "astviz.toml";

const OUTPUT_TABLE: &str = "output";
const DEFAULT_SHAPE: Shape = Shape::Box;
const DEFAULT_COLOR: &str = "white";

fn default_true() -> bool {
    true
}

fn default_canvas() -> u32 {
    224
}

fn default_node_size() -> u32 {
    2
}

/// The `[output]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputSection {
    #[serde(default)]
    pub detailed: bool,
    #[serde(default = "default_true")]
    pub include_expressions: bool,
    #[serde(default = "default_true")]
    pub fill_nodes: bool,
    #[serde(default = "default_canvas")]
    pub width: u32,
    #[serde(default = "default_canvas")]
    pub height: u32,
    #[serde(default = "default_node_size")]
    pub node_width: u32,
    #[serde(default = "default_node_size")]
    pub node_height: u32,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            detailed: false,
            include_expressions: true,
            fill_nodes: true,
            width: default_canvas(),
            height: default_canvas(),
            node_width: default_node_size(),
            node_height: default_node_size(),
        }
    }
}

/// A per-category table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySection {
    #[serde(default)]
    pub visit: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shape: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// The config store as written on disk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigFile {
    pub output: OutputSection,
    pub categories: BTreeMap<String, CategorySection>,
}

impl ConfigFile {
    /// The document written when no store exists yet.
    pub fn with_defaults() -> Self {
        let categories = Category::visitable()
            .filter_map(|category| {
                let (shape, color) = category.default_style()?;
                Some((
                    category.as_str().to_string(),
                    CategorySection {
                        visit: false,
                        shape: Some(shape.as_str().to_string()),
                        color: Some(color.to_string()),
                    },
                ))
            })
            .collect();

        Self {
            output: OutputSection::default(),
            categories,
        }
    }

    pub fn from_toml(text: &str) -> std::result::Result<Self, toml::de::Error> {
        let mut table: toml::Table = text.parse()?;

        let output = match table.remove(OUTPUT_TABLE) {
            Some(value) => value.try_into()?,
            None => OutputSection::default(),
        };

        let mut categories = BTreeMap::new();
        for (name, value) in table {
            if !value.is_table() {
                warn!(key = %name, "ignoring top-level config value that is not a table");
                continue;
            }
            categories.insert(name, value.try_into()?);
        }

        Ok(Self { output, categories })
    }

    pub fn to_toml(&self) -> std::result::Result<String, toml::ser::Error> {
        let mut table = toml::Table::new();
        table.insert(
            OUTPUT_TABLE.to_string(),
            toml::Value::try_from(&self.output)?,
        );
        for (name, section) in &self.categories {
            table.insert(name.clone(), toml::Value::try_from(section)?);
        }
        toml::to_string(&table)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NodeSize {
    pub width: u32,
    pub height: u32,
}

/// Resolved style and inclusion flag of one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryStyle {
    pub visit: bool,
    pub shape: Shape,
    pub color: String,
}

impl Default for CategoryStyle {
    fn default() -> Self {
        Self {
            visit: false,
            shape: DEFAULT_SHAPE,
            color: DEFAULT_COLOR.to_string(),
        }
    }
}

/// Immutable configuration snapshot. Loaded once, read-only during traversal.
#[derive(Debug, Clone)]
pub struct GlobalConfig {
    pub detailed: bool,
    pub include_expressions: bool,
    pub fill_nodes: bool,
    pub canvas: CanvasSize,
    pub node_size: NodeSize,
    styles: HashMap<Category, CategoryStyle>,
    fallback: CategoryStyle,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self::from_file(&ConfigFile::default())
    }
}

impl GlobalConfig {
    /// Freeze a parsed store. Tables naming unknown categories are skipped.
    pub fn from_file(file: &ConfigFile) -> Self {
        let mut styles = HashMap::new();
        for (name, section) in &file.categories {
            let category = match Category::from_str(name) {
                Ok(category) if category.is_visitable() => category,
                _ => {
                    warn!(category = %name, "ignoring config for unknown category");
                    continue;
                }
            };
            let style = CategoryStyle {
                visit: section.visit,
                shape: section
                    .shape
                    .as_deref()
                    .map(Shape::parse_or_default)
                    .unwrap_or(DEFAULT_SHAPE),
                color: section
                    .color
                    .clone()
                    .unwrap_or_else(|| DEFAULT_COLOR.to_string()),
            };
            styles.insert(category, style);
        }

        let output = &file.output;
        Self {
            detailed: output.detailed,
            include_expressions: output.include_expressions,
            fill_nodes: output.fill_nodes,
            canvas: CanvasSize {
                width: output.width,
                height: output.height,
            },
            node_size: NodeSize {
                width: output.node_width,
                height: output.node_height,
            },
            styles,
            fallback: CategoryStyle::default(),
        }
    }

    /// Style of a category, or `box`/`white`/not visited when unconfigured.
    pub fn style(&self, category: Category) -> &CategoryStyle {
        self.styles.get(&category).unwrap_or(&self.fallback)
    }

    // Builder methods
    // ====================================================================

    pub fn with_detailed(mut self, detailed: bool) -> Self {
        self.detailed = detailed;
        self
    }

    pub fn with_include_expressions(mut self, include: bool) -> Self {
        self.include_expressions = include;
        self
    }

    pub fn with_fill_nodes(mut self, fill: bool) -> Self {
        self.fill_nodes = fill;
        self
    }

    /// Turn on `visit` for each listed category.
    pub fn with_visit(mut self, categories: &[Category]) -> Self {
        for category in categories {
            self.styles.entry(*category).or_default().visit = true;
        }
        self
    }

    pub fn with_style(mut self, category: Category, shape: Shape, color: &str) -> Self {
        let style = self.styles.entry(category).or_default();
        style.shape = shape;
        style.color = color.to_string();
        self
    }
}

/// The persisted key/value store backing [`GlobalConfig`].
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the store, creating it with defaults when it does not exist.
    pub fn load_or_create(&self) -> Result<GlobalConfig> {
        let path_display = self.path.display().to_string();

        if !self.path.exists() {
            info!(path = %path_display, "config store not found, creating a new one");
            let file = ConfigFile::with_defaults();
            self.write(&file)?;
            return Ok(GlobalConfig::from_file(&file));
        }

        let text = fs::read_to_string(&self.path).map_err(|err| {
            Error::config_invalid(&path_display, "config store cannot be read")
                .with_operation("config::load")
                .set_source(err)
        })?;
        let file = ConfigFile::from_toml(&text).map_err(|err| {
            Error::config_invalid(&path_display, "config store is not valid TOML")
                .with_operation("config::load")
                .set_source(err)
        })?;

        info!(
            path = %path_display,
            categories = file.categories.len(),
            "loaded config store"
        );
        Ok(GlobalConfig::from_file(&file))
    }

    fn write(&self, file: &ConfigFile) -> Result<()> {
        let path_display = self.path.display().to_string();
        let text = file.to_toml().map_err(|err| {
            Error::config_unwritable(&path_display)
                .with_operation("config::write")
                .set_source(err)
        })?;
        let contents = format!("# Default config store created by astviz\n{text}");
        fs::write(&self.path, contents).map_err(|err| {
            Error::config_unwritable(&path_display)
                .with_operation("config::write")
                .set_source(err)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use astviz_error::ErrorKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_output_defaults() {
        let config = GlobalConfig::default();
        assert!(!config.detailed);
        assert!(config.include_expressions);
        assert!(config.fill_nodes);
        assert_eq!(config.canvas, CanvasSize { width: 224, height: 224 });
        assert_eq!(config.node_size, NodeSize { width: 2, height: 2 });
    }

    #[test]
    fn test_unconfigured_category_falls_back() {
        let config = GlobalConfig::default();
        let style = config.style(Category::IfStatement);
        assert!(!style.visit);
        assert_eq!(style.shape, Shape::Box);
        assert_eq!(style.color, "white");
    }

    #[test]
    fn test_parse_store() {
        let text = r#"
            [output]
            detailed = true
            includeExpressions = false
            nodeWidth = 3

            [IfStatement]
            visit = true
            shape = "diamond"
            color = "purple"

            [Block]
            visit = false

            [NotACategory]
            visit = true
        "#;
        let file = ConfigFile::from_toml(text).unwrap();
        assert!(file.output.detailed);
        assert!(!file.output.include_expressions);
        assert!(file.output.fill_nodes);
        assert_eq!(file.output.node_width, 3);
        assert_eq!(file.output.node_height, 2);
        assert_eq!(file.categories.len(), 3);

        let config = GlobalConfig::from_file(&file);
        let style = config.style(Category::IfStatement);
        assert!(style.visit);
        assert_eq!(style.shape, Shape::Diamond);
        assert_eq!(style.color, "purple");
        assert_eq!(config.style(Category::Block).shape, Shape::Box);
        assert_eq!(config.style(Category::Block).color, "white");
    }

    #[test]
    fn test_defaults_round_trip() {
        let file = ConfigFile::with_defaults();
        assert_eq!(file.categories.len(), 24);
        assert!(file.categories.values().all(|section| !section.visit));

        let text = file.to_toml().unwrap();
        assert!(text.contains("[output]"));
        assert!(text.contains("includeExpressions = true"));
        assert!(text.contains("[IfStatement]"));

        let parsed = ConfigFile::from_toml(&text).unwrap();
        assert_eq!(parsed, file);
    }

    #[test]
    fn test_builders() {
        let config = GlobalConfig::default()
            .with_visit(&[Category::IfStatement, Category::Block])
            .with_style(Category::IfStatement, Shape::Diamond, "purple")
            .with_detailed(true);
        assert!(config.detailed);
        assert!(config.style(Category::Block).visit);
        assert_eq!(config.style(Category::IfStatement).color, "purple");
        assert!(config.style(Category::IfStatement).visit);
    }

    #[test]
    fn test_store_created_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        let store = ConfigStore::new(&path);

        let config = store.load_or_create().unwrap();
        assert!(path.exists());
        assert_eq!(config.style(Category::IfStatement).shape, Shape::Diamond);
        assert!(!config.style(Category::IfStatement).visit);

        // Second load reads the file that was just written.
        let again = store.load_or_create().unwrap();
        assert_eq!(again.style(Category::CatchClause).color, "firebrick");
    }

    #[test]
    fn test_invalid_store_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        fs::write(&path, "[output\ndetailed = ").unwrap();

        let err = ConfigStore::new(&path).load_or_create().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
        assert!(err.is_fatal());
    }

    #[test]
    fn test_unwritable_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join(DEFAULT_CONFIG_FILE);

        let err = ConfigStore::new(&path).load_or_create().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigUnwritable);
    }
}

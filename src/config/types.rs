use std::path::PathBuf;

use serde::Deserialize;

use crate::catalog::FolderTheme;
use crate::options::IconOptions;
use crate::paths::IconPaths;

// ---------------------------------------------------------------------------
// Top-level config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Catalog source: `"builtin"` (the default) or a path to a catalog TOML
    /// file. A leading `~/` is expanded.
    pub catalog: Option<String>,
    /// Manifest destination; stdout when unset.
    pub output: Option<PathBuf>,
    pub icons: IconsConfig,
    pub options: IconOptions,
    /// Inline themes, layered over the catalog by name.
    pub themes: Vec<FolderTheme>,
}

// ---------------------------------------------------------------------------
// Icon resource paths
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct IconsConfig {
    pub dir: String,
    pub extension: String,
}

impl Default for IconsConfig {
    fn default() -> Self {
        let paths = IconPaths::default();
        Self {
            dir: paths.dir,
            extension: paths.extension,
        }
    }
}

impl IconsConfig {
    pub fn paths(&self) -> IconPaths {
        IconPaths {
            dir: self.dir.clone(),
            extension: self.extension.clone(),
        }
    }
}

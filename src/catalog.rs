use std::collections::HashSet;
use std::str::FromStr;

use serde::de::IntoDeserializer;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::manifest::Variant;

/// A named group of icons that can be switched on or off as a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconPack {
    Angular,
    Ngrx,
    Nest,
    React,
    Redux,
    Vue,
    Vuex,
}

/// Parses the same lowercase names the catalog uses (`"angular"`, `"vuex"`).
impl FromStr for IconPack {
    type Err = serde::de::value::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IconPack::deserialize(s.into_deserializer())
    }
}

/// One icon as declared by a theme.
///
/// `name` is the id stem before any state or variant suffix. An empty name
/// means "no icon".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IconDefinition {
    pub name: String,
    pub light: bool,
    #[serde(alias = "highContrast")]
    pub high_contrast: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pack: Option<IconPack>,
}

impl IconDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn is_active(&self) -> bool {
        !self.name.is_empty()
    }

    /// Variants this icon must be emitted in. `Variant::Default` is always
    /// first.
    pub fn variants(&self) -> impl Iterator<Item = Variant> + '_ {
        Variant::ALL.into_iter().filter(|v| match v {
            Variant::Default => true,
            Variant::Light => self.light,
            Variant::HighContrast => self.high_contrast,
        })
    }
}

/// An icon bound to one or more folder names (case-sensitive).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderIconOverride {
    #[serde(flatten)]
    pub icon: IconDefinition,
    #[serde(default, alias = "folderNames")]
    pub folder_names: Vec<String>,
}

impl FolderIconOverride {
    pub fn new<I, S>(name: impl Into<String>, folder_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            icon: IconDefinition::new(name),
            folder_names: folder_names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn with_pack(mut self, pack: IconPack) -> Self {
        self.icon.pack = Some(pack);
        self
    }
}

/// A named, complete set of folder-icon rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderTheme {
    pub name: String,
    #[serde(alias = "defaultIcon")]
    pub default_icon: IconDefinition,
    #[serde(default, alias = "rootFolder", skip_serializing_if = "Option::is_none")]
    pub root_folder: Option<IconDefinition>,
    #[serde(default)]
    pub icons: Vec<FolderIconOverride>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("duplicate folder theme \"{0}\"")]
    DuplicateTheme(String),
    #[error("icon \"{icon}\" in folder theme \"{theme}\" has no folder names")]
    EmptyFolderNames { theme: String, icon: String },
}

/// Read-only set of available folder themes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    themes: Vec<FolderTheme>,
}

impl Catalog {
    pub fn new(themes: Vec<FolderTheme>) -> Self {
        Self { themes }
    }

    /// Parse a catalog from TOML (`[[themes]]` tables).
    pub fn from_toml(src: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(src)
    }

    pub fn themes(&self) -> &[FolderTheme] {
        &self.themes
    }

    /// First theme with the given name.
    pub fn find(&self, name: &str) -> Option<&FolderTheme> {
        self.themes.iter().find(|t| t.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.themes.iter().map(|t| t.name.as_str())
    }

    /// Strict checks the resolver itself tolerates.
    ///
    /// # Errors
    ///
    /// Returns the first duplicate theme name or override without folder
    /// names, in catalog order.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();
        for theme in &self.themes {
            if !seen.insert(theme.name.as_str()) {
                return Err(CatalogError::DuplicateTheme(theme.name.clone()));
            }
            if let Some(icon) = theme.icons.iter().find(|i| i.folder_names.is_empty()) {
                return Err(CatalogError::EmptyFolderNames {
                    theme: theme.name.clone(),
                    icon: icon.icon.name.clone(),
                });
            }
        }
        Ok(())
    }
}

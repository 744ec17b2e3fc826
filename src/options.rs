use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::catalog::IconPack;

/// Theme name that switches folder icons off entirely.
pub const DEACTIVATED_THEME: &str = "none";

/// Runtime selection the resolver works from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IconOptions {
    pub folder_theme: String,
    pub activated_packs: Vec<IconPack>,
    /// User folder associations: folder name to icon stem, so `docs = "Docs"`
    /// maps the `docs` folder to `folder-docs`. Stems are lowercased; folder
    /// names stay case-sensitive.
    pub folder_associations: IndexMap<String, String>,
    pub hides_explorer_arrows: bool,
}

impl Default for IconOptions {
    fn default() -> Self {
        Self {
            folder_theme: "specific".to_owned(),
            activated_packs: vec![IconPack::Angular],
            folder_associations: IndexMap::new(),
            hides_explorer_arrows: false,
        }
    }
}

impl IconOptions {
    pub fn is_deactivated(&self) -> bool {
        self.folder_theme == DEACTIVATED_THEME
    }

    pub fn is_pack_active(&self, pack: IconPack) -> bool {
        self.activated_packs.contains(&pack)
    }
}

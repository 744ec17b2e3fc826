use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Display variant of an icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    Default,
    Light,
    HighContrast,
}

impl Variant {
    pub const ALL: [Variant; 3] = [Variant::Default, Variant::Light, Variant::HighContrast];

    /// Suffix appended to an icon id for this variant.
    pub fn suffix(self) -> &'static str {
        match self {
            Variant::Default => "",
            Variant::Light => "_light",
            Variant::HighContrast => "_highContrast",
        }
    }
}

/// Whether a folder is collapsed or expanded in the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FolderState {
    Closed,
    Open,
}

impl FolderState {
    pub fn suffix(self) -> &'static str {
        match self {
            FolderState::Closed => "",
            FolderState::Open => "-open",
        }
    }
}

/// Build the full icon id: `<stem>[-open][_light|_highContrast]`.
pub fn icon_id(stem: &str, state: FolderState, variant: Variant) -> String {
    format!("{stem}{}{}", state.suffix(), variant.suffix())
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IconPath {
    pub icon_path: String,
}

/// Icon assignments for one display variant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Associations {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder_expanded: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root_folder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root_folder_expanded: Option<String>,
    pub folder_names: IndexMap<String, String>,
    pub folder_names_expanded: IndexMap<String, String>,
    // File-icon assignments, filled in by a file-icon resolver and carried
    // through merges.
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub file_extensions: IndexMap<String, String>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub file_names: IndexMap<String, String>,
}

impl Associations {
    /// Default folder id in the given state.
    pub fn folder_id(&self, state: FolderState) -> Option<&str> {
        match state {
            FolderState::Closed => self.folder.as_deref(),
            FolderState::Open => self.folder_expanded.as_deref(),
        }
    }

    pub fn root_folder_id(&self, state: FolderState) -> Option<&str> {
        match state {
            FolderState::Closed => self.root_folder.as_deref(),
            FolderState::Open => self.root_folder_expanded.as_deref(),
        }
    }

    /// Id registered for a specific folder name, if any.
    pub fn named_folder_id(&self, name: &str, state: FolderState) -> Option<&str> {
        let names = match state {
            FolderState::Closed => &self.folder_names,
            FolderState::Open => &self.folder_names_expanded,
        };
        names.get(name).map(String::as_str)
    }

    pub(crate) fn set_folder(&mut self, state: FolderState, id: String) {
        match state {
            FolderState::Closed => self.folder = Some(id),
            FolderState::Open => self.folder_expanded = Some(id),
        }
    }

    pub(crate) fn set_root_folder(&mut self, state: FolderState, id: String) {
        match state {
            FolderState::Closed => self.root_folder = Some(id),
            FolderState::Open => self.root_folder_expanded = Some(id),
        }
    }

    pub(crate) fn set_named_folder(&mut self, name: &str, state: FolderState, id: String) {
        let names = match state {
            FolderState::Closed => &mut self.folder_names,
            FolderState::Open => &mut self.folder_names_expanded,
        };
        names.insert(name.to_owned(), id);
    }

    /// True when the record holds no folder or file assignment.
    pub fn is_empty(&self) -> bool {
        self.folder.is_none()
            && self.folder_expanded.is_none()
            && self.root_folder.is_none()
            && self.root_folder_expanded.is_none()
            && self.folder_names.is_empty()
            && self.folder_names_expanded.is_empty()
            && self.file_extensions.is_empty()
            && self.file_names.is_empty()
    }

    fn clear_folder_icons(&mut self) {
        self.folder = None;
        self.folder_expanded = None;
        self.root_folder = None;
        self.root_folder_expanded = None;
        self.folder_names.clear();
        self.folder_names_expanded.clear();
    }

    /// Overlay `other` onto `self`; entries from `other` win.
    pub fn merge(&mut self, other: Associations) {
        if other.folder.is_some() {
            self.folder = other.folder;
        }
        if other.folder_expanded.is_some() {
            self.folder_expanded = other.folder_expanded;
        }
        if other.root_folder.is_some() {
            self.root_folder = other.root_folder;
        }
        if other.root_folder_expanded.is_some() {
            self.root_folder_expanded = other.root_folder_expanded;
        }
        self.folder_names.extend(other.folder_names);
        self.folder_names_expanded.extend(other.folder_names_expanded);
        self.file_extensions.extend(other.file_extensions);
        self.file_names.extend(other.file_names);
    }
}

/// The icon manifest handed to the rendering host.
///
/// Serializes to the host's icon-theme JSON layout (`iconDefinitions`,
/// `folderNamesExpanded`, `highContrast`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IconConfiguration {
    pub icon_definitions: IndexMap<String, IconPath>,
    #[serde(flatten)]
    pub base: Associations,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub light: Option<Associations>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub high_contrast: Option<Associations>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub language_ids: IndexMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hides_explorer_arrows: Option<bool>,
}

impl IconConfiguration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Associations for a variant, if that variant was materialized.
    pub fn associations(&self, variant: Variant) -> Option<&Associations> {
        match variant {
            Variant::Default => Some(&self.base),
            Variant::Light => self.light.as_ref(),
            Variant::HighContrast => self.high_contrast.as_ref(),
        }
    }

    /// Associations for a variant, materializing the record if needed.
    pub fn associations_mut(&mut self, variant: Variant) -> &mut Associations {
        match variant {
            Variant::Default => &mut self.base,
            Variant::Light => self.light.get_or_insert_with(Associations::default),
            Variant::HighContrast => self.high_contrast.get_or_insert_with(Associations::default),
        }
    }

    pub fn icon_path(&self, id: &str) -> Option<&str> {
        self.icon_definitions.get(id).map(|d| d.icon_path.as_str())
    }

    /// Icon id the host shows for a folder called `name`.
    ///
    /// Falls back from the variant's own entry to the base entry, then to the
    /// variant's default folder icon and finally the base default.
    pub fn folder_icon(&self, name: &str, state: FolderState, variant: Variant) -> Option<&str> {
        let scoped = self.associations(variant);
        scoped
            .and_then(|a| a.named_folder_id(name, state))
            .or_else(|| self.base.named_folder_id(name, state))
            .or_else(|| scoped.and_then(|a| a.folder_id(state)))
            .or_else(|| self.base.folder_id(state))
    }

    /// Icon id the host shows for the workspace root folder.
    pub fn root_folder_icon(&self, state: FolderState, variant: Variant) -> Option<&str> {
        self.associations(variant)
            .and_then(|a| a.root_folder_id(state))
            .or_else(|| self.base.root_folder_id(state))
    }

    /// Drop every folder assignment in all variants. Icon definitions and
    /// file assignments are left alone; a variant record left empty is
    /// removed.
    pub fn clear_folder_icons(&mut self) {
        self.base.clear_folder_icons();
        for slot in [&mut self.light, &mut self.high_contrast] {
            if let Some(record) = slot {
                record.clear_folder_icons();
            }
            if slot.as_ref().is_some_and(Associations::is_empty) {
                *slot = None;
            }
        }
    }

    /// Overlay another manifest, e.g. a file-icon manifest onto a
    /// folder-icon one. Later entries win.
    pub fn merge(&mut self, other: IconConfiguration) {
        self.icon_definitions.extend(other.icon_definitions);
        self.base.merge(other.base);
        if let Some(light) = other.light {
            self.associations_mut(Variant::Light).merge(light);
        }
        if let Some(high_contrast) = other.high_contrast {
            self.associations_mut(Variant::HighContrast).merge(high_contrast);
        }
        if other.file.is_some() {
            self.file = other.file;
        }
        self.language_ids.extend(other.language_ids);
        if other.hides_explorer_arrows.is_some() {
            self.hides_explorer_arrows = other.hides_explorer_arrows;
        }
    }
}

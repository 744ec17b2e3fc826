use crate::catalog::{FolderTheme, IconDefinition};
use crate::manifest::{FolderState, IconConfiguration, IconPath, icon_id};
use crate::options::IconOptions;
use crate::paths::IconPathResolver;

const STATES: [FolderState; 2] = [FolderState::Closed, FolderState::Open];

/// Build the folder-icon manifest for the theme selected in `options`.
///
/// Never fails: an unknown theme or the `"none"` sentinel yields a manifest
/// without folder icons, and unusable entries are skipped.
pub fn resolve<P>(themes: &[FolderTheme], options: &IconOptions, paths: &P) -> IconConfiguration
where
    P: IconPathResolver + ?Sized,
{
    let mut builder = Builder {
        config: IconConfiguration::new(),
        paths,
    };
    builder.config.hides_explorer_arrows = options.hides_explorer_arrows.then_some(true);

    let Some(theme) = select_theme(themes, options) else {
        return builder.config;
    };

    if theme.default_icon.is_active() {
        builder.add_default(&theme.default_icon);
        match theme.root_folder.as_ref().filter(|r| r.is_active()) {
            Some(root) => builder.add_root(root),
            None => builder.alias_root(&theme.default_icon),
        }
    } else {
        tracing::debug!(theme = %theme.name, "default folder icon deactivated");
    }

    for entry in &theme.icons {
        if let Some(pack) = entry.icon.pack
            && !options.is_pack_active(pack)
        {
            tracing::trace!(icon = %entry.icon.name, ?pack, "pack disabled, skipping");
            continue;
        }
        builder.add_override(&entry.icon, &entry.folder_names);
    }

    for (folder, stem) in &options.folder_associations {
        if stem.is_empty() {
            tracing::trace!(%folder, "empty custom association, skipping");
            continue;
        }
        let icon = IconDefinition::new(format!("folder-{}", stem.to_lowercase()));
        builder.add_override(&icon, std::slice::from_ref(folder));
    }

    tracing::debug!(
        theme = %theme.name,
        icons = builder.config.icon_definitions.len(),
        "resolved folder icons"
    );
    builder.config
}

/// Resolve into an existing manifest, e.g. one already holding file icons.
///
/// Folder assignments from an earlier resolution are dropped first, so the
/// result only reflects the theme selected now.
pub fn resolve_into<P>(
    themes: &[FolderTheme],
    mut manifest: IconConfiguration,
    options: &IconOptions,
    paths: &P,
) -> IconConfiguration
where
    P: IconPathResolver + ?Sized,
{
    manifest.clear_folder_icons();
    manifest.merge(resolve(themes, options, paths));
    manifest
}

fn select_theme<'a>(themes: &'a [FolderTheme], options: &IconOptions) -> Option<&'a FolderTheme> {
    if options.is_deactivated() {
        tracing::debug!("folder icons deactivated");
        return None;
    }
    let theme = themes.iter().find(|t| t.name == options.folder_theme);
    if theme.is_none() {
        tracing::debug!(theme = %options.folder_theme, "unknown folder theme");
    }
    theme
}

struct Builder<'p, P: ?Sized> {
    config: IconConfiguration,
    paths: &'p P,
}

impl<P: IconPathResolver + ?Sized> Builder<'_, P> {
    /// Register an icon definition once per id.
    fn register(&mut self, id: &str) {
        if !self.config.icon_definitions.contains_key(id) {
            let icon_path = self.paths.icon_path(id);
            self.config
                .icon_definitions
                .insert(id.to_owned(), IconPath { icon_path });
        }
    }

    fn add_default(&mut self, icon: &IconDefinition) {
        for variant in icon.variants() {
            for state in STATES {
                let id = icon_id(&icon.name, state, variant);
                self.register(&id);
                self.config.associations_mut(variant).set_folder(state, id);
            }
        }
    }

    fn add_root(&mut self, icon: &IconDefinition) {
        for variant in icon.variants() {
            for state in STATES {
                let id = icon_id(&icon.name, state, variant);
                self.register(&id);
                self.config.associations_mut(variant).set_root_folder(state, id);
            }
        }
    }

    /// Root folder shares the default icon's ids.
    fn alias_root(&mut self, default_icon: &IconDefinition) {
        for variant in default_icon.variants() {
            for state in STATES {
                let id = icon_id(&default_icon.name, state, variant);
                self.config.associations_mut(variant).set_root_folder(state, id);
            }
        }
    }

    fn add_override(&mut self, icon: &IconDefinition, folder_names: &[String]) {
        if !icon.is_active() {
            return;
        }
        if folder_names.is_empty() {
            tracing::trace!(icon = %icon.name, "no folder names, skipping");
            return;
        }
        for variant in icon.variants() {
            for state in STATES {
                let id = icon_id(&icon.name, state, variant);
                self.register(&id);
                let record = self.config.associations_mut(variant);
                for name in folder_names {
                    record.set_named_folder(name, state, id.clone());
                }
            }
        }
    }
}

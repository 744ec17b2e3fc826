use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::catalog::{Catalog, FolderTheme};
use crate::config::builtin_catalog;
use crate::config::types::AppConfig;

/// Discover and load the app config.
///
/// Priority:
/// 1. `--config` flag (explicit path)
/// 2. nearest `.folder-icons.toml` from the current directory up to the Git root
/// 3. `$FOLDER_ICONS_CONFIG` environment variable
/// 4. `$XDG_CONFIG_HOME/folder-icons/config.toml`
/// 5. `~/.config/folder-icons/config.toml`
///
/// If both a global and a repo-local config exist, the repo-local one wins
/// section by section (see [`merge_configs`]).
pub fn load_config(explicit_path: Option<&Path>) -> Result<AppConfig> {
    if let Some(path) = explicit_path {
        return read_config(path);
    }

    let global = first_file(global_candidates());
    let local = std::env::current_dir()
        .ok()
        .and_then(|cwd| first_file(local_candidates(cwd)));
    let config = match (global, local) {
        (Some(global), Some(local)) => merge_configs(read_config(&global)?, read_config(&local)?),
        (Some(path), None) | (None, Some(path)) => read_config(&path)?,
        (None, None) => AppConfig::default(),
    };
    Ok(config)
}

fn read_config(path: &Path) -> Result<AppConfig> {
    let contents =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let config: AppConfig = toml::from_str(&contents)
        .with_context(|| format!("parsing TOML from {}", path.display()))?;
    tracing::debug!("loaded config from {}", path.display());
    Ok(config)
}

/// Build the theme catalog a config refers to.
///
/// The catalog file (or the built-in catalog) is the base; inline
/// `[[themes]]` from the config replace same-named themes or are appended.
pub fn load_catalog(config: &AppConfig) -> Result<Catalog> {
    let base = match config.catalog.as_deref() {
        None | Some(builtin_catalog::NAME) => {
            builtin_catalog::load().context("parsing built-in catalog")?
        }
        Some(file) => {
            let path = expand_tilde(file);
            let contents = std::fs::read_to_string(&path)
                .with_context(|| format!("reading catalog {}", path.display()))?;
            Catalog::from_toml(&contents)
                .with_context(|| format!("parsing catalog {}", path.display()))?
        }
    };
    Ok(overlay_themes(base, &config.themes))
}

fn overlay_themes(base: Catalog, inline: &[FolderTheme]) -> Catalog {
    if inline.is_empty() {
        return base;
    }
    let mut themes = base.themes().to_vec();
    for theme in inline {
        match themes.iter_mut().find(|t| t.name == theme.name) {
            Some(existing) => *existing = theme.clone(),
            None => themes.push(theme.clone()),
        }
    }
    Catalog::new(themes)
}

/// Merge repo-local config on top of global config.
///
/// Options, icon paths and the catalog source from local replace global
/// wholesale. The output path is taken from local when set. Inline themes
/// are concatenated so local themes land last and win on name clashes.
fn merge_configs(global: AppConfig, local: AppConfig) -> AppConfig {
    AppConfig {
        catalog: local.catalog.or(global.catalog),
        output: local.output.or(global.output),
        icons: local.icons,
        options: local.options,
        themes: {
            let mut themes = global.themes;
            themes.extend(local.themes);
            themes
        },
    }
}

const LOCAL_FILE: &str = ".folder-icons.toml";
const GLOBAL_FILE: &str = "folder-icons/config.toml";

fn env_path(key: &str) -> Option<PathBuf> {
    std::env::var_os(key).map(PathBuf::from)
}

/// Global config locations, in priority order.
fn global_candidates() -> Vec<PathBuf> {
    [
        env_path("FOLDER_ICONS_CONFIG"),
        env_path("XDG_CONFIG_HOME").map(|dir| dir.join(GLOBAL_FILE)),
        env_path("HOME").map(|home| home.join(".config").join(GLOBAL_FILE)),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// Repo-local config locations from `dir` upwards, ending at the enclosing
/// git root (or the filesystem root when there is none).
fn local_candidates(mut dir: PathBuf) -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    loop {
        candidates.push(dir.join(LOCAL_FILE));
        if dir.join(".git").exists() || !dir.pop() {
            return candidates;
        }
    }
}

fn first_file(candidates: Vec<PathBuf>) -> Option<PathBuf> {
    candidates.into_iter().find(|p| p.is_file())
}

fn expand_tilde(path: &str) -> PathBuf {
    match (path.strip_prefix("~/"), env_path("HOME")) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}

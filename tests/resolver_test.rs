use folder_icons::{
    Catalog, FolderIconOverride, FolderState, FolderTheme, IconConfiguration, IconDefinition,
    IconOptions, IconPack, IconPaths, Variant, resolve, resolve_into,
};
use indexmap::IndexMap;

fn catalog() -> Catalog {
    Catalog::from_toml(include_str!("fixtures/catalog.toml")).expect("valid catalog fixture")
}

fn ids(config: &IconConfiguration) -> Vec<&str> {
    config.icon_definitions.keys().map(String::as_str).collect()
}

fn names(pairs: &[(&str, &str)]) -> IndexMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect()
}

#[test]
fn configures_icon_definitions() {
    let config = resolve(
        catalog().themes(),
        &IconOptions::default(),
        &IconPaths::default(),
    );

    assert_eq!(
        ids(&config),
        vec![
            "folder",
            "folder-open",
            "folder-src",
            "folder-src-open",
            "folder-angular",
            "folder-angular-open",
        ]
    );
    assert_eq!(
        config.icon_path("folder-angular-open"),
        Some("./../../icons/folder-angular-open.svg")
    );
    assert_eq!(config.base.folder.as_deref(), Some("folder"));
    assert_eq!(config.base.folder_expanded.as_deref(), Some("folder-open"));
    assert_eq!(config.base.root_folder.as_deref(), Some("folder"));
    assert_eq!(config.base.root_folder_expanded.as_deref(), Some("folder-open"));
    assert_eq!(
        config.base.folder_names,
        names(&[
            ("src", "folder-src"),
            ("source", "folder-src"),
            ("angular", "folder-angular"),
            ("ng", "folder-angular"),
        ])
    );
    assert_eq!(
        config.base.folder_names_expanded,
        names(&[
            ("src", "folder-src-open"),
            ("source", "folder-src-open"),
            ("angular", "folder-angular-open"),
            ("ng", "folder-angular-open"),
        ])
    );
    assert!(config.light.is_none());
    assert!(config.high_contrast.is_none());
}

#[test]
fn deactivates_folder_icons() {
    let options = IconOptions {
        folder_theme: "none".to_owned(),
        ..Default::default()
    };
    let config = resolve(catalog().themes(), &options, &IconPaths::default());
    assert_eq!(config, IconConfiguration::new());
}

#[test]
fn theme_without_default_icon_is_empty() {
    // "off" is a regular theme whose default icon name is empty.
    let options = IconOptions {
        folder_theme: "off".to_owned(),
        ..Default::default()
    };
    let config = resolve(catalog().themes(), &options, &IconPaths::default());
    assert!(config.icon_definitions.is_empty());
    assert!(config.base.folder_names.is_empty());
    assert!(config.base.folder_names_expanded.is_empty());
    assert!(config.base.folder.is_none());
    assert!(config.base.root_folder.is_none());
}

#[test]
fn unknown_theme_yields_no_icons() {
    let options = IconOptions {
        folder_theme: "does-not-exist".to_owned(),
        ..Default::default()
    };
    let config = resolve(catalog().themes(), &options, &IconPaths::default());
    assert_eq!(config, IconConfiguration::new());
}

#[test]
fn enables_folder_theme() {
    let options = IconOptions {
        folder_theme: "blue".to_owned(),
        ..Default::default()
    };
    let config = resolve(catalog().themes(), &options, &IconPaths::default());

    assert_eq!(
        ids(&config),
        vec![
            "folder-blue",
            "folder-blue-open",
            "folder-blue-src",
            "folder-blue-src-open",
        ]
    );
    assert_eq!(config.base.folder.as_deref(), Some("folder-blue"));
    assert_eq!(config.base.root_folder.as_deref(), Some("folder-blue"));
    assert_eq!(
        config.base.root_folder_expanded.as_deref(),
        Some("folder-blue-open")
    );
    assert_eq!(
        config.base.folder_names,
        names(&[("src", "folder-blue-src"), ("source", "folder-blue-src")])
    );
}

#[test]
fn disables_icon_packs() {
    let options = IconOptions {
        activated_packs: vec![],
        ..Default::default()
    };
    let config = resolve(catalog().themes(), &options, &IconPaths::default());

    assert_eq!(
        ids(&config),
        vec!["folder", "folder-open", "folder-src", "folder-src-open"]
    );
    assert_eq!(
        config.base.folder_names,
        names(&[("src", "folder-src"), ("source", "folder-src")])
    );
    assert_eq!(config.base.folder.as_deref(), Some("folder"));
}

#[test]
fn configures_light_and_high_contrast() {
    let mut src = FolderIconOverride::new("folder-src", ["src", "source"]);
    src.icon.light = true;
    src.icon.high_contrast = true;
    let mut test = FolderIconOverride::new("folder-test", ["test"]);
    test.icon.light = true;
    let themes = vec![FolderTheme {
        name: "specific".to_owned(),
        default_icon: IconDefinition {
            name: "folder".to_owned(),
            light: true,
            high_contrast: true,
            pack: None,
        },
        root_folder: Some(IconDefinition {
            name: "folder-root".to_owned(),
            light: true,
            high_contrast: true,
            pack: None,
        }),
        icons: vec![src, test],
    }];

    let config = resolve(&themes, &IconOptions::default(), &IconPaths::default());

    assert_eq!(
        ids(&config),
        vec![
            "folder",
            "folder-open",
            "folder_light",
            "folder-open_light",
            "folder_highContrast",
            "folder-open_highContrast",
            "folder-root",
            "folder-root-open",
            "folder-root_light",
            "folder-root-open_light",
            "folder-root_highContrast",
            "folder-root-open_highContrast",
            "folder-src",
            "folder-src-open",
            "folder-src_light",
            "folder-src-open_light",
            "folder-src_highContrast",
            "folder-src-open_highContrast",
            "folder-test",
            "folder-test-open",
            "folder-test_light",
            "folder-test-open_light",
        ]
    );
    assert_eq!(
        config.icon_path("folder-root-open_light"),
        Some("./../../icons/folder-root-open_light.svg")
    );

    let light = config.light.as_ref().expect("light variant");
    assert_eq!(light.folder.as_deref(), Some("folder_light"));
    assert_eq!(light.folder_expanded.as_deref(), Some("folder-open_light"));
    assert_eq!(light.root_folder.as_deref(), Some("folder-root_light"));
    assert_eq!(
        light.root_folder_expanded.as_deref(),
        Some("folder-root-open_light")
    );
    assert_eq!(
        light.folder_names,
        names(&[
            ("src", "folder-src_light"),
            ("source", "folder-src_light"),
            ("test", "folder-test_light"),
        ])
    );

    let high_contrast = config.high_contrast.as_ref().expect("high contrast variant");
    assert_eq!(high_contrast.folder.as_deref(), Some("folder_highContrast"));
    assert_eq!(
        high_contrast.folder_names_expanded,
        names(&[
            ("src", "folder-src-open_highContrast"),
            ("source", "folder-src-open_highContrast"),
        ])
    );

    assert_eq!(
        config.folder_icon("test", FolderState::Open, Variant::HighContrast),
        Some("folder-test-open")
    );
    assert_eq!(
        config.root_folder_icon(FolderState::Closed, Variant::Light),
        Some("folder-root_light")
    );
}

#[test]
fn resolution_is_deterministic() {
    let catalog = catalog();
    let options = IconOptions {
        activated_packs: vec![IconPack::Angular, IconPack::Vue],
        ..Default::default()
    };
    let first = resolve(catalog.themes(), &options, &IconPaths::default());
    let second = resolve(catalog.themes(), &options, &IconPaths::default());
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn resolve_into_keeps_file_icons() {
    let mut base = IconConfiguration::new();
    base.file = Some("file".to_owned());
    base.base
        .file_extensions
        .insert("rs".to_owned(), "rust".to_owned());
    base.base
        .folder_names
        .insert("stale".to_owned(), "folder-stale".to_owned());

    let config = resolve_into(
        catalog().themes(),
        base,
        &IconOptions::default(),
        &IconPaths::default(),
    );

    assert_eq!(config.file.as_deref(), Some("file"));
    assert_eq!(config.base.file_extensions["rs"], "rust");
    assert!(!config.base.folder_names.contains_key("stale"));
    assert_eq!(config.base.folder_names["src"], "folder-src");
}

#[test]
fn resolve_into_clears_on_deactivation() {
    let first = resolve(
        catalog().themes(),
        &IconOptions::default(),
        &IconPaths::default(),
    );
    let options = IconOptions {
        folder_theme: "none".to_owned(),
        ..Default::default()
    };
    let config = resolve_into(catalog().themes(), first, &options, &IconPaths::default());
    assert!(config.base.folder.is_none());
    assert!(config.base.root_folder_expanded.is_none());
    assert!(config.base.folder_names.is_empty());
    assert!(config.base.folder_names_expanded.is_empty());
}

#[test]
fn resolve_into_drops_stale_variant_records() {
    let mut lit = FolderTheme {
        name: "lit".to_owned(),
        default_icon: IconDefinition {
            name: "folder".to_owned(),
            light: true,
            ..Default::default()
        },
        root_folder: None,
        icons: vec![],
    };
    let options = IconOptions {
        folder_theme: "lit".to_owned(),
        ..Default::default()
    };
    let first = resolve(std::slice::from_ref(&lit), &options, &IconPaths::default());
    assert!(first.light.is_some());

    lit.default_icon.light = false;
    let config = resolve_into(
        std::slice::from_ref(&lit),
        first.clone(),
        &options,
        &IconPaths::default(),
    );
    assert!(config.light.is_none());
    let json = serde_json::to_value(&config).unwrap();
    assert!(json.get("light").is_none());

    let off = IconOptions {
        folder_theme: "none".to_owned(),
        ..Default::default()
    };
    let config = resolve_into(std::slice::from_ref(&lit), first, &off, &IconPaths::default());
    assert!(config.light.is_none());
}

#[test]
fn manifest_json_layout() {
    let config = resolve(
        catalog().themes(),
        &IconOptions::default(),
        &IconPaths::default(),
    );
    let json = serde_json::to_value(&config).unwrap();
    assert_eq!(json["folder"], "folder");
    assert_eq!(json["rootFolderExpanded"], "folder-open");
    assert_eq!(json["folderNames"]["ng"], "folder-angular");
    assert_eq!(
        json["iconDefinitions"]["folder-src-open"]["iconPath"],
        "./../../icons/folder-src-open.svg"
    );

    let back: IconConfiguration = serde_json::from_value(json).unwrap();
    assert_eq!(back, config);
}

// Pedantic: suppress noise for internal crate code.
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]

pub mod catalog;
pub mod config;
pub mod manifest;
pub mod options;
pub mod paths;
pub mod resolver;

pub use catalog::{Catalog, CatalogError, FolderIconOverride, FolderTheme, IconDefinition, IconPack};
pub use manifest::{Associations, FolderState, IconConfiguration, IconPath, Variant};
pub use options::IconOptions;
pub use paths::{IconPathResolver, IconPaths};
pub use resolver::{resolve, resolve_into};

use crate::catalog::Catalog;

/// Name accepted in `catalog = "..."` for the compiled-in catalog.
pub const NAME: &str = "builtin";

const SOURCE: &str = include_str!("../../themes/builtin.toml");

/// Parse the built-in catalog.
///
/// # Errors
///
/// Only fails if the embedded TOML is malformed.
pub fn load() -> Result<Catalog, toml::de::Error> {
    Catalog::from_toml(SOURCE)
}

pub mod builtin_catalog;
pub mod loader;
pub mod types;

//! Project configuration
//!
//! Provides types and parsing for `pixelplay.toml`.

pub mod loader;
pub mod schema;

pub use loader::{
    default_config, find_config, find_config_from, load_config, merge_cli_overrides, CliOverrides,
    ConfigError, CONFIG_FILE,
};
pub use schema::*;

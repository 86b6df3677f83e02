//! Configuration loading and discovery for `pixelplay.toml`
//!
//! Provides functions to find, load, and merge configuration.

use super::schema::{PixelplayConfig, ProjectConfig};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Config file name searched for in the working directory and its ancestors.
pub const CONFIG_FILE: &str = "pixelplay.toml";

/// Configuration loading error
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// File I/O error
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error
    #[error("Failed to parse pixelplay.toml: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error
    #[error("Config validation failed:\n{}", .0.iter().map(|e| format!("  - {}", e)).collect::<Vec<_>>().join("\n"))]
    Validation(Vec<String>),
}

/// CLI arguments that can override config values
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    /// Override output directory
    pub out: Option<PathBuf>,
    /// Override the extraction frame index
    pub frame: Option<usize>,
    /// Override the runtime script URL
    pub script_url: Option<String>,
    /// Override the page title
    pub title: Option<String>,
    /// Enable strict validation
    pub strict: Option<bool>,
}

/// Find `pixelplay.toml` by walking up from the current working directory.
pub fn find_config() -> Option<PathBuf> {
    env::current_dir().ok().and_then(find_config_from)
}

/// Find `pixelplay.toml` by walking up from a specific directory.
pub fn find_config_from(start: PathBuf) -> Option<PathBuf> {
    let mut current = start;

    loop {
        let config_path = current.join(CONFIG_FILE);
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load configuration from a `pixelplay.toml` file.
///
/// If a path is provided, loads from that file. Otherwise, uses [`find_config`]
/// to locate one, falling back to [`default_config`] when none exists.
///
/// # Example
/// ```ignore
/// let config = load_config(None)?;
/// let config = load_config(Some(Path::new("level/pixelplay.toml")))?;
/// ```
pub fn load_config(path: Option<&Path>) -> Result<PixelplayConfig, ConfigError> {
    let config_path = match path {
        Some(p) => Some(p.to_path_buf()),
        None => find_config(),
    };

    match config_path {
        Some(p) => load_config_file(&p),
        None => Ok(default_config()),
    }
}

fn load_config_file(path: &Path) -> Result<PixelplayConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let config: PixelplayConfig = toml::from_str(&contents)?;

    let errors = config.validate();
    if !errors.is_empty() {
        return Err(ConfigError::Validation(errors.into_iter().map(|e| e.to_string()).collect()));
    }

    tracing::debug!(path = %path.display(), "loaded config");
    Ok(config)
}

/// Create a default configuration when no `pixelplay.toml` is found.
///
/// The project name is taken from the current directory, if it has one.
pub fn default_config() -> PixelplayConfig {
    let name = env::current_dir()
        .ok()
        .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
        .filter(|name| !name.trim().is_empty());

    PixelplayConfig {
        project: ProjectConfig { name, ..ProjectConfig::default() },
        ..PixelplayConfig::default()
    }
}

/// Merge CLI overrides into a configuration.
///
/// CLI arguments take precedence over config file values.
pub fn merge_cli_overrides(config: &mut PixelplayConfig, overrides: &CliOverrides) {
    if let Some(ref out) = overrides.out {
        config.project.out = out.clone();
    }
    if let Some(frame) = overrides.frame {
        config.extract.frame = frame;
    }
    if let Some(ref url) = overrides.script_url {
        config.runtime.script_url = url.clone();
    }
    if let Some(ref title) = overrides.title {
        config.runtime.title = Some(title.clone());
    }
    if let Some(strict) = overrides.strict {
        config.validate.strict = strict;
    }
}

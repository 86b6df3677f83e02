//! Configuration schema types for `pixelplay.toml`
//!
//! Defines the structure and validation rules for project configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::manifest::{ManifestOptions, DEFAULT_RUNTIME_URL, DEFAULT_TITLE};

/// Project metadata section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Project name, used as the page title when `[runtime] title` is unset
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub name: Option<String>,
    /// Build output directory
    #[serde(default = "default_out")]
    pub out: PathBuf,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self { name: None, out: default_out() }
    }
}

fn default_out() -> PathBuf {
    PathBuf::from("dist")
}

/// Sprite extraction settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractConfig {
    /// Frame index used for collider fitting
    #[serde(default)]
    pub frame: usize,
}

/// Settings for the generated bootstrap page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    /// URL of the game runtime script
    #[serde(default = "default_script_url")]
    pub script_url: String,
    /// Page title
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub title: Option<String>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self { script_url: default_script_url(), title: None }
    }
}

fn default_script_url() -> String {
    DEFAULT_RUNTIME_URL.to_string()
}

/// Validation settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidateConfig {
    /// Treat violations as errors
    #[serde(default)]
    pub strict: bool,
}

/// Root configuration for `pixelplay.toml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PixelplayConfig {
    #[serde(default)]
    pub project: ProjectConfig,
    #[serde(default)]
    pub extract: ExtractConfig,
    #[serde(default)]
    pub runtime: RuntimeConfig,
    #[serde(default)]
    pub validate: ValidateConfig,
}

/// Configuration validation error
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigValidationError {
    /// Path to the invalid field (e.g., "runtime.script_url")
    pub field: String,
    /// Error message
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "pixelplay.toml: '{}' {}", self.field, self.message)
    }
}

impl PixelplayConfig {
    /// Manifest generation options for this project.
    ///
    /// The page title is `[runtime] title`, then `[project] name`, then the
    /// built-in default.
    pub fn manifest_options(&self) -> ManifestOptions {
        let title = self
            .runtime
            .title
            .as_deref()
            .or(self.project.name.as_deref())
            .unwrap_or(DEFAULT_TITLE);
        ManifestOptions { runtime_url: self.runtime.script_url.clone(), title: title.to_string() }
    }

    /// Validate the configuration and return any errors
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut errors = Vec::new();

        if self.project.name.as_deref().is_some_and(|name| name.trim().is_empty()) {
            errors.push(ConfigValidationError {
                field: "project.name".to_string(),
                message: "must be a non-empty string".to_string(),
            });
        }

        if self.project.out.as_os_str().is_empty() {
            errors.push(ConfigValidationError {
                field: "project.out".to_string(),
                message: "must be a non-empty path".to_string(),
            });
        }

        if self.runtime.script_url.trim().is_empty() {
            errors.push(ConfigValidationError {
                field: "runtime.script_url".to_string(),
                message: "must be a non-empty URL".to_string(),
            });
        }

        errors
    }

    /// Check if validation passed
    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

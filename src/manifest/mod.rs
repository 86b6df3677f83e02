//! Build manifest generation.
//!
//! Compiles a [`Scene`] into the file set handed to the build backend: a static
//! bootstrap page and a game program embedding the scene verbatim.
//!
//! # Output Format
//!
//! ```json
//! {
//!   "kind": "web-service",
//!   "runtime": "static",
//!   "entry": "index.html",
//!   "files": [
//!     { "path": "index.html", "content": "<!doctype html>..." },
//!     { "path": "game.js", "content": "const SCENE = {...};..." }
//!   ]
//! }
//! ```
//!
//! Generation is deterministic: the same scene (and options) always yields
//! byte-identical files, so manifests can be cached and compared.

mod canonical;
mod templates;

pub use canonical::to_canonical_json;

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::Scene;

/// Deployment kind declared to the build backend.
pub const MANIFEST_KIND: &str = "web-service";

/// Runtime declared to the build backend: static files, no server process.
pub const MANIFEST_RUNTIME: &str = "static";

/// Entry point file name.
pub const ENTRY_FILE: &str = "index.html";

/// Generated game program file name.
pub const GAME_FILE: &str = "game.js";

/// Default runtime script loaded by the bootstrap page.
pub const DEFAULT_RUNTIME_URL: &str = "https://cdn.jsdelivr.net/npm/phaser@3.80.1/dist/phaser.min.js";

/// Default page title.
pub const DEFAULT_TITLE: &str = "Pixelplay";

/// Error during manifest operations.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ManifestError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Options for the generated bootstrap page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestOptions {
    /// URL of the game runtime script
    pub runtime_url: String,
    /// Page title
    pub title: String,
}

impl Default for ManifestOptions {
    fn default() -> Self {
        Self { runtime_url: DEFAULT_RUNTIME_URL.to_string(), title: DEFAULT_TITLE.to_string() }
    }
}

/// A generated source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestFile {
    /// Path relative to the output root
    pub path: String,
    pub content: String,
}

/// File set plus metadata handed to the build backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildManifest {
    pub kind: String,
    pub runtime: String,
    /// File the backend serves as the entry point
    pub entry: String,
    pub files: Vec<ManifestFile>,
}

impl BuildManifest {
    /// Look up a file by path.
    pub fn file(&self, path: &str) -> Option<&ManifestFile> {
        self.files.iter().find(|f| f.path == path)
    }

    /// Serialize the manifest as pretty JSON.
    pub fn to_json(&self) -> Result<String, ManifestError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write every file under `out_dir`, creating it if needed.
    ///
    /// Returns the written paths in manifest order.
    pub fn write_to_dir(&self, out_dir: &Path) -> Result<Vec<PathBuf>, ManifestError> {
        fs::create_dir_all(out_dir)?;

        let mut outputs = Vec::with_capacity(self.files.len());
        for file in &self.files {
            let output_path = out_dir.join(&file.path);
            fs::write(&output_path, file.content.as_bytes())?;
            outputs.push(output_path);
        }

        tracing::info!(dir = %out_dir.display(), files = outputs.len(), "wrote build output");
        Ok(outputs)
    }
}

/// Generate the build manifest for a scene with default options.
pub fn generate_manifest(scene: &Scene) -> Result<BuildManifest, ManifestError> {
    generate_manifest_with(scene, &ManifestOptions::default())
}

/// Generate the build manifest for a scene.
///
/// # Errors
///
/// Only fails if the scene cannot be represented as JSON, which a compiled
/// scene always can.
#[tracing::instrument(level = "debug", skip_all, fields(characters = scene.characters.len()))]
pub fn generate_manifest_with(
    scene: &Scene,
    options: &ManifestOptions,
) -> Result<BuildManifest, ManifestError> {
    let scene_json = to_canonical_json(scene)?;

    let files = vec![
        ManifestFile { path: ENTRY_FILE.to_string(), content: templates::index_html(options, GAME_FILE) },
        ManifestFile { path: GAME_FILE.to_string(), content: templates::game_js(&scene_json) },
    ];
    tracing::debug!(
        scene_bytes = scene_json.len(),
        total_bytes = files.iter().map(|f| f.content.len()).sum::<usize>(),
        "generated manifest"
    );

    Ok(BuildManifest {
        kind: MANIFEST_KIND.to_string(),
        runtime: MANIFEST_RUNTIME.to_string(),
        entry: ENTRY_FILE.to_string(),
        files,
    })
}

//! Build command implementation

use std::path::Path;
use std::process::ExitCode;

use crate::assets::validate_assets;
use crate::config::PixelplayConfig;
use crate::manifest::generate_manifest_with;
use crate::models::{AuthoringSnapshot, Scene};
use crate::scene::to_scene_from_snapshot;

use super::{read_json, EXIT_ERROR, EXIT_SUCCESS};

/// Execute the build command
///
/// The scene is checked against the asset limits and passed through the scene
/// builder again, so a hand-edited file still reaches the generator in range.
/// Violations are warnings unless `[validate] strict` is set.
pub fn run_build(input: &Path, config: &PixelplayConfig, manifest_json: bool) -> ExitCode {
    let scene: Scene = match read_json(input) {
        Ok(scene) => scene,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let snapshot = AuthoringSnapshot::from(&scene);
    let violations = validate_assets(snapshot.background.as_ref(), &snapshot.characters);
    for violation in &violations {
        eprintln!("Warning: {}: {}", input.display(), violation);
    }
    if config.validate.strict && !violations.is_empty() {
        eprintln!("Error: {} asset violation(s) in strict mode", violations.len());
        return ExitCode::from(EXIT_ERROR);
    }

    let scene = to_scene_from_snapshot(&snapshot);
    let manifest = match generate_manifest_with(&scene, &config.manifest_options()) {
        Ok(manifest) => manifest,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    if manifest_json {
        return match manifest.to_json() {
            Ok(text) => {
                println!("{}", text);
                ExitCode::from(EXIT_SUCCESS)
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                ExitCode::from(EXIT_ERROR)
            }
        };
    }

    match manifest.write_to_dir(&config.project.out) {
        Ok(paths) => {
            for path in paths {
                println!("  {}", path.display());
            }
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

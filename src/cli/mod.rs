//! Command-line interface implementation
//!
//! This module provides the CLI entry point and dispatches to submodules
//! for specific command implementations.

mod build;
mod extract;
mod scene;
mod validate;

use clap::{Parser, Subcommand};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use glob::glob;

use crate::config::{load_config, merge_cli_overrides, CliOverrides, PixelplayConfig};

/// Process exit codes
pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;
pub(crate) const EXIT_INVALID_ARGS: u8 = 2;

/// Check if a path has a `.png` extension (case-insensitive).
pub fn is_png_file(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()).is_some_and(|e| e.eq_ignore_ascii_case("png"))
}

/// Find the PNG files directly inside a directory, sorted by path.
///
/// The sort order is the frame order of a multi-frame sprite.
pub fn find_png_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = match glob(&format!("{}/*", glob::Pattern::escape(&dir.display().to_string()))) {
        Ok(paths) => paths.filter_map(Result::ok).filter(|p| is_png_file(p)).collect(),
        Err(_) => Vec::new(),
    };
    files.sort();
    files
}

/// Pixelplay - Turn pixel-art sprites and a drawn level into a playable platformer
#[derive(Parser)]
#[command(name = "pxplay")]
#[command(about = "Pixelplay - Turn pixel-art sprites and a drawn level into a playable platformer")]
#[command(version)]
pub struct Cli {
    /// Path to pixelplay.toml (discovered from the working directory by default)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract playable characters from sprite images
    Extract {
        /// PNG files (one frame each) or directories (one sprite, frames in name order)
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Frame index used for collider fitting
        #[arg(long)]
        frame: Option<usize>,

        /// Character name (defaults to the file or directory name)
        #[arg(long)]
        name: Option<String>,

        /// Fixed character id (only valid with a single input)
        #[arg(long)]
        id: Option<String>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Build a scene from an authoring snapshot, clamping values into range
    Scene {
        /// Authoring snapshot JSON
        input: PathBuf,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Compile a design document into a scene, filling in missing pieces
    Compile {
        /// Design document JSON
        input: PathBuf,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check an authoring snapshot's assets and characters
    Validate {
        /// Authoring snapshot JSON
        input: PathBuf,

        /// Fail when any violation is found
        #[arg(long)]
        strict: bool,

        /// Output the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate the game files for a scene
    Build {
        /// Scene JSON
        input: PathBuf,

        /// Output directory (defaults to project.out)
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Print the manifest as JSON instead of writing files
        #[arg(long)]
        manifest_json: bool,

        /// Fail when the scene's assets exceed the size limits
        #[arg(long)]
        strict: bool,

        /// Page title
        #[arg(long)]
        title: Option<String>,

        /// URL of the game runtime script
        #[arg(long)]
        script_url: Option<String>,
    },
}

/// Run the CLI application
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Extract { inputs, frame, name, id, output } => {
            let overrides = CliOverrides { frame, ..Default::default() };
            let Some(config) = project_config(config_path, &overrides) else {
                return ExitCode::from(EXIT_ERROR);
            };
            extract::run_extract(&inputs, &config, name.as_deref(), id.as_deref(), output.as_deref())
        }
        Commands::Scene { input, output } => scene::run_scene(&input, output.as_deref()),
        Commands::Compile { input, output } => scene::run_compile(&input, output.as_deref()),
        Commands::Validate { input, strict, json } => {
            let overrides = CliOverrides { strict: strict.then_some(true), ..Default::default() };
            let Some(config) = project_config(config_path, &overrides) else {
                return ExitCode::from(EXIT_ERROR);
            };
            validate::run_validate(&input, config.validate.strict, json)
        }
        Commands::Build { input, out, manifest_json, strict, title, script_url } => {
            let overrides = CliOverrides {
                out,
                title,
                script_url,
                strict: strict.then_some(true),
                ..Default::default()
            };
            let Some(config) = project_config(config_path, &overrides) else {
                return ExitCode::from(EXIT_ERROR);
            };
            build::run_build(&input, &config, manifest_json)
        }
    }
}

/// Load the project config and apply CLI overrides, reporting failures.
fn project_config(path: Option<&Path>, overrides: &CliOverrides) -> Option<PixelplayConfig> {
    match load_config(path) {
        Ok(mut config) => {
            merge_cli_overrides(&mut config, overrides);
            Some(config)
        }
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            None
        }
    }
}

/// Read and parse a JSON input file.
fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Cannot read input file '{}': {}", path.display(), e))?;
    serde_json::from_str(&contents).map_err(|e| format!("Invalid JSON in '{}': {}", path.display(), e))
}

/// Write a value as pretty JSON to a file, or to stdout when no path is given.
fn write_json<T: Serialize + ?Sized>(value: &T, output: Option<&Path>) -> Result<(), String> {
    let text = serde_json::to_string_pretty(value).map_err(|e| format!("Cannot serialize output: {}", e))?;
    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .map_err(|e| format!("Cannot create directory '{}': {}", parent.display(), e))?;
            }
            fs::write(path, text + "\n")
                .map_err(|e| format!("Cannot write output file '{}': {}", path.display(), e))
        }
        None => {
            println!("{}", text);
            Ok(())
        }
    }
}

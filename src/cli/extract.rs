//! Extract command implementation

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::config::PixelplayConfig;
use crate::extract::{extract_characters, ExtractOptions, SpriteFrame, SpriteJob};

use super::{find_png_files, is_png_file, write_json, EXIT_ERROR, EXIT_INVALID_ARGS, EXIT_SUCCESS};

/// Execute the extract command
pub fn run_extract(
    inputs: &[PathBuf],
    config: &PixelplayConfig,
    name: Option<&str>,
    id: Option<&str>,
    output: Option<&Path>,
) -> ExitCode {
    if id.is_some() && inputs.len() > 1 {
        eprintln!("Error: --id can only be used with a single input");
        return ExitCode::from(EXIT_INVALID_ARGS);
    }

    let mut jobs = Vec::with_capacity(inputs.len());
    for input in inputs {
        let frames = match load_frames(input) {
            Ok(frames) => frames,
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::from(EXIT_ERROR);
            }
        };
        let default_name = input.file_stem().map(|s| s.to_string_lossy().into_owned());
        jobs.push(SpriteJob {
            frames,
            options: ExtractOptions {
                frame: Some(config.extract.frame),
                id: id.map(str::to_string),
                name: name.map(str::to_string).or(default_name),
                ..Default::default()
            },
        });
    }

    let mut characters = Vec::with_capacity(jobs.len());
    for (input, result) in inputs.iter().zip(extract_characters(&jobs)) {
        match result {
            Ok(character) => characters.push(character),
            Err(e) => {
                eprintln!("Error: {}: {}", input.display(), e);
                return ExitCode::from(EXIT_ERROR);
            }
        }
    }

    if let Err(e) = write_json(&characters, output) {
        eprintln!("Error: {}", e);
        return ExitCode::from(EXIT_ERROR);
    }
    if let Some(path) = output {
        eprintln!("Extracted {} character(s) to {}", characters.len(), path.display());
    }
    ExitCode::from(EXIT_SUCCESS)
}

/// Load the frames of one sprite: a single PNG, or every PNG in a directory.
fn load_frames(input: &Path) -> Result<Vec<SpriteFrame>, String> {
    let paths = if input.is_dir() {
        let files = find_png_files(input);
        if files.is_empty() {
            return Err(format!("No PNG files found in '{}'", input.display()));
        }
        files
    } else if is_png_file(input) {
        vec![input.to_path_buf()]
    } else {
        return Err(format!("'{}' is not a PNG file or directory", input.display()));
    };

    paths
        .iter()
        .map(|path| {
            fs::read(path)
                .map(|bytes| SpriteFrame::from_png_bytes(&bytes))
                .map_err(|e| format!("Cannot read '{}': {}", path.display(), e))
        })
        .collect()
}

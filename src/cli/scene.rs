//! Scene command implementations (scene, compile)

use std::path::Path;
use std::process::ExitCode;

use crate::models::{AuthoringSnapshot, DesignDocument};
use crate::scene::SceneSource;

use super::{read_json, write_json, EXIT_ERROR, EXIT_SUCCESS};

/// Execute the scene command
pub fn run_scene(input: &Path, output: Option<&Path>) -> ExitCode {
    compile_input::<AuthoringSnapshot>(input, output)
}

/// Execute the compile command
pub fn run_compile(input: &Path, output: Option<&Path>) -> ExitCode {
    compile_input::<DesignDocument>(input, output)
}

fn compile_input<S>(input: &Path, output: Option<&Path>) -> ExitCode
where
    S: SceneSource + serde::de::DeserializeOwned,
{
    let source: S = match read_json(input) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let scene = source.to_scene();
    match write_json(&scene, output) {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

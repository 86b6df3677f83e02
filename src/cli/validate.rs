//! Validate command implementation

use std::path::Path;
use std::process::ExitCode;

use crate::assets::validate_assets;
use crate::models::AuthoringSnapshot;
use crate::validate::validate_character;

use super::{read_json, EXIT_ERROR, EXIT_SUCCESS};

/// Violations found in an authoring snapshot.
#[derive(Debug, Default)]
struct ValidationReport {
    assets: Vec<String>,
    /// Per-character violations, indexed like the input characters
    characters: Vec<Vec<String>>,
}

impl ValidationReport {
    fn total(&self) -> usize {
        self.assets.len() + self.characters.iter().map(Vec::len).sum::<usize>()
    }
}

/// Execute the validate command
pub fn run_validate(input: &Path, strict: bool, json: bool) -> ExitCode {
    let snapshot: AuthoringSnapshot = match read_json(input) {
        Ok(snapshot) => snapshot,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let report = ValidationReport {
        assets: validate_assets(snapshot.background.as_ref(), &snapshot.characters),
        characters: snapshot.characters.iter().map(validate_character).collect(),
    };

    if json {
        let value = serde_json::json!({
            "valid": report.total() == 0,
            "assets": report.assets,
            "characters": report.characters,
        });
        match serde_json::to_string_pretty(&value) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::from(EXIT_ERROR);
            }
        }
    } else {
        print_report(input, &report);
    }

    if strict && report.total() > 0 {
        ExitCode::from(EXIT_ERROR)
    } else {
        ExitCode::from(EXIT_SUCCESS)
    }
}

fn print_report(input: &Path, report: &ValidationReport) {
    for violation in &report.assets {
        println!("{}: {}", input.display(), violation);
    }
    for (index, violations) in report.characters.iter().enumerate() {
        for violation in violations {
            println!("{}: character {}: {}", input.display(), index + 1, violation);
        }
    }

    match report.total() {
        0 => println!("{}: OK", input.display()),
        n => println!("{}: {} violation(s)", input.display(), n),
    }
}

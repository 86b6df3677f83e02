//! Author-facing validation of characters
//!
//! Applied before a character enters the authoring list. The accepted ranges
//! are wider than the scene builder's clamps, so a valid character can still
//! be bounded later.

use crate::assets::is_image_data_uri;
use crate::models::CharacterDraft;

/// Maximum length of a character name, in characters.
pub const MAX_NAME_LEN: usize = 50;

/// Minimum collider size on either axis.
pub const MIN_COLLIDER: f64 = 8.0;

/// Accepted `moveSpeed` range.
pub const MOVE_SPEED_RANGE: (f64, f64) = (10.0, 1000.0);

/// Accepted `jumpVelocity` range.
pub const JUMP_VELOCITY_RANGE: (f64, f64) = (50.0, 2000.0);

fn in_range(value: f64, (min, max): (f64, f64)) -> bool {
    value >= min && value <= max
}

/// Check a character before it is accepted into the authoring list.
///
/// Returns one message per problem; an empty list means the character is valid.
///
/// # Examples
///
/// ```
/// use pixelplay::models::CharacterDraft;
/// use pixelplay::validate::validate_character;
///
/// let errors = validate_character(&CharacterDraft::default());
/// assert!(errors.iter().any(|e| e.contains("name")));
/// ```
pub fn validate_character(character: &CharacterDraft) -> Vec<String> {
    let mut errors = Vec::new();

    match character.name.as_deref().map(str::trim) {
        None | Some("") => errors.push("Character name is required".to_string()),
        Some(name) if name.chars().count() > MAX_NAME_LEN => errors.push(format!(
            "Character name must be at most {} characters",
            MAX_NAME_LEN
        )),
        Some(_) => {}
    }

    match character.image_url.as_deref() {
        None | Some("") => errors.push("Character image is required".to_string()),
        Some(url) if !is_image_data_uri(url) => {
            errors.push("Character image must be inline image data (data:image/...)".to_string())
        }
        Some(_) => {}
    }

    if let Some(collider) = &character.collider {
        if collider.w < MIN_COLLIDER || collider.h < MIN_COLLIDER {
            errors.push(format!(
                "Collider must be at least {}x{} pixels",
                MIN_COLLIDER, MIN_COLLIDER
            ));
        }
    }

    match &character.abilities {
        None => errors.push("Character abilities are required".to_string()),
        Some(abilities) => {
            // A missing speed falls back to an in-range default downstream
            if let Some(speed) = abilities.move_speed {
                if !in_range(speed, MOVE_SPEED_RANGE) {
                    errors.push(format!(
                        "Move speed must be between {} and {}",
                        MOVE_SPEED_RANGE.0, MOVE_SPEED_RANGE.1
                    ));
                }
            }
            if let Some(velocity) = abilities.jump_velocity {
                if !in_range(velocity, JUMP_VELOCITY_RANGE) {
                    errors.push(format!(
                        "Jump velocity must be between {} and {}",
                        JUMP_VELOCITY_RANGE.0, JUMP_VELOCITY_RANGE.1
                    ));
                }
            }
        }
    }

    errors
}

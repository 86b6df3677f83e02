//! Playable character types.

use serde::{Deserialize, Serialize};

use super::core::{
    Point, DEFAULT_COLLIDER_SIZE, DEFAULT_JUMP_VELOCITY, DEFAULT_MOVE_SPEED,
};

/// Axis-aligned collision rectangle relative to the sprite origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collider {
    /// Box width in pixels
    pub w: f64,
    /// Box height in pixels
    pub h: f64,
    /// Horizontal offset from the sprite origin
    #[serde(default)]
    pub offset_x: f64,
    /// Vertical offset from the sprite origin
    #[serde(default)]
    pub offset_y: f64,
}

impl Collider {
    pub fn new(w: f64, h: f64, offset_x: f64, offset_y: f64) -> Self {
        Self { w, h, offset_x, offset_y }
    }
}

impl Default for Collider {
    fn default() -> Self {
        Self::new(DEFAULT_COLLIDER_SIZE[0], DEFAULT_COLLIDER_SIZE[1], 0.0, 0.0)
    }
}

/// Ranged attack capability.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shoot {
    pub projectile_speed: f64,
    pub cooldown_ms: f64,
}

/// Movement and action abilities of a compiled character.
///
/// The boolean flags are only serialized when the author set them explicitly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Abilities {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub jump: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub slide: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub punch: Option<bool>,
    pub move_speed: f64,
    pub jump_velocity: f64,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub shoot: Option<Shoot>,
}

impl Default for Abilities {
    fn default() -> Self {
        Self {
            jump: None,
            slide: None,
            punch: None,
            move_speed: DEFAULT_MOVE_SPEED,
            jump_velocity: DEFAULT_JUMP_VELOCITY,
            shoot: None,
        }
    }
}

/// A playable character as it appears in a compiled scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    pub id: String,
    pub name: String,
    /// Remote URL or inline `data:` image. Absent only for synthesized characters.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub image_url: Option<String>,
    pub collider: Collider,
    pub abilities: Abilities,
    pub spawn: Point,
}

/// Partially specified shoot block from authoring input.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShootDraft {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub projectile_speed: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub cooldown_ms: Option<f64>,
}

/// Partially specified abilities from authoring input.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbilitiesDraft {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub jump: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub slide: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub punch: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub move_speed: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub jump_velocity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub shoot: Option<ShootDraft>,
}

/// A character as held by the authoring UI: every field may be missing.
///
/// This is the input to the scene builder and to the author-facing
/// character validator.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterDraft {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub collider: Option<Collider>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub abilities: Option<AbilitiesDraft>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub spawn: Option<Point>,
}

impl From<&Shoot> for ShootDraft {
    fn from(shoot: &Shoot) -> Self {
        Self {
            projectile_speed: Some(shoot.projectile_speed),
            cooldown_ms: Some(shoot.cooldown_ms),
        }
    }
}

impl From<&Abilities> for AbilitiesDraft {
    fn from(abilities: &Abilities) -> Self {
        Self {
            jump: abilities.jump,
            slide: abilities.slide,
            punch: abilities.punch,
            move_speed: Some(abilities.move_speed),
            jump_velocity: Some(abilities.jump_velocity),
            shoot: abilities.shoot.as_ref().map(ShootDraft::from),
        }
    }
}

impl From<&Character> for CharacterDraft {
    fn from(character: &Character) -> Self {
        Self {
            id: Some(character.id.clone()),
            name: Some(character.name.clone()),
            image_url: character.image_url.clone(),
            collider: Some(character.collider),
            abilities: Some(AbilitiesDraft::from(&character.abilities)),
            spawn: Some(character.spawn),
        }
    }
}

//! World settings and control bindings.

use serde::{Deserialize, Serialize};

use super::core::{DEFAULT_GRAVITY, DEFAULT_WORLD_HEIGHT, DEFAULT_WORLD_WIDTH};

/// World dimensions and physics settings. Exactly one per scene.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct World {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Downward acceleration in pixels per second squared
    pub gravity: f64,
}

impl Default for World {
    fn default() -> Self {
        Self { width: DEFAULT_WORLD_WIDTH, height: DEFAULT_WORLD_HEIGHT, gravity: DEFAULT_GRAVITY }
    }
}

/// Partially specified world settings from authoring input.
///
/// Dimensions are kept as raw numbers; the scene builder decides what is usable.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WorldDraft {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub gravity: Option<f64>,
}

impl From<&World> for WorldDraft {
    fn from(world: &World) -> Self {
        Self {
            width: Some(f64::from(world.width)),
            height: Some(f64::from(world.height)),
            gravity: Some(world.gravity),
        }
    }
}

/// Keyboard bindings of the generated game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Controls {
    /// Left/right arrow keys move the player
    pub arrows: bool,
    /// Space bar jumps
    pub space_jump: bool,
    /// Key that restarts the level
    pub reset_key: String,
    /// Key that fires a projectile
    pub shoot_key: String,
}

impl Default for Controls {
    fn default() -> Self {
        Self {
            arrows: true,
            space_jump: true,
            reset_key: "R".to_string(),
            shoot_key: "X".to_string(),
        }
    }
}

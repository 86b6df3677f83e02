//! Core types and defaults shared across models.

use serde::{Deserialize, Serialize};

/// Default world width in pixels.
pub const DEFAULT_WORLD_WIDTH: u32 = 1280;

/// Default world height in pixels.
pub const DEFAULT_WORLD_HEIGHT: u32 = 720;

/// Default gravity in pixels per second squared.
pub const DEFAULT_GRAVITY: f64 = 1200.0;

/// Default horizontal speed of a character in pixels per second.
pub const DEFAULT_MOVE_SPEED: f64 = 180.0;

/// Default jump impulse of a character in pixels per second.
pub const DEFAULT_JUMP_VELOCITY: f64 = 420.0;

/// Default projectile speed for characters that can shoot.
pub const DEFAULT_PROJECTILE_SPEED: f64 = 600.0;

/// Default delay between shots in milliseconds.
pub const DEFAULT_COOLDOWN_MS: f64 = 300.0;

/// Default collider size `[w, h]` for characters without one.
pub const DEFAULT_COLLIDER_SIZE: [f64; 2] = [48.0, 64.0];

/// Display name given to characters that don't have one.
pub const DEFAULT_CHARACTER_NAME: &str = "Hero";

/// Maximum number of playable characters in a scene.
pub const MAX_CHARACTERS: usize = 3;

/// A point in world space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

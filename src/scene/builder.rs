//! Scene builder: authoring snapshot to clamped scene
//!
//! Every numeric field is clamped into a fixed range and every missing field is
//! defaulted. Nothing here returns an error; out-of-range input is bounded
//! instead of rejected.

use crate::geometry::{clamp, dimension};
use crate::models::{
    Abilities, AbilitiesDraft, AuthoringSnapshot, Background, BackgroundDraft, Character,
    CharacterDraft, Collider, Controls, Platform, Point, Scene, Shoot, World, WorldDraft,
    DEFAULT_CHARACTER_NAME, DEFAULT_COOLDOWN_MS, DEFAULT_GRAVITY, DEFAULT_JUMP_VELOCITY,
    DEFAULT_MOVE_SPEED, DEFAULT_PROJECTILE_SPEED, DEFAULT_WORLD_HEIGHT, DEFAULT_WORLD_WIDTH,
    MAX_CHARACTERS,
};

/// Clamp range for `moveSpeed`.
pub const MOVE_SPEED_RANGE: (f64, f64) = (50.0, 800.0);

/// Clamp range for `jumpVelocity`.
pub const JUMP_VELOCITY_RANGE: (f64, f64) = (100.0, 1500.0);

/// Clamp range for `shoot.projectileSpeed`.
pub const PROJECTILE_SPEED_RANGE: (f64, f64) = (100.0, 2000.0);

/// Clamp range for `shoot.cooldownMs`.
pub const COOLDOWN_MS_RANGE: (f64, f64) = (80.0, 2000.0);

/// Clamp range for world gravity.
pub const GRAVITY_RANGE: (f64, f64) = (100.0, 3000.0);

/// Clamp range for collider width and height.
pub const COLLIDER_SIZE_RANGE: (f64, f64) = (8.0, 256.0);

/// Distance above the world floor of the default spawn point.
const DEFAULT_SPAWN_CLEARANCE: f64 = 200.0;

fn within(value: f64, (min, max): (f64, f64)) -> f64 {
    clamp(value, min, max)
}

/// Build a scene from the pieces of an authoring snapshot.
///
/// Only the first [`MAX_CHARACTERS`] characters are kept, in authoring order.
/// Scene targets are read from `background.targets`; with no background (or no
/// `targets` on it) the scene has no targets.
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(characters = characters.len(), platforms = platforms.len())
)]
pub fn to_scene(
    characters: &[CharacterDraft],
    platforms: &[Platform],
    background: Option<&BackgroundDraft>,
    world: &WorldDraft,
    controls: Option<&Controls>,
) -> Scene {
    let world = build_world(world);

    if characters.len() > MAX_CHARACTERS {
        tracing::debug!(
            dropped = characters.len() - MAX_CHARACTERS,
            "dropping characters beyond the limit"
        );
    }

    let characters = characters
        .iter()
        .take(MAX_CHARACTERS)
        .enumerate()
        .map(|(index, draft)| build_character(index, draft, &world))
        .collect();

    let targets = background.and_then(|bg| bg.targets.clone()).unwrap_or_default();
    let background = background.and_then(|bg| {
        bg.image_url
            .as_ref()
            .map(|url| Background { image_url: url.clone(), fit: bg.fit.unwrap_or_default() })
    });

    Scene {
        world,
        background,
        platforms: platforms.to_vec(),
        targets,
        characters,
        controls: controls.cloned().unwrap_or_default(),
    }
}

/// Build a scene from a whole authoring snapshot.
pub fn to_scene_from_snapshot(snapshot: &AuthoringSnapshot) -> Scene {
    to_scene(
        &snapshot.characters,
        &snapshot.platforms,
        snapshot.background.as_ref(),
        &snapshot.world,
        snapshot.controls.as_ref(),
    )
}

fn build_world(draft: &WorldDraft) -> World {
    World {
        width: dimension(draft.width).unwrap_or(DEFAULT_WORLD_WIDTH),
        height: dimension(draft.height).unwrap_or(DEFAULT_WORLD_HEIGHT),
        gravity: within(draft.gravity.unwrap_or(DEFAULT_GRAVITY), GRAVITY_RANGE),
    }
}

fn build_character(index: usize, draft: &CharacterDraft, world: &World) -> Character {
    let collider = match draft.collider {
        Some(c) => Collider {
            w: within(c.w, COLLIDER_SIZE_RANGE),
            h: within(c.h, COLLIDER_SIZE_RANGE),
            ..c
        },
        None => Collider::default(),
    };

    let spawn = draft.spawn.unwrap_or(Point::new(
        100.0,
        world.height as f64 - DEFAULT_SPAWN_CLEARANCE,
    ));

    Character {
        id: draft.id.clone().unwrap_or_else(|| format!("char-{}", index + 1)),
        name: draft.name.clone().unwrap_or_else(|| DEFAULT_CHARACTER_NAME.to_string()),
        image_url: draft.image_url.clone(),
        collider,
        abilities: build_abilities(draft.abilities.as_ref()),
        spawn: Point::new(
            clamp(spawn.x, 0.0, world.width as f64),
            clamp(spawn.y, 0.0, world.height as f64),
        ),
    }
}

fn build_abilities(draft: Option<&AbilitiesDraft>) -> Abilities {
    let Some(draft) = draft else {
        return Abilities::default();
    };

    Abilities {
        jump: draft.jump,
        slide: draft.slide,
        punch: draft.punch,
        move_speed: within(draft.move_speed.unwrap_or(DEFAULT_MOVE_SPEED), MOVE_SPEED_RANGE),
        jump_velocity: within(
            draft.jump_velocity.unwrap_or(DEFAULT_JUMP_VELOCITY),
            JUMP_VELOCITY_RANGE,
        ),
        shoot: draft.shoot.map(|shoot| Shoot {
            projectile_speed: within(
                shoot.projectile_speed.unwrap_or(DEFAULT_PROJECTILE_SPEED),
                PROJECTILE_SPEED_RANGE,
            ),
            cooldown_ms: within(shoot.cooldown_ms.unwrap_or(DEFAULT_COOLDOWN_MS), COOLDOWN_MS_RANGE),
        }),
    }
}

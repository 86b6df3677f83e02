//! Design-to-scene compiler
//!
//! Maps the entities of a [`DesignDocument`] onto scene objects in input order,
//! then fills structural gaps: a ground platform when there are no platforms
//! and a default hero when there is no player spawn. Numbers are taken as given.

use serde_json::{Map, Value};

use crate::geometry::dimension;
use crate::models::{
    Abilities, Character, Collider, Controls, DesignDocument, Entity, EntityKind,
    EntityShape, Platform, Point, Scene, Shoot, Target, TargetKind, World, DEFAULT_CHARACTER_NAME,
    DEFAULT_GRAVITY, DEFAULT_JUMP_VELOCITY, DEFAULT_MOVE_SPEED, DEFAULT_WORLD_HEIGHT,
    DEFAULT_WORLD_WIDTH, MAX_CHARACTERS,
};

/// Default size of coin, goal, hazard, and enemy targets.
pub const DEFAULT_TARGET_SIZE: f64 = 28.0;

/// Height of the synthesized ground platform.
pub const GROUND_HEIGHT: f64 = 60.0;

/// Width given to a vertical line platform.
pub const LINE_FALLBACK_WIDTH: f64 = 24.0;

/// Minimum thickness of a line platform.
pub const LINE_MIN_THICKNESS: f64 = 4.0;

/// Spawn point of a player spawn entity without coordinates.
pub const DEFAULT_ENTITY_SPAWN: [f64; 2] = [100.0, 100.0];

/// Distance from the bottom-left corner of the fallback hero spawn.
const FALLBACK_SPAWN_INSET: f64 = 120.0;

/// Compile a design document into a scene.
///
/// Unknown entity types are ignored so newer editors can add kinds without
/// breaking older compilers. The result always has at least one platform and
/// one character.
#[tracing::instrument(level = "debug", skip_all, fields(entities = doc.entities.len()))]
pub fn ensure_scene(doc: &DesignDocument) -> Scene {
    let world = World {
        width: dimension(Some(doc.canvas.width)).unwrap_or(DEFAULT_WORLD_WIDTH),
        height: dimension(Some(doc.canvas.height)).unwrap_or(DEFAULT_WORLD_HEIGHT),
        gravity: DEFAULT_GRAVITY,
    };

    let mut platforms = Vec::new();
    let mut targets = Vec::new();
    let mut characters = Vec::new();

    for entity in &doc.entities {
        match entity.kind {
            EntityKind::Platform => {
                if let Some(platform) = platform_from_entity(entity) {
                    platforms.push(platform);
                } else {
                    tracing::debug!(shape = ?entity.shape, "skipping platform without usable geometry");
                }
            }
            EntityKind::Coin => targets.push(target_from_entity(entity, TargetKind::Coin)),
            EntityKind::Goal => targets.push(target_from_entity(entity, TargetKind::Goal)),
            EntityKind::Hazard => targets.push(target_from_entity(entity, TargetKind::Hazard)),
            EntityKind::Enemy => {
                let mut enemy = target_from_entity(entity, TargetKind::Enemy);
                enemy.props = entity.props.clone();
                targets.push(enemy);
            }
            EntityKind::PlayerSpawn => {
                if characters.len() < MAX_CHARACTERS {
                    let character = character_from_entity(entity, characters.len());
                    characters.push(character);
                } else {
                    tracing::debug!("ignoring player spawn beyond the character limit");
                }
            }
            EntityKind::Unknown => tracing::debug!("ignoring entity of unknown type"),
        }
    }

    if platforms.is_empty() {
        tracing::debug!("no platforms, adding ground");
        platforms.push(Platform::new(
            0.0,
            world.height as f64 - GROUND_HEIGHT,
            world.width as f64,
            GROUND_HEIGHT,
        ));
    }

    if characters.is_empty() {
        tracing::debug!("no player spawn, adding default hero");
        characters.push(Character {
            id: "char-1".to_string(),
            name: DEFAULT_CHARACTER_NAME.to_string(),
            image_url: None,
            collider: Collider::default(),
            abilities: Abilities::default(),
            spawn: Point::new(FALLBACK_SPAWN_INSET, world.height as f64 - FALLBACK_SPAWN_INSET),
        });
    }

    Scene {
        world,
        background: None,
        platforms,
        targets,
        characters,
        controls: Controls::default(),
    }
}

fn platform_from_entity(entity: &Entity) -> Option<Platform> {
    let x = entity.x.unwrap_or(0.0);
    let y = entity.y.unwrap_or(0.0);

    match entity.shape {
        Some(EntityShape::Rect) | None => {
            let (w, h) = (entity.w?, entity.h?);
            Some(Platform::new(x, y, w, h))
        }
        Some(EntityShape::Line) => {
            let (x2, y2) = (entity.x2?, entity.y2?);
            let dx = (x2 - x).abs();
            let w = if dx == 0.0 { LINE_FALLBACK_WIDTH } else { dx };
            let h = (y2 - y).abs().max(LINE_MIN_THICKNESS);
            Some(Platform::new(x.min(x2), y.min(y2), w, h))
        }
        Some(EntityShape::Other) => None,
    }
}

fn target_from_entity(entity: &Entity, kind: TargetKind) -> Target {
    Target {
        x: entity.x.unwrap_or(0.0),
        y: entity.y.unwrap_or(0.0),
        w: entity.w.unwrap_or(DEFAULT_TARGET_SIZE),
        h: entity.h.unwrap_or(DEFAULT_TARGET_SIZE),
        kind,
        props: None,
    }
}

fn character_from_entity(entity: &Entity, index: usize) -> Character {
    let props = entity.props.as_ref();

    Character {
        id: entity.id.clone().unwrap_or_else(|| format!("char-{}", index + 1)),
        name: entity.label.clone().unwrap_or_else(|| DEFAULT_CHARACTER_NAME.to_string()),
        image_url: props
            .and_then(|p| p.get("imageUrl"))
            .and_then(Value::as_str)
            .map(str::to_string),
        collider: props
            .and_then(|p| p.get("collider"))
            .and_then(|v| serde_json::from_value::<Collider>(v.clone()).ok())
            .unwrap_or_default(),
        abilities: overlay_abilities(props),
        spawn: Point::new(
            entity.x.unwrap_or(DEFAULT_ENTITY_SPAWN[0]),
            entity.y.unwrap_or(DEFAULT_ENTITY_SPAWN[1]),
        ),
    }
}

/// Overlay entity props onto the default abilities, without clamping.
///
/// Each key is read on its own, so a mistyped prop only loses that value.
fn overlay_abilities(props: Option<&Map<String, Value>>) -> Abilities {
    let number = |key: &str| props.and_then(|p| p.get(key)).and_then(Value::as_f64);
    let flag = |key: &str| props.and_then(|p| p.get(key)).and_then(Value::as_bool);

    let shoot = props.and_then(|p| p.get("shoot")).and_then(Value::as_object).and_then(|s| {
        Some(Shoot {
            projectile_speed: s.get("projectileSpeed").and_then(Value::as_f64)?,
            cooldown_ms: s.get("cooldownMs").and_then(Value::as_f64)?,
        })
    });

    Abilities {
        jump: flag("jump"),
        slide: flag("slide"),
        punch: flag("punch"),
        move_speed: number("moveSpeed").unwrap_or(DEFAULT_MOVE_SPEED),
        jump_velocity: number("jumpVelocity").unwrap_or(DEFAULT_JUMP_VELOCITY),
        shoot,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Canvas;
    use serde_json::json;

    fn doc(entities: serde_json::Value) -> DesignDocument {
        serde_json::from_value(json!({
            "canvas": {"width": 1280, "height": 720},
            "entities": entities,
        }))
        .unwrap()
    }

    #[test]
    fn test_empty_document_gets_fallbacks() {
        let scene = ensure_scene(&doc(json!([])));
        assert_eq!(scene.platforms, vec![Platform::new(0.0, 660.0, 1280.0, 60.0)]);
        assert_eq!(scene.characters.len(), 1);
        let hero = &scene.characters[0];
        assert_eq!(hero.id, "char-1");
        assert_eq!(hero.name, "Hero");
        assert_eq!(hero.spawn, Point::new(120.0, 600.0));
        assert_eq!(hero.image_url, None);
        assert_eq!(hero.abilities.move_speed, 180.0);
        assert_eq!(hero.abilities.jump_velocity, 420.0);
    }

    #[test]
    fn test_rect_platform() {
        let scene = ensure_scene(&doc(json!([
            {"type": "platform", "shape": "rect", "x": 10, "y": 500, "w": 200, "h": 20}
        ])));
        assert_eq!(scene.platforms, vec![Platform::new(10.0, 500.0, 200.0, 20.0)]);
    }

    #[test]
    fn test_rect_platform_without_size_is_skipped() {
        let scene = ensure_scene(&doc(json!([
            {"type": "platform", "shape": "rect", "x": 10, "y": 500}
        ])));
        // Only the synthesized ground remains
        assert_eq!(scene.platforms, vec![Platform::new(0.0, 660.0, 1280.0, 60.0)]);
    }

    #[test]
    fn test_line_platform_becomes_thin_box() {
        let scene = ensure_scene(&doc(json!([
            {"type": "platform", "shape": "line", "x": 300, "y": 400, "x2": 100, "y2": 402},
            {"type": "platform", "shape": "line", "x": 50, "y": 100, "x2": 50, "y2": 180}
        ])));
        assert_eq!(scene.platforms[0], Platform::new(100.0, 400.0, 200.0, 4.0));
        assert_eq!(scene.platforms[1], Platform::new(50.0, 100.0, 24.0, 80.0));
    }

    #[test]
    fn test_targets_default_size_and_kind() {
        let scene = ensure_scene(&doc(json!([
            {"type": "coin", "x": 1, "y": 2},
            {"type": "goal", "x": 3, "y": 4, "w": 40, "h": 80},
            {"type": "hazard", "x": 5, "y": 6}
        ])));
        let kinds: Vec<TargetKind> = scene.targets.iter().map(|t| t.kind).collect();
        assert_eq!(kinds, vec![TargetKind::Coin, TargetKind::Goal, TargetKind::Hazard]);
        assert_eq!((scene.targets[0].w, scene.targets[0].h), (28.0, 28.0));
        assert_eq!((scene.targets[1].w, scene.targets[1].h), (40.0, 80.0));
    }

    #[test]
    fn test_enemy_keeps_props_unclamped() {
        let scene = ensure_scene(&doc(json!([
            {"type": "enemy", "x": 10, "y": 20, "props": {"patrol": {"range": 99999, "speed": -5}}}
        ])));
        let enemy = &scene.targets[0];
        assert_eq!(enemy.kind, TargetKind::Enemy);
        let props = enemy.props.as_ref().unwrap();
        assert_eq!(props["patrol"]["range"], json!(99999));
        assert_eq!(props["patrol"]["speed"], json!(-5));
    }

    #[test]
    fn test_player_spawn_overlays_props() {
        let scene = ensure_scene(&doc(json!([
            {"type": "playerSpawn", "id": "p1", "label": "Pip", "x": 64, "y": 32,
             "props": {"moveSpeed": 5000, "jump": true,
                       "collider": {"w": 20, "h": 30, "offsetX": 2, "offsetY": 1}}}
        ])));
        let c = &scene.characters[0];
        assert_eq!(c.id, "p1");
        assert_eq!(c.name, "Pip");
        assert_eq!(c.spawn, Point::new(64.0, 32.0));
        // No clamping on this path
        assert_eq!(c.abilities.move_speed, 5000.0);
        assert_eq!(c.abilities.jump_velocity, 420.0);
        assert_eq!(c.abilities.jump, Some(true));
        assert_eq!(c.collider, Collider::new(20.0, 30.0, 2.0, 1.0));
    }

    #[test]
    fn test_player_spawn_keeps_valid_props_beside_bad_ones() {
        let scene = ensure_scene(&doc(json!([
            {"type": "playerSpawn",
             "props": {"moveSpeed": 300, "jumpVelocity": 600, "shoot": true, "slide": "yes", "punch": false}}
        ])));
        let abilities = &scene.characters[0].abilities;
        assert_eq!(abilities.move_speed, 300.0);
        assert_eq!(abilities.jump_velocity, 600.0);
        assert_eq!(abilities.shoot, None);
        assert_eq!(abilities.slide, None);
        assert_eq!(abilities.punch, Some(false));
    }

    #[test]
    fn test_player_spawn_shoot_needs_both_numbers() {
        let scene = ensure_scene(&doc(json!([
            {"type": "playerSpawn", "props": {"shoot": {"projectileSpeed": 900, "cooldownMs": 40}}},
            {"type": "playerSpawn", "props": {"shoot": {"projectileSpeed": 900}}}
        ])));
        assert_eq!(
            scene.characters[0].abilities.shoot,
            Some(Shoot { projectile_speed: 900.0, cooldown_ms: 40.0 })
        );
        assert_eq!(scene.characters[1].abilities.shoot, None);
    }

    #[test]
    fn test_player_spawn_defaults() {
        let scene = ensure_scene(&doc(json!([{"type": "playerSpawn"}])));
        let c = &scene.characters[0];
        assert_eq!(c.id, "char-1");
        assert_eq!(c.spawn, Point::new(100.0, 100.0));
        assert_eq!(c.collider, Collider::new(48.0, 64.0, 0.0, 0.0));
    }

    #[test]
    fn test_unknown_entities_ignored() {
        let scene = ensure_scene(&doc(json!([
            {"type": "ladder", "x": 1, "y": 2},
            {"type": "coin", "x": 3, "y": 4}
        ])));
        assert_eq!(scene.targets.len(), 1);
    }

    #[test]
    fn test_spawn_ids_unique_and_capped() {
        let spawns: Vec<Entity> =
            (0..5).map(|i| Entity::at(EntityKind::PlayerSpawn, i as f64, 0.0)).collect();
        let document = DesignDocument { canvas: Canvas { width: 640.0, height: 480.0 }, entities: spawns };
        let scene = ensure_scene(&document);
        let ids: Vec<&str> = scene.characters.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["char-1", "char-2", "char-3"]);
    }

    #[test]
    fn test_fractional_or_negative_canvas_uses_default_world() {
        let document: DesignDocument = serde_json::from_value(json!({
            "canvas": {"width": -640, "height": 480.5},
            "entities": []
        }))
        .unwrap();
        let scene = ensure_scene(&document);
        assert_eq!((scene.world.width, scene.world.height), (1280, 720));
    }

    #[test]
    fn test_zero_canvas_uses_default_world() {
        let scene = ensure_scene(&DesignDocument::default());
        assert_eq!((scene.world.width, scene.world.height), (1280, 720));
        assert_eq!(scene.platforms[0].y, 660.0);
    }
}

//! Data models for authoring input, design documents, and compiled scenes

mod character;
mod core;
mod design;
mod scene;
mod world;

// Re-export all public types
pub use character::{Abilities, AbilitiesDraft, Character, CharacterDraft, Collider, Shoot, ShootDraft};
pub use self::core::{
    Point, DEFAULT_CHARACTER_NAME, DEFAULT_COLLIDER_SIZE, DEFAULT_COOLDOWN_MS, DEFAULT_GRAVITY,
    DEFAULT_JUMP_VELOCITY, DEFAULT_MOVE_SPEED, DEFAULT_PROJECTILE_SPEED, DEFAULT_WORLD_HEIGHT,
    DEFAULT_WORLD_WIDTH, MAX_CHARACTERS,
};
pub use design::{Canvas, DesignDocument, Entity, EntityKind, EntityShape};
pub use scene::{
    AuthoringSnapshot, Background, BackgroundDraft, Fit, Platform, Scene, Target, TargetKind,
};
pub use world::{Controls, World, WorldDraft};

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_collider_uses_camel_case_offsets() {
        let collider = Collider::new(20.0, 30.0, 4.0, 2.0);
        let value = serde_json::to_value(collider).unwrap();
        assert_eq!(value, json!({"w": 20.0, "h": 30.0, "offsetX": 4.0, "offsetY": 2.0}));
    }

    #[test]
    fn test_collider_offsets_default_to_zero() {
        let collider: Collider = serde_json::from_str(r#"{"w": 10, "h": 12}"#).unwrap();
        assert_eq!(collider, Collider::new(10.0, 12.0, 0.0, 0.0));
    }

    #[test]
    fn test_abilities_omit_unset_flags() {
        let abilities = Abilities { jump: Some(true), ..Default::default() };
        let value = serde_json::to_value(&abilities).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.get("jump"), Some(&json!(true)));
        assert!(!obj.contains_key("slide"));
        assert!(!obj.contains_key("punch"));
        assert!(!obj.contains_key("shoot"));
        assert_eq!(obj.get("moveSpeed"), Some(&json!(180.0)));
        assert_eq!(obj.get("jumpVelocity"), Some(&json!(420.0)));
    }

    #[test]
    fn test_platform_strips_extra_fields() {
        let platform: Platform =
            serde_json::from_str(r#"{"x": 1, "y": 2, "w": 3, "h": 4, "color": "red"}"#).unwrap();
        assert_eq!(platform, Platform::new(1.0, 2.0, 3.0, 4.0));
        let value = serde_json::to_value(platform).unwrap();
        assert!(value.get("color").is_none());
    }

    #[test]
    fn test_target_kind_serializes_as_type() {
        let target = Target { x: 0.0, y: 0.0, w: 28.0, h: 28.0, kind: TargetKind::Coin, props: None };
        let value = serde_json::to_value(&target).unwrap();
        assert_eq!(value["type"], json!("coin"));
        assert!(value.get("props").is_none());
    }

    #[test]
    fn test_fit_defaults_to_cover() {
        let bg: Background = serde_json::from_str(r#"{"imageUrl": "bg.png"}"#).unwrap();
        assert_eq!(bg.fit, Fit::Cover);
        let bg: Background =
            serde_json::from_str(r#"{"imageUrl": "bg.png", "fit": "stretch"}"#).unwrap();
        assert_eq!(bg.fit, Fit::Stretch);
    }

    #[test]
    fn test_unknown_fit_reads_as_cover() {
        let bg: Background =
            serde_json::from_str(r#"{"imageUrl": "bg.png", "fit": "contain"}"#).unwrap();
        assert_eq!(bg.fit, Fit::Cover);
        let bg: Background = serde_json::from_str(r#"{"imageUrl": "bg.png", "fit": 3}"#).unwrap();
        assert_eq!(bg.fit, Fit::Cover);
        assert_eq!(serde_json::to_value(Fit::Stretch).unwrap(), json!("stretch"));
    }

    #[test]
    fn test_entity_kind_unknown_tag() {
        let entity: Entity = serde_json::from_str(r#"{"type": "ladder", "x": 5}"#).unwrap();
        assert_eq!(entity.kind, EntityKind::Unknown);

        let entity: Entity = serde_json::from_str(r#"{"type": "playerSpawn"}"#).unwrap();
        assert_eq!(entity.kind, EntityKind::PlayerSpawn);
        assert_eq!(entity.x, None);
    }

    #[test]
    fn test_controls_default() {
        let controls = Controls::default();
        assert!(controls.arrows);
        assert!(controls.space_jump);
        assert_eq!(controls.reset_key, "R");
        assert_eq!(controls.shoot_key, "X");
        let value = serde_json::to_value(&controls).unwrap();
        assert_eq!(value["spaceJump"], json!(true));
        assert_eq!(value["resetKey"], json!("R"));
    }

    #[test]
    fn test_authoring_snapshot_accepts_partial_input() {
        let snapshot: AuthoringSnapshot = serde_json::from_str(
            r#"{"characters": [{"name": "Pip"}], "world": {"gravity": 900}}"#,
        )
        .unwrap();
        assert_eq!(snapshot.characters.len(), 1);
        assert_eq!(snapshot.characters[0].name.as_deref(), Some("Pip"));
        assert!(snapshot.platforms.is_empty());
        assert_eq!(snapshot.world.gravity, Some(900.0));
        assert_eq!(snapshot.world.width, None);
    }

    #[test]
    fn test_authoring_snapshot_keeps_odd_world_sizes() {
        let snapshot: AuthoringSnapshot = serde_json::from_str(
            r#"{"world": {"width": -1, "height": 1280.5}, "background": {"imageUrl": "bg.png", "fit": "contain"}}"#,
        )
        .unwrap();
        assert_eq!(snapshot.world.width, Some(-1.0));
        assert_eq!(snapshot.world.height, Some(1280.5));
        assert_eq!(snapshot.background.unwrap().fit, Some(Fit::Cover));
    }
}

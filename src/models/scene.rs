//! The compiled scene document and its static objects.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::character::{Character, CharacterDraft};
use super::world::{Controls, World, WorldDraft};

/// A static collision surface.
///
/// Unknown fields in the input are dropped on deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Platform {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }
}

/// Kind of non-player object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetKind {
    Coin,
    Goal,
    Hazard,
    Enemy,
}

impl std::fmt::Display for TargetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TargetKind::Coin => write!(f, "coin"),
            TargetKind::Goal => write!(f, "goal"),
            TargetKind::Hazard => write!(f, "hazard"),
            TargetKind::Enemy => write!(f, "enemy"),
        }
    }
}

/// A non-player interactive object (coin, goal, hazard, enemy marker).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Target {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
    #[serde(rename = "type")]
    pub kind: TargetKind,
    /// Free-form properties, e.g. enemy patrol parameters
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub props: Option<Map<String, Value>>,
}

/// How the background image is fitted to the world.
///
/// Anything other than `"stretch"` reads as `Cover`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Fit {
    #[default]
    Cover,
    Stretch,
}

impl<'de> Deserialize<'de> for Fit {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(match value.as_str() {
            Some("stretch") => Fit::Stretch,
            _ => Fit::Cover,
        })
    }
}

/// Scene background.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Background {
    pub image_url: String,
    #[serde(default)]
    pub fit: Fit,
}

/// Background as sent by the authoring UI.
///
/// `targets` rides along on the background payload for historical reasons;
/// the scene builder reads scene targets from here.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackgroundDraft {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub fit: Option<Fit>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub targets: Option<Vec<Target>>,
}

/// A fully normalized, bounded description of one playable level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub world: World,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub background: Option<Background>,
    pub platforms: Vec<Platform>,
    pub targets: Vec<Target>,
    pub characters: Vec<Character>,
    pub controls: Controls,
}

/// Immutable snapshot of the authoring UI at the moment of generation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthoringSnapshot {
    #[serde(default)]
    pub characters: Vec<CharacterDraft>,
    #[serde(default)]
    pub platforms: Vec<Platform>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub background: Option<BackgroundDraft>,
    #[serde(default)]
    pub world: WorldDraft,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub controls: Option<Controls>,
}

impl From<&Scene> for AuthoringSnapshot {
    fn from(scene: &Scene) -> Self {
        let background = match &scene.background {
            Some(bg) => Some(BackgroundDraft {
                image_url: Some(bg.image_url.clone()),
                fit: Some(bg.fit),
                targets: Some(scene.targets.clone()),
            }),
            None if !scene.targets.is_empty() => Some(BackgroundDraft {
                image_url: None,
                fit: None,
                targets: Some(scene.targets.clone()),
            }),
            None => None,
        };

        Self {
            characters: scene.characters.iter().map(CharacterDraft::from).collect(),
            platforms: scene.platforms.clone(),
            background,
            world: WorldDraft::from(&scene.world),
            controls: Some(scene.controls.clone()),
        }
    }
}

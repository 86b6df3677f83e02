//! Generic design documents: a canvas plus a flat list of typed entities.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Canvas dimensions of a design document.
///
/// Kept as raw numbers; the compiler falls back to the default world size
/// for anything that is not a positive whole number.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Canvas {
    #[serde(default)]
    pub width: f64,
    #[serde(default)]
    pub height: f64,
}

/// Entity type tag. Unrecognized tags deserialize to `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EntityKind {
    Platform,
    Coin,
    Goal,
    Hazard,
    PlayerSpawn,
    Enemy,
    #[serde(other)]
    Unknown,
}

/// Geometry of a platform entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityShape {
    Rect,
    Line,
    #[serde(other)]
    Other,
}

/// One entity of a design document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    #[serde(rename = "type")]
    pub kind: EntityKind,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub shape: Option<EntityShape>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub x2: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub y2: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub w: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub h: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub props: Option<Map<String, Value>>,
}

impl Entity {
    /// Create an entity of the given kind at a position, with nothing else set.
    pub fn at(kind: EntityKind, x: f64, y: f64) -> Self {
        Self {
            kind,
            shape: None,
            x: Some(x),
            y: Some(y),
            x2: None,
            y2: None,
            w: None,
            h: None,
            id: None,
            label: None,
            props: None,
        }
    }
}

/// Input of the design-to-scene compiler.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DesignDocument {
    #[serde(default)]
    pub canvas: Canvas,
    #[serde(default)]
    pub entities: Vec<Entity>,
}

//! Scene compilation
//!
//! Two independent strategies turn author input into a [`Scene`]:
//!
//! - [`to_scene`] (the scene builder) takes an authoring snapshot and silently
//!   clamps every number into range. It truncates characters but never invents
//!   platforms or characters.
//! - [`ensure_scene`] (the design compiler) maps a generic entity list and
//!   synthesizes a ground platform and a default character when they are
//!   missing. It applies no numeric clamps.
//!
//! Both are exposed through [`SceneSource`] so callers can treat the inputs
//! uniformly while keeping their edge-case behavior distinct.

pub mod builder;
pub mod compiler;

pub use builder::{to_scene, to_scene_from_snapshot};
pub use compiler::ensure_scene;

use crate::models::{AuthoringSnapshot, DesignDocument, Scene};

/// An input that compiles into a complete scene.
pub trait SceneSource {
    /// Compile into a scene. Never fails.
    fn to_scene(&self) -> Scene;
}

impl SceneSource for AuthoringSnapshot {
    fn to_scene(&self) -> Scene {
        to_scene_from_snapshot(self)
    }
}

impl SceneSource for DesignDocument {
    fn to_scene(&self) -> Scene {
        ensure_scene(self)
    }
}

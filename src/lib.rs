//! Pixelplay - turn pixel-art sprites and a drawn level into a playable platformer
//!
//! This library provides functionality to:
//! - Extract playable characters (with fitted colliders) from sprite images
//! - Build a normalized [`models::Scene`] from authoring input or a generic design
//!   document
//! - Validate assets and characters before building
//! - Generate a deterministic static-site manifest that runs the scene in a browser
//!
//! # Examples
//!
//! ```
//! use pixelplay::manifest::generate_manifest;
//! use pixelplay::models::{AuthoringSnapshot, CharacterDraft, AbilitiesDraft};
//! use pixelplay::scene::SceneSource;
//!
//! let snapshot = AuthoringSnapshot {
//!     characters: vec![CharacterDraft {
//!         name: Some("Hero".to_string()),
//!         abilities: Some(AbilitiesDraft { move_speed: Some(50_000.0), ..Default::default() }),
//!         ..Default::default()
//!     }],
//!     ..Default::default()
//! };
//! let scene = snapshot.to_scene();
//! assert_eq!(scene.characters[0].abilities.move_speed, 800.0);
//!
//! let manifest = generate_manifest(&scene).unwrap();
//! assert_eq!(manifest.entry, "index.html");
//! ```

pub mod assets;
pub mod cli;
pub mod config;
pub mod extract;
pub mod geometry;
pub mod manifest;
pub mod models;
pub mod scene;
pub mod validate;

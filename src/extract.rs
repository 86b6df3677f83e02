//! Character extraction from rasterized sprite frames
//!
//! Turns a drawn sprite into a [`Character`]: the frame image is decoded, the
//! opaque region is measured to derive a collider, and authoring options fill in
//! identity, abilities, and spawn point.

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use base64::Engine;
use image::RgbaImage;
use rand::Rng;
use rayon::prelude::*;
use thiserror::Error;

use crate::assets::parse_data_uri;
use crate::geometry::opaque_bounds;
use crate::models::{
    Abilities, Character, Collider, Point, DEFAULT_CHARACTER_NAME, DEFAULT_WORLD_HEIGHT,
};

/// Padding added around the opaque region on each side, in pixels.
pub const COLLIDER_PADDING: u32 = 2;

/// Minimum collider size `[w, h]` derived from a sprite with opaque pixels.
pub const MIN_COLLIDER_SIZE: [u32; 2] = [16, 24];

/// Minimum collider size `[w, h]` for a fully transparent sprite.
pub const MIN_EMPTY_COLLIDER_SIZE: [u32; 2] = [24, 32];

/// Spawn point given to extracted characters without one.
pub const DEFAULT_SPAWN: [f64; 2] = [100.0, DEFAULT_WORLD_HEIGHT as f64 - 200.0];

/// Error while extracting a character.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ExtractError {
    /// No frames to pick from
    #[error("sprite has no frames")]
    EmptyFrames,
    /// Reference kind the decoder refuses to dereference
    #[error("unsupported image source: {0}")]
    UnsupportedSource(String),
    /// `data:` URI that is not base64 encoded
    #[error("malformed data URI: {0}")]
    MalformedDataUri(String),
    /// Invalid base64 payload
    #[error("invalid base64 image data: {0}")]
    Base64(#[from] base64::DecodeError),
    /// Image bytes could not be decoded
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),
}

/// Decodes an image reference into an RGBA pixel buffer.
pub trait ImageDecoder: Sync {
    fn decode(&self, reference: &str) -> Result<RgbaImage, ExtractError>;
}

/// Default decoder: base64 `data:` URIs and local file paths.
///
/// Remote URLs are refused; the extractor never fetches over the network.
#[derive(Debug, Default, Clone, Copy)]
pub struct InlineDecoder;

impl ImageDecoder for InlineDecoder {
    fn decode(&self, reference: &str) -> Result<RgbaImage, ExtractError> {
        if reference.starts_with("data:") {
            let (header, payload) = parse_data_uri(reference)
                .filter(|(header, _)| header.ends_with(";base64"))
                .ok_or_else(|| ExtractError::MalformedDataUri(truncate(reference)))?;
            tracing::trace!(header, bytes = payload.len(), "decoding inline image");
            let bytes = base64::engine::general_purpose::STANDARD.decode(payload.trim())?;
            return Ok(image::load_from_memory(&bytes)?.to_rgba8());
        }

        if reference.contains("://") {
            return Err(ExtractError::UnsupportedSource(truncate(reference)));
        }

        Ok(image::open(Path::new(reference))?.to_rgba8())
    }
}

fn truncate(reference: &str) -> String {
    const MAX: usize = 48;
    match reference.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &reference[..idx]),
        None => reference.to_string(),
    }
}

/// One frame of a drawn sprite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteFrame {
    /// Image reference for the frame (usually an inline PNG)
    pub image_url: String,
}

impl SpriteFrame {
    pub fn new(image_url: impl Into<String>) -> Self {
        Self { image_url: image_url.into() }
    }

    /// Wrap encoded PNG bytes as an inline `data:image/png;base64,` frame.
    pub fn from_png_bytes(bytes: &[u8]) -> Self {
        let payload = base64::engine::general_purpose::STANDARD.encode(bytes);
        Self::new(format!("data:image/png;base64,{}", payload))
    }
}

/// Authoring options for extraction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractOptions {
    /// Frame to use (defaults to 0; out of range falls back to 0)
    pub frame: Option<usize>,
    /// Fixed id; generated when absent
    pub id: Option<String>,
    pub name: Option<String>,
    pub abilities: Option<Abilities>,
    pub spawn: Option<Point>,
}

/// A sprite and its options, for batch extraction.
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteJob {
    pub frames: Vec<SpriteFrame>,
    pub options: ExtractOptions,
}

/// Generate a character id of the form `char-{unix_ms}-{suffix}`.
pub fn generate_character_id() -> String {
    const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

    let millis = SystemTime::now().duration_since(UNIX_EPOCH).map(|d| d.as_millis()).unwrap_or(0);
    let mut rng = rand::thread_rng();
    let suffix: String =
        (0..6).map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char).collect();

    format!("char-{}-{}", millis, suffix)
}

/// Derive a collider from the opaque region of a sprite.
///
/// A fully transparent sprite gets a collider covering the whole image (at least
/// 24x32). Otherwise the opaque bounding box is padded by 2px per side, grown to
/// at least 16x24, and centered in the sprite.
pub fn collider_from_image(image: &RgbaImage) -> Collider {
    let (sprite_w, sprite_h) = image.dimensions();

    let Some(bounds) = opaque_bounds(image) else {
        return Collider::new(
            sprite_w.max(MIN_EMPTY_COLLIDER_SIZE[0]) as f64,
            sprite_h.max(MIN_EMPTY_COLLIDER_SIZE[1]) as f64,
            0.0,
            0.0,
        );
    };

    let w = (bounds.width() + COLLIDER_PADDING * 2).max(MIN_COLLIDER_SIZE[0]);
    let h = (bounds.height() + COLLIDER_PADDING * 2).max(MIN_COLLIDER_SIZE[1]);
    let offset_x = (sprite_w as i64 - w as i64).div_euclid(2).max(0);
    let offset_y = (sprite_h as i64 - h as i64).div_euclid(2).max(0);

    Collider::new(w as f64, h as f64, offset_x as f64, offset_y as f64)
}

/// Extract a character using the default [`InlineDecoder`].
pub fn extract_character(
    frames: &[SpriteFrame],
    options: &ExtractOptions,
) -> Result<Character, ExtractError> {
    extract_character_with(&InlineDecoder, frames, options)
}

/// Extract a character from the selected frame of a sprite.
///
/// # Errors
///
/// Returns [`ExtractError::EmptyFrames`] if `frames` is empty, or a decode
/// error if the frame image cannot be read. No partial character is produced.
pub fn extract_character_with<D: ImageDecoder + ?Sized>(
    decoder: &D,
    frames: &[SpriteFrame],
    options: &ExtractOptions,
) -> Result<Character, ExtractError> {
    if frames.is_empty() {
        return Err(ExtractError::EmptyFrames);
    }

    let requested = options.frame.unwrap_or(0);
    let index = if requested < frames.len() { requested } else { 0 };
    if index != requested {
        tracing::debug!(requested, frames = frames.len(), "frame index out of range, using frame 0");
    }
    let frame = &frames[index];

    let image = decoder.decode(&frame.image_url)?;
    let collider = collider_from_image(&image);

    let id = options.id.clone().unwrap_or_else(generate_character_id);
    tracing::debug!(
        id = %id,
        width = image.width(),
        height = image.height(),
        collider_w = collider.w,
        collider_h = collider.h,
        "extracted character"
    );

    Ok(Character {
        id,
        name: options.name.clone().unwrap_or_else(|| DEFAULT_CHARACTER_NAME.to_string()),
        image_url: Some(frame.image_url.clone()),
        collider,
        abilities: options
            .abilities
            .clone()
            .unwrap_or_else(|| Abilities { jump: Some(true), ..Default::default() }),
        spawn: options.spawn.unwrap_or(Point::new(DEFAULT_SPAWN[0], DEFAULT_SPAWN[1])),
    })
}

/// Extract several characters in parallel. Results keep the input order.
pub fn extract_characters(jobs: &[SpriteJob]) -> Vec<Result<Character, ExtractError>> {
    extract_characters_with(&InlineDecoder, jobs)
}

/// Extract several characters in parallel with a custom decoder.
pub fn extract_characters_with<D: ImageDecoder + ?Sized>(
    decoder: &D,
    jobs: &[SpriteJob],
) -> Vec<Result<Character, ExtractError>> {
    jobs.par_iter()
        .map(|job| extract_character_with(decoder, &job.frames, &job.options))
        .collect()
}

//! Asset size and count checks run before a scene is handed to the build backend.
//!
//! Only inline `data:` images are measured. Remote URLs are never fetched and
//! count as zero bytes.

use crate::models::{BackgroundDraft, CharacterDraft, MAX_CHARACTERS};

/// Bytes per megabyte used for limits and reporting.
pub const BYTES_PER_MB: u64 = 1024 * 1024;

/// Maximum decoded size of an inline background image, in MB.
pub const MAX_BACKGROUND_MB: f64 = 1.5;

/// Maximum decoded size of an inline character sprite, in MB.
pub const MAX_SPRITE_MB: f64 = 1.0;

/// Split an inline `data:` URI into its header and payload.
///
/// Returns `None` for anything that is not a `data:` URI with a payload
/// separator. The header excludes the `data:` scheme, e.g. `image/png;base64`.
pub fn parse_data_uri(reference: &str) -> Option<(&str, &str)> {
    let rest = reference.strip_prefix("data:")?;
    rest.split_once(',')
}

/// Whether a reference is an inline image in `data:image/...` form.
pub fn is_image_data_uri(reference: &str) -> bool {
    reference.starts_with("data:image/")
}

/// Estimate the decoded byte size of an image reference.
///
/// For inline data this is `floor(payload_len * 3 / 4)`. Remote URLs and
/// other references cost zero.
///
/// # Examples
///
/// ```
/// use pixelplay::assets::estimate_bytes;
///
/// assert_eq!(estimate_bytes("data:image/png;base64,AAAA"), 3);
/// assert_eq!(estimate_bytes("https://example.com/hero.png"), 0);
/// ```
pub fn estimate_bytes(reference: &str) -> u64 {
    match parse_data_uri(reference) {
        Some((_, payload)) => (payload.len() as u64) * 3 / 4,
        None => 0,
    }
}

fn to_mb(bytes: u64) -> f64 {
    bytes as f64 / BYTES_PER_MB as f64
}

fn check_size(label: &str, reference: &str, limit_mb: f64, violations: &mut Vec<String>) {
    let bytes = estimate_bytes(reference);
    if to_mb(bytes) > limit_mb {
        violations.push(format!(
            "{} is {:.2} MB, which exceeds the {:.1} MB limit",
            label,
            to_mb(bytes),
            limit_mb
        ));
    }
}

/// Check a candidate background and character list against asset limits.
///
/// Returns one human-readable message per violation; an empty list means the
/// assets are acceptable. The character count is checked against the raw
/// input so the UI can warn before the scene builder truncates.
pub fn validate_assets(
    background: Option<&BackgroundDraft>,
    characters: &[CharacterDraft],
) -> Vec<String> {
    let mut violations = Vec::new();

    if let Some(url) = background.and_then(|bg| bg.image_url.as_deref()) {
        check_size("Background image", url, MAX_BACKGROUND_MB, &mut violations);
    }

    for (index, character) in characters.iter().enumerate() {
        if let Some(url) = character.image_url.as_deref() {
            let label = match character.name.as_deref() {
                Some(name) if !name.trim().is_empty() => format!("Sprite for \"{}\"", name),
                _ => format!("Sprite for character {}", index + 1),
            };
            check_size(&label, url, MAX_SPRITE_MB, &mut violations);
        }
    }

    if characters.len() > MAX_CHARACTERS {
        violations.push(format!(
            "Too many characters: {} supplied, at most {} are allowed",
            characters.len(),
            MAX_CHARACTERS
        ));
    }

    if !violations.is_empty() {
        tracing::debug!(count = violations.len(), "asset validation found violations");
    }

    violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine;

    /// Build a data URI encoding `bytes` raw bytes.
    fn data_uri_of_size(bytes: usize) -> String {
        let payload = base64::engine::general_purpose::STANDARD.encode(vec![0u8; bytes]);
        format!("data:image/png;base64,{}", payload)
    }

    fn background(url: &str) -> BackgroundDraft {
        BackgroundDraft { image_url: Some(url.to_string()), ..Default::default() }
    }

    #[test]
    fn test_parse_data_uri() {
        assert_eq!(parse_data_uri("data:image/png;base64,abcd"), Some(("image/png;base64", "abcd")));
        assert_eq!(parse_data_uri("https://x/y.png"), None);
        assert_eq!(parse_data_uri("data:nocomma"), None);
    }

    #[test]
    fn test_estimate_bytes_floors() {
        assert_eq!(estimate_bytes("data:image/png;base64,AAAAA"), 3);
        assert_eq!(estimate_bytes("data:image/png;base64,"), 0);
        assert_eq!(estimate_bytes("/sprites/hero.png"), 0);
    }

    #[test]
    fn test_two_megabyte_background_reports_one_violation() {
        let url = data_uri_of_size(2 * 1024 * 1024);
        let violations = validate_assets(Some(&background(&url)), &[]);
        assert_eq!(violations.len(), 1);
        assert!(violations[0].contains("2.00 MB"), "{}", violations[0]);
        assert!(violations[0].contains("1.5 MB"), "{}", violations[0]);
    }

    #[test]
    fn test_background_under_limit_is_valid() {
        let url = data_uri_of_size(3 * 1024);
        assert!(validate_assets(Some(&background(&url)), &[]).is_empty());
    }

    #[test]
    fn test_remote_urls_cost_nothing() {
        let character = CharacterDraft {
            image_url: Some("https://cdn.example.com/huge.png".to_string()),
            ..Default::default()
        };
        let violations =
            validate_assets(Some(&background("https://cdn.example.com/bg.png")), &[character]);
        assert!(violations.is_empty());
    }

    #[test]
    fn test_oversized_sprite_names_character() {
        let character = CharacterDraft {
            name: Some("Pip".to_string()),
            image_url: Some(data_uri_of_size(1024 * 1024 + 3)),
            ..Default::default()
        };
        let violations = validate_assets(None, &[character]);
        assert_eq!(violations.len(), 1);
        assert!(violations[0].contains("Pip"));
        assert!(violations[0].contains("exceeds the 1.0 MB limit"), "{}", violations[0]);
    }

    #[test]
    fn test_too_many_characters() {
        let characters = vec![CharacterDraft::default(); 4];
        let violations = validate_assets(None, &characters);
        assert_eq!(violations.len(), 1);
        assert!(violations[0].contains("Too many characters"));

        let characters = vec![CharacterDraft::default(); 3];
        assert!(validate_assets(None, &characters).is_empty());
    }
}

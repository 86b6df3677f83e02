//! Geometry helpers shared by the extractor and the scene compilers

use image::RgbaImage;

/// Clamp a value into the inclusive range `[min, max]`.
///
/// NaN saturates to `min` so that a malformed input can never escape the range.
///
/// # Examples
///
/// ```
/// use pixelplay::geometry::clamp;
///
/// assert_eq!(clamp(50_000.0, 50.0, 800.0), 800.0);
/// assert_eq!(clamp(-10.0, 100.0, 1500.0), 100.0);
/// assert_eq!(clamp(f64::NAN, 8.0, 256.0), 8.0);
/// ```
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() {
        return min;
    }
    value.clamp(min, max)
}

/// Accept a pixel dimension only when it is a positive whole number that fits in `u32`.
///
/// ```
/// use pixelplay::geometry::dimension;
///
/// assert_eq!(dimension(Some(1280.0)), Some(1280));
/// assert_eq!(dimension(Some(-1.0)), None);
/// assert_eq!(dimension(Some(1280.5)), None);
/// ```
pub fn dimension(value: Option<f64>) -> Option<u32> {
    value
        .filter(|v| v.is_finite() && *v > 0.0 && v.fract() == 0.0 && *v <= u32::MAX as f64)
        .map(|v| v as u32)
}

/// Inclusive pixel bounds of the opaque region of a sprite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelBounds {
    pub min_x: u32,
    pub min_y: u32,
    pub max_x: u32,
    pub max_y: u32,
}

impl PixelBounds {
    /// Width in pixels (bounds are inclusive).
    pub fn width(&self) -> u32 {
        self.max_x - self.min_x + 1
    }

    /// Height in pixels (bounds are inclusive).
    pub fn height(&self) -> u32 {
        self.max_y - self.min_y + 1
    }
}

/// Compute the bounding box of every pixel with non-zero alpha.
///
/// Returns `None` for a fully transparent (or empty) image.
pub fn opaque_bounds(image: &RgbaImage) -> Option<PixelBounds> {
    let mut bounds: Option<PixelBounds> = None;

    for (x, y, pixel) in image.enumerate_pixels() {
        if pixel[3] == 0 {
            continue;
        }
        bounds = Some(match bounds {
            None => PixelBounds { min_x: x, min_y: y, max_x: x, max_y: y },
            Some(b) => PixelBounds {
                min_x: b.min_x.min(x),
                min_y: b.min_y.min(y),
                max_x: b.max_x.max(x),
                max_y: b.max_y.max(y),
            },
        });
    }

    bounds
}

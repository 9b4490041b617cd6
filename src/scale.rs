//! Compensation for the system's wallpaper zoom, and screen-resolution
//! scaling of crops.
//!
//! The system compositor may zoom the wallpaper by up to a fixed maximum
//! (e.g. when the shade is pulled down). A crop chosen in a preview must be
//! shrunk by that factor so the zoomed result matches what the user saw.

use num_traits::Float;

use crate::geom::{FloatPoint, IntPoint, IntRect, InvalidGeometry, check_scale};

/// Maximum scale the system applies to the wallpaper. Always positive.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SystemScale(f32);

impl SystemScale {
    /// No system zoom.
    pub const NONE: Self = Self(1.0);

    /// Validate a scale factor. Zero, negative and NaN are rejected.
    pub fn new(scale: f32) -> Result<Self, InvalidGeometry> {
        check_scale(scale)?;
        Ok(Self(scale))
    }

    pub fn get(self) -> f32 {
        self.0
    }
}

impl Default for SystemScale {
    fn default() -> Self {
        Self::NONE
    }
}

impl TryFrom<f32> for SystemScale {
    type Error = InvalidGeometry;

    fn try_from(scale: f32) -> Result<Self, Self::Error> {
        Self::new(scale)
    }
}

/// Scale `rect` about its integer center.
///
/// With `zoom_in` the rect shrinks by `1 / max_scale` (the system will zoom
/// it back up); otherwise it grows by `max_scale`. Edges truncate toward
/// zero.
pub fn adjust_crop_rect(rect: IntRect, max_scale: SystemScale, zoom_in: bool) -> IntRect {
    let center_x = rect.center_x() as f32;
    let center_y = rect.center_y() as f32;
    let half_w = rect.width() as f32 / 2.0;
    let half_h = rect.height() as f32 / 2.0;
    let scale = if zoom_in {
        max_scale.get()
    } else {
        1.0 / max_scale.get()
    };

    let adjusted = IntRect::new(
        (center_x - half_w / scale) as i32,
        (center_y - half_h / scale) as i32,
        (center_x + half_w / scale) as i32,
        (center_y + half_h / scale) as i32,
    );
    log::trace!(
        "adjust {rect} by {} zoom_in {zoom_in} -> {adjusted}",
        max_scale.get()
    );
    adjusted
}

/// Multiply a size by the system scale, truncating.
pub fn scale_size(size: IntPoint, max_scale: SystemScale) -> IntPoint {
    let s = max_scale.get();
    IntPoint::new((size.x as f32 * s) as i32, (size.y as f32 * s) as i32)
}

/// Point of the wallpaper to center on screen by default.
///
/// The visible rect is first shrunk by the system scale, so the result is
/// the integer center of the area that stays visible under system zoom.
pub fn default_center(visible_rect: IntRect, max_scale: SystemScale) -> FloatPoint {
    let adjusted = adjust_crop_rect(visible_rect, max_scale, true);
    FloatPoint::new(adjusted.center_x() as f32, adjusted.center_y() as f32)
}

/// Enlargement needed to bring a crop up to screen resolution.
///
/// `wallpaper_scale` relates the crop to its real size
/// (`real = crop / wallpaper_scale`). Returns 1.0 when the crop already
/// covers the screen on either axis, when it is empty, or when the factor
/// would be below 1.0; only enlargement is ever reported.
pub fn screen_resolution_scale(
    wallpaper_scale: f32,
    crop_rect: IntRect,
    screen_width: i32,
    screen_height: i32,
) -> Result<f32, InvalidGeometry> {
    check_scale(wallpaper_scale)?;
    let crop_w = crop_rect.width();
    let crop_h = crop_rect.height();
    if crop_w >= screen_width || crop_h >= screen_height {
        return Ok(1.0);
    }
    if crop_rect.is_empty() {
        return Ok(1.0);
    }

    let real_w = Float::round(crop_w as f32 / wallpaper_scale) as i32;
    let real_h = Float::round(crop_h as f32 / wallpaper_scale) as i32;

    // Never enlarge past the real size.
    let (target_w, target_h) = if screen_width > real_w || screen_height > real_h {
        (real_w, real_h)
    } else {
        (screen_width, screen_height)
    };
    let scale = (target_w as f32 / crop_w as f32).min(target_h as f32 / crop_h as f32);
    Ok(if scale < 1.0 { 1.0 } else { scale })
}

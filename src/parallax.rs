//! Parallax travel and crop surface sizing.
//!
//! A home screen scrolls the wallpaper horizontally as pages change, so the
//! wallpaper is rendered onto a *crop surface* wider than the screen. These
//! functions decide how much wider.

use crate::geom::{IntPoint, InvalidGeometry};

/// How many screen widths a non-large-screen crop surface spans.
const WALLPAPER_SCREENS_SPAN: f32 = 2.0;

const ASPECT_RATIO_LANDSCAPE: f32 = 16.0 / 10.0;
const ASPECT_RATIO_PORTRAIT: f32 = 10.0 / 16.0;
const TRAVEL_RATIO_LANDSCAPE: f32 = 1.2;
const TRAVEL_RATIO_PORTRAIT: f32 = 1.5;

/// Smallest screen width, in dp, for a device to count as large screen.
pub const LARGE_SCREEN_MIN_DP: f32 = 720.0;

/// Density that maps one dp to one pixel.
const BASELINE_DENSITY_DPI: f32 = 160.0;

/// Ratio of total horizontal parallax travel to screen width.
///
/// Linear in the aspect ratio `width / height`, pinned at 1.2 for 16:10 and
/// 1.5 for 10:16. Not clamped: extreme aspect ratios extrapolate.
///
/// ```
/// let ratio = zenwallpaper::travel_ratio(1600, 1000);
/// assert!((ratio - 1.2).abs() < 1e-5);
/// ```
pub fn travel_ratio(width: i32, height: i32) -> f32 {
    let aspect = width as f32 / height as f32;

    // (16/10)x + y = 1.2
    // (10/16)x + y = 1.5
    let x = (TRAVEL_RATIO_LANDSCAPE - TRAVEL_RATIO_PORTRAIT)
        / (ASPECT_RATIO_LANDSCAPE - ASPECT_RATIO_PORTRAIT);
    let y = TRAVEL_RATIO_PORTRAIT - x * ASPECT_RATIO_PORTRAIT;
    x * aspect + y
}

/// Crop surface size with room for parallax in both orientations.
///
/// `max_dim`/`min_dim` are the display's long and short sides; `host_width`
/// and `host_height` pick the orientation of the returned height.
pub fn default_crop_surface_size(
    is_large_screen: bool,
    max_dim: i32,
    min_dim: i32,
    host_width: i32,
    host_height: i32,
) -> IntPoint {
    let width = if is_large_screen {
        (max_dim as f32 * travel_ratio(max_dim, min_dim)) as i32
    } else {
        ((min_dim as f32 * WALLPAPER_SCREENS_SPAN) as i32).max(max_dim)
    };
    let height = if host_width < host_height {
        max_dim
    } else {
        min_dim
    };
    IntPoint::new(width, height)
}

/// [`default_crop_surface_size`] for a physical display.
///
/// `real_size` is the display's full pixel size, `window_size` the size of
/// the window hosting the wallpaper (decides portrait vs landscape).
pub fn default_crop_surface_size_for_display(
    real_size: IntPoint,
    window_size: IntPoint,
    is_large_screen: bool,
) -> Result<IntPoint, InvalidGeometry> {
    if real_size.is_degenerate() {
        return Err(InvalidGeometry::ZeroDimension);
    }
    let max_dim = real_size.x.max(real_size.y);
    let min_dim = real_size.x.min(real_size.y);
    Ok(default_crop_surface_size(
        is_large_screen,
        max_dim,
        min_dim,
        window_size.x,
        window_size.y,
    ))
}

/// Convert pixels to density-independent pixels.
pub fn px_to_dp(px: f32, density_dpi: u32) -> f32 {
    px / (density_dpi as f32 / BASELINE_DENSITY_DPI)
}

/// Whether a display's smallest side is at least [`LARGE_SCREEN_MIN_DP`].
pub fn is_large_screen(real_size: IntPoint, density_dpi: u32) -> bool {
    if density_dpi == 0 {
        return false;
    }
    let smallest = real_size.x.min(real_size.y);
    px_to_dp(smallest as f32, density_dpi) >= LARGE_SCREEN_MIN_DP
}

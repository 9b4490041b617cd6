//! Crop rectangle derivation with parallax reserve.
//!
//! A wallpaper shown on a host view at some zoom and scroll offset is
//! cropped to the visible window, then grown to include the extra width
//! (parallax travel) and extra height the crop surface calls for, as far as
//! the zoomed wallpaper has pixels to give.
//!
//! # Coordinate spaces
//!
//! [`CropConfig::compute`] works entirely in *zoomed* pixels: the scroll
//! offsets, host size, crop surface size and the returned rect all live in
//! the space of the wallpaper scaled by `zoom`. [`CropConfig::compute_raw`]
//! maps that rect back onto the raw wallpaper.
//!
//! # Example
//!
//! ```
//! use zenwallpaper::{CropConfig, IntPoint, IntRect};
//!
//! let crop = CropConfig::new(
//!     IntPoint::new(3000, 2000), // raw wallpaper
//!     IntPoint::new(2160, 1920), // crop surface
//!     IntPoint::new(1080, 1920), // host view
//! )
//! .compute()
//! .unwrap();
//!
//! // Full parallax reserve to the right, no room for extra height.
//! assert_eq!(crop, IntRect::new(0, 0, 2160, 1920));
//! ```

use num_traits::Float;

use crate::geom::{FloatPoint, IntPoint, IntRect, InvalidGeometry, check_zoom};

/// Inputs to a single crop computation.
///
/// Built with [`CropConfig::new`] and refined with the consuming setters.
/// Defaults: zoom 1.0, no scroll, left-to-right, multi-crop off, extra width
/// cropped.
#[derive(Clone, Debug, PartialEq)]
pub struct CropConfig {
    /// Raw (unzoomed) wallpaper size.
    pub wallpaper_size: IntPoint,
    /// Crop surface size, including parallax reserve.
    pub default_crop_size: IntPoint,
    /// Size of the view the wallpaper is rendered on.
    pub host_size: IntPoint,
    /// Zoom applied to the raw wallpaper.
    pub zoom: f32,
    /// Offset of the visible window into the zoomed wallpaper.
    pub scroll: IntPoint,
    /// Layout direction. Extra width goes to the leading edge in RTL.
    pub is_rtl: bool,
    /// Per-display crop mode; floors available extra height at zero.
    pub multi_crop: bool,
    /// Whether to reserve extra width for parallax at all.
    pub crop_extra_width: bool,
}

impl CropConfig {
    /// Crop a wallpaper for a host view, given the crop surface size.
    pub fn new(wallpaper_size: IntPoint, default_crop_size: IntPoint, host_size: IntPoint) -> Self {
        Self {
            wallpaper_size,
            default_crop_size,
            host_size,
            zoom: 1.0,
            scroll: IntPoint::new(0, 0),
            is_rtl: false,
            multi_crop: false,
            crop_extra_width: true,
        }
    }

    /// Crop starting from the part of the raw wallpaper the user sees.
    ///
    /// Scroll offsets are the visible rect's top-left corner scaled by
    /// `zoom` and truncated.
    pub fn from_visible_rect(
        wallpaper_size: IntPoint,
        default_crop_size: IntPoint,
        host_size: IntPoint,
        visible_raw_rect: IntRect,
        zoom: f32,
    ) -> Self {
        let scroll_x = (visible_raw_rect.left as f32 * zoom) as i32;
        let scroll_y = (visible_raw_rect.top as f32 * zoom) as i32;
        Self::new(wallpaper_size, default_crop_size, host_size)
            .zoom(zoom)
            .scroll(scroll_x, scroll_y)
    }

    /// Set the zoom applied to the raw wallpaper.
    pub fn zoom(mut self, zoom: f32) -> Self {
        self.zoom = zoom;
        self
    }

    /// Set the scroll offset, in zoomed pixels.
    pub fn scroll(mut self, x: i32, y: i32) -> Self {
        self.scroll = IntPoint::new(x, y);
        self
    }

    /// Set the layout direction.
    pub fn rtl(mut self, is_rtl: bool) -> Self {
        self.is_rtl = is_rtl;
        self
    }

    /// Enable or disable multi-crop mode.
    pub fn multi_crop(mut self, enabled: bool) -> Self {
        self.multi_crop = enabled;
        self
    }

    /// Enable or disable the parallax width reserve.
    pub fn crop_extra_width(mut self, enabled: bool) -> Self {
        self.crop_extra_width = enabled;
        self
    }

    /// Bounds of the wallpaper at the configured zoom.
    pub fn scaled_wallpaper_rect(&self) -> Result<IntRect, InvalidGeometry> {
        check_zoom(self.zoom)?;
        Ok(IntRect::new(
            0,
            0,
            Float::round(self.wallpaper_size.x as f32 * self.zoom) as i32,
            Float::round(self.wallpaper_size.y as f32 * self.zoom) as i32,
        ))
    }

    /// Crop rect in zoomed pixels.
    ///
    /// Starts at the visible window, grows by the extra width toward the
    /// trailing edge (leading edge in RTL) clamped to the zoomed wallpaper,
    /// then grows symmetrically up and down by as much extra height as the
    /// tighter side allows. The result is always contained in
    /// [`scaled_wallpaper_rect`](Self::scaled_wallpaper_rect); a window that
    /// overhangs the zoomed wallpaper is cut at its edges.
    pub fn compute(&self) -> Result<IntRect, InvalidGeometry> {
        let scaled = self.scaled_wallpaper_rect()?;
        let host = self.host_size;
        let (sx, sy) = (self.scroll.x, self.scroll.y);
        let mut crop = IntRect::new(sx, sy, sx.saturating_add(host.x), sy.saturating_add(host.y));

        let extra_width = self.default_crop_size.x.saturating_sub(host.x);
        let extra_height_each_side =
            (self.default_crop_size.y.saturating_sub(host.y) as f32 / 2.0) as i32;

        if self.crop_extra_width {
            if self.is_rtl {
                crop.left = crop.left.saturating_sub(extra_width).max(scaled.left);
            } else {
                crop.right = crop.right.saturating_add(extra_width).min(scaled.right);
            }
        }

        let mut available_top = crop
            .top
            .saturating_sub(scaled.top.max(crop.top.saturating_sub(extra_height_each_side)));
        let mut available_bottom = scaled
            .bottom
            .min(crop.bottom.saturating_add(extra_height_each_side))
            .saturating_sub(crop.bottom);
        if self.multi_crop {
            // Only reachable with zoom < 1, where the visible window can
            // overhang the wallpaper.
            available_top = available_top.max(0);
            available_bottom = available_bottom.max(0);
        }

        // Negative growth shrinks; never past an empty rect.
        let half_height = ((crop.bottom as i64 - crop.top as i64) / 2) as i32;
        let grow = available_top.min(available_bottom).max(-half_height);
        crop.top = crop.top.saturating_sub(grow);
        crop.bottom = crop.bottom.saturating_add(grow);

        // The visible window itself may overhang a wallpaper smaller than
        // the host.
        let crop = crop.clamp_to(&scaled);

        log::trace!(
            "crop {crop} from wallpaper {} zoom {} scroll {} host {} surface {} rtl {} multi {}",
            self.wallpaper_size,
            self.zoom,
            self.scroll,
            self.host_size,
            self.default_crop_size,
            self.is_rtl,
            self.multi_crop
        );
        Ok(crop)
    }

    /// [`compute`](Self::compute) mapped back onto the raw wallpaper.
    ///
    /// Edges are divided by zoom and rounded outward, then clamped to the
    /// raw wallpaper bounds.
    pub fn compute_raw(&self) -> Result<IntRect, InvalidGeometry> {
        let zoomed = self.compute()?;
        Ok(unzoom(zoomed, self.zoom, self.wallpaper_size))
    }
}

/// Map a zoomed-space rect to raw wallpaper pixels.
fn unzoom(rect: IntRect, zoom: f32, wallpaper_size: IntPoint) -> IntRect {
    let floor = |v: i32| Float::floor(v as f32 / zoom) as i32;
    let ceil = |v: i32| Float::ceil(v as f32 / zoom) as i32;
    IntRect::new(
        floor(rect.left).clamp(0, wallpaper_size.x),
        floor(rect.top).clamp(0, wallpaper_size.y),
        ceil(rect.right).clamp(0, wallpaper_size.x),
        ceil(rect.bottom).clamp(0, wallpaper_size.y),
    )
}

/// Data needed to reproduce the parallax reserve for a user's crop.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CropSizeModel {
    /// Zoom of the wallpaper on its host view when the crop was chosen.
    pub wallpaper_zoom: f32,
    /// Size of the view hosting the wallpaper.
    pub host_view_size: IntPoint,
    /// Larger version of `host_view_size` that contains the parallax.
    pub crop_surface_size: IntPoint,
}

/// A user's crop of the raw wallpaper for one display.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FullPreviewCropModel {
    /// The crop, in raw wallpaper pixels.
    pub crop_hint: IntRect,
    /// Parallax data; `None` for no parallax.
    pub crop_size: Option<CropSizeModel>,
}

impl FullPreviewCropModel {
    /// The raw-space crop including parallax reserve.
    ///
    /// Without a [`CropSizeModel`] the hint is returned as is.
    pub fn parallax_crop(
        &self,
        wallpaper_size: IntPoint,
        is_rtl: bool,
        multi_crop: bool,
    ) -> Result<IntRect, InvalidGeometry> {
        let Some(size) = self.crop_size else {
            return Ok(self.crop_hint);
        };
        CropConfig::from_visible_rect(
            wallpaper_size,
            size.crop_surface_size,
            size.host_view_size,
            self.crop_hint,
            size.wallpaper_zoom,
        )
        .rtl(is_rtl)
        .multi_crop(multi_crop)
        .compute_raw()
    }

    /// Center of the hint in raw wallpaper pixels.
    pub fn center(&self) -> FloatPoint {
        self.crop_hint.exact_center()
    }
}

//! Wallpaper crop geometry: parallax crop surfaces, center-crop zoom, and
//! system scale compensation.
//!
//! Pure geometry — no pixel operations, no I/O, `no_std` compatible. Every
//! function is deterministic in its inputs.
//!
//! # Modules
//!
//! - [`geom`] — Point and rect value types, [`InvalidGeometry`]
//! - [`parallax`] — Parallax travel ratio and crop surface sizing
//! - [`fit`] — Centering, cover-fit zoom, visible region, fit-to-size
//! - [`crop`] — Crop rectangle derivation with parallax reserve
//! - [`scale`] — System max-scale compensation, screen resolution scale
//! - [`display`] — Orientation, display sets, per-display crop hints (`alloc`)

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod crop;
#[cfg(feature = "alloc")]
pub mod display;
pub mod fit;
pub mod geom;
pub mod parallax;
pub mod scale;

pub use crop::{CropConfig, CropSizeModel, FullPreviewCropModel};
#[cfg(feature = "alloc")]
pub use display::{
    CropHint, DisplayTarget, FoldState, ScreenOrientation, crop_hints, internal_display_sizes,
    max_displays_dimension, screen_orientation, wallpaper_display,
};
pub use fit::{center_position, fit_to_size, min_zoom, visible_rect};
pub use geom::{FloatPoint, FloatRect, IntPoint, IntRect, InvalidGeometry};
pub use parallax::{
    LARGE_SCREEN_MIN_DP, default_crop_surface_size, default_crop_surface_size_for_display,
    is_large_screen, px_to_dp, travel_ratio,
};
pub use scale::{
    SystemScale, adjust_crop_rect, default_center, scale_size, screen_resolution_scale,
};

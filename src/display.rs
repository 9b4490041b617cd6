//! Multi-display helpers: orientation classification, display size sets,
//! and per-display crop hints.
//!
//! Foldables have an inner and an outer screen. The *wallpaper display* is
//! the one with the largest area; on a single-display device it is the only
//! display.

use alloc::vec::Vec;

use crate::crop::CropConfig;
use crate::fit::{center_position, min_zoom};
use crate::geom::{IntPoint, IntRect, InvalidGeometry};
use crate::parallax::default_crop_surface_size_for_display;

/// Screen orientation as used to key crop hints.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ScreenOrientation {
    /// Handheld, tablet, or foldable outer screen, in portrait.
    Portrait,
    /// Handheld, tablet, or foldable outer screen, in landscape.
    Landscape,
    /// Foldable inner screen, in portrait.
    SquarePortrait,
    /// Foldable inner screen, in landscape.
    SquareLandscape,
}

/// Fold state of a foldable device.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FoldState {
    Folded,
    Unfolded,
}

/// Classify a display.
///
/// `wallpaper_display_size` is the size of the largest display; `foldable`
/// is `None` on devices that do not fold.
pub fn screen_orientation(
    display_size: IntPoint,
    wallpaper_display_size: IntPoint,
    foldable: Option<FoldState>,
) -> ScreenOrientation {
    let is_wallpaper_display = display_size == wallpaper_display_size;
    match foldable {
        None if display_size.y >= display_size.x => ScreenOrientation::Portrait,
        None => ScreenOrientation::Landscape,
        Some(FoldState::Folded) if is_wallpaper_display => ScreenOrientation::SquarePortrait,
        Some(FoldState::Folded) => ScreenOrientation::Portrait,
        Some(FoldState::Unfolded) if !is_wallpaper_display => ScreenOrientation::Portrait,
        Some(FoldState::Unfolded) if display_size.y >= display_size.x => {
            ScreenOrientation::SquareLandscape
        }
        Some(FoldState::Unfolded) => ScreenOrientation::SquarePortrait,
    }
}

/// Per-axis maximum over all displays. `None` when there are none.
pub fn max_displays_dimension(sizes: &[IntPoint]) -> Option<IntPoint> {
    let x = sizes.iter().map(|s| s.x).max()?;
    let y = sizes.iter().map(|s| s.y).max()?;
    Some(IntPoint::new(x, y))
}

/// Display sizes, optionally followed by each size rotated 90°.
pub fn internal_display_sizes(sizes: &[IntPoint], all_dimensions: bool) -> Vec<IntPoint> {
    let mut out = Vec::with_capacity(if all_dimensions {
        sizes.len() * 2
    } else {
        sizes.len()
    });
    out.extend_from_slice(sizes);
    if all_dimensions {
        out.extend(sizes.iter().map(|s| s.transposed()));
    }
    out
}

/// A physical display the wallpaper is cropped for.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct DisplayTarget {
    /// Real pixel size of the display in its current rotation.
    pub size: IntPoint,
    /// Whether the display counts as large screen.
    pub large_screen: bool,
}

impl DisplayTarget {
    pub const fn new(size: IntPoint, large_screen: bool) -> Self {
        Self { size, large_screen }
    }

    fn area(&self) -> i64 {
        self.size.x as i64 * self.size.y as i64
    }
}

/// The display with the largest area. Ties keep the first.
pub fn wallpaper_display(displays: &[DisplayTarget]) -> Option<&DisplayTarget> {
    displays
        .iter()
        .reduce(|best, d| if d.area() > best.area() { d } else { best })
}

/// A crop of the raw wallpaper for one display size.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct CropHint {
    pub display_size: IntPoint,
    /// In raw wallpaper pixels.
    pub crop: IntRect,
}

/// Default crop hints for a wallpaper.
///
/// Each display gets the wallpaper center-cropped to cover it, aligned to
/// the reading-direction start (the first home screen), with its parallax
/// reserve. With `multi_crop` every display gets its own hint; without it a
/// single shared hint is computed for the wallpaper display.
pub fn crop_hints(
    wallpaper_size: IntPoint,
    displays: &[DisplayTarget],
    is_rtl: bool,
    multi_crop: bool,
) -> Result<Vec<CropHint>, InvalidGeometry> {
    if wallpaper_size.is_degenerate() {
        return Err(InvalidGeometry::ZeroDimension);
    }

    let targets: Vec<&DisplayTarget> = if multi_crop {
        displays.iter().collect()
    } else {
        wallpaper_display(displays).into_iter().collect()
    };

    let hints = targets
        .into_iter()
        .map(|display| {
            let crop = display_crop(wallpaper_size, display, is_rtl, multi_crop)?;
            Ok(CropHint {
                display_size: display.size,
                crop,
            })
        })
        .collect::<Result<Vec<_>, InvalidGeometry>>()?;

    log::trace!(
        "{} crop hints for wallpaper {wallpaper_size} over {} displays (multi {multi_crop})",
        hints.len(),
        displays.len()
    );
    Ok(hints)
}

fn display_crop(
    wallpaper_size: IntPoint,
    display: &DisplayTarget,
    is_rtl: bool,
    multi_crop: bool,
) -> Result<IntRect, InvalidGeometry> {
    let host = display.size;
    let surface = default_crop_surface_size_for_display(host, host, display.large_screen)?;
    let zoom = min_zoom(wallpaper_size, host)?;

    let config = CropConfig::new(wallpaper_size, surface, host)
        .zoom(zoom)
        .rtl(is_rtl)
        .multi_crop(multi_crop);
    // Rounding can leave the zoomed wallpaper a pixel short of the host.
    let zoomed = config.scaled_wallpaper_rect()?.size();
    let zoomed = IntPoint::new(zoomed.x.max(host.x), zoomed.y.max(host.y));
    let scroll = center_position(zoomed, host, true, is_rtl)?;

    config.scroll(scroll.x, scroll.y).compute_raw()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orientation_without_fold() {
        let wp = IntPoint::new(1080, 2400);
        assert_eq!(
            screen_orientation(IntPoint::new(1080, 2400), wp, None),
            ScreenOrientation::Portrait
        );
        assert_eq!(
            screen_orientation(IntPoint::new(2400, 1080), wp, None),
            ScreenOrientation::Landscape
        );
        // Square counts as portrait.
        assert_eq!(
            screen_orientation(IntPoint::new(1000, 1000), wp, None),
            ScreenOrientation::Portrait
        );
    }

    #[test]
    fn orientation_folded() {
        let inner = IntPoint::new(2208, 1840);
        let outer = IntPoint::new(1080, 2092);
        assert_eq!(
            screen_orientation(inner, inner, Some(FoldState::Folded)),
            ScreenOrientation::SquarePortrait
        );
        assert_eq!(
            screen_orientation(outer, inner, Some(FoldState::Folded)),
            ScreenOrientation::Portrait
        );
    }

    #[test]
    fn orientation_unfolded() {
        let inner = IntPoint::new(2208, 1840);
        let rotated = inner.transposed();
        assert_eq!(
            screen_orientation(inner, inner, Some(FoldState::Unfolded)),
            ScreenOrientation::SquarePortrait
        );
        assert_eq!(
            screen_orientation(rotated, rotated, Some(FoldState::Unfolded)),
            ScreenOrientation::SquareLandscape
        );
        assert_eq!(
            screen_orientation(IntPoint::new(1080, 2092), inner, Some(FoldState::Unfolded)),
            ScreenOrientation::Portrait
        );
    }

    #[test]
    fn max_dimension_is_per_axis() {
        let sizes = [IntPoint::new(1080, 2092), IntPoint::new(2208, 1840)];
        assert_eq!(max_displays_dimension(&sizes), Some(IntPoint::new(2208, 2092)));
        assert_eq!(max_displays_dimension(&[]), None);
    }

    #[test]
    fn display_sizes_with_rotations() {
        let sizes = [IntPoint::new(1080, 2092), IntPoint::new(2208, 1840)];
        assert_eq!(internal_display_sizes(&sizes, false), sizes.to_vec());
        assert_eq!(
            internal_display_sizes(&sizes, true),
            alloc::vec![
                IntPoint::new(1080, 2092),
                IntPoint::new(2208, 1840),
                IntPoint::new(2092, 1080),
                IntPoint::new(1840, 2208),
            ]
        );
    }

    #[test]
    fn wallpaper_display_is_largest() {
        let outer = DisplayTarget::new(IntPoint::new(1080, 2092), false);
        let inner = DisplayTarget::new(IntPoint::new(2208, 1840), true);
        assert_eq!(wallpaper_display(&[outer, inner]), Some(&inner));
        assert_eq!(wallpaper_display(&[]), None);
    }

    #[test]
    fn single_display_hint() {
        // 1080×1920 phone, 4320×3840 wallpaper → zoom 0.5, zoomed 2160×1920.
        let phone = DisplayTarget::new(IntPoint::new(1080, 1920), false);
        let hints = crop_hints(IntPoint::new(4320, 3840), &[phone], false, false).unwrap();
        assert_eq!(hints.len(), 1);
        assert_eq!(hints[0].display_size, phone.size);
        // Start-aligned, full parallax reserve: the whole wallpaper.
        assert_eq!(hints[0].crop, IntRect::new(0, 0, 4320, 3840));
    }

    #[test]
    fn rtl_hint_starts_at_right_edge() {
        // Zoomed 3240×1920: RTL window at 2160..3240, reserve 1080 to the left.
        let phone = DisplayTarget::new(IntPoint::new(1080, 1920), false);
        let hints = crop_hints(IntPoint::new(3240, 1920), &[phone], true, true).unwrap();
        assert_eq!(hints[0].crop, IntRect::new(1080, 0, 3240, 1920));

        let ltr = crop_hints(IntPoint::new(3240, 1920), &[phone], false, true).unwrap();
        assert_eq!(ltr[0].crop, IntRect::new(0, 0, 2160, 1920));
    }

    #[test]
    fn multi_crop_gates_per_display_hints() {
        let outer = DisplayTarget::new(IntPoint::new(1080, 2092), false);
        let inner = DisplayTarget::new(IntPoint::new(2208, 1840), true);
        let wallpaper = IntPoint::new(4000, 3000);

        let per_display = crop_hints(wallpaper, &[outer, inner], false, true).unwrap();
        assert_eq!(per_display.len(), 2);
        assert_eq!(per_display[0].display_size, outer.size);
        assert_eq!(per_display[1].display_size, inner.size);

        let shared = crop_hints(wallpaper, &[outer, inner], false, false).unwrap();
        assert_eq!(shared.len(), 1);
        assert_eq!(shared[0].display_size, inner.size);

        let full = IntRect::from_size(wallpaper);
        for hint in per_display.iter().chain(shared.iter()) {
            assert!(full.contains_rect(&hint.crop), "{:?}", hint);
            assert!(!hint.crop.is_empty());
        }
    }

    #[test]
    fn no_displays_no_hints() {
        let hints = crop_hints(IntPoint::new(100, 100), &[], false, true).unwrap();
        assert!(hints.is_empty());
    }

    #[test]
    fn rejects_empty_wallpaper() {
        let phone = DisplayTarget::new(IntPoint::new(1080, 1920), false);
        assert_eq!(
            crop_hints(IntPoint::new(0, 100), &[phone], false, true),
            Err(InvalidGeometry::ZeroDimension)
        );
    }
}

//! Center-crop geometry: centering offsets, cover-fit zoom, visible region,
//! and fit-to-size scaling.
//!
//! "Outer" is the wallpaper (or the thing being scaled), "inner" is the
//! surface it must cover. Both are extents as [`IntPoint`]s.

use crate::geom::{FloatRect, IntPoint, IntRect, InvalidGeometry};

/// Offset of `inner`'s top-left corner inside `outer` so that `inner` is
/// centered.
///
/// With `align_start`, the horizontal offset instead pins `inner` to the
/// reading-direction start edge: `0` in LTR, `outer.x - inner.x` in RTL.
/// Vertical is always centered.
///
/// ```
/// use zenwallpaper::{center_position, IntPoint};
///
/// let pos = center_position(IntPoint::new(100, 50), IntPoint::new(20, 10), false, false).unwrap();
/// assert_eq!(pos, IntPoint::new(40, 20));
/// ```
pub fn center_position(
    outer: IntPoint,
    inner: IntPoint,
    align_start: bool,
    is_rtl: bool,
) -> Result<IntPoint, InvalidGeometry> {
    if inner.x > outer.x || inner.y > outer.y {
        log::debug!("inner {inner} does not fit in outer {outer}");
        return Err(InvalidGeometry::InnerExceedsOuter { outer, inner });
    }

    let x = if align_start {
        if is_rtl { outer.x - inner.x } else { 0 }
    } else {
        half_rounded(outer.x - inner.x)
    };
    let y = half_rounded(outer.y - inner.y);
    Ok(IntPoint::new(x, y))
}

/// Smallest zoom applied to `outer` such that it still covers `inner`.
///
/// Exactly one axis ends up tight: if `inner` is relatively wider the width
/// binds, otherwise the height does.
pub fn min_zoom(outer: IntPoint, inner: IntPoint) -> Result<f32, InvalidGeometry> {
    check_extents(outer, inner)?;
    Ok(if width_binds(outer, inner) {
        inner.x as f32 / outer.x as f32
    } else {
        inner.y as f32 / outer.y as f32
    })
}

/// Region of `outer`, in `outer`'s coordinates, that stays visible inside
/// `inner` after applying [`min_zoom`].
///
/// The binding axis spans all of `outer`; the other axis is a centered
/// slice of `inner / zoom`.
pub fn visible_rect(outer: IntPoint, inner: IntPoint) -> Result<FloatRect, InvalidGeometry> {
    check_extents(outer, inner)?;
    let center_x = outer.x as f32 / 2.0;
    let center_y = outer.y as f32 / 2.0;

    Ok(if width_binds(outer, inner) {
        let zoom = inner.x as f32 / outer.x as f32;
        let half_height = inner.y as f32 / zoom / 2.0;
        FloatRect::new(
            0.0,
            center_y - half_height,
            outer.x as f32,
            center_y + half_height,
        )
    } else {
        let zoom = inner.y as f32 / outer.y as f32;
        let half_width = inner.x as f32 / zoom / 2.0;
        FloatRect::new(
            center_x - half_width,
            0.0,
            center_x + half_width,
            outer.y as f32,
        )
    })
}

/// Uniformly scale all four edges of `rect` so its larger side matches the
/// larger of `out_width`/`out_height`.
///
/// Empty rects are returned unchanged.
pub fn fit_to_size(rect: IntRect, out_width: i32, out_height: i32) -> IntRect {
    if rect.is_empty() {
        return rect;
    }
    let max_out = out_width.max(out_height) as f32;
    let max_in = rect.width().max(rect.height()) as f32;
    let scale = max_out / max_in;
    if scale == 1.0 {
        return rect;
    }

    let scale_edge = |v: i32| (v as f32 * scale + 0.5) as i32;
    IntRect::new(
        scale_edge(rect.left),
        scale_edge(rect.top),
        scale_edge(rect.right),
        scale_edge(rect.bottom),
    )
}

// ============================================================================
// Internal helpers
// ============================================================================

/// `round(v / 2)` with halves rounding up, for non-negative `v`.
fn half_rounded(v: i32) -> i32 {
    (v + 1).div_euclid(2)
}

/// Whether `inner` is relatively wider than `outer`.
fn width_binds(outer: IntPoint, inner: IntPoint) -> bool {
    inner.aspect() > outer.aspect()
}

fn check_extents(outer: IntPoint, inner: IntPoint) -> Result<(), InvalidGeometry> {
    if outer.is_degenerate() || inner.is_degenerate() {
        return Err(InvalidGeometry::ZeroDimension);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    // ── center_position ─────────────────────────────────────────────────

    #[test]
    fn center_basic() {
        let p = center_position(IntPoint::new(100, 50), IntPoint::new(20, 10), false, false);
        assert_eq!(p, Ok(IntPoint::new(40, 20)));
    }

    #[test]
    fn center_rounds_half_up() {
        // (101 - 20) / 2 = 40.5 → 41; (51 - 10) / 2 = 20.5 → 21
        let p = center_position(IntPoint::new(101, 51), IntPoint::new(20, 10), false, false);
        assert_eq!(p, Ok(IntPoint::new(41, 21)));
    }

    #[test]
    fn center_align_start_ltr_and_rtl() {
        let outer = IntPoint::new(100, 50);
        let inner = IntPoint::new(20, 10);
        assert_eq!(
            center_position(outer, inner, true, false),
            Ok(IntPoint::new(0, 20))
        );
        assert_eq!(
            center_position(outer, inner, true, true),
            Ok(IntPoint::new(80, 20))
        );
        // RTL only matters when aligning to start.
        assert_eq!(
            center_position(outer, inner, false, true),
            Ok(IntPoint::new(40, 20))
        );
    }

    #[test]
    fn center_same_size_is_origin() {
        let p = center_position(IntPoint::new(64, 64), IntPoint::new(64, 64), false, false);
        assert_eq!(p, Ok(IntPoint::new(0, 0)));
    }

    #[test]
    fn center_rejects_wider_inner() {
        let outer = IntPoint::new(100, 50);
        let inner = IntPoint::new(101, 10);
        assert_eq!(
            center_position(outer, inner, false, false),
            Err(InvalidGeometry::InnerExceedsOuter { outer, inner })
        );
    }

    #[test]
    fn center_rejects_taller_inner() {
        let outer = IntPoint::new(100, 50);
        let inner = IntPoint::new(10, 51);
        assert!(center_position(outer, inner, true, true).is_err());
    }

    // ── min_zoom ────────────────────────────────────────────────────────

    #[test]
    fn min_zoom_height_binds_for_taller_inner() {
        let z = min_zoom(IntPoint::new(1000, 1000), IntPoint::new(500, 1000)).unwrap();
        assert!((z - 1.0).abs() < EPS);
    }

    #[test]
    fn min_zoom_picks_binding_axis() {
        // 2000×1000 covering 1080×2400 → height binds at 2.4
        let z = min_zoom(IntPoint::new(2000, 1000), IntPoint::new(1080, 2400)).unwrap();
        assert!((z - 2.4).abs() < EPS);
        // 1000×2000 covering 1600×1000 → width binds at 1.6
        let z = min_zoom(IntPoint::new(1000, 2000), IntPoint::new(1600, 1000)).unwrap();
        assert!((z - 1.6).abs() < EPS);
    }

    #[test]
    fn min_zoom_downscale() {
        let z = min_zoom(IntPoint::new(4000, 3000), IntPoint::new(400, 300)).unwrap();
        assert!((z - 0.1).abs() < EPS);
    }

    #[test]
    fn min_zoom_rejects_zero() {
        assert_eq!(
            min_zoom(IntPoint::new(0, 100), IntPoint::new(10, 10)),
            Err(InvalidGeometry::ZeroDimension)
        );
    }

    // ── visible_rect ────────────────────────────────────────────────────

    #[test]
    fn visible_rect_height_binds() {
        // 2000×1000 wallpaper on a 500×1000 view: full height, centered
        // 500-wide slice.
        let r = visible_rect(IntPoint::new(2000, 1000), IntPoint::new(500, 1000)).unwrap();
        assert!((r.left - 750.0).abs() < EPS);
        assert!((r.right - 1250.0).abs() < EPS);
        assert_eq!(r.top, 0.0);
        assert_eq!(r.bottom, 1000.0);
    }

    #[test]
    fn visible_rect_width_binds() {
        // 1000×2000 wallpaper on a 1000×500 view: zoom 1, full width,
        // centered 500-high slice.
        let r = visible_rect(IntPoint::new(1000, 2000), IntPoint::new(1000, 500)).unwrap();
        assert_eq!(r.left, 0.0);
        assert_eq!(r.right, 1000.0);
        assert!((r.top - 750.0).abs() < EPS);
        assert!((r.bottom - 1250.0).abs() < EPS);
    }

    #[test]
    fn visible_rect_same_aspect_is_full() {
        let r = visible_rect(IntPoint::new(800, 600), IntPoint::new(400, 300)).unwrap();
        assert_eq!(r.round(), IntRect::new(0, 0, 800, 600));
    }

    // ── fit_to_size ─────────────────────────────────────────────────────

    #[test]
    fn fit_to_size_empty_unchanged() {
        let r = IntRect::new(5, 5, 5, 100);
        assert_eq!(fit_to_size(r, 300, 300), r);
    }

    #[test]
    fn fit_to_size_downscales_larger_side() {
        let r = fit_to_size(IntRect::new(0, 0, 4000, 3000), 400, 200);
        assert_eq!(r, IntRect::new(0, 0, 400, 300));
    }

    #[test]
    fn fit_to_size_scales_offsets_too() {
        let r = fit_to_size(IntRect::new(100, 50, 300, 150), 100, 50);
        // scale = 100 / 200 = 0.5
        assert_eq!(r, IntRect::new(50, 25, 150, 75));
    }

    #[test]
    fn fit_to_size_identity_scale() {
        let r = IntRect::new(3, 4, 103, 54);
        assert_eq!(fit_to_size(r, 100, 20), r);
    }
}

//! Point and rectangle value types used throughout the crate.
//!
//! Rectangles use edge coordinates (`left`, `top`, `right`, `bottom`) with
//! right/bottom exclusive, the same convention display compositors use for
//! wallpaper crop hints. Coordinates are signed: intermediate crop math can
//! legitimately step outside the image before clamping.

use core::fmt;

use num_traits::Float;

/// Integer 2D extent or position in pixels.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct IntPoint {
    pub x: i32,
    pub y: i32,
}

impl IntPoint {
    /// Create a new point.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The same extent with axes swapped (portrait ↔ landscape).
    pub const fn transposed(self) -> Self {
        Self {
            x: self.y,
            y: self.x,
        }
    }

    /// `x / y` as a float. Callers must ensure `y != 0`.
    pub(crate) fn aspect(self) -> f32 {
        self.x as f32 / self.y as f32
    }

    /// Whether either axis is zero or negative.
    pub const fn is_degenerate(self) -> bool {
        self.x <= 0 || self.y <= 0
    }
}

impl fmt::Display for IntPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.x, self.y)
    }
}

/// 2D position with sub-pixel precision.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct FloatPoint {
    pub x: f32,
    pub y: f32,
}

impl FloatPoint {
    /// Create a new point.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned integer rectangle.
///
/// A rect with `right <= left` or `bottom <= top` is *empty*. Fields are
/// public; [`IntRect::try_new`] validates ordering when the caller wants it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct IntRect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl IntRect {
    /// Create a new rect from its edges. No validation.
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Create a rect, rejecting inverted edges.
    pub fn try_new(left: i32, top: i32, right: i32, bottom: i32) -> Result<Self, InvalidGeometry> {
        if right < left || bottom < top {
            return Err(InvalidGeometry::InvertedRect {
                rect: Self::new(left, top, right, bottom),
            });
        }
        Ok(Self::new(left, top, right, bottom))
    }

    /// Rect at the origin with the given extent.
    pub const fn from_size(size: IntPoint) -> Self {
        Self::new(0, 0, size.x, size.y)
    }

    pub const fn width(&self) -> i32 {
        self.right - self.left
    }

    pub const fn height(&self) -> i32 {
        self.bottom - self.top
    }

    /// Width and height as a point.
    pub const fn size(&self) -> IntPoint {
        IntPoint::new(self.width(), self.height())
    }

    /// Zero or negative area.
    pub const fn is_empty(&self) -> bool {
        self.left >= self.right || self.top >= self.bottom
    }

    /// Integer horizontal center, floor of the midpoint.
    pub const fn center_x(&self) -> i32 {
        ((self.left as i64 + self.right as i64) >> 1) as i32
    }

    /// Integer vertical center, floor of the midpoint.
    pub const fn center_y(&self) -> i32 {
        ((self.top as i64 + self.bottom as i64) >> 1) as i32
    }

    /// Exact center with sub-pixel precision.
    pub fn exact_center(&self) -> FloatPoint {
        FloatPoint::new(
            (self.left as i64 + self.right as i64) as f32 * 0.5,
            (self.top as i64 + self.bottom as i64) as f32 * 0.5,
        )
    }

    /// Intersect with `bounds`, edge by edge.
    ///
    /// A rect lying outside `bounds` collapses to an empty rect on the
    /// nearest edge instead of inverting.
    pub fn clamp_to(self, bounds: &IntRect) -> Self {
        let left = self.left.clamp(bounds.left, bounds.right);
        let top = self.top.clamp(bounds.top, bounds.bottom);
        Self {
            left,
            top,
            right: self.right.clamp(left, bounds.right.max(left)),
            bottom: self.bottom.clamp(top, bounds.bottom.max(top)),
        }
    }

    /// Whether `other` lies entirely within `self` (edges inclusive).
    pub const fn contains_rect(&self, other: &IntRect) -> bool {
        !self.is_empty()
            && self.left <= other.left
            && self.top <= other.top
            && self.right >= other.right
            && self.bottom >= other.bottom
    }
}

impl fmt::Display for IntRect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{},{}][{},{}]",
            self.left, self.top, self.right, self.bottom
        )
    }
}

/// Axis-aligned float rectangle.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct FloatRect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl FloatRect {
    /// Create a new rect from its edges. No validation.
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    pub fn is_empty(&self) -> bool {
        !(self.left < self.right && self.top < self.bottom)
    }

    /// Truncate each edge toward zero.
    pub fn truncate(self) -> IntRect {
        IntRect::new(
            self.left as i32,
            self.top as i32,
            self.right as i32,
            self.bottom as i32,
        )
    }

    /// Round each edge to the nearest integer.
    pub fn round(self) -> IntRect {
        IntRect::new(
            Float::round(self.left) as i32,
            Float::round(self.top) as i32,
            Float::round(self.right) as i32,
            Float::round(self.bottom) as i32,
        )
    }
}

/// Rejected geometry input.
///
/// Every variant is a caller contract violation. Edge cases with a defined
/// answer (negative reserve, empty rects) never produce an error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InvalidGeometry {
    /// The inner extent does not fit inside the outer extent.
    InnerExceedsOuter { outer: IntPoint, inner: IntPoint },
    /// Zoom factor was zero, negative, or NaN.
    NonPositiveZoom,
    /// Scale factor was zero, negative, or NaN.
    NonPositiveScale,
    /// A width or height that must be positive was zero or negative.
    ZeroDimension,
    /// `right < left` or `bottom < top`.
    InvertedRect { rect: IntRect },
}

impl fmt::Display for InvalidGeometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InnerExceedsOuter { outer, inner } => write!(
                f,
                "inner rectangle {inner} should be contained completely within the outer rectangle {outer}"
            ),
            Self::NonPositiveZoom => f.write_str("zoom must be positive"),
            Self::NonPositiveScale => f.write_str("scale must be positive"),
            Self::ZeroDimension => f.write_str("width and height must be positive"),
            Self::InvertedRect { rect } => write!(f, "rect {rect} has inverted edges"),
        }
    }
}

impl core::error::Error for InvalidGeometry {}

/// Reject zero, negative and NaN zoom.
pub(crate) fn check_zoom(zoom: f32) -> Result<(), InvalidGeometry> {
    if zoom.is_nan() || zoom <= 0.0 {
        log::debug!("rejecting zoom {zoom}");
        return Err(InvalidGeometry::NonPositiveZoom);
    }
    Ok(())
}

/// Reject zero, negative and NaN scale.
pub(crate) fn check_scale(scale: f32) -> Result<(), InvalidGeometry> {
    if scale.is_nan() || scale <= 0.0 {
        log::debug!("rejecting scale {scale}");
        return Err(InvalidGeometry::NonPositiveScale);
    }
    Ok(())
}

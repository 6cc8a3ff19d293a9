use crate::error::{GeometryError, Result};
use crate::math::polygon_2d::bounds_2d;
use crate::math::{Point2, Vector2};

/// An axis-aligned rectangle.
///
/// Uses screen orientation: `y` grows downward, so `min_y` is the top edge
/// and `max_y` the bottom edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    min: Point2,
    max: Point2,
}

impl Rect {
    /// Creates a rectangle from its minimum and maximum corners.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if `min` exceeds `max` on either axis
    /// or a coordinate is NaN.
    pub fn new(min: Point2, max: Point2) -> Result<Self> {
        let ordered = min.x <= max.x && min.y <= max.y;
        if !ordered {
            return Err(GeometryError::Degenerate(format!(
                "rect corners are inverted: min ({}, {}), max ({}, {})",
                min.x, min.y, max.x, max.y
            ))
            .into());
        }
        Ok(Self { min, max })
    }

    /// Creates a rectangle from an origin corner and a size.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if `width` or `height` is negative.
    pub fn from_xywh(x: f64, y: f64, width: f64, height: f64) -> Result<Self> {
        Self::new(Point2::new(x, y), Point2::new(x + width, y + height))
    }

    /// Returns the smallest rectangle containing all `points`, or `None` if empty.
    #[must_use]
    pub fn from_points(points: &[Point2]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        Some(Self::bounding(*first, rest))
    }

    /// Returns the smallest rectangle containing `first` and every point of `rest`.
    #[must_use]
    pub fn bounding(first: Point2, rest: &[Point2]) -> Self {
        let (min, max) = bounds_2d(first, rest);
        Self { min, max }
    }

    /// Returns the square of side `2 * radius` centered on `center`.
    #[must_use]
    pub fn from_center_radius(center: Point2, radius: f64) -> Self {
        let r = Vector2::new(radius.abs(), radius.abs());
        Self {
            min: center - r,
            max: center + r,
        }
    }

    #[must_use]
    pub fn min(&self) -> Point2 {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> Point2 {
        self.max
    }

    #[must_use]
    pub fn min_x(&self) -> f64 {
        self.min.x
    }

    #[must_use]
    pub fn min_y(&self) -> f64 {
        self.min.y
    }

    #[must_use]
    pub fn max_x(&self) -> f64 {
        self.max.x
    }

    #[must_use]
    pub fn max_y(&self) -> f64 {
        self.max.y
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Returns the center of the rectangle.
    #[must_use]
    pub fn mid(&self) -> Point2 {
        nalgebra::center(&self.min, &self.max)
    }

    /// Midpoint of the top edge, `(mid_x, min_y)`.
    #[must_use]
    pub fn top_mid(&self) -> Point2 {
        Point2::new(self.mid().x, self.min.y)
    }

    /// Bottom-left corner, `(min_x, max_y)`.
    #[must_use]
    pub fn bottom_left(&self) -> Point2 {
        Point2::new(self.min.x, self.max.y)
    }

    /// Bottom-right corner, `(max_x, max_y)`.
    #[must_use]
    pub fn bottom_right(&self) -> Point2 {
        self.max
    }

    /// Shrinks the rectangle by `dx` on the left and right and `dy` on the
    /// top and bottom.
    ///
    /// Returns `None` if the result would have negative width or height.
    #[must_use]
    pub fn inset(&self, dx: f64, dy: f64) -> Option<Self> {
        let d = Vector2::new(dx, dy);
        Self::new(self.min + d, self.max - d).ok()
    }

    /// Grows the rectangle by `margin` on every side.
    #[must_use]
    pub fn expanded(&self, margin: f64) -> Self {
        let d = Vector2::new(margin.abs(), margin.abs());
        Self {
            min: self.min - d,
            max: self.max + d,
        }
    }

    /// Returns whether `point` lies inside or on the boundary.
    #[must_use]
    pub fn contains_point(&self, point: &Point2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Returns whether `other` lies entirely inside this rectangle.
    #[must_use]
    pub fn contains_rect(&self, other: &Rect) -> bool {
        self.contains_point(&other.min) && self.contains_point(&other.max)
    }

    /// Returns whether the two rectangles overlap (touching edges count).
    #[must_use]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.min.x <= other.max.x
            && other.min.x <= self.max.x
            && self.min.y <= other.max.y
            && other.min.y <= self.max.y
    }

    /// Returns whether `other` overlaps this rectangle without being contained in it.
    #[must_use]
    pub fn partially_intersects(&self, other: &Rect) -> bool {
        self.intersects(other) && !self.contains_rect(other)
    }
}

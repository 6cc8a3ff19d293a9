use crate::math::Point2;

use super::{Rect, Shape};

/// A circle in the plane, stored as center and diameter.
///
/// Not validated: a circle derived from a degenerate triangle may carry a
/// NaN center or an infinite diameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    center: Point2,
    diameter: f64,
}

impl Circle {
    /// Creates a circle from its center and diameter.
    #[must_use]
    pub fn new(center: Point2, diameter: f64) -> Self {
        Self { center, diameter }
    }

    /// Creates a circle from its center and radius.
    #[must_use]
    pub fn with_radius(center: Point2, radius: f64) -> Self {
        Self::new(center, 2.0 * radius)
    }

    /// Returns the center of the circle.
    #[must_use]
    pub fn center(&self) -> &Point2 {
        &self.center
    }

    #[must_use]
    pub fn diameter(&self) -> f64 {
        self.diameter
    }

    #[must_use]
    pub fn radius(&self) -> f64 {
        self.diameter * 0.5
    }
}

impl Shape for Circle {
    fn frame(&self) -> Rect {
        Rect::from_center_radius(self.center, self.radius())
    }
}

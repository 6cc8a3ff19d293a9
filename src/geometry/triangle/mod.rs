mod classify;
mod trilinear;

pub use classify::Classifier;

use std::f64::consts::PI;

use crate::error::{GeometryError, Result, TrigonError};
use crate::math::angle_2d::{angle_at, rotate_about};
use crate::math::polygon_2d::signed_area_2d;
use crate::math::{Point2, Tolerance};

use super::{Circle, Rect, Shape};

/// A triangle defined by three ordered vertices.
///
/// Every metric is recomputed from the vertices on each call. Vertex order
/// only affects the sign of [`Triangle::signed_area`].
///
/// Collinear vertices are allowed. Metrics that divide by the area or by
/// the sine of an angle (circumcircle, trilinear conversion) return NaN or
/// infinite values for them; check [`Triangle::is_degenerate`] first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    vertices: [Point2; 3],
}

impl Triangle {
    /// Creates a triangle from three vertices, stored in the given order.
    #[must_use]
    pub fn new(p0: Point2, p1: Point2, p2: Point2) -> Self {
        Self {
            vertices: [p0, p1, p2],
        }
    }

    /// Creates a triangle from a slice of exactly three points.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidArgument` if `points.len() != 3`.
    pub fn from_points(points: &[Point2]) -> Result<Self> {
        match points {
            [p0, p1, p2] => Ok(Self::new(*p0, *p1, *p2)),
            _ => Err(GeometryError::InvalidArgument(format!(
                "a triangle needs exactly 3 points, got {}",
                points.len()
            ))
            .into()),
        }
    }

    /// Creates an isosceles triangle inscribed in `rect`.
    ///
    /// The apex is the midpoint of the top edge, the base runs along the
    /// bottom edge from corner to corner. A non-zero `rotation` (radians)
    /// then turns all three vertices about the center of `rect`; a NaN
    /// rotation yields NaN vertices.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn inscribed(rect: &Rect, rotation: f64) -> Self {
        let mut vertices = [rect.top_mid(), rect.bottom_left(), rect.bottom_right()];
        if rotation != 0.0 {
            let mid = rect.mid();
            for v in &mut vertices {
                *v = rotate_about(v, &mid, rotation);
            }
        }
        Self { vertices }
    }

    /// Returns the three vertices in construction order.
    #[must_use]
    pub fn vertices(&self) -> &[Point2; 3] {
        &self.vertices
    }

    /// Returns the vertex at `index`, or `None` if `index > 2`.
    #[must_use]
    pub fn vertex(&self, index: usize) -> Option<&Point2> {
        self.vertices.get(index)
    }

    /// Returns the vertices as an owned list.
    #[must_use]
    pub fn points(&self) -> Vec<Point2> {
        self.vertices.to_vec()
    }

    /// Side lengths `[|v0 - v1|, |v1 - v2|, |v2 - v0|]`.
    ///
    /// Entry 0 is the side opposite `v2`, entry 1 the side opposite `v0`,
    /// entry 2 the side opposite `v1`.
    #[must_use]
    pub fn lengths(&self) -> [f64; 3] {
        let [a, b, c] = self.vertices;
        [(a - b).norm(), (b - c).norm(), (c - a).norm()]
    }

    #[must_use]
    pub fn perimeter(&self) -> f64 {
        self.lengths().iter().sum()
    }

    /// Interior angles in radians; entry `i` is the angle at vertex `i`.
    ///
    /// The third angle is `π` minus the other two, so the sum is `π` up to
    /// a single rounding step.
    #[must_use]
    pub fn angles(&self) -> [f64; 3] {
        let [a, b, c] = self.vertices;
        let a0 = angle_at(&a, &b, &c);
        let a1 = angle_at(&b, &c, &a);
        [a0, a1, PI - a0 - a1]
    }

    /// Shoelace area; positive for counter-clockwise vertices (y-up axes).
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        signed_area_2d(&self.vertices)
    }

    #[must_use]
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Intersection of the perpendicular bisectors. NaN or infinite for collinear vertices.
    #[must_use]
    #[allow(clippy::many_single_char_names)]
    pub fn circumcenter(&self) -> Point2 {
        let [a, b, c] = self.vertices;

        let d = 2.0 * (a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y));

        let a2 = a.x * a.x + a.y * a.y;
        let b2 = b.x * b.x + b.y * b.y;
        let c2 = c.x * c.x + c.y * c.y;

        let x = (a2 * (b.y - c.y) + b2 * (c.y - a.y) + c2 * (a.y - b.y)) / d;
        let y = (a2 * (c.x - b.x) + b2 * (a.x - c.x) + c2 * (b.x - a.x)) / d;

        Point2::new(x, y)
    }

    /// The circle through all three vertices.
    ///
    /// The diameter follows from the law of sines, `abc / (2 * area)`.
    #[must_use]
    pub fn circumcircle(&self) -> Circle {
        let [a, b, c] = self.lengths();
        let diameter = (a * b * c) / (2.0 * self.area());
        Circle::new(self.circumcenter(), diameter)
    }

    /// Radius of the inscribed circle.
    #[must_use]
    pub fn inradius(&self) -> f64 {
        2.0 * self.area() / self.perimeter()
    }

    /// Center of the inscribed circle: the vertices weighted by the length of
    /// the side opposite each.
    #[must_use]
    pub fn incenter(&self) -> Point2 {
        let [opposite_c, opposite_a, opposite_b] = self.lengths();
        let [a, b, c] = self.vertices;
        let sum = opposite_a + opposite_b + opposite_c;

        let x = (opposite_a * a.x + opposite_b * b.x + opposite_c * c.x) / sum;
        let y = (opposite_a * a.y + opposite_b * b.y + opposite_c * c.y) / sum;

        Point2::new(x, y)
    }

    /// The circle tangent to all three sides.
    #[must_use]
    pub fn incircle(&self) -> Circle {
        Circle::with_radius(self.incenter(), self.inradius())
    }

    /// Classification predicates using the default [`Tolerance`].
    #[must_use]
    pub fn classify(&self) -> Classifier {
        Classifier::new(*self, Tolerance::default())
    }

    /// Classification predicates using a caller-supplied [`Tolerance`].
    #[must_use]
    pub fn classify_with(&self, tolerance: Tolerance) -> Classifier {
        Classifier::new(*self, tolerance)
    }

    #[must_use]
    pub fn is_equilateral(&self) -> bool {
        self.classify().is_equilateral()
    }

    #[must_use]
    pub fn is_isosceles(&self) -> bool {
        self.classify().is_isosceles()
    }

    #[must_use]
    pub fn is_scalene(&self) -> bool {
        self.classify().is_scalene()
    }

    #[must_use]
    pub fn is_right_angled(&self) -> bool {
        self.classify().is_right_angled()
    }

    #[must_use]
    pub fn is_oblique(&self) -> bool {
        self.classify().is_oblique()
    }

    #[must_use]
    pub fn is_acute(&self) -> bool {
        self.classify().is_acute()
    }

    #[must_use]
    pub fn is_obtuse(&self) -> bool {
        self.classify().is_obtuse()
    }

    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.classify().is_degenerate()
    }
}

impl From<[Point2; 3]> for Triangle {
    fn from(vertices: [Point2; 3]) -> Self {
        Self { vertices }
    }
}

impl TryFrom<&[Point2]> for Triangle {
    type Error = TrigonError;

    fn try_from(points: &[Point2]) -> Result<Self> {
        Self::from_points(points)
    }
}

impl Shape for Triangle {
    fn frame(&self) -> Rect {
        Rect::bounding(self.vertices[0], &self.vertices[1..])
    }
}

use std::f64::consts::{FRAC_PI_2, PI};

use crate::math::Tolerance;

use super::Triangle;

/// Shape predicates over a [`Triangle`] evaluated with a fixed [`Tolerance`].
///
/// Side lengths and the right and straight angle checks use
/// [`Tolerance::nearly_equal`]. The acute and obtuse checks use strict
/// comparisons against `π/2`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classifier {
    triangle: Triangle,
    tolerance: Tolerance,
}

impl Classifier {
    /// Creates a classifier for `triangle`.
    #[must_use]
    pub fn new(triangle: Triangle, tolerance: Tolerance) -> Self {
        Self {
            triangle,
            tolerance,
        }
    }

    #[must_use]
    pub fn tolerance(&self) -> Tolerance {
        self.tolerance
    }

    /// Side-equality score in `1..=3`.
    ///
    /// Starts at 1 and adds 1 for each nearly-equal side pair, clamped to 3:
    /// no equal pair scores 1, one pair scores 2, two or three pairs score 3.
    #[must_use]
    pub fn equality_count(&self) -> u8 {
        let tol = self.tolerance;
        equalities(self.triangle.lengths(), |a, b| tol.nearly_equal(a, b))
    }

    #[must_use]
    pub fn is_equilateral(&self) -> bool {
        self.equality_count() == 3
    }

    /// At least two equal sides; equilateral triangles count as isosceles.
    #[must_use]
    pub fn is_isosceles(&self) -> bool {
        self.equality_count() >= 2
    }

    #[must_use]
    pub fn is_scalene(&self) -> bool {
        self.equality_count() == 1
    }

    #[must_use]
    pub fn is_right_angled(&self) -> bool {
        self.any_angle_near(FRAC_PI_2)
    }

    #[must_use]
    pub fn is_oblique(&self) -> bool {
        !self.is_right_angled()
    }

    #[must_use]
    pub fn is_acute(&self) -> bool {
        self.triangle.angles().iter().all(|&a| a < FRAC_PI_2)
    }

    #[must_use]
    pub fn is_obtuse(&self) -> bool {
        self.triangle.angles().iter().any(|&a| a > FRAC_PI_2)
    }

    /// Some angle is (nearly) straight, i.e. the vertices are collinear.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.any_angle_near(PI)
    }

    fn any_angle_near(&self, target: f64) -> bool {
        self.triangle
            .angles()
            .iter()
            .any(|&a| self.tolerance.nearly_equal(a, target))
    }
}

/// Scores how many of the pairs `(0, 1)`, `(1, 2)`, `(2, 0)` pass `test`,
/// starting from 1 and clamped to 3.
fn equalities<T: Copy>(e: [T; 3], test: impl Fn(T, T) -> bool) -> u8 {
    let mut c: u8 = 1;
    if test(e[0], e[1]) {
        c += 1;
    }
    if test(e[1], e[2]) {
        c += 1;
    }
    if test(e[2], e[0]) {
        c += 1;
    }
    c.min(3)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Point2;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn equilateral() -> Triangle {
        Triangle::new(p(0.0, 0.0), p(1.0, 0.0), p(0.5, 3.0_f64.sqrt() / 2.0))
    }

    #[test]
    fn equality_score_is_offset_by_one() {
        let eq = |a: i32, b: i32| a == b;
        assert_eq!(equalities([1, 2, 3], eq), 1);
        assert_eq!(equalities([1, 1, 3], eq), 2);
        assert_eq!(equalities([3, 1, 3], eq), 2);
        assert_eq!(equalities([1, 1, 1], eq), 3);
    }

    #[test]
    fn equilateral_triangle() {
        let t = equilateral();
        assert_eq!(t.classify().equality_count(), 3);
        assert!(t.is_equilateral());
        assert!(t.is_isosceles());
        assert!(!t.is_scalene());
        assert!(!t.is_right_angled());
        assert!(t.is_oblique());
        assert!(t.is_acute());
        assert!(!t.is_obtuse());
        assert!(!t.is_degenerate());
    }

    #[test]
    fn isosceles_triangle() {
        let t = Triangle::new(p(0.0, 0.0), p(2.0, 0.0), p(1.0, 3.0));
        assert_eq!(t.classify().equality_count(), 2);
        assert!(t.is_isosceles());
        assert!(!t.is_equilateral());
        assert!(!t.is_scalene());
    }

    #[test]
    fn right_scalene_triangle() {
        let t = Triangle::new(p(0.0, 0.0), p(3.0, 0.0), p(0.0, 4.0));
        assert!(t.is_scalene());
        assert!(!t.is_isosceles());
        assert!(t.is_right_angled());
        assert!(!t.is_oblique());
        assert!(!t.is_acute());
        assert!(!t.is_obtuse());
        assert!(!t.is_degenerate());
    }

    #[test]
    fn obtuse_triangle() {
        let t = Triangle::new(p(0.0, 0.0), p(4.0, 0.0), p(1.0, 1.0));
        assert!(t.is_obtuse());
        assert!(!t.is_acute());
        assert!(t.is_oblique());
    }

    #[test]
    fn collinear_triangle_is_degenerate() {
        let t = Triangle::new(p(0.0, 0.0), p(1.0, 0.0), p(2.0, 0.0));
        assert!(t.is_degenerate());
        assert!(t.is_obtuse());
    }

    #[test]
    fn coincident_vertices_are_degenerate() {
        let t = Triangle::new(p(0.0, 0.0), p(0.0, 0.0), p(1.0, 0.0));
        let [a0, a1, a2] = t.angles();
        assert!(a0.abs() < 1e-12);
        assert!(a1.abs() < 1e-12);
        assert!((a2 - PI).abs() < 1e-12);
        assert!(t.is_degenerate());
        assert!(t.is_isosceles());
    }

    #[test]
    fn injected_tolerance_widens_equality() {
        let t = Triangle::new(p(0.0, 0.0), p(2.0, 0.0), p(1.0001, 3.0));
        assert!(t.is_scalene());

        let loose = t.classify_with(Tolerance::new(1e-3));
        assert!(loose.is_isosceles());
        assert!(!loose.is_scalene());
        assert!((loose.tolerance().epsilon - 1e-3).abs() < f64::EPSILON);
    }

    #[test]
    fn injected_tolerance_widens_right_angle() {
        let t = Triangle::new(p(0.0, 0.0), p(3.0, 0.0), p(0.001, 4.0));
        assert!(!t.is_right_angled());
        assert!(t.classify_with(Tolerance::new(1e-3)).is_right_angled());
    }
}

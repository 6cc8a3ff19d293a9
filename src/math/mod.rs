pub mod angle_2d;
pub mod polygon_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Absolute-difference comparison used by every "nearly equal" check.
///
/// Defaults to [`TOLERANCE`]. Callers working at a coarser scale (pixels,
/// millimetres) can inject a looser epsilon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    /// Maximum absolute difference still considered equal.
    pub epsilon: f64,
}

impl Tolerance {
    /// Creates a tolerance with the given epsilon.
    #[must_use]
    pub fn new(epsilon: f64) -> Self {
        Self { epsilon }
    }

    /// Returns whether `a` and `b` differ by at most `epsilon`.
    #[must_use]
    pub fn nearly_equal(&self, a: f64, b: f64) -> bool {
        (a - b).abs() <= self.epsilon
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::new(TOLERANCE)
    }
}

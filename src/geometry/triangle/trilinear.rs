use crate::math::Point2;

use super::Triangle;

impl Triangle {
    /// Converts trilinear coordinates to Cartesian coordinates in a frame
    /// centered on the incenter, so `(1, 1, 1)` maps to the origin.
    ///
    /// The frame is oriented by the angle at `v2`. Undefined for degenerate
    /// triangles (divides by `sin C`).
    #[must_use]
    #[allow(clippy::many_single_char_names)]
    pub fn to_local_cartesian(&self, alpha: f64, beta: f64, gamma: f64) -> Point2 {
        let area = self.area();
        let [a, b, c] = self.lengths();

        let r = 2.0 * area / (a + b + c);
        let k = 2.0 * area / (a * alpha + b * beta + c * gamma);
        let angle_c = self.angles()[2];

        let x = (k * beta - r + (k * alpha - r) * angle_c.cos()) / angle_c.sin();
        let y = k * alpha - r;

        Point2::new(x, y)
    }

    /// Converts trilinear coordinates to the triangle's own frame.
    ///
    /// Computed as `v0 + local(alpha, beta, gamma) - local(0, 0, 1)`. This
    /// does not map `(1, 1, 1)` onto [`Triangle::incenter`] in general; the
    /// current output is pinned by tests.
    // TODO: re-derive against a reference construction and decide whether the
    // `local(0, 0, 1)` offset should be measured from `v2` instead of `v0`.
    #[must_use]
    pub fn to_cartesian(&self, alpha: f64, beta: f64, gamma: f64) -> Point2 {
        let local = self.to_local_cartesian(alpha, beta, gamma);
        let delta = self.to_local_cartesian(0.0, 0.0, 1.0);
        self.vertices[0] + (local - delta)
    }
}

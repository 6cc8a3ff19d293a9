use nalgebra::Rotation2;

use super::Point2;

/// Returns the unsigned angle at `vertex` between the rays towards `p1` and `p2`.
///
/// Uses `atan2(|cross|, dot)`, which stays accurate near `0` and `π` where
/// an `acos` of the normalized dot product loses precision. The result is in
/// `[0, π]`. Returns `0` if either ray has zero length.
#[must_use]
pub fn angle_at(vertex: &Point2, p1: &Point2, p2: &Point2) -> f64 {
    let u = p1 - vertex;
    let v = p2 - vertex;
    let cross = u.x * v.y - u.y * v.x;
    cross.abs().atan2(u.dot(&v))
}

/// Rotates `point` about `origin` by `angle` radians (counter-clockwise in y-up axes).
#[must_use]
pub fn rotate_about(point: &Point2, origin: &Point2, angle: f64) -> Point2 {
    origin + Rotation2::new(angle) * (point - origin)
}

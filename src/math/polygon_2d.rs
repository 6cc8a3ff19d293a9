use super::Point2;

/// Computes the signed area of a polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Returns the `(min, max)` corners of the axis-aligned box around `first`
/// and `rest`.
#[must_use]
pub fn bounds_2d(first: Point2, rest: &[Point2]) -> (Point2, Point2) {
    let mut min = first;
    let mut max = first;
    for pt in rest {
        min.x = min.x.min(pt.x);
        min.y = min.y.min(pt.y);
        max.x = max.x.max(pt.x);
        max.y = max.y.max(pt.y);
    }
    (min, max)
}

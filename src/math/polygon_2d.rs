use super::{Point2, TOLERANCE};

/// How points lying exactly on a polygon edge are classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoundaryPolicy {
    /// Points within [`TOLERANCE`] of an edge are outside.
    #[default]
    Strict,
    /// Points within [`TOLERANCE`] of an edge are inside.
    Inclusive,
}

/// Even-odd membership test with the [`BoundaryPolicy::Strict`] policy.
#[must_use]
pub fn point_in_polygon(polygon: &[Point2], point: &Point2) -> bool {
    point_in_polygon_with(polygon, point, BoundaryPolicy::Strict)
}

/// Even-odd ray-casting membership test.
///
/// A horizontal ray is cast from `point` towards +x; every edge it crosses
/// flips the parity. Points on an edge are resolved by `policy` before the
/// ray is cast, since raw parity classifies them inconsistently (left edges
/// in, right edges out). Runs in O(n) over the polygon's vertices.
#[must_use]
pub fn point_in_polygon_with(polygon: &[Point2], point: &Point2, policy: BoundaryPolicy) -> bool {
    if polygon.is_empty() {
        return false;
    }
    if segments(polygon).any(|(a, b)| point_on_segment(point, a, b)) {
        return policy == BoundaryPolicy::Inclusive;
    }
    ray_parity(polygon, point)
}

fn ray_parity(polygon: &[Point2], point: &Point2) -> bool {
    let n = polygon.len();
    let mut odd = false;
    let mut j = n - 1;
    for i in 0..n {
        let pi = &polygon[i];
        let pj = &polygon[j];
        // The straddle check rules out horizontal edges before dividing.
        if (pi.y > point.y) != (pj.y > point.y)
            && point.x < (pj.x - pi.x) * (point.y - pi.y) / (pj.y - pi.y) + pi.x
        {
            odd = !odd;
        }
        j = i;
    }
    odd
}

/// Returns `true` if `p` lies on segment `ab` within [`TOLERANCE`].
#[must_use]
pub fn point_on_segment(p: &Point2, a: &Point2, b: &Point2) -> bool {
    let ab = b - a;
    let ap = p - a;
    // A zero-length edge is a single point.
    if ab.norm_squared() <= TOLERANCE * TOLERANCE {
        return ap.norm() <= TOLERANCE;
    }
    let cross = ab.x * ap.y - ab.y * ap.x;
    if cross.abs() > TOLERANCE * ab.norm().max(1.0) {
        return false;
    }
    let dot = ap.dot(&ab);
    dot >= -TOLERANCE && dot <= ab.norm_squared() + TOLERANCE
}

/// Iterates over the closed polygon's edges: each vertex paired with its
/// successor, the last one wrapping to the first.
pub fn segments(points: &[Point2]) -> impl Iterator<Item = (&Point2, &Point2)> + '_ {
    let n = points.len();
    (0..n).map(move |i| (&points[i], &points[(i + 1) % n]))
}

/// Arithmetic mean of the points, or `None` for an empty slice.
#[must_use]
pub fn centroid(points: &[Point2]) -> Option<Point2> {
    if points.is_empty() {
        return None;
    }
    #[allow(clippy::cast_precision_loss)]
    let inv_n = 1.0 / points.len() as f64;
    Some(Point2::new(
        points.iter().map(|p| p.x).sum::<f64>() * inv_n,
        points.iter().map(|p| p.y).sum::<f64>() * inv_n,
    ))
}

/// Returns `(width, height)` of the axis-aligned extent; `(0, 0)` when empty.
///
/// A NaN coordinate makes the matching span NaN.
#[must_use]
pub fn extent(points: &[Point2]) -> (f64, f64) {
    if points.is_empty() {
        return (0.0, 0.0);
    }
    (span(points.iter().map(|p| p.x)), span(points.iter().map(|p| p.y)))
}

fn span(values: impl Iterator<Item = f64>) -> f64 {
    let (mut min, mut max) = (f64::INFINITY, f64::NEG_INFINITY);
    for v in values {
        if v.is_nan() {
            return f64::NAN;
        }
        min = min.min(v);
        max = max.max(v);
    }
    max - min
}

/// Scales every point by `factor` from the origin.
#[must_use]
pub fn scale_from_origin(points: &[Point2], factor: f64) -> Vec<Point2> {
    points.iter().map(|p| Point2::from(p.coords * factor)).collect()
}

use super::{Matrix3, Point2};

/// Builds a homogeneous translation by `(dx, dy)`.
#[must_use]
pub fn translation(dx: f64, dy: f64) -> Matrix3 {
    Matrix3::new(
        1.0, 0.0, dx,
        0.0, 1.0, dy,
        0.0, 0.0, 1.0,
    )
}

/// Builds an axis-aligned scale by `(sx, sy)` about the origin.
#[must_use]
pub fn scale(sx: f64, sy: f64) -> Matrix3 {
    Matrix3::new(
        sx, 0.0, 0.0,
        0.0, sy, 0.0,
        0.0, 0.0, 1.0,
    )
}

/// Builds a rotation about the origin.
///
/// * `angle` - Rotation angle in radians. Positive angles turn +x towards +y,
///   which reads clockwise on a y-down canvas.
#[must_use]
pub fn rotation(angle: f64) -> Matrix3 {
    let (s, c) = angle.sin_cos();
    Matrix3::new(
        c, -s, 0.0,
        s, c, 0.0,
        0.0, 0.0, 1.0,
    )
}

/// Returns the full 3x3 product `a * b`.
///
/// Applying the result to a point applies `b` first, then `a`.
#[must_use]
pub fn multiply(a: &Matrix3, b: &Matrix3) -> Matrix3 {
    a * b
}

/// Maps `(x, y, 1)` through `m` and returns the resulting `(x, y)`.
#[must_use]
pub fn apply_to_point(m: &Matrix3, x: f64, y: f64) -> Point2 {
    let v = m * nalgebra::Vector3::new(x, y, 1.0);
    Point2::new(v.x, v.y)
}

/// Composes `translation(dx, dy) * scale(sx, sy) * rotation(angle)`,
/// multiplying left to right.
///
/// Points are rotated about the local origin, scaled, then shifted by the
/// offset.
#[must_use]
pub fn pose(dx: f64, dy: f64, sx: f64, sy: f64, angle: f64) -> Matrix3 {
    let translated = multiply(&translation(dx, dy), &scale(sx, sy));
    multiply(&translated, &rotation(angle))
}

/// [`pose`] with unit scale.
#[must_use]
pub fn local_transform(dx: f64, dy: f64, angle: f64) -> Matrix3 {
    pose(dx, dy, 1.0, 1.0, angle)
}

/// Maps `(x, y)` through [`local_transform`] with the angle given in degrees.
#[must_use]
pub fn transform_point(dx: f64, dy: f64, x: f64, y: f64, degrees: f64) -> Point2 {
    apply_to_point(&local_transform(dx, dy, degrees.to_radians()), x, y)
}

/// Uniform scale by `factor` about `center`.
#[must_use]
pub fn scale_about(center: &Point2, factor: f64) -> Matrix3 {
    translation(center.x, center.y) * scale(factor, factor) * translation(-center.x, -center.y)
}

/// Rotation by `angle` radians about `center`.
#[must_use]
pub fn rotation_about(center: &Point2, angle: f64) -> Matrix3 {
    translation(center.x, center.y) * rotation(angle) * translation(-center.x, -center.y)
}

/// Truncates `m` to its affine rows `[a, b, c, d, e, f]`, where
/// `x' = a*x + b*y + c` and `y' = d*x + e*y + f`.
#[must_use]
pub fn to_affine_rows(m: &Matrix3) -> [f64; 6] {
    [
        m[(0, 0)],
        m[(0, 1)],
        m[(0, 2)],
        m[(1, 0)],
        m[(1, 1)],
        m[(1, 2)],
    ]
}

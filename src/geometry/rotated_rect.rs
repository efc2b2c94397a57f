use crate::math::matrix_2d::{apply_to_point, pose, rotation};
use crate::math::polygon_2d::scale_from_origin;
use crate::math::{Point2, Vector2};

use super::{Shape, ShapeParams};

/// Factor applied to the corners to place the corner markers.
pub const MARKER_SCALE: f64 = 1.3;

/// A rectangle posed in its layer's local frame by a rotation and a scale.
///
/// The corners `(0, 0), (w, 0), (w, h), (0, h)` are rotated about the local
/// origin, scaled, then shifted by `(-w/2, -h/2)`. The pose is recomputed
/// whenever the angle changes.
#[derive(Debug, Clone, PartialEq)]
pub struct RotatedRect {
    width: f64,
    height: f64,
    degrees: f64,
    scale: f64,
    path: Vec<Point2>,
}

impl RotatedRect {
    /// Creates a rectangle of `width` x `height` turned by `degrees`.
    #[must_use]
    pub fn new(width: f64, height: f64, degrees: f64, scale: f64) -> Self {
        let mut rect = Self {
            width,
            height,
            degrees,
            scale,
            path: Vec::new(),
        };
        rect.path = rect.compute_path();
        rect
    }

    fn compute_path(&self) -> Vec<Point2> {
        let (w, h) = (self.width, self.height);
        let m = pose(-w / 2.0, -h / 2.0, self.scale, self.scale, self.degrees.to_radians());
        [(0.0, 0.0), (w, 0.0), (w, h), (0.0, h)]
            .iter()
            .map(|&(x, y)| apply_to_point(&m, x, y))
            .collect()
    }

    /// Sets the rotation angle and re-poses the corners.
    pub fn set_degrees(&mut self, degrees: f64) {
        self.degrees = degrees;
        self.path = self.compute_path();
    }

    /// Tip of the heading marker: `(0, -h)` rotated about the local origin.
    #[must_use]
    pub fn heading(&self) -> Point2 {
        apply_to_point(&rotation(self.degrees.to_radians()), 0.0, -self.height)
    }

    /// Corner markers, each corner scaled by [`MARKER_SCALE`] from the local origin.
    #[must_use]
    pub fn markers(&self) -> Vec<Point2> {
        scale_from_origin(&self.path, MARKER_SCALE)
    }

    /// Converts the posed corners into an editable shape placed at `origin`.
    #[must_use]
    pub fn to_shape(&self, origin: Point2, params: ShapeParams) -> Shape {
        let mut shape = Shape::with_params(self.path.clone(), params);
        shape.translate(Vector2::new(origin.x, origin.y));
        shape
    }

    #[must_use]
    pub fn path(&self) -> &[Point2] {
        &self.path
    }

    #[must_use]
    pub fn degrees(&self) -> f64 {
        self.degrees
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }
}

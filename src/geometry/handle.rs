use crate::math::Point2;

/// Circular hit-test region around one vertex of a shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Handle {
    /// Index of the vertex in the owning shape's path.
    pub index: usize,
    /// Center of the disc, equal to the vertex position.
    pub center: Point2,
    /// Disc radius in canvas units.
    pub radius: f64,
}

impl Handle {
    /// Creates a handle for vertex `index` at `center`.
    #[must_use]
    pub fn new(index: usize, center: Point2, radius: f64) -> Self {
        Self {
            index,
            center,
            radius,
        }
    }

    /// Returns `true` if `point` lies strictly inside the disc.
    #[must_use]
    pub fn contains(&self, point: &Point2) -> bool {
        (point - self.center).norm_squared() < self.radius * self.radius
    }
}

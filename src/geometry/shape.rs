use crate::error::{GeometryError, Result};
use crate::math::matrix_2d::{apply_to_point, rotation_about, scale_about, translation};
use crate::math::polygon_2d::{centroid, extent, point_in_polygon, scale_from_origin};
use crate::math::{Matrix3, Point2, Vector2};

use super::Handle;

/// Parameters for the geometry derived from a shape's path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeParams {
    /// Radius of each vertex hit-test disc.
    pub handle_radius: f64,
    /// Factor applied from the local origin to build the shader outline.
    pub shader_scale: f64,
}

impl Default for ShapeParams {
    fn default() -> Self {
        Self {
            handle_radius: 8.0,
            shader_scale: 1.2,
        }
    }
}

/// A closed polygonal shape with eagerly derived geometry.
///
/// Every mutation goes through [`Shape::set_path`], so width, height,
/// centroids, the shader outline and the handles always match the current
/// vertices.
#[derive(Debug, Clone, Default)]
pub struct Shape {
    params: ShapeParams,
    path: Vec<Point2>,
    x_coords: Vec<f64>,
    y_coords: Vec<f64>,
    width: f64,
    height: f64,
    centroid: Option<Point2>,
    shader: Vec<Point2>,
    shader_centroid: Option<Point2>,
    handles: Vec<Handle>,
}

impl Shape {
    /// Creates a shape from `path` with default parameters.
    #[must_use]
    pub fn new(path: Vec<Point2>) -> Self {
        Self::with_params(path, ShapeParams::default())
    }

    /// Creates a shape from `path` with the given parameters.
    #[must_use]
    pub fn with_params(path: Vec<Point2>, params: ShapeParams) -> Self {
        let mut shape = Self {
            params,
            ..Self::default()
        };
        shape.set_path(path);
        shape
    }

    /// Creates an empty shape, as used when a draw gesture starts.
    #[must_use]
    pub fn empty(params: ShapeParams) -> Self {
        Self::with_params(Vec::new(), params)
    }

    /// Builds the axis-aligned rectangle spanned by a fixed `start` corner and
    /// the opposite `corner`, in drawing order starting at `start`.
    #[must_use]
    pub fn rectangle_path(start: Point2, corner: Point2) -> Vec<Point2> {
        vec![
            start,
            Point2::new(corner.x, start.y),
            corner,
            Point2::new(start.x, corner.y),
        ]
    }

    /// Replaces the vertex sequence and recomputes all derived geometry.
    pub fn set_path(&mut self, path: Vec<Point2>) {
        self.path = path;
        self.x_coords = self.path.iter().map(|p| p.x).collect();
        self.y_coords = self.path.iter().map(|p| p.y).collect();
        (self.width, self.height) = extent(&self.path);
        self.centroid = centroid(&self.path);
        self.shader = scale_from_origin(&self.path, self.params.shader_scale);
        self.shader_centroid = centroid(&self.shader);
        self.handles = self
            .path
            .iter()
            .enumerate()
            .map(|(i, p)| Handle::new(i, *p, self.params.handle_radius))
            .collect();
    }

    /// Overwrites one vertex and recomputes all derived geometry.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::VertexOutOfRange` if `index` is not a vertex.
    pub fn move_vertex(&mut self, index: usize, point: Point2) -> Result<()> {
        let len = self.path.len();
        let mut path = std::mem::take(&mut self.path);
        let Some(vertex) = path.get_mut(index) else {
            self.path = path;
            return Err(GeometryError::VertexOutOfRange { index, len }.into());
        };
        *vertex = point;
        self.set_path(path);
        Ok(())
    }

    /// Maps every vertex through `matrix` and recomputes derived geometry.
    pub fn transform(&mut self, matrix: &Matrix3) {
        let path = self
            .path
            .iter()
            .map(|p| apply_to_point(matrix, p.x, p.y))
            .collect();
        self.set_path(path);
    }

    /// Moves the whole shape by `offset`.
    pub fn translate(&mut self, offset: Vector2) {
        self.transform(&translation(offset.x, offset.y));
    }

    /// Rotates the shape by `angle` radians about its centroid.
    pub fn rotate_about_centroid(&mut self, angle: f64) {
        if let Some(c) = self.centroid {
            self.transform(&rotation_about(&c, angle));
        }
    }

    /// Scales the shape uniformly by `factor` about its centroid.
    pub fn scale_about_centroid(&mut self, factor: f64) {
        if let Some(c) = self.centroid {
            self.transform(&scale_about(&c, factor));
        }
    }

    /// Returns the index of the first vertex whose handle contains `point`.
    #[must_use]
    pub fn handle_at(&self, point: &Point2) -> Option<usize> {
        self.handles
            .iter()
            .find(|h| h.contains(point))
            .map(|h| h.index)
    }

    /// Returns `true` if `point` is strictly inside the shape's outline.
    #[must_use]
    pub fn contains(&self, point: &Point2) -> bool {
        point_in_polygon(&self.path, point)
    }

    /// Iterates over the edges, the last vertex connecting back to the first.
    pub fn segments(&self) -> impl Iterator<Item = (&Point2, &Point2)> + '_ {
        crate::math::polygon_2d::segments(&self.path)
    }

    /// Length of the bounding box diagonal.
    #[must_use]
    pub fn diagonal(&self) -> f64 {
        self.width.hypot(self.height)
    }

    /// Offset from the centroid to the shader centroid, or zero when empty.
    ///
    /// Subtracting it re-centres the shader outline on the shape.
    #[must_use]
    pub fn shader_offset(&self) -> Vector2 {
        match (self.shader_centroid, self.centroid) {
            (Some(s), Some(c)) => s - c,
            _ => Vector2::zeros(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.path.len()
    }

    #[must_use]
    pub fn path(&self) -> &[Point2] {
        &self.path
    }

    #[must_use]
    pub fn x_coords(&self) -> &[f64] {
        &self.x_coords
    }

    #[must_use]
    pub fn y_coords(&self) -> &[f64] {
        &self.y_coords
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Mean of the vertices, `None` for an empty shape.
    #[must_use]
    pub fn centroid(&self) -> Option<Point2> {
        self.centroid
    }

    /// Vertices scaled by [`ShapeParams::shader_scale`] from the origin.
    #[must_use]
    pub fn shader(&self) -> &[Point2] {
        &self.shader
    }

    #[must_use]
    pub fn shader_centroid(&self) -> Option<Point2> {
        self.shader_centroid
    }

    #[must_use]
    pub fn handles(&self) -> &[Handle] {
        &self.handles
    }

    #[must_use]
    pub fn params(&self) -> ShapeParams {
        self.params
    }
}

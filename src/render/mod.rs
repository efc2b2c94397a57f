mod paint;
mod recorder;
mod style;

pub use paint::{paint_filled_rect, paint_origin_marker, paint_rotated_rect, paint_shape};
pub use recorder::{CommandRecorder, DrawCommand};
pub use style::ShapeStyle;

use crate::math::Point2;

/// An RGBA color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const RED: Self = Self::rgb(255, 0, 0);
    pub const BLUE: Self = Self::rgb(0, 0, 255);
    pub const YELLOW: Self = Self::rgb(255, 255, 0);
    pub const PINK: Self = Self::rgb(255, 192, 203);

    /// Creates an opaque color.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

/// A 2D drawing surface accepting primitive path commands in canvas-local
/// pixel coordinates.
///
/// Hosts implement this over their drawing API (an HTML canvas context, a
/// vector scene, a test recorder). Path commands accumulate into the current
/// path until `fill` or `stroke`; `save`/`restore` bracket the transform and
/// paint state.
pub trait Surface {
    /// Clears the given rectangle.
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    /// Pushes the transform and paint state.
    fn save(&mut self);

    /// Pops the transform and paint state.
    fn restore(&mut self);

    /// Shifts the current transform.
    fn translate(&mut self, dx: f64, dy: f64);

    /// Rotates the current transform by `angle` radians.
    fn rotate(&mut self, angle: f64);

    /// Starts a new path, discarding the current one.
    fn begin_path(&mut self);

    fn move_to(&mut self, p: Point2);

    fn line_to(&mut self, p: Point2);

    /// Appends a circular arc from `start_angle` to `end_angle` (radians).
    fn arc(&mut self, center: Point2, radius: f64, start_angle: f64, end_angle: f64);

    /// Appends an axis-aligned rectangle subpath.
    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    fn close_path(&mut self);

    fn set_fill(&mut self, color: Color);

    fn set_stroke(&mut self, color: Color);

    /// Fills the current path with the fill color.
    fn fill(&mut self);

    /// Strokes the current path with the stroke color.
    fn stroke(&mut self);
}

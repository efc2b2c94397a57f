use crate::error::{RenderError, Result};

use super::Color;

/// Paint parameters for shapes and their overlays.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeStyle {
    outline: Color,
    handles: Color,
    shader: Color,
    centroid_radius: f64,
    marker_radius: f64,
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self {
            outline: Color::YELLOW,
            handles: Color::PINK,
            shader: Color::RED,
            centroid_radius: 5.0,
            marker_radius: 4.0,
        }
    }
}

impl ShapeStyle {
    /// Creates a style with default colors and the given dot radii.
    ///
    /// # Errors
    ///
    /// Returns an error if either radius is not positive.
    pub fn new(centroid_radius: f64, marker_radius: f64) -> Result<Self> {
        for (name, radius) in [("centroid", centroid_radius), ("marker", marker_radius)] {
            if radius.is_nan() || radius <= 0.0 {
                return Err(RenderError::InvalidStyle(format!(
                    "{name} radius must be positive, got {radius}"
                ))
                .into());
            }
        }
        Ok(Self {
            centroid_radius,
            marker_radius,
            ..Self::default()
        })
    }

    /// Replaces the outline, handle and shader colors.
    #[must_use]
    pub fn with_colors(mut self, outline: Color, handles: Color, shader: Color) -> Self {
        self.outline = outline;
        self.handles = handles;
        self.shader = shader;
        self
    }

    #[must_use]
    pub fn outline(&self) -> Color {
        self.outline
    }

    #[must_use]
    pub fn handles(&self) -> Color {
        self.handles
    }

    #[must_use]
    pub fn shader(&self) -> Color {
        self.shader
    }

    /// Radius of the centroid and shader-centroid dots.
    #[must_use]
    pub fn centroid_radius(&self) -> f64 {
        self.centroid_radius
    }

    /// Radius of the heading and corner dots of posed rectangles.
    #[must_use]
    pub fn marker_radius(&self) -> f64 {
        self.marker_radius
    }
}

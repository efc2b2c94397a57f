use crate::geometry::{RotatedRect, Shape};
use crate::math::Point2;
use crate::render::{
    paint_filled_rect, paint_origin_marker, paint_rotated_rect, paint_shape, Color, ShapeStyle,
    Surface,
};

/// What a layer draws, in the layer's local frame.
#[derive(Debug, Clone)]
pub enum Graphic {
    /// An editable polygonal shape.
    Shape(Shape),
    /// A rectangle posed by an angle.
    RotatedRect(RotatedRect),
    /// A filled axis-aligned rectangle anchored at the local origin.
    FilledRect { width: f64, height: f64, color: Color },
    /// A dot marking the local origin.
    OriginMarker { radius: f64, color: Color },
}

impl Graphic {
    /// Issues this graphic's draw commands.
    pub fn draw(&self, surface: &mut dyn Surface, style: &ShapeStyle) {
        match self {
            Self::Shape(shape) => paint_shape(surface, shape, style),
            Self::RotatedRect(rect) => paint_rotated_rect(surface, rect, style),
            Self::FilledRect {
                width,
                height,
                color,
            } => paint_filled_rect(surface, *width, *height, *color),
            Self::OriginMarker { radius, color } => paint_origin_marker(surface, *radius, *color),
        }
    }

    /// Returns `true` if `point`, given in the layer's local frame, falls inside
    /// the graphic's outline.
    #[must_use]
    pub fn contains(&self, point: &Point2) -> bool {
        match self {
            Self::Shape(shape) => shape.contains(point),
            Self::RotatedRect(rect) => crate::math::polygon_2d::point_in_polygon(rect.path(), point),
            Self::FilledRect { width, height, .. } => {
                point.x > 0.0 && point.y > 0.0 && point.x < *width && point.y < *height
            }
            Self::OriginMarker { .. } => false,
        }
    }

    #[must_use]
    pub fn as_shape(&self) -> Option<&Shape> {
        match self {
            Self::Shape(shape) => Some(shape),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_shape_mut(&mut self) -> Option<&mut Shape> {
        match self {
            Self::Shape(shape) => Some(shape),
            _ => None,
        }
    }
}

impl From<Shape> for Graphic {
    fn from(shape: Shape) -> Self {
        Self::Shape(shape)
    }
}

impl From<RotatedRect> for Graphic {
    fn from(rect: RotatedRect) -> Self {
        Self::RotatedRect(rect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filled_rect_contains_interior() {
        let g = Graphic::FilledRect {
            width: 100.0,
            height: 60.0,
            color: Color::RED,
        };
        assert!(g.contains(&Point2::new(50.0, 30.0)));
        assert!(!g.contains(&Point2::new(0.0, 30.0)));
        assert!(!g.contains(&Point2::new(120.0, 30.0)));
    }

    #[test]
    fn rotated_rect_contains_interior_point() {
        let g = Graphic::from(RotatedRect::new(50.0, 50.0, 30.0, 1.0));
        // Along y = 0 the posed rect spans roughly x in (-39.4, 18.3).
        assert!(g.contains(&Point2::new(-20.0, 0.0)));
        assert!(!g.contains(&Point2::new(200.0, 0.0)));
    }

    #[test]
    fn only_shapes_expose_shape() {
        let shape = Graphic::from(Shape::new(vec![Point2::new(1.0, 2.0)]));
        assert!(shape.as_shape().is_some());
        let marker = Graphic::OriginMarker {
            radius: 3.0,
            color: Color::BLUE,
        };
        assert!(marker.as_shape().is_none());
        assert!(!marker.contains(&Point2::origin()));
    }
}

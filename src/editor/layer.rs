use crate::math::{Point2, Vector2};
use crate::render::{ShapeStyle, Surface};

use super::Graphic;

slotmap::new_key_type! {
    /// Unique identifier for a layer in the editor.
    pub struct LayerId;
}

/// A graphic positioned at an origin offset on the canvas.
#[derive(Debug, Clone)]
pub struct Layer {
    /// Canvas position of the layer's local origin.
    pub origin: Point2,
    /// What the layer draws.
    pub graphic: Graphic,
}

impl Layer {
    /// Creates a layer drawing `graphic` at `(x, y)`.
    #[must_use]
    pub fn new(x: f64, y: f64, graphic: Graphic) -> Self {
        Self {
            origin: Point2::new(x, y),
            graphic,
        }
    }

    pub fn set_origin(&mut self, x: f64, y: f64) {
        self.origin = Point2::new(x, y);
    }

    pub fn set_graphic(&mut self, graphic: Graphic) {
        self.graphic = graphic;
    }

    /// Converts a canvas point into this layer's local frame.
    #[must_use]
    pub fn to_local(&self, point: &Point2) -> Point2 {
        point - Vector2::new(self.origin.x, self.origin.y)
    }

    /// Returns `true` if the canvas point falls inside the layer's graphic.
    #[must_use]
    pub fn contains(&self, point: &Point2) -> bool {
        self.graphic.contains(&self.to_local(point))
    }

    /// Draws the graphic with the surface shifted to the layer's origin.
    pub fn draw(&self, surface: &mut dyn Surface, style: &ShapeStyle) {
        surface.save();
        surface.translate(self.origin.x, self.origin.y);
        self.graphic.draw(surface, style);
        surface.restore();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{Color, CommandRecorder, DrawCommand};

    fn marker_layer() -> Layer {
        Layer::new(
            40.0,
            30.0,
            Graphic::OriginMarker {
                radius: 3.0,
                color: Color::BLUE,
            },
        )
    }

    #[test]
    fn draw_brackets_graphic_with_translate() {
        let mut rec = CommandRecorder::new();
        marker_layer().draw(&mut rec, &ShapeStyle::default());
        let cmds = rec.commands();
        assert_eq!(cmds[0], DrawCommand::Save);
        assert_eq!(cmds[1], DrawCommand::Translate { dx: 40.0, dy: 30.0 });
        assert_eq!(cmds.last(), Some(&DrawCommand::Restore));
        assert_eq!(rec.depth(), 0);
    }

    #[test]
    fn contains_uses_local_frame() {
        let layer = Layer::new(
            50.0,
            50.0,
            Graphic::FilledRect {
                width: 100.0,
                height: 60.0,
                color: Color::RED,
            },
        );
        assert!(layer.contains(&Point2::new(60.0, 60.0)));
        assert!(!layer.contains(&Point2::new(10.0, 10.0)));
    }

    #[test]
    fn set_origin_moves_layer() {
        let mut layer = marker_layer();
        layer.set_origin(1.0, 2.0);
        assert_eq!(layer.to_local(&Point2::new(1.0, 2.0)), Point2::origin());
    }
}

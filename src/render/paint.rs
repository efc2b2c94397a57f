use std::f64::consts::TAU;

use crate::geometry::{RotatedRect, Shape};
use crate::math::Point2;

use super::{Color, ShapeStyle, Surface};

/// Strokes a closed outline through `points`.
fn stroke_outline(surface: &mut dyn Surface, points: &[Point2]) {
    let Some(&first) = points.first() else {
        return;
    };
    surface.move_to(first);
    for &p in &points[1..] {
        surface.line_to(p);
    }
    surface.line_to(first);
    surface.stroke();
}

fn dot(surface: &mut dyn Surface, center: Point2, radius: f64) {
    surface.move_to(center);
    surface.arc(center, radius, 0.0, TAU);
}

/// Draws a shape: its outline, vertex handles and centroid, then the shader
/// outline re-centred on the shape with its own centroid.
///
/// Empty shapes draw nothing.
pub fn paint_shape(surface: &mut dyn Surface, shape: &Shape, style: &ShapeStyle) {
    if shape.is_empty() {
        return;
    }

    surface.begin_path();
    surface.set_stroke(style.outline());
    stroke_outline(surface, shape.path());

    surface.begin_path();
    surface.set_fill(style.handles());
    for handle in shape.handles() {
        dot(surface, handle.center, handle.radius);
        surface.close_path();
    }
    if let Some(c) = shape.centroid() {
        dot(surface, c, style.centroid_radius());
    }
    surface.fill();

    let offset = shape.shader_offset();
    surface.save();
    surface.begin_path();
    surface.translate(-offset.x, -offset.y);
    surface.set_stroke(style.shader());
    stroke_outline(surface, shape.shader());
    if let Some(sc) = shape.shader_centroid() {
        surface.begin_path();
        surface.set_fill(style.shader());
        dot(surface, sc, style.centroid_radius());
        surface.fill();
        surface.close_path();
    }
    surface.restore();
}

/// Draws a posed rectangle: a heading line from the local origin with a dot
/// at its tip, the four edges, and a dot per corner marker.
pub fn paint_rotated_rect(surface: &mut dyn Surface, rect: &RotatedRect, style: &ShapeStyle) {
    let heading = rect.heading();
    surface.begin_path();
    surface.set_stroke(style.outline());
    surface.move_to(Point2::origin());
    surface.line_to(heading);
    surface.stroke();

    surface.begin_path();
    surface.set_fill(style.outline());
    dot(surface, heading, style.marker_radius());
    surface.fill();

    surface.begin_path();
    stroke_outline(surface, rect.path());

    surface.begin_path();
    surface.set_fill(style.handles());
    for marker in rect.markers() {
        dot(surface, marker, style.marker_radius());
        surface.close_path();
    }
    surface.fill();
}

/// Fills a `width` x `height` rectangle at the local origin.
pub fn paint_filled_rect(surface: &mut dyn Surface, width: f64, height: f64, color: Color) {
    surface.begin_path();
    surface.set_fill(color);
    surface.rect(0.0, 0.0, width, height);
    surface.fill();
    surface.close_path();
}

/// Fills a small dot at the local origin, used as a development guide.
pub fn paint_origin_marker(surface: &mut dyn Surface, radius: f64, color: Color) {
    surface.begin_path();
    surface.set_fill(color);
    dot(surface, Point2::origin(), radius);
    surface.fill();
    surface.close_path();
}

use crate::math::{Point2, Vector2};

/// Editor commands issued by host controls rather than the pointer.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Discard the pending shape.
    Reset,
    /// Rotate the pending shape about its centroid.
    Rotate { degrees: f64 },
    /// Scale the pending shape uniformly about its centroid.
    Scale { factor: f64 },
    /// Move the pending shape.
    Translate { dx: f64, dy: f64 },
}

/// A discrete input delivered by the host, in surface-relative coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    PointerDown(Point2),
    PointerMove(Point2),
    PointerUp(Point2),
    /// The pointer left the surface.
    PointerLeave(Point2),
    /// A key was released; carries the host's key name.
    KeyUp(String),
    Command(Command),
}

impl InputEvent {
    /// Converts client coordinates into surface-relative ones by removing the
    /// surface's offset within the client area.
    #[must_use]
    pub fn pointer_from_client(client: Point2, surface_offset: Vector2) -> Point2 {
        client - surface_offset
    }
}

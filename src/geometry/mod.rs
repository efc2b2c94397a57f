pub mod handle;
pub mod rotated_rect;
pub mod shape;

pub use handle::Handle;
pub use rotated_rect::RotatedRect;
pub use shape::{Shape, ShapeParams};

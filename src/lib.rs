pub mod config;
pub mod editor;
pub mod error;
pub mod geometry;
pub mod interaction;
pub mod math;
pub mod render;

pub use config::EditorConfig;
pub use editor::{Editor, Graphic, Layer, LayerId};
pub use error::{Result, ShapekitError};
pub use geometry::Shape;
pub use interaction::{InputEvent, Interaction, Transition};

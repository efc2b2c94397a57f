use thiserror::Error;

/// Top-level error type for the shapekit editing kernel.
#[derive(Debug, Error)]
pub enum ShapekitError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Editor(#[from] EditorError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors related to shape geometry.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("vertex index {index} is out of range for a shape with {len} vertices")]
    VertexOutOfRange { index: usize, len: usize },
}

/// Errors related to the editor context.
#[derive(Debug, Error)]
pub enum EditorError {
    #[error("layer not found")]
    LayerNotFound,

    #[error("no pending shape")]
    NoPendingShape,
}

/// Errors related to rendering.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("invalid style: {0}")]
    InvalidStyle(String),
}

/// Errors related to editor configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {field} = {value}")]
    Invalid { field: &'static str, value: f64 },

    #[error("confirm key must not be empty")]
    EmptyConfirmKey,
}

/// Convenience type alias for results using [`ShapekitError`].
pub type Result<T> = std::result::Result<T, ShapekitError>;

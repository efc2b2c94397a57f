use crate::error::{ConfigError, Result};
use crate::geometry::ShapeParams;

/// Parameters controlling the editor's interaction thresholds and radii.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorConfig {
    /// Drawn shapes whose bounding diagonal is below this are discarded.
    pub min_diagonal: f64,
    /// Drawn shapes narrower or shorter than this are discarded.
    pub min_side: f64,
    /// Radius of the vertex hit-test discs.
    pub handle_radius: f64,
    /// Scale factor of the shader outline.
    pub shader_scale: f64,
    /// Radius of the centroid dots.
    pub centroid_radius: f64,
    /// Key name that commits the pending shape, compared case-insensitively.
    pub confirm_key: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            min_diagonal: 50.0,
            min_side: 10.0,
            handle_radius: 8.0,
            shader_scale: 1.2,
            centroid_radius: 5.0,
            confirm_key: "Enter".to_owned(),
        }
    }
}

impl EditorConfig {
    /// Checks that every threshold is finite and every radius and scale is
    /// positive.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` naming the first offending field, or
    /// `ConfigError::EmptyConfirmKey`.
    pub fn validate(&self) -> Result<()> {
        let non_negative = [("min_diagonal", self.min_diagonal), ("min_side", self.min_side)];
        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Invalid { field, value }.into());
            }
        }
        let positive = [
            ("handle_radius", self.handle_radius),
            ("shader_scale", self.shader_scale),
            ("centroid_radius", self.centroid_radius),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::Invalid { field, value }.into());
            }
        }
        if self.confirm_key.trim().is_empty() {
            return Err(ConfigError::EmptyConfirmKey.into());
        }
        Ok(())
    }

    /// Shape parameters derived from this configuration.
    #[must_use]
    pub fn shape_params(&self) -> ShapeParams {
        ShapeParams {
            handle_radius: self.handle_radius,
            shader_scale: self.shader_scale,
        }
    }

    /// Returns `true` if `key` names the confirm key.
    #[must_use]
    pub fn is_confirm_key(&self, key: &str) -> bool {
        key.eq_ignore_ascii_case(&self.confirm_key)
    }
}

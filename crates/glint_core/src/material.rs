//! Surface material for the Phong shading model.

use glint_math::Vector3;
use serde::Deserialize;

use crate::scene::{ensure_finite, SceneError};

/// Color type alias (RGB values typically 0-1, not clamped)
pub type Color = Vector3;

/// Fixed set of shading coefficients shared by every primitive kind.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Material {
    /// Ambient reflectance, multiplied by the light's ambient intensity
    pub ambient: Color,

    /// Diffuse reflectance (Lambert term)
    pub diffuse: Color,

    /// Specular reflectance (Phong highlight)
    pub specular: Color,

    /// Specular exponent, must be positive
    pub shininess: f64,

    /// Mirror reflection weight in [0, 1]; `None` disables reflection
    #[serde(default)]
    pub reflection: Option<f64>,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            ambient: Color::splat(0.1),
            diffuse: Color::splat(0.5),
            specular: Color::ONE,
            shininess: 100.0,
            reflection: None,
        }
    }
}

impl Material {
    /// Material in the style of the classic demo scene: the ambient term is
    /// a tenth of the base color, diffuse is the base color, white highlight.
    pub fn from_color(color: Color) -> Self {
        Self {
            ambient: color * 0.1,
            diffuse: color,
            ..Default::default()
        }
    }

    /// Set the specular exponent.
    pub fn with_shininess(mut self, shininess: f64) -> Self {
        self.shininess = shininess;
        self
    }

    /// Set the mirror reflection weight.
    pub fn with_reflection(mut self, reflection: f64) -> Self {
        self.reflection = Some(reflection);
        self
    }

    /// Check if this material contributes a reflection bounce.
    pub fn is_reflective(&self) -> bool {
        matches!(self.reflection, Some(k) if k > 0.0)
    }

    /// Check the coefficients are usable for shading.
    pub fn validate(&self) -> Result<(), SceneError> {
        ensure_finite("material.ambient", self.ambient)?;
        ensure_finite("material.diffuse", self.diffuse)?;
        ensure_finite("material.specular", self.specular)?;

        if !self.shininess.is_finite() || self.shininess <= 0.0 {
            return Err(SceneError::InvalidShininess(self.shininess));
        }

        if let Some(k) = self.reflection {
            if !(0.0..=1.0).contains(&k) {
                return Err(SceneError::InvalidReflection(k));
            }
        }

        Ok(())
    }
}

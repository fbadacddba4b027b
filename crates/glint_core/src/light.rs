//! Point light.

use glint_math::Vector3;
use serde::Deserialize;

use crate::material::Color;
use crate::scene::{ensure_finite, SceneError};

/// A single point light with separate intensities per Phong term.
///
/// There is no distance attenuation.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Light {
    pub position: Vector3,
    #[serde(default = "unit_intensity")]
    pub ambient: Color,
    #[serde(default = "unit_intensity")]
    pub diffuse: Color,
    #[serde(default = "unit_intensity")]
    pub specular: Color,
}

fn unit_intensity() -> Color {
    Color::ONE
}

impl Light {
    /// White light of unit intensity at `position`.
    pub fn white(position: Vector3) -> Self {
        Self {
            position,
            ambient: Color::ONE,
            diffuse: Color::ONE,
            specular: Color::ONE,
        }
    }

    pub fn validate(&self) -> Result<(), SceneError> {
        ensure_finite("light.position", self.position)?;
        ensure_finite("light.ambient", self.ambient)?;
        ensure_finite("light.diffuse", self.diffuse)?;
        ensure_finite("light.specular", self.specular)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_defaults_to_white() {
        let light: Light = serde_json::from_str(r#"{ "position": [5, 5, -10] }"#).unwrap();

        assert_eq!(light, Light::white(Vector3::new(5.0, 5.0, -10.0)));
    }

    #[test]
    fn test_validate() {
        assert!(Light::white(Vector3::ZERO).validate().is_ok());

        let bad = Light {
            specular: Color::new(f64::NAN, 1.0, 1.0),
            ..Light::white(Vector3::ZERO)
        };
        assert!(matches!(bad.validate(), Err(SceneError::NonFinite { field: "light.specular" })));
    }
}

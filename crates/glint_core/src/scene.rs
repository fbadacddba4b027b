//! Scene types for Glint.
//!
//! A [`Scene`] is read-only once built. Every invariant the tracer relies
//! on (positive radii, unit plane normals, a light, a usable camera) is
//! checked by [`SceneBuilder::build`], so rendering never has to.

use glint_math::{DegenerateVectorError, Vector3};
use thiserror::Error;

use crate::camera::CameraSettings;
use crate::light::Light;
use crate::material::Material;
use crate::shape::{Plane, Shape, Sphere};

/// Errors detected while constructing a scene.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    #[error("sphere radius must be positive, got {0}")]
    InvalidRadius(f64),

    #[error("plane normal is degenerate: {source}")]
    DegenerateNormal { source: DegenerateVectorError },

    #[error("shininess must be positive, got {0}")]
    InvalidShininess(f64),

    #[error("reflection coefficient must be within [0, 1], got {0}")]
    InvalidReflection(f64),

    #[error("{field} has a non-finite component")]
    NonFinite { field: &'static str },

    #[error("screen distance must be positive, got {0}")]
    InvalidScreenDistance(f64),

    #[error("camera orientation is degenerate: {source}")]
    DegenerateCamera { source: DegenerateVectorError },

    #[error("scene has no light")]
    MissingLight,

    #[error("scene has no camera")]
    MissingCamera,

    #[error("primitive {index} ('{name}'): {source}")]
    InvalidPrimitive {
        index: usize,
        name: String,
        #[source]
        source: Box<SceneError>,
    },
}

pub(crate) fn ensure_finite(field: &'static str, v: Vector3) -> Result<(), SceneError> {
    if v.is_finite() {
        Ok(())
    } else {
        Err(SceneError::NonFinite { field })
    }
}

/// A shape paired with its material.
#[derive(Clone, Debug, PartialEq)]
pub struct Primitive {
    /// Primitive name (for logs and error messages)
    pub name: String,
    shape: Shape,
    material: Material,
}

impl Primitive {
    /// Create a new primitive, validating its material.
    pub fn new(
        name: impl Into<String>,
        shape: impl Into<Shape>,
        material: Material,
    ) -> Result<Self, SceneError> {
        material.validate()?;
        Ok(Self {
            name: name.into(),
            shape: shape.into(),
            material,
        })
    }

    /// Create a sphere primitive.
    pub fn sphere(
        name: impl Into<String>,
        center: Vector3,
        radius: f64,
        material: Material,
    ) -> Result<Self, SceneError> {
        Self::new(name, Sphere::new(center, radius)?, material)
    }

    /// Create a plane primitive.
    pub fn plane(
        name: impl Into<String>,
        point: Vector3,
        normal: Vector3,
        material: Material,
    ) -> Result<Self, SceneError> {
        Self::new(name, Plane::new(point, normal)?, material)
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn material(&self) -> &Material {
        &self.material
    }
}

/// A complete scene: primitives, one light and one camera.
///
/// Primitive order only matters for breaking exact distance ties.
#[derive(Clone, Debug)]
pub struct Scene {
    /// Scene name (usually from filename)
    pub name: String,
    primitives: Vec<Primitive>,
    light: Light,
    camera: CameraSettings,
}

impl Scene {
    /// Start building a scene.
    pub fn builder(name: impl Into<String>) -> SceneBuilder {
        SceneBuilder::new(name)
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    pub fn light(&self) -> &Light {
        &self.light
    }

    pub fn camera(&self) -> &CameraSettings {
        &self.camera
    }

    /// Get primitive count.
    pub fn primitive_count(&self) -> usize {
        self.primitives.len()
    }

    /// Get the number of primitives that reflect.
    pub fn reflective_count(&self) -> usize {
        self.primitives
            .iter()
            .filter(|p| p.material().is_reflective())
            .count()
    }
}

/// Builder that validates a scene as it is assembled.
#[derive(Debug, Default)]
pub struct SceneBuilder {
    name: String,
    primitives: Vec<Primitive>,
    light: Option<Light>,
    camera: Option<CameraSettings>,
}

impl SceneBuilder {
    /// Create an empty builder.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Add a primitive.
    pub fn with_primitive(mut self, primitive: Primitive) -> Self {
        self.primitives.push(primitive);
        self
    }

    /// Add several primitives, keeping their order.
    pub fn with_primitives(mut self, primitives: impl IntoIterator<Item = Primitive>) -> Self {
        self.primitives.extend(primitives);
        self
    }

    /// Set the light.
    pub fn with_light(mut self, light: Light) -> Self {
        self.light = Some(light);
        self
    }

    /// Set the camera.
    pub fn with_camera(mut self, camera: CameraSettings) -> Self {
        self.camera = Some(camera);
        self
    }

    /// Validate and produce the scene.
    pub fn build(self) -> Result<Scene, SceneError> {
        let light = self.light.ok_or(SceneError::MissingLight)?;
        light.validate()?;

        let camera = self.camera.ok_or(SceneError::MissingCamera)?;
        camera.validate()?;

        // Shapes are checked by their constructors. Material fields are
        // public, so a material may be invalid when it reaches the builder.
        for (index, primitive) in self.primitives.iter().enumerate() {
            primitive
                .material()
                .validate()
                .map_err(|source| SceneError::InvalidPrimitive {
                    index,
                    name: primitive.name.clone(),
                    source: Box::new(source),
                })?;

            if primitive.material().reflection == Some(0.0) {
                log::warn!(
                    "Primitive '{}' has reflection 0.0 and will never reflect",
                    primitive.name
                );
            }
        }

        if self.primitives.is_empty() {
            log::warn!("Scene '{}' has no primitives; every pixel will be background", self.name);
        }

        let scene = Scene {
            name: self.name,
            primitives: self.primitives,
            light,
            camera,
        };

        log::debug!(
            "Built scene '{}': {} primitives ({} reflective), light at {:?}, camera at {:?}",
            scene.name,
            scene.primitive_count(),
            scene.reflective_count(),
            scene.light.position,
            scene.camera.position
        );

        Ok(scene)
    }
}

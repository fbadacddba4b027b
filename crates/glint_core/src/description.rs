//! JSON scene files.
//!
//! A scene file carries the scene itself plus the image resolution and
//! render settings:
//!
//! ```json
//! {
//!   "width": 400, "height": 300,
//!   "render": { "max_depth": 1, "shadows": "ambient_only" },
//!   "camera": { "position": [0, 0, 1] },
//!   "light": { "position": [5, 5, -10] },
//!   "primitives": [
//!     { "name": "red", "type": "sphere", "center": [0, 0, -3], "radius": 1,
//!       "material": { "ambient": [0.1, 0, 0], "diffuse": [1, 0, 0],
//!                     "specular": [1, 1, 1], "shininess": 100, "reflection": 0.2 } }
//!   ]
//! }
//! ```
//!
//! The file is parsed into description types first and then converted
//! through [`SceneBuilder`](crate::SceneBuilder), so files and code share one validation path.

use std::path::Path;

use glint_math::Vector3;
use serde::Deserialize;
use thiserror::Error;

use crate::camera::CameraSettings;
use crate::light::Light;
use crate::material::Material;
use crate::scene::{Primitive, Scene, SceneError};
use crate::settings::{RenderSettings, MAX_DEPTH_LIMIT};
use crate::shape::{Plane, Shape, Sphere};

/// Errors that can occur while loading a scene file.
#[derive(Error, Debug)]
pub enum SceneFileError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid resolution {width}x{height}")]
    InvalidResolution { width: u32, height: u32 },

    #[error("max_depth {0} exceeds the limit of {MAX_DEPTH_LIMIT}")]
    DepthTooLarge(u32),

    #[error("Invalid scene: {0}")]
    Scene(#[from] SceneError),
}

/// Everything needed to render one image.
#[derive(Debug, Clone)]
pub struct SceneFile {
    pub width: u32,
    pub height: u32,
    pub settings: RenderSettings,
    pub scene: Scene,
}

impl SceneFile {
    /// Check resolution and settings limits.
    pub fn validate(&self) -> Result<(), SceneFileError> {
        if self.width == 0 || self.height == 0 {
            return Err(SceneFileError::InvalidResolution {
                width: self.width,
                height: self.height,
            });
        }
        if self.settings.max_depth > MAX_DEPTH_LIMIT {
            return Err(SceneFileError::DepthTooLarge(self.settings.max_depth));
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SceneDescription {
    #[serde(default)]
    name: Option<String>,
    width: u32,
    height: u32,
    #[serde(default)]
    render: RenderSettings,
    camera: Option<CameraDescription>,
    light: Option<Light>,
    #[serde(default)]
    primitives: Vec<PrimitiveDescription>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CameraDescription {
    position: Vector3,
    look_at: Option<Vector3>,
    up: Option<Vector3>,
    screen_distance: Option<f64>,
    aspect_correct: Option<bool>,
}

impl From<CameraDescription> for CameraSettings {
    fn from(desc: CameraDescription) -> Self {
        let mut camera = CameraSettings::new(desc.position);
        if let Some(look_at) = desc.look_at {
            camera = camera.with_look_at(look_at);
        }
        if let Some(up) = desc.up {
            camera = camera.with_up(up);
        }
        if let Some(distance) = desc.screen_distance {
            camera = camera.with_screen_distance(distance);
        }
        if let Some(aspect_correct) = desc.aspect_correct {
            camera = camera.with_aspect_correct(aspect_correct);
        }
        camera
    }
}

#[derive(Debug, Deserialize)]
struct PrimitiveDescription {
    #[serde(default)]
    name: Option<String>,
    #[serde(flatten)]
    shape: ShapeDescription,
    material: Material,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ShapeDescription {
    Sphere { center: Vector3, radius: f64 },
    Plane { point: Vector3, normal: Vector3 },
}

impl ShapeDescription {
    fn kind(&self) -> &'static str {
        match self {
            ShapeDescription::Sphere { .. } => "sphere",
            ShapeDescription::Plane { .. } => "plane",
        }
    }

    fn into_shape(self) -> Result<Shape, SceneError> {
        Ok(match self {
            ShapeDescription::Sphere { center, radius } => Sphere::new(center, radius)?.into(),
            ShapeDescription::Plane { point, normal } => Plane::new(point, normal)?.into(),
        })
    }
}

impl SceneDescription {
    fn into_scene_file(self, fallback_name: &str) -> Result<SceneFile, SceneFileError> {
        let name = self.name.unwrap_or_else(|| fallback_name.to_string());

        let mut primitives = Vec::with_capacity(self.primitives.len());
        for (index, desc) in self.primitives.into_iter().enumerate() {
            let prim_name = desc
                .name
                .unwrap_or_else(|| format!("{}{}", desc.shape.kind(), index));
            let primitive = desc
                .shape
                .into_shape()
                .and_then(|shape| Primitive::new(prim_name.clone(), shape, desc.material))
                .map_err(|source| SceneError::InvalidPrimitive {
                    index,
                    name: prim_name,
                    source: Box::new(source),
                })?;
            primitives.push(primitive);
        }

        let mut builder = Scene::builder(name).with_primitives(primitives);
        if let Some(light) = self.light {
            builder = builder.with_light(light);
        }
        if let Some(camera) = self.camera {
            builder = builder.with_camera(camera.into());
        }

        let file = SceneFile {
            width: self.width,
            height: self.height,
            settings: self.render,
            scene: builder.build()?,
        };
        file.validate()?;
        Ok(file)
    }
}

/// Load a scene file from disk.
///
/// The scene is named after the file stem unless the file sets `name`.
pub fn load_scene_file<P: AsRef<Path>>(path: P) -> Result<SceneFile, SceneFileError> {
    let path = path.as_ref();
    log::info!("Loading scene file: {}", path.display());

    let content = std::fs::read_to_string(path)?;
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("scene");

    let file = parse_scene_description_named(&content, stem)?;
    log::info!(
        "Loaded scene '{}': {} primitives, {}x{}",
        file.scene.name,
        file.scene.primitive_count(),
        file.width,
        file.height
    );
    Ok(file)
}

/// Parse a scene file from a JSON string.
pub fn parse_scene_description(json: &str) -> Result<SceneFile, SceneFileError> {
    parse_scene_description_named(json, "scene")
}

fn parse_scene_description_named(json: &str, name: &str) -> Result<SceneFile, SceneFileError> {
    let description: SceneDescription = serde_json::from_str(json)?;
    description.into_scene_file(name)
}

//! Glint Core - Scene description for the Glint ray tracer.
//!
//! This crate provides:
//!
//! - **Scene types**: `Scene`, `Primitive`, `Shape`, `Material`, `Light`, `CameraSettings`
//! - **Validation**: malformed scenes are rejected when they are built, never mid-render
//! - **Scene files**: JSON scene loading and built-in presets
//!
//! # Example
//!
//! ```ignore
//! use glint_core::load_scene_file;
//!
//! let file = load_scene_file("scenes/four_spheres.json")?;
//! println!("Loaded {} primitives at {}x{}",
//!     file.scene.primitive_count(),
//!     file.width,
//!     file.height);
//! ```

pub mod camera;
pub mod description;
pub mod light;
pub mod material;
pub mod presets;
pub mod scene;
pub mod settings;
pub mod shape;

// Re-export commonly used types
pub use camera::CameraSettings;
pub use description::{load_scene_file, parse_scene_description, SceneFile, SceneFileError};
pub use light::Light;
pub use material::{Color, Material};
pub use presets::Preset;
pub use scene::{Primitive, Scene, SceneBuilder, SceneError};
pub use settings::{ReflectionBlend, RenderSettings, ShadowPolicy, MAX_DEPTH_LIMIT};
pub use shape::{Plane, Shape, Sphere};

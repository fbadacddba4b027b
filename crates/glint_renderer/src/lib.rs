//! Glint Renderer - CPU Whitted-style ray tracing
//!
//! For every pixel a primary ray is traced into the scene. The nearest hit is
//! shaded with ambient + diffuse + specular Phong terms and a hard shadow
//! test, then mirror reflections are followed up to a fixed depth.

mod bucket;
mod camera;
mod hittable;
mod output;
mod query;
mod renderer;
mod shading;
mod tracer;

pub use bucket::{generate_buckets, render_bucket, Bucket, BucketResult, DEFAULT_BUCKET_SIZE};
pub use camera::Camera;
pub use hittable::{Hittable, PARALLEL_EPSILON};
pub use output::{save_image, save_png, save_ppm, write_ppm};
pub use query::{any_hit_within, find_closest, Hit};
pub use renderer::{
    color_to_rgb8, render, render_parallel, render_parallel_with_buckets, render_pixel, ImageBuffer,
    RenderError,
};
pub use shading::{shade, SurfaceInteraction, SHADOW_EPSILON};
pub use tracer::trace;

/// Re-export scene and math types used in the renderer API
pub use glint_core::{Color, ReflectionBlend, RenderSettings, Scene, ShadowPolicy};
pub use glint_math::{DegenerateVectorError, Ray, Vector3};

//! Image driver.
//!
//! Maps every pixel to a primary ray, traces it, and stores the color in an
//! [`ImageBuffer`]. Two entry points:
//! - [`render`]: single-threaded, row-major, the reference path
//! - [`render_parallel`]: bucketed across the rayon pool, same output

use std::time::Instant;

use glint_core::{Color, RenderSettings, Scene};
use glint_math::{DegenerateVectorError, Interval};
use rayon::prelude::*;
use thiserror::Error;

use crate::bucket::{generate_buckets, render_bucket, BucketResult, DEFAULT_BUCKET_SIZE};
use crate::camera::Camera;
use crate::tracer::trace;

/// Errors that can occur while rendering or saving an image.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Degenerate vector during trace: {0}")]
    Degenerate(#[from] DegenerateVectorError),

    #[error("Invalid resolution {width}x{height}")]
    InvalidResolution { width: u32, height: u32 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),
}

/// Clamp a value to [0, 1] range.
#[inline]
pub fn clamp_01(x: f64) -> f64 {
    Interval::UNIT.clamp(x)
}

/// Convert a color to 8-bit RGB, clamping each channel to [0, 1] first.
pub fn color_to_rgb8(color: Color) -> [u8; 3] {
    let r = (255.0 * clamp_01(color.x)) as u8;
    let g = (255.0 * clamp_01(color.y)) as u8;
    let b = (255.0 * clamp_01(color.z)) as u8;
    [r, g, b]
}

/// Trace the primary ray of a single pixel.
pub fn render_pixel(
    camera: &Camera,
    scene: &Scene,
    x: u32,
    y: u32,
    settings: &RenderSettings,
) -> Result<Color, DegenerateVectorError> {
    let ray = camera.primary_ray(x, y)?;
    trace(&ray, scene, settings, settings.max_depth)
}

/// Framebuffer of unclamped colors, row-major from the top-left pixel.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; width as usize * height as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Copy a rendered bucket into place.
    pub fn write_bucket(&mut self, result: &BucketResult) {
        let bucket = &result.bucket;
        for local_y in 0..bucket.height {
            for local_x in 0..bucket.width {
                let color = result.pixels[(local_y * bucket.width + local_x) as usize];
                self.set(bucket.x + local_x, bucket.y + local_y, color);
            }
        }
    }

    /// Convert to RGB bytes (for display or saving).
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for color in &self.pixels {
            bytes.extend_from_slice(&color_to_rgb8(*color));
        }
        bytes
    }
}

fn check_resolution(width: u32, height: u32) -> Result<(), RenderError> {
    if width == 0 || height == 0 {
        return Err(RenderError::InvalidResolution { width, height });
    }
    Ok(())
}

/// Render the entire scene to an image buffer on the calling thread.
pub fn render(
    scene: &Scene,
    settings: &RenderSettings,
    width: u32,
    height: u32,
) -> Result<ImageBuffer, RenderError> {
    check_resolution(width, height)?;
    let camera = Camera::new(scene.camera(), width, height)?;
    let start = Instant::now();

    log::info!(
        "Rendering '{}' at {}x{} (max depth {}, single-threaded)",
        scene.name,
        width,
        height,
        settings.max_depth
    );

    let mut image = ImageBuffer::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let color = render_pixel(&camera, scene, x, y, settings)?;
            image.set(x, y, color);
        }
    }

    log::info!("Rendered {} pixels in {:?}", image.pixels.len(), start.elapsed());
    Ok(image)
}

/// Render the scene in parallel using the default bucket size.
pub fn render_parallel(
    scene: &Scene,
    settings: &RenderSettings,
    width: u32,
    height: u32,
) -> Result<ImageBuffer, RenderError> {
    render_parallel_with_buckets(scene, settings, width, height, DEFAULT_BUCKET_SIZE)
}

/// Render the scene in parallel, one rayon task per bucket.
///
/// Each bucket owns a disjoint block of pixels, so the workers share only
/// the read-only scene. Results are copied into the framebuffer afterwards.
pub fn render_parallel_with_buckets(
    scene: &Scene,
    settings: &RenderSettings,
    width: u32,
    height: u32,
    bucket_size: u32,
) -> Result<ImageBuffer, RenderError> {
    check_resolution(width, height)?;
    let camera = Camera::new(scene.camera(), width, height)?;
    let buckets = generate_buckets(width, height, bucket_size.max(1));
    let start = Instant::now();

    log::info!(
        "Rendering '{}' at {}x{} (max depth {}, {} buckets on {} threads)",
        scene.name,
        width,
        height,
        settings.max_depth,
        buckets.len(),
        rayon::current_num_threads()
    );

    let results = buckets
        .par_iter()
        .map(|bucket| {
            let pixels = render_bucket(bucket, &camera, scene, settings)?;
            log::debug!(
                "Bucket {} at ({}, {}) done, {} pixels",
                bucket.index,
                bucket.x,
                bucket.y,
                bucket.pixel_count()
            );
            Ok(BucketResult::new(*bucket, pixels))
        })
        .collect::<Result<Vec<_>, DegenerateVectorError>>()?;

    let mut image = ImageBuffer::new(width, height);
    for result in &results {
        image.write_bucket(result);
    }

    log::info!("Rendered {} pixels in {:?}", image.pixels.len(), start.elapsed());
    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{any_hit_within, find_closest};
    use crate::shading::SHADOW_EPSILON;
    use glint_core::presets::four_spheres;
    use glint_core::{CameraSettings, Light, Material, Primitive, Shape};
    use glint_math::{Ray, Vector3, VectorExt};

    #[test]
    fn test_color_to_rgb8_clamps() {
        assert_eq!(color_to_rgb8(Color::ZERO), [0, 0, 0]);
        assert_eq!(color_to_rgb8(Color::ONE), [255, 255, 255]);
        assert_eq!(color_to_rgb8(Color::new(2.0, -1.0, 0.5)), [255, 0, 127]);
    }

    #[test]
    fn test_image_buffer_get_set() {
        let mut image = ImageBuffer::new(3, 2);
        image.set(2, 1, Color::ONE);

        assert_eq!(image.get(2, 1), Color::ONE);
        assert_eq!(image.get(0, 0), Color::ZERO);
        assert_eq!(image.pixels[5], Color::ONE);
        assert_eq!(image.to_rgb8().len(), 3 * 2 * 3);
    }

    #[test]
    fn test_zero_resolution_rejected() {
        let file = four_spheres().unwrap();
        let result = render(&file.scene, &file.settings, 0, 10);
        assert!(matches!(result, Err(RenderError::InvalidResolution { width: 0, height: 10 })));
    }

    /// Phong color of a point on the red sphere, written out from the
    /// lighting equation: ambient only when the light is blocked, otherwise
    /// ambient + diffuse + specular.
    fn expected_red_local(scene: &Scene, ray: &Ray, t: f64) -> Color {
        let red = &scene.primitives()[0];
        let Shape::Sphere(sphere) = red.shape() else {
            panic!("red primitive is a sphere");
        };
        let material = red.material();
        let light = scene.light();

        let point = ray.at(t);
        let normal = (point - sphere.center()) / sphere.radius();
        let offset = point + normal * SHADOW_EPSILON;
        let ambient = material.ambient * light.ambient;

        let shadow_ray = Ray::towards(offset, light.position).unwrap();
        if any_hit_within(scene, &shadow_ray, (light.position - offset).length()) {
            return ambient;
        }

        let to_light = (light.position - point).normalized().unwrap();
        let n_dot_l = normal.dot(to_light);
        if n_dot_l <= 0.0 {
            return ambient;
        }
        let r_dot_v = (-to_light).reflect(normal).dot(-ray.direction()).max(0.0);
        ambient
            + material.diffuse * light.diffuse * n_dot_l
            + material.specular * light.specular * r_dot_v.powf(material.shininess)
    }

    #[test]
    fn test_four_spheres_end_to_end() {
        let file = four_spheres().unwrap();
        let (width, height) = (40, 30);
        let image = render(&file.scene, &file.settings, width, height).unwrap();
        let camera = Camera::new(file.scene.camera(), width, height).unwrap();
        assert_eq!(image.pixels.len(), 40 * 30);

        // Every red sphere pixel is 0.8 * local + 0.2 * one reflected bounce
        let mut red_pixels = 0;
        let mut lit_pixels = 0;
        for y in 0..height {
            for x in 0..width {
                let ray = camera.primary_ray(x, y).unwrap();
                let Some(hit) = find_closest(&file.scene, &ray) else {
                    continue;
                };
                if hit.primitive.name != "red" {
                    continue;
                }

                let local = expected_red_local(&file.scene, &ray, hit.t);
                let point = ray.at(hit.t);
                let normal = (point - Vector3::new(0.0, 0.0, -3.0)) / 1.0;
                let bounce =
                    Ray::new(point + normal * SHADOW_EPSILON, ray.direction().reflect(normal))
                        .unwrap();
                let reflected = trace(&bounce, &file.scene, &file.settings, 0).unwrap();
                let expected = local * 0.8 + reflected * 0.2;

                let actual = image.get(x, y);
                assert!(
                    (actual - expected).length() < 1e-9,
                    "({x}, {y}): {actual:?} vs {expected:?}"
                );

                red_pixels += 1;
                if local.x > 0.2 {
                    lit_pixels += 1;
                }
            }
        }
        assert!(red_pixels > 100, "{red_pixels}");
        assert!(lit_pixels > 0);

        // The center pixel sees the red sphere
        let center = image.get(20, 15);
        assert!(center.x > center.y, "{:?}", center);
        assert!(center.x > center.z, "{:?}", center);

        // Top corners look over every sphere into empty space
        assert_eq!(image.get(0, 0), file.settings.background);
        assert_eq!(image.get(39, 0), file.settings.background);
    }

    #[test]
    fn test_empty_scene_is_background() {
        let scene = Scene::builder("empty")
            .with_light(Light::white(Vector3::Y))
            .with_camera(CameraSettings::new(Vector3::ZERO))
            .build()
            .unwrap();
        let settings = RenderSettings {
            background: Color::new(0.1, 0.2, 0.3),
            ..Default::default()
        };

        let image = render(&scene, &settings, 8, 6).unwrap();
        assert!(image.pixels.iter().all(|c| *c == Color::new(0.1, 0.2, 0.3)));
    }

    #[test]
    fn test_parallel_matches_single_threaded() {
        let file = four_spheres().unwrap();
        let reference = render(&file.scene, &file.settings, 50, 37).unwrap();

        // Odd sizes force partial buckets at the right and bottom edges
        for bucket_size in [1, 7, 16, 64] {
            let parallel =
                render_parallel_with_buckets(&file.scene, &file.settings, 50, 37, bucket_size)
                    .unwrap();
            assert_eq!(parallel, reference, "bucket size {}", bucket_size);
        }
    }

    #[test]
    fn test_single_sphere_silhouette() {
        let material = Material::from_color(Color::ONE);
        let ball = Primitive::sphere("ball", Vector3::new(0.0, 0.0, -5.0), 1.0, material).unwrap();
        let scene = Scene::builder("silhouette")
            .with_primitive(ball)
            .with_light(Light::white(Vector3::new(0.0, 0.0, 5.0)))
            .with_camera(CameraSettings::new(Vector3::ZERO))
            .build()
            .unwrap();

        let image = render(&scene, &RenderSettings::default(), 21, 21).unwrap();

        assert!(image.get(10, 10).x > 0.5);
        assert_eq!(image.get(0, 10), Color::ZERO);
        assert_eq!(image.get(10, 0), Color::ZERO);
    }

    #[test]
    fn test_scene_file_matches_preset() {
        let preset = four_spheres().unwrap();
        let json = include_str!("../../../scenes/four_spheres.json");
        let file = glint_core::parse_scene_description(json).unwrap();

        let from_preset = render(&preset.scene, &preset.settings, 32, 24).unwrap();
        let from_file = render(&file.scene, &file.settings, 32, 24).unwrap();
        assert_eq!(from_file, from_preset);
    }
}

//! Camera for primary ray generation.

use glint_core::CameraSettings;
use glint_math::{DegenerateVectorError, Ray, Vector3};

/// Pinhole camera bound to an image resolution.
///
/// Pixel `(x, y)` maps to normalized screen coordinates `u, v` in [-1, 1]
/// (sampled at pixel centers, `v = 1` on the top row), which are placed on a
/// screen plane `screen_distance` in front of the eye.
#[derive(Debug, Clone)]
pub struct Camera {
    // Image settings
    pub image_width: u32,
    pub image_height: u32,

    center: Vector3,
    screen_center: Vector3,
    // Screen axes scaled to the half extents of the screen
    half_u: Vector3,
    half_v: Vector3,
}

impl Camera {
    /// Create a camera for the given settings and resolution.
    pub fn new(
        settings: &CameraSettings,
        width: u32,
        height: u32,
    ) -> Result<Self, DegenerateVectorError> {
        let (u, v, w) = settings.basis()?;

        let aspect = if settings.aspect_correct && height > 0 {
            width as f64 / height as f64
        } else {
            1.0
        };

        Ok(Self {
            image_width: width,
            image_height: height,
            center: settings.position,
            screen_center: settings.position - w * settings.screen_distance,
            half_u: u * aspect,
            half_v: v,
        })
    }

    /// Normalized screen coordinates of the center of pixel (x, y).
    pub fn screen_coords(&self, x: u32, y: u32) -> (f64, f64) {
        let u = 2.0 * (x as f64 + 0.5) / self.image_width as f64 - 1.0;
        let v = 1.0 - 2.0 * (y as f64 + 0.5) / self.image_height as f64;
        (u, v)
    }

    /// Generate the primary ray through pixel (x, y).
    pub fn primary_ray(&self, x: u32, y: u32) -> Result<Ray, DegenerateVectorError> {
        let (u, v) = self.screen_coords(x, y);
        let screen_point = self.screen_center + self.half_u * u + self.half_v * v;
        Ray::towards(self.center, screen_point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_coords() {
        let camera = Camera::new(&CameraSettings::new(Vector3::ZERO), 4, 2).unwrap();

        assert_eq!(camera.screen_coords(0, 0), (-0.75, 0.5));
        assert_eq!(camera.screen_coords(3, 1), (0.75, -0.5));
    }

    #[test]
    fn test_primary_ray_points_down_negative_z() {
        let settings = CameraSettings::new(Vector3::new(0.0, 0.0, 1.0));
        let camera = Camera::new(&settings, 101, 101).unwrap();
        let ray = camera.primary_ray(50, 50).unwrap();

        // Center pixel looks straight ahead
        assert_eq!(ray.origin(), Vector3::new(0.0, 0.0, 1.0));
        assert!((ray.direction() - Vector3::new(0.0, 0.0, -1.0)).length() < 1e-12);
    }

    #[test]
    fn test_top_left_ray_goes_up_and_left() {
        let camera = Camera::new(&CameraSettings::new(Vector3::ZERO), 40, 30).unwrap();
        let ray = camera.primary_ray(0, 0).unwrap();

        assert!(ray.direction().x < 0.0);
        assert!(ray.direction().y > 0.0);
        assert!(ray.direction().z < 0.0);
    }

    #[test]
    fn test_aspect_correction() {
        let settings = CameraSettings::new(Vector3::ZERO);
        let wide = Camera::new(&settings, 200, 100).unwrap();
        let square = Camera::new(&settings.with_aspect_correct(false), 200, 100).unwrap();

        // Right edge pixel: screen x of 2 * 0.995 vs 0.995 at distance 2
        let wide_dir = wide.primary_ray(199, 50).unwrap().direction();
        let square_dir = square.primary_ray(199, 50).unwrap().direction();
        let wide_slope = wide_dir.x / -wide_dir.z;
        let square_slope = square_dir.x / -square_dir.z;

        assert!((wide_slope - 2.0 * square_slope).abs() < 1e-12);
    }

    #[test]
    fn test_look_at_camera() {
        let settings = CameraSettings::new(Vector3::new(5.0, 0.0, 0.0)).with_look_at(Vector3::ZERO);
        let camera = Camera::new(&settings, 11, 11).unwrap();
        let ray = camera.primary_ray(5, 5).unwrap();

        assert!((ray.direction() + Vector3::X).length() < 1e-12);
    }

    #[test]
    fn test_degenerate_settings_rejected() {
        // Looking straight along the up vector leaves no horizontal axis
        let settings = CameraSettings::new(Vector3::ZERO).with_look_at(Vector3::Y);
        assert!(Camera::new(&settings, 4, 4).is_err());
    }
}

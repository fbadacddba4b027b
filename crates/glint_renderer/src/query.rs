//! Nearest-hit and occlusion queries over a whole scene.

use glint_core::{Primitive, Scene};
use glint_math::{Interval, Ray};

use crate::hittable::Hittable;

/// Record of a ray hitting a primitive.
#[derive(Debug, Clone, Copy)]
pub struct Hit<'a> {
    /// The primitive that was hit
    pub primitive: &'a Primitive,
    /// Distance along the ray, always > 0
    pub t: f64,
}

/// Find the nearest primitive in front of the ray origin.
///
/// On exactly equal distances the primitive listed first wins.
pub fn find_closest<'a>(scene: &'a Scene, ray: &Ray) -> Option<Hit<'a>> {
    let mut closest: Option<Hit<'a>> = None;
    let mut closest_so_far = f64::INFINITY;

    for primitive in scene.primitives() {
        let ray_t = Interval::POSITIVE.with_max(closest_so_far);
        if let Some(t) = primitive.shape().intersect(ray) {
            if ray_t.surrounds(t) {
                closest_so_far = t;
                closest = Some(Hit { primitive, t });
            }
        }
    }

    closest
}

/// Check if anything blocks the ray strictly before distance `max_t`.
pub fn any_hit_within(scene: &Scene, ray: &Ray, max_t: f64) -> bool {
    let ray_t = Interval::POSITIVE.with_max(max_t);
    scene
        .primitives()
        .iter()
        .any(|primitive| primitive.shape().intersect(ray).is_some_and(|t| ray_t.surrounds(t)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_core::{CameraSettings, Light, Material};
    use glint_math::Vector3;

    fn scene(primitives: Vec<Primitive>) -> Scene {
        Scene::builder("query")
            .with_primitives(primitives)
            .with_light(Light::white(Vector3::new(0.0, 10.0, 0.0)))
            .with_camera(CameraSettings::new(Vector3::ZERO))
            .build()
            .unwrap()
    }

    fn sphere(name: &str, z: f64) -> Primitive {
        Primitive::sphere(name, Vector3::new(0.0, 0.0, z), 1.0, Material::default()).unwrap()
    }

    #[test]
    fn test_find_closest_picks_nearest() {
        let scene = scene(vec![sphere("far", -10.0), sphere("near", -4.0), sphere("mid", -7.0)]);
        let ray = Ray::new(Vector3::ZERO, -Vector3::Z).unwrap();

        let hit = find_closest(&scene, &ray).unwrap();
        assert_eq!(hit.primitive.name, "near");
        assert!((hit.t - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_find_closest_miss() {
        let scene = scene(vec![sphere("ball", -5.0)]);
        let ray = Ray::new(Vector3::ZERO, Vector3::X).unwrap();

        assert!(find_closest(&scene, &ray).is_none());
    }

    #[test]
    fn test_find_closest_tie_keeps_first() {
        let scene = scene(vec![sphere("first", -5.0), sphere("second", -5.0)]);
        let ray = Ray::new(Vector3::ZERO, -Vector3::Z).unwrap();

        assert_eq!(find_closest(&scene, &ray).unwrap().primitive.name, "first");
    }

    #[test]
    fn test_find_closest_mixes_shapes() {
        let point = Vector3::new(0.0, 0.0, -2.0);
        let wall = Primitive::plane("wall", point, Vector3::Z, Material::default()).unwrap();
        let scene = scene(vec![sphere("ball", -5.0), wall]);
        let ray = Ray::new(Vector3::ZERO, -Vector3::Z).unwrap();

        let hit = find_closest(&scene, &ray).unwrap();
        assert_eq!(hit.primitive.name, "wall");
        assert!((hit.t - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_any_hit_within() {
        let scene = scene(vec![sphere("ball", -5.0)]);
        let ray = Ray::new(Vector3::ZERO, -Vector3::Z).unwrap();

        // Surface at t = 4
        assert!(any_hit_within(&scene, &ray, 10.0));
        assert!(!any_hit_within(&scene, &ray, 3.5));
        assert!(!any_hit_within(&scene, &ray, 4.0));
    }
}

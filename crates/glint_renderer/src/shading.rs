//! Local illumination: ambient, diffuse and specular Phong terms with a
//! hard shadow test, plus mirror reflection through the tracer.

use glint_core::{Color, Light, Material, RenderSettings, Scene, ShadowPolicy};
use glint_math::{DegenerateVectorError, Ray, Vector3, VectorExt, EPSILON};

use crate::hittable::Hittable;
use crate::query::{any_hit_within, Hit};
use crate::tracer::trace;

/// Distance secondary rays are pushed off the surface along the normal.
pub const SHADOW_EPSILON: f64 = 1e-5;

/// Geometry at a ray hit.
#[derive(Debug, Clone, Copy)]
pub struct SurfaceInteraction {
    /// Point of intersection
    pub point: Vector3,
    /// Unit normal, always facing against the incoming ray
    pub normal: Vector3,
    /// `point` nudged along `normal`, origin for shadow and reflection rays
    pub offset_point: Vector3,
}

impl SurfaceInteraction {
    pub fn new(hit: &Hit<'_>, ray: &Ray) -> Self {
        let point = ray.at(hit.t);
        let outward_normal = hit.primitive.shape().normal_at(point);

        // If the ray and normal point in the same direction, we're inside
        let normal = if ray.direction().dot(outward_normal) < 0.0 {
            outward_normal
        } else {
            -outward_normal
        };

        Self {
            point,
            normal,
            offset_point: point + normal * SHADOW_EPSILON,
        }
    }
}

/// Check if the light is blocked as seen from the surface.
fn in_shadow(
    surface: &SurfaceInteraction,
    light: &Light,
    scene: &Scene,
) -> Result<bool, DegenerateVectorError> {
    let to_light = light.position - surface.offset_point;
    let distance = to_light.length();
    if distance < EPSILON {
        // The light sits on the surface; nothing can be in between
        return Ok(false);
    }

    let shadow_ray = Ray::new(surface.offset_point, to_light)?;
    Ok(any_hit_within(scene, &shadow_ray, distance))
}

fn ambient_term(material: &Material, light: &Light) -> Color {
    material.ambient * light.ambient
}

/// Phong local color for an unoccluded point.
fn phong(surface: &SurfaceInteraction, material: &Material, light: &Light, ray: &Ray) -> Color {
    let mut color = ambient_term(material, light);

    // A light exactly on the surface has no direction; keep ambient only
    let Ok(to_light) = (light.position - surface.point).normalized() else {
        return color;
    };

    let n_dot_l = surface.normal.dot(to_light);
    if n_dot_l > 0.0 {
        color += material.diffuse * light.diffuse * n_dot_l;

        let reflected = (-to_light).reflect(surface.normal);
        let to_camera = -ray.direction();
        let r_dot_v = reflected.dot(to_camera).max(0.0);
        color += material.specular * light.specular * r_dot_v.powf(material.shininess);
    }

    color
}

/// Compute the color of a hit, recursing into reflections while `depth`
/// bounces remain.
pub fn shade(
    hit: &Hit<'_>,
    ray: &Ray,
    scene: &Scene,
    settings: &RenderSettings,
    depth: u32,
) -> Result<Color, DegenerateVectorError> {
    let surface = SurfaceInteraction::new(hit, ray);
    let material = hit.primitive.material();
    let light = scene.light();

    let local = if in_shadow(&surface, light, scene)? {
        match settings.shadows {
            ShadowPolicy::Black => return Ok(Color::ZERO),
            ShadowPolicy::AmbientOnly => ambient_term(material, light),
        }
    } else {
        phong(&surface, material, light, ray)
    };

    match material.reflection {
        Some(k) if k > 0.0 && depth > 0 => {
            let direction = ray.direction().reflect(surface.normal);
            let reflected_ray = Ray::new(surface.offset_point, direction)?;
            let reflected = trace(&reflected_ray, scene, settings, depth - 1)?;
            Ok(settings.reflection_blend.blend(local, reflected, k))
        }
        _ => Ok(local),
    }
}

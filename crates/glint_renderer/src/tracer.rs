//! Recursive Whitted tracer.

use glint_core::{Color, RenderSettings, Scene};
use glint_math::{DegenerateVectorError, Ray};

use crate::query::find_closest;
use crate::shading::shade;

/// Compute the color seen along a ray.
///
/// `depth` is the number of reflection bounces still allowed. At zero the
/// hit is shaded locally and no reflection is added, so the recursion always
/// terminates after at most `depth` extra calls.
pub fn trace(
    ray: &Ray,
    scene: &Scene,
    settings: &RenderSettings,
    depth: u32,
) -> Result<Color, DegenerateVectorError> {
    match find_closest(scene, ray) {
        Some(hit) => shade(&hit, ray, scene, settings, depth),
        None => Ok(settings.background),
    }
}

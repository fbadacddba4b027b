//! Closed-form ray/primitive intersection.

use glint_core::{Plane, Shape, Sphere};
use glint_math::{Interval, Ray, Vector3};

/// Rays whose direction is this close to perpendicular with a plane
/// normal are treated as parallel to the plane.
pub const PARALLEL_EPSILON: f64 = 1e-6;

/// Trait for shapes that can be hit by rays.
pub trait Hittable {
    /// Distance `t > 0` along the ray to the hit point, if any.
    fn intersect(&self, ray: &Ray) -> Option<f64>;

    /// Outward unit normal at a point on the surface.
    fn normal_at(&self, point: Vector3) -> Vector3;
}

impl Hittable for Sphere {
    /// Solves `a t^2 + b t + c = 0` for the ray substituted into the sphere
    /// equation. The nearer root wins when it lies in front of the origin.
    /// An origin inside the sphere hits the far (exit) root instead.
    fn intersect(&self, ray: &Ray) -> Option<f64> {
        let oc = ray.origin() - self.center();
        let a = ray.direction().dot(ray.direction());
        let b = 2.0 * oc.dot(ray.direction());
        let c = oc.dot(oc) - self.radius() * self.radius();

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();
        let near = (-b - sqrtd) / (2.0 * a);
        let far = (-b + sqrtd) / (2.0 * a);

        [near, far]
            .into_iter()
            .find(|&t| Interval::POSITIVE.surrounds(t))
    }

    fn normal_at(&self, point: Vector3) -> Vector3 {
        // Surface points sit exactly one radius from the center
        (point - self.center()) / self.radius()
    }
}

impl Hittable for Plane {
    fn intersect(&self, ray: &Ray) -> Option<f64> {
        let denom = ray.direction().dot(self.normal());
        if denom.abs() <= PARALLEL_EPSILON {
            return None;
        }

        let t = (self.point() - ray.origin()).dot(self.normal()) / denom;
        Interval::POSITIVE.surrounds(t).then_some(t)
    }

    fn normal_at(&self, _point: Vector3) -> Vector3 {
        self.normal()
    }
}

impl Hittable for Shape {
    fn intersect(&self, ray: &Ray) -> Option<f64> {
        match self {
            Shape::Sphere(sphere) => sphere.intersect(ray),
            Shape::Plane(plane) => plane.intersect(ray),
        }
    }

    fn normal_at(&self, point: Vector3) -> Vector3 {
        match self {
            Shape::Sphere(sphere) => sphere.normal_at(point),
            Shape::Plane(plane) => plane.normal_at(point),
        }
    }
}

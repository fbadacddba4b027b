use crate::{DegenerateVectorError, Vector3, VectorExt};

/// A ray in 3D space with an origin and a unit-length direction.
///
/// Rays are created fresh for every primary cast, shadow probe and
/// reflection bounce. The direction is normalized once in [`Ray::new`],
/// so intersection code may rely on `dot(direction, direction) == 1`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    origin: Vector3,
    direction: Vector3,
}

impl Ray {
    /// Create a new ray, normalizing `direction`.
    pub fn new(origin: Vector3, direction: Vector3) -> Result<Self, DegenerateVectorError> {
        Ok(Self {
            origin,
            direction: direction.normalized()?,
        })
    }

    /// Create a ray from `origin` towards `target`.
    pub fn towards(origin: Vector3, target: Vector3) -> Result<Self, DegenerateVectorError> {
        Self::new(origin, target - origin)
    }

    /// Get the origin point of the ray.
    #[inline]
    pub fn origin(&self) -> Vector3 {
        self.origin
    }

    /// Get the unit direction of the ray.
    #[inline]
    pub fn direction(&self) -> Vector3 {
        self.direction
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    #[inline]
    pub fn at(&self, t: f64) -> Vector3 {
        self.origin + self.direction * t
    }
}

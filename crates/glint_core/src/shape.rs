//! Implicit geometric primitives.
//!
//! Shapes are plain validated data. Intersection lives in the renderer,
//! which dispatches on [`Shape`] by pattern matching.

use glint_math::{Vector3, VectorExt};

use crate::scene::{ensure_finite, SceneError};

/// A sphere given by center and radius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sphere {
    center: Vector3,
    radius: f64,
}

impl Sphere {
    /// Create a new sphere. The radius must be positive and finite.
    pub fn new(center: Vector3, radius: f64) -> Result<Self, SceneError> {
        ensure_finite("sphere.center", center)?;
        if !radius.is_finite() || radius <= 0.0 {
            return Err(SceneError::InvalidRadius(radius));
        }
        Ok(Self { center, radius })
    }

    pub fn center(&self) -> Vector3 {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

/// An infinite plane through `point` with unit `normal`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plane {
    point: Vector3,
    normal: Vector3,
}

impl Plane {
    /// Create a new plane. The normal is normalized here.
    pub fn new(point: Vector3, normal: Vector3) -> Result<Self, SceneError> {
        ensure_finite("plane.point", point)?;
        let normal = normal
            .normalized()
            .map_err(|source| SceneError::DegenerateNormal { source })?;
        Ok(Self { point, normal })
    }

    pub fn point(&self) -> Vector3 {
        self.point
    }

    /// Unit-length plane normal.
    pub fn normal(&self) -> Vector3 {
        self.normal
    }
}

/// The closed set of primitive shapes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    Sphere(Sphere),
    Plane(Plane),
}

impl Shape {
    /// Short kind name used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Sphere(_) => "sphere",
            Shape::Plane(_) => "plane",
        }
    }
}

impl From<Sphere> for Shape {
    fn from(sphere: Sphere) -> Self {
        Shape::Sphere(sphere)
    }
}

impl From<Plane> for Shape {
    fn from(plane: Plane) -> Self {
        Shape::Plane(plane)
    }
}

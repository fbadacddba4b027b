//! Vector helpers on top of glam.
//!
//! Points, directions and RGB colors all share [`Vector3`]. Addition,
//! subtraction, scaling and dot products are glam's operators; this module
//! adds the two operations the tracer needs with stricter contracts.

use glam::DVec3;
use thiserror::Error;

/// Double precision 3D vector used for points, directions and colors.
pub type Vector3 = DVec3;

/// Smallest magnitude a vector may have and still be normalized.
pub const EPSILON: f64 = 1e-9;

/// Raised when normalizing a vector whose length is (close to) zero.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("cannot normalize degenerate vector ({x}, {y}, {z})")]
pub struct DegenerateVectorError {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl From<Vector3> for DegenerateVectorError {
    fn from(v: Vector3) -> Self {
        Self {
            x: v.x,
            y: v.y,
            z: v.z,
        }
    }
}

/// Extra vector operations used by the ray tracer.
pub trait VectorExt: Sized {
    /// Divide by the Euclidean length.
    ///
    /// Fails instead of producing NaN when the length is below [`EPSILON`].
    fn normalized(self) -> Result<Self, DegenerateVectorError>;

    /// Mirror this vector about `normal`: `v - 2 * dot(v, n) * n`.
    ///
    /// `normal` must be unit length.
    fn reflect(self, normal: Self) -> Self;
}

impl VectorExt for Vector3 {
    fn normalized(self) -> Result<Self, DegenerateVectorError> {
        let length = self.length();
        if !length.is_finite() || length < EPSILON {
            return Err(self.into());
        }
        Ok(self / length)
    }

    #[inline]
    fn reflect(self, normal: Self) -> Self {
        self - normal * (2.0 * self.dot(normal))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized_has_unit_length() {
        let samples = [
            Vector3::new(3.0, 4.0, 0.0),
            Vector3::new(-0.001, 0.002, 0.0005),
            Vector3::new(1e6, -2e6, 3e6),
            Vector3::Z,
        ];

        for v in samples {
            let n = v.normalized().unwrap();
            assert!((n.length() - 1.0).abs() < 1e-12, "{:?} -> {:?}", v, n);
        }
    }

    #[test]
    fn test_normalized_zero_fails() {
        let err = Vector3::ZERO.normalized().unwrap_err();
        assert_eq!(err, DegenerateVectorError { x: 0.0, y: 0.0, z: 0.0 });

        assert!(Vector3::splat(1e-12).normalized().is_err());
        assert!(Vector3::new(f64::NAN, 0.0, 0.0).normalized().is_err());
    }

    #[test]
    fn test_reflect_preserves_magnitude() {
        let normal = Vector3::new(1.0, 1.0, 0.0).normalized().unwrap();
        let v = Vector3::new(2.0, -3.0, 5.0);
        let r = v.reflect(normal);

        assert!((r.length() - v.length()).abs() < 1e-12);
    }

    #[test]
    fn test_reflect_flips_normal_component() {
        // Ray heading down onto a floor bounces straight back up
        let r = Vector3::new(1.0, -1.0, 0.0).reflect(Vector3::Y);
        assert_eq!(r, Vector3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn test_error_message() {
        let err: DegenerateVectorError = Vector3::ZERO.into();
        assert!(err.to_string().contains("degenerate"));
    }
}

//! Camera placement.
//!
//! The renderer turns these settings into a per-resolution pinhole camera.
//! The default looks straight down -Z with +Y up, viewing a screen plane two
//! units in front of the eye whose height spans [-1, 1].

use glint_math::{DegenerateVectorError, Vector3, VectorExt};

use crate::scene::{ensure_finite, SceneError};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraSettings {
    pub position: Vector3,
    pub look_at: Vector3,
    pub up: Vector3,
    /// Distance from the eye to the virtual screen plane
    pub screen_distance: f64,
    /// Stretch the horizontal screen extent by width / height
    pub aspect_correct: bool,
}

/// Distance used when none is given.
pub const DEFAULT_SCREEN_DISTANCE: f64 = 2.0;

impl CameraSettings {
    /// Create default camera settings at `position`.
    pub fn new(position: Vector3) -> Self {
        Self {
            position,
            look_at: position - Vector3::Z,
            up: Vector3::Y,
            screen_distance: DEFAULT_SCREEN_DISTANCE,
            aspect_correct: true,
        }
    }

    /// Set the point the camera looks at.
    pub fn with_look_at(mut self, look_at: Vector3) -> Self {
        self.look_at = look_at;
        self
    }

    /// Set the up vector.
    pub fn with_up(mut self, up: Vector3) -> Self {
        self.up = up;
        self
    }

    /// Set the eye to screen distance.
    pub fn with_screen_distance(mut self, distance: f64) -> Self {
        self.screen_distance = distance;
        self
    }

    /// Enable or disable aspect ratio correction.
    pub fn with_aspect_correct(mut self, aspect_correct: bool) -> Self {
        self.aspect_correct = aspect_correct;
        self
    }

    /// Orthonormal camera basis `(u, v, w)`.
    ///
    /// `w` points backwards (from the target to the eye), `u` to the right
    /// and `v` up, matching a right-handed frame.
    pub fn basis(&self) -> Result<(Vector3, Vector3, Vector3), DegenerateVectorError> {
        let w = (self.position - self.look_at).normalized()?;
        let u = self.up.cross(w).normalized()?;
        let v = w.cross(u);
        Ok((u, v, w))
    }

    pub fn validate(&self) -> Result<(), SceneError> {
        ensure_finite("camera.position", self.position)?;
        ensure_finite("camera.look_at", self.look_at)?;
        ensure_finite("camera.up", self.up)?;
        if !self.screen_distance.is_finite() || self.screen_distance <= 0.0 {
            return Err(SceneError::InvalidScreenDistance(self.screen_distance));
        }
        self.basis()
            .map(|_| ())
            .map_err(|source| SceneError::DegenerateCamera { source })
    }
}

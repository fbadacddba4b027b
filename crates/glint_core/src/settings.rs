//! Render settings.

use serde::Deserialize;

use crate::material::Color;

/// Hard cap on the reflection depth accepted from scene files.
pub const MAX_DEPTH_LIMIT: u32 = 64;

/// What a point blocked from the light contributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShadowPolicy {
    /// Shadowed points are pure black, reflection included
    Black,
    /// Shadowed points keep the ambient term and still reflect
    #[default]
    AmbientOnly,
}

/// How a reflected color is combined with the local color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReflectionBlend {
    /// `local * (1 - k) + reflected * k`
    #[default]
    Mix,
    /// `local + reflected * k`
    Additive,
}

impl ReflectionBlend {
    /// Combine `local` and `reflected` with reflection weight `k`.
    pub fn blend(self, local: Color, reflected: Color, k: f64) -> Color {
        match self {
            ReflectionBlend::Mix => local * (1.0 - k) + reflected * k,
            ReflectionBlend::Additive => local + reflected * k,
        }
    }
}

/// Render configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderSettings {
    /// Remaining reflection bounces for a primary ray
    pub max_depth: u32,
    /// Background color when ray doesn't hit anything
    pub background: Color,
    pub shadows: ShadowPolicy,
    pub reflection_blend: ReflectionBlend,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            max_depth: 3,
            background: Color::ZERO,
            shadows: ShadowPolicy::default(),
            reflection_blend: ReflectionBlend::default(),
        }
    }
}

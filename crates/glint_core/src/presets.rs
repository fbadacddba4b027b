//! Built-in scenes.

use glint_math::Vector3;

use crate::camera::CameraSettings;
use crate::description::SceneFile;
use crate::light::Light;
use crate::material::{Color, Material};
use crate::scene::{Primitive, Scene, SceneError};
use crate::settings::RenderSettings;

/// Scenes that can be rendered without a scene file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// Red, green and blue spheres resting on a huge yellow floor sphere
    FourSpheres,
    /// Two facing mirrors with a sphere between them
    MirrorCorridor,
}

impl Preset {
    pub const ALL: [Preset; 2] = [Preset::FourSpheres, Preset::MirrorCorridor];

    pub fn name(self) -> &'static str {
        match self {
            Preset::FourSpheres => "four_spheres",
            Preset::MirrorCorridor => "mirror_corridor",
        }
    }

    /// Look up a preset by name, accepting `-` in place of `_`.
    pub fn from_name(name: &str) -> Option<Self> {
        let normalized = name.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL.into_iter().find(|p| p.name() == normalized)
    }

    pub fn build(self) -> Result<SceneFile, SceneError> {
        match self {
            Preset::FourSpheres => four_spheres(),
            Preset::MirrorCorridor => mirror_corridor(),
        }
    }
}

/// The classic demo: three colored spheres and a yellow floor, lit from
/// behind and above, seen from (0, 0, 1). Every sphere reflects 20%.
pub fn four_spheres() -> Result<SceneFile, SceneError> {
    let sphere = |name: &str, center: Vector3, radius: f64, color: Color| {
        Primitive::sphere(
            name,
            center,
            radius,
            Material::from_color(color).with_shininess(100.0).with_reflection(0.2),
        )
    };

    let red = sphere("red", Vector3::new(0.0, 0.0, -3.0), 1.0, Color::X)?;
    let green = sphere("green", Vector3::new(2.0, 0.0, -4.0), 1.0, Color::Y)?;
    let blue = sphere("blue", Vector3::new(-2.0, 0.0, -4.0), 1.0, Color::Z)?;
    let floor = sphere(
        "floor",
        Vector3::new(0.0, -1001.0, -3.0),
        1000.0,
        Color::new(1.0, 1.0, 0.0),
    )?;

    let scene = Scene::builder(Preset::FourSpheres.name())
        .with_primitives([red, green, blue, floor])
        .with_light(Light::white(Vector3::new(5.0, 5.0, -10.0)))
        .with_camera(CameraSettings::new(Vector3::new(0.0, 0.0, 1.0)))
        .build()?;

    Ok(SceneFile {
        width: 400,
        height: 300,
        settings: RenderSettings {
            max_depth: 1,
            ..Default::default()
        },
        scene,
    })
}

/// Two parallel mirrors facing each other along z, a floor and a sphere.
pub fn mirror_corridor() -> Result<SceneFile, SceneError> {
    let mirror = Material {
        ambient: Color::splat(0.02),
        diffuse: Color::splat(0.1),
        specular: Color::splat(0.5),
        shininess: 200.0,
        reflection: Some(0.85),
    };
    let floor = Material {
        specular: Color::ZERO,
        ..Material::from_color(Color::new(0.6, 0.6, 0.6))
    };
    let ball = Material::from_color(Color::new(0.9, 0.3, 0.1)).with_shininess(60.0);

    let back = Primitive::plane("back_mirror", Vector3::new(0.0, 0.0, -3.0), Vector3::Z, mirror)?;
    let front = Primitive::plane("front_mirror", Vector3::new(0.0, 0.0, 3.0), -Vector3::Z, mirror)?;
    let floor = Primitive::plane("floor", Vector3::new(0.0, -1.0, 0.0), Vector3::Y, floor)?;
    let ball = Primitive::sphere("ball", Vector3::new(0.0, 0.0, -1.0), 1.0, ball)?;
    let camera = CameraSettings::new(Vector3::new(0.6, 0.8, 2.5))
        .with_look_at(Vector3::new(0.0, 0.0, -3.0));

    let scene = Scene::builder(Preset::MirrorCorridor.name())
        .with_primitives([back, front, floor, ball])
        .with_light(Light::white(Vector3::new(1.0, 3.0, 0.5)))
        .with_camera(camera)
        .build()?;

    Ok(SceneFile {
        width: 320,
        height: 240,
        settings: RenderSettings {
            max_depth: 6,
            ..Default::default()
        },
        scene,
    })
}

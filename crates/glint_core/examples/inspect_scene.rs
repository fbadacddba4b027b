//! Example: Load and inspect a scene file or preset.
//!
//! Run with: cargo run --example inspect_scene -- scenes/four_spheres.json
//!       or: cargo run --example inspect_scene -- mirror_corridor

use std::env;

use glint_core::{load_scene_file, Preset, Shape};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        println!("Usage: inspect_scene <scene.json | preset>");
        println!("\nPresets:");
        for preset in Preset::ALL {
            println!("  {}", preset.name());
        }
        return;
    }

    let arg = &args[1];
    let result = match Preset::from_name(arg) {
        Some(preset) => preset.build().map_err(|e| e.to_string()),
        None => load_scene_file(arg).map_err(|e| e.to_string()),
    };

    match result {
        Ok(file) => {
            let scene = &file.scene;
            println!("\n=== Scene: {} ===", scene.name);
            println!("Resolution: {}x{}", file.width, file.height);
            println!("Max depth: {}", file.settings.max_depth);
            println!(
                "Shadows: {:?}, blend: {:?}",
                file.settings.shadows, file.settings.reflection_blend
            );
            println!("Light at {:?}", scene.light().position);
            println!("Camera at {:?}", scene.camera().position);

            println!("\n--- Primitives ---");
            for (i, primitive) in scene.primitives().iter().enumerate() {
                let geometry = match primitive.shape() {
                    Shape::Sphere(s) => format!("center {:?}, radius {}", s.center(), s.radius()),
                    Shape::Plane(p) => format!("point {:?}, normal {:?}", p.point(), p.normal()),
                };
                println!(
                    "  [{}] {} ({}) - {}, reflection {:?}",
                    i,
                    primitive.name,
                    primitive.shape().kind(),
                    geometry,
                    primitive.material().reflection
                );
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

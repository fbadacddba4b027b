//! Simple ray tracer example.
//!
//! Renders the four-sphere demo scene and saves to PPM format.

use glint_core::presets::four_spheres;
use glint_renderer::{render_parallel, save_ppm};

fn main() {
    println!("Glint Ray Tracer - Simple Example");
    println!("=================================");

    let file = four_spheres().expect("Preset scene is valid");
    println!(
        "Rendering {}x{} @ max depth {}...",
        file.width, file.height, file.settings.max_depth
    );

    let start = std::time::Instant::now();
    let image = render_parallel(&file.scene, &file.settings, file.width, file.height)
        .expect("Render failed");
    println!("Rendered in {:?}", start.elapsed());

    let filename = "output.ppm";
    save_ppm(&image, filename).expect("Failed to save image");
    println!("Saved to {}", filename);
}

//! Framebuffer encoders: PNG through the `image` crate and plain-text PPM.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::renderer::{ImageBuffer, RenderError};

/// Save an image as PNG.
pub fn save_png<P: AsRef<Path>>(image: &ImageBuffer, path: P) -> Result<(), RenderError> {
    let buffer = image::RgbImage::from_raw(image.width, image.height, image.to_rgb8()).ok_or(
        RenderError::InvalidResolution {
            width: image.width,
            height: image.height,
        },
    )?;
    buffer.save_with_format(path, image::ImageFormat::Png)?;
    Ok(())
}

/// Write an image as ASCII PPM (P3).
pub fn write_ppm<W: Write>(image: &ImageBuffer, mut writer: W) -> Result<(), RenderError> {
    writeln!(writer, "P3")?;
    writeln!(writer, "{} {}", image.width, image.height)?;
    writeln!(writer, "255")?;

    for rgb in image.to_rgb8().chunks_exact(3) {
        writeln!(writer, "{} {} {}", rgb[0], rgb[1], rgb[2])?;
    }

    writer.flush()?;
    Ok(())
}

/// Save an image as ASCII PPM.
pub fn save_ppm<P: AsRef<Path>>(image: &ImageBuffer, path: P) -> Result<(), RenderError> {
    let file = File::create(path)?;
    write_ppm(image, BufWriter::new(file))
}

/// Save an image, picking the format from the extension (`.ppm`, else PNG).
pub fn save_image<P: AsRef<Path>>(image: &ImageBuffer, path: P) -> Result<(), RenderError> {
    let path = path.as_ref();
    let is_ppm = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("ppm"));

    if is_ppm {
        save_ppm(image, path)?;
    } else {
        save_png(image, path)?;
    }

    log::info!("Saved {}x{} image to {}", image.width, image.height, path.display());
    Ok(())
}

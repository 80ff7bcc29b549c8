use crate::math::RGBColor;
use crate::renderer::Film;

use anyhow::Context;

use std::path::Path;
use std::time::Instant;

mod clamp;

pub use clamp::Clamp;

pub trait Tonemapper: Send + Sync {
    fn initialize(&mut self, film: &Film);
    // should map a pixel from hdr to 8 bit rgba
    fn map(&self, film: &Film, pixel: (usize, usize)) -> [u8; 4];
}

pub fn luminance(color: RGBColor) -> f32 {
    0.2126 * color.r + 0.7152 * color.g + 0.0722 * color.b
}

/// Applies `tonemapper` to every pixel and packs the result into a row-major RGBA8 buffer.
pub fn to_rgba8(film: &Film, tonemapper: &dyn Tonemapper) -> Vec<u8> {
    let mut buffer = Vec::with_capacity(film.total_pixels() * 4);
    for y in 0..film.height {
        for x in 0..film.width {
            buffer.extend_from_slice(&tonemapper.map(film, (x, y)));
        }
    }
    buffer
}

pub fn write_png(
    film: &Film,
    tonemapper: &dyn Tonemapper,
    png_filename: impl AsRef<Path>,
) -> anyhow::Result<()> {
    let png_filename = png_filename.as_ref();
    let now = Instant::now();
    let img = image::RgbaImage::from_raw(
        film.width as u32,
        film.height as u32,
        to_rgba8(film, tonemapper),
    )
    .context("film dimensions do not match the rgba buffer")?;
    img.save(png_filename)
        .with_context(|| format!("failed to save {}", png_filename.display()))?;
    info!(
        "saved {} in {}s",
        png_filename.display(),
        (now.elapsed().as_millis() as f32) / 1000.0
    );
    Ok(())
}

/// Writes the untonemapped film as linear rgb.
pub fn write_exr(film: &Film, exr_filename: impl AsRef<Path>) -> anyhow::Result<()> {
    let exr_filename = exr_filename.as_ref();
    let now = Instant::now();
    exr::prelude::write_rgb_file(exr_filename, film.width, film.height, |x, y| {
        let color = film.at(x, y);
        (color.r, color.g, color.b)
    })
    .with_context(|| format!("failed to save {}", exr_filename.display()))?;
    info!(
        "saved {} in {}s",
        exr_filename.display(),
        (now.elapsed().as_millis() as f32) / 1000.0
    );
    Ok(())
}

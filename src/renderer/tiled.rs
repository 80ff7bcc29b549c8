use super::prelude::*;

#[cfg(feature = "pbr")]
use std::sync::atomic::{AtomicUsize, Ordering};
#[cfg(feature = "pbr")]
use std::sync::Arc;
#[cfg(feature = "pbr")]
use std::thread;
#[cfg(feature = "pbr")]
use std::time::Duration;

use rayon::prelude::*;

pub const DEFAULT_TILE_ROWS: usize = 8;

/// Splits the film into horizontal bands of `tile_rows` rows and shades the bands in parallel.
/// Pixels are buffered and only flushed to the sink once every band is done, so the sink still
/// sees row-major order.
#[derive(Copy, Clone, Debug)]
pub struct TiledRenderer {
    tile_rows: usize,
}

impl Default for TiledRenderer {
    fn default() -> Self {
        TiledRenderer::new(DEFAULT_TILE_ROWS)
    }
}

impl TiledRenderer {
    pub fn new(tile_rows: usize) -> TiledRenderer {
        TiledRenderer {
            tile_rows: tile_rows.max(1),
        }
    }

    pub fn tile_rows(&self) -> usize {
        self.tile_rows
    }
}

impl Renderer for TiledRenderer {
    fn render(
        &self,
        scene: &Scene,
        camera: &PinholeCamera,
        settings: &RenderSettings,
        sink: &mut dyn PixelSink,
    ) -> Profile {
        let (width, height) = (camera.width, camera.height);
        info!(
            "starting tiled render with film resolution {}x{} and {} rows per tile",
            width, height, self.tile_rows
        );
        let integrator = DirectLightingIntegrator::new(scene, settings.shading);
        let mut film = Film::new(width, height, RGBColor::BLACK);

        #[cfg(feature = "pbr")]
        let (pixel_count, progress_thread) = {
            let total_pixels = width * height;
            let pixel_count = Arc::new(AtomicUsize::new(0));
            let clone = pixel_count.clone();
            let handle = thread::spawn(move || {
                let mut pb = pbr::ProgressBar::new(total_pixels as u64);
                let mut local_index = 0;
                while local_index < total_pixels {
                    let pixels_to_increment = clone.load(Ordering::Relaxed) - local_index;
                    pb.add(pixels_to_increment as u64);
                    local_index += pixels_to_increment;
                    thread::sleep(Duration::from_millis(100));
                }
                pb.finish();
            });
            (pixel_count, handle)
        };

        let now = Instant::now();
        let stats: Profile = film
            .buffer
            .par_chunks_mut(width * self.tile_rows)
            .enumerate()
            .map(|(tile_index, tile)| {
                let mut profile = Profile::default();
                let first_row = tile_index * self.tile_rows;
                for (offset, pixel_ref) in tile.iter_mut().enumerate() {
                    let y = first_row + offset / width;
                    let x = offset % width;
                    let primary = camera.ray_for_pixel(x, y);
                    *pixel_ref =
                        render_pixel(&integrator, camera, settings, (x, y, primary), &mut profile);
                    debug_assert!(
                        pixel_ref.is_finite(),
                        "pixel {} {} resulted in {:?}",
                        x,
                        y,
                        pixel_ref
                    );
                }
                #[cfg(feature = "pbr")]
                pixel_count.fetch_add(tile.len(), Ordering::Relaxed);
                profile
            })
            .reduce(Profile::default, |a, b| a.combine(b));

        #[cfg(feature = "pbr")]
        if let Err(panic) = progress_thread.join() {
            warn!("progress bar thread panicked: {:?}", panic);
        }

        let elapsed = (now.elapsed().as_millis() as f32) / 1000.0;
        info!("took {}s", elapsed);

        for y in 0..height {
            for x in 0..width {
                sink.put_pixel(x, y, film.at(x, y));
            }
        }
        stats
    }
}

use super::{luminance, Tonemapper};
use crate::math::INFINITY;
use crate::renderer::Film;

/// Scales every channel by `2^exposure` and clamps to [0, 1] before quantizing.
#[derive(Clone, Debug)]
pub struct Clamp {
    exposure: f32,
    silenced: bool,
}

impl Clamp {
    pub fn new(exposure: f32, silenced: bool) -> Self {
        Self { exposure, silenced }
    }

    fn quantize(&self, channel: f32) -> u8 {
        let scaled = channel * 2.0f32.powf(self.exposure);
        if scaled.is_nan() {
            return 0;
        }
        (scaled.clamp(0.0, 1.0) * 255.0) as u8
    }
}

impl Tonemapper for Clamp {
    fn initialize(&mut self, film: &Film) {
        let mut max_luminance = 0.0;
        let mut min_luminance = INFINITY;
        let mut max_lum_xy = (0, 0);
        let mut min_lum_xy = (0, 0);
        let mut total_luminance = 0.0;
        let mut clipped = 0usize;
        let scale = 2.0f32.powf(self.exposure);

        for y in 0..film.height {
            for x in 0..film.width {
                let color = film.at(x, y);
                let lum = luminance(color);
                debug_assert!(!lum.is_nan(), "nan {:?} at ({},{})", color, x, y);
                if lum.is_nan() {
                    continue;
                }
                total_luminance += lum;
                if lum > max_luminance {
                    max_luminance = lum;
                    max_lum_xy = (x, y);
                }
                if lum < min_luminance {
                    min_luminance = lum;
                    min_lum_xy = (x, y);
                }
                if color.r * scale > 1.0 || color.g * scale > 1.0 || color.b * scale > 1.0 {
                    clipped += 1;
                }
            }
        }

        if self.silenced {
            return;
        }
        let avg_luminance = total_luminance / (film.total_pixels().max(1) as f32);
        info!("average luminance is {}", avg_luminance);
        info!(
            "max luminance occurred at {}, {}, is {}",
            max_lum_xy.0, max_lum_xy.1, max_luminance
        );
        info!(
            "min luminance occurred at {}, {}, is {}",
            min_lum_xy.0, min_lum_xy.1, min_luminance
        );
        if clipped > 0 {
            warn!(
                "{} of {} pixels clip at exposure {}",
                clipped,
                film.total_pixels(),
                self.exposure
            );
        }
    }

    fn map(&self, film: &Film, pixel: (usize, usize)) -> [u8; 4] {
        let color = film.at(pixel.0, pixel.1);
        [
            self.quantize(color.r),
            self.quantize(color.g),
            self.quantize(color.b),
            255,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::RGBColor;

    #[test]
    fn test_clamps_out_of_range() {
        let mut film = Film::new(1, 1, RGBColor::new(2.0, -1.0, 0.5));
        let mut clamp = Clamp::new(0.0, true);
        clamp.initialize(&film);
        assert_eq!(clamp.map(&film, (0, 0)), [255, 0, 127, 255]);

        film.write_at(0, 0, RGBColor::new(f32::NAN, 1.0, 0.0));
        assert_eq!(clamp.map(&film, (0, 0)), [0, 255, 0, 255]);
    }

    #[test]
    fn test_exposure_scales_by_powers_of_two() {
        let film = Film::new(1, 1, RGBColor::new(0.25, 0.25, 0.25));
        assert_eq!(Clamp::new(1.0, true).map(&film, (0, 0)), [127, 127, 127, 255]);
        assert_eq!(Clamp::new(2.0, true).map(&film, (0, 0)), [255, 255, 255, 255]);
        assert_eq!(Clamp::new(-1.0, true).map(&film, (0, 0)), [31, 31, 31, 255]);
    }
}

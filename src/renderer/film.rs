use super::PixelSink;
use crate::math::RGBColor;

/// Row-major RGB pixel buffer.
#[derive(Clone, Debug, PartialEq)]
pub struct Film {
    pub buffer: Vec<RGBColor>,
    pub width: usize,
    pub height: usize,
}

impl Film {
    pub fn new(width: usize, height: usize, fill_value: RGBColor) -> Film {
        Film {
            buffer: vec![fill_value; width * height],
            width,
            height,
        }
    }

    fn index(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({}, {}) outside {}x{} film",
            x,
            y,
            self.width,
            self.height
        );
        y * self.width + x
    }

    pub fn at(&self, x: usize, y: usize) -> RGBColor {
        self.buffer[self.index(x, y)]
    }

    pub fn write_at(&mut self, x: usize, y: usize, value: RGBColor) {
        let index = self.index(x, y);
        self.buffer[index] = value;
    }

    pub fn total_pixels(&self) -> usize {
        self.width * self.height
    }
}

impl PixelSink for Film {
    fn put_pixel(&mut self, x: usize, y: usize, color: RGBColor) {
        self.write_at(x, y, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_film_as_sink() {
        let mut film = Film::new(3, 2, RGBColor::BLACK);
        film.put_pixel(2, 1, RGBColor::WHITE);
        assert_eq!(film.at(2, 1), RGBColor::WHITE);
        assert_eq!(film.buffer[5], RGBColor::WHITE);
        assert_eq!(film.at(0, 0), RGBColor::BLACK);
        assert_eq!(film.total_pixels(), 6);
    }

    #[test]
    #[should_panic(expected = "outside 3x2 film")]
    fn test_column_past_width_does_not_wrap() {
        let mut film = Film::new(3, 2, RGBColor::BLACK);
        // would land on (0, 1) if the row wrapped
        film.put_pixel(3, 0, RGBColor::WHITE);
    }

    #[test]
    #[should_panic(expected = "outside 3x2 film")]
    fn test_row_past_height_is_rejected() {
        let film = Film::new(3, 2, RGBColor::BLACK);
        film.at(0, 2);
    }
}

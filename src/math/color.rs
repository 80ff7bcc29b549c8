use std::ops::{Add, AddAssign, Div, Mul, MulAssign};

/// Linear RGB color. Channels are notionally in [0, 1] but are never clamped here,
/// since additive light accumulation can exceed 1.0 before tonemapping.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct RGBColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl RGBColor {
    pub const fn new(r: f32, g: f32, b: f32) -> RGBColor {
        RGBColor { r, g, b }
    }
    pub const BLACK: RGBColor = RGBColor::new(0.0, 0.0, 0.0);
    pub const WHITE: RGBColor = RGBColor::new(1.0, 1.0, 1.0);

    pub fn is_finite(&self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite()
    }
}

// component-wise, used for tinting a surface by a light color
impl Mul for RGBColor {
    type Output = Self;
    fn mul(self, other: RGBColor) -> Self {
        RGBColor::new(self.r * other.r, self.g * other.g, self.b * other.b)
    }
}

impl MulAssign for RGBColor {
    fn mul_assign(&mut self, other: RGBColor) {
        *self = *self * other;
    }
}

impl Mul<f32> for RGBColor {
    type Output = RGBColor;
    fn mul(self, other: f32) -> RGBColor {
        RGBColor::new(self.r * other, self.g * other, self.b * other)
    }
}

impl Mul<RGBColor> for f32 {
    type Output = RGBColor;
    fn mul(self, other: RGBColor) -> RGBColor {
        other * self
    }
}

impl Div<f32> for RGBColor {
    type Output = RGBColor;
    fn div(self, other: f32) -> RGBColor {
        RGBColor::new(self.r / other, self.g / other, self.b / other)
    }
}

impl Add for RGBColor {
    type Output = RGBColor;
    fn add(self, other: RGBColor) -> RGBColor {
        RGBColor::new(self.r + other.r, self.g + other.g, self.b + other.b)
    }
}

impl AddAssign for RGBColor {
    fn add_assign(&mut self, other: RGBColor) {
        *self = *self + other;
    }
}

impl From<f32> for RGBColor {
    fn from(s: f32) -> RGBColor {
        RGBColor::new(s, s, s)
    }
}

impl From<[f32; 3]> for RGBColor {
    fn from(other: [f32; 3]) -> RGBColor {
        RGBColor::new(other[0], other[1], other[2])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_composition() {
        let a = RGBColor::new(0.5, 0.25, 1.0);
        let b = RGBColor::new(0.5, 1.0, 0.0);
        assert_eq!(a + b, RGBColor::new(1.0, 1.25, 1.0));
        assert_eq!(a * b, RGBColor::new(0.25, 0.25, 0.0));
        assert_eq!(a * 2.0, RGBColor::new(1.0, 0.5, 2.0));
        assert_eq!((a * 2.0) / 2.0, a);
        assert_eq!(RGBColor::WHITE * a, a);
    }
}

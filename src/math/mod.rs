mod color;
mod misc;
mod point;
mod vec;

pub use color::RGBColor;
pub use misc::*;
pub use point::Point3;
pub use std::f32::consts::PI;
pub use std::f32::INFINITY;
pub use vec::Vec3;

/// A surface normal. Not normalized by construction; producers normalize where lighting needs it.
pub type Normal = Vec3;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray {
    pub origin: Point3,
    pub direction: Vec3,
}

impl Ray {
    pub const fn new(origin: Point3, direction: Vec3) -> Self {
        Ray { origin, direction }
    }

    pub fn point_at_parameter(self, time: f32) -> Point3 {
        self.origin + self.direction * time
    }
}

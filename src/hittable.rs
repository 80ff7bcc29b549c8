use crate::math::*;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HitRecord {
    pub distance: f32,
    pub point: Point3,
    pub normal: Normal,
    // surface color at the hit point, after any procedural pattern has been applied
    pub color: RGBColor,
}

impl HitRecord {
    /// Builds a hit record, rejecting negative or non-finite distances so that
    /// degenerate geometry resolves to a miss instead of leaking NaN into shading.
    pub fn new(distance: f32, point: Point3, normal: Normal, color: RGBColor) -> Option<Self> {
        if !distance.is_finite() || distance < 0.0 || !point.is_finite() {
            return None;
        }
        Some(HitRecord {
            distance,
            point,
            normal: normal.normalized(),
            color,
        })
    }
}

pub trait Hittable: Send + Sync {
    fn hit(&self, r: Ray) -> Option<HitRecord>;
}

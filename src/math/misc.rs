use crate::math::{Vec3, PI};

pub fn random_in_unit_disk(u: f32, v: f32) -> Vec3 {
    let theta: f32 = u * PI * 2.0;
    let r: f32 = v.sqrt();
    Vec3::new(theta.cos() * r, theta.sin() * r, 0.0)
}

mod checkerboard;
mod sphere;

pub use checkerboard::{CheckerBoard, CheckerMode, DEFAULT_CELL_SIZE};
pub use sphere::Sphere;

use crate::hittable::{HitRecord, Hittable};
use crate::math::*;
use crate::scene::SceneError;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Primitive {
    Sphere(Sphere),
    CheckerBoard(CheckerBoard),
}

impl Primitive {
    pub fn validate(&self) -> Result<(), SceneError> {
        match self {
            Primitive::Sphere(sphere) => sphere.validate(),
            Primitive::CheckerBoard(board) => board.validate(),
        }
    }
}

impl From<Sphere> for Primitive {
    fn from(data: Sphere) -> Self {
        Primitive::Sphere(data)
    }
}

impl From<CheckerBoard> for Primitive {
    fn from(data: CheckerBoard) -> Self {
        Primitive::CheckerBoard(data)
    }
}

impl Hittable for Primitive {
    fn hit(&self, r: Ray) -> Option<HitRecord> {
        match self {
            Primitive::Sphere(sphere) => sphere.hit(r),
            Primitive::CheckerBoard(board) => board.hit(r),
        }
    }
}

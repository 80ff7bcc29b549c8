use crate::hittable::{HitRecord, Hittable};
use crate::math::*;
use crate::scene::SceneError;

use serde::{Deserialize, Serialize};

pub const DEFAULT_CELL_SIZE: f32 = 10.0;

/// What happens to rays landing on a "dark" checker cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CheckerMode {
    /// Every cell is solid; dark cells take the secondary color.
    #[default]
    Colored,
    /// Dark cells are holes in the plane and report no hit.
    Stencil,
}

/// Infinite plane with a checker pattern laid out on the world x and z axes.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CheckerBoard {
    pub point: Point3,
    pub normal: Normal,
    pub color: RGBColor,
    pub secondary: RGBColor,
    pub cell_size: f32,
    pub mode: CheckerMode,
}

impl CheckerBoard {
    pub fn new(point: Point3, normal: Normal, color: RGBColor) -> CheckerBoard {
        CheckerBoard {
            point,
            normal: normal.normalized(),
            color,
            secondary: RGBColor::BLACK,
            cell_size: DEFAULT_CELL_SIZE,
            mode: CheckerMode::Colored,
        }
    }

    pub fn with_secondary(mut self, secondary: RGBColor) -> Self {
        self.secondary = secondary;
        self
    }

    pub fn with_cell_size(mut self, cell_size: f32) -> Self {
        self.cell_size = cell_size;
        self
    }

    pub fn with_mode(mut self, mode: CheckerMode) -> Self {
        self.mode = mode;
        self
    }

    /// A cell is dark when exactly one of ceil(x / cell) and ceil(z / cell) is even.
    pub fn is_dark_cell(&self, point: Point3) -> bool {
        let even = |coordinate: f32| (coordinate / self.cell_size).ceil().rem_euclid(2.0) == 0.0;
        even(point.x) ^ even(point.z)
    }

    pub fn validate(&self) -> Result<(), SceneError> {
        if self.normal.try_normalized().is_none() {
            return Err(SceneError::DegenerateNormal);
        }
        if !self.cell_size.is_finite() || self.cell_size <= 0.0 {
            return Err(SceneError::InvalidCellSize(self.cell_size));
        }
        if !self.point.is_finite() {
            return Err(SceneError::NonFinite("checkerboard point"));
        }
        if !self.color.is_finite() || !self.secondary.is_finite() {
            return Err(SceneError::NonFinite("checkerboard color"));
        }
        Ok(())
    }
}

impl Hittable for CheckerBoard {
    fn hit(&self, r: Ray) -> Option<HitRecord> {
        let direction = r.direction.try_normalized()?;
        // parallel rays divide by zero and come out non-finite, which HitRecord::new rejects
        let distance = (self.normal * (self.point - r.origin)) / (direction * self.normal);
        if !distance.is_finite() || distance < 0.0 {
            return None;
        }
        let point = r.origin + direction * distance;
        let color = if self.is_dark_cell(point) {
            match self.mode {
                CheckerMode::Stencil => return None,
                CheckerMode::Colored => self.secondary,
            }
        } else {
            self.color
        };
        HitRecord::new(distance, point, self.normal, color)
    }
}

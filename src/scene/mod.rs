use crate::geometry::Primitive;
use crate::math::*;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SceneError {
    #[error("sphere radius must be finite and non-negative, got {0}")]
    InvalidRadius(f32),
    #[error("checkerboard normal has zero length")]
    DegenerateNormal,
    #[error("checker cell size must be positive, got {0}")]
    InvalidCellSize(f32),
    #[error("camera angle must be in (0, pi/2) radians, got {0}")]
    InvalidCameraAngle(f32),
    #[error("view pane distance must be positive, got {0}")]
    InvalidViewPaneDistance(f32),
    #[error("horizon distance must be positive, got {0}")]
    InvalidHorizon(f32),
    #[error("resolution must be non-zero, got {width}x{height}")]
    InvalidResolution { width: usize, height: usize },
    #[error("{0} contains a non-finite value")]
    NonFinite(&'static str),
}

/// Point light without distance falloff.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Light {
    pub origin: Point3,
    pub color: RGBColor,
}

impl Light {
    pub fn new(origin: Point3, color: RGBColor) -> Self {
        Light { origin, color }
    }

    pub fn validate(&self) -> Result<(), SceneError> {
        if !self.origin.is_finite() {
            return Err(SceneError::NonFinite("light origin"));
        }
        if !self.color.is_finite() {
            return Err(SceneError::NonFinite("light color"));
        }
        Ok(())
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CameraParams {
    pub position: Point3,
    // radians. pixel size is derived from tan(angle), so it must stay below pi/2
    pub angle: f32,
    pub view_pane_distance: f32,
}

impl CameraParams {
    pub fn new(position: Point3, angle: f32, view_pane_distance: f32) -> Self {
        CameraParams {
            position,
            angle,
            view_pane_distance,
        }
    }

    pub fn validate(&self) -> Result<(), SceneError> {
        if !self.position.is_finite() {
            return Err(SceneError::NonFinite("camera position"));
        }
        if !(self.angle > 0.0 && self.angle < PI / 2.0) {
            return Err(SceneError::InvalidCameraAngle(self.angle));
        }
        if !(self.view_pane_distance > 0.0 && self.view_pane_distance.is_finite()) {
            return Err(SceneError::InvalidViewPaneDistance(
                self.view_pane_distance,
            ));
        }
        Ok(())
    }
}

/// Everything needed to render a frame. Immutable once constructed.
#[derive(Clone, Debug)]
pub struct Scene {
    primitives: Vec<Primitive>,
    lights: Vec<Light>,
    background: RGBColor,
    camera: CameraParams,
    horizon_distance: f32,
}

impl Scene {
    pub fn new(
        primitives: Vec<Primitive>,
        lights: Vec<Light>,
        background: RGBColor,
        camera: CameraParams,
        horizon_distance: f32,
    ) -> Result<Self, SceneError> {
        for primitive in primitives.iter() {
            primitive.validate()?;
        }
        for light in lights.iter() {
            light.validate()?;
        }
        camera.validate()?;
        if !background.is_finite() {
            return Err(SceneError::NonFinite("background color"));
        }
        // +inf is allowed and means no far plane
        if horizon_distance.is_nan() || horizon_distance <= 0.0 {
            return Err(SceneError::InvalidHorizon(horizon_distance));
        }
        if primitives.is_empty() {
            warn!("scene has no primitives, every pixel will be background");
        }
        if lights.is_empty() {
            warn!("scene has no lights, surfaces will only show their base color");
        }
        debug!(
            "constructed scene with {} primitives and {} lights",
            primitives.len(),
            lights.len()
        );
        Ok(Scene {
            primitives,
            lights,
            background,
            camera,
            horizon_distance,
        })
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    pub fn background(&self) -> RGBColor {
        self.background
    }

    pub fn camera(&self) -> &CameraParams {
        &self.camera
    }

    pub fn horizon_distance(&self) -> f32 {
        self.horizon_distance
    }
}

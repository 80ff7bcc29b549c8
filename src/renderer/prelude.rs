pub use super::{render_pixel, Film, PixelSink, Renderer};

pub use crate::camera::PinholeCamera;
pub use crate::integrator::{DirectLightingIntegrator, Integrator};
pub use crate::math::*;
pub use crate::parsing::config::RenderSettings;
pub use crate::profile::Profile;
pub use crate::scene::Scene;

pub use std::time::Instant;

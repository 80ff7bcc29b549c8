pub use crate::camera::{PinholeCamera, PrimaryRays};
pub use crate::geometry::{CheckerBoard, CheckerMode, Primitive, Sphere};
pub use crate::hittable::{HitRecord, Hittable};
pub use crate::integrator::{DirectLightingIntegrator, Integrator, ShadingMode, TraceResult};
pub use crate::math::*;
pub use crate::parsing::{Config, RenderSettings, RendererType};
pub use crate::profile::Profile;
pub use crate::renderer::{Film, NaiveRenderer, PixelSink, Renderer, TiledRenderer};
pub use crate::scene::{CameraParams, Light, Scene, SceneError};
pub use crate::tonemap::{Clamp, Tonemapper};

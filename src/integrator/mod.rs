mod direct;

pub use direct::DirectLightingIntegrator;

use crate::math::*;
use crate::profile::Profile;

use serde::{Deserialize, Serialize};

/// Offset applied to hit points before casting shadow rays, to avoid self-occlusion.
pub const SHADOW_BIAS: f32 = 0.001;
/// Hits closer than this to the current nearest one (scaled by its distance past one unit)
/// do not replace it, so the first primitive wins ties.
pub const TIE_EPSILON: f32 = 0.000001;

/// How each visible light combines with the surface color.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ShadingMode {
    /// color += surface * light * lambert, per visible light
    #[default]
    Additive,
    /// color *= light * lambert, per visible light
    Multiplicative,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TraceResult {
    pub distance: f32,
    pub color: RGBColor,
}

impl TraceResult {
    pub fn miss(background: RGBColor) -> Self {
        TraceResult {
            distance: INFINITY,
            color: background,
        }
    }

    pub fn is_miss(&self) -> bool {
        self.distance.is_infinite()
    }
}

pub trait Integrator: Sync {
    fn trace(&self, ray: Ray, profile: &mut Profile) -> TraceResult;
    // color used for samples that resolve to nothing
    fn background(&self) -> RGBColor;
}

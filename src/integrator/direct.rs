use super::{Integrator, ShadingMode, TraceResult, SHADOW_BIAS, TIE_EPSILON};

use crate::hittable::{HitRecord, Hittable};
use crate::math::*;
use crate::profile::Profile;
use crate::scene::{Light, Scene};

/// Direct illumination only: nearest hit, then one shadow ray per point light.
pub struct DirectLightingIntegrator<'a> {
    pub scene: &'a Scene,
    pub shading: ShadingMode,
}

impl<'a> DirectLightingIntegrator<'a> {
    pub fn new(scene: &'a Scene, shading: ShadingMode) -> Self {
        DirectLightingIntegrator { scene, shading }
    }

    /// Nearest hit across all primitives. Hits within `TIE_EPSILON` (relative beyond one unit)
    /// of the current nearest keep the earlier primitive.
    pub fn nearest_hit(&self, r: Ray) -> Option<HitRecord> {
        let mut nearest: Option<HitRecord> = None;
        for primitive in self.scene.primitives() {
            if let Some(hit) = primitive.hit(r) {
                match &nearest {
                    Some(current)
                        if hit.distance
                            >= current.distance - TIE_EPSILON * current.distance.max(1.0) => {}
                    _ => nearest = Some(hit),
                }
            }
        }
        nearest
    }

    fn occluded(&self, r: Ray, max_distance: f32) -> bool {
        self.scene
            .primitives()
            .iter()
            .any(|primitive| matches!(primitive.hit(r), Some(hit) if hit.distance < max_distance))
    }

    /// Shadow ray from `hit` toward `light`, along with the distance the ray must travel unobstructed.
    pub fn shadow_ray(&self, hit: &HitRecord, incoming: Vec3, light: &Light) -> (Ray, f32) {
        let origin = hit.point - incoming.normalized() * SHADOW_BIAS;
        let light_distance = light.origin.distance(hit.point);
        (
            Ray::new(origin, (light.origin - origin).normalized()),
            light_distance,
        )
    }

    pub fn is_light_visible(&self, hit: &HitRecord, incoming: Ray, light: &Light) -> bool {
        let (shadow_ray, light_distance) = self.shadow_ray(hit, incoming.direction, light);
        !self.occluded(shadow_ray, light_distance)
    }
}

impl<'a> Integrator for DirectLightingIntegrator<'a> {
    fn trace(&self, r: Ray, profile: &mut Profile) -> TraceResult {
        profile.camera_rays += 1;
        let hit = match self.nearest_hit(r) {
            Some(hit) if hit.distance <= self.scene.horizon_distance() => hit,
            _ => {
                profile.env_hits += 1;
                return TraceResult::miss(self.scene.background());
            }
        };

        let mut color = hit.color;
        for light in self.scene.lights() {
            profile.shadow_rays += 1;
            let (shadow_ray, light_distance) = self.shadow_ray(&hit, r.direction, light);
            if self.occluded(shadow_ray, light_distance) {
                profile.occluded += 1;
                continue;
            }
            let cos_theta = hit.normal * shadow_ray.direction;
            match self.shading {
                ShadingMode::Additive => {
                    color += hit.color * light.color * cos_theta.clamp(0.0, 1.0);
                }
                ShadingMode::Multiplicative => {
                    color *= light.color * cos_theta.max(0.0);
                }
            }
        }
        debug_assert!(color.is_finite(), "{:?} from {:?}", color, hit);

        TraceResult {
            distance: hit.distance,
            color,
        }
    }

    fn background(&self) -> RGBColor {
        self.scene.background()
    }
}

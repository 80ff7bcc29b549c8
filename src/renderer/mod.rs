mod film;
mod naive;
mod prelude;
mod tiled;

pub use film::Film;
pub use naive::NaiveRenderer;
pub use tiled::TiledRenderer;

use crate::camera::PinholeCamera;
use crate::integrator::Integrator;
use crate::math::*;
use crate::parsing::config::RenderSettings;
use crate::profile::Profile;
use crate::scene::Scene;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Receives the final color of each pixel, exactly once per pixel, in row-major order.
pub trait PixelSink {
    fn put_pixel(&mut self, x: usize, y: usize, color: RGBColor);
}

impl<F> PixelSink for F
where
    F: FnMut(usize, usize, RGBColor),
{
    fn put_pixel(&mut self, x: usize, y: usize, color: RGBColor) {
        self(x, y, color)
    }
}

pub trait Renderer {
    fn render(
        &self,
        scene: &Scene,
        camera: &PinholeCamera,
        settings: &RenderSettings,
        sink: &mut dyn PixelSink,
    ) -> Profile;
}

// every pixel gets its own stream so that results don't depend on which thread rendered it
fn pixel_seed(seed: u64, width: usize, x: usize, y: usize) -> u64 {
    seed.wrapping_mul(0x9E37_79B9_7F4A_7C15)
        .wrapping_add((y * width + x) as u64)
}

/// Color for a single pixel.
///
/// With one sample this is just the primary ray. With more, each sample's origin is moved
/// inside a disk of radius `settings.jitter` in the camera plane while still aiming at the
/// same view-plane point, and the sample colors are averaged.
pub fn render_pixel(
    integrator: &dyn Integrator,
    camera: &PinholeCamera,
    settings: &RenderSettings,
    (x, y, primary): (usize, usize, Ray),
    profile: &mut Profile,
) -> RGBColor {
    let samples = settings.samples.max(1);
    if samples == 1 {
        return integrator.trace(primary, profile).color;
    }
    let mut rng = StdRng::seed_from_u64(pixel_seed(settings.seed, camera.width, x, y));
    let mut sum = RGBColor::BLACK;
    for _ in 0..samples {
        let disk = random_in_unit_disk(rng.gen::<f32>(), rng.gen::<f32>());
        let origin = camera.origin + camera.lens_offset(disk * settings.jitter);
        let result = integrator.trace(camera.ray_for_pixel_from(origin, x, y), profile);
        sum += if result.is_miss() {
            integrator.background()
        } else {
            result.color
        };
    }
    sum / samples as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{CheckerBoard, Sphere};
    use crate::integrator::{DirectLightingIntegrator, ShadingMode};
    use crate::scene::{CameraParams, Light};

    pub(super) fn test_scene() -> Scene {
        Scene::new(
            vec![
                Sphere::new(1.5, Point3::new(0.0, 1.0, -8.0), RGBColor::new(0.8, 0.1, 0.1)).into(),
                Sphere::new(1.0, Point3::new(2.5, 0.5, -10.0), RGBColor::new(0.1, 0.1, 0.8)).into(),
                CheckerBoard::new(Point3::new(0.0, -1.0, 0.0), Vec3::Y, RGBColor::WHITE)
                    .with_cell_size(2.0)
                    .into(),
            ],
            vec![
                Light::new(Point3::new(-5.0, 10.0, 0.0), RGBColor::new(0.5, 0.5, 0.5)),
                Light::new(Point3::new(5.0, 5.0, -5.0), RGBColor::new(0.3, 0.3, 0.2)),
            ],
            RGBColor::new(0.1, 0.1, 0.2),
            CameraParams::new(Point3::new(0.0, 1.0, 0.0), 0.5, 1.0),
            100.0,
        )
        .unwrap()
    }

    pub(super) fn test_camera(scene: &Scene) -> PinholeCamera {
        PinholeCamera::new(scene.camera(), 24, 16).unwrap()
    }

    #[test]
    fn test_closure_sink() {
        let mut seen = Vec::new();
        {
            let mut sink = |x: usize, y: usize, _color: RGBColor| seen.push((x, y));
            sink.put_pixel(1, 2, RGBColor::BLACK);
            sink.put_pixel(3, 4, RGBColor::BLACK);
        }
        assert_eq!(seen, vec![(1, 2), (3, 4)]);
    }

    #[test]
    fn test_single_sample_is_primary_ray() {
        let scene = test_scene();
        let camera = test_camera(&scene);
        let integrator = DirectLightingIntegrator::new(&scene, ShadingMode::Additive);
        let settings = RenderSettings::default();
        let mut profile = Profile::default();
        for (x, y, ray) in camera.rays() {
            let color = render_pixel(&integrator, &camera, &settings, (x, y, ray), &mut profile);
            let expected = integrator.trace(ray, &mut Profile::default()).color;
            assert_eq!(color, expected);
        }
        assert_eq!(profile.camera_rays, camera.width * camera.height);
    }

    #[test]
    fn test_jittered_samples_are_reproducible() {
        let scene = test_scene();
        let camera = test_camera(&scene);
        let integrator = DirectLightingIntegrator::new(&scene, ShadingMode::Additive);
        let settings = RenderSettings {
            samples: 8,
            jitter: 0.05,
            seed: 7,
            ..RenderSettings::default()
        };
        let mut profile = Profile::default();
        let pixel = camera.rays().nth(200).unwrap();
        let a = render_pixel(&integrator, &camera, &settings, pixel, &mut profile);
        let b = render_pixel(&integrator, &camera, &settings, pixel, &mut profile);
        assert_eq!(a, b);
        assert!(a.is_finite());
        assert_eq!(profile.camera_rays, 16);
    }

    #[test]
    fn test_zero_jitter_samples_average_to_primary() {
        let scene = test_scene();
        let camera = test_camera(&scene);
        let integrator = DirectLightingIntegrator::new(&scene, ShadingMode::Additive);
        let settings = RenderSettings {
            samples: 4,
            jitter: 0.0,
            ..RenderSettings::default()
        };
        let pixel = camera.rays().nth(77).unwrap();
        let averaged = render_pixel(&integrator, &camera, &settings, pixel, &mut Profile::default());
        let single = integrator.trace(pixel.2, &mut Profile::default()).color;
        assert!((averaged.r - single.r).abs() < 1e-5);
        assert!((averaged.g - single.g).abs() < 1e-5);
        assert!((averaged.b - single.b).abs() < 1e-5);
    }
}

use super::prelude::*;

use crate::integrator::ShadingMode;

/// Walks the primary rays in row-major order on the calling thread and hands every pixel
/// to the sink as soon as it is shaded.
#[derive(Default, Copy, Clone, Debug)]
pub struct NaiveRenderer {}

impl NaiveRenderer {
    pub fn new() -> NaiveRenderer {
        NaiveRenderer {}
    }
}

impl Renderer for NaiveRenderer {
    fn render(
        &self,
        scene: &Scene,
        camera: &PinholeCamera,
        settings: &RenderSettings,
        sink: &mut dyn PixelSink,
    ) -> Profile {
        let (width, height) = (camera.width, camera.height);
        info!("starting naive render with film resolution {}x{}", width, height);
        let integrator = DirectLightingIntegrator::new(scene, settings.shading);
        if settings.shading == ShadingMode::Multiplicative {
            debug!("using multiplicative shading");
        }

        let now = Instant::now();
        let mut profile = Profile::default();
        for pixel @ (x, y, _) in camera.rays() {
            let color = render_pixel(&integrator, camera, settings, pixel, &mut profile);
            debug_assert!(color.is_finite(), "pixel {} {} resulted in {:?}", x, y, color);
            sink.put_pixel(x, y, color);
        }
        let elapsed = (now.elapsed().as_millis() as f32) / 1000.0;
        info!("took {}s", elapsed);
        profile
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Sphere;
    use crate::scene::{CameraParams, Light};

    #[test]
    fn test_every_pixel_once_in_order() {
        let scene = Scene::new(
            vec![Sphere::new(1.0, Point3::new(0.0, 0.0, -5.0), RGBColor::WHITE).into()],
            vec![Light::new(Point3::new(0.0, 5.0, 0.0), RGBColor::WHITE)],
            RGBColor::BLACK,
            CameraParams::new(Point3::ORIGIN, 0.5, 1.0),
            INFINITY,
        )
        .unwrap();
        let camera = PinholeCamera::new(scene.camera(), 7, 5).unwrap();
        let settings = RenderSettings::default();

        let mut seen = Vec::new();
        let mut sink = |x: usize, y: usize, _: RGBColor| seen.push((x, y));
        let profile = NaiveRenderer::new().render(&scene, &camera, &settings, &mut sink);

        let expected: Vec<(usize, usize)> =
            (0..5).flat_map(|y| (0..7).map(move |x| (x, y))).collect();
        assert_eq!(seen, expected);
        assert_eq!(profile.camera_rays, 35);
    }

    #[test]
    fn test_empty_scene_is_background() {
        let background = RGBColor::new(0.2, 0.3, 0.4);
        let scene = Scene::new(
            vec![],
            vec![],
            background,
            CameraParams::new(Point3::ORIGIN, 0.5, 1.0),
            INFINITY,
        )
        .unwrap();
        let camera = PinholeCamera::new(scene.camera(), 4, 3).unwrap();
        let mut film = Film::new(4, 3, RGBColor::BLACK);
        let profile =
            NaiveRenderer::new().render(&scene, &camera, &RenderSettings::default(), &mut film);
        assert!(film.buffer.iter().all(|c| *c == background));
        assert_eq!(profile, Profile::new(12, 0, 0, 12));
    }
}

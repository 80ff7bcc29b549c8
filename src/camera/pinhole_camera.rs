use crate::math::*;
use crate::scene::{CameraParams, SceneError};

/// Pinhole camera looking down world -Z.
///
/// Camera space is axis aligned with world space except that raster rows grow downward,
/// so camera-space +y maps to world -y.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PinholeCamera {
    pub origin: Point3,
    pub pixel_size: f32,
    pub view_pane_distance: f32,
    pub width: usize,
    pub height: usize,
    right: Vec3,
    down: Vec3,
    forward: Vec3,
}

impl PinholeCamera {
    pub fn new(params: &CameraParams, width: usize, height: usize) -> Result<Self, SceneError> {
        params.validate()?;
        if width == 0 || height == 0 {
            return Err(SceneError::InvalidResolution { width, height });
        }
        let pixel_size = 2.0 * params.view_pane_distance * params.angle.tan() / width as f32;
        debug!(
            "pinhole camera at {:?}, {}x{}, pixel size {}",
            params.position, width, height, pixel_size
        );
        Ok(PinholeCamera {
            origin: params.position,
            pixel_size,
            view_pane_distance: params.view_pane_distance,
            width,
            height,
            right: Vec3::X,
            down: -Vec3::Y,
            forward: -Vec3::Z,
        })
    }

    /// Offset from the camera position to the projected view-plane point of pixel (x, y).
    pub fn view_pane_offset(&self, x: usize, y: usize) -> Vec3 {
        let u = (x as f32 - self.width as f32 / 2.0 - 0.5) * self.pixel_size;
        let v = (y as f32 - self.height as f32 / 2.0 - 0.5) * self.pixel_size;
        self.right * u + self.down * v + self.forward * self.view_pane_distance
    }

    pub fn ray_for_pixel(&self, x: usize, y: usize) -> Ray {
        self.ray_for_pixel_from(self.origin, x, y)
    }

    // used for jittered samples, where the origin moves but the view plane stays put
    pub fn ray_for_pixel_from(&self, origin: Point3, x: usize, y: usize) -> Ray {
        let view_pane_point = self.origin + self.view_pane_offset(x, y);
        Ray::new(origin, (view_pane_point - origin).normalized())
    }

    /// Offset of the camera origin in its own image plane, for jittering.
    pub fn lens_offset(&self, disk: Vec3) -> Vec3 {
        self.right * disk.x + self.down * disk.y
    }

    pub fn rays(&self) -> PrimaryRays {
        PrimaryRays {
            camera: *self,
            index: 0,
        }
    }
}

/// Lazily yields `(x, y, ray)` for every pixel, row by row, with `x` in `0..width` and
/// `y` in `0..height` (both exclusive), so there are exactly `width * height` items.
/// Cloning the iterator, or calling `rays()` again, restarts the sequence.
#[derive(Clone, Debug)]
pub struct PrimaryRays {
    camera: PinholeCamera,
    index: usize,
}

impl Iterator for PrimaryRays {
    type Item = (usize, usize, Ray);

    fn next(&mut self) -> Option<Self::Item> {
        let total = self.camera.width * self.camera.height;
        if self.index >= total {
            return None;
        }
        let y = self.index / self.camera.width;
        let x = self.index - self.camera.width * y;
        self.index += 1;
        Some((x, y, self.camera.ray_for_pixel(x, y)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.camera.width * self.camera.height - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for PrimaryRays {}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> CameraParams {
        CameraParams::new(Point3::new(0.0, 1.0, 5.0), PI / 4.0, 2.0)
    }

    #[test]
    fn test_pixel_size() {
        let camera = PinholeCamera::new(&params(), 100, 50).unwrap();
        // tan(pi/4) == 1
        assert!((camera.pixel_size - 2.0 * 2.0 / 100.0).abs() < 1e-6);
    }

    #[test]
    fn test_ray_for_pixel() {
        let camera = PinholeCamera::new(&params(), 4, 2).unwrap();
        let ps = camera.pixel_size;
        let ray = camera.ray_for_pixel(0, 0);
        assert_eq!(ray.origin, Point3::new(0.0, 1.0, 5.0));
        // raster y grows downward, so row 0 looks up
        let expected = Vec3::new((0.0 - 2.0 - 0.5) * ps, -(0.0 - 1.0 - 0.5) * ps, -2.0).normalized();
        assert!((ray.direction - expected).norm() < 1e-6);
        assert!((ray.direction.norm() - 1.0).abs() < 1e-6);
        assert!(ray.direction.y > 0.0);
        assert!(camera.ray_for_pixel(0, 1).direction.y < ray.direction.y);
    }

    #[test]
    fn test_primary_rays_order_and_count() {
        let camera = PinholeCamera::new(&params(), 3, 2).unwrap();
        let rays = camera.rays();
        assert_eq!(rays.len(), 6);
        let coords: Vec<(usize, usize)> = rays.map(|(x, y, _)| (x, y)).collect();
        assert_eq!(
            coords,
            vec![(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]
        );
    }

    #[test]
    fn test_primary_rays_stop_before_width_and_height() {
        let camera = PinholeCamera::new(&params(), 4, 3).unwrap();
        assert!(camera.rays().all(|(x, y, _)| x < 4 && y < 3));
        let (x, y, _) = camera.rays().last().unwrap();
        assert_eq!((x, y), (3, 2));
    }

    #[test]
    fn test_primary_rays_restartable() {
        let camera = PinholeCamera::new(&params(), 5, 3).unwrap();
        let mut rays = camera.rays();
        let restart = rays.clone();
        let _ = rays.next();
        let first: Vec<_> = restart.collect();
        let second: Vec<_> = camera.rays().collect();
        assert_eq!(first, second);
        assert_eq!(rays.len(), 14);
    }

    #[test]
    fn test_jittered_origin_aims_at_same_view_plane_point() {
        let camera = PinholeCamera::new(&params(), 8, 8).unwrap();
        let target = camera.origin + camera.view_pane_offset(3, 5);
        let origin = camera.origin + camera.lens_offset(Vec3::new(0.1, -0.2, 0.0));
        let ray = camera.ray_for_pixel_from(origin, 3, 5);
        let t = target.distance(origin);
        assert!(ray.point_at_parameter(t).distance(target) < 1e-5);
    }

    #[test]
    fn test_rejects_zero_resolution() {
        assert!(matches!(
            PinholeCamera::new(&params(), 0, 10),
            Err(SceneError::InvalidResolution { .. })
        ));
    }
}

use crate::hittable::{HitRecord, Hittable};
use crate::math::*;
use crate::scene::SceneError;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Sphere {
    pub radius: f32,
    pub center: Point3,
    pub color: RGBColor,
}

impl Sphere {
    pub fn new(radius: f32, center: Point3, color: RGBColor) -> Sphere {
        Sphere {
            radius,
            center,
            color,
        }
    }

    pub fn validate(&self) -> Result<(), SceneError> {
        if !self.radius.is_finite() || self.radius < 0.0 {
            return Err(SceneError::InvalidRadius(self.radius));
        }
        if !self.center.is_finite() {
            return Err(SceneError::NonFinite("sphere center"));
        }
        if !self.color.is_finite() {
            return Err(SceneError::NonFinite("sphere color"));
        }
        Ok(())
    }
}

impl Hittable for Sphere {
    fn hit(&self, r: Ray) -> Option<HitRecord> {
        if self.radius <= 0.0 {
            return None;
        }
        // solve with a unit direction so that roots are world-space distances
        let direction = r.direction.try_normalized()?;
        let oc: Vec3 = r.origin - self.center;
        let b = oc * direction;
        let c = oc * oc - self.radius * self.radius;
        let discriminant = b * b - c;
        if discriminant < 0.0 {
            return None;
        }
        let discriminant_sqrt = discriminant.sqrt();
        let near = -b - discriminant_sqrt;
        let far = -b + discriminant_sqrt;
        let distance = if near >= 0.0 {
            near
        } else if far >= 0.0 {
            // origin is inside the sphere
            far
        } else {
            return None;
        };
        let point = r.origin + direction * distance;
        HitRecord::new(distance, point, point - self.center, self.color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn red_sphere(radius: f32, center: Point3) -> Sphere {
        Sphere::new(radius, center, RGBColor::new(1.0, 0.0, 0.0))
    }

    #[test]
    fn test_hit_through_center() {
        let sphere = red_sphere(2.0, Point3::new(0.0, 0.0, -10.0));
        let ray = Ray::new(Point3::ORIGIN, -Vec3::Z);
        let hit = sphere.hit(ray).unwrap();
        assert!((hit.distance - 8.0).abs() < 1e-5);
        assert!((hit.point.z + 8.0).abs() < 1e-5);
        assert!((hit.normal - Vec3::Z).norm() < 1e-5);
        assert_eq!(hit.color, RGBColor::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_unnormalized_direction_reports_world_distance() {
        let sphere = red_sphere(1.0, Point3::new(5.0, 0.0, 0.0));
        let hit = sphere.hit(Ray::new(Point3::ORIGIN, Vec3::X * 37.0)).unwrap();
        assert!((hit.distance - 4.0).abs() < 1e-5);
    }

    #[test]
    fn test_miss_and_behind() {
        let sphere = red_sphere(1.0, Point3::new(0.0, 0.0, -10.0));
        assert!(sphere.hit(Ray::new(Point3::ORIGIN, Vec3::Y)).is_none());
        assert!(sphere.hit(Ray::new(Point3::ORIGIN, Vec3::Z)).is_none());
    }

    #[test]
    fn test_origin_inside_sphere() {
        let sphere = red_sphere(3.0, Point3::ORIGIN);
        let hit = sphere.hit(Ray::new(Point3::ORIGIN, Vec3::X)).unwrap();
        assert!((hit.distance - 3.0).abs() < 1e-5);
        assert!((hit.normal - Vec3::X).norm() < 1e-5);
    }

    #[test]
    fn test_degenerate_inputs_are_misses() {
        let zero_radius = red_sphere(0.0, Point3::new(0.0, 0.0, -5.0));
        assert!(zero_radius.hit(Ray::new(Point3::ORIGIN, -Vec3::Z)).is_none());
        let sphere = red_sphere(1.0, Point3::new(0.0, 0.0, -5.0));
        assert!(sphere.hit(Ray::new(Point3::ORIGIN, Vec3::ZERO)).is_none());
    }

    #[test]
    fn test_validate() {
        assert!(red_sphere(1.0, Point3::ORIGIN).validate().is_ok());
        assert!(red_sphere(0.0, Point3::ORIGIN).validate().is_ok());
        assert!(red_sphere(-1.0, Point3::ORIGIN).validate().is_err());
        assert!(red_sphere(f32::NAN, Point3::ORIGIN).validate().is_err());
    }
}

use crate::geometry::{CheckerBoard, CheckerMode, Primitive, Sphere};
use crate::math::*;
use crate::scene::{CameraParams, Light, Scene, SceneError};

pub const BUILTIN_SCENES: [&str; 4] = ["spheres", "checkerboard", "stencil", "shadow"];

/// Looks up one of the scenes compiled into the binary.
pub fn builtin_scene(name: &str) -> Option<Result<Scene, SceneError>> {
    let scene = match name {
        "spheres" => spheres(),
        "checkerboard" => checkerboard(),
        "stencil" => stencil(),
        "shadow" => shadow(),
        _ => return None,
    };
    Some(scene)
}

fn default_camera() -> CameraParams {
    CameraParams::new(Point3::new(0.0, 2.0, 10.0), 30.0f32.to_radians(), 1.0)
}

fn floor() -> CheckerBoard {
    CheckerBoard::new(Point3::ORIGIN, Vec3::Y, RGBColor::new(0.9, 0.9, 0.9)).with_cell_size(2.0)
}

pub fn spheres() -> Result<Scene, SceneError> {
    let primitives: Vec<Primitive> = vec![
        Sphere::new(1.0, Point3::new(-2.5, 1.0, -2.0), RGBColor::new(0.8, 0.1, 0.1)).into(),
        Sphere::new(1.5, Point3::new(0.0, 1.5, -4.0), RGBColor::new(0.1, 0.7, 0.2)).into(),
        Sphere::new(1.0, Point3::new(2.5, 1.0, -2.0), RGBColor::new(0.1, 0.2, 0.8)).into(),
        floor().with_secondary(RGBColor::new(0.15, 0.15, 0.15)).into(),
    ];
    let lights = vec![
        Light::new(Point3::new(-6.0, 10.0, 4.0), RGBColor::new(0.6, 0.6, 0.6)),
        Light::new(Point3::new(6.0, 6.0, 2.0), RGBColor::new(0.3, 0.3, 0.25)),
    ];
    Scene::new(
        primitives,
        lights,
        RGBColor::new(0.2, 0.3, 0.5),
        default_camera(),
        200.0,
    )
}

pub fn checkerboard() -> Result<Scene, SceneError> {
    Scene::new(
        vec![floor().into()],
        vec![Light::new(Point3::new(0.0, 20.0, 0.0), RGBColor::WHITE)],
        RGBColor::BLACK,
        default_camera(),
        INFINITY,
    )
}

// the board is a grid of holes, so the sphere below it shows through the dark cells
pub fn stencil() -> Result<Scene, SceneError> {
    let primitives: Vec<Primitive> = vec![
        floor().with_mode(CheckerMode::Stencil).into(),
        Sphere::new(6.0, Point3::new(0.0, -8.0, -6.0), RGBColor::new(0.9, 0.5, 0.1)).into(),
    ];
    Scene::new(
        primitives,
        vec![Light::new(Point3::new(0.0, 20.0, 5.0), RGBColor::WHITE)],
        RGBColor::new(0.05, 0.05, 0.1),
        default_camera(),
        INFINITY,
    )
}

pub fn shadow() -> Result<Scene, SceneError> {
    let primitives: Vec<Primitive> = vec![
        Sphere::new(1.0, Point3::new(0.0, 2.0, -2.0), RGBColor::new(0.7, 0.7, 0.7)).into(),
        CheckerBoard::new(Point3::ORIGIN, Vec3::Y, RGBColor::new(0.8, 0.8, 0.8))
            .with_secondary(RGBColor::new(0.8, 0.8, 0.8))
            .into(),
    ];
    Scene::new(
        primitives,
        vec![Light::new(Point3::new(0.0, 12.0, -2.0), RGBColor::WHITE)],
        RGBColor::BLACK,
        default_camera(),
        INFINITY,
    )
}

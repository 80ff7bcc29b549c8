use crate::geometry::{CheckerBoard, CheckerMode, Primitive, Sphere, DEFAULT_CELL_SIZE};
use crate::math::*;
use crate::scene::{CameraParams, Light, Scene, SceneError};

use serde::{Deserialize, Serialize};

use super::{ColorData, Point3Data, Vec3Data};

#[derive(Serialize, Deserialize, Copy, Clone, Debug)]
pub struct CameraData {
    pub position: Point3Data,
    // degrees
    pub angle: f32,
    pub view_pane_distance: f32,
}

impl From<CameraData> for CameraParams {
    fn from(data: CameraData) -> Self {
        CameraParams::new(
            data.position.into(),
            data.angle.to_radians(),
            data.view_pane_distance,
        )
    }
}

#[derive(Serialize, Deserialize, Copy, Clone, Debug)]
pub struct SphereData {
    pub radius: f32,
    pub center: Point3Data,
    pub color: ColorData,
}

#[derive(Serialize, Deserialize, Copy, Clone, Debug)]
pub struct CheckerBoardData {
    pub point: Point3Data,
    pub normal: Vec3Data,
    pub color: ColorData,
    pub secondary: Option<ColorData>,
    pub cell_size: Option<f32>,
    pub mode: Option<CheckerMode>,
}

#[derive(Serialize, Deserialize, Copy, Clone, Debug)]
#[serde(tag = "type")]
pub enum PrimitiveData {
    Sphere(SphereData),
    CheckerBoard(CheckerBoardData),
}

impl From<PrimitiveData> for Primitive {
    fn from(data: PrimitiveData) -> Self {
        match data {
            PrimitiveData::Sphere(data) => {
                Sphere::new(data.radius, data.center.into(), data.color.into()).into()
            }
            PrimitiveData::CheckerBoard(data) => {
                CheckerBoard::new(data.point.into(), data.normal.into(), data.color.into())
                    .with_secondary(data.secondary.map_or(RGBColor::BLACK, RGBColor::from))
                    .with_cell_size(data.cell_size.unwrap_or(DEFAULT_CELL_SIZE))
                    .with_mode(data.mode.unwrap_or_default())
                    .into()
            }
        }
    }
}

#[derive(Serialize, Deserialize, Copy, Clone, Debug)]
pub struct LightData {
    pub origin: Point3Data,
    pub color: ColorData,
}

impl From<LightData> for Light {
    fn from(data: LightData) -> Self {
        Light::new(data.origin.into(), data.color.into())
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct SceneData {
    pub background: ColorData,
    // omitted means no far plane
    pub horizon_distance: Option<f32>,
    pub camera: CameraData,
    #[serde(default)]
    pub primitives: Vec<PrimitiveData>,
    #[serde(default)]
    pub lights: Vec<LightData>,
}

impl SceneData {
    pub fn into_scene(self) -> Result<Scene, SceneError> {
        Scene::new(
            self.primitives.into_iter().map(Primitive::from).collect(),
            self.lights.into_iter().map(Light::from).collect(),
            self.background.into(),
            self.camera.into(),
            self.horizon_distance.unwrap_or(INFINITY),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
        background = [0.1, 0.2, 0.3]

        [camera]
        position = [0.0, 1.0, 0.0]
        angle = 30.0
        view_pane_distance = 1.0

        [[primitives]]
        type = "Sphere"
        radius = 1.5
        center = [0.0, 1.0, -8.0]
        color = [0.9, 0.1, 0.1]

        [[primitives]]
        type = "CheckerBoard"
        point = [0.0, 0.0, 0.0]
        normal = [0.0, 2.0, 0.0]
        color = [1.0, 1.0, 1.0]
        mode = "Stencil"

        [[lights]]
        origin = [0.0, 10.0, 0.0]
        color = [1.0, 1.0, 1.0]
    "#;

    #[test]
    fn test_minimal_scene() {
        let data: SceneData = toml::from_str(MINIMAL).unwrap();
        let scene = data.into_scene().unwrap();
        assert_eq!(scene.primitives().len(), 2);
        assert_eq!(scene.lights().len(), 1);
        assert_eq!(scene.background(), RGBColor::new(0.1, 0.2, 0.3));
        assert_eq!(scene.horizon_distance(), INFINITY);
        assert!((scene.camera().angle - PI / 6.0).abs() < 1e-6);

        match &scene.primitives()[1] {
            Primitive::CheckerBoard(board) => {
                assert_eq!(board.normal, Vec3::Y);
                assert_eq!(board.cell_size, DEFAULT_CELL_SIZE);
                assert_eq!(board.mode, CheckerMode::Stencil);
                assert_eq!(board.secondary, RGBColor::BLACK);
            }
            _ => panic!("expected a checkerboard"),
        }
    }

    #[test]
    fn test_invalid_radius_is_reported() {
        let data: SceneData = toml::from_str(&MINIMAL.replace("radius = 1.5", "radius = -1.0"))
            .unwrap();
        assert_eq!(data.into_scene().unwrap_err(), SceneError::InvalidRadius(-1.0));
    }

    #[test]
    fn test_invalid_angle_is_reported() {
        let data: SceneData =
            toml::from_str(&MINIMAL.replace("angle = 30.0", "angle = 90.0")).unwrap();
        assert!(matches!(
            data.into_scene(),
            Err(SceneError::InvalidCameraAngle(_))
        ));
    }

    #[test]
    fn test_unknown_primitive_is_rejected() {
        let result: Result<SceneData, _> =
            toml::from_str(&MINIMAL.replace("type = \"Sphere\"", "type = \"Torus\""));
        assert!(result.is_err());
    }
}

pub mod builtin;
pub mod config;
pub mod scene;

pub use builtin::{builtin_scene, BUILTIN_SCENES};
pub use config::{get_settings, Config, RenderSettings, RendererType, Resolution, TOMLConfig};
pub use scene::SceneData;

use crate::scene::Scene;

use anyhow::Context;
use serde::de::DeserializeOwned;

use std::fs;
use std::path::Path;

pub type Vec3Data = [f32; 3];
pub type Point3Data = [f32; 3];
pub type ColorData = [f32; 3];

fn load_arbitrary<T>(filepath: &Path) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    info!("loading file at {}", filepath.display());
    let input = fs::read_to_string(filepath)
        .with_context(|| format!("failed to read {}", filepath.display()))?;
    debug!("done: {} bytes", input.len());
    let data: T = toml::from_str(&input)
        .with_context(|| format!("failed to parse {}", filepath.display()))?;
    Ok(data)
}

pub fn load_scene(filepath: impl AsRef<Path>) -> anyhow::Result<SceneData> {
    load_arbitrary(filepath.as_ref())
}

/// Resolves `identifier` as a built-in scene name first, then as a path to a scene file.
pub fn construct_scene(identifier: &str) -> anyhow::Result<Scene> {
    if let Some(scene) = builtin_scene(identifier) {
        info!("using built-in scene {}", identifier);
        return scene.with_context(|| format!("built-in scene {} is invalid", identifier));
    }
    let data = load_scene(identifier)?;
    data.into_scene()
        .with_context(|| format!("scene file {} is invalid", identifier))
}

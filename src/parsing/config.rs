use crate::integrator::ShadingMode;

use serde::Deserialize;

use std::path::Path;

use super::load_arbitrary;

pub const DEFAULT_FILENAME: &str = "render";

#[derive(Deserialize, Copy, Clone, Debug, PartialEq)]
pub struct Resolution {
    pub width: usize,
    pub height: usize,
}

impl Default for Resolution {
    fn default() -> Self {
        Resolution {
            width: 640,
            height: 480,
        }
    }
}

#[derive(Deserialize, Copy, Clone, Debug, PartialEq)]
#[serde(tag = "type")]
pub enum RendererType {
    Naive,
    Tiled { tile_rows: Option<usize> },
}

#[derive(Clone, Debug, PartialEq)]
pub struct RenderSettings {
    pub filename: String,
    pub resolution: Resolution,
    pub samples: u16,
    pub jitter: f32,
    pub seed: u64,
    pub threads: usize,
    pub exposure: f32,
    pub shading: ShadingMode,
    pub write_exr: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        RenderSettings {
            filename: String::from(DEFAULT_FILENAME),
            resolution: Resolution::default(),
            samples: 1,
            jitter: 0.0,
            seed: 0,
            threads: num_cpus::get(),
            exposure: 0.0,
            shading: ShadingMode::default(),
            write_exr: false,
        }
    }
}

#[derive(Deserialize, Clone, Debug, Default)]
pub struct TOMLRenderSettings {
    pub filename: Option<String>,
    pub resolution: Option<Resolution>,
    pub samples: Option<u16>,
    pub jitter: Option<f32>,
    pub seed: Option<u64>,
    pub threads: Option<usize>,
    pub exposure: Option<f32>,
    pub shading: Option<ShadingMode>,
    pub write_exr: Option<bool>,
}

impl From<TOMLRenderSettings> for RenderSettings {
    fn from(data: TOMLRenderSettings) -> Self {
        let default = RenderSettings::default();
        RenderSettings {
            filename: data.filename.unwrap_or(default.filename),
            resolution: data.resolution.unwrap_or(default.resolution),
            samples: data.samples.unwrap_or(default.samples).max(1),
            jitter: data.jitter.unwrap_or(default.jitter).max(0.0),
            seed: data.seed.unwrap_or(default.seed),
            threads: data.threads.unwrap_or(default.threads).max(1),
            exposure: data.exposure.unwrap_or(default.exposure),
            shading: data.shading.unwrap_or(default.shading),
            write_exr: data.write_exr.unwrap_or(default.write_exr),
        }
    }
}

#[derive(Deserialize, Clone, Debug)]
pub struct TOMLConfig {
    pub scene: String,
    pub renderer: RendererType,
    #[serde(default)]
    pub render_settings: TOMLRenderSettings,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub scene: String,
    pub renderer: RendererType,
    pub render_settings: RenderSettings,
}

impl From<TOMLConfig> for Config {
    fn from(data: TOMLConfig) -> Self {
        Config {
            scene: data.scene,
            renderer: data.renderer,
            render_settings: data.render_settings.into(),
        }
    }
}

pub fn get_settings(filepath: impl AsRef<Path>) -> anyhow::Result<TOMLConfig> {
    let mut settings: TOMLConfig = load_arbitrary(filepath.as_ref())?;
    let num_cpus = num_cpus::get();
    settings.render_settings.threads = match settings.render_settings.threads {
        Some(expr) => Some(expr),
        None => Some(num_cpus),
    };
    Ok(settings)
}

extern crate rust_raytracer as root;

use root::parsing::config::*;
use root::parsing::{construct_scene, get_settings};
use root::prelude::*;
use root::tonemap::{write_exr, write_png};

#[macro_use]
extern crate tracing;

use anyhow::Context;
use structopt::StructOpt;

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

#[derive(Debug, StructOpt)]
#[structopt(rename_all = "kebab-case")]
struct Opt {
    #[structopt(long, default_value = "data/config.toml")]
    pub config_file: String,
    /// built-in scene name or path to a scene file, overrides the config
    #[structopt(long)]
    pub scene: Option<String>,
    #[structopt(long)]
    pub width: Option<usize>,
    #[structopt(long)]
    pub height: Option<usize>,
    #[structopt(short = "n", long)]
    pub dry_run: bool,
    #[structopt(long, default_value = "info")]
    pub log_level: String,
}

fn construct_renderer(config: &Config) -> Box<dyn Renderer> {
    match config.renderer {
        RendererType::Naive => Box::new(NaiveRenderer::new()),
        RendererType::Tiled { tile_rows } => match tile_rows {
            Some(rows) => Box::new(TiledRenderer::new(rows)),
            None => Box::new(TiledRenderer::default()),
        },
    }
}

fn run(opts: Opt) -> anyhow::Result<()> {
    let mut config: TOMLConfig = get_settings(&opts.config_file)
        .with_context(|| format!("couldn't read config {}", opts.config_file))?;

    // override scene and resolution based on provided command line arguments
    config.scene = opts.scene.unwrap_or(config.scene);
    let mut resolution = config.render_settings.resolution.unwrap_or_default();
    resolution.width = opts.width.unwrap_or(resolution.width);
    resolution.height = opts.height.unwrap_or(resolution.height);
    config.render_settings.resolution = Some(resolution);

    let config = Config::from(config);
    let settings = &config.render_settings;

    rayon::ThreadPoolBuilder::new()
        .num_threads(settings.threads)
        .build_global()
        .context("failed to build the global thread pool")?;

    let scene = construct_scene(&config.scene)?;
    let camera = PinholeCamera::new(
        scene.camera(),
        settings.resolution.width,
        settings.resolution.height,
    )?;
    let renderer = construct_renderer(&config);

    if opts.dry_run {
        info!("dry run, scene {} parsed successfully", config.scene);
        return Ok(());
    }

    let now = Instant::now();
    let mut film = Film::new(camera.width, camera.height, RGBColor::BLACK);
    let profile = renderer.render(&scene, &camera, settings, &mut film);
    let elapsed = (now.elapsed().as_millis() as f32) / 1000.0;
    profile.pretty_print(elapsed, settings.threads);

    let output = PathBuf::from("output");
    fs::create_dir_all(&output).context("failed to create output directory")?;

    let mut tonemapper = Clamp::new(settings.exposure, false);
    tonemapper.initialize(&film);
    write_png(
        &film,
        &tonemapper,
        output.join(format!("{}.png", settings.filename)),
    )?;
    if settings.write_exr {
        write_exr(&film, output.join(format!("{}.exr", settings.filename)))?;
    }
    Ok(())
}

fn main() -> ExitCode {
    let opts = Opt::from_args();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| opts.log_level.as_str().into()),
        )
        .init();

    match run(opts) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

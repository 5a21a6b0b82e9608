use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use spinframe::config::{DEFAULT_FPS, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use spinframe::export;
use spinframe::prelude::*;
use spinframe::render::POINT_SIZE;
use spinframe::transform::DEFAULT_DZ;

#[derive(Parser, Debug)]
#[command(name = "spinframe", version, about = "Spinning 3D wireframe renderer")]
struct Cli {
    /// Surface width in pixels.
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: u32,

    /// Surface height in pixels.
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    height: u32,

    /// Target frames per second; also sets the animation timestep.
    #[arg(long, default_value_t = DEFAULT_FPS)]
    fps: u32,

    /// Background color (#RRGGBB).
    #[arg(long, default_value = "#101010")]
    background: String,

    /// Foreground color for points and lines (#RRGGBB).
    #[arg(long, default_value = "#50FF50")]
    foreground: String,

    /// Depth offset applied after rotation.
    #[arg(long, default_value_t = DEFAULT_DZ, allow_negative_numbers = true)]
    dz: f32,

    /// Side of the square vertex marker in pixels.
    #[arg(long, default_value_t = POINT_SIZE)]
    point_size: f32,

    /// Scene to draw: cube, pyramid or octahedron.
    #[arg(long, default_value_t = MeshPreset::Cube)]
    mesh: MeshPreset,

    /// Render this many frames without a window, as fast as possible.
    #[arg(long)]
    frames: Option<u64>,

    /// With --frames, write every frame as a PNG into this directory.
    #[arg(long, requires = "frames")]
    out_dir: Option<PathBuf>,
}

impl Cli {
    fn config(&self) -> anyhow::Result<Config> {
        Ok(Config {
            width: self.width,
            height: self.height,
            target_fps: self.fps,
            background: spinframe::colors::parse_hex(&self.background)
                .context("parse --background")?,
            foreground: spinframe::colors::parse_hex(&self.foreground)
                .context("parse --foreground")?,
            dz: self.dz,
            point_size: self.point_size,
            mesh: self.mesh,
        })
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = cli.config()?;
    let mut engine = Engine::new(config).context("build renderer session")?;

    match cli.frames {
        Some(frames) => run_headless(&mut engine, frames, cli.out_dir.as_deref()),
        None => run_windowed(&mut engine),
    }
}

fn run_headless(
    engine: &mut Engine,
    frames: u64,
    out_dir: Option<&std::path::Path>,
) -> anyhow::Result<()> {
    if let Some(dir) = out_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("create output dir '{}'", dir.display()))?;
    }

    let mut renderer = Renderer::new(engine.config().width, engine.config().height);
    let mut done = 0;
    let total = if frames == 0 {
        0
    } else {
        engine.run(&mut renderer, &mut NoDelay, |renderer, _| {
            done += 1;
            if let Some(dir) = out_dir {
                export::save_png(renderer, &export::frame_path(dir, done))?;
            }
            Ok(if done >= frames {
                LoopControl::Stop
            } else {
                LoopControl::Continue
            })
        })?
    };

    match out_dir {
        Some(dir) => tracing::info!(frames = total, dir = %dir.display(), "frames written"),
        None => tracing::info!(frames = total, "frames rendered"),
    }
    Ok(())
}

#[cfg(feature = "window")]
fn run_windowed(engine: &mut Engine) -> anyhow::Result<()> {
    let (width, height) = (engine.config().width, engine.config().height);
    let mut window = Window::new("spinframe", width, height).context("open window")?;
    let mut renderer = Renderer::new(width, height);

    engine.run(&mut renderer, &mut FixedDelay, |renderer, _| {
        window.present(renderer.as_bytes())?;
        match window.poll_events() {
            WindowEvent::Quit => return Ok(LoopControl::Stop),
            WindowEvent::Resize(w, h) => {
                window.resize(w, h)?;
                renderer.resize(w, h);
            }
            WindowEvent::None => {}
        }
        Ok(LoopControl::Continue)
    })?;
    Ok(())
}

#[cfg(not(feature = "window"))]
fn run_windowed(_engine: &mut Engine) -> anyhow::Result<()> {
    anyhow::bail!("built without the `window` feature; use --frames for headless rendering")
}

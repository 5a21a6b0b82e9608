//! Frame driver.
//!
//! The [`Engine`] struct is the renderer session: it owns the active mesh, the
//! animation state and the session configuration. Each activation advances
//! the animation by one nominal timestep, clears the surface, draws every
//! vertex as a marker and every face edge as a line, then hands control to the
//! scheduler until the next activation.

use crate::config::Config;
use crate::error::RenderResult;
use crate::mesh::Mesh;
use crate::render::{clear_surface, draw_line, draw_point, Surface};
use crate::scheduler::FrameScheduler;
use crate::transform::Transform;

/// What the per-frame hook wants the loop to do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Stop,
}

/// Draw counts for a single activation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub points: usize,
    pub lines: usize,
    /// Points or lines dropped because a coordinate was not finite.
    pub skipped: usize,
}

pub struct Engine {
    config: Config,
    mesh: Mesh,
    transform: Transform,
    frames: u64,
}

impl Engine {
    /// Validates `config` and builds its mesh preset.
    pub fn new(config: Config) -> RenderResult<Self> {
        let mesh = config.mesh.build()?;
        Self::with_mesh(config, mesh)
    }

    /// Uses `mesh` instead of the preset named in `config`.
    pub fn with_mesh(config: Config, mesh: Mesh) -> RenderResult<Self> {
        config.validate()?;
        let transform = Transform::new(config.dz);
        tracing::debug!(
            mesh = mesh.name(),
            fps = config.target_fps,
            dz = config.dz,
            "engine ready"
        );
        Ok(Self {
            config,
            mesh,
            transform,
            frames: 0,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    /// Number of completed activations.
    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    /// Advance the animation state by one nominal frame interval.
    pub fn update(&mut self) {
        self.transform.advance(self.config.frame_interval());
    }

    /// Draw the current state onto `surface`.
    ///
    /// Every point and every edge endpoint goes through the full pipeline on
    /// its own; vertices shared by several edges are transformed again each
    /// time.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) -> FrameStats {
        let (width, height) = (surface.width(), surface.height());
        let Config {
            background,
            foreground,
            point_size,
            ..
        } = self.config;
        let vertices = self.mesh.vertices();
        let mut stats = FrameStats::default();

        clear_surface(surface, background);

        for &vertex in vertices {
            let p = self.transform.to_screen(vertex, width, height);
            if draw_point(surface, p, point_size, foreground) {
                stats.points += 1;
            } else {
                stats.skipped += 1;
            }
        }

        for (a, b) in self.mesh.edges() {
            let p0 = self.transform.to_screen(vertices[a], width, height);
            let p1 = self.transform.to_screen(vertices[b], width, height);
            if draw_line(surface, p0, p1, foreground) {
                stats.lines += 1;
            } else {
                stats.skipped += 1;
            }
        }

        stats
    }

    /// One activation: update, then render.
    pub fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S) -> FrameStats {
        self.update();
        let stats = self.render(surface);
        self.frames += 1;
        tracing::trace!(
            frame = self.frames,
            angle = self.transform.angle(),
            points = stats.points,
            lines = stats.lines,
            skipped = stats.skipped,
            "frame rendered"
        );
        stats
    }

    /// Run activations until `on_frame` returns [`LoopControl::Stop`] or an
    /// error.
    ///
    /// `on_frame` sees the surface right after each activation (present it,
    /// save it, poll the host). Between activations the scheduler waits the
    /// nominal frame delay. Returns the total number of activations.
    #[tracing::instrument(skip_all, fields(mesh = %self.mesh.name(), fps = self.config.target_fps))]
    pub fn run<S, D, F>(
        &mut self,
        surface: &mut S,
        scheduler: &mut D,
        mut on_frame: F,
    ) -> RenderResult<u64>
    where
        S: Surface + ?Sized,
        D: FrameScheduler + ?Sized,
        F: FnMut(&mut S, &FrameStats) -> RenderResult<LoopControl>,
    {
        let delay = self.config.frame_delay();
        tracing::info!(?delay, "frame loop started");

        loop {
            let stats = self.frame(surface);
            if on_frame(surface, &stats)? == LoopControl::Stop {
                break;
            }
            scheduler.schedule_once(delay);
        }

        tracing::info!(frames = self.frames, angle = self.transform.angle(), "frame loop stopped");
        Ok(self.frames)
    }
}

//! Session configuration.
//!
//! Everything here is fixed for the lifetime of a session. The defaults draw
//! the cube pushed one unit into the screen, green on near-black, on an
//! 800×800 surface at 30 FPS.

use std::time::Duration;

use crate::colors;
use crate::error::{RenderError, RenderResult};
use crate::mesh::MeshPreset;
use crate::render::POINT_SIZE;
use crate::transform::DEFAULT_DZ;

pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 800;
pub const DEFAULT_FPS: u32 = 30;

/// Largest surface a session accepts, in pixels (a 1 GiB ARGB buffer).
pub const MAX_SURFACE_PIXELS: usize = 1 << 28;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub width: u32,
    pub height: u32,
    pub target_fps: u32,
    /// ARGB8888
    pub background: u32,
    /// ARGB8888
    pub foreground: u32,
    pub dz: f32,
    pub point_size: f32,
    pub mesh: MeshPreset,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            target_fps: DEFAULT_FPS,
            background: colors::BACKGROUND,
            foreground: colors::FOREGROUND,
            dz: DEFAULT_DZ,
            point_size: POINT_SIZE,
            mesh: MeshPreset::default(),
        }
    }
}

impl Config {
    pub fn validate(&self) -> RenderResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(RenderError::config(format!(
                "surface must be non-empty, got {}x{}",
                self.width, self.height
            )));
        }
        let pixels = (self.width as usize).checked_mul(self.height as usize);
        if !pixels.is_some_and(|n| n <= MAX_SURFACE_PIXELS) {
            return Err(RenderError::config(format!(
                "surface {}x{} exceeds {MAX_SURFACE_PIXELS} pixels",
                self.width, self.height
            )));
        }
        if self.target_fps == 0 {
            return Err(RenderError::config("target fps must be positive"));
        }
        if !self.dz.is_finite() {
            return Err(RenderError::config("dz must be finite"));
        }
        if !(self.point_size.is_finite() && self.point_size >= 0.0) {
            return Err(RenderError::config("point size must be a non-negative number"));
        }
        Ok(())
    }

    /// Nominal seconds per frame, `1 / target_fps`.
    pub fn frame_interval(&self) -> f32 {
        1.0 / self.target_fps as f32
    }

    /// Delay between activations, `1000 / target_fps` milliseconds.
    pub fn frame_delay(&self) -> Duration {
        Duration::from_secs(1) / self.target_fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn defaults_are_valid() {
        let config = Config::default();
        config.validate().unwrap();
        assert_eq!(config.width, 800);
        assert_eq!(config.target_fps, 30);
        assert_eq!(config.dz, 1.0);
    }

    #[test]
    fn frame_timing_follows_fps() {
        let config = Config {
            target_fps: 40,
            ..Config::default()
        };
        assert_relative_eq!(config.frame_interval(), 0.025);
        assert_eq!(config.frame_delay(), Duration::from_millis(25));
    }

    #[test]
    fn rejects_zero_sized_surface() {
        let config = Config {
            height: 0,
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(RenderError::Config(_))));
    }

    #[test]
    fn rejects_oversized_surface() {
        let config = Config {
            width: 65536,
            height: 65536,
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(RenderError::Config(_))));

        let largest = Config {
            width: 16384,
            height: 16384,
            ..Config::default()
        };
        largest.validate().unwrap();
    }

    #[test]
    fn rejects_zero_fps() {
        let config = Config {
            target_fps: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_non_finite_dz() {
        let config = Config {
            dz: f32::NAN,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
}

//! A small real-time 3D wireframe renderer.
//!
//! A fixed scene is spun in the X–Z plane, pushed in front of an eye at the
//! origin, perspective-projected and drawn as vertex markers plus edges onto a
//! CPU color buffer. SDL2 is used only to show that buffer in a window.
//!
//! # Quick Start
//!
//! ```ignore
//! use spinframe::prelude::*;
//!
//! let mut engine = Engine::new(Config::default())?;
//! let mut renderer = Renderer::new(800, 800);
//! engine.frame(&mut renderer);
//! ```

pub mod colors;
pub mod config;
pub mod engine;
pub mod error;
pub mod export;
pub mod math;
pub mod mesh;
pub mod projection;
pub mod render;
pub mod scheduler;
pub mod transform;
#[cfg(feature = "window")]
pub mod window;

pub use config::Config;
pub use engine::{Engine, FrameStats, LoopControl};
pub use error::{RenderError, RenderResult};
pub use mesh::{Face, Mesh, MeshError, MeshPreset};
pub use transform::Transform;

/// Prelude module for convenient imports.
///
/// # Example
/// ```ignore
/// use spinframe::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::Config;
    pub use crate::engine::{Engine, FrameStats, LoopControl};
    pub use crate::error::{RenderError, RenderResult};

    // Scene
    pub use crate::mesh::{Face, Mesh, MeshPreset};
    pub use crate::transform::Transform;

    // Math
    pub use crate::math::vec2::{NdcPoint, ScreenPoint};
    pub use crate::math::vec3::Vec3;
    pub use crate::projection::{project, to_screen};

    // Rendering
    pub use crate::render::{Renderer, Surface};
    pub use crate::scheduler::{FixedDelay, FrameScheduler, NoDelay};

    #[cfg(feature = "window")]
    pub use crate::window::{Window, WindowEvent};
}

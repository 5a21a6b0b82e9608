//! Drawing surfaces and the primitives drawn on them.
//!
//! The frame driver never touches pixels directly. It talks to a [`Surface`],
//! an immediate-mode 2D target that can clear itself, fill rectangles and
//! stroke lines. [`Renderer`] is the CPU implementation backed by an
//! ARGB8888 color buffer.

mod draw;
mod renderer;

pub use draw::{clear_surface, draw_line, draw_point, POINT_SIZE};
pub use renderer::Renderer;

use crate::math::vec2::ScreenPoint;

/// An immediate-mode 2D drawing target in pixel units.
///
/// Implementations ignore anything that falls outside the surface.
pub trait Surface {
    fn width(&self) -> u32;

    fn height(&self) -> u32;

    /// Fill the whole surface with `color`.
    fn clear(&mut self, color: u32);

    /// Fill the axis-aligned rectangle with top-left corner `(x, y)`.
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: u32);

    /// Stroke a straight segment from `p0` to `p1`.
    fn stroke_line(&mut self, p0: ScreenPoint, p1: ScreenPoint, color: u32);
}

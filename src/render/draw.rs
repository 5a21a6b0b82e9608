//! Pixel-space draw primitives.
//!
//! Points whose coordinates are not finite (a vertex projected from `z`
//! at or very near zero) are skipped silently rather than handed to the
//! surface.

use super::Surface;
use crate::math::vec2::ScreenPoint;

/// Side length, in pixels, of the square vertex marker.
pub const POINT_SIZE: f32 = 10.0;

/// Erase the surface to `background`. Called once at the start of a frame.
pub fn clear_surface<S: Surface + ?Sized>(surface: &mut S, background: u32) {
    surface.clear(background);
}

/// Square marker of side `size` centered on `p`.
///
/// Returns whether anything was handed to the surface.
pub fn draw_point<S: Surface + ?Sized>(
    surface: &mut S,
    p: ScreenPoint,
    size: f32,
    color: u32,
) -> bool {
    if !p.is_finite() {
        tracing::trace!(x = p.x, y = p.y, "skipping non-finite point");
        return false;
    }
    let half = size / 2.0;
    surface.fill_rect(p.x - half, p.y - half, size, size, color);
    true
}

/// Straight segment from `p0` to `p1`.
///
/// Returns whether anything was handed to the surface.
pub fn draw_line<S: Surface + ?Sized>(
    surface: &mut S,
    p0: ScreenPoint,
    p1: ScreenPoint,
    color: u32,
) -> bool {
    if !p0.is_finite() || !p1.is_finite() {
        tracing::trace!(?p0, ?p1, "skipping non-finite line");
        return false;
    }
    surface.stroke_line(p0, p1, color);
    true
}

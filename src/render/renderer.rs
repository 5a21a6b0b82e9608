//! CPU drawing surface.
//!
//! Provides the [`Renderer`] struct which owns the color buffer and implements
//! [`Surface`] with plain pixel loops and Bresenham lines.

use super::Surface;
use crate::colors;
use crate::math::vec2::ScreenPoint;

pub struct Renderer {
    color_buffer: Vec<u32>,
    width: u32,
    height: u32,
}

impl Renderer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            color_buffer: vec![colors::BACKGROUND; buffer_len(width, height)],
            width,
            height,
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.color_buffer = vec![colors::BACKGROUND; buffer_len(width, height)];
        self.width = width;
        self.height = height;
    }

    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: u32) {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            let index = (y as u32 * self.width + x as u32) as usize;
            self.color_buffer[index] = color;
        }
    }

    /// Get the color at (x, y), or None if out of bounds.
    #[inline]
    pub fn pixel(&self, x: i32, y: i32) -> Option<u32> {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            Some(self.color_buffer[(y as u32 * self.width + x as u32) as usize])
        } else {
            None
        }
    }

    pub fn pixels(&self) -> &[u32] {
        &self.color_buffer
    }

    pub fn draw_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: u32) {
        // Clip to the buffer first so huge off-screen rects cost nothing.
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = x.saturating_add(width).min(self.width as i32);
        let y1 = y.saturating_add(height).min(self.height as i32);
        if x0 >= x1 || y0 >= y1 {
            return;
        }

        for py in y0..y1 {
            let row = (py as u32 * self.width) as usize;
            self.color_buffer[row + x0 as usize..row + x1 as usize].fill(color);
        }
    }

    /// Draws a line between two points using Bresenham's line algorithm.
    ///
    /// Bresenham's algorithm determines which pixels to illuminate using only
    /// integer arithmetic. It tracks an "error" term that represents the
    /// distance between the ideal line and the current pixel, and steps along
    /// the minor axis whenever that error crosses a threshold.
    pub fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: u32) {
        let dx = (x1 - x0).abs();
        let dy = (y1 - y0).abs();

        let x_incr_direction = if x0 < x1 { 1 } else { -1 };
        let y_incr_direction = if y0 < y1 { 1 } else { -1 };

        // Positive error favors x movement, negative favors y.
        let mut err = dx - dy;

        let mut x = x0;
        let mut y = y0;

        loop {
            self.set_pixel(x, y, color);

            if x == x1 && y == y1 {
                break;
            }

            let e2 = 2 * err;

            if e2 > -dy {
                err -= dy;
                x += x_incr_direction;
            }

            // Both branches may fire, giving a diagonal step.
            if e2 < dx {
                err += dx;
                y += y_incr_direction;
            }
        }
    }

    /// The color buffer as raw bytes, ready for an ARGB8888 texture upload.
    pub fn as_bytes(&self) -> &[u8] {
        // SAFETY: u32 has no padding and any byte pattern is a valid u8; the
        // slice covers exactly the buffer's memory and borrows `self`.
        unsafe {
            std::slice::from_raw_parts(
                self.color_buffer.as_ptr() as *const u8,
                self.color_buffer.len() * 4,
            )
        }
    }
}

impl Surface for Renderer {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn clear(&mut self, color: u32) {
        self.color_buffer.fill(color);
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: u32) {
        // Clip before casting: a huge marker must not saturate to i32 limits.
        let (x0, x1) = clip_span(x, width, self.width);
        let (y0, y1) = clip_span(y, height, self.height);
        self.draw_rect(x0, y0, x1 - x0, y1 - y0, color);
    }

    fn stroke_line(&mut self, p0: ScreenPoint, p1: ScreenPoint, color: u32) {
        // Keep one pixel of margin so lines leaving the edge still reach it.
        let bounds = (-1.0, -1.0, self.width as f32, self.height as f32);
        let Some((p0, p1)) = clip_segment(p0, p1, bounds) else {
            return;
        };
        self.draw_line(
            p0.x.round() as i32,
            p0.y.round() as i32,
            p1.x.round() as i32,
            p1.y.round() as i32,
            color,
        );
    }
}

/// Number of pixels in a `width × height` buffer.
///
/// Saturates instead of wrapping; `Config::validate` keeps sessions far below
/// that point.
fn buffer_len(width: u32, height: u32) -> usize {
    (width as usize).saturating_mul(height as usize)
}

/// Pixel span `[start, end)` of the run `start..start + len`, rounded and
/// clamped to `[0, limit]` in f64.
fn clip_span(start: f32, len: f32, limit: u32) -> (i32, i32) {
    let s = (start as f64).round();
    let e = s + (len as f64).round();
    let limit = limit as f64;
    (s.clamp(0.0, limit) as i32, e.clamp(0.0, limit) as i32)
}

/// Liang–Barsky clip of a segment against `(x_min, y_min, x_max, y_max)`.
///
/// Returns `None` when the segment lies entirely outside. Keeps Bresenham
/// from walking billions of off-screen pixels when a vertex projects far
/// away. Works in f64 so endpoints around 1e9 still clip to the pixel.
fn clip_segment(
    p0: ScreenPoint,
    p1: ScreenPoint,
    (x_min, y_min, x_max, y_max): (f32, f32, f32, f32),
) -> Option<(ScreenPoint, ScreenPoint)> {
    let (x0, y0) = (p0.x as f64, p0.y as f64);
    let dx = p1.x as f64 - x0;
    let dy = p1.y as f64 - y0;
    let mut t0 = 0.0_f64;
    let mut t1 = 1.0_f64;

    for (p, q) in [
        (-dx, x0 - x_min as f64),
        (dx, x_max as f64 - x0),
        (-dy, y0 - y_min as f64),
        (dy, y_max as f64 - y0),
    ] {
        if p == 0.0 {
            // Parallel to this boundary: inside or not at all.
            if q < 0.0 {
                return None;
            }
        } else {
            let r = q / p;
            if p < 0.0 {
                if r > t1 {
                    return None;
                }
                t0 = t0.max(r);
            } else {
                if r < t0 {
                    return None;
                }
                t1 = t1.min(r);
            }
        }
    }

    Some((
        ScreenPoint::new((x0 + t0 * dx) as f32, (y0 + t0 * dy) as f32),
        ScreenPoint::new((x0 + t1 * dx) as f32, (y0 + t1 * dy) as f32),
    ))
}

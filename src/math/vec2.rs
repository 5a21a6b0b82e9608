//! Two-dimensional points.
//!
//! The pipeline produces 2D points in two different coordinate spaces, so
//! each space gets its own type:
//!
//! - [`NdcPoint`]: normalized device space, nominally `[-1, 1]` on both
//!   axes with Y pointing up.
//! - [`ScreenPoint`]: pixel space, `x` in `[0, width]` and `y` in
//!   `[0, height]` with Y pointing down.
//!
//! Converting between them goes through [`crate::projection::to_screen`].

/// A point in normalized device space (Y up).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NdcPoint {
    pub x: f32,
    pub y: f32,
}

impl NdcPoint {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A point in pixel space (Y down).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenPoint {
    pub x: f32,
    pub y: f32,
}

impl ScreenPoint {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// True when both coordinates are finite and safe to rasterize.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

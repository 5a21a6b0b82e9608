//! Animation state and the per-vertex transform pipeline.
//!
//! A [`Transform`] carries the two scalars that animate the scene: the
//! rotation `angle` in the X–Z plane and the depth offset `dz`. Every drawn
//! vertex goes through the same fixed composition:
//!
//! ```text
//! to_screen(project(translate_z(rotate_xz(v, angle), dz)), width, height)
//! ```

use std::f32::consts::PI;

use crate::math::vec2::ScreenPoint;
use crate::math::vec3::Vec3;
use crate::projection::{project, to_screen};

/// Angular velocity of the spin in radians per simulated second.
pub const ANGULAR_SPEED: f32 = PI / 6.0;

/// Starting depth offset; keeps the default scene in front of the eye.
pub const DEFAULT_DZ: f32 = 1.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    angle: f32,
    dz: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self::new(DEFAULT_DZ)
    }
}

impl Transform {
    /// Creates the initial state: `angle = 0` and the given depth offset.
    pub fn new(dz: f32) -> Self {
        Self { angle: 0.0, dz }
    }

    /// Rotation angle in radians. Grows without bound.
    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// Depth offset applied after rotation.
    pub fn dz(&self) -> f32 {
        self.dz
    }

    /// Advances the rotation by one nominal timestep of `dt` seconds.
    ///
    /// The step is `ANGULAR_SPEED * dt`; the actual elapsed wall time is never
    /// consulted.
    pub fn advance(&mut self, dt: f32) {
        self.angle += ANGULAR_SPEED * dt;
    }

    /// Object space to view space: rotate, then push along Z.
    #[inline]
    pub fn apply(&self, v: Vec3) -> Vec3 {
        v.rotate_xz(self.angle).translate_z(self.dz)
    }

    /// Full pipeline from an object-space vertex to a pixel coordinate.
    #[inline]
    pub fn to_screen(&self, v: Vec3, width: u32, height: u32) -> ScreenPoint {
        to_screen(project(self.apply(v)), width, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn starts_at_zero_angle() {
        let t = Transform::default();
        assert_eq!(t.angle(), 0.0);
        assert_eq!(t.dz(), 1.0);
    }

    #[test]
    fn advance_uses_nominal_step() {
        let mut t = Transform::default();
        let dt = 1.0 / 30.0;
        t.advance(dt);
        assert_relative_eq!(t.angle(), PI * dt / 6.0, max_relative = 1e-6);
        assert_eq!(t.dz(), DEFAULT_DZ);
    }

    #[test]
    fn apply_pushes_vertex_forward() {
        let t = Transform::default();
        let v = t.apply(Vec3::new(-0.25, 0.25, 0.25));
        assert_relative_eq!(v.x, -0.25);
        assert_relative_eq!(v.y, 0.25);
        assert_relative_eq!(v.z, 1.25);
    }

    #[test]
    fn cube_corner_regression() {
        let t = Transform::default();
        let p = t.to_screen(Vec3::new(-0.25, 0.25, 0.25), 800, 800);
        assert_relative_eq!(p.x, 320.0, epsilon = 1e-3);
        assert_relative_eq!(p.y, 320.0, epsilon = 1e-3);
    }

    #[test]
    fn rotation_is_applied_before_translation() {
        let mut t = Transform::new(2.0);
        // Quarter turn: 3 simulated seconds at pi/6 rad/s.
        t.advance(3.0);
        let v = t.apply(Vec3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(v.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(v.z, 3.0, epsilon = 1e-6);
    }
}

/// A point (or direction) in object space.
///
/// Immutable value type: every transform returns a new `Vec3`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Rotates the point within the X–Z plane (around the Y axis).
    ///
    /// Applies the standard 2D rotation matrix to `(x, z)`:
    /// `x' = x·cos − z·sin`, `z' = x·sin + z·cos`. `y` passes through.
    pub fn rotate_xz(&self, angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            x: self.x * cos - self.z * sin,
            y: self.y,
            z: self.x * sin + self.z * cos,
        }
    }

    /// Moves the point along the Z (depth) axis.
    pub fn translate_z(&self, dz: f32) -> Self {
        Self {
            x: self.x,
            y: self.y,
            z: self.z + dz,
        }
    }

    /// Length of the projection onto the X–Z plane.
    pub fn xz_length(&self) -> f32 {
        (self.x.powi(2) + self.z.powi(2)).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::{FRAC_PI_2, PI};

    fn samples() -> [Vec3; 5] {
        [
            Vec3::new(-0.25, 0.25, 0.25),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, -3.0, 2.0),
            Vec3::new(4.5, 1.5, -0.75),
            Vec3::ZERO,
        ]
    }

    #[test]
    fn rotate_by_zero_is_identity() {
        for p in samples() {
            let r = p.rotate_xz(0.0);
            assert_relative_eq!(r.x, p.x);
            assert_relative_eq!(r.y, p.y);
            assert_relative_eq!(r.z, p.z);
        }
    }

    #[test]
    fn rotate_keeps_y() {
        for p in samples() {
            for angle in [0.3, -1.2, PI, 17.0] {
                assert_eq!(p.rotate_xz(angle).y, p.y);
            }
        }
    }

    #[test]
    fn rotate_preserves_xz_length() {
        for p in samples() {
            for angle in [0.3, -1.2, PI, 17.0] {
                assert_relative_eq!(p.rotate_xz(angle).xz_length(), p.xz_length(), epsilon = 1e-5);
            }
        }
    }

    #[test]
    fn rotations_compose_additively() {
        let p = Vec3::new(0.7, -0.2, 1.3);
        let (a, b) = (0.4, 1.1);
        let stepped = p.rotate_xz(a).rotate_xz(b);
        let direct = p.rotate_xz(a + b);
        assert_relative_eq!(stepped.x, direct.x, epsilon = 1e-5);
        assert_relative_eq!(stepped.y, direct.y, epsilon = 1e-5);
        assert_relative_eq!(stepped.z, direct.z, epsilon = 1e-5);
    }

    #[test]
    fn quarter_turn_maps_x_onto_z() {
        let r = Vec3::new(1.0, 0.0, 0.0).rotate_xz(FRAC_PI_2);
        assert_relative_eq!(r.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(r.z, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn translate_z_composes() {
        for p in samples() {
            let (d1, d2) = (1.0, -0.375);
            assert_eq!(p.translate_z(d1).translate_z(d2), p.translate_z(d1 + d2));
        }
    }

    #[test]
    fn translate_z_leaves_x_and_y() {
        let p = Vec3::new(2.0, 3.0, 4.0).translate_z(1.5);
        assert_eq!(p, Vec3::new(2.0, 3.0, 5.5));
    }
}

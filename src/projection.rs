//! Perspective projection and viewport mapping.
//!
//! The eye sits at the origin looking down +Z. A point is projected by the
//! perspective divide alone, then stretched over the pixel grid by
//! [`to_screen`]. There is no field of view or near plane: callers keep `z`
//! away from zero (the default scene does it with a depth offset of 1).

use crate::math::vec2::{NdcPoint, ScreenPoint};
use crate::math::vec3::Vec3;

/// Perspective divide: `{x / z, y / z}`.
///
/// Singular at `z == 0`; as `z` approaches zero the result grows without
/// bound and may become infinite or NaN.
#[inline]
pub fn project(p: Vec3) -> NdcPoint {
    NdcPoint::new(p.x / p.z, p.y / p.z)
}

/// Maps a normalized point onto a `width` × `height` pixel grid.
///
/// `x = -1` lands on column 0 and `x = 1` on column `width`; `y = 1` lands on
/// row 0 and `y = -1` on row `height` (screen Y grows downward). Values
/// outside `[-1, 1]` are not clamped.
#[inline]
pub fn to_screen(p: NdcPoint, width: u32, height: u32) -> ScreenPoint {
    let (w, h) = (width as f32, height as f32);
    ScreenPoint::new(w / 2.0 + p.x * w / 2.0, (1.0 - (p.y + 1.0) / 2.0) * h)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn point_on_axis_projects_to_origin() {
        for k in [0.1, 1.0, 1.25, -2.0, 500.0] {
            assert_eq!(project(Vec3::new(0.0, 0.0, k)), NdcPoint::ORIGIN);
        }
    }

    #[test]
    fn project_divides_by_depth() {
        let p = project(Vec3::new(-0.25, 0.25, 1.25));
        assert_relative_eq!(p.x, -0.2, epsilon = 1e-6);
        assert_relative_eq!(p.y, 0.2, epsilon = 1e-6);
    }

    #[test]
    fn project_at_zero_depth_is_not_finite() {
        let p = project(Vec3::new(1.0, 1.0, 0.0));
        assert!(!p.x.is_finite());
        assert!(!p.y.is_finite());
    }

    #[test]
    fn corners_map_with_y_flip() {
        let (w, h) = (800, 600);
        assert_eq!(
            to_screen(NdcPoint::new(-1.0, -1.0), w, h),
            ScreenPoint::new(0.0, 600.0)
        );
        assert_eq!(
            to_screen(NdcPoint::new(1.0, 1.0), w, h),
            ScreenPoint::new(800.0, 0.0)
        );
    }

    #[test]
    fn origin_maps_to_center() {
        assert_eq!(
            to_screen(NdcPoint::ORIGIN, 800, 600),
            ScreenPoint::new(400.0, 300.0)
        );
        assert_eq!(
            to_screen(NdcPoint::ORIGIN, 641, 479),
            ScreenPoint::new(320.5, 239.5)
        );
    }

    #[test]
    fn out_of_range_is_not_clamped() {
        let p = to_screen(NdcPoint::new(2.0, -3.0), 100, 100);
        assert_relative_eq!(p.x, 150.0);
        assert_relative_eq!(p.y, 200.0);
    }
}

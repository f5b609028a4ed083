//! Plane geometry for the wrapping world
//!
//! Vector arithmetic itself comes from `glam::Vec2`; this module adds the
//! rotation convention (screen space, y down, 0 = up), polygon and segment
//! tests, and toroidal wrapping.

use glam::Vec2;

use crate::{UP, normalize_angle};

/// Segments whose direction cross product falls below this are parallel
const PARALLEL_EPSILON: f32 = 1e-6;

/// Rotate `v` by `angle` radians (clockwise on a y-down screen)
#[inline]
pub fn rotate(v: Vec2, angle: f32) -> Vec2 {
    Vec2::from_angle(angle).rotate(v)
}

/// Signed angle that turns `from` onto `to`, in [-π, π)
#[inline]
pub fn angle_between(from: Vec2, to: Vec2) -> f32 {
    normalize_angle(from.perp_dot(to).atan2(from.dot(to)))
}

/// Unit heading for a ship rotation
#[inline]
pub fn heading_from_rotation(rotation: f32) -> Vec2 {
    rotate(UP, rotation)
}

/// Even-odd containment test against a closed ring (last point == first)
pub fn point_in_polygon(point: Vec2, ring: &[Vec2]) -> bool {
    let mut inside = false;
    for edge in ring.windows(2) {
        let (a, b) = (edge[0], edge[1]);
        if (a.y > point.y) != (b.y > point.y) {
            let x_cross = (b.x - a.x) * (point.y - a.y) / (b.y - a.y) + a.x;
            if point.x < x_cross {
                inside = !inside;
            }
        }
    }
    inside
}

/// Intersection point of segments `a1-b1` and `a2-b2`, if they cross
///
/// Parallel (and collinear) segments never report an intersection.
pub fn segment_intersection(a1: Vec2, b1: Vec2, a2: Vec2, b2: Vec2) -> Option<Vec2> {
    let d1 = b1 - a1;
    let d2 = b2 - a2;
    let denom = d1.perp_dot(d2);
    if denom.abs() < PARALLEL_EPSILON {
        return None;
    }

    let offset = a2 - a1;
    let t = offset.perp_dot(d2) / denom;
    let u = offset.perp_dot(d1) / denom;
    if (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u) {
        Some(a1 + d1 * t)
    } else {
        None
    }
}

/// First crossing between any edge of two closed rings
pub fn rings_intersection(a: &[Vec2], b: &[Vec2]) -> Option<Vec2> {
    a.windows(2).find_map(|ea| {
        b.windows(2)
            .find_map(|eb| segment_intersection(ea[0], ea[1], eb[0], eb[1]))
    })
}

/// Wrap a single coordinate into [0, extent)
///
/// A non-positive extent has no interior; the value is returned unchanged.
#[inline]
fn wrap_axis(value: f32, extent: f32) -> f32 {
    if extent <= 0.0 {
        return value;
    }
    let wrapped = value.rem_euclid(extent);
    // rem_euclid can round up to `extent` for tiny negative inputs
    if wrapped >= extent { 0.0 } else { wrapped }
}

/// Wrap a position onto the torus `[0,w) x [0,h)`
#[inline]
pub fn wrap_position(pos: Vec2, size: Vec2) -> Vec2 {
    Vec2::new(wrap_axis(pos.x, size.x), wrap_axis(pos.y, size.y))
}

/// Whether `pos` lies inside the closed rect `[0,w] x [0,h]`
#[inline]
pub fn in_screen(pos: Vec2, size: Vec2) -> bool {
    pos.x >= 0.0 && pos.x <= size.x && pos.y >= 0.0 && pos.y <= size.y
}

/// Screen boundary as a closed ring, matching the asteroid ring layout
pub fn screen_ring(size: Vec2) -> [Vec2; 5] {
    [
        Vec2::ZERO,
        Vec2::new(0.0, size.y),
        size,
        Vec2::new(size.x, 0.0),
        Vec2::ZERO,
    ]
}

/// Offsets used to draw an entity once per neighbouring screen tile
pub fn wrap_copy_offsets(size: Vec2) -> [Vec2; 5] {
    [
        Vec2::ZERO,
        Vec2::new(-size.x, 0.0),
        Vec2::new(size.x, 0.0),
        Vec2::new(0.0, -size.y),
        Vec2::new(0.0, size.y),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    fn square(half: f32) -> Vec<Vec2> {
        vec![
            Vec2::new(-half, -half),
            Vec2::new(half, -half),
            Vec2::new(half, half),
            Vec2::new(-half, half),
            Vec2::new(-half, -half),
        ]
    }

    #[test]
    fn test_rotate_quarter_turn_is_clockwise_on_screen() {
        // Up rotated a quarter turn points right
        let v = rotate(UP, FRAC_PI_2);
        assert!((v - Vec2::new(1.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn test_angle_between_matches_rotate() {
        let target = Vec2::new(3.0, 4.0);
        let angle = angle_between(UP, target);
        let dir = heading_from_rotation(angle);
        assert!((dir - target.normalize()).length() < 1e-5);
    }

    #[test]
    fn test_angle_between_straight_down() {
        let angle = angle_between(UP, Vec2::new(0.0, 1.0));
        assert!((angle.abs() - PI).abs() < 1e-5);
    }

    #[test]
    fn test_point_in_polygon() {
        let ring = square(10.0);
        assert!(point_in_polygon(Vec2::ZERO, &ring));
        assert!(point_in_polygon(Vec2::new(9.0, -9.0), &ring));
        assert!(!point_in_polygon(Vec2::new(11.0, 0.0), &ring));
        assert!(!point_in_polygon(Vec2::new(0.0, -30.0), &ring));
    }

    #[test]
    fn test_segment_intersection_crossing() {
        let hit = segment_intersection(
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(0.0, 10.0),
            Vec2::new(10.0, 0.0),
        );
        let point = hit.expect("diagonals cross");
        assert!((point - Vec2::new(5.0, 5.0)).length() < 1e-4);
    }

    #[test]
    fn test_segment_intersection_disjoint_and_parallel() {
        // Would cross if extended
        assert!(
            segment_intersection(
                Vec2::new(0.0, 0.0),
                Vec2::new(1.0, 1.0),
                Vec2::new(0.0, 10.0),
                Vec2::new(10.0, 0.0),
            )
            .is_none()
        );
        assert!(
            segment_intersection(
                Vec2::new(0.0, 0.0),
                Vec2::new(10.0, 0.0),
                Vec2::new(0.0, 1.0),
                Vec2::new(10.0, 1.0),
            )
            .is_none()
        );
    }

    #[test]
    fn test_rings_intersection() {
        let a = square(10.0);
        let b: Vec<Vec2> = square(10.0).iter().map(|p| *p + Vec2::new(15.0, 0.0)).collect();
        assert!(rings_intersection(&a, &b).is_some());

        let far: Vec<Vec2> = square(10.0).iter().map(|p| *p + Vec2::new(50.0, 0.0)).collect();
        assert!(rings_intersection(&a, &far).is_none());
    }

    #[test]
    fn test_wrap_position_edges() {
        let size = Vec2::new(800.0, 600.0);
        assert_eq!(wrap_position(Vec2::new(-1.0, 10.0), size), Vec2::new(799.0, 10.0));
        assert_eq!(wrap_position(Vec2::new(800.0, 600.0), size), Vec2::ZERO);
        assert_eq!(wrap_position(Vec2::new(1650.0, -1250.0), size), Vec2::new(50.0, 550.0));
    }

    #[test]
    fn test_wrap_on_empty_screen_keeps_position() {
        let p = Vec2::new(400.0, 300.0);
        let wrapped = wrap_position(p, Vec2::ZERO);
        assert!(wrapped.is_finite());
        assert_eq!(wrapped, p);
    }

    proptest! {
        #[test]
        fn prop_wrap_lands_inside(x in -1.0e5f32..1.0e5, y in -1.0e5f32..1.0e5) {
            let size = Vec2::new(800.0, 600.0);
            let p = wrap_position(Vec2::new(x, y), size);
            prop_assert!(p.x >= 0.0 && p.x < size.x);
            prop_assert!(p.y >= 0.0 && p.y < size.y);
        }

        #[test]
        fn prop_rotate_preserves_length(x in -100.0f32..100.0, y in -100.0f32..100.0, a in -10.0f32..10.0) {
            let v = Vec2::new(x, y);
            prop_assert!((rotate(v, a).length() - v.length()).abs() < 1e-2);
        }
    }
}

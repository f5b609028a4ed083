//! Collision detection and response for polygon asteroids
//!
//! Bullets and the ship are treated as points; asteroids collide with each
//! other edge against edge and bounce away from the contact point.

use glam::Vec2;

use super::geometry::{self, point_in_polygon, segment_intersection};
use super::state::Asteroid;

/// Whether a world-space point lies inside an asteroid
#[inline]
pub fn point_hits_asteroid(point: Vec2, asteroid: &Asteroid) -> bool {
    asteroid.contains(point)
}

/// Test every edge of `a` against every edge of `b`
///
/// Returns the crossing point of the last intersecting edge pair, which is
/// the contact the bounce is computed from.
pub fn asteroid_asteroid_collision(a: &Asteroid, b: &Asteroid) -> Option<Vec2> {
    let mut contact = None;
    for ea in a.points.windows(2) {
        let (a1, b1) = (ea[0] + a.pos, ea[1] + a.pos);
        for eb in b.points.windows(2) {
            let (a2, b2) = (eb[0] + b.pos, eb[1] + b.pos);
            if let Some(point) = segment_intersection(a1, b1, a2, b2) {
                contact = Some(point);
            }
        }
    }
    contact
}

/// Redirect `velocity` away from `contact`, keeping its speed
///
/// A body centred exactly on the contact point keeps its velocity.
pub fn deflect_velocity(position: Vec2, velocity: Vec2, contact: Vec2) -> Vec2 {
    match (position - contact).try_normalize() {
        Some(away) => away * velocity.length(),
        None => velocity,
    }
}

/// Whether an asteroid's polygon is now wholly inside the screen
///
/// The centre must be inside the screen rect and no polygon edge may cross a
/// screen edge.
pub fn fully_on_screen(asteroid: &Asteroid, screen: Vec2) -> bool {
    let rect = geometry::screen_ring(screen);
    if !point_in_polygon(asteroid.pos, &rect) {
        return false;
    }
    let ring: Vec<Vec2> = asteroid.world_ring().collect();
    geometry::rings_intersection(&ring, &rect).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::AsteroidSize;

    fn diamond(pos: Vec2, r: f32) -> Asteroid {
        Asteroid {
            pos,
            vel: Vec2::ZERO,
            points: vec![
                Vec2::new(0.0, -r),
                Vec2::new(r, 0.0),
                Vec2::new(0.0, r),
                Vec2::new(-r, 0.0),
                Vec2::new(0.0, -r),
            ],
            size: AsteroidSize::Small,
            has_entered_screen: true,
        }
    }

    #[test]
    fn test_overlapping_asteroids_collide() {
        let a = diamond(Vec2::new(100.0, 100.0), 16.0);
        let b = diamond(Vec2::new(120.0, 100.0), 16.0);
        let point = asteroid_asteroid_collision(&a, &b).expect("edges cross");
        assert!(point.x > 100.0 && point.x < 120.0);
    }

    #[test]
    fn test_distant_asteroids_miss() {
        let a = diamond(Vec2::new(100.0, 100.0), 16.0);
        let b = diamond(Vec2::new(200.0, 100.0), 16.0);
        assert!(asteroid_asteroid_collision(&a, &b).is_none());
    }

    #[test]
    fn test_deflect_points_away_and_keeps_speed() {
        let vel = Vec2::new(30.0, 40.0);
        let out = deflect_velocity(Vec2::new(100.0, 100.0), vel, Vec2::new(110.0, 100.0));
        assert!((out.length() - 50.0).abs() < 1e-3);
        assert!(out.x < 0.0);
        assert!(out.y.abs() < 1e-3);
    }

    #[test]
    fn test_deflect_degenerate_contact_keeps_velocity() {
        let vel = Vec2::new(3.0, 4.0);
        let p = Vec2::new(10.0, 10.0);
        assert_eq!(deflect_velocity(p, vel, p), vel);
    }

    #[test]
    fn test_fully_on_screen() {
        let screen = Vec2::new(800.0, 600.0);
        assert!(fully_on_screen(&diamond(Vec2::new(400.0, 300.0), 16.0), screen));
        // Centre inside but straddling the left edge
        assert!(!fully_on_screen(&diamond(Vec2::new(5.0, 300.0), 16.0), screen));
        // Centre outside
        assert!(!fully_on_screen(&diamond(Vec2::new(-40.0, 300.0), 16.0), screen));
    }

    #[test]
    fn test_point_hits_asteroid() {
        let a = diamond(Vec2::new(50.0, 50.0), 16.0);
        assert!(point_hits_asteroid(Vec2::new(52.0, 48.0), &a));
        assert!(!point_hits_asteroid(Vec2::new(70.0, 70.0), &a));
    }
}

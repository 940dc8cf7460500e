//! Ball vs wall collision detection and response
//!
//! Walls are finite segments with no inside or outside. The contact normal is
//! always oriented toward the side the ball center is on, so the same wall can
//! be hit from either face.

use glam::DVec2;
use serde::Serialize;

use super::ball::Ball;
use crate::consts::DEPENETRATION_MARGIN;
use crate::level::{Hole, LevelModel, WallSegment};

/// What the ball touched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CollisionKind {
    Wall,
}

/// Emitted once per resolved contact so collaborators can play feedback
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CollisionEvent {
    pub kind: CollisionKind,
    /// Closest point on the wall at the moment of contact
    pub point: DVec2,
}

/// Contact between the ball disc and one wall segment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallContact {
    /// Closest point on the segment to the ball center
    pub point: DVec2,
    /// Unit normal pointing from the wall toward the ball (zero if undefined)
    pub normal: DVec2,
    /// Center to contact point distance
    pub distance: f64,
    /// How far the disc overlaps the wall
    pub penetration: f64,
}

/// Clamped projection parameter of `p` on the segment, in `[0, 1]`.
///
/// Zero-length segments return 0.
pub fn segment_param(p: DVec2, wall: &WallSegment) -> f64 {
    let d = wall.direction();
    let len_sq = d.length_squared();
    if len_sq == 0.0 {
        return 0.0;
    }
    ((p - wall.start).dot(d) / len_sq).clamp(0.0, 1.0)
}

/// Nearest point on the finite segment to `p`
#[inline]
pub fn closest_point_on_segment(p: DVec2, wall: &WallSegment) -> DVec2 {
    wall.start + wall.direction() * segment_param(p, wall)
}

/// Check the ball disc against one wall.
///
/// Touching (distance equal to the radius) counts as a contact.
pub fn ball_wall_collision(ball: &Ball, wall: &WallSegment) -> Option<WallContact> {
    let point = closest_point_on_segment(ball.pos, wall);
    let offset = ball.pos - point;
    let distance = offset.length();
    if distance > ball.radius {
        return None;
    }

    let normal = if wall.is_degenerate() {
        // A single point: push straight away from it
        offset.normalize_or_zero()
    } else {
        let d = wall.direction();
        let n = DVec2::new(-d.y, d.x).normalize();
        let side = offset.dot(n);
        if side < 0.0 {
            -n
        } else {
            n
        }
    };

    // Center exactly on the wall gives no side: send the ball back the way it came
    let normal = if distance == 0.0 && ball.vel.dot(normal) > 0.0 {
        -normal
    } else if normal == DVec2::ZERO {
        -ball.vel.normalize_or_zero()
    } else {
        normal
    };

    Some(WallContact {
        point,
        normal,
        distance,
        penetration: ball.radius - distance,
    })
}

/// Standard reflection: v' = v - 2(v·n)n
#[inline]
pub fn reflect_velocity(velocity: DVec2, normal: DVec2) -> DVec2 {
    velocity - 2.0 * velocity.dot(normal) * normal
}

/// Push the ball out of the wall and bounce it.
///
/// Only velocity heading into the wall is reflected; a ball already leaving
/// the wall keeps its velocity.
pub fn apply_contact(ball: &mut Ball, contact: &WallContact, bounce_damping: f64) {
    if contact.penetration > 0.0 {
        ball.pos += contact.normal * (contact.penetration + DEPENETRATION_MARGIN);
    }

    if ball.vel.dot(contact.normal) < 0.0 {
        ball.vel = reflect_velocity(ball.vel, contact.normal) * bounce_damping;
    }
}

/// Resolve at most one wall contact for this tick.
///
/// Walls are tested in group order, then segment order; the first contact is
/// resolved and the rest wait for the next tick.
pub fn resolve_collisions(
    ball: &mut Ball,
    level: &LevelModel,
    bounce_damping: f64,
) -> Option<CollisionEvent> {
    let contact = level
        .walls()
        .find_map(|wall| ball_wall_collision(ball, wall))?;

    apply_contact(ball, &contact, bounce_damping);
    log::debug!(
        "Wall hit at ({:.1}, {:.1}), velocity now ({:.2}, {:.2})",
        contact.point.x,
        contact.point.y,
        ball.vel.x,
        ball.vel.y
    );

    Some(CollisionEvent {
        kind: CollisionKind::Wall,
        point: contact.point,
    })
}

/// The whole ball disc fits inside the hole (touching the rim is not enough)
pub fn check_win(ball: &Ball, hole: &Hole) -> bool {
    ball.pos.distance(hole.position) < hole.radius - ball.radius
}

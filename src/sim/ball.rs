//! Ball entity and friction integrator

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::consts::{BALL_RADIUS, MIN_VELOCITY, STUCK_SPEED};

/// The golf ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: DVec2,
    pub vel: DVec2,
    pub radius: f64,
    pub is_moving: bool,
}

/// Axis-aligned box around the ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: DVec2,
    pub max: DVec2,
}

impl Ball {
    /// Ball at rest at `pos`
    pub fn new(pos: DVec2) -> Self {
        Self {
            pos,
            vel: DVec2::ZERO,
            radius: BALL_RADIUS,
            is_moving: false,
        }
    }

    /// Put the ball back at `pos`, at rest (level start / retry)
    pub fn reset(&mut self, pos: DVec2) {
        self.pos = pos;
        self.vel = DVec2::ZERO;
        self.is_moving = false;
    }

    /// Replace the velocity with a shot
    pub fn apply_impulse(&mut self, vel: DVec2) {
        self.vel = vel;
        self.is_moving = true;
    }

    #[inline]
    pub fn speed(&self) -> f64 {
        self.vel.length()
    }

    pub fn contains_point(&self, p: DVec2) -> bool {
        self.pos.distance(p) <= self.radius
    }

    pub fn bounds(&self) -> Bounds {
        let r = DVec2::splat(self.radius);
        Bounds {
            min: self.pos - r,
            max: self.pos + r,
        }
    }

    /// Zero the velocity and mark the ball at rest
    #[inline]
    pub fn stop(&mut self) {
        self.vel = DVec2::ZERO;
        self.is_moving = false;
    }

    /// Both velocity components are under the rest threshold
    #[inline]
    pub fn below_rest_threshold(&self) -> bool {
        self.vel.x.abs() < MIN_VELOCITY && self.vel.y.abs() < MIN_VELOCITY
    }
}

/// Advance the ball by one tick under friction.
///
/// A ball whose velocity is under the rest threshold on both axes is snapped
/// to zero instead of decaying forever.
pub fn step_ball(ball: &mut Ball, friction: f64) {
    if ball.below_rest_threshold() {
        ball.stop();
        return;
    }

    ball.is_moving = true;
    ball.vel *= friction;
    ball.pos += ball.vel;
}

/// Force a crawling ball to rest.
///
/// Each axis can stay above the per-axis threshold while the resultant speed
/// is negligible, typically after repeated wall contacts. Returns true when
/// the ball was stopped.
pub fn prevent_stuck(ball: &mut Ball) -> bool {
    let speed = ball.speed();
    if speed > 0.0 && speed < STUCK_SPEED && ball.is_moving {
        ball.stop();
        return true;
    }
    false
}

//! Shot aiming
//!
//! The player drags from the ball toward a point. Drag length sets power up to
//! a cap; the aim line shown to the player is the capped drag.

use glam::DVec2;
use serde::Serialize;

use crate::settings::Settings;

/// A resolved aim
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Aim {
    /// Unit direction of the shot
    pub direction: DVec2,
    /// Aim line end point (ball position plus capped drag)
    pub line_end: DVec2,
    /// Shot power derived from the capped drag length
    pub power: f64,
    /// Velocity to give the ball
    pub launch_velocity: DVec2,
}

/// Compute the aim for a drag from `ball_pos` to `target`.
///
/// Returns `None` when the target sits on the ball center (no direction).
pub fn aim_shot(ball_pos: DVec2, target: DVec2, settings: &Settings) -> Option<Aim> {
    let delta = target - ball_pos;
    let distance = delta.length();
    if distance <= 0.0 {
        return None;
    }

    let direction = delta / distance;
    let length = distance.min(settings.max_aim_length);
    let power = length / settings.power_divisor;

    Some(Aim {
        direction,
        line_end: ball_pos + direction * length,
        power,
        launch_velocity: direction * power * settings.launch_scale,
    })
}

//! Mini golf physics core
//!
//! Core modules:
//! - `level`: Level text parsing, level model, level catalog
//! - `sim`: Deterministic simulation (ball kinematics, wall collisions, round state)
//! - `settings`: Physics tuning
//! - `scorecard`: Best strokes per level
//!
//! Everything operates in one fixed logical space of 1280x720 units.
//! Mapping to screen pixels is left to the presentation layer.

pub mod error;
pub mod level;
pub mod scorecard;
pub mod settings;
pub mod sim;

pub use error::{GolfError, GolfResult};
pub use level::{LevelCatalog, LevelModel, ParsedLevel, parse_level};
pub use scorecard::Scorecard;
pub use settings::Settings;

use glam::DVec2;

/// Game configuration constants
pub mod consts {
    /// Logical playfield size
    pub const GAME_WIDTH: f64 = 1280.0;
    pub const GAME_HEIGHT: f64 = 720.0;

    /// Ball radius (fixed for every level)
    pub const BALL_RADIUS: f64 = 8.0;
    /// Hole radius unless a level says otherwise
    pub const HOLE_RADIUS: f64 = 12.0;

    /// Per-axis speed below which the ball is snapped to rest
    pub const MIN_VELOCITY: f64 = 0.1;
    /// Resultant speed below which a moving ball is forced to rest
    pub const STUCK_SPEED: f64 = 0.3;
    /// Extra push applied when moving the ball out of a wall
    pub const DEPENETRATION_MARGIN: f64 = 0.1;

    /// Velocity retained after a wall bounce
    pub const BOUNCE_DAMPING: f64 = 0.8;

    /// Per-tick friction multipliers
    pub const NORMAL_FRICTION: f64 = 0.98;
    pub const SAND_FRICTION: f64 = 0.95;
    pub const ICE_FRICTION: f64 = 0.99;
    /// Ice value used by the older level set
    pub const ICE_FRICTION_LEGACY: f64 = 0.995;

    /// Aim line is capped at this length
    pub const MAX_AIM_LENGTH: f64 = 100.0;
    /// Aim length is divided by this to get shot power
    pub const POWER_DIVISOR: f64 = 5.0;
    /// Shot power to launch speed
    pub const LAUNCH_SCALE: f64 = 0.5;
}

/// Convert an angle in degrees (0 = +x, clockwise on screen since y points down)
/// into a unit direction
#[inline]
pub fn direction_from_degrees(degrees: f64) -> DVec2 {
    let rad = degrees.to_radians();
    DVec2::new(rad.cos(), rad.sin())
}

//! Deterministic simulation module
//!
//! All gameplay physics lives here. This module must be pure and deterministic:
//! - Fixed unit timestep only, one tick per frame
//! - No randomness
//! - Stable iteration order (wall groups, then segments, in level order)
//! - No rendering, audio or platform dependencies

pub mod ball;
pub mod collision;
pub mod shot;
pub mod state;
pub mod surface;
pub mod tick;

pub use ball::{Ball, Bounds, prevent_stuck, step_ball};
pub use collision::{
    CollisionEvent, CollisionKind, WallContact, apply_contact, ball_wall_collision, check_win,
    closest_point_on_segment, reflect_velocity, resolve_collisions, segment_param,
};
pub use shot::{Aim, aim_shot};
pub use state::{GameEvent, GamePhase, Round};
pub use surface::friction_for;
pub use tick::{run_until_settled, tick};

//! Round state
//!
//! One `Round` per level attempt: the parsed level, the ball, the stroke count
//! and the phase. Switching levels replaces the whole value.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::shot::{Aim, aim_shot};
use crate::level::LevelModel;
use crate::settings::Settings;

/// Current phase of play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ball at rest, waiting for a shot
    Aiming,
    /// Ball in motion, ticking
    Rolling,
    /// Ticks are ignored until resumed
    Paused,
    /// Ball is in the hole
    Holed,
}

/// Things collaborators react to (sounds, HUD, level complete screen)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum GameEvent {
    /// A shot was taken
    Shot { strokes: u32, velocity: DVec2 },
    /// The ball bounced off a wall
    WallHit { point: DVec2 },
    /// The ball came to rest outside the hole
    BallStopped { position: DVec2 },
    /// The ball dropped in
    Holed { strokes: u32, par: u32 },
}

/// State of one level attempt
#[derive(Debug, Clone, Serialize)]
pub struct Round {
    pub level_index: usize,
    pub level: LevelModel,
    pub par: u32,
    pub ball: Ball,
    pub strokes: u32,
    pub phase: GamePhase,
    /// Phase to return to when unpausing
    resume_phase: GamePhase,
    /// Events since the last drain
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl Round {
    pub fn new(level_index: usize, level: LevelModel, par: u32) -> Self {
        let ball = Ball::new(level.ball_start.position);
        Self {
            level_index,
            level,
            par,
            ball,
            strokes: 0,
            phase: GamePhase::Aiming,
            resume_phase: GamePhase::Aiming,
            events: Vec::new(),
        }
    }

    /// Whether a shot can be taken now
    pub fn can_shoot(&self) -> bool {
        self.phase == GamePhase::Aiming && !self.ball.is_moving
    }

    /// Aim preview for a drag toward `target` (for drawing the aim line)
    pub fn aim(&self, target: DVec2, settings: &Settings) -> Option<Aim> {
        aim_shot(self.ball.pos, target, settings)
    }

    /// Shoot toward `target`. Returns false if no shot was taken.
    ///
    /// A shot counts as a stroke even when the drag has no length, matching
    /// a click without drag.
    pub fn shoot(&mut self, target: DVec2, settings: &Settings) -> bool {
        if !self.can_shoot() {
            return false;
        }

        let velocity = match self.aim(target, settings) {
            Some(aim) => aim.launch_velocity,
            None => DVec2::ZERO,
        };
        self.ball.apply_impulse(velocity);
        self.strokes += 1;
        self.phase = GamePhase::Rolling;
        self.events.push(GameEvent::Shot {
            strokes: self.strokes,
            velocity,
        });
        log::debug!(
            "Stroke {} on level {}: velocity ({:.2}, {:.2})",
            self.strokes,
            self.level_index + 1,
            velocity.x,
            velocity.y
        );
        true
    }

    /// Start the level over: ball back at the start, strokes cleared
    pub fn retry(&mut self) {
        self.ball.reset(self.level.ball_start.position);
        self.strokes = 0;
        self.phase = GamePhase::Aiming;
        self.resume_phase = GamePhase::Aiming;
        self.events.clear();
    }

    pub fn pause(&mut self) {
        if matches!(self.phase, GamePhase::Aiming | GamePhase::Rolling) {
            self.resume_phase = self.phase;
            self.phase = GamePhase::Paused;
        }
    }

    pub fn resume(&mut self) {
        if self.phase == GamePhase::Paused {
            self.phase = self.resume_phase;
        }
    }

    pub fn is_holed(&self) -> bool {
        self.phase == GamePhase::Holed
    }

    /// Take the pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

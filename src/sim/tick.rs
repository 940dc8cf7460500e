//! Per-frame simulation tick
//!
//! Order within a tick is fixed: friction step, one wall collision, win check,
//! rest check, stuck check.

use super::ball::{prevent_stuck, step_ball};
use super::collision::{check_win, resolve_collisions};
use super::state::{GameEvent, GamePhase, Round};
use crate::settings::Settings;

/// Advance the round by one tick.
///
/// Only a rolling ball is simulated; every other phase is left as is.
/// Returns the events raised during this tick (they are also queued on the
/// round).
pub fn tick(round: &mut Round, settings: &Settings) -> Vec<GameEvent> {
    if round.phase != GamePhase::Rolling {
        return Vec::new();
    }

    let mut events = Vec::new();
    let friction = settings.friction_for(round.level.surface);
    step_ball(&mut round.ball, friction);

    if let Some(hit) = resolve_collisions(&mut round.ball, &round.level, settings.bounce_damping) {
        events.push(GameEvent::WallHit { point: hit.point });
    }

    if check_win(&round.ball, &round.level.hole) {
        round.phase = GamePhase::Holed;
        events.push(GameEvent::Holed {
            strokes: round.strokes,
            par: round.par,
        });
        log::info!(
            "Level {} holed in {} (par {})",
            round.level_index + 1,
            round.strokes,
            round.par
        );
    } else if round.ball.below_rest_threshold() {
        round.ball.stop();
        events.push(settle(round));
    } else if prevent_stuck(&mut round.ball) {
        log::debug!("Ball forced to rest at low speed");
        events.push(settle(round));
    }

    round.events.extend_from_slice(&events);
    events
}

/// Back to aiming after the ball stops outside the hole
fn settle(round: &mut Round) -> GameEvent {
    round.phase = GamePhase::Aiming;
    GameEvent::BallStopped {
        position: round.ball.pos,
    }
}

/// Tick until the ball rests, drops, or `max_ticks` runs out.
/// Returns the number of ticks run.
pub fn run_until_settled(round: &mut Round, settings: &Settings, max_ticks: u32) -> u32 {
    let mut ticks = 0;
    while round.phase == GamePhase::Rolling && ticks < max_ticks {
        tick(round, settings);
        ticks += 1;
    }
    ticks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::parse_level;
    use glam::DVec2;

    fn round_from(text: &str) -> Round {
        Round::new(0, parse_level(text).model, 3)
    }

    #[test]
    fn test_tick_ignores_aiming_and_paused() {
        let settings = Settings::default();
        let mut round = round_from("900,300;T\n100,300;B");
        assert!(tick(&mut round, &settings).is_empty());
        assert_eq!(round.ball.pos, DVec2::new(100.0, 300.0));

        round.shoot(DVec2::new(200.0, 300.0), &settings);
        round.pause();
        let before = round.ball.clone();
        assert!(tick(&mut round, &settings).is_empty());
        assert_eq!(round.ball, before);
    }

    #[test]
    fn test_ball_rolls_to_rest_and_returns_to_aiming() {
        let settings = Settings::default();
        let mut round = round_from("1200,700;T\n100,300;B");
        round.shoot(DVec2::new(150.0, 300.0), &settings);

        let ticks = run_until_settled(&mut round, &settings, 5_000);

        assert!(ticks < 5_000);
        assert_eq!(round.phase, GamePhase::Aiming);
        assert_eq!(round.ball.vel, DVec2::ZERO);
        assert!(!round.ball.is_moving);
        assert!(round.ball.pos.x > 100.0);
        assert!(
            round
                .events
                .iter()
                .any(|e| matches!(e, GameEvent::BallStopped { .. }))
        );
        assert!(round.can_shoot());
    }

    #[test]
    fn test_sand_stops_sooner_than_ice() {
        let settings = Settings::default();
        let distance = |surface_line: &str| {
            let mut round = round_from(&format!("{}\n1200,700;T\n100,300;B", surface_line));
            round.shoot(DVec2::new(200.0, 300.0), &settings);
            run_until_settled(&mut round, &settings, 10_000);
            round.ball.pos.x - 100.0
        };
        let sand = distance("S");
        let normal = distance("");
        let ice = distance("G");
        assert!(sand < normal);
        assert!(normal < ice);
    }

    #[test]
    fn test_wall_bounce_emits_event() {
        let settings = Settings::default();
        let mut round = round_from("300,0;300,720\n1200,700;T\n250,300;B");
        round.shoot(DVec2::new(350.0, 300.0), &settings);

        run_until_settled(&mut round, &settings, 5_000);

        assert!(
            round
                .events
                .iter()
                .any(|e| matches!(e, GameEvent::WallHit { point } if point.x == 300.0))
        );
        // Bounced back, stays left of the wall
        assert!(round.ball.pos.x < 300.0 - round.ball.radius);
    }

    #[test]
    fn test_ball_drops_in_hole() {
        let settings = Settings::default();
        let mut round = round_from("200,300;T\n100,300;B");
        round.shoot(DVec2::new(150.0, 300.0), &settings);

        run_until_settled(&mut round, &settings, 5_000);

        assert!(round.is_holed());
        assert!(
            round
                .events
                .iter()
                .any(|e| matches!(e, GameEvent::Holed { strokes: 1, par: 3 }))
        );
        // No further simulation once holed
        let pos = round.ball.pos;
        assert!(tick(&mut round, &settings).is_empty());
        assert_eq!(round.ball.pos, pos);
    }

    #[test]
    fn test_crawling_diagonal_ball_is_stopped() {
        let settings = Settings::default();
        let mut round = round_from("1200,700;T\n100,300;B");
        round.shoot(DVec2::new(150.0, 300.0), &settings);
        round.ball.vel = DVec2::new(0.2, 0.2);

        let events = tick(&mut round, &settings);

        assert_eq!(round.phase, GamePhase::Aiming);
        assert_eq!(round.ball.vel, DVec2::ZERO);
        assert!(matches!(events.as_slice(), [GameEvent::BallStopped { .. }]));
    }
}

//! Per-frame simulation tick
//!
//! One tick advances the run by exactly one animation frame. The function is
//! pure over its arguments: wall-clock time only enters as the caller's
//! elapsed-since-reset duration, so any schedule of ticks can be replayed in
//! a test without a real clock.

use crate::config::ArenaConfig;
use crate::consts::*;

use super::field::ObstacleField;
use super::state::{Ball, GameEvent, GamePhase, GameState};

/// Input record for a single tick
///
/// `bounce` is a one-shot: the session queues it from the input callback and
/// clears it after the tick consumes it, so a trigger arriving mid-frame is
/// applied atomically at the top of the next tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Wall-clock time since the last reset (milliseconds)
    pub elapsed_ms: u64,
    /// Player pressed the bounce trigger since the last tick
    pub bounce: bool,
}

/// Advance the state by one frame
pub fn tick(
    state: &mut GameState,
    field: &ObstacleField,
    input: &TickInput,
    arena: &ArenaConfig,
) -> Option<GameEvent> {
    match state.phase {
        GamePhase::Waiting => {
            if input.elapsed_ms < START_DELAY_MS {
                return None;
            }
            // The start tick integrates: the ball goes live and falls in the
            // same frame the delay elapses.
            state.phase = GamePhase::Active;
            if active_step(&mut state.ball, field, input, arena) {
                state.phase = GamePhase::Dying;
                Some(GameEvent::Died)
            } else {
                Some(GameEvent::Started)
            }
        }
        GamePhase::Active => {
            if active_step(&mut state.ball, field, input, arena) {
                state.phase = GamePhase::Dying;
                Some(GameEvent::Died)
            } else {
                None
            }
        }
        GamePhase::Dying => {
            let ball = &mut state.ball;
            ball.fade = ball.fade.saturating_sub(FADE_STEP);
            ball.radius = (ball.radius - RADIUS_STEP).max(0.0);
            if ball.fade == 0 && ball.radius == 0.0 {
                state.phase = GamePhase::Dead;
                Some(GameEvent::FadedOut)
            } else {
                None
            }
        }
        GamePhase::Dead => None,
    }
}

/// Integrate one live frame; returns true if the ball died this tick
fn active_step(
    ball: &mut Ball,
    field: &ObstacleField,
    input: &TickInput,
    arena: &ArenaConfig,
) -> bool {
    if input.bounce {
        ball.vel.y = BOUNCE_STRENGTH;
    }

    ball.pos.x += ball.vel.x;
    ball.vel.y += GRAVITY;
    ball.pos.y += ball.vel.y;

    // Side walls reflect; no position clamp, the overshoot self-corrects
    if ball.pos.x - ball.radius <= 0.0 || ball.pos.x + ball.radius >= arena.width {
        ball.vel.x = -ball.vel.x;
    }
    // Ceiling kills the upward motion instead of bouncing
    if ball.pos.y - ball.radius <= 0.0 {
        ball.pos.y = ball.radius;
        ball.vel.y = 0.0;
    }

    let mut dead = false;

    // Ground contact: settle onto the surface
    if ball.pos.y + ball.radius >= arena.ground_y() {
        ball.pos.y = arena.ground_y() - ball.radius;
        ball.vel.y = 0.0;
        dead = true;
    }

    // Obstacle contact: die in place, no clamping
    if field.first_contact(ball.pos, ball.radius).is_some() {
        dead = true;
    }

    dead
}

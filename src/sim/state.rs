//! Game state and core simulation types
//!
//! Everything the tick mutates lives here. State is plain data: the tick
//! function in [`super::tick`] is the only mutator, so the whole run is
//! reproducible from a seed and a frame schedule.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::ArenaConfig;
use crate::consts::*;

/// Lifecycle phase of the run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Start-delay window; ball is inert and the consumer shows a ready message
    Waiting,
    /// Ball is live: gravity, walls, obstacles all apply
    Active,
    /// Death fade: ball shrinks and fades out over successive ticks
    Dying,
    /// Fade finished; nothing moves until reset
    Dead,
}

/// Edge-triggered lifecycle transition, reported at most once per tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Start delay elapsed; the ball went live
    Started,
    /// Ball touched the ground or an obstacle
    Died,
    /// Fade and radius both hit zero; consumer should surface the restart affordance
    FadedOut,
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Shrinks during [`GamePhase::Dying`], floored at zero
    pub radius: f32,
    /// Opacity proxy, 255 -> 0; consumer draws at `fade / 255`
    pub fade: u8,
}

impl Ball {
    /// Fresh ball at the arena center, drifting right
    pub fn spawn(arena: &ArenaConfig) -> Self {
        Self {
            pos: arena.center(),
            vel: Vec2::new(BALL_START_SPEED_X, 0.0),
            radius: BALL_RADIUS,
            fade: FADE_START,
        }
    }
}

/// Complete simulation state for one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub ball: Ball,
    pub phase: GamePhase,
}

impl GameState {
    pub fn new(arena: &ArenaConfig) -> Self {
        Self {
            ball: Ball::spawn(arena),
            phase: GamePhase::Waiting,
        }
    }

    /// Reinitialize the ball and return to Waiting
    ///
    /// Total: callable from any phase, including mid-Dying, and always
    /// produces the identical fresh state. The start-delay reference is the
    /// session's concern, not ours.
    pub fn reset(&mut self, arena: &ArenaConfig) {
        *self = Self::new(arena);
    }
}

//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per animation frame, driven by the caller
//! - Elapsed time passed in, never read from a clock
//! - Seeded RNG only, and only at obstacle-field construction
//! - No rendering or platform dependencies

pub mod field;
pub mod state;
pub mod tick;

pub use field::{Obstacle, ObstacleField};
pub use state::{Ball, GameEvent, GamePhase, GameState};
pub use tick::{TickInput, tick};

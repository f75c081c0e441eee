//! Bounce Dodge - a one-button gravity toy
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball physics, obstacle field, lifecycle)
//! - `session`: Top-level owner wiring wall-clock frames to pure ticks
//! - `config`: Arena dimensions, configurable at construction only
//!
//! The presentation layer (canvas, input wiring, text) lives outside this
//! crate: it calls [`Session::frame`] once per display refresh and reads
//! ball/obstacle state back for drawing.

pub mod config;
pub mod session;
pub mod sim;

pub use config::ArenaConfig;
pub use session::Session;

/// Game tuning constants
pub mod consts {
    /// Delay between reset and the ball going live (milliseconds)
    pub const START_DELAY_MS: u64 = 1000;

    /// Downward acceleration added to `vy` each tick
    pub const GRAVITY: f32 = 0.5;
    /// Vertical impulse applied on the player's bounce input (negative = up)
    pub const BOUNCE_STRENGTH: f32 = -10.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 8.0;
    pub const BALL_START_SPEED_X: f32 = 3.0;

    /// Death fade: opacity proxy counts 255 -> 0
    pub const FADE_START: u8 = 255;
    /// Fade lost per dying tick
    pub const FADE_STEP: u8 = 5;
    /// Radius lost per dying tick
    pub const RADIUS_STEP: f32 = 1.0;
}

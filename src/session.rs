//! Session lifecycle
//!
//! The original toy kept ball kinematics, obstacle list and timers in
//! module-level globals mutated from event callbacks. Here a single owner
//! holds all of it: the embedding layer forwards its animation-frame clock
//! and input events, and reads state back for drawing.
//!
//! Input triggers may arrive between frames; they are queued on the pending
//! [`TickInput`] and applied atomically at the top of the next frame, so no
//! partial-tick mutation is ever observable.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::config::ArenaConfig;
use crate::sim::{Ball, GameEvent, GamePhase, GameState, Obstacle, ObstacleField, TickInput, tick};

/// Owns one run of the toy: arena, ball state, obstacle field, pending input
#[derive(Debug, Clone)]
pub struct Session {
    arena: ArenaConfig,
    state: GameState,
    field: ObstacleField,
    input: TickInput,
    /// Start-delay reference on the caller's clock
    reset_at_ms: u64,
}

impl Session {
    /// Create a session with the default obstacle layout, drift directions
    /// drawn from `seed`. Two sessions with the same seed and frame schedule
    /// evolve identically.
    ///
    /// Frame timestamps are read on the caller's clock with session creation
    /// as time zero; with a nonzero-origin clock, call [`reset`](Self::reset)
    /// with the current reading before the first frame.
    pub fn new(arena: ArenaConfig, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let field = ObstacleField::default_layout(&mut rng);
        log::info!(
            "session: arena {}x{} (ground {}), seed {}",
            arena.width,
            arena.height,
            arena.ground_height,
            seed
        );
        Self {
            state: GameState::new(&arena),
            field,
            input: TickInput::default(),
            reset_at_ms: 0,
            arena,
        }
    }

    /// Restart the ball from any phase; `now_ms` becomes the new start-delay
    /// reference. Obstacles keep drifting where they are for the whole
    /// session, exactly as a mid-run restart leaves them.
    pub fn reset(&mut self, now_ms: u64) {
        self.state.reset(&self.arena);
        self.input = TickInput::default();
        self.reset_at_ms = now_ms;
        log::info!("reset at {} ms", now_ms);
    }

    /// Queue the bounce trigger for the next frame. Harmless outside the
    /// Active phase; the tick drops it.
    pub fn trigger_bounce(&mut self) {
        self.input.bounce = true;
    }

    /// Advance one frame. Call exactly once per display refresh.
    pub fn frame(&mut self, now_ms: u64) -> Option<GameEvent> {
        self.input.elapsed_ms = now_ms.saturating_sub(self.reset_at_ms);

        // Obstacles drift every frame, whatever the ball is doing
        self.field.advance(&self.arena);

        let event = tick(&mut self.state, &self.field, &self.input, &self.arena);
        // One-shot input consumed
        self.input.bounce = false;

        match event {
            Some(GameEvent::Started) => log::info!("ball live"),
            Some(GameEvent::Died) => {
                log::info!(
                    "ball died at ({:.1}, {:.1})",
                    self.state.ball.pos.x,
                    self.state.ball.pos.y
                );
            }
            Some(GameEvent::FadedOut) => log::info!("faded out; awaiting restart"),
            None => {}
        }
        event
    }

    pub fn arena(&self) -> &ArenaConfig {
        &self.arena
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    /// Ball state for drawing (position, radius, fade)
    pub fn ball(&self) -> &Ball {
        &self.state.ball
    }

    /// Obstacle list for drawing, in creation order
    pub fn obstacles(&self) -> &[Obstacle] {
        self.field.obstacles()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_delay_measured_from_reset() {
        let mut session = Session::new(ArenaConfig::default(), 1);

        assert_eq!(session.frame(500), None);
        assert_eq!(session.phase(), GamePhase::Waiting);
        assert_eq!(session.frame(1000), Some(GameEvent::Started));
        assert_eq!(session.phase(), GamePhase::Active);

        // Reset moves the reference: 1 s from the reset, not from creation
        session.reset(5000);
        assert_eq!(session.phase(), GamePhase::Waiting);
        assert_eq!(session.frame(5999), None);
        assert_eq!(session.frame(6000), Some(GameEvent::Started));
    }

    #[test]
    fn test_bounce_is_one_shot() {
        let mut session = Session::new(ArenaConfig::default(), 1);
        session.frame(1000);

        session.trigger_bounce();
        session.frame(1016);
        let after_bounce = session.ball().vel.y;
        assert!(after_bounce < 0.0);

        // Not queued again: gravity only
        session.frame(1032);
        assert_eq!(session.ball().vel.y, after_bounce + crate::consts::GRAVITY);
    }

    #[test]
    fn test_obstacles_drift_during_waiting() {
        let mut session = Session::new(ArenaConfig::default(), 1);
        let before: Vec<_> = session.obstacles().to_vec();
        session.frame(16);
        assert_eq!(session.phase(), GamePhase::Waiting);
        for (a, b) in before.iter().zip(session.obstacles()) {
            assert_eq!(a.center.distance(b.center), 2.0_f32.sqrt());
        }
    }

    #[test]
    fn test_reset_mid_dying_is_total() {
        let mut session = Session::new(ArenaConfig::default(), 1);
        let mut now = 1000;
        // Let it fall to its death, then partway through the fade
        while session.frame(now) != Some(GameEvent::Died) {
            now += 16;
        }
        for _ in 0..5 {
            now += 16;
            session.frame(now);
        }
        assert_eq!(session.phase(), GamePhase::Dying);
        assert!(session.ball().fade < 255);

        session.reset(now);
        assert_eq!(session.phase(), GamePhase::Waiting);
        assert_eq!(session.ball().fade, 255);
        assert_eq!(session.ball().radius, 8.0);
    }

    #[test]
    fn test_faded_out_fires_exactly_once() {
        let mut session = Session::new(ArenaConfig::default(), 1);
        let mut now = 1000;
        let mut faded_out = 0;
        for _ in 0..2000 {
            now += 16;
            if session.frame(now) == Some(GameEvent::FadedOut) {
                faded_out += 1;
            }
        }
        assert_eq!(session.phase(), GamePhase::Dead);
        assert_eq!(faded_out, 1);
    }

    #[test]
    fn test_same_seed_same_run() {
        let mut a = Session::new(ArenaConfig::default(), 77);
        let mut b = Session::new(ArenaConfig::default(), 77);
        let mut now = 0;
        for i in 0..500 {
            now += 16;
            if i % 30 == 0 {
                a.trigger_bounce();
                b.trigger_bounce();
            }
            assert_eq!(a.frame(now), b.frame(now));
        }
        assert_eq!(a.ball(), b.ball());
        assert_eq!(a.obstacles(), b.obstacles());
    }
}

//! Bounce Dodge entry point
//!
//! Headless demo: stands in for the presentation layer by driving the
//! session on a synthetic 60 Hz clock, tapping the bounce trigger for the
//! first ten seconds of each run and restarting once after the first
//! fade-out.

use std::time::{SystemTime, UNIX_EPOCH};

use bounce_dodge::sim::{GameEvent, GamePhase};
use bounce_dodge::{ArenaConfig, Session};

const FRAME_MS: u64 = 16;

fn main() {
    env_logger::init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let mut session = Session::new(ArenaConfig::default(), seed);

    let mut now_ms = 0;
    let mut run_start_ms = 0;
    let mut restarts = 0;
    // Two-minute cap in case the taps keep the ball alive the whole time
    for frame in 0u64..7200 {
        now_ms += FRAME_MS;

        // Tap twice a second for a while, then let the ball drop
        let tapping = now_ms - run_start_ms < 10_000;
        if tapping && session.phase() == GamePhase::Active && frame % 30 == 0 {
            session.trigger_bounce();
        }

        if session.frame(now_ms) == Some(GameEvent::FadedOut) {
            if restarts == 1 {
                break;
            }
            restarts += 1;
            run_start_ms = now_ms;
            session.reset(now_ms);
        }
    }

    let ball = session.ball();
    println!(
        "{} restart(s) over {:.1} s; ball ended at ({:.1}, {:.1})",
        restarts,
        now_ms as f64 / 1000.0,
        ball.pos.x,
        ball.pos.y
    );
}

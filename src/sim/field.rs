//! Moving obstacle field
//!
//! Six circles drift one pixel per tick along fixed diagonals, bouncing off
//! the walls and the ground line. They never interact with each other and
//! the ball never deflects them; the ball's only relationship to an obstacle
//! is the contact test that kills it.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::ArenaConfig;

/// A drifting circular body
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub center: Vec2,
    /// Constant after creation
    pub radius: f32,
    /// Per-axis drift, each component -1 or +1; flips independently on wall contact
    pub dir: Vec2,
}

impl Obstacle {
    /// Place an obstacle with a random initial drift diagonal
    pub fn drifting<R: Rng>(cx: f32, cy: f32, radius: f32, rng: &mut R) -> Self {
        let flip = |b: bool| if b { -1.0 } else { 1.0 };
        Self {
            center: Vec2::new(cx, cy),
            radius,
            dir: Vec2::new(flip(rng.random_bool(0.5)), flip(rng.random_bool(0.5))),
        }
    }

    /// One drift step, then per-axis direction flips where the new extent
    /// crosses a boundary. Checked post-move: a one-tick overshoot is
    /// tolerated and self-corrects on the next tick.
    fn advance(&mut self, arena: &ArenaConfig) {
        self.center += self.dir;
        if self.center.x - self.radius <= 0.0 || self.center.x + self.radius >= arena.width {
            self.dir.x = -self.dir.x;
        }
        if self.center.y - self.radius <= 0.0 || self.center.y + self.radius >= arena.ground_y() {
            self.dir.y = -self.dir.y;
        }
    }

    /// Closed circle-circle test: exact tangency counts as contact
    #[inline]
    pub fn overlaps(&self, pos: Vec2, radius: f32) -> bool {
        self.center.distance(pos) <= self.radius + radius
    }
}

/// The fixed set of obstacles for one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObstacleField {
    obstacles: Vec<Obstacle>,
}

impl ObstacleField {
    pub fn new(obstacles: Vec<Obstacle>) -> Self {
        Self { obstacles }
    }

    /// The standard six-obstacle layout; only the drift diagonals vary run to run
    pub fn default_layout<R: Rng>(rng: &mut R) -> Self {
        Self::new(vec![
            Obstacle::drifting(150.0, 200.0, 40.0, rng),
            Obstacle::drifting(450.0, 100.0, 30.0, rng),
            Obstacle::drifting(650.0, 350.0, 50.0, rng),
            Obstacle::drifting(300.0, 400.0, 35.0, rng),
            Obstacle::drifting(550.0, 250.0, 25.0, rng),
            Obstacle::drifting(700.0, 150.0, 45.0, rng),
        ])
    }

    /// Drift every obstacle one step
    pub fn advance(&mut self, arena: &ArenaConfig) {
        for obstacle in &mut self.obstacles {
            obstacle.advance(arena);
        }
    }

    /// Body list, in creation order
    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    /// First obstacle in contact with the given circle, if any
    pub fn first_contact(&self, pos: Vec2, radius: f32) -> Option<&Obstacle> {
        self.obstacles.iter().find(|o| o.overlaps(pos, radius))
    }
}

//! Arena configuration
//!
//! Fixed at session construction; nothing here mutates at runtime. The
//! embedding layer typically hands us a JSON options object with any subset
//! of the recognized fields.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Arena dimensions, including the ground strip along the bottom edge
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    /// Arena width (pixels)
    pub width: f32,
    /// Arena height, ground strip included (pixels)
    pub height: f32,
    /// Height of the ground strip along the bottom edge (pixels)
    pub ground_height: f32,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            ground_height: 40.0,
        }
    }
}

impl ArenaConfig {
    /// Parse an options object; missing fields take defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Y coordinate of the ground surface (top edge of the ground strip)
    #[inline]
    pub fn ground_y(&self) -> f32 {
        self.height - self.ground_height
    }

    /// Center of the playable area
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

//! Live conveyor tokens.

use serde::{Deserialize, Serialize};

use crate::lane::Lane;

/// Monotonically assigned token identifier; never reused within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TokenId(pub u64);

/// A live, moving capturable unit. Position is mutated only by the
/// kinematic step; the token is removed either by capture or by exiting its
/// lane, never both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub id: TokenId,
    pub symbol: char,
    pub lane: Lane,
    pub x: f64,
    pub y: f64,
    pub spawned_at_ms: f64,
}

impl Token {
    /// Signed travel-axis coordinate; larger means closer to the exit edge.
    #[must_use]
    pub fn progress(&self) -> f64 {
        self.lane.progress(self.x, self.y)
    }

    /// Advance along the lane's direction vector. A zero delta leaves the
    /// position untouched.
    pub fn advance(&mut self, dt_secs: f64, speed_px_per_sec: f64) {
        let (dx, dy) = self.lane.direction();
        self.x += dx * speed_px_per_sec * dt_secs;
        self.y += dy * speed_px_per_sec * dt_secs;
    }
}

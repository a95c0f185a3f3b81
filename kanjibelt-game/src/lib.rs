//! Kanjibelt Game Engine
//!
//! Platform-agnostic core logic for the Kanjibelt conveyor mini-game:
//! lane geometry, the timed spawn scheduler, per-frame kinematics,
//! capture/miss resolution and the session state machine, plus the
//! assembly surface that captured parts feed into. No UI and no I/O; the
//! web crate supplies both.

pub mod assembly;
pub mod config;
pub mod constants;
pub mod geometry;
pub mod lane;
pub mod parts;
pub mod rng;
pub mod session;
pub mod token;

// Re-export commonly used types
pub use assembly::{AssemblyBoard, DEFAULT_TARGET_KANJI, PlacedPart};
pub use config::{CaptureRule, ConfigError, ConveyorConfig, ScoringMode};
pub use geometry::{LaneMetrics, Rect, Vec2, Viewport, capture_center, lane_rect, spawn_point};
pub use lane::{CaptureKey, Lane};
pub use parts::{LanePools, Part, PartCatalog};
pub use rng::{CountingRng, RngBundle};
pub use session::{
    CaptureOutcome, ConveyorSession, SessionPhase, SessionSummary, TickReport,
};
pub use token::{Token, TokenId};

/// Build a session over the embedded default config.
///
/// # Errors
///
/// Returns an error if the embedded config fails validation (it is covered
/// by tests, so this only fires for a corrupted build).
pub fn default_session(seed: u64) -> Result<ConveyorSession, ConfigError> {
    ConveyorSession::new(ConveyorConfig::load_from_static(), seed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_session_starts_idle() {
        let session = default_session(7).unwrap();
        assert_eq!(session.phase(), SessionPhase::Idle);
        assert_eq!(session.score(), 0);
        assert_eq!(session.misses(), 0);
    }
}

//! Tuning constants for the conveyor subsystem.
//!
//! These are the defaults baked into [`crate::config::ConveyorConfig`]; a
//! deployment overrides them through config JSON, not by editing this file.

/// Minimum wall-clock gap between two spawn events.
pub const SPAWN_INTERVAL_MS: f64 = 1500.0;

/// Token travel speed along a lane, in viewport pixels per second.
pub const MOVE_SPEED_PX_PER_SEC: f64 = 150.0;

/// Lane thickness as a fraction of the canvas width.
pub const LANE_THICKNESS_FRAC: f64 = 0.15;

/// Lower clamp on lane thickness so lanes stay hittable on small viewports.
pub const LANE_THICKNESS_MIN_PX: f64 = 60.0;

/// Upper clamp on lane thickness so lanes do not swallow the page.
pub const LANE_THICKNESS_MAX_PX: f64 = 100.0;

/// Gap between the canvas edge and the inner edge of each lane.
pub const LANE_GAP_PX: f64 = 12.0;

/// Half-width of the capture window around the lane midpoint, in pixels.
/// Sized independently of lane thickness.
pub const CAPTURE_TOLERANCE_PX: f64 = 48.0;

/// Score awarded per successful capture in capture-driven scoring.
pub const POINTS_PER_CAPTURE: u32 = 100;

/// Countdown for a timed session.
pub const SESSION_COUNTDOWN_MS: f64 = 60_000.0;

/// Cap on simultaneously live tokens. A spawn slot that would exceed this
/// is skipped; without the cap the collection grows without bound whenever
/// spawn rate outpaces capture+miss attrition.
pub const MAX_LIVE_TOKENS: usize = 64;

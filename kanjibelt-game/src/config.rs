//! Conveyor configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{
    MAX_LIVE_TOKENS, MOVE_SPEED_PX_PER_SEC, POINTS_PER_CAPTURE, SESSION_COUNTDOWN_MS,
    SPAWN_INTERVAL_MS,
};
use crate::geometry::LaneMetrics;
use crate::lane::Lane;
use crate::parts::LanePools;

const DEFAULT_CONVEYOR_DATA: &str = include_str!("../data/conveyor.json");

/// Which tokens a key press may catch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaptureRule {
    /// Only tokens within `px` of the lane's capture-zone center.
    Tolerance { px: f64 },
    /// Any token in the lane.
    LaneWide,
}

impl Default for CaptureRule {
    fn default() -> Self {
        Self::Tolerance {
            px: crate::constants::CAPTURE_TOLERANCE_PX,
        }
    }
}

/// How the score counter is driven. One mode per deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoringMode {
    /// Fixed points per successful catch.
    PerCapture { points: u32 },
    /// Catches are score-neutral; an external judge awards points through
    /// [`crate::session::ConveyorSession::award`].
    External,
}

impl Default for ScoringMode {
    fn default() -> Self {
        Self::PerCapture {
            points: POINTS_PER_CAPTURE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConveyorConfig {
    #[serde(default = "default_spawn_interval")]
    pub spawn_interval_ms: f64,
    #[serde(default = "default_move_speed")]
    pub move_speed: f64,
    #[serde(default)]
    pub metrics: LaneMetrics,
    #[serde(default)]
    pub capture_rule: CaptureRule,
    #[serde(default)]
    pub scoring: ScoringMode,
    /// `None` runs an untimed session ended only by an explicit stop.
    #[serde(default = "default_countdown")]
    pub countdown_ms: Option<f64>,
    #[serde(default = "default_max_live_tokens")]
    pub max_live_tokens: usize,
    #[serde(default)]
    pub pools: LanePools,
}

impl Default for ConveyorConfig {
    fn default() -> Self {
        Self {
            spawn_interval_ms: default_spawn_interval(),
            move_speed: default_move_speed(),
            metrics: LaneMetrics::default(),
            capture_rule: CaptureRule::default(),
            scoring: ScoringMode::default(),
            countdown_ms: default_countdown(),
            max_live_tokens: default_max_live_tokens(),
            pools: LanePools::default(),
        }
    }
}

impl ConveyorConfig {
    #[must_use]
    pub fn load_from_static() -> Self {
        serde_json::from_str(DEFAULT_CONVEYOR_DATA).unwrap_or_default()
    }

    /// Reject configurations the session cannot run with.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint: non-positive interval or
    /// speed, inverted thickness bounds, zero token cap, or an empty lane
    /// pool.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.spawn_interval_ms <= 0.0 {
            return Err(ConfigError::NonPositiveInterval(self.spawn_interval_ms));
        }
        if self.move_speed <= 0.0 {
            return Err(ConfigError::NonPositiveSpeed(self.move_speed));
        }
        if self.metrics.thickness_min_px > self.metrics.thickness_max_px {
            return Err(ConfigError::InvertedThickness {
                min: self.metrics.thickness_min_px,
                max: self.metrics.thickness_max_px,
            });
        }
        if self.max_live_tokens == 0 {
            return Err(ConfigError::ZeroTokenCap);
        }
        for lane in Lane::ALL {
            if self.pools.pool(lane).is_empty() {
                return Err(ConfigError::EmptyPool(lane));
            }
        }
        Ok(())
    }
}

fn default_spawn_interval() -> f64 {
    SPAWN_INTERVAL_MS
}

fn default_move_speed() -> f64 {
    MOVE_SPEED_PX_PER_SEC
}

fn default_countdown() -> Option<f64> {
    Some(SESSION_COUNTDOWN_MS)
}

fn default_max_live_tokens() -> usize {
    MAX_LIVE_TOKENS
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("spawn interval must be positive, got {0} ms")]
    NonPositiveInterval(f64),
    #[error("move speed must be positive, got {0} px/s")]
    NonPositiveSpeed(f64),
    #[error("lane thickness bounds are inverted: min {min} px > max {max} px")]
    InvertedThickness { min: f64, max: f64 },
    #[error("token cap must be at least 1")]
    ZeroTokenCap,
    #[error("lane {0} has an empty symbol pool")]
    EmptyPool(Lane),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_config_is_valid_and_matches_defaults() {
        let config = ConveyorConfig::load_from_static();
        config.validate().expect("embedded config must validate");
        assert!((config.spawn_interval_ms - 1500.0).abs() < f64::EPSILON);
        assert!((config.move_speed - 150.0).abs() < f64::EPSILON);
        assert_eq!(config.capture_rule, CaptureRule::Tolerance { px: 48.0 });
        assert_eq!(config.scoring, ScoringMode::PerCapture { points: 100 });
        assert_eq!(config.countdown_ms, Some(60_000.0));
    }

    #[test]
    fn validation_rejects_broken_configs() {
        #![allow(clippy::field_reassign_with_default)]
        let mut config = ConveyorConfig::default();
        config.spawn_interval_ms = 0.0;
        assert_eq!(config.validate(), Err(ConfigError::NonPositiveInterval(0.0)));

        let mut config = ConveyorConfig::default();
        config.move_speed = -1.0;
        assert_eq!(config.validate(), Err(ConfigError::NonPositiveSpeed(-1.0)));

        let mut config = ConveyorConfig::default();
        config.metrics.thickness_min_px = 120.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvertedThickness { .. })
        ));

        let mut config = ConveyorConfig::default();
        config.max_live_tokens = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroTokenCap));

        let mut config = ConveyorConfig::default();
        config.pools.left.clear();
        assert_eq!(config.validate(), Err(ConfigError::EmptyPool(Lane::Left)));
    }

    #[test]
    fn partial_json_falls_back_to_field_defaults() {
        let config: ConveyorConfig =
            serde_json::from_str(r#"{ "spawn_interval_ms": 900.0 }"#).unwrap();
        assert!((config.spawn_interval_ms - 900.0).abs() < f64::EPSILON);
        assert!((config.move_speed - 150.0).abs() < f64::EPSILON);
        assert!(config.validate().is_ok());
    }
}

//! Lanes and their input-key bijection.
//!
//! Four fixed travel corridors surround the assembly canvas. Each lane is
//! bound to exactly one arrow key and moves tokens along one axis-aligned
//! unit vector; the sign encodes the direction of travel.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Lane {
    #[default]
    Top,
    Right,
    Bottom,
    Left,
}

impl Lane {
    pub const ALL: [Self; 4] = [Self::Top, Self::Right, Self::Bottom, Self::Left];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Right => "right",
            Self::Bottom => "bottom",
            Self::Left => "left",
        }
    }

    /// Unit travel vector. Top runs left-to-right, Right top-to-bottom,
    /// Bottom right-to-left, Left bottom-to-top.
    #[must_use]
    pub const fn direction(self) -> (f64, f64) {
        match self {
            Self::Top => (1.0, 0.0),
            Self::Right => (0.0, 1.0),
            Self::Bottom => (-1.0, 0.0),
            Self::Left => (0.0, -1.0),
        }
    }

    /// Whether the lane's travel axis is horizontal.
    #[must_use]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::Top | Self::Bottom)
    }

    /// Signed coordinate along the travel axis, increasing toward the exit
    /// edge. Used to rank tokens by urgency.
    #[must_use]
    pub fn progress(self, x: f64, y: f64) -> f64 {
        let (dx, dy) = self.direction();
        x * dx + y * dy
    }

    /// True once a position has crossed the viewport's far edge in the
    /// direction of travel.
    #[must_use]
    pub fn exit_crossed(self, x: f64, y: f64, viewport_w: f64, viewport_h: f64) -> bool {
        match self {
            Self::Top => x > viewport_w,
            Self::Right => y > viewport_h,
            Self::Bottom => x < 0.0,
            Self::Left => y < 0.0,
        }
    }

    /// The key bound to this lane. Bijective with [`CaptureKey::lane`].
    #[must_use]
    pub const fn capture_key(self) -> CaptureKey {
        match self {
            Self::Top => CaptureKey::Up,
            Self::Right => CaptureKey::Right,
            Self::Bottom => CaptureKey::Down,
            Self::Left => CaptureKey::Left,
        }
    }
}

impl fmt::Display for Lane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Lane {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top" => Ok(Self::Top),
            "right" => Ok(Self::Right),
            "bottom" => Ok(Self::Bottom),
            "left" => Ok(Self::Left),
            _ => Err(()),
        }
    }
}

/// One of the four recognized directional keys. Anything else the input
/// source delivers is ignored before it reaches the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaptureKey {
    Up,
    Right,
    Down,
    Left,
}

impl CaptureKey {
    /// Parse a `KeyboardEvent.key` value. Non-directional keys map to `None`.
    #[must_use]
    pub fn from_event_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" => Some(Self::Up),
            "ArrowRight" => Some(Self::Right),
            "ArrowDown" => Some(Self::Down),
            "ArrowLeft" => Some(Self::Left),
            _ => None,
        }
    }

    /// The lane bound to this key.
    #[must_use]
    pub const fn lane(self) -> Lane {
        match self {
            Self::Up => Lane::Top,
            Self::Right => Lane::Right,
            Self::Down => Lane::Bottom,
            Self::Left => Lane::Left,
        }
    }
}

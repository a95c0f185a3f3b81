//! Lane geometry resolver.
//!
//! Pure functions from the current canvas rectangle and viewport size to
//! lane rectangles, spawn points and capture-zone centers. Nothing here is
//! cached; callers re-resolve whenever the host reports new dimensions.

use serde::{Deserialize, Serialize};

use crate::constants::{
    LANE_GAP_PX, LANE_THICKNESS_FRAC, LANE_THICKNESS_MAX_PX, LANE_THICKNESS_MIN_PX,
};
use crate::lane::Lane;

/// Axis-aligned rectangle in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// A point in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

/// Viewport dimensions as reported by the host page.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

/// Lane sizing parameters: thickness as a canvas-width fraction, clamped to
/// a pixel range, plus the gap between canvas and lane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LaneMetrics {
    #[serde(default = "default_thickness_frac")]
    pub thickness_frac: f64,
    #[serde(default = "default_thickness_min")]
    pub thickness_min_px: f64,
    #[serde(default = "default_thickness_max")]
    pub thickness_max_px: f64,
    #[serde(default = "default_gap")]
    pub gap_px: f64,
}

impl Default for LaneMetrics {
    fn default() -> Self {
        Self {
            thickness_frac: default_thickness_frac(),
            thickness_min_px: default_thickness_min(),
            thickness_max_px: default_thickness_max(),
            gap_px: default_gap(),
        }
    }
}

impl LaneMetrics {
    /// Lane thickness for the given canvas, never below the minimum and
    /// never above the maximum.
    #[must_use]
    pub fn thickness(&self, canvas: &Rect) -> f64 {
        (canvas.width * self.thickness_frac).clamp(self.thickness_min_px, self.thickness_max_px)
    }
}

fn default_thickness_frac() -> f64 {
    LANE_THICKNESS_FRAC
}

fn default_thickness_min() -> f64 {
    LANE_THICKNESS_MIN_PX
}

fn default_thickness_max() -> f64 {
    LANE_THICKNESS_MAX_PX
}

fn default_gap() -> f64 {
    LANE_GAP_PX
}

/// Rectangle of one lane. Top/Bottom lanes span the viewport width directly
/// above/below the canvas; Left/Right span the viewport height beside it.
#[must_use]
pub fn lane_rect(lane: Lane, canvas: &Rect, viewport: Viewport, metrics: &LaneMetrics) -> Rect {
    let t = metrics.thickness(canvas);
    let gap = metrics.gap_px;
    match lane {
        Lane::Top => Rect::new(0.0, canvas.top - gap - t, viewport.width, t),
        Lane::Bottom => Rect::new(0.0, canvas.bottom() + gap, viewport.width, t),
        Lane::Left => Rect::new(canvas.left - gap - t, 0.0, t, viewport.height),
        Lane::Right => Rect::new(canvas.right() + gap, 0.0, t, viewport.height),
    }
}

/// Entry-edge coordinate for newly spawned tokens, centered on the lane's
/// thickness midline.
#[must_use]
pub fn spawn_point(lane: Lane, canvas: &Rect, viewport: Viewport, metrics: &LaneMetrics) -> Vec2 {
    let rect = lane_rect(lane, canvas, viewport, metrics);
    match lane {
        Lane::Top => Vec2 {
            x: 0.0,
            y: rect.top + rect.height / 2.0,
        },
        Lane::Bottom => Vec2 {
            x: viewport.width,
            y: rect.top + rect.height / 2.0,
        },
        Lane::Right => Vec2 {
            x: rect.left + rect.width / 2.0,
            y: 0.0,
        },
        Lane::Left => Vec2 {
            x: rect.left + rect.width / 2.0,
            y: viewport.height,
        },
    }
}

/// Center of the lane's capture zone: the midpoint of the travel span on
/// the thickness midline.
#[must_use]
pub fn capture_center(
    lane: Lane,
    canvas: &Rect,
    viewport: Viewport,
    metrics: &LaneMetrics,
) -> Vec2 {
    let rect = lane_rect(lane, canvas, viewport, metrics);
    if lane.is_horizontal() {
        Vec2 {
            x: viewport.width / 2.0,
            y: rect.top + rect.height / 2.0,
        }
    } else {
        Vec2 {
            x: rect.left + rect.width / 2.0,
            y: viewport.height / 2.0,
        }
    }
}

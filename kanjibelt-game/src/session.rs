//! Conveyor session: the game clock and everything it owns.
//!
//! One session instance owns the live token collection and all counters.
//! The frame loop calls [`ConveyorSession::tick`]; the input path calls
//! [`ConveyorSession::capture`] synchronously on key-down. Both mutate the
//! same collection, so a token removed by one path is never visible to the
//! other; capture and miss are mutually exclusive outcomes by
//! construction.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::config::{CaptureRule, ConfigError, ConveyorConfig, ScoringMode};
use crate::geometry::{self, Rect, Vec2, Viewport};
use crate::lane::{CaptureKey, Lane};
use crate::rng::RngBundle;
use crate::token::{Token, TokenId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionPhase {
    #[default]
    Idle,
    Running,
    Ended,
}

/// Final counters, reported exactly once per session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SessionSummary {
    pub score: u32,
    pub misses: u32,
    pub captures: u32,
}

/// What one frame did. `ended` carries the summary on the terminating tick
/// and on no other.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TickReport {
    pub spawned: Option<TokenId>,
    pub missed: SmallVec<[Token; 4]>,
    pub counters_changed: bool,
    pub ended: Option<SessionSummary>,
}

/// A successful catch: the removed token and the points it scored (zero in
/// external scoring).
#[derive(Debug, Clone, PartialEq)]
pub struct CaptureOutcome {
    pub token: Token,
    pub points: u32,
}

pub struct ConveyorSession {
    config: ConveyorConfig,
    viewport: Viewport,
    canvas: Rect,
    rng: RngBundle,
    phase: SessionPhase,
    tokens: Vec<Token>,
    score: u32,
    misses: u32,
    captures: u32,
    remaining_ms: Option<f64>,
    last_tick_ms: Option<f64>,
    last_spawn_ms: Option<f64>,
    next_token_id: u64,
    summary_reported: bool,
}

impl ConveyorSession {
    /// Build a session over a validated config and a user-visible seed.
    ///
    /// # Errors
    ///
    /// Returns the config's first violated constraint.
    pub fn new(config: ConveyorConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            viewport: Viewport::default(),
            canvas: Rect::default(),
            rng: RngBundle::from_user_seed(seed),
            phase: SessionPhase::Idle,
            tokens: Vec::new(),
            score: 0,
            misses: 0,
            captures: 0,
            remaining_ms: None,
            last_tick_ms: None,
            last_spawn_ms: None,
            next_token_id: 0,
            summary_reported: false,
        })
    }

    #[must_use]
    pub const fn phase(&self) -> SessionPhase {
        self.phase
    }

    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub const fn misses(&self) -> u32 {
        self.misses
    }

    #[must_use]
    pub const fn captures(&self) -> u32 {
        self.captures
    }

    #[must_use]
    pub const fn remaining_ms(&self) -> Option<f64> {
        self.remaining_ms
    }

    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    #[must_use]
    pub const fn config(&self) -> &ConveyorConfig {
        &self.config
    }

    /// Update the geometry inputs. Lane rectangles are derived on demand,
    /// so this is all a resize needs.
    pub fn set_geometry(&mut self, viewport: Viewport, canvas: Rect) {
        self.viewport = viewport;
        self.canvas = canvas;
    }

    #[must_use]
    pub fn lane_rect(&self, lane: Lane) -> Rect {
        geometry::lane_rect(lane, &self.canvas, self.viewport, &self.config.metrics)
    }

    #[must_use]
    pub fn capture_center(&self, lane: Lane) -> Vec2 {
        geometry::capture_center(lane, &self.canvas, self.viewport, &self.config.metrics)
    }

    /// Enter `Running` with a fresh token collection, zeroed counters and
    /// an unset clock baseline.
    pub fn start(&mut self) {
        self.phase = SessionPhase::Running;
        self.tokens.clear();
        self.score = 0;
        self.misses = 0;
        self.captures = 0;
        self.remaining_ms = self.config.countdown_ms;
        self.last_tick_ms = None;
        self.last_spawn_ms = None;
        self.summary_reported = false;
    }

    /// Explicit `Running` -> `Ended` transition. Returns the summary on the
    /// transition and `None` on any later call.
    pub fn stop(&mut self) -> Option<SessionSummary> {
        if self.phase == SessionPhase::Running {
            self.end_session()
        } else {
            None
        }
    }

    /// One frame: spawn, move, evict misses, count down, in that order.
    /// The first tick after `start` only records the clock baseline.
    pub fn tick(&mut self, now_ms: f64) -> TickReport {
        let mut report = TickReport::default();
        if self.phase != SessionPhase::Running {
            return report;
        }
        let Some(last) = self.last_tick_ms else {
            self.last_tick_ms = Some(now_ms);
            self.last_spawn_ms = Some(now_ms);
            return report;
        };
        let dt_ms = (now_ms - last).max(0.0);
        self.last_tick_ms = Some(now_ms);

        if let Some(last_spawn) = self.last_spawn_ms
            && now_ms - last_spawn >= self.config.spawn_interval_ms
        {
            self.last_spawn_ms = Some(now_ms);
            report.spawned = self.spawn_random(now_ms);
        }

        let dt_secs = dt_ms / 1000.0;
        if dt_secs > 0.0 {
            for token in &mut self.tokens {
                token.advance(dt_secs, self.config.move_speed);
            }
        }

        let (vw, vh) = (self.viewport.width, self.viewport.height);
        self.tokens.retain(|token| {
            if token.lane.exit_crossed(token.x, token.y, vw, vh) {
                report.missed.push(token.clone());
                false
            } else {
                true
            }
        });
        if !report.missed.is_empty() {
            self.misses += report.missed.len() as u32;
            report.counters_changed = true;
        }

        if let Some(remaining) = self.remaining_ms.as_mut() {
            *remaining = (*remaining - dt_ms).max(0.0);
            if *remaining <= 0.0 {
                report.ended = self.end_session();
            }
        }
        report
    }

    /// Resolve a directional key press. Removes and returns the eligible
    /// token closest to its exit edge; `None` when nothing is eligible,
    /// which is not an error.
    pub fn capture(&mut self, key: CaptureKey) -> Option<CaptureOutcome> {
        if self.phase != SessionPhase::Running {
            return None;
        }
        let lane = key.lane();
        let center = self.capture_center(lane);
        let center_progress = lane.progress(center.x, center.y);

        let mut best: Option<usize> = None;
        for (i, token) in self.tokens.iter().enumerate() {
            if token.lane != lane {
                continue;
            }
            if let CaptureRule::Tolerance { px } = self.config.capture_rule
                && (token.progress() - center_progress).abs() > px
            {
                continue;
            }
            match best {
                Some(j) if self.tokens[j].progress() >= token.progress() => {}
                _ => best = Some(i),
            }
        }

        let token = self.tokens.swap_remove(best?);
        self.captures += 1;
        let points = match self.config.scoring {
            ScoringMode::PerCapture { points } => points,
            ScoringMode::External => 0,
        };
        self.score = self.score.saturating_add(points);
        Some(CaptureOutcome { token, points })
    }

    /// Add judge-assigned points in external scoring mode. Only a running
    /// session accepts points; once the summary is reported the score is
    /// final, so a judge verdict resolving late is ignored.
    pub fn award(&mut self, points: u32) {
        if self.phase == SessionPhase::Running {
            self.score = self.score.saturating_add(points);
        }
    }

    /// Place a token at the lane's spawn point. The scheduler goes through
    /// here; tests use it to set up exact board states.
    pub fn spawn_token(&mut self, lane: Lane, symbol: char, now_ms: f64) -> TokenId {
        let at = geometry::spawn_point(lane, &self.canvas, self.viewport, &self.config.metrics);
        let id = TokenId(self.next_token_id);
        self.next_token_id += 1;
        self.tokens.push(Token {
            id,
            symbol,
            lane,
            x: at.x,
            y: at.y,
            spawned_at_ms: now_ms,
        });
        id
    }

    fn spawn_random(&mut self, now_ms: f64) -> Option<TokenId> {
        if self.tokens.len() >= self.config.max_live_tokens {
            return None;
        }
        let lane = Lane::ALL[self.rng.lane().pick_index(Lane::ALL.len())];
        let pool = self.config.pools.pool(lane);
        if pool.is_empty() {
            return None;
        }
        let symbol = pool[self.rng.symbol().pick_index(pool.len())];
        Some(self.spawn_token(lane, symbol, now_ms))
    }

    fn end_session(&mut self) -> Option<SessionSummary> {
        self.phase = SessionPhase::Ended;
        if self.summary_reported {
            None
        } else {
            self.summary_reported = true;
            Some(SessionSummary {
                score: self.score,
                misses: self.misses,
                captures: self.captures,
            })
        }
    }
}

//! End-to-end scenarios for the conveyor engine, driven through the public
//! session API exactly the way the frame loop and key handler drive it.

use kanjibelt_game::{
    CaptureKey, CaptureRule, ConveyorConfig, ConveyorSession, Lane, LaneMetrics, Rect, ScoringMode,
    Viewport,
};

fn standard_geometry(session: &mut ConveyorSession) {
    session.set_geometry(
        Viewport {
            width: 800.0,
            height: 600.0,
        },
        Rect::new(200.0, 150.0, 400.0, 300.0),
    );
}

fn untimed(rule: CaptureRule) -> ConveyorSession {
    let config = ConveyorConfig {
        countdown_ms: None,
        capture_rule: rule,
        ..ConveyorConfig::default()
    };
    let mut session = ConveyorSession::new(config, 1).unwrap();
    standard_geometry(&mut session);
    session
}

// Like `untimed`, but the scheduler never fires; only manual spawns exist.
fn quiet(rule: CaptureRule) -> ConveyorSession {
    let config = ConveyorConfig {
        countdown_ms: None,
        capture_rule: rule,
        spawn_interval_ms: 1e9,
        ..ConveyorConfig::default()
    };
    let mut session = ConveyorSession::new(config, 1).unwrap();
    standard_geometry(&mut session);
    session
}

#[test]
fn top_lane_token_travels_300px_in_two_seconds() {
    let mut session = untimed(CaptureRule::LaneWide);
    session.start();
    session.tick(0.0);
    let id = session.spawn_token(Lane::Top, '木', 0.0);

    // ~60fps frames over 2.0s of wall clock.
    let mut now: f64 = 0.0;
    while now < 2_000.0 {
        now = (now + 16.0).min(2_000.0);
        session.tick(now);
    }

    let token = session.tokens().iter().find(|t| t.id == id).unwrap();
    assert!(
        (token.x - 300.0).abs() < 1.0,
        "expected x ~= 300, got {}",
        token.x
    );
}

#[test]
fn kinematics_integrate_exactly_over_uneven_frames() {
    let mut session = untimed(CaptureRule::LaneWide);
    session.start();
    session.tick(0.0);
    let id = session.spawn_token(Lane::Right, '日', 0.0);
    let y0 = session.tokens()[0].y;

    // Irregular deltas; the sum is what matters, not the partition.
    let deltas = [3.0, 41.0, 7.0, 160.0, 16.0, 16.0, 257.0];
    let mut now = 0.0;
    for d in deltas {
        now += d;
        session.tick(now);
    }
    let expected = y0 + 150.0 * (now / 1000.0);
    let token = session.tokens().iter().find(|t| t.id == id).unwrap();
    assert!((token.y - expected).abs() < 1e-6);
}

#[test]
fn left_lane_capture_prefers_the_token_nearest_its_exit() {
    let mut session = quiet(CaptureRule::LaneWide);
    session.start();
    session.tick(0.0);
    // Older token has travelled 3s (y = 600 - 450 = 150); the fresh one
    // still sits at the entry edge (y = 600).
    let older = session.spawn_token(Lane::Left, '心', 0.0);
    session.tick(3_000.0);
    let fresh = session.spawn_token(Lane::Left, '扌', 3_000.0);

    let outcome = session.capture(CaptureKey::Left).unwrap();
    assert_eq!(outcome.token.id, older, "y=150 is closer to the y<0 exit");
    assert_eq!(session.tokens()[0].id, fresh);
}

#[test]
fn lane_thickness_clamps_to_its_floor_at_canvas_width_400() {
    let metrics = LaneMetrics::default();
    let canvas = Rect::new(200.0, 150.0, 400.0, 300.0);
    let viewport = Viewport {
        width: 800.0,
        height: 600.0,
    };
    let rect = kanjibelt_game::lane_rect(Lane::Top, &canvas, viewport, &metrics);
    assert!((rect.height - 60.0).abs() < f64::EPSILON);
}

#[test]
fn exactly_three_spawns_fire_in_a_4600ms_session() {
    let mut session = untimed(CaptureRule::LaneWide);
    session.start();
    session.tick(0.0);

    let mut fire_times = Vec::new();
    let mut now = 0.0;
    while now < 4_600.0 {
        now += 16.0;
        if session.tick(now).spawned.is_some() {
            fire_times.push(now);
        }
    }
    assert_eq!(fire_times.len(), 3, "fired at {fire_times:?}");
    for (fired, nominal) in fire_times.iter().zip([1_500.0, 3_000.0, 4_500.0]) {
        assert!(
            (fired - nominal).abs() <= 32.0,
            "fire at {fired} too far from {nominal}"
        );
    }
}

#[test]
fn timed_session_reports_game_end_exactly_once() {
    let config = ConveyorConfig {
        countdown_ms: Some(2_000.0),
        ..ConveyorConfig::default()
    };
    let mut session = ConveyorSession::new(config, 3).unwrap();
    standard_geometry(&mut session);
    session.start();
    session.tick(0.0);

    let mut endings = 0;
    let mut last_remaining = f64::INFINITY;
    let mut now = 0.0;
    while now < 3_000.0 {
        now += 16.0;
        let report = session.tick(now);
        if let Some(remaining) = session.remaining_ms() {
            assert!(remaining <= last_remaining, "countdown must not increase");
            assert!(remaining >= 0.0, "countdown must clamp at zero");
            last_remaining = remaining;
        }
        if report.ended.is_some() {
            endings += 1;
        }
    }
    assert_eq!(endings, 1);
    assert_eq!(session.remaining_ms(), Some(0.0));
    assert!(session.stop().is_none());
}

#[test]
fn capture_count_scoring_matches_successful_captures() {
    let mut session = untimed(CaptureRule::LaneWide);
    session.start();
    session.tick(0.0);
    for _ in 0..4 {
        session.spawn_token(Lane::Bottom, '土', 0.0);
        session.capture(CaptureKey::Down).unwrap();
    }
    // A press with nothing eligible scores nothing.
    assert!(session.capture(CaptureKey::Down).is_none());
    assert_eq!(session.captures(), 4);
    assert_eq!(session.score(), 400);
}

#[test]
fn no_token_is_both_captured_and_missed_over_a_full_run() {
    let mut session = untimed(CaptureRule::LaneWide);
    session.start();
    session.tick(0.0);

    let mut captured = Vec::new();
    let mut missed = Vec::new();
    let mut now = 0.0;
    // Alternate frames and greedy captures for 30 simulated seconds.
    let keys = [
        CaptureKey::Up,
        CaptureKey::Right,
        CaptureKey::Down,
        CaptureKey::Left,
    ];
    let mut presses = 0usize;
    while now < 30_000.0 {
        now += 16.0;
        let report = session.tick(now);
        missed.extend(report.missed.iter().map(|t| t.id));
        if presses % 3 == 0
            && let Some(outcome) = session.capture(keys[presses % keys.len()])
        {
            captured.push(outcome.token.id);
        }
        presses += 1;
    }

    for id in &captured {
        assert!(!missed.contains(id), "token {id:?} captured and missed");
    }
    assert_eq!(session.misses() as usize, missed.len());
    assert_eq!(session.captures() as usize, captured.len());
}

#[test]
fn same_seed_yields_identical_spawn_sequences() {
    let run = |seed: u64| {
        let config = ConveyorConfig {
            countdown_ms: None,
            ..ConveyorConfig::default()
        };
        let mut session = ConveyorSession::new(config, seed).unwrap();
        standard_geometry(&mut session);
        session.start();
        session.tick(0.0);
        let mut spawned = Vec::new();
        let mut now = 0.0;
        while now < 20_000.0 {
            now += 16.0;
            if session.tick(now).spawned.is_some() {
                let token = session.tokens().last().unwrap();
                spawned.push((token.lane, token.symbol));
            }
        }
        spawned
    };
    assert_eq!(run(99), run(99));
    assert_ne!(run(99), run(100));
}

#[test]
fn external_scoring_leaves_the_session_judge_driven() {
    let config = ConveyorConfig {
        countdown_ms: None,
        capture_rule: CaptureRule::LaneWide,
        scoring: ScoringMode::External,
        ..ConveyorConfig::default()
    };
    let mut session = ConveyorSession::new(config, 5).unwrap();
    standard_geometry(&mut session);
    session.start();
    session.tick(0.0);
    session.spawn_token(Lane::Top, '亻', 0.0);
    session.capture(CaptureKey::Up).unwrap();
    assert_eq!(session.score(), 0);
    session.award(500);
    let summary = session.stop().unwrap();
    assert_eq!(summary.score, 500);
    assert_eq!(summary.captures, 1);
}

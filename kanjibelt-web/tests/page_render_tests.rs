use futures::executor::block_on;
use kanjibelt_game::{AssemblyBoard, SessionSummary};
use kanjibelt_web::components::assembly_stage::{AssemblyStage, AssemblyStageProps};
use kanjibelt_web::components::hud::{Hud, HudProps};
use kanjibelt_web::pages::game::{GamePage, GamePageProps};
use kanjibelt_web::pages::menu::{MenuPage, MenuPageProps};
use kanjibelt_web::pages::result::{ResultPage, ResultPageProps};
use kanjibelt_web::services::RankingEntry;
use yew::LocalServerRenderer;
use yew::prelude::*;

#[test]
fn menu_page_lists_the_key_bindings() {
    let props = MenuPageProps {
        on_start: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<MenuPage>::with_props(props).render());
    assert!(html.contains("Kanjibelt"));
    assert!(html.contains("Start"));
    assert!(html.contains("arrow keys"));
}

#[test]
fn hud_shows_all_four_counters() {
    let props = HudProps {
        score: 700,
        misses: 4,
        captures: 7,
        remaining_ms: Some(42_000.0),
    };
    let html = block_on(LocalServerRenderer::<Hud>::with_props(props).render());
    assert!(html.contains("Score 700"));
    assert!(html.contains("Caught 7"));
    assert!(html.contains("Missed 4"));
    assert!(html.contains("42s"));
}

#[test]
fn assembly_stage_renders_placed_parts_and_controls() {
    let mut board = AssemblyBoard::default();
    board.add_part("person", '亻', 60.0, 60.0);
    board.add_part("tree", '木', 130.0, 60.0);
    let props = AssemblyStageProps {
        board,
        stage_ref: NodeRef::default(),
        on_select: Callback::noop(),
        on_delete: Callback::noop(),
        on_judge: Callback::noop(),
        judge_message: Some(AttrValue::from("Judge saw 体, keep arranging")),
    };
    let html = block_on(LocalServerRenderer::<AssemblyStage>::with_props(props).render());
    assert!(html.contains("Target: 休"));
    assert!(html.contains('亻'));
    assert!(html.contains('木'));
    assert!(html.contains("Judge"));
    assert!(html.contains("keep arranging"));
}

#[test]
fn game_page_mounts_conveyor_around_the_stage() {
    let props = GamePageProps {
        seed: 1,
        on_finished: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<GamePage>::with_props(props).render());
    assert!(html.contains("data-testid=\"conveyor\""));
    assert!(html.contains("data-testid=\"assembly\""));
    assert!(html.contains("Target: 休"));
}

#[test]
fn result_page_reports_the_summary_once() {
    let props = ResultPageProps {
        summary: SessionSummary {
            score: 900,
            misses: 3,
            captures: 9,
        },
        submit_status: Some(AttrValue::from("Score saved")),
        rankings: Some(vec![RankingEntry {
            rank: 1,
            user_name: "aki".to_string(),
            score: 1200,
            created_at: String::new(),
        }]),
        on_submit: Callback::noop(),
        on_replay: Callback::noop(),
        on_title: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<ResultPage>::with_props(props).render());
    assert!(html.contains("900"));
    assert!(html.contains("Play again"));
    assert!(html.contains("Score saved"));
    assert!(html.contains("aki: 1200"));
}

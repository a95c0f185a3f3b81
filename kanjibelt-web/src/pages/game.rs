//! The play screen: conveyor overlay around the assembly stage, plus the
//! judge round-trip.

use crate::components::assembly_stage::AssemblyStage;
use crate::components::conveyor::Conveyor;
use crate::services::{JudgeClient, JudgeRequest};
use kanjibelt_game::{
    AssemblyBoard, CaptureOutcome, ConveyorConfig, ConveyorSession, PartCatalog, ScoringMode,
    SessionSummary,
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// Points the session is awarded when the judge accepts the board.
const JUDGE_BONUS_POINTS: u32 = 500;

#[derive(Properties, Clone, PartialEq)]
pub struct GamePageProps {
    pub seed: u64,
    pub on_finished: Callback<SessionSummary>,
}

/// Stage-local position for the nth captured part. Slots cascade across
/// rows so consecutive captures never land on top of each other.
#[must_use]
pub fn drop_position(slot: usize) -> (f64, f64) {
    let col = slot % 6;
    let row = (slot / 6) % 5;
    (60.0 + col as f64 * 70.0, 60.0 + row as f64 * 70.0)
}

/// Judge-driven deployment: captures stay score-neutral, every point comes
/// through `award` on an accepted verdict.
fn page_session_config() -> ConveyorConfig {
    ConveyorConfig {
        scoring: ScoringMode::External,
        ..ConveyorConfig::load_from_static()
    }
}

fn judge_request_for(board: &AssemblyBoard) -> anyhow::Result<JudgeRequest> {
    let image = crate::dom::board_to_data_url(board, 480, 480)
        .map_err(|err| anyhow::anyhow!(crate::dom::js_error_message(&err)))?;
    Ok(JudgeRequest {
        target_kanji: board.target().to_string(),
        image_data_url: image,
    })
}

#[function_component(GamePage)]
pub fn game_page(props: &GamePageProps) -> Html {
    let seed = props.seed;
    let session = use_mut_ref(move || {
        ConveyorSession::new(page_session_config(), seed)
            .expect("embedded conveyor config should be valid")
    });
    let catalog = use_memo((), |_| PartCatalog::load_from_static());
    let board = use_state(AssemblyBoard::default);
    let judge_message = use_state(|| None::<String>);
    let stage_ref = use_node_ref();

    let on_capture = {
        let board = board.clone();
        let catalog = catalog.clone();
        Callback::from(move |outcome: CaptureOutcome| {
            let mut next = (*board).clone();
            let (x, y) = drop_position(next.placed().len());
            let part_id = catalog
                .by_label(outcome.token.symbol)
                .map_or_else(|| outcome.token.symbol.to_string(), |p| p.id.clone());
            next.add_part(&part_id, outcome.token.symbol, x, y);
            log::info!(
                "captured {} from the {} belt",
                outcome.token.symbol,
                outcome.token.lane
            );
            board.set(next);
        })
    };

    let on_select = {
        let board = board.clone();
        Callback::from(move |id: Option<u64>| {
            let mut next = (*board).clone();
            next.select(id);
            board.set(next);
        })
    };

    let on_delete = {
        let board = board.clone();
        Callback::from(move |()| {
            let mut next = (*board).clone();
            next.delete_selected();
            board.set(next);
        })
    };

    let on_judge = {
        let board = board.clone();
        let session = session.clone();
        let judge_message = judge_message.clone();
        Callback::from(move |()| {
            let request = match judge_request_for(&board) {
                Ok(request) => request,
                Err(err) => {
                    log::warn!("board rasterization failed: {err}");
                    judge_message.set(Some("Could not capture the board".to_string()));
                    return;
                }
            };
            let snapshot = (*board).clone();
            let board = board.clone();
            let session = session.clone();
            let judge_message = judge_message.clone();
            spawn_local(async move {
                match JudgeClient::default().judge(&request).await {
                    Ok(verdict) if verdict.ok && snapshot.matches(&verdict.recognized) => {
                        session.borrow_mut().award(JUDGE_BONUS_POINTS);
                        judge_message.set(Some(format!(
                            "Recognized {} ({:.0}% sure), +{JUDGE_BONUS_POINTS}",
                            verdict.recognized,
                            verdict.confidence * 100.0
                        )));
                        let mut next = snapshot;
                        next.reset();
                        board.set(next);
                    }
                    Ok(verdict) => {
                        let seen = if verdict.recognized.is_empty() {
                            "nothing readable".to_string()
                        } else {
                            verdict.recognized
                        };
                        judge_message.set(Some(format!("Judge saw {seen}, keep arranging")));
                    }
                    Err(err) => {
                        log::warn!("judge request failed: {err}");
                        judge_message.set(Some("Judge unavailable".to_string()));
                    }
                }
            });
        })
    };

    html! {
        <div class="game-screen" data-testid="game-screen">
            <Conveyor
                session={session.clone()}
                stage_ref={stage_ref.clone()}
                on_capture={on_capture}
                on_finished={props.on_finished.clone()}
            />
            <AssemblyStage
                board={(*board).clone()}
                stage_ref={stage_ref}
                on_select={on_select}
                on_delete={on_delete}
                on_judge={on_judge}
                judge_message={(*judge_message).clone().map(AttrValue::from)}
            />
        </div>
    }
}

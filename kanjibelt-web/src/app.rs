//! Root component: the Menu -> Playing -> Result phase machine.

use crate::pages::game::GamePage;
use crate::pages::menu::MenuPage;
use crate::pages::result::ResultPage;
use crate::services::{RankingClient, RankingEntry, ScoreSubmission};
use kanjibelt_game::SessionSummary;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Phase {
    Menu,
    Playing { seed: u64 },
    Result(SessionSummary),
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn seed_from_clock() -> u64 {
    js_sys::Date::now() as u64
}

#[function_component(App)]
pub fn app() -> Html {
    let phase = use_state(|| Phase::Menu);
    let submit_status = use_state(|| None::<String>);
    let rankings = use_state(|| None::<Vec<RankingEntry>>);

    let on_start = {
        let phase = phase.clone();
        Callback::from(move |()| {
            phase.set(Phase::Playing {
                seed: seed_from_clock(),
            });
        })
    };
    let on_finished = {
        let phase = phase.clone();
        let submit_status = submit_status.clone();
        let rankings = rankings.clone();
        Callback::from(move |summary: SessionSummary| {
            log::info!(
                "session over: score {} caught {} missed {}",
                summary.score,
                summary.captures,
                summary.misses
            );
            submit_status.set(None);
            rankings.set(None);
            phase.set(Phase::Result(summary));
        })
    };
    let on_replay = {
        let phase = phase.clone();
        Callback::from(move |()| {
            phase.set(Phase::Playing {
                seed: seed_from_clock(),
            });
        })
    };
    let on_title = {
        let phase = phase.clone();
        Callback::from(move |()| phase.set(Phase::Menu))
    };
    let on_submit = {
        let phase = phase.clone();
        let submit_status = submit_status.clone();
        let rankings = rankings.clone();
        Callback::from(move |user_name: String| {
            let Phase::Result(summary) = *phase else {
                return;
            };
            let submit_status = submit_status.clone();
            let rankings = rankings.clone();
            spawn_local(async move {
                let submission = ScoreSubmission {
                    user_name,
                    score: summary.score,
                };
                let client = RankingClient::default();
                match client.submit(&submission).await {
                    Ok(response) if response.success => {
                        submit_status.set(Some(if response.message.is_empty() {
                            "Score saved".to_string()
                        } else {
                            response.message
                        }));
                        match client.rankings().await {
                            Ok(board) => rankings.set(Some(board.rankings)),
                            Err(err) => log::warn!("ranking fetch failed: {err}"),
                        }
                    }
                    Ok(response) => {
                        submit_status.set(Some(format!("Rejected: {}", response.message)));
                    }
                    Err(err) => {
                        log::warn!("score submit failed: {err}");
                        submit_status.set(Some("Submit failed, try again".to_string()));
                    }
                }
            });
        })
    };

    match *phase {
        Phase::Menu => html! { <MenuPage on_start={on_start} /> },
        Phase::Playing { seed } => html! {
            <GamePage key={seed} {seed} on_finished={on_finished} />
        },
        Phase::Result(summary) => html! {
            <ResultPage
                {summary}
                submit_status={(*submit_status).clone().map(AttrValue::from)}
                rankings={(*rankings).clone()}
                on_submit={on_submit}
                on_replay={on_replay}
                on_title={on_title}
            />
        },
    }
}

use crate::services::RankingEntry;
use kanjibelt_game::SessionSummary;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct ResultPageProps {
    pub summary: SessionSummary,
    #[prop_or_default]
    pub submit_status: Option<AttrValue>,
    /// Top scores, shown once the submission round-trip has fetched them.
    #[prop_or_default]
    pub rankings: Option<Vec<RankingEntry>>,
    pub on_submit: Callback<String>,
    pub on_replay: Callback<()>,
    pub on_title: Callback<()>,
}

/// Trimmed player name, or `None` when there is nothing to submit.
#[must_use]
pub fn submitted_name(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[function_component(ResultPage)]
pub fn result_page(props: &ResultPageProps) -> Html {
    let name_ref = use_node_ref();

    let on_submit_click = {
        let name_ref = name_ref.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(input) = name_ref.cast::<HtmlInputElement>() else {
                return;
            };
            if let Some(name) = submitted_name(&input.value()) {
                on_submit.emit(name);
            }
        })
    };
    let on_replay = {
        let cb = props.on_replay.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let on_title = {
        let cb = props.on_title.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    html! {
        <div class="result-screen" data-testid="result-screen">
            <h1>{ "Time's up" }</h1>
            <dl class="result-counters">
                <dt>{ "Score" }</dt>
                <dd>{ props.summary.score }</dd>
                <dt>{ "Caught" }</dt>
                <dd>{ props.summary.captures }</dd>
                <dt>{ "Missed" }</dt>
                <dd>{ props.summary.misses }</dd>
            </dl>
            <div class="result-submit">
                <input ref={name_ref} placeholder="Your name" maxlength="24" />
                <button onclick={on_submit_click}>{ "Submit score" }</button>
                if let Some(status) = &props.submit_status {
                    <span class="submit-status">{ status.clone() }</span>
                }
            </div>
            if let Some(rankings) = &props.rankings {
                <ol class="result-rankings">
                    { for rankings.iter().map(|entry| html! {
                        <li key={entry.rank}>
                            { format!("{}: {}", entry.user_name, entry.score) }
                        </li>
                    }) }
                </ol>
            }
            <div class="result-actions">
                <button onclick={on_replay}>{ "Play again" }</button>
                <button onclick={on_title}>{ "Back to title" }</button>
            </div>
        </div>
    }
}

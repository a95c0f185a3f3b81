//! Assembly stage: the central surface where captured parts pile up.

use kanjibelt_game::AssemblyBoard;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct AssemblyStageProps {
    pub board: AssemblyBoard,
    /// Exposed so the conveyor can wrap its lanes around this element.
    pub stage_ref: NodeRef,
    pub on_select: Callback<Option<u64>>,
    pub on_delete: Callback<()>,
    pub on_judge: Callback<()>,
    #[prop_or_default]
    pub judge_message: Option<AttrValue>,
}

fn part_style(x: f64, y: f64, scale: f64, rotation: f64, z_index: u32) -> String {
    format!(
        "position:absolute;left:{x}px;top:{y}px;z-index:{z_index};\
         transform:translate(-50%,-50%) scale({scale}) rotate({rotation}rad);"
    )
}

#[function_component(AssemblyStage)]
pub fn assembly_stage(props: &AssemblyStageProps) -> Html {
    let parts = props.board.placed().iter().map(|part| {
        let selected = props.board.selected() == Some(part.instance_id);
        let onclick = {
            let on_select = props.on_select.clone();
            let id = part.instance_id;
            Callback::from(move |event: MouseEvent| {
                event.stop_propagation();
                on_select.emit(Some(id));
            })
        };
        html! {
            <span
                key={part.instance_id}
                class={classes!("placed-part", selected.then_some("selected"))}
                style={part_style(part.x, part.y, part.scale, part.rotation, part.z_index)}
                {onclick}
            >
                { part.label }
            </span>
        }
    });

    let clear_selection = {
        let on_select = props.on_select.clone();
        Callback::from(move |_: MouseEvent| on_select.emit(None))
    };
    let on_delete = {
        let cb = props.on_delete.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let on_judge = {
        let cb = props.on_judge.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    html! {
        <div class="assembly" data-testid="assembly">
            <div class="assembly-target">
                { format!("Target: {}", props.board.target()) }
            </div>
            <div
                ref={props.stage_ref.clone()}
                class="assembly-stage"
                onclick={clear_selection}
            >
                { for parts }
            </div>
            <div class="assembly-controls">
                <button onclick={on_delete} disabled={props.board.selected().is_none()}>
                    { "Remove" }
                </button>
                <button onclick={on_judge} disabled={props.board.placed().is_empty()}>
                    { "Judge" }
                </button>
                if let Some(message) = &props.judge_message {
                    <span class="judge-message">{ message.clone() }</span>
                }
            </div>
        </div>
    }
}

//! Conveyor overlay: the frame loop and the capture keys.
//!
//! Lanes and tokens are absolutely positioned over the page; geometry is
//! re-read from the stage element every frame, so window resizes need no
//! extra listener. The animation-frame handle cancels on drop, which makes
//! the effect cleanup the single shutdown path.

use gloo::events::EventListener;
use gloo::render::{AnimationFrame, request_animation_frame};
use kanjibelt_game::{CaptureKey, CaptureOutcome, ConveyorSession, Lane, Rect, SessionSummary};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

#[derive(Properties, Clone)]
pub struct ConveyorProps {
    pub session: Rc<RefCell<ConveyorSession>>,
    /// Element the lanes wrap around; its bounding rect is the canvas.
    pub stage_ref: NodeRef,
    pub on_capture: Callback<CaptureOutcome>,
    pub on_finished: Callback<SessionSummary>,
}

impl PartialEq for ConveyorProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.session, &other.session) && self.stage_ref == other.stage_ref
    }
}

#[must_use]
pub fn rect_style(rect: &Rect) -> String {
    format!(
        "position:fixed;left:{}px;top:{}px;width:{}px;height:{}px;",
        rect.left, rect.top, rect.width, rect.height
    )
}

#[must_use]
pub fn token_style(x: f64, y: f64) -> String {
    format!("position:fixed;left:{x}px;top:{y}px;transform:translate(-50%,-50%);")
}

type FrameSlot = Rc<RefCell<Option<AnimationFrame>>>;

fn schedule_frame(
    slot: FrameSlot,
    session: Rc<RefCell<ConveyorSession>>,
    stage_ref: NodeRef,
    repaint: UseStateSetter<u64>,
    tick_count: u64,
    on_finished: Callback<SessionSummary>,
) {
    let next = {
        let slot = slot.clone();
        request_animation_frame(move |now_ms| {
            let report = {
                let mut session = session.borrow_mut();
                if let Some(element) = stage_ref.cast::<web_sys::Element>() {
                    session.set_geometry(crate::dom::viewport(), crate::dom::element_rect(&element));
                }
                session.tick(now_ms)
            };
            if !report.missed.is_empty() {
                log::debug!("{} token(s) reached the exit edge", report.missed.len());
            }
            if let Some(summary) = report.ended {
                on_finished.emit(summary);
                return;
            }
            repaint.set(tick_count + 1);
            schedule_frame(
                slot,
                session,
                stage_ref,
                repaint,
                tick_count + 1,
                on_finished,
            );
        })
    };
    *slot.borrow_mut() = Some(next);
}

#[function_component(Conveyor)]
pub fn conveyor(props: &ConveyorProps) -> Html {
    let repaint = use_state(|| 0u64);

    {
        let session = props.session.clone();
        let stage_ref = props.stage_ref.clone();
        let repaint = repaint.setter();
        let on_finished = props.on_finished.clone();
        use_effect_with((), move |_| {
            session.borrow_mut().start();
            let slot: FrameSlot = Rc::new(RefCell::new(None));
            schedule_frame(
                slot.clone(),
                session.clone(),
                stage_ref,
                repaint,
                0,
                on_finished,
            );
            move || {
                slot.borrow_mut().take();
                let _ = session.borrow_mut().stop();
            }
        });
    }

    {
        let session = props.session.clone();
        let on_capture = props.on_capture.clone();
        use_effect_with((), move |_| {
            let listener = EventListener::new(&crate::dom::document(), "keydown", move |event| {
                let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                    return;
                };
                let Some(key) = CaptureKey::from_event_key(&event.key()) else {
                    return;
                };
                // Arrow keys belong to the game while it runs.
                event.prevent_default();
                if let Some(outcome) = session.borrow_mut().capture(key) {
                    on_capture.emit(outcome);
                }
            });
            move || drop(listener)
        });
    }

    let session = props.session.borrow();
    let lanes = Lane::ALL.iter().map(|lane| {
        let rect = session.lane_rect(*lane);
        html! {
            <div
                key={lane.as_str()}
                class={classes!("lane", format!("lane-{}", lane.as_str()))}
                style={rect_style(&rect)}
            />
        }
    });
    let tokens = session.tokens().iter().map(|token| {
        html! {
            <span
                key={token.id.0}
                class="token"
                style={token_style(token.x, token.y)}
            >
                { token.symbol }
            </span>
        }
    });

    html! {
        <div class="conveyor" data-testid="conveyor" data-frame={repaint.to_string()}>
            <crate::components::hud::Hud
                score={session.score()}
                misses={session.misses()}
                captures={session.captures()}
                remaining_ms={session.remaining_ms()}
            />
            { for lanes }
            { for tokens }
        </div>
    }
}

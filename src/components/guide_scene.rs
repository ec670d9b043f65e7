//! Interactive Guide Scene
//!
//! Runs the flood scenario: stepper, current question, card slot, and the
//! previous / finish controls. An answer is recorded immediately and the
//! flow advances after a short pause; any newer answer or navigation within
//! the pause cancels that advance.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{CardSlot, Stepper};
use crate::context::use_app_context;
use crate::deck::DeckConfig;
use crate::flow::{FlowEvent, QuestionFlow, ADVANCE_DELAY_MS};
use crate::models::Answer;
use crate::questions::flood_scenario;

#[component]
pub fn GuideScene() -> impl IntoView {
    let ctx = use_app_context();
    let flow = RwSignal::new(QuestionFlow::new(flood_scenario()));
    // Bumped on every answer or navigation; a stale timer sees a newer value
    let generation = StoredValue::new(0u64);

    let bump = move || {
        generation
            .try_update_value(|g| {
                *g += 1;
                *g
            })
            .unwrap_or(0)
    };

    // The answer is stored at once; only the move to the next question waits
    let on_answer = Callback::new(move |answer: Option<Answer>| {
        let ticket = bump();
        let Some(answer) = answer else { return };
        let Some(recorded) = flow.try_update(|f| (f.current_index(), f.record(answer))) else {
            return;
        };
        match recorded {
            (_, Some(FlowEvent::Completed(_))) => log::info!("[FLOW] guide complete, results unlocked"),
            (_, Some(FlowEvent::Revised)) => log::debug!("[FLOW] last answer revised"),
            (index, _) => spawn_local(async move {
                TimeoutFuture::new(ADVANCE_DELAY_MS).await;
                if generation.try_get_value() != Some(ticket) {
                    return;
                }
                let advanced = flow
                    .try_update(|f| if f.current_index() == index { f.advance() } else { None })
                    .flatten();
                if let Some(FlowEvent::Advanced { to }) = advanced {
                    log::debug!("[FLOW] now on question {}", to + 1);
                }
            }),
        }
    });

    let go_back = move |_| {
        bump();
        if let Some(Err(e)) = flow.try_update(|f| f.go_back()) {
            log::debug!("[FLOW] previous refused: {}", e);
        }
    };
    let finish = move |_| {
        if let Some(handoff) = flow.with_untracked(|f| f.handoff()) {
            ctx.show_results(handoff);
        }
    };

    let count = flow.with_untracked(|f| f.questions().len());
    let current = Memo::new(move |_| flow.with(|f| f.current_index()));
    let answered = Signal::derive(move || flow.with(|f| (0..f.questions().len()).map(|i| f.is_answered(i)).collect::<Vec<_>>()));
    let has_completed = move || flow.with(|f| f.has_completed());
    let on_last = move || current.get() + 1 == count;

    view! {
        <section class="scene guide-scene">
            <Stepper count=count active=current answered=answered />

            // Remount the widget for each question
            {move || {
                let index = current.get();
                let (question, initial) = flow.with_untracked(|f| {
                    (f.questions().get(index).cloned(), f.current_answer().cloned())
                });
                question.map(|question| view! {
                    <div class="question">
                        <h2>{question.text.clone()}</h2>
                        <CardSlot
                            config=DeckConfig::from_choices(&question.choices)
                            initial=initial
                            on_answer=on_answer
                        />
                    </div>
                })
            }}

            <nav class="guide-nav">
                <button on:click=go_back disabled=move || current.get() == 0>
                    "Previous"
                </button>
                <span class="progress">
                    {move || format!("Question {} of {}", current.get() + 1, count)}
                </span>
                <Show when=move || on_last() && has_completed()>
                    <button class="finish" on:click=finish>"Finish"</button>
                </Show>
            </nav>
        </section>
    }
}

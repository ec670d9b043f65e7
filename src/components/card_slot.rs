//! Card Slot Component
//!
//! One question's cards fanned out at the bottom, a single answer slot above
//! them, and an optional free-text entry. Cards move by mouse or touch drag
//! through leptos-dragdrop; the deck model decides what a drop means.

use leptos::html::Div;
use leptos::prelude::*;

use leptos_dragdrop::*;

use crate::deck::{CardDeck, DeckChange, DeckConfig, FREE_TEXT_MAX_CHARS};
use crate::models::Answer;

/// Total rotation spread of the fan, in degrees
const FAN_SPREAD_DEG: f64 = 70.0;
const COMPACT_WIDTH_PX: f64 = 768.0;

/// Rotation of the card at `index` in a fan of `total`
fn fan_angle(index: usize, total: usize, compact: bool) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let offset = index as f64 - (total as f64 - 1.0) / 2.0;
    let scale = if compact { 0.6 } else { 1.0 };
    offset * (FAN_SPREAD_DEG / total as f64) * scale
}

/// Middle cards stack on top
fn fan_z_index(index: usize, total: usize) -> i32 {
    let offset = index as f64 - (total as f64 - 1.0) / 2.0;
    (total as f64 - offset.abs()).round() as i32
}

fn is_compact() -> bool {
    web_sys::window()
        .and_then(|win| win.inner_width().ok())
        .and_then(|w| w.as_f64())
        .is_some_and(|w| w < COMPACT_WIDTH_PX)
}

fn card_id_of(element: &web_sys::Element) -> Option<u32> {
    element.get_attribute("data-card-id")?.parse().ok()
}

/// Card-slot widget. `on_answer` receives the answer whenever the slot is
/// filled or free text is submitted, and `None` when the slot is emptied.
#[component]
pub fn CardSlot(
    config: DeckConfig,
    initial: Option<Answer>,
    on_answer: Callback<Option<Answer>>,
) -> impl IntoView {
    let allow_free_text = config.allow_free_text;
    let initial_text = match &initial {
        Some(Answer::FreeText { text }) => text.clone(),
        _ => String::new(),
    };
    let deck = RwSignal::new(CardDeck::seeded(config.cards, initial.as_ref()));
    let (free_text, set_free_text) = signal(initial_text);

    let slot_ref = NodeRef::<Div>::new();
    let source_ref = NodeRef::<Div>::new();

    // Slot, source area and any other slotted card, measured on every move.
    // Source cards are not item regions: their fan covers the whole
    // source area and would swallow every return.
    let measure_regions = Callback::new(move |dragged: u32| {
        let mut regions = RegionMap::new();
        if let Some(slot) = slot_ref.get_untracked() {
            regions.set_slot(page_rect(&slot));
            if let Ok(Some(card)) = slot.query_selector("[data-card-id]") {
                if let Some(id) = card_id_of(&card).filter(|id| *id != dragged) {
                    regions.push_item(id, page_rect(&card));
                }
            }
        }
        if let Some(source) = source_ref.get_untracked() {
            regions.set_source(page_rect(&source));
        }
        regions
    });
    let slotted = Callback::new(move |()| deck.with_untracked(|d| d.slotted_id()));
    let on_commit = Callback::new(move |commit: Commit| {
        match deck.try_update(|d| d.settle(commit)) {
            Some(DeckChange::Answered(answer)) => on_answer.run(Some(answer)),
            Some(DeckChange::Cleared) => on_answer.run(None),
            Some(DeckChange::Unchanged) | None => {}
        }
    });

    let ctl = DragController::new(measure_regions, slotted, on_commit);
    if let Some(listeners) = bind_document_listeners(ctl) {
        hold_until_cleanup(listeners);
    }
    let dnd = ctl.signals;

    let hovering_slot = move || dnd.hover_read.get() == Some(HoverTarget::Slot);
    let slot_class = move || {
        let mut c = String::from("answer-slot");
        if deck.with(|d| d.slotted().is_some()) { c.push_str(" filled"); }
        if hovering_slot() { c.push_str(" drop-target"); }
        c
    };
    let source_class = move || {
        let returning = dnd.hover_read.get() == Some(HoverTarget::Source)
            && dnd.dragging_id_read.get().is_some()
            && dnd.dragging_id_read.get() == deck.with(|d| d.slotted_id());
        if returning { "card-source drop-target" } else { "card-source" }
    };

    // Typing is only offered while the slot is empty and not being targeted
    let show_free_text = move || {
        allow_free_text && deck.with(|d| d.slotted().is_none()) && !hovering_slot()
    };
    let submit_free_text = move |_| {
        let answer = deck.with_untracked(|d| d.submit_free_text(&free_text.get_untracked()));
        if answer.is_some() {
            on_answer.run(answer);
        }
    };

    let source_cards = move || {
        let cards = deck.with(|d| d.source().to_vec());
        let total = cards.len();
        cards
            .into_iter()
            .enumerate()
            .map(|(index, card)| (index, total, card))
            .collect::<Vec<_>>()
    };
    let compact = is_compact();

    let ghost_label = move || {
        let id = dnd.dragging_id_read.get()?;
        deck.with(|d| {
            d.source()
                .iter()
                .chain(d.slotted())
                .find(|card| card.id == id)
                .map(|card| card.label.clone())
        })
    };
    let ghost_style = move || {
        let pointer = dnd.pointer_read.get();
        let (scroll_x, scroll_y) = scroll_offsets();
        format!(
            "position: fixed; left: {}px; top: {}px; transform: translate(-50%, -50%); pointer-events: none; z-index: 1000;",
            pointer.x - scroll_x,
            pointer.y - scroll_y
        )
    };

    view! {
        <div class="card-slot">
            <div node_ref=slot_ref class=slot_class>
                {move || match deck.with(|d| d.slotted().cloned()) {
                    Some(card) => {
                        let id = card.id;
                        let card_class = move || {
                            if ctl.is_dragging(id) { "card slotted dragging" } else { "card slotted" }
                        };
                        view! {
                            <div
                                class=card_class
                                style="touch-action: none;"
                                data-card-id=id.to_string()
                                on:mousedown=make_on_mousedown(ctl, id)
                                on:touchstart=make_on_touchstart(ctl, id)
                                on:touchmove=make_on_touchmove(ctl)
                                on:touchend=make_on_touchend(ctl)
                                on:touchcancel=make_on_touchcancel(ctl)
                            >
                                {card.label}
                            </div>
                        }.into_any()
                    }
                    None => view! {
                        <p class="slot-hint">"Drag your answer here"</p>
                    }.into_any(),
                }}
            </div>

            <Show when=show_free_text>
                <div class="free-text">
                    <label>"Your own answer:"</label>
                    <textarea
                        rows="3"
                        maxlength=FREE_TEXT_MAX_CHARS.to_string()
                        placeholder="Type your answer here..."
                        prop:value=free_text
                        on:input=move |ev| set_free_text.set(event_target_value(&ev))
                    />
                    <span class="char-count">
                        {move || format!("{}/{}", free_text.with(|t| t.chars().count()), FREE_TEXT_MAX_CHARS)}
                    </span>
                    <button
                        disabled=move || free_text.with(|t| t.trim().is_empty())
                        on:click=submit_free_text
                    >
                        "Submit"
                    </button>
                </div>
            </Show>

            <div node_ref=source_ref class=source_class>
                <For
                    each=source_cards
                    key=|(index, total, card)| (card.id, *index, *total)
                    children=move |(index, total, card)| {
                        let id = card.id;
                        let style = format!(
                            "transform: rotate({:.2}deg); z-index: {}; transform-origin: bottom center; touch-action: none;",
                            fan_angle(index, total, compact),
                            fan_z_index(index, total),
                        );
                        let card_class = move || {
                            if ctl.is_dragging(id) { "card dragging" } else { "card" }
                        };
                        view! {
                            <div
                                class=card_class
                                style=style
                                data-card-id=id.to_string()
                                on:mousedown=make_on_mousedown(ctl, id)
                                on:touchstart=make_on_touchstart(ctl, id)
                                on:touchmove=make_on_touchmove(ctl)
                                on:touchend=make_on_touchend(ctl)
                                on:touchcancel=make_on_touchcancel(ctl)
                            >
                                {card.label}
                            </div>
                        }
                    }
                />
            </div>

            {move || ghost_label().map(|label| view! {
                <div class="card-ghost" style=ghost_style>{label}</div>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_fan_is_symmetric() {
        assert!(close(fan_angle(0, 3, false), -70.0 / 3.0));
        assert!(close(fan_angle(1, 3, false), 0.0));
        assert!(close(fan_angle(2, 3, false), 70.0 / 3.0));
    }

    #[test]
    fn test_compact_fan_is_narrower() {
        assert!(close(fan_angle(2, 3, true), 70.0 / 3.0 * 0.6));
        assert!(close(fan_angle(0, 1, true), 0.0));
        assert!(close(fan_angle(0, 0, false), 0.0));
    }

    #[test]
    fn test_middle_card_on_top() {
        let z: Vec<i32> = (0..3).map(|i| fan_z_index(i, 3)).collect();
        assert_eq!(z, vec![2, 3, 2]);
    }
}

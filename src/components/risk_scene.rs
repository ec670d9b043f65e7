//! Risk Assessment Scene

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::router::Route;
use crate::store::{use_app_store, AppStateStoreFields};

const BRIEFING: [&str; 3] = [
    "Flooding can happen within minutes after heavy rain, with little warning.",
    "Water only 30 cm deep can carry a car away; never drive or walk through it.",
    "Know the highest floor of your home and keep an emergency kit within reach.",
];

#[component]
pub fn RiskScene() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let location = move || {
        match store.user_location().get() {
            Some(point) => view! {
                <p class="location">{format!("Your position: {:.4}, {:.4}", point.lat, point.lng)}</p>
            }.into_any(),
            None => view! {
                <p class="alert info">"No location set. The briefing below is general."</p>
            }.into_any(),
        }
    };

    view! {
        <section class="scene risk-scene">
            <h1>"Flood risk"</h1>
            {location}
            <ul class="briefing">
                {BRIEFING.iter().map(|line| view! { <li>{*line}</li> }).collect_view()}
            </ul>
            <nav>
                <button on:click=move |_| ctx.navigate(Route::Location)>"Change location"</button>
                <button class="primary" on:click=move |_| ctx.navigate(Route::InteractiveGuide)>
                    "Start the guide"
                </button>
            </nav>
        </section>
    }
}

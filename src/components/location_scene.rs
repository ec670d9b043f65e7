//! Location Scene
//!
//! Entry scene: the user enters coordinates before the risk briefing.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::LatLng;
use crate::router::Route;
use crate::store::{store_set_location, use_app_store, AppStateStoreFields};

#[component]
pub fn LocationScene() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let previous = store.user_location().get_untracked();
    let (lat, set_lat) = signal(previous.map(|p| p.lat.to_string()).unwrap_or_default());
    let (lng, set_lng) = signal(previous.map(|p| p.lng.to_string()).unwrap_or_default());
    let (error, set_error) = signal(None::<String>);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match LatLng::parse(&lat.get_untracked(), &lng.get_untracked()) {
            Ok(location) => {
                log::info!("[LOCATION] set to {:.4}, {:.4}", location.lat, location.lng);
                set_error.set(None);
                store_set_location(&store, location);
                ctx.navigate(Route::RiskAssessment);
            }
            Err(e) => set_error.set(Some(e.to_string())),
        }
    };

    view! {
        <section class="scene location-scene">
            <h1>"Where are you?"</h1>
            <p>"Enter your position to see the flood risk around you."</p>
            <form on:submit=on_submit>
                <label>
                    "Latitude"
                    <input
                        type="text"
                        inputmode="decimal"
                        placeholder="48.8566"
                        prop:value=lat
                        on:input=move |ev| set_lat.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Longitude"
                    <input
                        type="text"
                        inputmode="decimal"
                        placeholder="2.3522"
                        prop:value=lng
                        on:input=move |ev| set_lng.set(event_target_value(&ev))
                    />
                </label>
                {move || error.get().map(|message| view! { <p class="form-error">{message}</p> })}
                <button type="submit" class="primary">"Continue"</button>
            </form>
        </section>
    }
}

//! Prepa Guide App
//!
//! Root component: provides config, store and navigation context, then
//! shows the scene for the current route.

use leptos::prelude::*;
use leptos_dragdrop::hold_until_cleanup;
use reactive_stores::Store;

use crate::components::{GuideScene, LocationScene, ResultsScene, RiskScene};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::router::{self, Route};
use crate::store::AppState;
use crate::viewport::ViewportHeight;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let store = Store::new(AppState::default());
    let route = signal(Route::from_path(&router::current_path()));
    let ctx = AppContext::new(route, store);

    provide_context(config);
    provide_context(store);
    provide_context(ctx);

    router::bind_popstate(move |route| {
        log::debug!("[ROUTER] popstate to {}", route.path());
        ctx.sync(route);
    });
    if let Some(viewport) = ViewportHeight::install() {
        hold_until_cleanup(viewport);
    }

    let scene = move || match ctx.route.get() {
        Route::Location => view! { <LocationScene /> }.into_any(),
        Route::RiskAssessment => view! { <RiskScene /> }.into_any(),
        Route::InteractiveGuide => view! { <GuideScene /> }.into_any(),
        Route::Results => view! { <ResultsScene /> }.into_any(),
    };

    Effect::new(move |_| {
        if let Some(document) = web_sys::window().and_then(|win| win.document()) {
            document.set_title(&format!("{} | Prepa", ctx.route.get().title()));
        }
    });

    view! {
        <main class="app-layout">{scene}</main>
    }
}

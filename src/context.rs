//! Application Context
//!
//! Shared navigation state provided via Leptos Context API.

use leptos::prelude::*;

use crate::models::ResultsHandoff;
use crate::router::{self, Route};
use crate::storage;
use crate::store::{store_set_handoff, AppStore};

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Scene on screen - read
    pub route: ReadSignal<Route>,
    /// Scene on screen - write
    set_route: WriteSignal<Route>,
    store: AppStore,
}

impl AppContext {
    pub fn new(route: (ReadSignal<Route>, WriteSignal<Route>), store: AppStore) -> Self {
        Self {
            route: route.0,
            set_route: route.1,
            store,
        }
    }

    /// Go to a scene, adding a history entry
    pub fn navigate(&self, route: Route) {
        log::debug!("[ROUTER] navigate to {}", route.path());
        router::push(route, &wasm_bindgen::JsValue::NULL);
        self.set_route.set(route);
    }

    /// Follow the browser without adding a history entry
    pub fn sync(&self, route: Route) {
        self.set_route.set(route);
    }

    /// Hand the completed guide over to the results scene
    pub fn show_results(&self, handoff: ResultsHandoff) {
        if let Err(e) = storage::save_questions(&handoff.questions) {
            log::warn!("[ROUTER] could not persist questions: {}", e);
        }
        router::push_results(&handoff);
        store_set_handoff(&self.store, handoff);
        self.set_route.set(Route::Results);
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

//! Client-side Routing
//!
//! Four scenes addressed by path. Navigation pushes a browser history entry;
//! the results handoff rides along as that entry's state so it survives a
//! reload of `/results`.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

use crate::models::ResultsHandoff;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Location,
    RiskAssessment,
    InteractiveGuide,
    Results,
}

impl Route {
    pub const ALL: [Route; 4] = [
        Route::Location,
        Route::RiskAssessment,
        Route::InteractiveGuide,
        Route::Results,
    ];

    /// Unknown paths land on the location scene
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        let trimmed = if trimmed.is_empty() { "/" } else { trimmed };
        Self::ALL
            .into_iter()
            .find(|route| route.path() == trimmed)
            .unwrap_or(Route::Location)
    }

    pub fn path(self) -> &'static str {
        match self {
            Route::Location => "/",
            Route::RiskAssessment => "/risk-assessment",
            Route::InteractiveGuide => "/interactive-guide",
            Route::Results => "/results",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Route::Location => "Location",
            Route::RiskAssessment => "Risk assessment",
            Route::InteractiveGuide => "Interactive guide",
            Route::Results => "Results",
        }
    }
}

fn history() -> Option<web_sys::History> {
    web_sys::window()?.history().ok()
}

pub fn current_path() -> String {
    web_sys::window()
        .and_then(|win| win.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// Push a history entry for `route`, carrying `state`
pub fn push(route: Route, state: &JsValue) {
    let Some(history) = history() else { return };
    if let Err(e) = history.push_state_with_url(state, "", Some(route.path())) {
        log::warn!("[ROUTER] pushState to {} failed: {:?}", route.path(), e);
    }
}

pub fn push_results(handoff: &ResultsHandoff) {
    let state = match serde_wasm_bindgen::to_value(handoff) {
        Ok(state) => state,
        Err(e) => {
            log::warn!("[ROUTER] results state not serializable: {}", e);
            JsValue::NULL
        }
    };
    push(Route::Results, &state);
}

/// Results handoff stored in the current history entry, if any
pub fn results_state() -> Option<ResultsHandoff> {
    let state = history()?.state().ok()?;
    if state.is_null() || state.is_undefined() {
        return None;
    }
    serde_wasm_bindgen::from_value(state)
        .map_err(|e| log::warn!("[ROUTER] ignoring unreadable history state: {}", e))
        .ok()
}

/// Follow back/forward navigation for the lifetime of the app
pub fn bind_popstate(on_route: impl Fn(Route) + 'static) {
    let on_popstate = Closure::<dyn FnMut(web_sys::Event)>::new(move |_ev: web_sys::Event| {
        on_route(Route::from_path(&current_path()));
    });
    if let Some(win) = web_sys::window() {
        let _ = win.add_event_listener_with_callback("popstate", on_popstate.as_ref().unchecked_ref());
    }
    on_popstate.forget();
}

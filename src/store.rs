//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{LatLng, ResultsHandoff};

/// State shared between scenes
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Picked in the location scene
    pub user_location: Option<LatLng>,
    /// Set when the guide completes, read by the results scene
    pub handoff: Option<ResultsHandoff>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_set_location(store: &AppStore, location: LatLng) {
    *store.user_location().write() = Some(location);
}

pub fn store_set_handoff(store: &AppStore, handoff: ResultsHandoff) {
    *store.handoff().write() = Some(handoff);
}

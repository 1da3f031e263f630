//! Application State Store
//!
//! Uses Leptos reactive_stores for field-level reactivity.

use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::FetchError;
use crate::merge::merge;
use crate::models::{LoadState, RemoteTodo, Tab, TodoItem};
use crate::persistence::OverrideRepo;
use crate::pipeline::ViewQuery;
use crate::session;

/// Todo collection and view state, owned by the root component
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Merged todos in remote order
    pub todos: Vec<TodoItem>,
    /// Startup fetch progress
    pub load_state: LoadState,
    pub search_query: String,
    /// Sort by id descending (ascending when false)
    pub sort_descending: bool,
    pub active_tab: Tab,
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

/// Snapshot of the view state the displayed rows depend on
pub fn store_view_query(store: &AppStore) -> ViewQuery {
    ViewQuery {
        search_query: store.search_query().get(),
        sort_descending: store.sort_descending().get(),
        active_tab: store.active_tab().get(),
    }
}

/// Install the fetched collection in one replacement
pub fn store_load_todos(store: &AppStore, todos: Vec<TodoItem>) {
    store.todos().set(todos);
    store.load_state().set(LoadState::Ready);
}

pub fn store_load_failed(store: &AppStore, message: String) {
    store.load_state().set(LoadState::Failed(message));
}

/// Apply the startup fetch result: merge with saved overrides and install,
/// or record the failure. Dropped when `alive` was cleared by unmount.
/// Returns whether the store was touched.
pub fn store_apply_fetch(
    store: &AppStore,
    alive: &AtomicBool,
    overrides: &OverrideRepo,
    result: Result<Vec<RemoteTodo>, FetchError>,
) -> bool {
    if !alive.load(Ordering::Relaxed) {
        tracing::debug!("app unmounted before fetch resolved, dropping result");
        return false;
    }
    match result {
        Ok(remote) => {
            let todos = merge(remote, |id| overrides.get_override(id));
            tracing::info!(count = todos.len(), "loaded todos");
            store_load_todos(store, todos);
        }
        Err(err) => {
            tracing::error!(error = %err, "error fetching todos");
            store_load_failed(store, err.to_string());
        }
    }
    true
}

/// Remove a todo from the store by ID
pub fn store_remove_todo(store: &AppStore, id: u32) {
    if session::delete_todo(&mut store.todos().write(), id) {
        tracing::debug!(id, "todo deleted");
    }
}

pub fn store_toggle_sort(store: &AppStore) {
    store.sort_descending().update(|descending| *descending = !*descending);
}

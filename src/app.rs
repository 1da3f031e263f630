//! Todo Table App
//!
//! Root component: owns the state container, runs the startup fetch and
//! wires user actions to the store and edit session.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::components::{EditDialog, SearchHeader, StatusPlaceholder, TabBar, TodoTable};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::models::{LoadState, TodoItem};
use crate::pipeline::derive_rows;
use crate::session::EditSession;
use crate::store::{
    store_apply_fetch, store_remove_todo, store_view_query, AppState, AppStateStoreFields,
};

#[component]
pub fn App() -> impl IntoView {
    // State
    let store = Store::new(AppState::default());
    let session = RwSignal::new(EditSession::default());
    let ctx = AppContext::new(AppConfig::default());

    // Provide the store to all children
    provide_context(store);

    // Cleared on unmount so a late fetch result is dropped
    let alive = Arc::new(AtomicBool::new(true));
    on_cleanup({
        let alive = alive.clone();
        move || alive.store(false, Ordering::Relaxed)
    });

    // Load todos once on mount
    let endpoint = ctx.config.endpoint.clone();
    let overrides = ctx.overrides.clone();
    Effect::new(move |_| {
        let endpoint = endpoint.clone();
        let overrides = overrides.clone();
        let alive = alive.clone();
        spawn_local(async move {
            tracing::info!(%endpoint, "fetching todos");
            let result = api::fetch_all(&endpoint).await;
            store_apply_fetch(&store, &alive, &overrides, result);
        });
    });

    let rows = Signal::derive(move || {
        let query = store_view_query(&store);
        store.todos().with(|todos| derive_rows(todos, &query))
    });

    let on_edit = Callback::new(move |todo: TodoItem| session.update(|s| s.open(&todo)));
    let on_delete = Callback::new(move |id: u32| store_remove_todo(&store, id));
    let on_close = Callback::new(move |_: ()| session.update(EditSession::close));
    let on_save = {
        let overrides = ctx.overrides.clone();
        Callback::new(move |_: ()| {
            let mut current = session.get_untracked();
            let saved = current.save(&mut store.todos().write(), &overrides);
            if let Some(todo) = saved {
                tracing::debug!(id = todo.id, completed = todo.completed, "todo saved");
            }
            session.set(current);
        })
    };

    let is_ready = move || store.load_state().get() == LoadState::Ready;
    let load_state = Signal::derive(move || store.load_state().get());

    view! {
        <div class="App">
            <SearchHeader />

            <h1>"Todo List"</h1>

            <TabBar />

            <Show
                when=is_ready
                fallback=move || view! { <StatusPlaceholder load_state=load_state /> }
            >
                <TodoTable rows=rows on_edit=on_edit on_delete=on_delete />
                <p class="item-count">
                    {move || format!("{} of {} todos", rows.get().len(), store.todos().with(Vec::len))}
                </p>
            </Show>

            <EditDialog session=session on_save=on_save on_close=on_close />
        </div>
    }
}

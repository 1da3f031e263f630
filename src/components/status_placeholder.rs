//! Status Placeholder Component
//!
//! Shown instead of the table until the todos have loaded.

use leptos::prelude::*;

use crate::models::LoadState;

#[component]
pub fn StatusPlaceholder(#[prop(into)] load_state: Signal<LoadState>) -> impl IntoView {
    move || match load_state.get() {
        LoadState::Loading => view! { <p class="status">"Loading..."</p> }.into_any(),
        LoadState::Failed(message) => view! {
            <p class="status error">{format!("Could not load todos: {message}")}</p>
        }
        .into_any(),
        LoadState::Ready => ().into_any(),
    }
}

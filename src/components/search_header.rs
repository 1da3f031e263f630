//! Search Header Component
//!
//! Search box and sort toggle above the table.

use leptos::prelude::*;

use crate::pipeline::sort_button_label;
use crate::store::{store_toggle_sort, use_app_store, AppStateStoreFields};

#[component]
pub fn SearchHeader() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="header">
            <input
                type="text"
                placeholder="Search todo by title"
                prop:value=move || store.search_query().get()
                on:input=move |ev| store.search_query().set(event_target_value(&ev))
            />
            <button on:click=move |_| store_toggle_sort(&store)>
                {move || sort_button_label(store.sort_descending().get())}
            </button>
        </div>
    }
}

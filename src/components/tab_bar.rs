//! Tab Bar Component
//!
//! All / Completed / Incomplete filter tabs.

use leptos::prelude::*;

use crate::models::Tab;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn TabBar() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="tab-bar" role="tablist">
            <For
                each=move || Tab::ALL
                key=|tab| *tab
                children=move |tab| {
                    let is_active = move || store.active_tab().get() == tab;
                    let tab_class = move || {
                        if is_active() { "tab active" } else { "tab" }
                    };

                    view! {
                        <button
                            class=tab_class
                            role="tab"
                            aria-selected=move || is_active().to_string()
                            on:click=move |_| store.active_tab().set(tab)
                        >
                            {tab.label()}
                        </button>
                    }
                }
            />
        </div>
    }
}

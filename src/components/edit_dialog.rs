//! Edit Dialog Component
//!
//! Native modal `<dialog>` bound to the edit session.

use leptos::html;
use leptos::prelude::*;

use crate::session::EditSession;

#[component]
pub fn EditDialog(
    session: RwSignal<EditSession>,
    #[prop(into)] on_save: Callback<()>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let dialog_ref = NodeRef::<html::Dialog>::new();

    // Keep the native dialog in step with the session
    Effect::new(move |_| {
        let open = session.with(EditSession::is_open);
        let Some(dialog) = dialog_ref.get() else { return };
        if open && !dialog.open() {
            if let Err(err) = dialog.show_modal() {
                tracing::warn!(error = ?err, "could not open edit dialog");
            }
        } else if !open && dialog.open() {
            dialog.close();
        }
    });

    let draft_title = move || {
        session.with(|s| s.draft().map(|draft| draft.title.clone()).unwrap_or_default())
    };
    let draft_completed = move || session.with(|s| s.draft().is_some_and(|draft| draft.completed));

    view! {
        <dialog
            class="custom-dialog"
            node_ref=dialog_ref
            on:close=move |_| {
                // Escape closes the native dialog; treat it as Close
                if session.with_untracked(EditSession::is_open) {
                    on_close.run(());
                }
            }
        >
            <h2>"Edit the todo"</h2>
            <input
                type="text"
                placeholder="Type your title"
                prop:value=draft_title
                on:input=move |ev| session.update(|s| s.update_title(event_target_value(&ev)))
            />
            <div class="checkbox-line">
                <label>
                    <input
                        type="checkbox"
                        prop:checked=draft_completed
                        on:change=move |ev| session.update(|s| s.update_completed(event_target_checked(&ev)))
                    />
                    "Completed"
                </label>
            </div>
            <div class="dialog-actions">
                <button on:click=move |_| on_save.run(())>"Save"</button>
                <button on:click=move |_| on_close.run(())>"Close"</button>
            </div>
        </dialog>
    }
}

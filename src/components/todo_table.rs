//! Todo Table Component
//!
//! One row per displayed todo with delete and edit actions.

use leptos::prelude::*;

use crate::models::TodoItem;

#[component]
pub fn TodoTable(
    #[prop(into)] rows: Signal<Vec<TodoItem>>,
    #[prop(into)] on_edit: Callback<TodoItem>,
    #[prop(into)] on_delete: Callback<u32>,
) -> impl IntoView {
    view! {
        <table class="todo-table">
            <thead>
                <tr>
                    <th>"ID"</th>
                    <th>"Title"</th>
                    <th>"Completed"</th>
                    <th>"Delete"</th>
                    <th>"Edit"</th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=move || rows.get()
                    key=|todo| {
                        // Title and completed are part of the key so an edit re-renders the row
                        (todo.id, todo.title.clone(), todo.completed)
                    }
                    children=move |todo| {
                        let id = todo.id;
                        let completed = todo.completed;
                        let title = todo.title.clone();

                        view! {
                            <tr>
                                <td>{id}</td>
                                <td>{title}</td>
                                <td>
                                    <input type="checkbox" prop:checked=completed disabled=true />
                                </td>
                                <td>
                                    <button
                                        class="delete-btn"
                                        title="Delete"
                                        on:click=move |_| on_delete.run(id)
                                    >
                                        "×"
                                    </button>
                                </td>
                                <td>
                                    <button on:click=move |_| on_edit.run(todo.clone())>"Edit"</button>
                                </td>
                            </tr>
                        }
                    }
                />
            </tbody>
        </table>
    }
}

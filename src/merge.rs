//! Merge of remote todos with saved overrides

use crate::models::{PersistedOverride, RemoteTodo, TodoItem};

/// Apply per-id overrides to the remote todos, keeping remote order.
pub fn merge<F>(remote: Vec<RemoteTodo>, mut lookup: F) -> Vec<TodoItem>
where
    F: FnMut(u32) -> PersistedOverride,
{
    remote
        .into_iter()
        .map(|todo| {
            let found = lookup(todo.id);
            let mut item = TodoItem::from(todo);
            if let Some(title) = found.title {
                item.title = title;
            }
            if let Some(completed) = found.completed {
                item.completed = completed;
            }
            item
        })
        .collect()
}

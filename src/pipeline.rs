//! List Pipeline
//!
//! Derives the displayed rows from the full collection: text search, then
//! sort by id, then tab filter. Recomputed from scratch on every change.

use crate::models::{Tab, TodoItem};

/// View state the displayed rows depend on
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewQuery {
    pub search_query: String,
    pub sort_descending: bool,
    pub active_tab: Tab,
}

/// Case-insensitive substring match on the title. An empty query keeps everything.
pub fn search_filter(items: &[TodoItem], query: &str) -> Vec<TodoItem> {
    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|item| needle.is_empty() || item.title.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

pub fn sort_by_id(mut items: Vec<TodoItem>, descending: bool) -> Vec<TodoItem> {
    if descending {
        items.sort_by(|a, b| b.id.cmp(&a.id));
    } else {
        items.sort_by_key(|item| item.id);
    }
    items
}

pub fn tab_filter(items: Vec<TodoItem>, tab: Tab) -> Vec<TodoItem> {
    items.into_iter().filter(|item| tab.admits(item.completed)).collect()
}

pub fn derive_rows(items: &[TodoItem], query: &ViewQuery) -> Vec<TodoItem> {
    let matched = search_filter(items, &query.search_query);
    let sorted = sort_by_id(matched, query.sort_descending);
    tab_filter(sorted, query.active_tab)
}

/// Label of the sort toggle: the order the next click switches to
pub fn sort_button_label(sort_descending: bool) -> &'static str {
    if sort_descending {
        "Sort by Ascending"
    } else {
        "Sort by Descending"
    }
}

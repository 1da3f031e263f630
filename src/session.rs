//! Edit Session
//!
//! Transient state of the edit dialog and the collection mutations it
//! commits. At most one session is open at a time.

use crate::models::TodoItem;
use crate::persistence::OverrideRepo;

/// Uncommitted edit of one todo
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    pub id: u32,
    pub title: String,
    pub completed: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditSession {
    #[default]
    Closed,
    Open(Draft),
}

impl EditSession {
    /// Start editing `item`, seeding the draft from its current values.
    /// An already open draft is discarded.
    pub fn open(&mut self, item: &TodoItem) {
        *self = EditSession::Open(Draft {
            id: item.id,
            title: item.title.clone(),
            completed: item.completed,
        });
    }

    pub fn is_open(&self) -> bool {
        matches!(self, EditSession::Open(_))
    }

    pub fn draft(&self) -> Option<&Draft> {
        match self {
            EditSession::Open(draft) => Some(draft),
            EditSession::Closed => None,
        }
    }

    pub fn update_title(&mut self, title: String) {
        if let EditSession::Open(draft) = self {
            draft.title = title;
        }
    }

    pub fn update_completed(&mut self, completed: bool) {
        if let EditSession::Open(draft) = self {
            draft.completed = completed;
        }
    }

    /// Commit the draft into `items` and the override store, then close.
    ///
    /// Returns the updated todo, or `None` when nothing was open or the id
    /// is no longer in the collection (the override is still written).
    pub fn save(&mut self, items: &mut [TodoItem], overrides: &OverrideRepo) -> Option<TodoItem> {
        let EditSession::Open(draft) = std::mem::take(self) else {
            return None;
        };

        overrides.set_override(draft.id, &draft.title, draft.completed);

        let item = items.iter_mut().find(|item| item.id == draft.id)?;
        item.title = draft.title;
        item.completed = draft.completed;
        Some(item.clone())
    }

    /// Discard the draft without touching the collection or storage
    pub fn close(&mut self) {
        *self = EditSession::Closed;
    }
}

/// Remove the todo with `id`. Saved overrides for it are left in place.
/// Returns whether anything was removed.
pub fn delete_todo(items: &mut Vec<TodoItem>, id: u32) -> bool {
    let before = items.len();
    items.retain(|item| item.id != id);
    items.len() != before
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::config::AppConfig;
    use crate::merge::merge;
    use crate::models::{RemoteTodo, Tab};
    use crate::persistence::{KeyValueStore, MemoryStore};
    use crate::pipeline::{derive_rows, ViewQuery};

    fn item(id: u32, title: &str, completed: bool) -> TodoItem {
        TodoItem { id, title: title.to_string(), completed }
    }

    fn sample() -> Vec<TodoItem> {
        vec![item(1, "Buy milk", false), item(2, "Walk dog", true)]
    }

    fn memory_repo() -> (Arc<MemoryStore>, OverrideRepo) {
        let store = Arc::new(MemoryStore::new());
        let repo = OverrideRepo::new(store.clone(), AppConfig::default());
        (store, repo)
    }

    #[test]
    fn test_open_seeds_draft() {
        let mut session = EditSession::default();
        assert!(!session.is_open());

        session.open(&item(2, "Walk dog", true));
        assert_eq!(
            session.draft(),
            Some(&Draft { id: 2, title: "Walk dog".into(), completed: true })
        );
    }

    #[test]
    fn test_updates_are_ignored_when_closed() {
        let mut session = EditSession::Closed;
        session.update_title("ignored".into());
        session.update_completed(true);
        assert_eq!(session, EditSession::Closed);
    }

    #[test]
    fn test_save_commits_and_closes() {
        let (store, repo) = memory_repo();
        let mut items = sample();
        let mut session = EditSession::default();

        session.open(&items[0]);
        session.update_title("Buy oat milk".into());
        session.update_completed(true);
        let saved = session.save(&mut items, &repo);

        assert_eq!(saved, Some(item(1, "Buy oat milk", true)));
        assert_eq!(items[0], item(1, "Buy oat milk", true));
        assert_eq!(items[1], item(2, "Walk dog", true));
        assert_eq!(store.get("todo-1").as_deref(), Some("Buy oat milk"));
        assert_eq!(store.get("todo-completed-1").as_deref(), Some("true"));
        assert!(!session.is_open());
    }

    #[test]
    fn test_save_accepts_empty_title() {
        let (store, repo) = memory_repo();
        let mut items = sample();
        let mut session = EditSession::default();

        session.open(&items[1]);
        session.update_title(String::new());
        session.save(&mut items, &repo);

        assert_eq!(items[1].title, "");
        assert_eq!(store.get("todo-2").as_deref(), Some(""));
    }

    #[test]
    fn test_save_when_closed_does_nothing() {
        let (store, repo) = memory_repo();
        let mut items = sample();
        assert_eq!(EditSession::Closed.save(&mut items, &repo), None);
        assert_eq!(items, sample());
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn test_close_leaves_everything_unchanged() {
        let (store, repo) = memory_repo();
        repo.set_override(2, "Walk dog", true);
        let mut items = sample();
        let mut session = EditSession::default();

        session.open(&items[1]);
        session.update_title("changed".into());
        session.update_completed(false);
        session.close();

        assert_eq!(session, EditSession::Closed);
        assert_eq!(items, sample());
        assert_eq!(store.len(), 2);
        assert_eq!(store.get("todo-2").as_deref(), Some("Walk dog"));
        assert_eq!(session.save(&mut items, &repo), None);
    }

    #[test]
    fn test_saved_edit_survives_fresh_merge() {
        let (_, repo) = memory_repo();
        let remote = vec![RemoteTodo { user_id: Some(1), id: 7, title: "remote".into(), completed: false }];
        let mut items = merge(remote.clone(), |id| repo.get_override(id));
        let mut session = EditSession::default();

        session.open(&items[0]);
        session.update_title("X".into());
        session.update_completed(true);
        session.save(&mut items, &repo);

        let reloaded = merge(remote, |id| repo.get_override(id));
        assert_eq!(reloaded, vec![item(7, "X", true)]);
    }

    #[test]
    fn test_delete_removes_and_repeats_harmlessly() {
        let mut items = sample();
        assert!(delete_todo(&mut items, 1));
        assert!(!delete_todo(&mut items, 1));

        for tab in Tab::ALL {
            for search in ["", "dog", "milk"] {
                let rows = derive_rows(
                    &items,
                    &ViewQuery { search_query: search.into(), sort_descending: false, active_tab: tab },
                );
                assert!(rows.iter().all(|row| row.id == 2));
            }
        }
        assert_eq!(derive_rows(&items, &ViewQuery::default()), vec![item(2, "Walk dog", true)]);
    }

    #[test]
    fn test_delete_keeps_saved_override() {
        let (store, repo) = memory_repo();
        let mut items = sample();
        repo.set_override(1, "edited", true);

        delete_todo(&mut items, 1);
        assert_eq!(store.get("todo-1").as_deref(), Some("edited"));
    }
}

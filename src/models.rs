//! Frontend Models
//!
//! Data structures for todos as fetched, persisted and displayed.

use serde::Deserialize;

/// Todo as returned by the remote endpoint
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RemoteTodo {
    #[serde(rename = "userId", default)]
    pub user_id: Option<u32>,
    pub id: u32,
    pub title: String,
    pub completed: bool,
}

/// Todo held in the in-memory collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoItem {
    pub id: u32,
    pub title: String,
    pub completed: bool,
}

impl From<RemoteTodo> for TodoItem {
    fn from(remote: RemoteTodo) -> Self {
        Self {
            id: remote.id,
            title: remote.title,
            completed: remote.completed,
        }
    }
}

/// Locally saved edits for one todo id. Each field is independently present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersistedOverride {
    pub title: Option<String>,
    pub completed: Option<bool>,
}

impl PersistedOverride {
    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.completed.is_none()
    }
}

/// Which subset of todos the table shows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Tab {
    #[default]
    All,
    Completed,
    Incomplete,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::All, Tab::Completed, Tab::Incomplete];

    pub fn label(self) -> &'static str {
        match self {
            Tab::All => "All Todos",
            Tab::Completed => "Completed Todos",
            Tab::Incomplete => "Incomplete Todos",
        }
    }

    /// Whether a todo with the given completion flag is shown under this tab
    pub fn admits(self, completed: bool) -> bool {
        match self {
            Tab::All => true,
            Tab::Completed => completed,
            Tab::Incomplete => !completed,
        }
    }
}

/// Progress of the one startup fetch
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Loading,
    Ready,
    Failed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_todo_decodes_and_ignores_user_id() {
        let json = r#"[
            {"userId": 1, "id": 1, "title": "delectus aut autem", "completed": false},
            {"userId": 3, "id": 2, "title": "quis ut nam", "completed": true}
        ]"#;
        let decoded: Vec<RemoteTodo> = serde_json::from_str(json).unwrap();
        let items: Vec<TodoItem> = decoded.into_iter().map(TodoItem::from).collect();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0], TodoItem { id: 1, title: "delectus aut autem".into(), completed: false });
        assert_eq!(items[1].id, 2);
        assert!(items[1].completed);
    }

    #[test]
    fn test_remote_todo_without_user_id() {
        let decoded: RemoteTodo = serde_json::from_str(r#"{"id": 9, "title": "x", "completed": true}"#).unwrap();
        assert_eq!(decoded.user_id, None);
        assert_eq!(decoded.id, 9);
    }

    #[test]
    fn test_tab_admits() {
        assert!(Tab::All.admits(true));
        assert!(Tab::All.admits(false));
        assert!(Tab::Completed.admits(true));
        assert!(!Tab::Completed.admits(false));
        assert!(Tab::Incomplete.admits(false));
        assert!(!Tab::Incomplete.admits(true));
    }
}

//! Application Configuration
//!
//! Fixed endpoint and storage key layout.

/// Remote collection fetched once at startup
pub const DEFAULT_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/todos";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub endpoint: String,
    /// Key prefix of the saved title record, followed by the todo id
    pub title_key_prefix: String,
    /// Key prefix of the saved completed record, followed by the todo id
    pub completed_key_prefix: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            title_key_prefix: "todo-".to_string(),
            completed_key_prefix: "todo-completed-".to_string(),
        }
    }
}

impl AppConfig {
    pub fn title_key(&self, id: u32) -> String {
        format!("{}{}", self.title_key_prefix, id)
    }

    pub fn completed_key(&self, id: u32) -> String {
        format!("{}{}", self.completed_key_prefix, id)
    }
}

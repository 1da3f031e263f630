//! UI Components
//!
//! Leptos components for the todo table view.

mod search_header;
mod tab_bar;
mod todo_table;
mod edit_dialog;
mod status_placeholder;

pub use search_header::SearchHeader;
pub use tab_bar::TabBar;
pub use todo_table::TodoTable;
pub use edit_dialog::EditDialog;
pub use status_placeholder::StatusPlaceholder;

//! Remote Source
//!
//! The one read of the remote todo collection.

mod todos;

pub use todos::*;

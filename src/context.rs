//! Application Context
//!
//! Services built once by the root component.

use crate::config::AppConfig;
use crate::persistence::OverrideRepo;

/// App-wide services
#[derive(Clone)]
pub struct AppContext {
    pub config: AppConfig,
    /// Saved title/completed edits
    pub overrides: OverrideRepo,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        let overrides = OverrideRepo::browser(config.clone());
        Self { config, overrides }
    }
}


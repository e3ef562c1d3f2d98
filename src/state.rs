// src/state.rs
use std::sync::Arc;

use crate::services::thinking::ThinkingDelay;

pub type SharedState = Arc<AppState>;

/// Read-only per-process settings. Nothing here changes between requests.
#[derive(Debug, Default)]
pub struct AppState {
    pub thinking: ThinkingDelay,
}

impl AppState {
    pub fn new(thinking: ThinkingDelay) -> Self {
        Self { thinking }
    }
}

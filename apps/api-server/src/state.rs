//! Application state - shared across all handlers.

use std::sync::Arc;

use pulse_core::CalendarGenerator;
use pulse_core::ports::{CampaignRepository, ContentRepository, UserRepository};
use pulse_infra::{InMemoryCampaignRepository, InMemoryContentRepository, InMemoryUserRepository};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub campaigns: Arc<dyn CampaignRepository>,
    pub content: Arc<dyn ContentRepository>,
    pub generator: Arc<CalendarGenerator>,
}

impl AppState {
    /// Build the application state.
    pub fn new() -> Self {
        tracing::info!("Application state initialized (in-memory repositories)");

        Self {
            users: Arc::new(InMemoryUserRepository::new()),
            campaigns: Arc::new(InMemoryCampaignRepository::new()),
            content: Arc::new(InMemoryContentRepository::new()),
            generator: Arc::new(CalendarGenerator::new()),
        }
    }
}

//! Repository implementations.

mod memory;

pub use memory::{InMemoryCampaignRepository, InMemoryContentRepository, InMemoryUserRepository};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::{Campaign, CampaignStatus, ContentItem, ContentStatus, User};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Save an entity (create or update).
    async fn save(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// User repository with domain-specific lookups.
#[async_trait]
pub trait UserRepository: BaseRepository<User, Uuid> {
    /// Find a user by their email address.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError>;
}

/// Campaign repository.
#[async_trait]
pub trait CampaignRepository: BaseRepository<Campaign, Uuid> {
    /// Campaigns owned by a user, newest first, optionally narrowed by status.
    async fn find_by_user(
        &self,
        user_id: Uuid,
        status: Option<CampaignStatus>,
    ) -> Result<Vec<Campaign>, RepoError>;
}

/// Filter for content listing.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContentFilter {
    pub status: Option<ContentStatus>,
    pub campaign_id: Option<Uuid>,
}

/// Content repository.
#[async_trait]
pub trait ContentRepository: BaseRepository<ContentItem, Uuid> {
    /// Content owned by a user, newest first, narrowed by the filter.
    async fn find_by_user(
        &self,
        user_id: Uuid,
        filter: ContentFilter,
    ) -> Result<Vec<ContentItem>, RepoError>;

    /// Scheduled items whose publish time has passed.
    async fn find_due(&self, now: DateTime<Utc>) -> Result<Vec<ContentItem>, RepoError>;
}

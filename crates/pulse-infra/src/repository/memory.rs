//! In-memory repository implementations.
//!
//! Map-backed stores behind async RwLocks. These are the default runtime
//! storage for the service and double as test fixtures. Data is lost on
//! process restart.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use pulse_core::domain::{Campaign, CampaignStatus, ContentItem, User};
use pulse_core::error::RepoError;
use pulse_core::ports::{
    BaseRepository, CampaignRepository, ContentFilter, ContentRepository, UserRepository,
};

/// In-memory user store.
#[derive(Default)]
pub struct InMemoryUserRepository {
    store: RwLock<HashMap<Uuid, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BaseRepository<User, Uuid> for InMemoryUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepoError> {
        Ok(self.store.read().await.get(&id).cloned())
    }

    async fn save(&self, user: User) -> Result<User, RepoError> {
        self.store.write().await.insert(user.id, user.clone());
        Ok(user)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        self.store.write().await.remove(&id);
        Ok(())
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        let store = self.store.read().await;
        Ok(store.values().find(|u| u.email == email).cloned())
    }
}

/// In-memory campaign store.
#[derive(Default)]
pub struct InMemoryCampaignRepository {
    store: RwLock<HashMap<Uuid, Campaign>>,
}

impl InMemoryCampaignRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BaseRepository<Campaign, Uuid> for InMemoryCampaignRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Campaign>, RepoError> {
        Ok(self.store.read().await.get(&id).cloned())
    }

    async fn save(&self, campaign: Campaign) -> Result<Campaign, RepoError> {
        self.store
            .write()
            .await
            .insert(campaign.id, campaign.clone());
        Ok(campaign)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        self.store.write().await.remove(&id);
        Ok(())
    }
}

#[async_trait]
impl CampaignRepository for InMemoryCampaignRepository {
    async fn find_by_user(
        &self,
        user_id: Uuid,
        status: Option<CampaignStatus>,
    ) -> Result<Vec<Campaign>, RepoError> {
        let store = self.store.read().await;
        let mut campaigns: Vec<Campaign> = store
            .values()
            .filter(|c| c.user_id == user_id)
            .filter(|c| status.is_none_or(|s| c.status == s))
            .cloned()
            .collect();
        campaigns.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(campaigns)
    }
}

/// In-memory content store.
#[derive(Default)]
pub struct InMemoryContentRepository {
    store: RwLock<HashMap<Uuid, ContentItem>>,
}

impl InMemoryContentRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BaseRepository<ContentItem, Uuid> for InMemoryContentRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<ContentItem>, RepoError> {
        Ok(self.store.read().await.get(&id).cloned())
    }

    async fn save(&self, item: ContentItem) -> Result<ContentItem, RepoError> {
        self.store.write().await.insert(item.id, item.clone());
        Ok(item)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        self.store.write().await.remove(&id);
        Ok(())
    }
}

#[async_trait]
impl ContentRepository for InMemoryContentRepository {
    async fn find_by_user(
        &self,
        user_id: Uuid,
        filter: ContentFilter,
    ) -> Result<Vec<ContentItem>, RepoError> {
        let store = self.store.read().await;
        let mut items: Vec<ContentItem> = store
            .values()
            .filter(|i| i.user_id == user_id)
            .filter(|i| filter.status.is_none_or(|s| i.status == s))
            .filter(|i| filter.campaign_id.is_none_or(|c| i.campaign_id == Some(c)))
            .cloned()
            .collect();
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(items)
    }

    async fn find_due(&self, now: DateTime<Utc>) -> Result<Vec<ContentItem>, RepoError> {
        let store = self.store.read().await;
        Ok(store.values().filter(|i| i.is_due(now)).cloned().collect())
    }
}

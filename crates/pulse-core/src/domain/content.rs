//! Standalone content items - posts managed outside a generated calendar.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Publication status of a content item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentStatus {
    Draft,
    Scheduled,
    Published,
}

/// A single piece of content: a post, story, reel, or carousel.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    pub id: Uuid,
    pub user_id: Uuid,
    pub campaign_id: Option<Uuid>,
    pub content_type: String,
    pub caption: String,
    pub hashtags: Vec<String>,
    pub media_urls: Vec<String>,
    pub status: ContentStatus,
    pub scheduled_for: Option<DateTime<Utc>>,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ContentItem {
    /// Create a new draft with generated ID and timestamps.
    pub fn new(user_id: Uuid, content_type: String, caption: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            campaign_id: None,
            content_type,
            caption,
            hashtags: Vec::new(),
            media_urls: Vec::new(),
            status: ContentStatus::Draft,
            scheduled_for: None,
            published_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Publish immediately. Publishing is idempotent only in the sense
    /// that an already published item is rejected.
    pub fn publish(&mut self, now: DateTime<Utc>) -> Result<(), DomainError> {
        if self.status == ContentStatus::Published {
            return Err(DomainError::InvalidState(
                "content is already published".to_string(),
            ));
        }

        self.status = ContentStatus::Published;
        self.published_at = Some(now);
        self.scheduled_for = None;
        self.updated_at = now;
        Ok(())
    }

    /// Schedule for a future publish time.
    pub fn schedule(&mut self, when: DateTime<Utc>, now: DateTime<Utc>) -> Result<(), DomainError> {
        if self.status == ContentStatus::Published {
            return Err(DomainError::InvalidState(
                "published content cannot be rescheduled".to_string(),
            ));
        }
        if when <= now {
            return Err(DomainError::Validation(
                "scheduled time must be in the future".to_string(),
            ));
        }

        self.status = ContentStatus::Scheduled;
        self.scheduled_for = Some(when);
        self.updated_at = now;
        Ok(())
    }

    /// Whether a scheduled item is due for publishing at `now`.
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        self.status == ContentStatus::Scheduled
            && self.scheduled_for.is_some_and(|when| when <= now)
    }
}

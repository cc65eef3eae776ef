//! Cron-style publishing of due content using tokio-cron-scheduler.

use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio_cron_scheduler::{Job, JobScheduler, JobSchedulerError};
use uuid::Uuid;

use pulse_core::ports::{BaseRepository, ContentRepository};

/// Runs at the top of every minute.
const PUBLISH_SCHEDULE: &str = "0 * * * * *";

/// Start the background scheduler with the content publishing job.
///
/// Returns `None` when disabled; the caller keeps the returned scheduler
/// alive for the lifetime of the server.
pub async fn start(
    enabled: bool,
    content: Arc<dyn ContentRepository>,
) -> Result<Option<JobScheduler>, JobSchedulerError> {
    if !enabled {
        tracing::info!("Scheduler disabled");
        return Ok(None);
    }

    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async(PUBLISH_SCHEDULE, move |_uuid, _lock| {
        let content = content.clone();
        Box::pin(async move {
            publish_due_content(content).await;
        })
    })?;

    let id = scheduler.add(job).await?;
    scheduler.start().await?;
    tracing::info!(schedule = %PUBLISH_SCHEDULE, job_id = %id, "Scheduler started");

    Ok(Some(scheduler))
}

/// Publish every scheduled item whose publish time has passed.
async fn publish_due_content(content: Arc<dyn ContentRepository>) {
    let now = Utc::now();

    let due = match content.find_due(now).await {
        Ok(due) => due,
        Err(e) => {
            tracing::error!(error = %e, "Failed to query due content");
            return;
        }
    };

    if due.is_empty() {
        return;
    }

    tracing::info!(count = due.len(), "Publishing due content");

    for item in due {
        publish_item(&content, item.id, now).await;
    }
}

/// Publish a single item by id.
///
/// The item is re-read just before mutation: a handler may have edited,
/// rescheduled, or deleted it after the due snapshot was taken, and a
/// stale copy must not overwrite that.
async fn publish_item(content: &Arc<dyn ContentRepository>, id: Uuid, now: DateTime<Utc>) {
    let mut item = match content.find_by_id(id).await {
        Ok(Some(item)) => item,
        Ok(None) => return,
        Err(e) => {
            tracing::error!(content_id = %id, error = %e, "Failed to reload item");
            return;
        }
    };

    if !item.is_due(now) {
        return;
    }

    if let Err(e) = item.publish(now) {
        tracing::warn!(content_id = %id, error = %e, "Skipping item");
        return;
    }
    if let Err(e) = content.save(item).await {
        tracing::error!(content_id = %id, error = %e, "Failed to persist published item");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;
    use pulse_core::domain::{ContentItem, ContentStatus};
    use pulse_core::ports::ContentFilter;
    use pulse_infra::InMemoryContentRepository;
    use uuid::Uuid;

    #[tokio::test]
    async fn publishes_only_due_items() {
        let repo: Arc<dyn ContentRepository> = Arc::new(InMemoryContentRepository::new());
        let user = Uuid::new_v4();
        let now = Utc::now();

        let mut due = ContentItem::new(user, "post".to_string(), "due".to_string());
        due.schedule(now + TimeDelta::seconds(1), now).unwrap();
        // Backdate so the item is already overdue.
        due.scheduled_for = Some(now - TimeDelta::minutes(5));
        let due = repo.save(due).await.unwrap();

        let mut later = ContentItem::new(user, "post".to_string(), "later".to_string());
        later.schedule(now + TimeDelta::hours(1), now).unwrap();
        let later = repo.save(later).await.unwrap();

        publish_due_content(repo.clone()).await;

        let items = repo
            .find_by_user(user, ContentFilter::default())
            .await
            .unwrap();
        let status = |id| {
            items
                .iter()
                .find(|i| i.id == id)
                .map(|i| i.status)
                .unwrap()
        };
        assert_eq!(status(due.id), ContentStatus::Published);
        assert_eq!(status(later.id), ContentStatus::Scheduled);
    }

    #[tokio::test]
    async fn stale_snapshot_does_not_clobber_a_concurrent_edit() {
        let repo: Arc<dyn ContentRepository> = Arc::new(InMemoryContentRepository::new());
        let now = Utc::now();

        let mut item = ContentItem::new(Uuid::new_v4(), "post".to_string(), "v1".to_string());
        item.schedule(now + TimeDelta::seconds(1), now).unwrap();
        item.scheduled_for = Some(now - TimeDelta::minutes(5));
        let snapshot = repo.save(item).await.unwrap();

        // A handler pulls the item back to draft and rewrites the caption
        // after the due snapshot was taken.
        let mut edited = snapshot.clone();
        edited.status = ContentStatus::Draft;
        edited.scheduled_for = None;
        edited.caption = "v2".to_string();
        repo.save(edited).await.unwrap();

        publish_item(&repo, snapshot.id, now).await;

        let current = repo.find_by_id(snapshot.id).await.unwrap().unwrap();
        assert_eq!(current.status, ContentStatus::Draft);
        assert_eq!(current.caption, "v2");
    }
}

//! Generated calendar entries and the campaign funnel stage.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Funnel phase of a campaign, derived from time progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CampaignStage {
    Awareness,
    Consideration,
    Conversion,
    Retention,
}

impl CampaignStage {
    /// Stage for a given day offset within the campaign window.
    ///
    /// Thresholds on the progress ratio `day / total_days` are half-open,
    /// lower-inclusive: [0, 0.2) awareness, [0.2, 0.6) consideration,
    /// [0.6, 0.9) conversion, then retention.
    pub fn from_progress(day: u32, total_days: u32) -> Self {
        let progress = f64::from(day) / f64::from(total_days);

        if progress < 0.2 {
            CampaignStage::Awareness
        } else if progress < 0.6 {
            CampaignStage::Consideration
        } else if progress < 0.9 {
            CampaignStage::Conversion
        } else {
            CampaignStage::Retention
        }
    }
}

/// One scheduled post in a generated content calendar.
///
/// Entries are ephemeral output of the generator; the owning campaign
/// carries them, nothing persists them on their own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEntry {
    pub date: DateTime<Utc>,
    pub content_type: String,
    pub theme: String,
    pub primary_message: String,
    pub visual_elements: Vec<String>,
    pub caption_template: String,
    pub hashtag_group: String,
    /// Recommended posting time, HH:MM.
    pub time_of_day: String,
    pub stage: CampaignStage,
}

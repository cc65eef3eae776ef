//! Campaign blueprints - reusable templates a campaign is instantiated from.

use std::collections::HashMap;

use chrono::{DateTime, Utc, Weekday};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::calendar_entry::CampaignStage;

/// Stock hashtags returned when a blueprint does not define the
/// requested group.
pub const DEFAULT_HASHTAGS: [&str; 4] = ["#socialmedia", "#marketing", "#brand", "#campaign"];

/// How often a campaign posts. Values outside this set deserialize to
/// [`PostFrequency::Unrecognized`] rather than failing the request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PostFrequency {
    #[default]
    Daily,
    WeekdaysOnly,
    WeekendsOnly,
    ThriceWeekly,
    TwiceWeekly,
    Weekly,
    #[serde(other)]
    Unrecognized,
}

impl PostFrequency {
    /// Weekdays on which this frequency schedules a post.
    /// Unrecognized frequencies fall back to Mon/Wed/Fri.
    pub fn posting_days(self) -> &'static [Weekday] {
        use Weekday::{Fri, Mon, Sat, Sun, Thu, Tue, Wed};

        match self {
            PostFrequency::Daily => &[Sun, Mon, Tue, Wed, Thu, Fri, Sat],
            PostFrequency::WeekdaysOnly => &[Mon, Tue, Wed, Thu, Fri],
            PostFrequency::WeekendsOnly => &[Sun, Sat],
            PostFrequency::ThriceWeekly | PostFrequency::Unrecognized => &[Mon, Wed, Fri],
            PostFrequency::TwiceWeekly => &[Mon, Thu],
            PostFrequency::Weekly => &[Mon],
        }
    }
}

/// One reusable per-post template inside a blueprint's content structure.
/// The generator rotates through these across campaign days.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContentTemplate {
    pub content_type: Option<String>,
    pub theme: String,
    pub primary_message: String,
    pub visual_elements: Vec<String>,
    pub caption_template: String,
    pub hashtag_group: Option<String>,
    /// Authoring hint only; the generated entry derives its stage from
    /// campaign progress, not from this field.
    pub stage: Option<CampaignStage>,
}

/// Campaign blueprint - defines cadence, content templates, and hashtag
/// groups. Immutable input to calendar generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CampaignBlueprint {
    pub id: Option<Uuid>,
    pub name: String,
    pub description: String,
    pub category: String,
    pub objectives: Vec<String>,
    /// Requested campaign length in days. See [`Self::campaign_days`] for
    /// how the calendar interprets it.
    pub duration: u32,
    pub content_types: Vec<String>,
    pub post_frequency: PostFrequency,
    pub target_audience: serde_json::Value,
    pub content_structure: Vec<ContentTemplate>,
    pub kpis: Vec<String>,
    pub is_template: bool,
    pub visual_theme: serde_json::Value,
    /// Fallback captions, used only when `content_structure` is empty.
    pub caption_templates: Vec<String>,
    pub hashtag_groups: HashMap<String, Vec<String>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Default for CampaignBlueprint {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            id: None,
            name: String::new(),
            description: String::new(),
            category: "general".to_string(),
            objectives: Vec::new(),
            duration: 14,
            content_types: Vec::new(),
            post_frequency: PostFrequency::default(),
            target_audience: serde_json::Value::Object(Default::default()),
            content_structure: Vec::new(),
            kpis: Vec::new(),
            is_template: false,
            visual_theme: serde_json::Value::Object(Default::default()),
            caption_templates: Vec::new(),
            hashtag_groups: HashMap::new(),
            created_at: now,
            updated_at: now,
        }
    }
}

impl CampaignBlueprint {
    /// Number of days the generated calendar covers. Recognized durations
    /// (7, 14, 30, 90) pass through; anything else falls back to two weeks.
    pub fn campaign_days(&self) -> u32 {
        match self.duration {
            d @ (7 | 14 | 30 | 90) => d,
            _ => 14,
        }
    }

    /// Hashtags for a named group, or the stock default set when the
    /// group is not defined on this blueprint.
    pub fn hashtags(&self, group: &str) -> Vec<String> {
        self.hashtag_groups.get(group).cloned().unwrap_or_else(|| {
            DEFAULT_HASHTAGS.iter().map(|s| (*s).to_string()).collect()
        })
    }
}

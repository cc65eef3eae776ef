//! Campaign calendar generation.
//!
//! Expands a [`CampaignBlueprint`] into a dated sequence of
//! [`CalendarEntry`] values covering the campaign window. Generation is
//! pure and synchronous; the only non-deterministic path (default entries
//! for blueprints without a content structure) draws from a caller-supplied
//! RNG so tests can pin it down.

mod timing;

#[cfg(test)]
mod tests;

use chrono::{DateTime, Datelike, TimeDelta, Utc};
use rand::Rng;
use rand::seq::SliceRandom;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{
    CalendarEntry, Campaign, CampaignBlueprint, CampaignOverrides, CampaignStage, CampaignStatus,
    ContentTemplate,
};

pub use timing::{PostingTimeStrategy, WeekdayHeuristic};

/// Caption used when a blueprint defines neither a content structure nor
/// any caption templates.
const FALLBACK_CAPTION: &str = "Check out our latest update for {campaign_name}! #brand #campaign";

/// Expands blueprints into content calendars and campaigns.
///
/// Holds no mutable state; one instance can serve concurrent callers.
pub struct CalendarGenerator {
    times: Arc<dyn PostingTimeStrategy>,
}

impl CalendarGenerator {
    /// Generator with the built-in weekday posting-time heuristic.
    pub fn new() -> Self {
        Self::with_strategy(Arc::new(WeekdayHeuristic))
    }

    /// Generator with a custom posting-time strategy.
    pub fn with_strategy(times: Arc<dyn PostingTimeStrategy>) -> Self {
        Self { times }
    }

    /// Generate the content calendar for a blueprint starting at `start`.
    ///
    /// Walks every day offset in the campaign window and emits one entry
    /// per posting day. The returned sequence is strictly increasing by
    /// date and may be shorter than the window when the frequency skips
    /// days. The blueprint is never mutated.
    pub fn generate_calendar<R: Rng + ?Sized>(
        &self,
        blueprint: &CampaignBlueprint,
        start: DateTime<Utc>,
        rng: &mut R,
    ) -> Vec<CalendarEntry> {
        let campaign_days = blueprint.campaign_days();
        let posting_days = blueprint.post_frequency.posting_days();
        let mut calendar = Vec::new();

        for day in 0..campaign_days {
            let current = start + TimeDelta::days(i64::from(day));
            if !posting_days.contains(&current.weekday()) {
                continue;
            }

            let entry = if blueprint.content_structure.is_empty() {
                self.default_entry(blueprint, current, day, campaign_days, rng)
            } else {
                // Round-robin keyed on the raw day offset, not on how many
                // entries have been emitted so far: skipped days still
                // advance the rotation.
                let index = day as usize % blueprint.content_structure.len();
                self.entry_from_template(
                    &blueprint.content_structure[index],
                    current,
                    day,
                    campaign_days,
                )
            };
            calendar.push(entry);
        }

        calendar
    }

    /// Instantiate a campaign from a blueprint plus per-campaign overrides.
    ///
    /// The returned record is not persisted here; the caller stores it.
    pub fn create_campaign<R: Rng + ?Sized>(
        &self,
        blueprint: &CampaignBlueprint,
        user_id: Uuid,
        start: DateTime<Utc>,
        overrides: CampaignOverrides,
        rng: &mut R,
    ) -> Campaign {
        // The end date adds the raw duration. An unrecognized duration
        // therefore yields a window of the literal requested length around
        // a calendar that campaign_days() clamped to 14 days.
        let end = start + TimeDelta::days(i64::from(blueprint.duration));
        let content_calendar = self.generate_calendar(blueprint, start, rng);

        Campaign {
            id: Uuid::new_v4(),
            user_id,
            name: overrides.name.unwrap_or_else(|| blueprint.name.clone()),
            description: overrides
                .description
                .unwrap_or_else(|| blueprint.description.clone()),
            objectives: overrides
                .objectives
                .unwrap_or_else(|| blueprint.objectives.clone()),
            start_date: start,
            end_date: end,
            status: CampaignStatus::Planning,
            platforms: overrides
                .platforms
                .unwrap_or_else(|| vec!["instagram".to_string()]),
            budget: overrides.budget.unwrap_or(0.0),
            currency: overrides.currency.unwrap_or_else(|| "USD".to_string()),
            target: overrides
                .target
                .unwrap_or_else(|| blueprint.target_audience.clone()),
            content_calendar,
            kpis: overrides.kpis.unwrap_or_else(|| blueprint.kpis.clone()),
            theme_settings: overrides
                .theme_settings
                .unwrap_or_else(|| blueprint.visual_theme.clone()),
            created_at: Utc::now(),
            blueprint_id: blueprint.id,
        }
    }

    fn entry_from_template(
        &self,
        template: &ContentTemplate,
        date: DateTime<Utc>,
        day: u32,
        total_days: u32,
    ) -> CalendarEntry {
        CalendarEntry {
            date,
            content_type: template
                .content_type
                .clone()
                .unwrap_or_else(|| "post".to_string()),
            theme: template.theme.clone(),
            primary_message: template.primary_message.clone(),
            visual_elements: template.visual_elements.clone(),
            caption_template: template.caption_template.clone(),
            hashtag_group: template
                .hashtag_group
                .clone()
                .unwrap_or_else(|| "general".to_string()),
            time_of_day: self.times.time_for(date.weekday()).to_string(),
            stage: CampaignStage::from_progress(day, total_days),
        }
    }

    fn default_entry<R: Rng + ?Sized>(
        &self,
        blueprint: &CampaignBlueprint,
        date: DateTime<Utc>,
        day: u32,
        total_days: u32,
        rng: &mut R,
    ) -> CalendarEntry {
        let content_type = blueprint
            .content_types
            .choose(rng)
            .cloned()
            .unwrap_or_else(|| "post".to_string());
        let caption_template = blueprint
            .caption_templates
            .choose(rng)
            .cloned()
            .unwrap_or_else(|| FALLBACK_CAPTION.to_string());

        CalendarEntry {
            date,
            content_type,
            theme: blueprint.name.clone(),
            primary_message: format!("{} - Day {}", blueprint.name, day + 1),
            visual_elements: Vec::new(),
            caption_template,
            hashtag_group: "general".to_string(),
            time_of_day: self.times.time_for(date.weekday()).to_string(),
            stage: CampaignStage::from_progress(day, total_days),
        }
    }
}

impl Default for CalendarGenerator {
    fn default() -> Self {
        Self::new()
    }
}

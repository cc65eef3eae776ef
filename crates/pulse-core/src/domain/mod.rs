//! Domain entities - the core business objects.

mod blueprint;
mod calendar_entry;
mod campaign;
mod content;
mod user;

pub use blueprint::{CampaignBlueprint, ContentTemplate, DEFAULT_HASHTAGS, PostFrequency};
pub use calendar_entry::{CalendarEntry, CampaignStage};
pub use campaign::{Campaign, CampaignOverrides, CampaignStatus};
pub use content::{ContentItem, ContentStatus};
pub use user::User;

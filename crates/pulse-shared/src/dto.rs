//! Data Transfer Objects - request/response types for the API.
//!
//! Campaign and content payloads use camelCase field names on the wire;
//! auth payloads keep the conventional snake_case token fields. Date
//! fields arrive as ISO-8601 strings and are validated at the handler
//! boundary so a malformed date surfaces as a 400, not a decode panic.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use pulse_core::domain::{CampaignBlueprint, CampaignOverrides, CampaignStatus, ContentStatus};

/// Request to register a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterUserRequest {
    pub email: String,
    pub password: String,
}

/// Request to login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response containing a user's public information.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
}

/// Response containing authentication tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
}

/// Request to create a campaign.
///
/// Exactly one of `template` (a named preset) or `blueprint` (inline)
/// selects the source blueprint; overrides win over blueprint defaults
/// field by field.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateCampaignRequest {
    pub template: Option<String>,
    pub blueprint: Option<CampaignBlueprint>,
    /// ISO-8601 start date; defaults to now.
    pub start_date: Option<String>,
    #[serde(flatten)]
    pub overrides: CampaignOverrides,
}

/// Request to update campaign metadata. Calendar and dates are not
/// editable after creation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateCampaignRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub objectives: Option<Vec<String>>,
    pub platforms: Option<Vec<String>>,
    pub budget: Option<f64>,
    pub currency: Option<String>,
    pub kpis: Option<Vec<String>>,
}

/// Query parameters for campaign listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CampaignListQuery {
    pub status: Option<CampaignStatus>,
}

/// Request to create a content item.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateContentRequest {
    pub campaign_id: Option<Uuid>,
    pub content_type: Option<String>,
    pub caption: String,
    pub hashtags: Vec<String>,
    pub media_urls: Vec<String>,
    /// ISO-8601; when set, the item is created already scheduled.
    pub scheduled_for: Option<String>,
}

/// Request to update a content item.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateContentRequest {
    pub caption: Option<String>,
    pub hashtags: Option<Vec<String>>,
    pub media_urls: Option<Vec<String>>,
    pub content_type: Option<String>,
}

/// Request to schedule a content item.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleContentRequest {
    /// ISO-8601; must be in the future.
    pub scheduled_for: String,
}

/// Query parameters for content listing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContentListQuery {
    pub status: Option<ContentStatus>,
    pub campaign_id: Option<Uuid>,
}

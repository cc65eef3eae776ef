//! Campaigns - blueprints instantiated against a start date.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::calendar_entry::CalendarEntry;
use crate::error::DomainError;

/// Campaign lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CampaignStatus {
    Planning,
    Active,
    Paused,
    Completed,
}

impl fmt::Display for CampaignStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CampaignStatus::Planning => "planning",
            CampaignStatus::Active => "active",
            CampaignStatus::Paused => "paused",
            CampaignStatus::Completed => "completed",
        };
        f.write_str(s)
    }
}

/// A campaign created from a blueprint. Carries the generated content
/// calendar and a back-reference to the blueprint it came from.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub description: String,
    pub objectives: Vec<String>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub status: CampaignStatus,
    pub platforms: Vec<String>,
    pub budget: f64,
    pub currency: String,
    pub target: serde_json::Value,
    pub content_calendar: Vec<CalendarEntry>,
    pub kpis: Vec<String>,
    pub theme_settings: serde_json::Value,
    pub created_at: DateTime<Utc>,
    pub blueprint_id: Option<Uuid>,
}

impl Campaign {
    /// Move a planned campaign to active.
    pub fn publish(&mut self) -> Result<(), DomainError> {
        match self.status {
            CampaignStatus::Planning => {
                self.status = CampaignStatus::Active;
                Ok(())
            }
            other => Err(DomainError::InvalidState(format!(
                "cannot publish a campaign in status {other}"
            ))),
        }
    }

    /// Pause an active campaign.
    pub fn pause(&mut self) -> Result<(), DomainError> {
        match self.status {
            CampaignStatus::Active => {
                self.status = CampaignStatus::Paused;
                Ok(())
            }
            other => Err(DomainError::InvalidState(format!(
                "cannot pause a campaign in status {other}"
            ))),
        }
    }

    /// Resume a paused campaign.
    pub fn resume(&mut self) -> Result<(), DomainError> {
        match self.status {
            CampaignStatus::Paused => {
                self.status = CampaignStatus::Active;
                Ok(())
            }
            other => Err(DomainError::InvalidState(format!(
                "cannot resume a campaign in status {other}"
            ))),
        }
    }
}

/// Per-campaign overrides applied on top of blueprint defaults when a
/// campaign is created. A set field wins over the blueprint value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CampaignOverrides {
    pub name: Option<String>,
    pub description: Option<String>,
    pub objectives: Option<Vec<String>>,
    pub platforms: Option<Vec<String>>,
    pub budget: Option<f64>,
    pub currency: Option<String>,
    pub target: Option<serde_json::Value>,
    pub kpis: Option<Vec<String>>,
    pub theme_settings: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn campaign(status: CampaignStatus) -> Campaign {
        Campaign {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            name: "test".to_string(),
            description: String::new(),
            objectives: Vec::new(),
            start_date: Utc::now(),
            end_date: Utc::now(),
            status,
            platforms: vec!["instagram".to_string()],
            budget: 0.0,
            currency: "USD".to_string(),
            target: serde_json::Value::Null,
            content_calendar: Vec::new(),
            kpis: Vec::new(),
            theme_settings: serde_json::Value::Null,
            created_at: Utc::now(),
            blueprint_id: None,
        }
    }

    #[test]
    fn lifecycle_transitions() {
        let mut c = campaign(CampaignStatus::Planning);
        c.publish().unwrap();
        assert_eq!(c.status, CampaignStatus::Active);
        c.pause().unwrap();
        assert_eq!(c.status, CampaignStatus::Paused);
        c.resume().unwrap();
        assert_eq!(c.status, CampaignStatus::Active);
    }

    #[test]
    fn invalid_transitions_are_rejected() {
        let mut c = campaign(CampaignStatus::Active);
        assert!(c.publish().is_err());

        let mut c = campaign(CampaignStatus::Planning);
        assert!(c.pause().is_err());
        assert!(c.resume().is_err());
    }
}

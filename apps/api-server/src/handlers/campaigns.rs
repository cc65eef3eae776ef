//! Campaign handlers - creation from blueprints, lifecycle, presets.

use actix_web::{HttpResponse, web};
use chrono::Utc;
use uuid::Uuid;

use pulse_core::domain::Campaign;
use pulse_core::ports::{BaseRepository, CampaignRepository};
use pulse_core::templates;
use pulse_shared::ApiResponse;
use pulse_shared::dto::{CampaignListQuery, CreateCampaignRequest, UpdateCampaignRequest};

use super::parse_iso_date;
use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/campaigns
pub async fn list(
    state: web::Data<AppState>,
    identity: Identity,
    query: web::Query<CampaignListQuery>,
) -> AppResult<HttpResponse> {
    let campaigns = state
        .campaigns
        .find_by_user(identity.user_id, query.status)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(campaigns)))
}

/// POST /api/campaigns
///
/// Creates a campaign from either a named preset (`template`) or an
/// inline blueprint, expanding the content calendar at creation time.
pub async fn create(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<CreateCampaignRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let blueprint = match (req.template.as_deref(), req.blueprint) {
        (Some(_), Some(_)) => {
            return Err(AppError::BadRequest(
                "Provide either a template name or an inline blueprint, not both".to_string(),
            ));
        }
        (Some(kind), None) => templates::blueprint_template(kind),
        (None, Some(blueprint)) => blueprint,
        (None, None) => {
            return Err(AppError::BadRequest(
                "A template name or an inline blueprint is required".to_string(),
            ));
        }
    };

    let start = match req.start_date.as_deref() {
        Some(raw) => parse_iso_date(raw)?,
        None => Utc::now(),
    };

    let campaign = state.generator.create_campaign(
        &blueprint,
        identity.user_id,
        start,
        req.overrides,
        &mut rand::thread_rng(),
    );

    tracing::info!(
        campaign_id = %campaign.id,
        entries = campaign.content_calendar.len(),
        "Campaign created"
    );

    let saved = state.campaigns.save(campaign).await?;
    Ok(HttpResponse::Created().json(ApiResponse::ok(saved)))
}

/// GET /api/campaigns/templates
pub async fn templates(_identity: Identity) -> AppResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(ApiResponse::ok(templates::all_templates())))
}

/// GET /api/campaigns/{id}
pub async fn get(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let campaign = load_owned(&state, path.into_inner(), identity.user_id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(campaign)))
}

/// PUT /api/campaigns/{id}
pub async fn update(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
    body: web::Json<UpdateCampaignRequest>,
) -> AppResult<HttpResponse> {
    let mut campaign = load_owned(&state, path.into_inner(), identity.user_id).await?;
    let req = body.into_inner();

    if let Some(name) = req.name {
        campaign.name = name;
    }
    if let Some(description) = req.description {
        campaign.description = description;
    }
    if let Some(objectives) = req.objectives {
        campaign.objectives = objectives;
    }
    if let Some(platforms) = req.platforms {
        campaign.platforms = platforms;
    }
    if let Some(budget) = req.budget {
        campaign.budget = budget;
    }
    if let Some(currency) = req.currency {
        campaign.currency = currency;
    }
    if let Some(kpis) = req.kpis {
        campaign.kpis = kpis;
    }

    let saved = state.campaigns.save(campaign).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(saved)))
}

/// DELETE /api/campaigns/{id}
pub async fn remove(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let campaign = load_owned(&state, path.into_inner(), identity.user_id).await?;
    state.campaigns.delete(campaign.id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message(
        campaign.id,
        "Campaign deleted",
    )))
}

/// POST /api/campaigns/{id}/publish
pub async fn publish(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let mut campaign = load_owned(&state, path.into_inner(), identity.user_id).await?;
    campaign.publish()?;

    let saved = state.campaigns.save(campaign).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(saved)))
}

/// POST /api/campaigns/{id}/pause
pub async fn pause(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let mut campaign = load_owned(&state, path.into_inner(), identity.user_id).await?;
    campaign.pause()?;

    let saved = state.campaigns.save(campaign).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(saved)))
}

/// POST /api/campaigns/{id}/resume
pub async fn resume(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let mut campaign = load_owned(&state, path.into_inner(), identity.user_id).await?;
    campaign.resume()?;

    let saved = state.campaigns.save(campaign).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(saved)))
}

/// Load a campaign and verify ownership. Campaigns owned by other users
/// are reported as not found rather than forbidden.
async fn load_owned(state: &AppState, id: Uuid, user_id: Uuid) -> Result<Campaign, AppError> {
    let campaign = state
        .campaigns
        .find_by_id(id)
        .await?
        .filter(|c| c.user_id == user_id)
        .ok_or_else(|| AppError::NotFound(format!("Campaign {id} not found")))?;

    Ok(campaign)
}

//! Content handlers - standalone posts, scheduling and publishing.

use actix_web::{HttpResponse, web};
use chrono::Utc;
use uuid::Uuid;

use pulse_core::domain::ContentItem;
use pulse_core::ports::{BaseRepository, ContentFilter, ContentRepository};
use pulse_shared::ApiResponse;
use pulse_shared::dto::{
    ContentListQuery, CreateContentRequest, ScheduleContentRequest, UpdateContentRequest,
};

use super::parse_iso_date;
use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/content
pub async fn list(
    state: web::Data<AppState>,
    identity: Identity,
    query: web::Query<ContentListQuery>,
) -> AppResult<HttpResponse> {
    let filter = ContentFilter {
        status: query.status,
        campaign_id: query.campaign_id,
    };
    let items = state.content.find_by_user(identity.user_id, filter).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(items)))
}

/// POST /api/content
pub async fn create(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<CreateContentRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    if req.caption.trim().is_empty() {
        return Err(AppError::BadRequest("Caption is required".to_string()));
    }

    let content_type = req.content_type.unwrap_or_else(|| "post".to_string());
    let mut item = ContentItem::new(identity.user_id, content_type, req.caption);
    item.campaign_id = req.campaign_id;
    item.hashtags = req.hashtags;
    item.media_urls = req.media_urls;

    if let Some(raw) = req.scheduled_for.as_deref() {
        let when = parse_iso_date(raw)?;
        item.schedule(when, Utc::now())?;
    }

    let saved = state.content.save(item).await?;
    Ok(HttpResponse::Created().json(ApiResponse::ok(saved)))
}

/// GET /api/content/{id}
pub async fn get(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let item = load_owned(&state, path.into_inner(), identity.user_id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(item)))
}

/// PUT /api/content/{id}
pub async fn update(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
    body: web::Json<UpdateContentRequest>,
) -> AppResult<HttpResponse> {
    let mut item = load_owned(&state, path.into_inner(), identity.user_id).await?;
    let req = body.into_inner();

    if let Some(caption) = req.caption {
        item.caption = caption;
    }
    if let Some(hashtags) = req.hashtags {
        item.hashtags = hashtags;
    }
    if let Some(media_urls) = req.media_urls {
        item.media_urls = media_urls;
    }
    if let Some(content_type) = req.content_type {
        item.content_type = content_type;
    }
    item.updated_at = Utc::now();

    let saved = state.content.save(item).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(saved)))
}

/// DELETE /api/content/{id}
pub async fn remove(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let item = load_owned(&state, path.into_inner(), identity.user_id).await?;
    state.content.delete(item.id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message(item.id, "Content deleted")))
}

/// POST /api/content/{id}/publish
pub async fn publish(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let mut item = load_owned(&state, path.into_inner(), identity.user_id).await?;
    item.publish(Utc::now())?;

    let saved = state.content.save(item).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(saved)))
}

/// POST /api/content/{id}/schedule
pub async fn schedule(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
    body: web::Json<ScheduleContentRequest>,
) -> AppResult<HttpResponse> {
    let mut item = load_owned(&state, path.into_inner(), identity.user_id).await?;

    let when = parse_iso_date(&body.scheduled_for)?;
    item.schedule(when, Utc::now())?;

    let saved = state.content.save(item).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(saved)))
}

/// Load a content item and verify ownership. Items owned by other users
/// are reported as not found rather than forbidden.
async fn load_owned(state: &AppState, id: Uuid, user_id: Uuid) -> Result<ContentItem, AppError> {
    let item = state
        .content
        .find_by_id(id)
        .await?
        .filter(|c| c.user_id == user_id)
        .ok_or_else(|| AppError::NotFound(format!("Content {id} not found")))?;

    Ok(item)
}

#[cfg(test)]
mod tests {
    use actix_web::{App, test, web};
    use chrono::{TimeDelta, Utc};
    use std::sync::Arc;
    use uuid::Uuid;

    use pulse_core::ports::TokenService;
    use pulse_infra::{JwtConfig, JwtTokenService};

    use crate::handlers::configure_routes;
    use crate::state::AppState;

    fn auth_setup() -> (Arc<dyn TokenService>, String) {
        let token_service: Arc<dyn TokenService> = Arc::new(JwtTokenService::new(JwtConfig {
            secret: "test-secret".to_string(),
            expiration_hours: 1,
            issuer: "test".to_string(),
        }));
        let token = token_service
            .generate_token(Uuid::new_v4(), "tester@example.com")
            .unwrap();
        (token_service, token)
    }

    macro_rules! test_app {
        ($state:expr, $tokens:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new($state.clone()))
                    .app_data(web::Data::new($tokens.clone()))
                    .configure(configure_routes),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn draft_then_schedule_then_publish() {
        let state = AppState::new();
        let (tokens, bearer) = auth_setup();
        let app = test_app!(state, tokens);

        let req = test::TestRequest::post()
            .uri("/api/content")
            .insert_header(("Authorization", format!("Bearer {bearer}")))
            .set_json(serde_json::json!({
                "caption": "Launch day!",
                "hashtags": ["#launch"]
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 201);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["status"], "draft");
        assert_eq!(body["data"]["contentType"], "post");
        let id = body["data"]["id"].as_str().unwrap().to_string();

        let tomorrow = (Utc::now() + TimeDelta::days(1)).to_rfc3339();
        let req = test::TestRequest::post()
            .uri(&format!("/api/content/{id}/schedule"))
            .insert_header(("Authorization", format!("Bearer {bearer}")))
            .set_json(serde_json::json!({ "scheduledFor": tomorrow }))
            .to_request();
        let body: serde_json::Value =
            test::read_body_json(test::call_service(&app, req).await).await;
        assert_eq!(body["data"]["status"], "scheduled");

        let req = test::TestRequest::post()
            .uri(&format!("/api/content/{id}/publish"))
            .insert_header(("Authorization", format!("Bearer {bearer}")))
            .to_request();
        let body: serde_json::Value =
            test::read_body_json(test::call_service(&app, req).await).await;
        assert_eq!(body["data"]["status"], "published");
        assert!(body["data"]["scheduledFor"].is_null());
    }

    #[actix_web::test]
    async fn scheduling_in_the_past_is_rejected() {
        let state = AppState::new();
        let (tokens, bearer) = auth_setup();
        let app = test_app!(state, tokens);

        let yesterday = (Utc::now() - TimeDelta::days(1)).to_rfc3339();
        let req = test::TestRequest::post()
            .uri("/api/content")
            .insert_header(("Authorization", format!("Bearer {bearer}")))
            .set_json(serde_json::json!({
                "caption": "Too late",
                "scheduledFor": yesterday
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
    }

    #[actix_web::test]
    async fn listing_filters_by_status() {
        let state = AppState::new();
        let (tokens, bearer) = auth_setup();
        let app = test_app!(state, tokens);

        for caption in ["one", "two"] {
            let req = test::TestRequest::post()
                .uri("/api/content")
                .insert_header(("Authorization", format!("Bearer {bearer}")))
                .set_json(serde_json::json!({ "caption": caption }))
                .to_request();
            assert_eq!(test::call_service(&app, req).await.status(), 201);
        }

        let req = test::TestRequest::get()
            .uri("/api/content?status=draft")
            .insert_header(("Authorization", format!("Bearer {bearer}")))
            .to_request();
        let body: serde_json::Value =
            test::read_body_json(test::call_service(&app, req).await).await;
        assert_eq!(body["data"].as_array().unwrap().len(), 2);

        let req = test::TestRequest::get()
            .uri("/api/content?status=published")
            .insert_header(("Authorization", format!("Bearer {bearer}")))
            .to_request();
        let body: serde_json::Value =
            test::read_body_json(test::call_service(&app, req).await).await;
        assert_eq!(body["data"].as_array().unwrap().len(), 0);
    }

    #[actix_web::test]
    async fn empty_caption_is_rejected() {
        let state = AppState::new();
        let (tokens, bearer) = auth_setup();
        let app = test_app!(state, tokens);

        let req = test::TestRequest::post()
            .uri("/api/content")
            .insert_header(("Authorization", format!("Bearer {bearer}")))
            .set_json(serde_json::json!({ "caption": "   " }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
    }
}

//! HTTP handlers and route configuration.

mod auth;
mod campaigns;
mod content;
mod health;

use actix_web::web;
use chrono::{DateTime, Utc};

use crate::middleware::error::AppError;

/// Parse an ISO-8601 timestamp from a request body or query string.
pub(crate) fn parse_iso_date(raw: &str) -> Result<DateTime<Utc>, AppError> {
    raw.parse()
        .map_err(|e| AppError::BadRequest(format!("Invalid date '{raw}': {e}")))
}

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            // Public routes
            .route("/health", web::get().to(health::health_check))
            // Auth routes
            .service(
                web::scope("/auth")
                    .route("/register", web::post().to(auth::register))
                    .route("/login", web::post().to(auth::login))
                    .route("/me", web::get().to(auth::me)),
            )
            // Campaign routes (Bearer token required)
            .service(
                web::scope("/campaigns")
                    // Registered before the `{id}` matcher so "templates"
                    // is not captured as an id.
                    .route("/templates", web::get().to(campaigns::templates))
                    .route("", web::get().to(campaigns::list))
                    .route("", web::post().to(campaigns::create))
                    .route("/{id}", web::get().to(campaigns::get))
                    .route("/{id}", web::put().to(campaigns::update))
                    .route("/{id}", web::delete().to(campaigns::remove))
                    .route("/{id}/publish", web::post().to(campaigns::publish))
                    .route("/{id}/pause", web::post().to(campaigns::pause))
                    .route("/{id}/resume", web::post().to(campaigns::resume)),
            )
            // Content routes (Bearer token required)
            .service(
                web::scope("/content")
                    .route("", web::get().to(content::list))
                    .route("", web::post().to(content::create))
                    .route("/{id}", web::get().to(content::get))
                    .route("/{id}", web::put().to(content::update))
                    .route("/{id}", web::delete().to(content::remove))
                    .route("/{id}/publish", web::post().to(content::publish))
                    .route("/{id}/schedule", web::post().to(content::schedule)),
            ),
    );
}

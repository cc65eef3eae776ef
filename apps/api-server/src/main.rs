//! # SocialPulse API Server
//!
//! The main entry point for the Actix-web HTTP server.

use actix_web::{App, HttpServer, web};
use std::sync::Arc;
use tracing_actix_web::TracingLogger;

mod background;
mod config;
mod handlers;
mod middleware;
mod observability;
mod state;

use config::AppConfig;
use pulse_core::ports::{PasswordService, RateLimiter, TokenService};
use pulse_infra::{Argon2PasswordService, InMemoryRateLimiter, JwtTokenService};
use state::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    init_tracing();

    // Load configuration
    let config = AppConfig::from_env();

    tracing::info!(
        "Starting SocialPulse API Server on {}:{}",
        config.host,
        config.port
    );

    // Build application state
    let state = AppState::new();

    let token_service: Arc<dyn TokenService> = Arc::new(JwtTokenService::from_env());
    let password_service: Arc<dyn PasswordService> = Arc::new(Argon2PasswordService::new());
    let rate_limiter: Arc<dyn RateLimiter> = Arc::new(InMemoryRateLimiter::from_env());

    // Background job publishing due scheduled content. The handle must
    // stay alive for jobs to keep firing.
    let _scheduler = match background::start(config.scheduler_enabled, state.content.clone()).await
    {
        Ok(scheduler) => scheduler,
        Err(e) => {
            tracing::error!("Failed to start scheduler: {e}");
            None
        }
    };

    // Start HTTP server
    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(observability::RequestIdMiddleware)
            .wrap(middleware::rate_limit::RateLimitMiddleware::new(
                rate_limiter.clone(),
            ))
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(token_service.clone()))
            .app_data(web::Data::new(password_service.clone()))
            .configure(handlers::configure_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,api_server=debug,pulse_infra=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().pretty())
        .init();
}

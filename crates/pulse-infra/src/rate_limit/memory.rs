//! In-memory rate limiter using governor crate.

use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter as GovernorRateLimiter};

use pulse_core::ports::{RateLimitError, RateLimitResult, RateLimiter};

type DirectRateLimiter = GovernorRateLimiter<NotKeyed, InMemoryState, DefaultClock>;

/// In-memory rate limiter configuration.
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    /// Maximum requests per window.
    pub max_requests: u32,
    /// Window duration.
    pub window: Duration,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_requests: 100,
            window: Duration::from_secs(60),
        }
    }
}

/// In-memory rate limiter using the GCRA algorithm.
///
/// Limits are per-process, not distributed across instances.
pub struct InMemoryRateLimiter {
    limiter: Arc<DirectRateLimiter>,
    config: RateLimitConfig,
}

impl InMemoryRateLimiter {
    pub fn new(mut config: RateLimitConfig) -> Self {
        // A zero quota or window has no GCRA representation; fall back to
        // the defaults rather than refusing to start.
        let defaults = RateLimitConfig::default();
        if config.max_requests == 0 {
            tracing::warn!(
                "Rate limit max_requests must be positive, using {}",
                defaults.max_requests
            );
            config.max_requests = defaults.max_requests;
        }
        if config.window.is_zero() {
            tracing::warn!(
                "Rate limit window must be positive, using {:?}",
                defaults.window
            );
            config.window = defaults.window;
        }

        let quota = Quota::with_period(config.window / config.max_requests)
            .expect("Valid quota")
            .allow_burst(NonZeroU32::new(config.max_requests).expect("Non-zero"));

        let limiter = Arc::new(DirectRateLimiter::direct(quota));

        Self { limiter, config }
    }

    pub fn from_env() -> Self {
        let config = RateLimitConfig {
            max_requests: std::env::var("RATE_LIMIT_MAX_REQUESTS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(100),
            window: Duration::from_secs(
                std::env::var("RATE_LIMIT_WINDOW_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(60),
            ),
        };
        Self::new(config)
    }
}

#[async_trait]
impl RateLimiter for InMemoryRateLimiter {
    async fn check(&self, _key: &str) -> Result<RateLimitResult, RateLimitError> {
        // The limiter is global, not per-key.
        match self.limiter.check() {
            Ok(_) => Ok(RateLimitResult {
                allowed: true,
                remaining: self.config.max_requests, // Approximate
                reset_after: self.config.window,
            }),
            Err(not_until) => Ok(RateLimitResult {
                allowed: false,
                remaining: 0,
                reset_after: not_until.wait_time_from(governor::clock::Clock::now(
                    &governor::clock::DefaultClock::default(),
                )),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn small_quota_is_exhausted() {
        let limiter = InMemoryRateLimiter::new(RateLimitConfig {
            max_requests: 2,
            window: Duration::from_secs(60),
        });

        assert!(limiter.check("x").await.unwrap().allowed);
        assert!(limiter.check("x").await.unwrap().allowed);

        let third = limiter.check("x").await.unwrap();
        assert!(!third.allowed);
        assert_eq!(third.remaining, 0);
    }

    #[tokio::test]
    async fn zero_quota_falls_back_to_defaults() {
        let limiter = InMemoryRateLimiter::new(RateLimitConfig {
            max_requests: 0,
            window: Duration::from_secs(0),
        });

        let result = limiter.check("x").await.unwrap();
        assert!(result.allowed);
        assert_eq!(limiter.config.max_requests, 100);
        assert_eq!(limiter.config.window, Duration::from_secs(60));
    }
}

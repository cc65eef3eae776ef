//! # Pulse Infrastructure
//!
//! Concrete implementations of the ports defined in `pulse-core`.
//!
//! Persistence proper is out of scope for this service; the repository
//! implementations here are in-memory maps behind the same traits a
//! database-backed implementation would satisfy.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - In-memory repositories only
//! - `auth` - JWT + Argon2 authentication
//! - `rate-limit` - Rate limiting via governor

pub mod repository;

#[cfg(feature = "auth")]
pub mod auth;

#[cfg(feature = "rate-limit")]
pub mod rate_limit;

pub use repository::{
    InMemoryCampaignRepository, InMemoryContentRepository, InMemoryUserRepository,
};

#[cfg(feature = "auth")]
pub use auth::{Argon2PasswordService, JwtConfig, JwtTokenService};

#[cfg(feature = "rate-limit")]
pub use rate_limit::{InMemoryRateLimiter, RateLimitConfig};

//! # Pulse Core
//!
//! The domain layer of SocialPulse.
//! Campaign blueprints, the content-calendar generator, blueprint presets,
//! and the port traits infrastructure must implement. This crate contains
//! pure business logic with zero infrastructure dependencies.

pub mod calendar;
pub mod domain;
pub mod error;
pub mod ports;
pub mod templates;

pub use calendar::CalendarGenerator;
pub use error::DomainError;

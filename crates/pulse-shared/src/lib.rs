//! # Pulse Shared
//!
//! Request/response types shared between the API server and clients,
//! plus the standard response envelope.

pub mod dto;
pub mod response;

pub use response::{ApiResponse, ErrorResponse};

//! # madrasa-api
//!
//! HTTP API layer for the madrasa office built on Axum.
//!
//! Provides the REST endpoints for expense, income, and staff records and
//! pending role invitations, plus middleware (CORS, logging), extractors,
//! DTOs, and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, build_state};
pub use state::AppState;

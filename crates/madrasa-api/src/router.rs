//! Route definitions for the madrasa office HTTP API.
//!
//! All routes are mounted under `/api`. Every route except health requires
//! a bearer token.

use std::time::Duration;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware as axum_middleware;
use axum::routing::{delete, get, post, put};
use tower_http::compression::CompressionLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use madrasa_entity::{ExpenseRecord, IncomeRecord, StaffMember};

use crate::handlers;
use crate::middleware;
use crate::state::{AppState, RecordResource};

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let server = &state.config.server;

    let api_routes = Router::new()
        .merge(health_routes())
        .merge(record_routes::<ExpenseRecord>())
        .merge(record_routes::<IncomeRecord>())
        .merge(record_routes::<StaffMember>())
        .merge(invitation_routes());

    Router::new()
        .nest("/api", api_routes)
        .layer(DefaultBodyLimit::max(server.max_body_bytes))
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(
            server.request_timeout_seconds,
        )))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::cors::build_cors_layer(&server.cors))
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/health/detailed", get(handlers::health::health_detailed))
}

/// List, search, summary, create, update, delete for one record kind.
fn record_routes<R: RecordResource>() -> Router<AppState> {
    let collection = format!("/{}", R::PATH);
    let summary = format!("/{}/summary", R::PATH);
    let item = format!("/{}/{{id}}", R::PATH);

    Router::new()
        .route(
            &collection,
            get(handlers::record::list::<R>).post(handlers::record::create::<R>),
        )
        .route(&summary, get(handlers::record::summary::<R>))
        .route(
            &item,
            put(handlers::record::update::<R>).delete(handlers::record::delete::<R>),
        )
}

fn invitation_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/invitations",
            get(handlers::invitation::list_invitations)
                .post(handlers::invitation::create_invitation),
        )
        .route("/invitations/join", post(handlers::invitation::join_madrasa))
        .route(
            "/invitations/{id}",
            delete(handlers::invitation::delete_invitation),
        )
}

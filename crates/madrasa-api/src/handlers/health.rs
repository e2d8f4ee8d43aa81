//! Health check handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use tracing::warn;

use madrasa_core::result::AppResult;

use crate::dto::response::{ApiResponse, DetailedHealthResponse, HealthResponse};
use crate::state::AppState;

/// GET /api/health
pub async fn health() -> Json<ApiResponse<HealthResponse>> {
    Json(ApiResponse::ok(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}

/// GET /api/health/detailed
///
/// Answers 503 when the database or the cache fails its check.
pub async fn health_detailed(
    State(state): State<AppState>,
) -> (StatusCode, Json<ApiResponse<DetailedHealthResponse>>) {
    let database = match &state.database {
        Some(db) => component_status("database", db.health_check().await),
        None => "not configured",
    };
    let cache = component_status("cache", state.cache.health_check().await);

    let healthy = database != UNAVAILABLE && cache != UNAVAILABLE;
    let code = if healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        code,
        Json(ApiResponse::ok(DetailedHealthResponse {
            status: if healthy { "ok" } else { "degraded" }.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            database: database.to_string(),
            cache: cache.to_string(),
        })),
    )
}

const UNAVAILABLE: &str = "unavailable";

fn component_status(component: &str, result: AppResult<bool>) -> &'static str {
    match result {
        Ok(true) => "ok",
        Ok(false) => {
            warn!(component, "Health check reported unhealthy");
            UNAVAILABLE
        }
        Err(e) => {
            warn!(component, error = %e, "Health check failed");
            UNAVAILABLE
        }
    }
}

//! Generic handlers shared by the expense, income, and staff collections.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;

use crate::dto::request::SearchParams;
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiResult;
use crate::extractors::{AuthUser, JsonBody};
use crate::state::{AppState, RecordResource};

/// GET /api/{collection}?q=
pub async fn list<R: RecordResource>(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<SearchParams>,
) -> ApiResult<Json<ApiResponse<Vec<R>>>> {
    let records = R::service(&state).search(&auth, params.query()).await?;
    Ok(Json(ApiResponse::ok(records)))
}

/// GET /api/{collection}/summary?q=
pub async fn summary<R: RecordResource>(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<SearchParams>,
) -> ApiResult<Json<ApiResponse<R::Summary>>> {
    let summary = R::service(&state).summary(&auth, params.query()).await?;
    Ok(Json(ApiResponse::ok(summary)))
}

/// POST /api/{collection}
pub async fn create<R: RecordResource>(
    State(state): State<AppState>,
    auth: AuthUser,
    JsonBody(data): JsonBody<R::Create>,
) -> ApiResult<Json<ApiResponse<R>>> {
    let record = R::service(&state).create(&auth, data).await?;
    Ok(Json(ApiResponse::ok(record)))
}

/// PUT /api/{collection}/{id}
pub async fn update<R: RecordResource>(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    JsonBody(patch): JsonBody<R::Patch>,
) -> ApiResult<Json<ApiResponse<R>>> {
    let record = R::service(&state).update(&auth, id, patch).await?;
    Ok(Json(ApiResponse::ok(record)))
}

/// DELETE /api/{collection}/{id}
pub async fn delete<R: RecordResource>(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<MessageResponse>>> {
    R::service(&state).delete(&auth, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: format!("{} record deleted", R::KIND),
    })))
}

//! Pending role invitation handlers.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use madrasa_entity::PendingInvitation;

use crate::dto::request::{CreateInvitationRequest, JoinMadrasaRequest};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiResult;
use crate::extractors::{AuthUser, JsonBody};
use crate::state::AppState;

/// GET /api/invitations
pub async fn list_invitations(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<ApiResponse<Vec<PendingInvitation>>>> {
    let invitations = state.invitation_service.list_invitations(&auth).await?;
    Ok(Json(ApiResponse::ok(invitations)))
}

/// POST /api/invitations
pub async fn create_invitation(
    State(state): State<AppState>,
    auth: AuthUser,
    JsonBody(req): JsonBody<CreateInvitationRequest>,
) -> ApiResult<Json<ApiResponse<PendingInvitation>>> {
    let invitation = state
        .invitation_service
        .issue_invitation(&auth, req.into())
        .await?;
    Ok(Json(ApiResponse::ok(invitation)))
}

/// POST /api/invitations/join
pub async fn join_madrasa(
    State(state): State<AppState>,
    auth: AuthUser,
    JsonBody(req): JsonBody<JoinMadrasaRequest>,
) -> ApiResult<Json<ApiResponse<PendingInvitation>>> {
    let invitation = state
        .invitation_service
        .request_to_join(&auth, req.into())
        .await?;
    Ok(Json(ApiResponse::ok(invitation)))
}

/// DELETE /api/invitations/{id}
pub async fn delete_invitation(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<MessageResponse>>> {
    state.invitation_service.delete_invitation(&auth, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Invitation removed".to_string(),
    })))
}

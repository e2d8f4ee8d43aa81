//! Pending invitation model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// An outstanding offer for an email address to join a madrasa with a role.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PendingInvitation {
    /// Unique invitation identifier.
    pub id: Uuid,
    /// Invitee email address.
    pub email: String,
    /// Free-form role name.
    pub role: String,
    /// Target madrasa, if one could be resolved.
    pub madrasa_name: Option<String>,
    /// The actor who issued the invitation.
    pub created_by: Option<Uuid>,
    /// When the invitation was created.
    pub created_at: DateTime<Utc>,
}

/// Data persisted for a new invitation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewInvitation {
    pub email: String,
    pub role: String,
    pub madrasa_name: Option<String>,
    pub created_by: Option<Uuid>,
}

//! Request DTOs.

use serde::{Deserialize, Serialize};

use madrasa_service::{IssueInvitation, JoinRequest};

/// `?q=` search parameter accepted by list and summary endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchParams {
    /// Free-text query.
    #[serde(default)]
    pub q: Option<String>,
}

impl SearchParams {
    /// The query, or the empty string when absent.
    pub fn query(&self) -> &str {
        self.q.as_deref().unwrap_or("")
    }
}

/// POST /api/invitations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateInvitationRequest {
    /// Invitee email.
    pub email: String,
    /// Role to grant.
    pub role: String,
    /// Target madrasa. Defaults to the actor's own.
    #[serde(default)]
    pub madrasa_name: Option<String>,
}

impl From<CreateInvitationRequest> for IssueInvitation {
    fn from(req: CreateInvitationRequest) -> Self {
        Self {
            email: req.email,
            role: req.role,
            madrasa_name: req.madrasa_name,
        }
    }
}

/// POST /api/invitations/join
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JoinMadrasaRequest {
    /// Madrasa to join.
    pub madrasa_name: String,
    /// Requested role.
    pub role: String,
    /// Email to register. Defaults to the login email.
    #[serde(default)]
    pub email: Option<String>,
}

impl From<JoinMadrasaRequest> for JoinRequest {
    fn from(req: JoinMadrasaRequest) -> Self {
        Self {
            madrasa_name: req.madrasa_name,
            role: req.role,
            email: req.email,
        }
    }
}

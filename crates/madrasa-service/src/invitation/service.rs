//! Invitation issuance, listing, and removal.
//!
//! Issuing persists the pending role first and only then attempts the email.
//! A failed email never undoes the insert.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;
use validator::Validate;

use madrasa_core::error::AppError;
use madrasa_core::result::AppResult;
use madrasa_entity::invitation::{InvitationNotice, NewInvitation, PendingInvitation};

use crate::context::RequestContext;
use crate::scope::ScopeResolver;
use crate::traits::{InvitationStore, InviteNotifier, ProfileLookup};

/// Fallback inviter name when neither a profile name nor a login email is known.
const DEFAULT_INVITER: &str = "Admin";

/// Request to invite an email address to a madrasa with a role.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct IssueInvitation {
    /// Invitee email.
    #[validate(
        length(min = 1, message = "Email is required"),
        email(message = "Email is not a valid address")
    )]
    pub email: String,
    /// Role to grant.
    #[validate(length(min = 1, message = "Role is required"))]
    pub role: String,
    /// Target madrasa. Defaults to the inviting actor's madrasa.
    #[serde(default)]
    pub madrasa_name: Option<String>,
}

impl IssueInvitation {
    /// Trim every field and drop a blank madrasa name.
    fn normalized(self) -> Self {
        Self {
            email: self.email.trim().to_string(),
            role: self.role.trim().to_string(),
            madrasa_name: self
                .madrasa_name
                .map(|m| m.trim().to_string())
                .filter(|m| !m.is_empty()),
        }
    }
}

/// Self-service request to join a named madrasa.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct JoinRequest {
    /// Madrasa to join.
    #[validate(length(min = 1, message = "Madrasa name is required"))]
    pub madrasa_name: String,
    /// Requested role.
    #[validate(length(min = 1, message = "Role is required"))]
    pub role: String,
    /// Email to invite. Defaults to the actor's login email.
    #[serde(default)]
    pub email: Option<String>,
}

impl JoinRequest {
    /// Trim every field and drop a blank email.
    fn normalized(self) -> Self {
        Self {
            madrasa_name: self.madrasa_name.trim().to_string(),
            role: self.role.trim().to_string(),
            email: self
                .email
                .map(|e| e.trim().to_string())
                .filter(|e| !e.is_empty()),
        }
    }
}

/// Where an invitation goes and who it is from.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Resolution {
    madrasa_name: String,
    invited_by: String,
}

/// Orchestrates the pending-role store, profile lookup, and notifier.
#[derive(Debug, Clone)]
pub struct InvitationService {
    store: Arc<dyn InvitationStore>,
    profiles: Arc<dyn ProfileLookup>,
    notifier: Arc<dyn InviteNotifier>,
    scope: Arc<ScopeResolver>,
}

impl InvitationService {
    /// Creates a new invitation service.
    pub fn new(
        store: Arc<dyn InvitationStore>,
        profiles: Arc<dyn ProfileLookup>,
        notifier: Arc<dyn InviteNotifier>,
        scope: Arc<ScopeResolver>,
    ) -> Self {
        Self {
            store,
            profiles,
            notifier,
            scope,
        }
    }

    /// Persist a pending role and, when a madrasa is known, email the invitee.
    ///
    /// Validation happens before any collaborator is called. A store failure
    /// is returned and nothing is sent. A notifier failure is logged and the
    /// persisted row is still returned.
    pub async fn issue_invitation(
        &self,
        ctx: &RequestContext,
        request: IssueInvitation,
    ) -> AppResult<PendingInvitation> {
        let request = request.normalized();
        request.validate()?;

        let resolution = self.resolve(ctx, request.madrasa_name.as_deref()).await;

        let invitation = self
            .store
            .create(&NewInvitation {
                email: request.email.clone(),
                role: request.role.clone(),
                madrasa_name: resolution.as_ref().map(|r| r.madrasa_name.clone()),
                created_by: Some(ctx.actor_id),
            })
            .await?;

        info!(
            invitation_id = %invitation.id,
            email = %invitation.email,
            role = %invitation.role,
            actor_id = %ctx.actor_id,
            "Pending role created"
        );

        let Some(resolution) = resolution else {
            info!(
                invitation_id = %invitation.id,
                "No madrasa resolved for invitation; email not sent"
            );
            return Ok(invitation);
        };

        let notice = InvitationNotice {
            email: request.email,
            role: request.role,
            madrasa_name: resolution.madrasa_name,
            invited_by: resolution.invited_by,
        };
        if let Err(e) = self.notifier.notify(&notice).await {
            warn!(
                invitation_id = %invitation.id,
                email = %notice.email,
                error = %e,
                "Failed to send invitation email"
            );
        }

        Ok(invitation)
    }

    /// Ask to join `madrasa_name`. The invitee defaults to the actor's own email.
    pub async fn request_to_join(
        &self,
        ctx: &RequestContext,
        request: JoinRequest,
    ) -> AppResult<PendingInvitation> {
        let request = request.normalized();
        request.validate()?;

        let email = request
            .email
            .or_else(|| ctx.email().map(str::to_string))
            .ok_or_else(|| AppError::validation("Email is required"))?;

        self.issue_invitation(
            ctx,
            IssueInvitation {
                email,
                role: request.role,
                madrasa_name: Some(request.madrasa_name),
            },
        )
        .await
    }

    /// Pending roles of the actor's madrasa, newest first.
    pub async fn list_invitations(&self, ctx: &RequestContext) -> AppResult<Vec<PendingInvitation>> {
        let madrasa = self.scope.resolve(ctx).await?;
        self.store.list(&madrasa).await
    }

    /// Remove a pending role from the actor's madrasa.
    pub async fn delete_invitation(&self, ctx: &RequestContext, id: Uuid) -> AppResult<()> {
        let madrasa = self.scope.resolve(ctx).await?;

        if !self.store.delete(&madrasa, id).await? {
            return Err(AppError::not_found(format!("Invitation {id} not found")));
        }

        info!(invitation_id = %id, actor_id = %ctx.actor_id, "Pending role removed");
        Ok(())
    }

    /// Decide the target madrasa and inviter name.
    ///
    /// A supplied madrasa wins. Otherwise the actor's profile is consulted;
    /// a failed lookup counts as no profile.
    async fn resolve(&self, ctx: &RequestContext, supplied: Option<&str>) -> Option<Resolution> {
        let login_or_default = || ctx.email().unwrap_or(DEFAULT_INVITER).to_string();

        if let Some(madrasa_name) = supplied {
            return Some(Resolution {
                madrasa_name: madrasa_name.to_string(),
                invited_by: login_or_default(),
            });
        }

        let profile = match self.profiles.find(ctx.actor_id).await {
            Ok(profile) => profile,
            Err(e) => {
                warn!(actor_id = %ctx.actor_id, error = %e, "Profile lookup failed");
                None
            }
        }?;

        let madrasa_name = profile.madrasa()?.to_string();
        let invited_by = profile
            .display_name()
            .map(str::to_string)
            .unwrap_or_else(login_or_default);

        Some(Resolution {
            madrasa_name,
            invited_by,
        })
    }
}

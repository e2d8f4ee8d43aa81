//! Collaborator traits used by the services.
//!
//! Production implementations live in [`crate::adapters`]; tests supply
//! in-memory ones.

use async_trait::async_trait;
use uuid::Uuid;

use madrasa_core::result::AppResult;
use madrasa_entity::invitation::{InvitationNotice, NewInvitation, PendingInvitation};
use madrasa_entity::profile::Profile;
use madrasa_entity::record::Record;

/// Persistence for one record kind, scoped by madrasa.
#[async_trait]
pub trait RecordStore<R: Record>: Send + Sync + std::fmt::Debug {
    /// All records of a madrasa in the kind's display order.
    async fn list(&self, madrasa_name: &str) -> AppResult<Vec<R>>;

    /// Insert a record.
    async fn create(
        &self,
        madrasa_name: &str,
        created_by: Option<Uuid>,
        data: &R::Create,
    ) -> AppResult<R>;

    /// Partially update a record. `NotFound` if absent.
    async fn update(&self, madrasa_name: &str, id: Uuid, patch: &R::Patch) -> AppResult<R>;

    /// Delete a record. `NotFound` if absent.
    async fn delete(&self, madrasa_name: &str, id: Uuid) -> AppResult<()>;
}

/// Persistence for pending role invitations.
#[async_trait]
pub trait InvitationStore: Send + Sync + std::fmt::Debug {
    /// Insert a pending role.
    async fn create(&self, data: &NewInvitation) -> AppResult<PendingInvitation>;

    /// Pending roles of a madrasa, newest first.
    async fn list(&self, madrasa_name: &str) -> AppResult<Vec<PendingInvitation>>;

    /// Delete a pending role. Returns `false` if nothing matched.
    async fn delete(&self, madrasa_name: &str, id: Uuid) -> AppResult<bool>;
}

/// Actor id to profile lookup.
#[async_trait]
pub trait ProfileLookup: Send + Sync + std::fmt::Debug {
    /// The actor's profile, or `None` if it has none.
    async fn find(&self, actor_id: Uuid) -> AppResult<Option<Profile>>;
}

/// Best-effort delivery of invitation emails.
#[async_trait]
pub trait InviteNotifier: Send + Sync + std::fmt::Debug {
    /// Tell the invitee about their invitation.
    async fn notify(&self, notice: &InvitationNotice) -> AppResult<()>;
}

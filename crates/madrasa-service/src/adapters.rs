//! Production implementations of the collaborator traits.

use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use madrasa_core::result::AppResult;
use madrasa_database::repositories::{InvitationRepository, ProfileRepository, RecordRepository};
use madrasa_entity::invitation::{InvitationNotice, NewInvitation, PendingInvitation};
use madrasa_entity::profile::Profile;
use madrasa_entity::record::Record;
use madrasa_mail::ResendMailer;

use crate::traits::{InvitationStore, InviteNotifier, ProfileLookup, RecordStore};

#[async_trait]
impl<R: Record> RecordStore<R> for RecordRepository<R> {
    async fn list(&self, madrasa_name: &str) -> AppResult<Vec<R>> {
        self.find_by_madrasa(madrasa_name).await
    }

    async fn create(
        &self,
        madrasa_name: &str,
        created_by: Option<Uuid>,
        data: &R::Create,
    ) -> AppResult<R> {
        RecordRepository::create(self, madrasa_name, created_by, data).await
    }

    async fn update(&self, madrasa_name: &str, id: Uuid, patch: &R::Patch) -> AppResult<R> {
        RecordRepository::update(self, madrasa_name, id, patch).await
    }

    async fn delete(&self, madrasa_name: &str, id: Uuid) -> AppResult<()> {
        RecordRepository::delete(self, madrasa_name, id).await
    }
}

#[async_trait]
impl InvitationStore for InvitationRepository {
    async fn create(&self, data: &NewInvitation) -> AppResult<PendingInvitation> {
        InvitationRepository::create(self, data).await
    }

    async fn list(&self, madrasa_name: &str) -> AppResult<Vec<PendingInvitation>> {
        self.find_by_madrasa(madrasa_name).await
    }

    async fn delete(&self, madrasa_name: &str, id: Uuid) -> AppResult<bool> {
        InvitationRepository::delete(self, madrasa_name, id).await
    }
}

#[async_trait]
impl ProfileLookup for ProfileRepository {
    async fn find(&self, actor_id: Uuid) -> AppResult<Option<Profile>> {
        self.find_by_id(actor_id).await
    }
}

#[async_trait]
impl InviteNotifier for ResendMailer {
    async fn notify(&self, notice: &InvitationNotice) -> AppResult<()> {
        self.send_invitation(notice).await.map(|_| ())
    }
}

/// Notifier used when outbound mail is disabled. Logs and succeeds.
#[derive(Debug, Clone, Default)]
pub struct LogOnlyNotifier;

#[async_trait]
impl InviteNotifier for LogOnlyNotifier {
    async fn notify(&self, notice: &InvitationNotice) -> AppResult<()> {
        info!(
            email = %notice.email,
            role = %notice.role,
            madrasa = %notice.madrasa_name,
            "Mail disabled; invitation email not sent"
        );
        Ok(())
    }
}

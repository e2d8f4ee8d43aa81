//! Profile repository.

use sqlx::PgPool;
use uuid::Uuid;

use madrasa_core::error::{AppError, ErrorKind};
use madrasa_core::result::AppResult;
use madrasa_entity::profile::Profile;

/// Read-only access to actor profiles.
#[derive(Debug, Clone)]
pub struct ProfileRepository {
    pool: PgPool,
}

impl ProfileRepository {
    /// Create a new profile repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find the profile of an actor.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Profile>> {
        sqlx::query_as::<_, Profile>(
            "SELECT id, email, full_name, madrasa_name FROM profiles WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find profile", e))
    }
}

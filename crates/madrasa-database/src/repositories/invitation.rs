//! Pending role invitation repository.

use sqlx::PgPool;
use uuid::Uuid;

use madrasa_core::error::{AppError, ErrorKind};
use madrasa_core::result::AppResult;
use madrasa_entity::invitation::{NewInvitation, PendingInvitation};

/// Repository for the `pending_user_roles` table.
#[derive(Debug, Clone)]
pub struct InvitationRepository {
    pool: PgPool,
}

impl InvitationRepository {
    /// Create a new invitation repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a pending role and return the stored row.
    pub async fn create(&self, data: &NewInvitation) -> AppResult<PendingInvitation> {
        sqlx::query_as::<_, PendingInvitation>(
            "INSERT INTO pending_user_roles (email, role, madrasa_name, created_by) \
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(&data.email)
        .bind(&data.role)
        .bind(&data.madrasa_name)
        .bind(data.created_by)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create invitation", e))
    }

    /// Pending roles of a madrasa, newest first.
    pub async fn find_by_madrasa(&self, madrasa_name: &str) -> AppResult<Vec<PendingInvitation>> {
        sqlx::query_as::<_, PendingInvitation>(
            "SELECT * FROM pending_user_roles WHERE madrasa_name = $1 ORDER BY created_at DESC",
        )
        .bind(madrasa_name)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list invitations", e))
    }

    /// Delete a pending role within a madrasa. Returns `false` if nothing matched.
    pub async fn delete(&self, madrasa_name: &str, id: Uuid) -> AppResult<bool> {
        let result =
            sqlx::query("DELETE FROM pending_user_roles WHERE id = $1 AND madrasa_name = $2")
                .bind(id)
                .bind(madrasa_name)
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to delete invitation", e)
                })?;

        Ok(result.rows_affected() > 0)
    }
}

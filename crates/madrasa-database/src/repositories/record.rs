//! Generic repository for madrasa-scoped records.
//!
//! Statements are assembled with [`QueryBuilder`] from the record's table
//! name and the column list of its create or patch payload. Every query is
//! filtered by `madrasa_name`.

use std::marker::PhantomData;

use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::debug;
use uuid::Uuid;

use madrasa_core::error::{AppError, ErrorKind};
use madrasa_core::result::AppResult;
use madrasa_entity::record::{ColumnValue, Columns, Record};

/// Repository for list, create, update, and delete of one record kind.
#[derive(Debug, Clone)]
pub struct RecordRepository<R> {
    pool: PgPool,
    _record: PhantomData<fn() -> R>,
}

impl<R: Record> RecordRepository<R> {
    /// Create a new record repository.
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            _record: PhantomData,
        }
    }

    /// All records of a madrasa in the kind's display order.
    pub async fn find_by_madrasa(&self, madrasa_name: &str) -> AppResult<Vec<R>> {
        let sql = format!(
            "SELECT * FROM {} WHERE madrasa_name = $1 ORDER BY {}",
            R::TABLE,
            R::ORDER_BY
        );
        sqlx::query_as::<_, R>(&sql)
            .bind(madrasa_name)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Database,
                    format!("Failed to list {} records", R::KIND),
                    e,
                )
            })
    }

    /// Find one record within a madrasa.
    pub async fn find_by_id(&self, madrasa_name: &str, id: Uuid) -> AppResult<Option<R>> {
        let sql = format!(
            "SELECT * FROM {} WHERE id = $1 AND madrasa_name = $2",
            R::TABLE
        );
        sqlx::query_as::<_, R>(&sql)
            .bind(id)
            .bind(madrasa_name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Database,
                    format!("Failed to find {} record", R::KIND),
                    e,
                )
            })
    }

    /// Insert a record and return the stored row.
    pub async fn create(
        &self,
        madrasa_name: &str,
        created_by: Option<Uuid>,
        data: &R::Create,
    ) -> AppResult<R> {
        let mut builder = insert_query(R::TABLE, madrasa_name, created_by, data);
        debug!(sql = builder.sql(), "Inserting record");

        builder
            .build_query_as::<R>()
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Database,
                    format!("Failed to create {} record", R::KIND),
                    e,
                )
            })
    }

    /// Apply a partial update and return the updated row.
    ///
    /// Returns `NotFound` when no row with `id` exists in the madrasa.
    pub async fn update(&self, madrasa_name: &str, id: Uuid, patch: &R::Patch) -> AppResult<R> {
        let Some(mut builder) = update_query(R::TABLE, madrasa_name, id, patch) else {
            return self
                .find_by_id(madrasa_name, id)
                .await?
                .ok_or_else(|| not_found::<R>(id));
        };
        debug!(sql = builder.sql(), "Updating record");

        builder
            .build_query_as::<R>()
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Database,
                    format!("Failed to update {} record", R::KIND),
                    e,
                )
            })?
            .ok_or_else(|| not_found::<R>(id))
    }

    /// Delete a record. Returns `NotFound` when nothing was deleted.
    pub async fn delete(&self, madrasa_name: &str, id: Uuid) -> AppResult<()> {
        let sql = format!(
            "DELETE FROM {} WHERE id = $1 AND madrasa_name = $2",
            R::TABLE
        );
        let result = sqlx::query(&sql)
            .bind(id)
            .bind(madrasa_name)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Database,
                    format!("Failed to delete {} record", R::KIND),
                    e,
                )
            })?;

        if result.rows_affected() == 0 {
            return Err(not_found::<R>(id));
        }
        Ok(())
    }
}

fn not_found<R: Record>(id: Uuid) -> AppError {
    AppError::not_found(format!("{} record {id} not found", R::KIND))
}

/// Bind one column value, casting enum text to its PostgreSQL type.
fn push_value(builder: &mut QueryBuilder<'static, Postgres>, value: ColumnValue) {
    match value {
        ColumnValue::Text(text) => {
            builder.push_bind(text);
        }
        ColumnValue::OptionalText(text) => {
            builder.push_bind(text);
        }
        ColumnValue::Amount(amount) => {
            builder.push_bind(amount);
        }
        ColumnValue::Date(date) => {
            builder.push_bind(date);
        }
        ColumnValue::Enum { value, pg_type } => {
            builder.push_bind(value).push("::").push(pg_type);
        }
    }
}

fn insert_query(
    table: &str,
    madrasa_name: &str,
    created_by: Option<Uuid>,
    data: &impl Columns,
) -> QueryBuilder<'static, Postgres> {
    let columns = data.columns();

    let mut builder = QueryBuilder::new(format!("INSERT INTO {table} (madrasa_name, created_by"));
    for (name, _) in &columns {
        builder.push(", ").push(*name);
    }
    builder.push(") VALUES (");
    builder.push_bind(madrasa_name.to_string());
    builder.push(", ");
    builder.push_bind(created_by);
    for (_, value) in columns {
        builder.push(", ");
        push_value(&mut builder, value);
    }
    builder.push(") RETURNING *");
    builder
}

/// `None` when the patch carries no columns.
fn update_query(
    table: &str,
    madrasa_name: &str,
    id: Uuid,
    patch: &impl Columns,
) -> Option<QueryBuilder<'static, Postgres>> {
    let columns = patch.columns();
    if columns.is_empty() {
        return None;
    }

    let mut builder = QueryBuilder::new(format!("UPDATE {table} SET updated_at = NOW()"));
    for (name, value) in columns {
        builder.push(", ").push(name).push(" = ");
        push_value(&mut builder, value);
    }
    builder.push(" WHERE id = ");
    builder.push_bind(id);
    builder.push(" AND madrasa_name = ");
    builder.push_bind(madrasa_name.to_string());
    builder.push(" RETURNING *");
    Some(builder)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use madrasa_entity::{
        CreateExpense, ExpenseCategory, PaymentMethod, StaffStatus, UpdateExpense, UpdateStaff,
    };

    #[test]
    fn test_insert_query_binds_scope_then_payload() {
        let data = CreateExpense {
            amount: 1200.0,
            category: ExpenseCategory::Food,
            description: "Rice and lentils".to_string(),
            paid_to: "Grocer".to_string(),
            payment_method: PaymentMethod::Cash,
            date: NaiveDate::from_ymd_opt(2024, 5, 2).unwrap(),
            receipt_url: None,
            voucher_number: Some("V-1".to_string()),
        };

        let builder = insert_query("expense_records", "Al-Huda", None, &data);

        assert_eq!(
            builder.sql(),
            "INSERT INTO expense_records (madrasa_name, created_by, amount, category, \
             description, paid_to, payment_method, date, receipt_url, voucher_number) \
             VALUES ($1, $2, $3, $4::expense_category, $5, $6, $7::payment_method, $8, $9, $10) \
             RETURNING *"
        );
    }

    #[test]
    fn test_update_query_sets_only_patched_columns() {
        let patch = UpdateStaff {
            salary: Some(30000.0),
            status: Some(StaffStatus::Inactive),
            ..Default::default()
        };

        let builder = update_query("staff_members", "Al-Huda", Uuid::nil(), &patch).unwrap();

        assert_eq!(
            builder.sql(),
            "UPDATE staff_members SET updated_at = NOW(), salary = $1, \
             status = $2::staff_status WHERE id = $3 AND madrasa_name = $4 RETURNING *"
        );
    }

    #[test]
    fn test_empty_patch_builds_no_statement() {
        let patch = UpdateExpense::default();
        assert!(update_query("expense_records", "Al-Huda", Uuid::nil(), &patch).is_none());
    }
}

//! The [`Record`] abstraction shared by expense, income, and staff rows.
//!
//! A record kind names its table, sort order, and searchable fields. Its
//! create and patch payloads describe themselves as a list of column
//! bindings so that one repository can persist every kind.

use std::borrow::Cow;

use chrono::NaiveDate;
use serde::Serialize;
use serde::de::DeserializeOwned;
use sqlx::postgres::PgRow;
use uuid::Uuid;
use validator::Validate;

/// A value bound to a single column in an insert or update statement.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnValue {
    /// Required text column.
    Text(String),
    /// Nullable text column.
    OptionalText(Option<String>),
    /// `DOUBLE PRECISION` money column.
    Amount(f64),
    /// `DATE` column.
    Date(NaiveDate),
    /// PostgreSQL enum column, bound as text and cast to `pg_type`.
    Enum {
        /// Stored wire value.
        value: &'static str,
        /// Name of the PostgreSQL enum type.
        pg_type: &'static str,
    },
}

/// A payload that can be expressed as `(column, value)` pairs.
///
/// Patch payloads only yield the fields that were supplied.
pub trait Columns {
    /// The columns to write, in a stable order.
    fn columns(&self) -> Vec<(&'static str, ColumnValue)>;
}

/// A madrasa-scoped row with a generic CRUD lifecycle.
pub trait Record:
    Clone
    + std::fmt::Debug
    + Serialize
    + DeserializeOwned
    + Send
    + Sync
    + Unpin
    + 'static
    + for<'r> sqlx::FromRow<'r, PgRow>
{
    /// Payload accepted by `create`.
    type Create: Columns
        + Validate
        + DeserializeOwned
        + std::fmt::Debug
        + Clone
        + Send
        + Sync
        + 'static;
    /// Payload accepted by `update`.
    type Patch: Columns
        + Validate
        + DeserializeOwned
        + std::fmt::Debug
        + Clone
        + Send
        + Sync
        + 'static;
    /// Aggregate shown above the list.
    type Summary: Serialize + std::fmt::Debug + Send;

    /// Human readable kind used in log fields and error messages.
    const KIND: &'static str;
    /// Backing table.
    const TABLE: &'static str;
    /// `ORDER BY` clause for list queries.
    const ORDER_BY: &'static str;

    /// Primary key.
    fn id(&self) -> Uuid;

    /// Owning madrasa.
    fn madrasa_name(&self) -> &str;

    /// Text fields matched by free-text search.
    fn search_fields(&self) -> Vec<Cow<'_, str>>;

    /// Totals shown above the list. `all` is the madrasa's full list and
    /// `matching` the part of it that passed the current search.
    fn summarize(all: &[Self], matching: &[Self]) -> Self::Summary;
}

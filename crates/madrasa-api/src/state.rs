//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use madrasa_auth::JwtDecoder;
use madrasa_core::config::AppConfig;
use madrasa_core::traits::cache::CacheProvider;
use madrasa_database::DatabasePool;
use madrasa_entity::record::Record;
use madrasa_entity::{ExpenseRecord, IncomeRecord, StaffMember};
use madrasa_service::{InvitationService, RecordService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Access token verifier
    pub jwt_decoder: Arc<JwtDecoder>,
    /// PostgreSQL pool. `None` when the record stores are not database backed.
    pub database: Option<DatabasePool>,
    /// List cache shared by the record services
    pub cache: Arc<dyn CacheProvider>,
    /// Expense records
    pub expense_service: Arc<RecordService<ExpenseRecord>>,
    /// Income records
    pub income_service: Arc<RecordService<IncomeRecord>>,
    /// Staff records
    pub staff_service: Arc<RecordService<StaffMember>>,
    /// Pending role invitations
    pub invitation_service: Arc<InvitationService>,
}

/// A record kind exposed over HTTP.
///
/// Lets one set of generic handlers serve every record collection.
pub trait RecordResource: Record {
    /// Collection path segment under `/api`.
    const PATH: &'static str;

    /// The service handling this kind.
    fn service(state: &AppState) -> &RecordService<Self>;
}

impl RecordResource for ExpenseRecord {
    const PATH: &'static str = "expenses";

    fn service(state: &AppState) -> &RecordService<Self> {
        &state.expense_service
    }
}

impl RecordResource for IncomeRecord {
    const PATH: &'static str = "income";

    fn service(state: &AppState) -> &RecordService<Self> {
        &state.income_service
    }
}

impl RecordResource for StaffMember {
    const PATH: &'static str = "staff";

    fn service(state: &AppState) -> &RecordService<Self> {
        &state.staff_service
    }
}

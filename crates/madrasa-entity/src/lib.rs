//! # madrasa-entity
//!
//! Domain entity models for the madrasa office. Every struct in this crate
//! represents a database table row or a domain value object. Row types
//! additionally derive `sqlx::FromRow`.
//!
//! Expense, income, and staff rows implement [`Record`], which lets the
//! database and service layers handle the three kinds with one generic
//! implementation.

#[macro_use]
mod label;

pub mod expense;
pub mod income;
pub mod invitation;
pub mod payment;
pub mod profile;
pub mod record;
pub mod search;
pub mod summary;
pub mod staff;

pub use expense::{CreateExpense, ExpenseCategory, ExpenseRecord, UpdateExpense};
pub use income::{CreateIncome, IncomeRecord, IncomeType, UpdateIncome};
pub use invitation::{InvitationNotice, NewInvitation, PendingInvitation};
pub use payment::PaymentMethod;
pub use profile::Profile;
pub use record::{ColumnValue, Columns, Record};
pub use staff::{CreateStaff, StaffMember, StaffStatus, UpdateStaff};
pub use summary::{AmountSummary, StaffSummary};

//! Income domain entities.

pub mod kind;
pub mod model;

pub use kind::IncomeType;
pub use model::{CreateIncome, IncomeRecord, UpdateIncome};

//! Expense domain entities.

pub mod category;
pub mod model;

pub use category::ExpenseCategory;
pub use model::{CreateExpense, ExpenseRecord, UpdateExpense};

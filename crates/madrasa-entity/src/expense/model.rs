//! Expense record model.

use std::borrow::Cow;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

use super::category::ExpenseCategory;
use crate::payment::PaymentMethod;
use crate::record::{ColumnValue, Columns, Record};
use crate::summary::AmountSummary;

/// Money paid out by the madrasa.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ExpenseRecord {
    /// Unique record identifier.
    pub id: Uuid,
    /// Owning madrasa.
    pub madrasa_name: String,
    /// Amount paid.
    pub amount: f64,
    /// Expense category.
    pub category: ExpenseCategory,
    /// What the money was for.
    pub description: String,
    /// Payee.
    pub paid_to: String,
    /// How it was paid.
    pub payment_method: PaymentMethod,
    /// Date of payment.
    pub date: NaiveDate,
    /// Link to a scanned receipt.
    pub receipt_url: Option<String>,
    /// Internal voucher reference.
    pub voucher_number: Option<String>,
    /// The actor who recorded it.
    pub created_by: Option<Uuid>,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// When the record was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Record for ExpenseRecord {
    type Create = CreateExpense;
    type Patch = UpdateExpense;
    type Summary = AmountSummary;

    const KIND: &'static str = "expense";
    const TABLE: &'static str = "expense_records";
    const ORDER_BY: &'static str = "date DESC, created_at DESC";

    fn id(&self) -> Uuid {
        self.id
    }

    fn madrasa_name(&self) -> &str {
        &self.madrasa_name
    }

    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        let mut fields = vec![
            Cow::Borrowed(self.description.as_str()),
            Cow::Borrowed(self.category.as_str()),
            Cow::Borrowed(self.paid_to.as_str()),
            Cow::Owned(self.amount.to_string()),
        ];
        if let Some(voucher) = self.voucher_number.as_deref() {
            fields.push(Cow::Borrowed(voucher));
        }
        fields
    }

    fn summarize(_all: &[Self], matching: &[Self]) -> AmountSummary {
        AmountSummary::of(matching.iter().map(|r| r.amount))
    }
}

/// Data required to record a new expense.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateExpense {
    /// Amount paid.
    #[validate(range(min = 0.0, message = "Amount must not be negative"))]
    pub amount: f64,
    /// Expense category.
    pub category: ExpenseCategory,
    /// What the money was for.
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    /// Payee.
    #[validate(length(min = 1, message = "Payee is required"))]
    pub paid_to: String,
    /// How it was paid.
    #[serde(default = "default_payment_method")]
    pub payment_method: PaymentMethod,
    /// Date of payment.
    pub date: NaiveDate,
    /// Link to a scanned receipt.
    #[serde(default)]
    pub receipt_url: Option<String>,
    /// Internal voucher reference.
    #[serde(default)]
    pub voucher_number: Option<String>,
}

fn default_payment_method() -> PaymentMethod {
    PaymentMethod::Cash
}

impl Columns for CreateExpense {
    fn columns(&self) -> Vec<(&'static str, ColumnValue)> {
        vec![
            ("amount", ColumnValue::Amount(self.amount)),
            ("category", self.category.column()),
            ("description", ColumnValue::Text(self.description.clone())),
            ("paid_to", ColumnValue::Text(self.paid_to.clone())),
            ("payment_method", self.payment_method.column()),
            ("date", ColumnValue::Date(self.date)),
            (
                "receipt_url",
                ColumnValue::OptionalText(self.receipt_url.clone()),
            ),
            (
                "voucher_number",
                ColumnValue::OptionalText(self.voucher_number.clone()),
            ),
        ]
    }
}

/// Partial update of an expense. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateExpense {
    /// New amount.
    #[validate(range(min = 0.0, message = "Amount must not be negative"))]
    pub amount: Option<f64>,
    /// New category.
    pub category: Option<ExpenseCategory>,
    /// New description.
    #[validate(length(min = 1, message = "Description must not be empty"))]
    pub description: Option<String>,
    /// New payee.
    #[validate(length(min = 1, message = "Payee must not be empty"))]
    pub paid_to: Option<String>,
    /// New payment method.
    pub payment_method: Option<PaymentMethod>,
    /// New payment date.
    pub date: Option<NaiveDate>,
    /// New receipt link.
    pub receipt_url: Option<String>,
    /// New voucher reference.
    pub voucher_number: Option<String>,
}

impl Columns for UpdateExpense {
    fn columns(&self) -> Vec<(&'static str, ColumnValue)> {
        let mut columns = Vec::new();
        if let Some(amount) = self.amount {
            columns.push(("amount", ColumnValue::Amount(amount)));
        }
        if let Some(category) = self.category {
            columns.push(("category", category.column()));
        }
        if let Some(description) = &self.description {
            columns.push(("description", ColumnValue::Text(description.clone())));
        }
        if let Some(paid_to) = &self.paid_to {
            columns.push(("paid_to", ColumnValue::Text(paid_to.clone())));
        }
        if let Some(method) = self.payment_method {
            columns.push(("payment_method", method.column()));
        }
        if let Some(date) = self.date {
            columns.push(("date", ColumnValue::Date(date)));
        }
        if let Some(url) = &self.receipt_url {
            columns.push(("receipt_url", ColumnValue::OptionalText(Some(url.clone()))));
        }
        if let Some(voucher) = &self.voucher_number {
            columns.push((
                "voucher_number",
                ColumnValue::OptionalText(Some(voucher.clone())),
            ));
        }
        columns
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ExpenseRecord {
        ExpenseRecord {
            id: Uuid::new_v4(),
            madrasa_name: "Al-Huda".to_string(),
            amount: 1500.0,
            category: ExpenseCategory::Electricity,
            description: "Monthly bill".to_string(),
            paid_to: "WAPDA".to_string(),
            payment_method: PaymentMethod::Cash,
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            receipt_url: None,
            voucher_number: Some("V-17".to_string()),
            created_by: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_search_fields_include_voucher_and_category() {
        let record = sample();
        let fields = record.search_fields();
        assert!(fields.iter().any(|f| f == "electricity"));
        assert!(fields.iter().any(|f| f == "V-17"));
    }

    #[test]
    fn test_amount_is_searchable_as_written() {
        let mut record = sample();
        assert!(crate::search::matches(&record.search_fields(), "1500"));

        record.amount = 1250.5;
        assert!(crate::search::matches(&record.search_fields(), "1250.5"));
        assert!(!crate::search::matches(&record.search_fields(), "1250.50"));
    }

    #[test]
    fn test_patch_only_emits_supplied_columns() {
        let patch = UpdateExpense {
            amount: Some(10.0),
            paid_to: Some("K-Electric".to_string()),
            ..Default::default()
        };
        let names: Vec<_> = patch.columns().into_iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["amount", "paid_to"]);
    }

    #[test]
    fn test_negative_amount_fails_validation() {
        let create = CreateExpense {
            amount: -1.0,
            category: ExpenseCategory::Food,
            description: "Rice".to_string(),
            paid_to: "Market".to_string(),
            payment_method: PaymentMethod::Cash,
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            receipt_url: None,
            voucher_number: None,
        };
        assert!(create.validate().is_err());
    }

    #[test]
    fn test_payment_method_defaults_to_cash() {
        let create: CreateExpense = serde_json::from_value(serde_json::json!({
            "amount": 200.0,
            "category": "stationery",
            "description": "Registers",
            "paid_to": "Book shop",
            "date": "2024-02-10"
        }))
        .unwrap();
        assert_eq!(create.payment_method, PaymentMethod::Cash);
        assert!(create.validate().is_ok());
    }
}

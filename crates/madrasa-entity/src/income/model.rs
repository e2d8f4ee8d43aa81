//! Income record model.

use std::borrow::Cow;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

use super::kind::IncomeType;
use crate::payment::PaymentMethod;
use crate::record::{ColumnValue, Columns, Record};
use crate::summary::AmountSummary;

/// Money received by the madrasa.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct IncomeRecord {
    /// Unique record identifier.
    pub id: Uuid,
    /// Owning madrasa.
    pub madrasa_name: String,
    /// Amount received.
    pub amount: f64,
    /// Income category.
    pub income_type: IncomeType,
    /// Donor name.
    pub donor_name: String,
    /// Donor phone number.
    pub donor_contact: Option<String>,
    /// Donor email address.
    pub donor_email: Option<String>,
    /// How it was received.
    pub payment_method: PaymentMethod,
    /// Date received.
    pub date: NaiveDate,
    /// Free-form notes.
    pub notes: Option<String>,
    /// Receipt book reference.
    pub receipt_number: Option<String>,
    /// The actor who recorded it.
    pub created_by: Option<Uuid>,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// When the record was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Record for IncomeRecord {
    type Create = CreateIncome;
    type Patch = UpdateIncome;
    type Summary = AmountSummary;

    const KIND: &'static str = "income";
    const TABLE: &'static str = "income_records";
    const ORDER_BY: &'static str = "date DESC, created_at DESC";

    fn id(&self) -> Uuid {
        self.id
    }

    fn madrasa_name(&self) -> &str {
        &self.madrasa_name
    }

    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        let mut fields = vec![
            Cow::Borrowed(self.donor_name.as_str()),
            Cow::Borrowed(self.income_type.as_str()),
            Cow::Owned(self.amount.to_string()),
        ];
        if let Some(receipt) = self.receipt_number.as_deref() {
            fields.push(Cow::Borrowed(receipt));
        }
        fields
    }

    fn summarize(_all: &[Self], matching: &[Self]) -> AmountSummary {
        AmountSummary::of(matching.iter().map(|r| r.amount))
    }
}

/// Data required to record new income.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateIncome {
    /// Amount received.
    #[validate(range(min = 0.0, message = "Amount must not be negative"))]
    pub amount: f64,
    /// Income category.
    pub income_type: IncomeType,
    /// Donor name.
    #[validate(length(min = 1, message = "Donor name is required"))]
    pub donor_name: String,
    /// Donor phone number.
    #[serde(default)]
    pub donor_contact: Option<String>,
    /// Donor email address.
    #[serde(default)]
    #[validate(email(message = "Donor email is not a valid address"))]
    pub donor_email: Option<String>,
    /// How it was received.
    #[serde(default = "default_payment_method")]
    pub payment_method: PaymentMethod,
    /// Date received.
    pub date: NaiveDate,
    /// Free-form notes.
    #[serde(default)]
    pub notes: Option<String>,
    /// Receipt book reference.
    #[serde(default)]
    pub receipt_number: Option<String>,
}

fn default_payment_method() -> PaymentMethod {
    PaymentMethod::Cash
}

impl Columns for CreateIncome {
    fn columns(&self) -> Vec<(&'static str, ColumnValue)> {
        vec![
            ("amount", ColumnValue::Amount(self.amount)),
            ("income_type", self.income_type.column()),
            ("donor_name", ColumnValue::Text(self.donor_name.clone())),
            (
                "donor_contact",
                ColumnValue::OptionalText(self.donor_contact.clone()),
            ),
            (
                "donor_email",
                ColumnValue::OptionalText(self.donor_email.clone()),
            ),
            ("payment_method", self.payment_method.column()),
            ("date", ColumnValue::Date(self.date)),
            ("notes", ColumnValue::OptionalText(self.notes.clone())),
            (
                "receipt_number",
                ColumnValue::OptionalText(self.receipt_number.clone()),
            ),
        ]
    }
}

/// Partial update of an income entry. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateIncome {
    /// New amount.
    #[validate(range(min = 0.0, message = "Amount must not be negative"))]
    pub amount: Option<f64>,
    /// New income category.
    pub income_type: Option<IncomeType>,
    /// New donor name.
    #[validate(length(min = 1, message = "Donor name must not be empty"))]
    pub donor_name: Option<String>,
    /// New donor phone number.
    pub donor_contact: Option<String>,
    /// New donor email.
    #[validate(email(message = "Donor email is not a valid address"))]
    pub donor_email: Option<String>,
    /// New payment method.
    pub payment_method: Option<PaymentMethod>,
    /// New date.
    pub date: Option<NaiveDate>,
    /// New notes.
    pub notes: Option<String>,
    /// New receipt number.
    pub receipt_number: Option<String>,
}

impl Columns for UpdateIncome {
    fn columns(&self) -> Vec<(&'static str, ColumnValue)> {
        let mut columns = Vec::new();
        if let Some(amount) = self.amount {
            columns.push(("amount", ColumnValue::Amount(amount)));
        }
        if let Some(kind) = self.income_type {
            columns.push(("income_type", kind.column()));
        }
        if let Some(name) = &self.donor_name {
            columns.push(("donor_name", ColumnValue::Text(name.clone())));
        }
        let optional = [
            ("donor_contact", &self.donor_contact),
            ("donor_email", &self.donor_email),
        ];
        for (name, value) in optional {
            if let Some(value) = value {
                columns.push((name, ColumnValue::OptionalText(Some(value.clone()))));
            }
        }
        if let Some(method) = self.payment_method {
            columns.push(("payment_method", method.column()));
        }
        if let Some(date) = self.date {
            columns.push(("date", ColumnValue::Date(date)));
        }
        let optional = [
            ("notes", &self.notes),
            ("receipt_number", &self.receipt_number),
        ];
        for (name, value) in optional {
            if let Some(value) = value {
                columns.push((name, ColumnValue::OptionalText(Some(value.clone()))));
            }
        }
        columns
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_donor_email_fails_validation() {
        let create: CreateIncome = serde_json::from_value(serde_json::json!({
            "amount": 5000.0,
            "income_type": "zakat",
            "donor_name": "Haji Rasheed",
            "donor_email": "not-an-email",
            "date": "2024-04-01"
        }))
        .unwrap();
        assert!(create.validate().is_err());
    }

    #[test]
    fn test_create_columns_cast_enums() {
        let create: CreateIncome = serde_json::from_value(serde_json::json!({
            "amount": 100.0,
            "income_type": "monthly_donation",
            "donor_name": "Bilal",
            "payment_method": "online",
            "date": "2024-04-01"
        }))
        .unwrap();
        let columns = create.columns();
        assert!(columns.contains(&(
            "income_type",
            ColumnValue::Enum {
                value: "monthly_donation",
                pg_type: "income_type",
            }
        )));
        assert!(columns.contains(&(
            "payment_method",
            ColumnValue::Enum {
                value: "online",
                pg_type: "payment_method",
            }
        )));
    }
}

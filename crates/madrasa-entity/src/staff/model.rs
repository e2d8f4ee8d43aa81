//! Staff member model.

use std::borrow::Cow;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

use super::status::StaffStatus;
use crate::record::{ColumnValue, Columns, Record};
use crate::summary::StaffSummary;

/// A teacher or employee of the madrasa.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct StaffMember {
    /// Unique record identifier.
    pub id: Uuid,
    /// Owning madrasa.
    pub madrasa_name: String,
    /// Full name.
    pub name: String,
    /// Father's name.
    pub father_name: Option<String>,
    /// Job title.
    pub designation: String,
    /// Academic qualification.
    pub qualification: Option<String>,
    /// Monthly salary.
    pub salary: f64,
    /// Date of joining.
    pub joining_date: NaiveDate,
    /// Phone number.
    pub contact: String,
    /// Email address.
    pub email: Option<String>,
    /// Postal address.
    pub address: Option<String>,
    /// National identity card number.
    pub cnic: Option<String>,
    /// Employment status.
    pub status: StaffStatus,
    /// Salary bank.
    pub bank_name: Option<String>,
    /// Salary account number.
    pub account_number: Option<String>,
    /// Photo link.
    pub photo_url: Option<String>,
    /// The actor who recorded it.
    pub created_by: Option<Uuid>,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// When the record was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Record for StaffMember {
    type Create = CreateStaff;
    type Patch = UpdateStaff;
    type Summary = StaffSummary;

    const KIND: &'static str = "staff";
    const TABLE: &'static str = "staff_members";
    const ORDER_BY: &'static str = "name ASC";

    fn id(&self) -> Uuid {
        self.id
    }

    fn madrasa_name(&self) -> &str {
        &self.madrasa_name
    }

    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Borrowed(self.name.as_str()),
            Cow::Borrowed(self.designation.as_str()),
            Cow::Borrowed(self.contact.as_str()),
        ]
    }

    /// Headcount and payroll always cover the whole staff, whatever the search.
    fn summarize(all: &[Self], _matching: &[Self]) -> StaffSummary {
        StaffSummary::of(all)
    }
}

/// Data required to add a staff member.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateStaff {
    /// Full name.
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    /// Father's name.
    #[serde(default)]
    pub father_name: Option<String>,
    /// Job title.
    #[validate(length(min = 1, message = "Designation is required"))]
    pub designation: String,
    /// Highest qualification.
    #[serde(default)]
    pub qualification: Option<String>,
    /// Monthly salary.
    #[validate(range(min = 0.0, message = "Salary must not be negative"))]
    pub salary: f64,
    /// First working day.
    pub joining_date: NaiveDate,
    /// Phone number.
    #[validate(length(min = 1, message = "Contact is required"))]
    pub contact: String,
    /// Email address.
    #[serde(default)]
    #[validate(email(message = "Email is not a valid address"))]
    pub email: Option<String>,
    /// Postal address.
    #[serde(default)]
    pub address: Option<String>,
    /// National identity card number.
    #[serde(default)]
    pub cnic: Option<String>,
    /// Employment status. Defaults to active.
    #[serde(default)]
    pub status: StaffStatus,
    /// Bank for salary transfers.
    #[serde(default)]
    pub bank_name: Option<String>,
    /// Bank account number.
    #[serde(default)]
    pub account_number: Option<String>,
    /// Link to a photo.
    #[serde(default)]
    pub photo_url: Option<String>,
}

impl Columns for CreateStaff {
    fn columns(&self) -> Vec<(&'static str, ColumnValue)> {
        vec![
            ("name", ColumnValue::Text(self.name.clone())),
            (
                "father_name",
                ColumnValue::OptionalText(self.father_name.clone()),
            ),
            ("designation", ColumnValue::Text(self.designation.clone())),
            (
                "qualification",
                ColumnValue::OptionalText(self.qualification.clone()),
            ),
            ("salary", ColumnValue::Amount(self.salary)),
            ("joining_date", ColumnValue::Date(self.joining_date)),
            ("contact", ColumnValue::Text(self.contact.clone())),
            ("email", ColumnValue::OptionalText(self.email.clone())),
            ("address", ColumnValue::OptionalText(self.address.clone())),
            ("cnic", ColumnValue::OptionalText(self.cnic.clone())),
            ("status", self.status.column()),
            ("bank_name", ColumnValue::OptionalText(self.bank_name.clone())),
            (
                "account_number",
                ColumnValue::OptionalText(self.account_number.clone()),
            ),
            ("photo_url", ColumnValue::OptionalText(self.photo_url.clone())),
        ]
    }
}

/// Partial update of a staff member. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateStaff {
    /// New name.
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: Option<String>,
    /// New father's name.
    pub father_name: Option<String>,
    /// New job title.
    #[validate(length(min = 1, message = "Designation must not be empty"))]
    pub designation: Option<String>,
    /// New qualification.
    pub qualification: Option<String>,
    /// New monthly salary.
    #[validate(range(min = 0.0, message = "Salary must not be negative"))]
    pub salary: Option<f64>,
    /// Corrected joining date.
    pub joining_date: Option<NaiveDate>,
    /// New phone number.
    #[validate(length(min = 1, message = "Contact must not be empty"))]
    pub contact: Option<String>,
    /// New email address.
    #[validate(email(message = "Email is not a valid address"))]
    pub email: Option<String>,
    /// New postal address.
    pub address: Option<String>,
    /// New identity card number.
    pub cnic: Option<String>,
    /// New employment status.
    pub status: Option<StaffStatus>,
    /// New bank.
    pub bank_name: Option<String>,
    /// New account number.
    pub account_number: Option<String>,
    /// New photo link.
    pub photo_url: Option<String>,
}

impl Columns for UpdateStaff {
    fn columns(&self) -> Vec<(&'static str, ColumnValue)> {
        let mut columns = Vec::new();
        let required = [
            ("name", &self.name),
            ("designation", &self.designation),
            ("contact", &self.contact),
        ];
        for (name, value) in required {
            if let Some(value) = value {
                columns.push((name, ColumnValue::Text(value.clone())));
            }
        }
        if let Some(salary) = self.salary {
            columns.push(("salary", ColumnValue::Amount(salary)));
        }
        if let Some(date) = self.joining_date {
            columns.push(("joining_date", ColumnValue::Date(date)));
        }
        if let Some(status) = self.status {
            columns.push(("status", status.column()));
        }
        let optional = [
            ("father_name", &self.father_name),
            ("qualification", &self.qualification),
            ("email", &self.email),
            ("address", &self.address),
            ("cnic", &self.cnic),
            ("bank_name", &self.bank_name),
            ("account_number", &self.account_number),
            ("photo_url", &self.photo_url),
        ];
        for (name, value) in optional {
            if let Some(value) = value {
                columns.push((name, ColumnValue::OptionalText(Some(value.clone()))));
            }
        }
        columns
    }
}

//! Employee (pegawai) records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A staff record identified by its service number.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    pub service_number: String,
    pub name: String,
    pub position: String,
    pub org_unit: String,
    pub pay_grade: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_date: Option<NaiveDate>,
    pub created_at: String,
    pub updated_at: String,
    /// Set when the employee has been soft-deleted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<String>,
}

/// Employee fields embedded in expanded travel orders.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeSummary {
    pub id: String,
    pub service_number: String,
    pub name: String,
    pub position: String,
    pub pay_grade: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank: Option<String>,
    /// The employee was soft-deleted after being referenced
    #[serde(default)]
    pub deleted: bool,
}

/// Roster search candidate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeOption {
    pub id: String,
    pub service_number: String,
    pub name: String,
    pub position: String,
    pub pay_grade: String,
}

/// Request body for creating or updating an employee.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Service number is required"))]
    pub service_number: String,
    #[serde(default)]
    #[validate(length(min = 1, max = 255, message = "Name is required (max 255 characters)"))]
    pub name: String,
    #[serde(default)]
    #[validate(length(min = 1, max = 255, message = "Position is required (max 255 characters)"))]
    pub position: String,
    #[serde(default)]
    #[validate(length(
        min = 1,
        max = 255,
        message = "Organizational unit is required (max 255 characters)"
    ))]
    pub org_unit: String,
    #[serde(default)]
    #[validate(length(min = 1, max = 10, message = "Pay grade is required (max 10 characters)"))]
    pub pay_grade: String,
    #[serde(default)]
    #[validate(length(max = 100, message = "Rank may not exceed 100 characters"))]
    pub rank: Option<String>,
    /// `YYYY-MM-DD`
    #[serde(default)]
    pub effective_date: Option<String>,
}

/// A validated employee ready to be written.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeInput {
    pub service_number: String,
    pub name: String,
    pub position: String,
    pub org_unit: String,
    pub pay_grade: String,
    pub rank: Option<String>,
    pub effective_date: Option<NaiveDate>,
}

/// Field limits sent with the blank employee form.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeFormContext {
    pub employee: EmployeeRequest,
    pub max_lengths: EmployeeFieldLimits,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeFieldLimits {
    pub name: usize,
    pub position: usize,
    pub org_unit: usize,
    pub pay_grade: usize,
    pub rank: usize,
}

impl Default for EmployeeFieldLimits {
    fn default() -> Self {
        Self {
            name: 255,
            position: 255,
            org_unit: 255,
            pay_grade: 10,
            rank: 100,
        }
    }
}

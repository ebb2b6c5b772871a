//! Employee API endpoints.

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    Json,
};
use serde::Deserialize;

use super::{json_body, success, ApiResponse, ApiResult};
use crate::errors::AppError;
use crate::models::{
    Employee, EmployeeFieldLimits, EmployeeFormContext, EmployeeOption, EmployeeRequest,
    ParticipantRole, RosterEntry,
};
use crate::roster::RosterDraft;
use crate::validation::validate_employee;
use crate::AppState;

/// Query parameters for the employee options list.
#[derive(Debug, Default, Deserialize)]
pub struct OptionsQuery {
    /// Name or service number fragment
    pub q: Option<String>,
    /// Comma-separated ids already on the roster
    pub exclude: Option<String>,
}

/// GET /api/employees - List live employees by name.
pub async fn list_employees(State(state): State<AppState>) -> ApiResult<Vec<Employee>> {
    success(state.repo.list_employees().await?)
}

/// GET /api/employees/create - Blank form with field limits.
pub async fn employee_create_form() -> ApiResult<EmployeeFormContext> {
    success(EmployeeFormContext {
        employee: EmployeeRequest::default(),
        max_lengths: EmployeeFieldLimits::default(),
    })
}

/// POST /api/employees - Create a new employee.
pub async fn create_employee(
    State(state): State<AppState>,
    payload: Result<Json<EmployeeRequest>, JsonRejection>,
) -> ApiResult<Employee> {
    let request = json_body(payload)?;
    let input = validate_employee(&request)?;
    let employee = state.repo.create_employee(&input).await?;
    Ok(ApiResponse::created(employee))
}

/// GET /api/employees/options - Roster search candidates.
///
/// Without `q` or `exclude` every live employee is returned.
pub async fn list_employee_options(
    State(state): State<AppState>,
    Query(query): Query<OptionsQuery>,
) -> ApiResult<Vec<EmployeeOption>> {
    let options = state.repo.list_employee_options().await?;
    if query.q.is_none() && query.exclude.is_none() {
        return success(options);
    }

    let selected = RosterDraft::from_entries(
        query
            .exclude
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(|id| RosterEntry::new(id, ParticipantRole::Member)),
    );
    let term = query.q.as_deref().unwrap_or_default();

    success(selected.search(&options, term).cloned().collect())
}

/// GET /api/employees/trash - List soft-deleted employees.
pub async fn list_deleted_employees(State(state): State<AppState>) -> ApiResult<Vec<Employee>> {
    success(state.repo.list_deleted_employees().await?)
}

/// GET /api/employees/{id} - Get a single employee.
pub async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Employee> {
    match state.repo.get_employee(&id).await? {
        Some(employee) => success(employee),
        None => Err(AppError::NotFound(format!("Employee {} not found", id))),
    }
}

/// GET /api/employees/{id}/edit - Form prefilled from an employee.
pub async fn employee_edit_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<EmployeeFormContext> {
    let employee = state
        .repo
        .get_employee(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Employee {} not found", id)))?;

    success(EmployeeFormContext {
        employee: EmployeeRequest {
            service_number: employee.service_number,
            name: employee.name,
            position: employee.position,
            org_unit: employee.org_unit,
            pay_grade: employee.pay_grade,
            rank: employee.rank,
            effective_date: employee
                .effective_date
                .map(|d| d.format("%Y-%m-%d").to_string()),
        },
        max_lengths: EmployeeFieldLimits::default(),
    })
}

/// PUT /api/employees/{id} - Update an employee.
pub async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<EmployeeRequest>, JsonRejection>,
) -> ApiResult<Employee> {
    let request = json_body(payload)?;
    let input = validate_employee(&request)?;
    success(state.repo.update_employee(&id, &input).await?)
}

/// DELETE /api/employees/{id} - Soft-delete an employee.
pub async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<()> {
    state.repo.delete_employee(&id).await?;
    success(())
}

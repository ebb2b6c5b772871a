//! Travel order API endpoints.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};

use super::{json_body, success, ApiResponse, ApiResult};
use crate::errors::AppError;
use crate::models::{
    OrderStatus, ParticipantRole, TransportMode, TravelOrder, TravelOrderDetail,
    TravelOrderEditContext, TravelOrderFormContext, TravelOrderRequest,
};
use crate::roster::OrderWizard;
use crate::validation::validate_travel_order;
use crate::AppState;

/// GET /api/travel-orders - List live travel orders, newest first.
pub async fn list_travel_orders(
    State(state): State<AppState>,
) -> ApiResult<Vec<TravelOrderDetail>> {
    success(state.repo.list_travel_orders().await?)
}

/// GET /api/travel-orders/create - Form defaults, choices and employees.
pub async fn travel_order_create_form(
    State(state): State<AppState>,
) -> ApiResult<TravelOrderFormContext> {
    let employees = state.repo.list_employee_options().await?;
    let wizard = OrderWizard::new(state.config.office.default_origin.clone(), employees);

    success(TravelOrderFormContext {
        defaults: wizard.payload(),
        transport_modes: TransportMode::ALL.to_vec(),
        roles: ParticipantRole::ALL.to_vec(),
        statuses: OrderStatus::ALL.to_vec(),
        employees: wizard.into_employees(),
    })
}

/// POST /api/travel-orders - Create a travel order with its participants.
pub async fn create_travel_order(
    State(state): State<AppState>,
    payload: Result<Json<TravelOrderRequest>, JsonRejection>,
) -> ApiResult<TravelOrderDetail> {
    let request = json_body(payload)?;
    let input = validate_travel_order(&request)?;
    let detail = state.repo.create_travel_order(&input).await?;
    Ok(ApiResponse::created(detail))
}

/// GET /api/travel-orders/trash - List soft-deleted travel orders.
pub async fn list_deleted_travel_orders(
    State(state): State<AppState>,
) -> ApiResult<Vec<TravelOrder>> {
    success(state.repo.list_deleted_travel_orders().await?)
}

/// GET /api/travel-orders/{id} - Get an expanded travel order.
pub async fn get_travel_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<TravelOrderDetail> {
    success(find_travel_order(&state, &id).await?)
}

/// GET /api/travel-orders/{id}/edit - Expanded order plus employee choices.
pub async fn travel_order_edit_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<TravelOrderEditContext> {
    let travel_order = find_travel_order(&state, &id).await?;
    let employees = state.repo.list_employee_options().await?;
    let wizard = OrderWizard::for_edit(&travel_order, employees);

    success(TravelOrderEditContext {
        form: wizard.payload(),
        employees: wizard.into_employees(),
        travel_order,
    })
}

/// PUT /api/travel-orders/{id} - Update a travel order and reconcile its roster.
pub async fn update_travel_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<TravelOrderRequest>, JsonRejection>,
) -> ApiResult<TravelOrderDetail> {
    let request = json_body(payload)?;
    let input = validate_travel_order(&request)?;
    success(state.repo.update_travel_order(&id, &input).await?)
}

/// DELETE /api/travel-orders/{id} - Soft-delete a travel order.
pub async fn delete_travel_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<()> {
    state.repo.delete_travel_order(&id).await?;
    success(())
}

pub(super) async fn find_travel_order(
    state: &AppState,
    id: &str,
) -> Result<TravelOrderDetail, AppError> {
    state
        .repo
        .get_travel_order(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Travel order {} not found", id)))
}

//! Printable travel order views.

use axum::{
    extract::{Path, State},
    response::Html,
};
use chrono::Local;

use super::travel_orders::find_travel_order;
use crate::errors::AppError;
use crate::print::{AssignmentLetter, TravelOrderForm};
use crate::AppState;

/// GET /api/travel-orders/{id}/print/assignment-letter - Surat Tugas as HTML.
pub async fn print_assignment_letter(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, AppError> {
    let detail = find_travel_order(&state, &id).await?;
    let letter = AssignmentLetter::build(&detail, Local::now().date_naive());
    Ok(Html(letter.render_html(&state.config.office)))
}

/// GET /api/travel-orders/{id}/print/travel-order-form - SPPD Lembar 1 as HTML.
pub async fn print_travel_order_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, AppError> {
    let detail = find_travel_order(&state, &id).await?;
    let form = TravelOrderForm::build(&detail, Local::now().date_naive());
    if form.omitted_members > 0 {
        tracing::warn!(
            travel_order_id = %id,
            omitted = form.omitted_members,
            "Travel order form omits members beyond the first"
        );
    }
    Ok(Html(form.render_html(&state.config.office)))
}

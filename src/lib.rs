//! SPPD Backend
//!
//! REST backend for employee records and official travel orders (Surat
//! Perintah Perjalanan Dinas), with SQLite persistence and printable views.

pub mod api;
pub mod config;
pub mod db;
pub mod errors;
pub mod models;
pub mod print;
pub mod roster;
pub mod validation;

use std::sync::Arc;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use config::Config;
use db::Repository;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<Repository>,
    pub config: Arc<Config>,
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API routes
    let api_routes = Router::new()
        // Employees
        .route("/employees", get(api::list_employees))
        .route("/employees", post(api::create_employee))
        .route("/employees/create", get(api::employee_create_form))
        .route("/employees/options", get(api::list_employee_options))
        .route("/employees/trash", get(api::list_deleted_employees))
        .route("/employees/{id}", get(api::get_employee))
        .route("/employees/{id}", put(api::update_employee))
        .route("/employees/{id}", delete(api::delete_employee))
        .route("/employees/{id}/edit", get(api::employee_edit_form))
        // Travel orders
        .route("/travel-orders", get(api::list_travel_orders))
        .route("/travel-orders", post(api::create_travel_order))
        .route("/travel-orders/create", get(api::travel_order_create_form))
        .route("/travel-orders/trash", get(api::list_deleted_travel_orders))
        .route("/travel-orders/{id}", get(api::get_travel_order))
        .route("/travel-orders/{id}", put(api::update_travel_order))
        .route("/travel-orders/{id}", delete(api::delete_travel_order))
        .route("/travel-orders/{id}/edit", get(api::travel_order_edit_form))
        // Print views
        .route(
            "/travel-orders/{id}/print/assignment-letter",
            get(api::print_assignment_letter),
        )
        .route(
            "/travel-orders/{id}/print/travel-order-form",
            get(api::print_travel_order_form),
        );

    Router::new()
        .nest("/api", api_routes)
        .route("/health", get(health_check))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}

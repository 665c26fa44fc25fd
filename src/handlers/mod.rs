pub mod menu;
pub mod root;
pub mod toppings;

pub use menu::*;
pub use root::*;
pub use toppings::*;

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{middleware, Json, Router};
use serde_json::{json, Value};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tracing::error;

use crate::models::{ApiResponse, ServiceError};
use crate::observability::request_tracing_middleware;
use crate::services::{MenuService, ToppingService};

/// Shared application state containing all services
#[derive(Clone)]
pub struct AppState {
    pub menu_service: Arc<MenuService>,
    pub topping_service: Arc<ToppingService>,
    pub expose_error_details: bool,
}

/// Create the application router with all endpoints and middleware
pub fn create_app(state: AppState) -> Router {
    let expose_error_details = state.expose_error_details;

    Router::new()
        .route("/", get(root::welcome))
        .route(
            "/menu",
            get(menu::list_menu_items).post(menu::create_menu_item),
        )
        .route(
            "/menu/:id",
            get(menu::get_menu_item)
                .put(menu::update_menu_item)
                .delete(menu::delete_menu_item),
        )
        .route(
            "/toppings",
            get(toppings::list_toppings).post(toppings::create_topping),
        )
        .route(
            "/toppings/:id",
            get(toppings::get_topping)
                .put(toppings::update_topping)
                .delete(toppings::delete_topping),
        )
        .with_state(state)
        // Layer order matters: panics become envelopes before CORS headers
        // are applied, and the tracing span sees the final status code
        .layer(CatchPanicLayer::custom(move |err| {
            panic_response(err, expose_error_details)
        }))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(middleware::from_fn(request_tracing_middleware))
}

/// Convert a ServiceError to the uniform HTTP error envelope
pub(crate) fn service_error_to_response(
    err: ServiceError,
    expose_error_details: bool,
) -> (StatusCode, Json<ApiResponse<()>>) {
    match err {
        ServiceError::MenuItemNotFound { .. } | ServiceError::ToppingNotFound { .. } => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::failure(err.to_string())),
        ),
        ServiceError::ValidationError { .. } => (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::failure(err.to_string())),
        ),
        ServiceError::Repository { source } => {
            error!("Repository failure while handling request: {}", source);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(fault_envelope(&source.to_string(), expose_error_details)),
            )
        }
    }
}

/// Convert a body extraction failure to the uniform 400 envelope
pub(crate) fn json_rejection_to_response(
    rejection: JsonRejection,
) -> (StatusCode, Json<ApiResponse<()>>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ApiResponse::failure(format!(
            "Invalid request body: {}",
            rejection.body_text()
        ))),
    )
}

/// Parse an availability query value: only a case-insensitive "true" is truthy
pub(crate) fn parse_truthy(value: &str) -> bool {
    value.eq_ignore_ascii_case("true")
}

/// Build the 500 envelope. The error slot carries the failure detail in
/// development and an empty object otherwise.
fn fault_envelope(detail: &str, expose_error_details: bool) -> ApiResponse<()> {
    let detail_value = if expose_error_details {
        Value::String(detail.to_string())
    } else {
        json!({})
    };

    ApiResponse::failure_with_detail("Something went wrong on the server", detail_value)
}

/// Render an uncaught panic as the uniform server fault envelope
fn panic_response(
    err: Box<dyn std::any::Any + Send + 'static>,
    expose_error_details: bool,
) -> Response {
    let detail = if let Some(message) = err.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = err.downcast_ref::<&str>() {
        (*message).to_string()
    } else {
        "Unhandled fault".to_string()
    };

    error!("Unhandled fault while processing request: {}", detail);

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(fault_envelope(&detail, expose_error_details)),
    )
        .into_response()
}

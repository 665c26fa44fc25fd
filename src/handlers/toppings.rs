use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;
use tracing::{info, instrument};

use super::{json_rejection_to_response, parse_truthy, service_error_to_response, AppState};
use crate::models::{
    ApiResponse, CreateToppingRequest, Topping, ToppingFilters, UpdateToppingRequest,
};

/// Query parameters for listing toppings
#[derive(Debug, Default, Deserialize)]
pub struct ListToppingsQuery {
    pub available: Option<String>,
}

/// List toppings with an optional availability filter
#[instrument(name = "list_toppings", skip(state), fields(
    available = query.available.as_deref(),
))]
pub async fn list_toppings(
    State(state): State<AppState>,
    Query(query): Query<ListToppingsQuery>,
) -> Result<Json<ApiResponse<Vec<Topping>>>, (StatusCode, Json<ApiResponse<()>>)> {
    let filters = ToppingFilters {
        available: query.available.as_deref().map(parse_truthy),
    };

    match state.topping_service.list_toppings(filters).await {
        Ok(toppings) => Ok(Json(ApiResponse::collection(toppings))),
        Err(err) => Err(service_error_to_response(err, state.expose_error_details)),
    }
}

/// Get a specific topping by id
#[instrument(name = "get_topping", skip(state), fields(id = %id))]
pub async fn get_topping(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Topping>>, (StatusCode, Json<ApiResponse<()>>)> {
    match state.topping_service.get_topping(&id).await {
        Ok(topping) => Ok(Json(ApiResponse::record(topping))),
        Err(err) => Err(service_error_to_response(err, state.expose_error_details)),
    }
}

/// Create a new topping
#[instrument(name = "create_topping", skip(state, payload))]
pub async fn create_topping(
    State(state): State<AppState>,
    payload: Result<Json<CreateToppingRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<Topping>>), (StatusCode, Json<ApiResponse<()>>)> {
    let Json(request) = payload.map_err(json_rejection_to_response)?;

    match state.topping_service.create_topping(request).await {
        Ok(topping) => {
            info!(id = %topping.id, "Topping added");
            Ok((
                StatusCode::CREATED,
                Json(ApiResponse::with_message("Topping added successfully", topping)),
            ))
        }
        Err(err) => Err(service_error_to_response(err, state.expose_error_details)),
    }
}

/// Update an existing topping
#[instrument(name = "update_topping", skip(state, payload), fields(id = %id))]
pub async fn update_topping(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateToppingRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<Topping>>, (StatusCode, Json<ApiResponse<()>>)> {
    let Json(request) = payload.map_err(json_rejection_to_response)?;

    match state.topping_service.update_topping(&id, request).await {
        Ok(topping) => Ok(Json(ApiResponse::with_message(
            "Topping updated successfully",
            topping,
        ))),
        Err(err) => Err(service_error_to_response(err, state.expose_error_details)),
    }
}

/// Delete a topping, echoing the removed record
#[instrument(name = "delete_topping", skip(state), fields(id = %id))]
pub async fn delete_topping(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Topping>>, (StatusCode, Json<ApiResponse<()>>)> {
    match state.topping_service.delete_topping(&id).await {
        Ok(topping) => Ok(Json(ApiResponse::with_message(
            "Topping deleted successfully",
            topping,
        ))),
        Err(err) => Err(service_error_to_response(err, state.expose_error_details)),
    }
}

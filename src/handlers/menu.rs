use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;
use tracing::{info, instrument};

use super::{json_rejection_to_response, parse_truthy, service_error_to_response, AppState};
use crate::models::{
    ApiResponse, CreateMenuItemRequest, MenuFilters, MenuItem, MenuSort, MenuSortKey, SortOrder,
    UpdateMenuItemRequest,
};

/// Query parameters for listing menu items
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListMenuQuery {
    pub category: Option<String>,
    pub available: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}

/// List menu items with optional filters and sorting
#[instrument(name = "list_menu_items", skip(state), fields(
    category = query.category.as_deref(),
    available = query.available.as_deref(),
    sort_by = query.sort_by.as_deref(),
))]
pub async fn list_menu_items(
    State(state): State<AppState>,
    Query(query): Query<ListMenuQuery>,
) -> Result<Json<ApiResponse<Vec<MenuItem>>>, (StatusCode, Json<ApiResponse<()>>)> {
    let (filters, sort) = query_to_selection(query);

    match state.menu_service.list_menu_items(filters, sort).await {
        Ok(items) => Ok(Json(ApiResponse::collection(items))),
        Err(err) => Err(service_error_to_response(err, state.expose_error_details)),
    }
}

/// Get a specific menu item by id
#[instrument(name = "get_menu_item", skip(state), fields(id = %id))]
pub async fn get_menu_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<MenuItem>>, (StatusCode, Json<ApiResponse<()>>)> {
    match state.menu_service.get_menu_item(&id).await {
        Ok(item) => Ok(Json(ApiResponse::record(item))),
        Err(err) => Err(service_error_to_response(err, state.expose_error_details)),
    }
}

/// Create a new menu item
#[instrument(name = "create_menu_item", skip(state, payload))]
pub async fn create_menu_item(
    State(state): State<AppState>,
    payload: Result<Json<CreateMenuItemRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<MenuItem>>), (StatusCode, Json<ApiResponse<()>>)> {
    let Json(request) = payload.map_err(json_rejection_to_response)?;

    match state.menu_service.create_menu_item(request).await {
        Ok(item) => {
            info!(id = %item.id, "Menu item added");
            Ok((
                StatusCode::CREATED,
                Json(ApiResponse::with_message(
                    "Menu item added successfully",
                    item,
                )),
            ))
        }
        Err(err) => Err(service_error_to_response(err, state.expose_error_details)),
    }
}

/// Update an existing menu item
#[instrument(name = "update_menu_item", skip(state, payload), fields(id = %id))]
pub async fn update_menu_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateMenuItemRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<MenuItem>>, (StatusCode, Json<ApiResponse<()>>)> {
    let Json(request) = payload.map_err(json_rejection_to_response)?;

    match state.menu_service.update_menu_item(&id, request).await {
        Ok(item) => Ok(Json(ApiResponse::with_message(
            "Menu item updated successfully",
            item,
        ))),
        Err(err) => Err(service_error_to_response(err, state.expose_error_details)),
    }
}

/// Delete a menu item, echoing the removed record
#[instrument(name = "delete_menu_item", skip(state), fields(id = %id))]
pub async fn delete_menu_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<MenuItem>>, (StatusCode, Json<ApiResponse<()>>)> {
    match state.menu_service.delete_menu_item(&id).await {
        Ok(item) => Ok(Json(ApiResponse::with_message(
            "Menu item deleted successfully",
            item,
        ))),
        Err(err) => Err(service_error_to_response(err, state.expose_error_details)),
    }
}

/// Convert query parameters to filters and a sort selection. An empty
/// `category` value counts as absent; an empty `available` value is a
/// non-truthy filter.
fn query_to_selection(query: ListMenuQuery) -> (MenuFilters, MenuSort) {
    let filters = MenuFilters {
        category: query.category.filter(|category| !category.is_empty()),
        available: query.available.as_deref().map(parse_truthy),
    };

    let sort = MenuSort {
        key: query.sort_by.as_deref().and_then(MenuSortKey::from_param),
        order: query
            .sort_order
            .as_deref()
            .map(SortOrder::from_param)
            .unwrap_or_default(),
    };

    (filters, sort)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_to_selection() {
        let query = ListMenuQuery {
            category: Some("Milk Tea".to_string()),
            available: Some("TRUE".to_string()),
            sort_by: Some("price".to_string()),
            sort_order: Some("desc".to_string()),
        };

        let (filters, sort) = query_to_selection(query);

        assert_eq!(filters.category.as_deref(), Some("Milk Tea"));
        assert_eq!(filters.available, Some(true));
        assert_eq!(sort.key, Some(MenuSortKey::Price));
        assert_eq!(sort.order, SortOrder::Descending);
    }

    #[test]
    fn test_query_to_selection_non_truthy_available() {
        let query = ListMenuQuery {
            available: Some("yes".to_string()),
            ..Default::default()
        };

        let (filters, _) = query_to_selection(query);

        assert_eq!(filters.available, Some(false));
    }

    #[test]
    fn test_query_to_selection_empty_values() {
        let query = ListMenuQuery {
            category: Some(String::new()),
            available: Some(String::new()),
            ..Default::default()
        };

        let (filters, _) = query_to_selection(query);

        // An empty category does not filter, an empty available does
        assert_eq!(filters.category, None);
        assert_eq!(filters.available, Some(false));
    }

    #[test]
    fn test_query_to_selection_unrecognized_sort_key() {
        let query = ListMenuQuery {
            sort_by: Some("name".to_string()),
            sort_order: Some("desc".to_string()),
            ..Default::default()
        };

        let (_, sort) = query_to_selection(query);

        assert_eq!(sort.key, None);
        assert_eq!(sort.order, SortOrder::Descending);
    }

    #[test]
    fn test_query_to_selection_sort_params_are_case_sensitive() {
        let query = ListMenuQuery {
            sort_by: Some("Price".to_string()),
            sort_order: Some("DESC".to_string()),
            ..Default::default()
        };

        let (_, sort) = query_to_selection(query);

        assert_eq!(sort.key, None);
        assert_eq!(sort.order, SortOrder::Ascending);
    }
}

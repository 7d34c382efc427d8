use crate::routes::common::{bad_request, db_error, format_validation_errors, resolve_error};
use crate::routes::menu::common::{AllMenusQuery, MenuCountQuery, MenuCountResponse};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::models::menu_item::Model as MenuItemModel;
use util::state::AppState;
use validator::Validate;

/// GET /menu
///
/// Lists every menu item in insertion order.
pub async fn list_menu(State(app_state): State<AppState>) -> impl IntoResponse {
    match MenuItemModel::find_all(app_state.db()).await {
        Ok(items) => (StatusCode::OK, Json(items)).into_response(),
        Err(e) => db_error(e),
    }
}

/// GET /editMenuItem/{id}
///
/// Fetches one menu item. `id` may be a typed identifier or a raw string key.
///
/// ### Errors
/// - `404 Not Found`: no item under either representation
pub async fn get_menu_item(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let conn = app_state.db();
    let found = db::resolve(&id, |key| async move {
        MenuItemModel::find_by_key(conn, &key).await
    })
    .await;

    match found {
        Ok(item) => (StatusCode::OK, Json(item)).into_response(),
        Err(e) => resolve_error(e),
    }
}

/// GET /menuCount?filter=
///
/// Counts items whose category equals `filter`. Without a filter nothing matches.
///
/// ### Response: 200 OK
/// ```json
/// { "count": 4 }
/// ```
pub async fn menu_count(
    State(app_state): State<AppState>,
    Query(query): Query<MenuCountQuery>,
) -> impl IntoResponse {
    match MenuItemModel::count_by_category(app_state.db(), query.filter.as_deref()).await {
        Ok(count) => (StatusCode::OK, Json(MenuCountResponse { count })).into_response(),
        Err(e) => db_error(e),
    }
}

/// GET /allMenus?page=&size=&filter=
///
/// One page of the items in category `filter`, in insertion order.
///
/// ### Query Parameters
/// - `page` (optional): 1-based page number, default 1
/// - `size` (optional): page size; absent means no limit
/// - `filter` (optional): category to match; absent matches nothing
///
/// ### Errors
/// - `400 Bad Request`: `page` or `size` below 1
pub async fn list_menu_page(
    State(app_state): State<AppState>,
    Query(query): Query<AllMenusQuery>,
) -> impl IntoResponse {
    if let Err(validation_errors) = query.validate() {
        return bad_request(format_validation_errors(&validation_errors));
    }

    match MenuItemModel::find_page(
        app_state.db(),
        query.filter.as_deref(),
        query.skip(),
        query.size,
    )
    .await
    {
        Ok(items) => (StatusCode::OK, Json(items)).into_response(),
        Err(e) => db_error(e),
    }
}

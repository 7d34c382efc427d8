use crate::routes::common::db_error;
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use db::models::review::Model as ReviewModel;
use util::state::AppState;

pub fn review_routes() -> Router<AppState> {
    Router::new().route("/testimonials", get(list_reviews))
}

/// GET /testimonials
///
/// Lists all customer reviews in insertion order.
pub async fn list_reviews(State(app_state): State<AppState>) -> impl IntoResponse {
    match ReviewModel::find_all(app_state.db()).await {
        Ok(reviews) => (StatusCode::OK, Json(reviews)).into_response(),
        Err(e) => db_error(e),
    }
}

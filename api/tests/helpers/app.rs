use api::routes::routes;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header::AUTHORIZATION},
    response::Response,
};
use db::test_utils::setup_test_db;
use serde_json::Value;
use tower::ServiceExt;
use util::state::AppState;

pub const TEST_SECRET: &str = "integration-test-secret";

/// Router backed by a fresh in-memory database.
pub async fn make_test_app() -> (Router, AppState) {
    make_test_app_with(false).await
}

pub async fn make_test_app_with(menu_delete_requires_admin: bool) -> (Router, AppState) {
    let app_state = AppState::new(setup_test_db().await, TEST_SECRET, 60)
        .with_menu_delete_requires_admin(menu_delete_requires_admin);
    (routes(app_state.clone()), app_state)
}

pub fn request(method: &str, uri: &str, body: Option<Value>, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(t) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {t}"));
    }
    match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub async fn send(app: &Router, req: Request<Body>) -> Response {
    app.clone().oneshot(req).await.unwrap()
}

pub async fn get_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

/// Issues a token for `email` through `POST /jwt`.
pub async fn token_for(app: &Router, email: &str) -> String {
    let res = send(
        app,
        request("POST", "/jwt", Some(serde_json::json!({ "email": email })), None),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    get_json_body(res).await["token"]
        .as_str()
        .unwrap()
        .to_owned()
}

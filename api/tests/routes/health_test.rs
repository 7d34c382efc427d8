#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use crate::helpers::{get_json_body, make_test_app, request, send};

    #[tokio::test]
    async fn root_returns_greeting() {
        let (app, _) = make_test_app().await;

        let res = send(&app, request("GET", "/", None, None)).await;
        assert_eq!(res.status(), StatusCode::OK);

        let body = axum::body::to_bytes(res.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"Hello World!");
    }

    #[tokio::test]
    async fn health_check_returns_ok_json() {
        let (app, _) = make_test_app().await;

        let res = send(&app, request("GET", "/health", None, None)).await;
        assert_eq!(res.status(), StatusCode::OK);

        let json = get_json_body(res).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["data"], "OK");
        assert_eq!(json["message"], "Health check passed");
    }

    #[tokio::test]
    async fn jwt_returns_token_for_any_object() {
        let (app, _) = make_test_app().await;

        let res = send(
            &app,
            request("POST", "/jwt", Some(serde_json::json!({ "anything": [1, 2] })), None),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);

        let json = get_json_body(res).await;
        let token = json["token"].as_str().unwrap();
        assert_eq!(token.split('.').count(), 3);
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use db::models::user::Model as UserModel;
    use crate::helpers::{get_json_body, make_test_app, request, send, token_for};
    use serde_json::json;

    #[tokio::test]
    async fn admin_status_follows_promotion() {
        let (app, _) = make_test_app().await;
        let token = token_for(&app, "a@x.com").await;

        // Unknown user reports false.
        let res = send(&app, request("GET", "/users/admin/a@x.com", None, Some(&token))).await;
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(get_json_body(res).await["admin"], false);

        let res = send(
            &app,
            request("POST", "/users", Some(json!({ "email": "a@x.com", "name": "Ann" })), None),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
        let created = get_json_body(res).await;
        let id = created["insertedId"].as_str().unwrap().to_owned();

        let res = send(&app, request("GET", "/users/admin/a@x.com", None, Some(&token))).await;
        assert_eq!(get_json_body(res).await["admin"], false);

        let res = send(&app, request("PATCH", &format!("/users/admin/{id}"), None, None)).await;
        assert_eq!(res.status(), StatusCode::OK);
        let promoted = get_json_body(res).await;
        assert_eq!(promoted["matchedCount"], 1);
        assert_eq!(promoted["modifiedCount"], 1);

        // The token was issued before promotion and still sees the new role.
        let res = send(&app, request("GET", "/users/admin/a@x.com", None, Some(&token))).await;
        assert_eq!(get_json_body(res).await["admin"], true);
    }

    #[tokio::test]
    async fn admin_status_is_self_only() {
        let (app, _) = make_test_app().await;
        let token = token_for(&app, "a@x.com").await;

        let res = send(&app, request("GET", "/users/admin/b@x.com", None, Some(&token))).await;
        assert_eq!(res.status(), StatusCode::FORBIDDEN);
        assert_eq!(get_json_body(res).await["message"], "Unauthorized access");
    }

    #[tokio::test]
    async fn admin_status_requires_token() {
        let (app, _) = make_test_app().await;

        let res = send(&app, request("GET", "/users/admin/a@x.com", None, None)).await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

        let res = send(&app, request("GET", "/users/admin/a@x.com", None, Some("bogus"))).await;
        assert_eq!(res.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn duplicate_registration_is_reported_not_inserted() {
        let (app, app_state) = make_test_app().await;
        let body = json!({ "email": "dup@x.com", "role": "admin" });

        let res = send(&app, request("POST", "/users", Some(body.clone()), None)).await;
        assert_eq!(res.status(), StatusCode::OK);

        let res = send(&app, request("POST", "/users", Some(body), None)).await;
        assert_eq!(res.status(), StatusCode::OK);
        let json = get_json_body(res).await;
        assert!(json.get("success").is_none());
        assert_eq!(json["message"], "user already exists");

        let users = UserModel::find_all(app_state.db()).await.unwrap();
        assert_eq!(users.len(), 1);
        // A client-supplied role never takes effect.
        assert!(!users[0].is_admin());
    }

    #[tokio::test]
    async fn registration_rejects_invalid_email() {
        let (app, _) = make_test_app().await;

        let res = send(&app, request("POST", "/users", Some(json!({ "email": "nope" })), None)).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        assert_eq!(get_json_body(res).await["message"], "A valid email is required");
    }

    #[tokio::test]
    async fn listing_users_requires_live_admin() {
        let (app, app_state) = make_test_app().await;
        let inserted = UserModel::create(app_state.db(), None, "boss@x.com", None)
            .await
            .unwrap();
        let token = token_for(&app, "boss@x.com").await;

        let res = send(&app, request("GET", "/users", None, None)).await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

        let res = send(&app, request("GET", "/users", None, Some(&token))).await;
        assert_eq!(res.status(), StatusCode::FORBIDDEN);

        UserModel::promote_to_admin(app_state.db(), &inserted.inserted_id.parse().unwrap())
            .await
            .unwrap();

        let res = send(&app, request("GET", "/users", None, Some(&token))).await;
        assert_eq!(res.status(), StatusCode::OK);
        let json = get_json_body(res).await;
        assert_eq!(json[0]["email"], "boss@x.com");
        assert_eq!(json[0]["_id"], inserted.inserted_id);
        assert_eq!(json[0]["role"], "admin");
    }

    #[tokio::test]
    async fn delete_user_by_typed_identifier() {
        let (app, app_state) = make_test_app().await;
        let inserted = UserModel::create(app_state.db(), None, "gone@x.com", None)
            .await
            .unwrap();

        let res = send(&app, request("DELETE", "/users/not-an-id", None, None)).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        assert_eq!(get_json_body(res).await["message"], "Invalid identifier format");

        let uri = format!("/users/{}", inserted.inserted_id);
        let res = send(&app, request("DELETE", &uri, None, None)).await;
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(get_json_body(res).await["deletedCount"], 1);

        let res = send(&app, request("DELETE", &uri, None, None)).await;
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(get_json_body(res).await["deletedCount"], 0);
    }

    #[tokio::test]
    async fn promoting_unknown_user_matches_nothing() {
        let (app, _) = make_test_app().await;

        let res = send(
            &app,
            request("PATCH", "/users/admin/65a1f0c2b3d4e5f60718293a", None, None),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(get_json_body(res).await["matchedCount"], 0);

        let res = send(&app, request("PATCH", "/users/admin/zzz", None, None)).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }
}

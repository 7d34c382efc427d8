#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use db::models::review::Model as ReviewModel;
    use crate::helpers::{get_json_body, make_test_app, request, send};
    use serde_json::{Value, json};

    fn cart_line(email: &str, name: &str) -> Value {
        json!({
            "menuId": "65a1f0c2b3d4e5f60718293a",
            "userEmail": email,
            "name": name,
            "image": "https://img.test/x.png",
            "price": 7.25
        })
    }

    #[tokio::test]
    async fn cart_lines_are_scoped_by_email() {
        let (app, _) = make_test_app().await;

        for (email, name) in [("a@x.com", "soup"), ("a@x.com", "pie"), ("b@x.com", "tea")] {
            let res = send(&app, request("POST", "/carts", Some(cart_line(email, name)), None)).await;
            assert_eq!(res.status(), StatusCode::OK);
            assert_eq!(get_json_body(res).await["acknowledged"], true);
        }

        let res = send(&app, request("GET", "/carts?email=a@x.com", None, None)).await;
        assert_eq!(res.status(), StatusCode::OK);
        let json = get_json_body(res).await;
        let lines = json.as_array().unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["name"], "soup");
        assert_eq!(lines[0]["userEmail"], "a@x.com");
        assert_eq!(lines[0]["menuId"], "65a1f0c2b3d4e5f60718293a");

        let res = send(&app, request("GET", "/carts", None, None)).await;
        assert!(get_json_body(res).await.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn cart_requires_valid_user_email() {
        let (app, _) = make_test_app().await;

        let res = send(&app, request("POST", "/carts", Some(cart_line("not-an-email", "soup")), None)).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        assert_eq!(get_json_body(res).await["message"], "A valid userEmail is required");
    }

    #[tokio::test]
    async fn my_cart_removes_one_line() {
        let (app, _) = make_test_app().await;

        let res = send(&app, request("POST", "/carts", Some(cart_line("a@x.com", "soup")), None)).await;
        let id = get_json_body(res).await["insertedId"]
            .as_str()
            .unwrap()
            .to_owned();

        let res = send(&app, request("DELETE", &format!("/MyCart/{id}"), None, None)).await;
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(get_json_body(res).await["deletedCount"], 1);

        let res = send(&app, request("GET", "/carts?email=a@x.com", None, None)).await;
        assert!(get_json_body(res).await.as_array().unwrap().is_empty());

        let res = send(&app, request("DELETE", "/MyCart/bad-id", None, None)).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn testimonials_list_reviews() {
        let (app, app_state) = make_test_app().await;
        ReviewModel::create(app_state.db(), "Ann", "Lovely soup", 4.5)
            .await
            .unwrap();

        let res = send(&app, request("GET", "/testimonials", None, None)).await;
        assert_eq!(res.status(), StatusCode::OK);
        let json = get_json_body(res).await;
        assert_eq!(json[0]["name"], "Ann");
        assert_eq!(json[0]["rating"], 4.5);
    }
}

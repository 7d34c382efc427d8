#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use db::models::menu_item::{Model as MenuItemModel, NewMenuItem};
    use db::RecordKey;
    use db::models::user::Model as UserModel;
    use crate::helpers::{get_json_body, make_test_app, make_test_app_with, request, send, token_for};
    use sea_orm::DatabaseConnection;
    use serde_json::json;
    use util::state::AppState;

    const LOOKALIKE: &str = "65a1f0c2b3d4e5f60718293a";

    fn dish(id: Option<&str>, name: &str, category: &str) -> NewMenuItem {
        NewMenuItem {
            id: id.map(str::to_owned),
            name: name.into(),
            recipe: format!("{name} recipe"),
            image: format!("https://img.test/{name}.png"),
            category: category.into(),
            price: 9.5,
        }
    }

    async fn seed(db: &DatabaseConnection, item: NewMenuItem) -> String {
        MenuItemModel::create(db, item).await.unwrap().inserted_id
    }

    async fn admin_token(app: &axum::Router, app_state: &AppState, email: &str) -> String {
        let inserted = UserModel::create(app_state.db(), None, email, None)
            .await
            .unwrap();
        UserModel::promote_to_admin(app_state.db(), &inserted.inserted_id.parse().unwrap())
            .await
            .unwrap();
        token_for(app, email).await
    }

    #[tokio::test]
    async fn menu_lists_items_in_insertion_order() {
        let (app, app_state) = make_test_app().await;
        seed(app_state.db(), dish(None, "first", "salad")).await;
        seed(app_state.db(), dish(Some("legacy-2"), "second", "soup")).await;

        let res = send(&app, request("GET", "/menu", None, None)).await;
        assert_eq!(res.status(), StatusCode::OK);

        let json = get_json_body(res).await;
        let items = json.as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["name"], "first");
        assert_eq!(items[1]["_id"], "legacy-2");
    }

    #[tokio::test]
    async fn all_menus_pages_through_a_category() {
        let (app, app_state) = make_test_app().await;
        for i in 1..=5 {
            seed(app_state.db(), dish(None, &format!("salad-{i}"), "salad")).await;
        }
        seed(app_state.db(), dish(None, "soup-1", "soup")).await;

        let res = send(&app, request("GET", "/allMenus?page=1&size=2&filter=salad", None, None)).await;
        assert_eq!(res.status(), StatusCode::OK);
        let json = get_json_body(res).await;
        let names: Vec<_> = json
            .as_array()
            .unwrap()
            .iter()
            .map(|i| i["name"].as_str().unwrap().to_owned())
            .collect();
        assert_eq!(names, vec!["salad-1", "salad-2"]);

        let res = send(&app, request("GET", "/allMenus?page=3&size=2&filter=salad", None, None)).await;
        let json = get_json_body(res).await;
        let items = json.as_array().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["name"], "salad-5");

        // No size means no limit.
        let res = send(&app, request("GET", "/allMenus?filter=salad", None, None)).await;
        assert_eq!(get_json_body(res).await.as_array().unwrap().len(), 5);

        // No filter matches nothing.
        let res = send(&app, request("GET", "/allMenus?page=1&size=2", None, None)).await;
        assert!(get_json_body(res).await.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn all_menus_rejects_zero_page_or_size() {
        let (app, _) = make_test_app().await;

        let res = send(&app, request("GET", "/allMenus?page=0&size=2&filter=salad", None, None)).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);

        let res = send(&app, request("GET", "/allMenus?page=1&size=0&filter=salad", None, None)).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn menu_count_matches_category() {
        let (app, app_state) = make_test_app().await;
        seed(app_state.db(), dish(None, "a", "drinks")).await;
        seed(app_state.db(), dish(None, "b", "drinks")).await;
        seed(app_state.db(), dish(None, "c", "pizza")).await;

        let res = send(&app, request("GET", "/menuCount?filter=drinks", None, None)).await;
        assert_eq!(get_json_body(res).await["count"], 2);

        let res = send(&app, request("GET", "/menuCount", None, None)).await;
        assert_eq!(get_json_body(res).await["count"], 0);
    }

    #[tokio::test]
    async fn single_item_routes_resolve_raw_string_keys() {
        let (app, app_state) = make_test_app().await;
        seed(app_state.db(), dish(Some("642c155b2c4774f05c36eeb9x"), "legacy", "soup")).await;

        let res = send(
            &app,
            request("GET", "/editMenuItem/642c155b2c4774f05c36eeb9x", None, None),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(get_json_body(res).await["name"], "legacy");

        let res = send(
            &app,
            request(
                "PATCH",
                "/updateMenuItem/642c155b2c4774f05c36eeb9x",
                Some(json!({ "price": 12.0 })),
                None,
            ),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(get_json_body(res).await["modifiedCount"], 1);

        let res = send(
            &app,
            request("DELETE", "/deleteMenuItem/642c155b2c4774f05c36eeb9x", None, None),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(get_json_body(res).await["deletedCount"], 1);

        let res = send(
            &app,
            request("GET", "/editMenuItem/642c155b2c4774f05c36eeb9x", None, None),
        )
        .await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        assert_eq!(get_json_body(res).await["message"], "Menu item not found");
    }

    #[tokio::test]
    async fn raw_lookalike_is_found_when_no_typed_record_exists() {
        let (app, app_state) = make_test_app().await;
        // Raw string whose text is a valid typed identifier.
        seed(app_state.db(), dish(Some(LOOKALIKE), "raw twin", "soup")).await;

        let uri = format!("/editMenuItem/{LOOKALIKE}");
        let res = send(&app, request("GET", &uri, None, None)).await;
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(get_json_body(res).await["name"], "raw twin");
    }

    #[tokio::test]
    async fn typed_record_wins_over_raw_twin_with_same_text() {
        let (app, app_state) = make_test_app().await;
        let hex = seed(app_state.db(), dish(None, "typed", "soup")).await;
        seed(app_state.db(), dish(Some(&hex), "raw twin", "soup")).await;

        let res = send(&app, request("GET", &format!("/editMenuItem/{hex}"), None, None)).await;
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(get_json_body(res).await["name"], "typed");

        let res = send(
            &app,
            request(
                "PATCH",
                &format!("/updateMenuItem/{hex}"),
                Some(json!({ "name": "typed renamed" })),
                None,
            ),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(get_json_body(res).await["modifiedCount"], 1);

        let raw_key = RecordKey::Raw(hex.clone());
        let raw = MenuItemModel::find_by_key(app_state.db(), &raw_key)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(raw.name, "raw twin");

        let res = send(&app, request("DELETE", &format!("/deleteMenuItem/{hex}"), None, None)).await;
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(get_json_body(res).await["deletedCount"], 1);

        let typed_key = RecordKey::Typed(hex.parse().unwrap());
        assert!(
            MenuItemModel::find_by_key(app_state.db(), &typed_key)
                .await
                .unwrap()
                .is_none()
        );
        let raw = MenuItemModel::find_by_key(app_state.db(), &raw_key)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(raw.name, "raw twin");
        assert_eq!(raw.price, 9.5);

        // With the typed record gone the same text now reaches the raw twin.
        let res = send(&app, request("GET", &format!("/editMenuItem/{hex}"), None, None)).await;
        assert_eq!(get_json_body(res).await["name"], "raw twin");
    }

    #[tokio::test]
    async fn update_sets_only_provided_fields() {
        let (app, app_state) = make_test_app().await;
        let id = seed(app_state.db(), dish(None, "pasta", "mains")).await;

        let res = send(
            &app,
            request(
                "PATCH",
                &format!("/updateMenuItem/{id}"),
                Some(json!({ "name": "penne" })),
                None,
            ),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);

        let res = send(&app, request("GET", &format!("/editMenuItem/{id}"), None, None)).await;
        let json = get_json_body(res).await;
        assert_eq!(json["name"], "penne");
        assert_eq!(json["category"], "mains");
        assert_eq!(json["price"], 9.5);

        let res = send(
            &app,
            request(
                "PATCH",
                &format!("/updateMenuItem/{id}"),
                Some(json!({ "price": -3.0 })),
                None,
            ),
        )
        .await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn missing_item_is_not_found_for_every_route() {
        let (app, _) = make_test_app().await;

        for (method, uri, body) in [
            ("GET", format!("/editMenuItem/{LOOKALIKE}"), None),
            ("PATCH", format!("/updateMenuItem/{LOOKALIKE}"), Some(json!({ "name": "x" }))),
            ("DELETE", "/deleteMenuItem/nothing-here".to_owned(), None),
        ] {
            let res = send(&app, request(method, &uri, body, None)).await;
            assert_eq!(res.status(), StatusCode::NOT_FOUND, "{method} {uri}");
        }
    }

    #[tokio::test]
    async fn single_menu_requires_verified_admin() {
        let (app, app_state) = make_test_app().await;
        let body = json!({ "name": "Soup", "recipe": "water", "image": "", "category": "soup", "price": 4.0 });

        let res = send(&app, request("POST", "/singleMenu", Some(body.clone()), None)).await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

        let stranger = token_for(&app, "stranger@x.com").await;
        let res = send(&app, request("POST", "/singleMenu", Some(body.clone()), Some(&stranger))).await;
        assert_eq!(res.status(), StatusCode::FORBIDDEN);

        let token = admin_token(&app, &app_state, "chef@x.com").await;
        let res = send(&app, request("POST", "/singleMenu", Some(body), Some(&token))).await;
        assert_eq!(res.status(), StatusCode::OK);
        let json = get_json_body(res).await;
        assert_eq!(json["acknowledged"], true);
        assert_eq!(json["insertedId"].as_str().unwrap().len(), 24);

        let res = send(
            &app,
            request(
                "POST",
                "/singleMenu",
                Some(json!({ "name": "", "category": "soup", "price": 1.0 })),
                Some(&token),
            ),
        )
        .await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn single_menu_keeps_client_supplied_id() {
        let (app, app_state) = make_test_app().await;
        let token = admin_token(&app, &app_state, "chef@x.com").await;

        let body = json!({ "_id": "imported-7", "name": "Pie", "category": "dessert", "price": 3.0 });
        let res = send(&app, request("POST", "/singleMenu", Some(body), Some(&token))).await;
        assert_eq!(get_json_body(res).await["insertedId"], "imported-7");

        let res = send(&app, request("GET", "/editMenuItem/imported-7", None, None)).await;
        assert_eq!(res.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn delete_is_open_by_default() {
        let (app, app_state) = make_test_app().await;
        let id = seed(app_state.db(), dish(None, "gone", "soup")).await;

        let res = send(&app, request("DELETE", &format!("/deleteMenuItem/{id}"), None, None)).await;
        assert_eq!(res.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn delete_can_be_gated_behind_admin() {
        let (app, app_state) = make_test_app_with(true).await;
        let id = seed(app_state.db(), dish(None, "guarded", "soup")).await;
        let uri = format!("/deleteMenuItem/{id}");

        let res = send(&app, request("DELETE", &uri, None, None)).await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

        let stranger = token_for(&app, "stranger@x.com").await;
        let res = send(&app, request("DELETE", &uri, None, Some(&stranger))).await;
        assert_eq!(res.status(), StatusCode::FORBIDDEN);

        let token = admin_token(&app, &app_state, "chef@x.com").await;
        let res = send(&app, request("DELETE", &uri, None, Some(&token))).await;
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(get_json_body(res).await["deletedCount"], 1);
    }
}

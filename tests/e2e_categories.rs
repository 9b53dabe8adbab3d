// tests/e2e_categories.rs
mod support;

use axum::http::StatusCode;
use support::*;

#[tokio::test]
async fn create_category_allocates_slug_from_vietnamese_name() {
    let app = make_test_app();

    let resp = app
        .send(multipart_request(
            "POST",
            "/api/categories",
            Some(ADMIN_TOKEN),
            MultipartBody::new().text("name", "Trà Sữa"),
        ))
        .await;

    assert_eq!(resp.status(), StatusCode::CREATED);
    let json = read_json(resp).await;
    assert_eq!(json["name"], "Trà Sữa");
    assert_eq!(json["slug"], "tra-sua");
    assert!(json["image"].is_null());
    assert!(app.store.calls().is_empty());
}

#[tokio::test]
async fn colliding_slug_gets_numeric_suffix() {
    let app = make_test_app();

    for name in ["Trà Sữa", "Trà sữa!"] {
        let resp = app
            .send(multipart_request(
                "POST",
                "/api/categories",
                Some(ADMIN_TOKEN),
                MultipartBody::new().text("name", name),
            ))
            .await;
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let slugs: Vec<String> = app
        .db
        .categories()
        .into_iter()
        .map(|c| c.slug.into_inner())
        .collect();
    assert_eq!(slugs, vec!["tra-sua", "tra-sua-2"]);
}

#[tokio::test]
async fn create_with_image_stores_under_categories_namespace() {
    let app = make_test_app();

    let resp = app
        .send(multipart_request(
            "POST",
            "/api/categories",
            Some(ADMIN_TOKEN),
            MultipartBody::new()
                .text("name", "Cà Phê")
                .file("image", "coffee.jpg", b"jpeg-bytes"),
        ))
        .await;

    assert_eq!(resp.status(), StatusCode::CREATED);
    let json = read_json(resp).await;
    assert_eq!(json["slug"], "ca-phe");
    assert_eq!(json["image"]["public_id"], "categories/0");
    assert_eq!(
        app.store.calls(),
        vec![AssetCall::Store {
            namespace: "categories".into(),
            bytes: b"jpeg-bytes".to_vec(),
        }]
    );
}

#[tokio::test]
async fn update_without_rename_keeps_slug_and_replaces_image() {
    let app = make_test_app();
    app.send(multipart_request(
        "POST",
        "/api/categories",
        Some(ADMIN_TOKEN),
        MultipartBody::new()
            .text("name", "Trà Sữa")
            .file("image", "old.jpg", b"old"),
    ))
    .await;
    let id = app.db.categories()[0].id.0;

    let resp = app
        .send(multipart_request(
            "PUT",
            &format!("/api/categories/{id}"),
            Some(ADMIN_TOKEN),
            MultipartBody::new()
                .text("name", "Trà Sữa")
                .file("image", "new.jpg", b"new"),
        ))
        .await;

    assert_eq!(resp.status(), StatusCode::OK);
    let json = read_json(resp).await;
    assert_eq!(json["slug"], "tra-sua");
    assert_eq!(json["image"]["public_id"], "categories/1");
    assert_eq!(app.store.discarded(), vec!["categories/0"]);
}

#[tokio::test]
async fn rename_recomputes_slug() {
    let app = make_test_app();
    app.send(multipart_request(
        "POST",
        "/api/categories",
        Some(ADMIN_TOKEN),
        MultipartBody::new().text("name", "Trà Sữa"),
    ))
    .await;
    let id = app.db.categories()[0].id.0;

    let resp = app
        .send(multipart_request(
            "PUT",
            &format!("/api/categories/{id}"),
            Some(ADMIN_TOKEN),
            MultipartBody::new().text("name", "Bánh Mì"),
        ))
        .await;

    assert_eq!(resp.status(), StatusCode::OK);
    let json = read_json(resp).await;
    assert_eq!(json["slug"], "banh-mi");

    let resp = app
        .send(empty_request("GET", "/api/categories/slug/banh-mi", None))
        .await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn delete_discards_image_then_removes_row() {
    let app = make_test_app();
    app.send(multipart_request(
        "POST",
        "/api/categories",
        Some(ADMIN_TOKEN),
        MultipartBody::new()
            .text("name", "Trà Sữa")
            .file("image", "a.jpg", b"a"),
    ))
    .await;
    let id = app.db.categories()[0].id.0;

    let resp = app
        .send(empty_request(
            "DELETE",
            &format!("/api/categories/{id}"),
            Some(ADMIN_TOKEN),
        ))
        .await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(app.store.discarded(), vec!["categories/0"]);
    assert!(app.db.categories().is_empty());
}

#[tokio::test]
async fn delete_of_category_with_products_conflicts_without_touching_media() {
    let app = make_test_app();
    app.send(multipart_request(
        "POST",
        "/api/categories",
        Some(ADMIN_TOKEN),
        MultipartBody::new()
            .text("name", "Trà Sữa")
            .file("image", "a.jpg", b"a"),
    ))
    .await;
    let category_id = app.db.categories()[0].id.0;
    let resp = app
        .send(multipart_request(
            "POST",
            "/api/products",
            Some(ADMIN_TOKEN),
            MultipartBody::new()
                .text("name", "Trà sữa trân châu")
                .text("price", "35000")
                .text("code", "TS01")
                .text("category_id", &category_id.to_string()),
        ))
        .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    app.store.clear();

    let resp = app
        .send(empty_request(
            "DELETE",
            &format!("/api/categories/{category_id}"),
            Some(ADMIN_TOKEN),
        ))
        .await;

    assert_error_response(resp, StatusCode::CONFLICT, "Conflict").await;
    assert!(app.store.calls().is_empty());
    assert_eq!(app.db.categories().len(), 1);
}

#[tokio::test]
async fn list_returns_newest_first() {
    let app = make_test_app();
    for name in ["Trà", "Cà Phê"] {
        app.send(multipart_request(
            "POST",
            "/api/categories",
            Some(ADMIN_TOKEN),
            MultipartBody::new().text("name", name),
        ))
        .await;
    }

    let resp = app.send(empty_request("GET", "/api/categories", None)).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let json = read_json(resp).await;
    let names: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Cà Phê", "Trà"]);
}

#[tokio::test]
async fn missing_name_is_bad_request() {
    let app = make_test_app();
    let resp = app
        .send(multipart_request(
            "POST",
            "/api/categories",
            Some(ADMIN_TOKEN),
            MultipartBody::new().file("image", "a.jpg", b"a"),
        ))
        .await;

    assert_error_response(resp, StatusCode::BAD_REQUEST, "Bad Request").await;
    assert!(app.store.calls().is_empty());
}

#[tokio::test]
async fn exact_duplicate_name_conflicts_before_any_upload() {
    let app = make_test_app();
    let first = app
        .send(multipart_request(
            "POST",
            "/api/categories",
            Some(ADMIN_TOKEN),
            MultipartBody::new()
                .text("name", "Trà Sữa")
                .file("image", "a.jpg", b"a"),
        ))
        .await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let resp = app
        .send(multipart_request(
            "POST",
            "/api/categories",
            Some(ADMIN_TOKEN),
            MultipartBody::new()
                .text("name", "Trà Sữa")
                .file("image", "b.jpg", b"b"),
        ))
        .await;

    assert_error_response(resp, StatusCode::CONFLICT, "Conflict").await;
    assert_eq!(app.store.stored_namespaces(), vec!["categories"]);
    assert!(app.store.discarded().is_empty());
    assert_eq!(app.db.categories().len(), 1);
}

#[tokio::test]
async fn rename_onto_taken_name_keeps_current_image() {
    let app = make_test_app();
    app.send(multipart_request(
        "POST",
        "/api/categories",
        Some(ADMIN_TOKEN),
        MultipartBody::new().text("name", "Trà Sữa"),
    ))
    .await;
    let resp = app
        .send(multipart_request(
            "POST",
            "/api/categories",
            Some(ADMIN_TOKEN),
            MultipartBody::new()
                .text("name", "Cà Phê")
                .file("image", "coffee.jpg", b"coffee"),
        ))
        .await;
    let coffee_id = read_json(resp).await["id"].as_i64().unwrap();
    app.store.clear();

    let resp = app
        .send(multipart_request(
            "PUT",
            &format!("/api/categories/{coffee_id}"),
            Some(ADMIN_TOKEN),
            MultipartBody::new()
                .text("name", "Trà Sữa")
                .file("image", "new.jpg", b"new"),
        ))
        .await;

    assert_error_response(resp, StatusCode::CONFLICT, "Conflict").await;
    assert!(app.store.calls().is_empty());
    let coffee = app
        .db
        .categories()
        .into_iter()
        .find(|c| c.id.0 == coffee_id)
        .unwrap();
    assert_eq!(coffee.name.as_str(), "Cà Phê");
    assert_eq!(coffee.image.unwrap().public_id(), "categories/0");
}

#[tokio::test]
async fn second_image_part_is_rejected() {
    let app = make_test_app();
    let resp = app
        .send(multipart_request(
            "POST",
            "/api/categories",
            Some(ADMIN_TOKEN),
            MultipartBody::new()
                .text("name", "Trà Sữa")
                .file("image", "a.jpg", b"a")
                .file("image", "b.jpg", b"b"),
        ))
        .await;

    assert_error_response(resp, StatusCode::BAD_REQUEST, "Bad Request").await;
    assert!(app.store.calls().is_empty());
    assert!(app.db.categories().is_empty());
}

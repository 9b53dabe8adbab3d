// tests/e2e_contacts.rs
mod support;

use axum::http::{Request, StatusCode, header};
use axum::body::Body;
use serde_json::json;
use support::*;

fn contact_payload() -> serde_json::Value {
    json!({
        "title": "Hỏi giá sỉ",
        "name": "Nguyễn An",
        "email": "an@example.vn",
        "phone": "0901234567",
        "content": "Cho mình xin bảng giá"
    })
}

async fn submit_contact(app: &TestApp) -> i64 {
    let resp = app
        .send(json_request("POST", "/api/contacts", None, contact_payload()))
        .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    read_json(resp).await["id"].as_i64().unwrap()
}

#[tokio::test]
async fn anyone_can_submit_a_contact() {
    let app = make_test_app();
    submit_contact(&app).await;

    let stored = app.db.contacts();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].details.email, "an@example.vn");
}

#[tokio::test]
async fn malformed_email_is_rejected() {
    let app = make_test_app();
    let mut payload = contact_payload();
    payload["email"] = json!("not-an-email");

    let resp = app
        .send(json_request("POST", "/api/contacts", None, payload))
        .await;

    assert_error_response(resp, StatusCode::BAD_REQUEST, "Bad Request").await;
    assert!(app.db.contacts().is_empty());
}

#[tokio::test]
async fn listing_requires_a_token() {
    let app = make_test_app();
    let resp = app.send(empty_request("GET", "/api/contacts", None)).await;
    assert_error_response(resp, StatusCode::UNAUTHORIZED, "Unauthorized").await;
}

#[tokio::test]
async fn listing_is_forbidden_for_customers() {
    let app = make_test_app();
    let resp = app
        .send(empty_request("GET", "/api/contacts", Some(CUSTOMER_TOKEN)))
        .await;
    assert_error_response(resp, StatusCode::FORBIDDEN, "Forbidden").await;
}

#[tokio::test]
async fn admin_reads_contacts_via_cookie() {
    let app = make_test_app();
    let id = submit_contact(&app).await;

    let request = Request::builder()
        .method("GET")
        .uri("/api/contacts")
        .header(header::COOKIE, format!("theme=dark; token={ADMIN_TOKEN}"))
        .body(Body::empty())
        .unwrap();
    let resp = app.send(request).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let json = read_json(resp).await;
    assert_eq!(json["pagination"]["total"], 1);
    assert_eq!(json["items"][0]["id"], id);
}

#[tokio::test]
async fn admin_updates_and_deletes_a_contact() {
    let app = make_test_app();
    let id = submit_contact(&app).await;

    let resp = app
        .send(json_request(
            "PUT",
            &format!("/api/contacts/{id}"),
            Some(ADMIN_TOKEN),
            json!({ "phone": "0909999999" }),
        ))
        .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let json = read_json(resp).await;
    assert_eq!(json["phone"], "0909999999");
    assert_eq!(json["title"], "Hỏi giá sỉ");

    let resp = app
        .send(empty_request(
            "DELETE",
            &format!("/api/contacts/{id}"),
            Some(ADMIN_TOKEN),
        ))
        .await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(app.db.contacts().is_empty());

    let resp = app
        .send(empty_request(
            "GET",
            &format!("/api/contacts/{id}"),
            Some(ADMIN_TOKEN),
        ))
        .await;
    assert_error_response(resp, StatusCode::NOT_FOUND, "Not Found").await;
}

//! End-to-end tests for the cafe HTTP surface, driven in-process
//! through the assembled router.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use cafe_server::{Config, ServerState, build_app};

const TEST_API_KEY: &str = "test-key";

async fn test_app() -> (Router, tempfile::TempDir) {
    let dir = tempfile::tempdir().expect("tempdir");
    let db_path = dir.path().join("cafes.db");
    let config = Config::with_overrides(db_path.display().to_string(), 0, TEST_API_KEY);
    let state = ServerState::initialize(&config).await.expect("state");
    (build_app().with_state(state), dir)
}

async fn send(app: &Router, method: &str, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}

async fn send_html(app: &Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

/// POST /add with every field populated; returns the new id
async fn add_cafe(app: &Router, name: &str) -> i64 {
    let uri = format!(
        "/add?name={name}&map_url=https%3A%2F%2Fmaps.example%2F{name}&img_url=https%3A%2F%2Fimg.example%2F{name}.jpg&loc=Town&sockets=1&toilet=true&wifi=true&calls=0&seats=20-30&coffee_price=%C2%A32.50"
    );
    let (status, json) = send(app, "POST", &uri).await;
    assert_eq!(status, StatusCode::OK, "add failed: {json}");
    assert_eq!(json["response"]["success"], "Successfully added the new cafe.");
    json["response"]["id"].as_i64().expect("id in ack")
}

#[tokio::test]
async fn add_then_search_returns_the_same_fields() {
    let (app, _dir) = test_app().await;

    // Spec example: POST /add?name=Brew&map_url=m&img_url=i&loc=Town&seats=10&coffee_price=£2
    let (status, json) = send(
        &app,
        "POST",
        "/add?name=Brew&map_url=m&img_url=i&loc=Town&seats=10&coffee_price=%C2%A32",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let id = json["response"]["id"].as_i64().unwrap();

    let (status, html) = send_html(&app, &format!("/search/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Brew"));
    assert!(html.contains("Town"));
    assert!(html.contains("£2"));
}

#[tokio::test]
async fn add_missing_required_fields_lists_every_one() {
    let (app, _dir) = test_app().await;

    let (status, json) = send(&app, "POST", "/add?name=OnlyName").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "E0002");
    let message = json["error"]["message"].as_str().unwrap();
    for field in ["map_url", "img_url", "loc", "seats"] {
        assert!(message.contains(field), "{field} missing from: {message}");
    }
}

#[tokio::test]
async fn add_duplicate_name_is_a_conflict() {
    let (app, _dir) = test_app().await;

    add_cafe(&app, "Twins").await;
    let (status, json) = send(
        &app,
        "POST",
        "/add?name=Twins&map_url=m&img_url=i&loc=Elsewhere&seats=5",
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["error"]["code"], "E0004");
}

#[tokio::test]
async fn add_parses_canonical_bool_tokens() {
    let (app, _dir) = test_app().await;

    // wifi=false must yield false (not the historical non-empty-string
    // coercion); calls is absent and takes the default
    let (status, _) = send(
        &app,
        "POST",
        "/add?name=Flags&map_url=m&img_url=i&loc=Town&seats=4&sockets=1&toilet=0&wifi=false",
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, json) = send(&app, "GET", "/random").await;
    assert_eq!(status, StatusCode::OK);
    let cafe = &json["cafes"];
    assert_eq!(cafe["name"], "Flags");
    assert_eq!(cafe["has_sockets"], true);
    assert_eq!(cafe["has_toilet"], false);
    assert_eq!(cafe["has_wifi"], false);
    assert_eq!(cafe["can_take_calls"], false);
}

#[tokio::test]
async fn add_rejects_junk_bool_tokens() {
    let (app, _dir) = test_app().await;

    let (status, json) = send(
        &app,
        "POST",
        "/add?name=Junk&map_url=m&img_url=i&loc=Town&seats=4&wifi=maybe",
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"]["message"].as_str().unwrap().contains("wifi"));
}

#[tokio::test]
async fn update_price_round_trips() {
    let (app, _dir) = test_app().await;
    let id = add_cafe(&app, "Priced").await;

    let (status, json) = send(
        &app,
        "PATCH",
        &format!("/update-price/{id}?new_price=%C2%A33.10"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["response"]["success"], "Successfully updated the price.");

    let (_, json) = send(&app, "GET", "/random").await;
    assert_eq!(json["cafes"]["coffee_price"], "£3.10");
}

#[tokio::test]
async fn update_price_unknown_id_is_404() {
    let (app, _dir) = test_app().await;

    let (status, json) = send(&app, "PATCH", "/update-price/9999?new_price=1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "E0003");
}

#[tokio::test]
async fn update_price_without_param_is_400() {
    let (app, _dir) = test_app().await;
    let id = add_cafe(&app, "NoParam").await;

    let (status, json) = send(&app, "PATCH", &format!("/update-price/{id}")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(
        json["error"]["message"]
            .as_str()
            .unwrap()
            .contains("new_price")
    );
}

#[tokio::test]
async fn report_closed_with_wrong_key_leaves_record_intact() {
    let (app, _dir) = test_app().await;
    let id = add_cafe(&app, "Survivor").await;

    let (status, json) = send(
        &app,
        "DELETE",
        &format!("/report-closed/{id}?api_key=wrong-key"),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["error"]["code"], "E2001");

    // Missing key is rejected the same way
    let (status, _) = send(&app, "DELETE", &format!("/report-closed/{id}")).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = send_html(&app, &format!("/search/{id}")).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn report_closed_with_correct_key_removes_record() {
    let (app, _dir) = test_app().await;
    let id = add_cafe(&app, "Closing").await;

    let (status, json) = send(
        &app,
        "DELETE",
        &format!("/report-closed/{id}?api_key={TEST_API_KEY}"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json["response"]["success"],
        "Successfully deleted the cafe record."
    );

    let (status, _) = send_html(&app, &format!("/search/{id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Deleting again: key passes, id is gone
    let (status, _) = send(
        &app,
        "DELETE",
        &format!("/report-closed/{id}?api_key={TEST_API_KEY}"),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn random_on_empty_table_is_404() {
    let (app, _dir) = test_app().await;

    let (status, json) = send(&app, "GET", "/random").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "E0003");
}

#[tokio::test]
async fn random_draws_only_from_the_stored_set() {
    let (app, _dir) = test_app().await;
    for name in ["One", "Two", "Three"] {
        add_cafe(&app, name).await;
    }

    let mut seen = std::collections::HashSet::new();
    for _ in 0..40 {
        let (status, json) = send(&app, "GET", "/random").await;
        assert_eq!(status, StatusCode::OK);
        let name = json["cafes"]["name"].as_str().unwrap().to_string();
        assert!(["One", "Two", "Three"].contains(&name.as_str()));
        seen.insert(name);
    }
    // 40 uniform draws over 3 records virtually never collapse to one
    assert!(seen.len() > 1);
}

#[tokio::test]
async fn index_lists_every_cafe_in_insertion_order() {
    let (app, _dir) = test_app().await;
    add_cafe(&app, "Zebra").await;
    add_cafe(&app, "Aardvark").await;

    let (status, html) = send_html(&app, "/").await;
    assert_eq!(status, StatusCode::OK);
    let zebra = html.find("Zebra").expect("Zebra listed");
    let aardvark = html.find("Aardvark").expect("Aardvark listed");
    assert!(zebra < aardvark, "index must follow ascending id");
}

#[tokio::test]
async fn search_unknown_id_is_404() {
    let (app, _dir) = test_app().await;

    let (status, json) = send(&app, "GET", "/search/42").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "E0003");
}

#[tokio::test]
async fn health_reports_database_status() {
    let (app, _dir) = test_app().await;

    let (status, json) = send(&app, "GET", "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["database"]["status"], "ok");
}

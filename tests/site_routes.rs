use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use div_centering::quiz::QuestionBank;
use div_centering::server::router;

fn app() -> Router {
    router(Arc::new(QuestionBank::builtin()))
}

async fn get(app: &Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn post_form(app: &Router, uri: &str, form: &str) -> StatusCode {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form.to_string()))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    response.status()
}

async fn post_json(app: &Router, uri: &str, json: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json.to_string()))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn index_shows_techniques() {
    let app = app();
    let (status, html) = get(&app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("CSS Centering Mastery"));
    assert!(html.contains("Flexbox: The Flexible Friend"));
    assert!(html.contains(r#"<a href="/techniques" class="active">"#));
}

#[tokio::test]
async fn playground_applies_resolved_style() {
    let app = app();
    let (status, html) = get(&app, "/playground?method=absolute&content=120&parent=400").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("position: absolute; top: 50%; left: 50%; transform: translate(-50%, -50%);"));
    assert!(html.contains("/* ABSOLUTE Centering Method */"));
    assert!(html.contains(r#"<option value="absolute" selected>"#));
}

#[tokio::test]
async fn playground_clamps_slider_values() {
    let app = app();
    let (status, html) = get(&app, "/playground?content=9999&parent=1").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("width: 200px; height: 200px;"));
    assert!(html.contains("width: 250px; height: 250px;"));
}

#[tokio::test]
async fn playground_rejects_unknown_method() {
    let app = app();
    let (status, html) = get(&app, "/playground?method=float").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(html.contains("unknown centering method: float"));
}

#[tokio::test]
async fn tutorials_expand_requested_section() {
    let app = app();
    let (status, html) = get(&app, "/tutorials?topic=flexbox&open=0").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Perfect Centering (Both Axes)"));
    assert!(!html.contains("Spaced-out siblings"));

    let (status, _) = get(&app, "/tutorials?topic=tables").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn quiz_forms_drive_the_session() {
    let app = app();
    let (_, html) = get(&app, "/quiz").await;
    assert!(html.contains("Question 1 of 3"));

    assert_eq!(post_form(&app, "/quiz/answer", "option=1").await, StatusCode::SEE_OTHER);
    // A second click on another option changes nothing.
    assert_eq!(post_form(&app, "/quiz/answer", "option=0").await, StatusCode::SEE_OTHER);
    let (_, html) = get(&app, "/quiz").await;
    assert!(html.contains("Correct!"));
    assert!(!html.contains("option wrong"));

    assert_eq!(post_form(&app, "/quiz/next", "").await, StatusCode::SEE_OTHER);
    let (_, html) = get(&app, "/quiz").await;
    assert!(html.contains("Question 2 of 3"));

    assert_eq!(post_form(&app, "/quiz/reset", "").await, StatusCode::SEE_OTHER);
    let (_, html) = get(&app, "/quiz").await;
    assert!(html.contains("Question 1 of 3"));
}

#[tokio::test]
async fn api_resolve_returns_descriptor() {
    let app = app();
    let (status, body) = get(&app, "/api/resolve?method=grid&content=100&parent=300").await;
    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["container"]["display"], "grid");
    assert_eq!(json["container"]["place-items"], "center");
    assert!(json["content"].get("position").is_none());
    assert!(json["snippet"].as_str().unwrap().contains("place-items: center;"));

    let (status, body) = get(&app, "/api/resolve?parent=600").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("parent size must be between 200 and 500"));
}

#[tokio::test]
async fn api_quiz_reports_rejections() {
    let app = app();
    let (status, json) = post_json(&app, "/api/quiz/next", "{}").await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["error"], "answer the current question before moving on");

    let (status, json) = post_json(&app, "/api/quiz/answer", r#"{"option":1}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["correct"], true);

    let (status, _) = post_json(&app, "/api/quiz/answer", r#"{"option":2}"#).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (_, body) = get(&app, "/api/quiz").await;
    let snapshot: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(snapshot["score"], 1);
    assert_eq!(snapshot["selected"], 1);
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let app = app();
    let (status, _) = get(&app, "/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn api_resolve_reports_unparsable_size_as_json() {
    let app = app();
    let (status, body) = get(&app, "/api/resolve?content=abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let json: serde_json::Value = serde_json::from_str(&body).expect("json error body");
    assert!(json["error"].as_str().unwrap().contains("content"));
}

#[tokio::test]
async fn api_quiz_answer_reports_malformed_option_as_json() {
    let app = app();
    let (status, json) = post_json(&app, "/api/quiz/answer", r#"{"option":-1}"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].is_string());

    let (_, body) = get(&app, "/api/quiz").await;
    let snapshot: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(snapshot["selected"], serde_json::Value::Null);
}

#[tokio::test]
async fn html_routes_show_error_page_for_malformed_query() {
    let app = app();
    for uri in [
        "/playground?content=-5",
        "/playground?parent=99999999999",
        "/tutorials?open=x",
    ] {
        let (status, html) = get(&app, uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert!(html.contains("Something went wrong"), "{uri}");
        assert!(html.contains("CSS Centering Mastery"), "{uri}");
    }
}

#[tokio::test]
async fn quiz_form_with_bad_option_shows_error_page() {
    let app = app();
    assert_eq!(post_form(&app, "/quiz/answer", "option=first").await, StatusCode::BAD_REQUEST);
    let (_, html) = get(&app, "/quiz").await;
    assert!(!html.contains("Correct!"));
}

#[tokio::test]
async fn footer_shows_current_year() {
    use chrono::Datelike;

    let app = app();
    let (_, html) = get(&app, "/").await;
    assert!(html.contains("Made with"));
    assert!(html.contains(&format!("&copy; {}", chrono::Local::now().year())));
}

//! Integration tests for the submission flow.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use serde_json::json;

use ovation_core::testimonial::FieldError;

use common::{body_string, build_test_app, post_form, post_json, FakeStore};

fn valid_form_body() -> String {
    serde_urlencoded::to_string([
        ("name", "Jane Doe"),
        ("email", "Jane@Example.com"),
        ("company", "Acme Corp"),
        ("position", "Engineer"),
        ("rating", "5"),
        ("message", "Working with this team was a pleasure."),
    ])
    .unwrap()
}

// ---------------------------------------------------------------------------
// Valid submissions
// ---------------------------------------------------------------------------

#[tokio::test]
async fn valid_form_submission_persists_and_renders_success() {
    let store = Arc::new(FakeStore::empty());
    let app = build_test_app(store.clone());

    let response = post_form(app, "/submit", valid_form_body()).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("Thank You!"));

    let inserts = store.inserts.lock().unwrap();
    assert_eq!(inserts.len(), 1, "exactly one insert attempt");
    assert_eq!(inserts[0].name, "Jane Doe");
    assert_eq!(inserts[0].email, "jane@example.com");
    assert_eq!(inserts[0].rating, 5);
}

#[tokio::test]
async fn json_submission_with_numeric_rating_is_accepted() {
    let store = Arc::new(FakeStore::empty());
    let app = build_test_app(store.clone());

    let response = post_json(
        app,
        "/submit",
        json!({
            "name": "Jane Doe",
            "email": "jane@example.com",
            "rating": 4,
            "message": "Working with this team was a pleasure.",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response).await.contains("Thank You!"));
    assert_eq!(store.inserts.lock().unwrap()[0].rating, 4);
}

#[tokio::test]
async fn omitted_company_and_position_persist_as_empty_strings() {
    let store = Arc::new(FakeStore::empty());
    let app = build_test_app(store.clone());

    let body = serde_urlencoded::to_string([
        ("name", "Jane Doe"),
        ("email", "jane@example.com"),
        ("rating", "5"),
        ("message", "Working with this team was a pleasure."),
    ])
    .unwrap();
    let response = post_form(app, "/submit", body).await;

    assert_eq!(response.status(), StatusCode::OK);
    let inserts = store.inserts.lock().unwrap();
    assert_eq!(inserts[0].company, "");
    assert_eq!(inserts[0].position, "");
}

#[tokio::test]
async fn html_in_submission_is_stored_escaped() {
    let store = Arc::new(FakeStore::empty());
    let app = build_test_app(store.clone());

    let body = serde_urlencoded::to_string([
        ("name", "<script>alert(1)</script> Jane"),
        ("email", "jane@example.com"),
        ("rating", "5"),
        ("message", "Great & memorable, 10/10 would recommend."),
    ])
    .unwrap();
    post_form(app, "/submit", body).await;

    let inserts = store.inserts.lock().unwrap();
    assert!(inserts[0].name.contains("&lt;script&gt;"));
    assert!(!inserts[0].name.contains("<script>"));
    assert!(inserts[0].message.contains("&amp; memorable"));
}

// ---------------------------------------------------------------------------
// Invalid submissions re-render the form, no persistence
// ---------------------------------------------------------------------------

#[tokio::test]
async fn short_message_rerenders_form_without_persisting() {
    let store = Arc::new(FakeStore::empty());
    let app = build_test_app(store.clone());

    let body = serde_urlencoded::to_string([
        ("name", "Jane Doe"),
        ("email", "jane@example.com"),
        ("rating", "5"),
        ("message", "too short"),
    ])
    .unwrap();
    let response = post_form(app, "/submit", body).await;

    // Form redisplay is not an error response.
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response).await;
    assert!(html.contains("Message must be between 10 and 1000 characters"));
    // The visitor's raw input comes back for correction in place.
    assert!(html.contains("value=\"Jane Doe\""));
    assert!(html.contains("too short"));
    assert_eq!(store.insert_count(), 0, "persistence must not be attempted");
}

#[tokio::test]
async fn out_of_range_rating_rerenders_form() {
    let store = Arc::new(FakeStore::empty());
    let app = build_test_app(store.clone());

    let body = serde_urlencoded::to_string([
        ("name", "Jane Doe"),
        ("email", "jane@example.com"),
        ("rating", "0"),
        ("message", "Working with this team was a pleasure."),
    ])
    .unwrap();
    let html = body_string(post_form(app, "/submit", body).await).await;

    assert!(html.contains("Rating must be between 1 and 5"));
    assert_eq!(store.insert_count(), 0);
}

#[tokio::test]
async fn missing_rating_is_reported_as_required() {
    let store = Arc::new(FakeStore::empty());
    let app = build_test_app(store.clone());

    let body = serde_urlencoded::to_string([
        ("name", "Jane Doe"),
        ("email", "jane@example.com"),
        ("message", "Working with this team was a pleasure."),
    ])
    .unwrap();
    let html = body_string(post_form(app, "/submit", body).await).await;

    assert!(html.contains("Rating is required"));
    assert_eq!(store.insert_count(), 0);
}

#[tokio::test]
async fn empty_submission_lists_every_violation() {
    let store = Arc::new(FakeStore::empty());
    let app = build_test_app(store.clone());

    let html = body_string(post_form(app, "/submit", String::new()).await).await;

    assert!(html.contains("Name must be between 2 and 100 characters"));
    assert!(html.contains("Please enter a valid email address"));
    assert!(html.contains("Rating is required"));
    assert!(html.contains("Message must be between 10 and 1000 characters"));
    assert_eq!(store.insert_count(), 0);
}

// ---------------------------------------------------------------------------
// Store-side failures
// ---------------------------------------------------------------------------

#[tokio::test]
async fn store_shape_rejection_rerenders_form_like_validation() {
    let errors = vec![FieldError::new(
        "message",
        "Message must be between 10 and 1000 characters",
    )];
    let store = Arc::new(FakeStore::rejecting(errors));
    let app = build_test_app(store);

    let response = post_form(app, "/submit", valid_form_body()).await;

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response).await;
    assert!(html.contains("Message must be between 10 and 1000 characters"));
    assert!(html.contains("<form method=\"post\" action=\"/submit\""));
    // The raw input is echoed back, mirroring local validation failures.
    assert!(html.contains("value=\"Jane Doe\""));
}

#[tokio::test]
async fn store_unavailable_on_insert_renders_error_page() {
    let store = Arc::new(FakeStore::failing_inserts());
    let app = build_test_app(store);

    let response = post_form(app, "/submit", valid_form_body()).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let html = body_string(response).await;
    assert!(html.contains("Database connection unavailable"));
}

#[tokio::test]
async fn store_down_before_insert_renders_error_page() {
    let store = Arc::new(FakeStore::unavailable());
    let app = build_test_app(store.clone());

    let response = post_form(app, "/submit", valid_form_body()).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body_string(response)
        .await
        .contains("Database connection unavailable"));
    assert_eq!(store.insert_count(), 0);
}

//! Shared test harness: an in-memory record store fake and request
//! helpers.
//!
//! The router under test is built by the same `build_app_router` the
//! binary uses, so the full middleware stack is exercised; only the
//! record store is substituted.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::Request;
use axum::response::Response;
use axum::Router;
use chrono::{Duration, TimeZone, Utc};
use http_body_util::BodyExt;
use tower::ServiceExt;

use ovation_core::testimonial::{FieldError, NewTestimonial};
use ovation_db::models::testimonial::Testimonial;
use ovation_db::store::{RecordStore, StoreError};
use ovation_web::config::ServerConfig;
use ovation_web::router::build_app_router;
use ovation_web::state::AppState;
use ovation_web::views::ViewEngine;

// ---------------------------------------------------------------------------
// Fake record store
// ---------------------------------------------------------------------------

/// What `insert` should do.
pub enum InsertBehavior {
    Succeed,
    Reject(Vec<FieldError>),
    Unavailable,
}

/// In-memory [`RecordStore`] standing in for Postgres.
pub struct FakeStore {
    pub ready: bool,
    pub records: Vec<Testimonial>,
    pub insert_behavior: InsertBehavior,
    /// Every submission passed to `insert`, in order.
    pub inserts: Mutex<Vec<NewTestimonial>>,
}

impl FakeStore {
    pub fn empty() -> Self {
        Self {
            ready: true,
            records: Vec::new(),
            insert_behavior: InsertBehavior::Succeed,
            inserts: Mutex::new(Vec::new()),
        }
    }

    pub fn with_records(records: Vec<Testimonial>) -> Self {
        Self {
            records,
            ..Self::empty()
        }
    }

    pub fn unavailable() -> Self {
        Self {
            ready: false,
            ..Self::empty()
        }
    }

    pub fn rejecting(errors: Vec<FieldError>) -> Self {
        Self {
            insert_behavior: InsertBehavior::Reject(errors),
            ..Self::empty()
        }
    }

    pub fn failing_inserts() -> Self {
        Self {
            insert_behavior: InsertBehavior::Unavailable,
            ..Self::empty()
        }
    }

    pub fn insert_count(&self) -> usize {
        self.inserts.lock().unwrap().len()
    }
}

#[async_trait]
impl RecordStore for FakeStore {
    async fn find_approved(&self, limit: i64) -> Result<Vec<Testimonial>, StoreError> {
        if !self.ready {
            return Err(StoreError::Unavailable("connection refused".into()));
        }
        let mut records: Vec<Testimonial> = self
            .records
            .iter()
            .filter(|r| r.is_approved)
            .cloned()
            .collect();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        records.truncate(limit as usize);
        Ok(records)
    }

    async fn insert(&self, input: &NewTestimonial) -> Result<Testimonial, StoreError> {
        match &self.insert_behavior {
            InsertBehavior::Succeed => {
                let mut inserts = self.inserts.lock().unwrap();
                inserts.push(input.clone());
                Ok(Testimonial {
                    id: inserts.len() as i64,
                    name: input.name.clone(),
                    email: input.email.clone(),
                    company: input.company.clone(),
                    position: input.position.clone(),
                    rating: input.rating,
                    message: input.message.clone(),
                    is_approved: false,
                    created_at: Utc::now(),
                })
            }
            InsertBehavior::Reject(errors) => Err(StoreError::Rejected(errors.clone())),
            InsertBehavior::Unavailable => Err(StoreError::Unavailable("connection refused".into())),
        }
    }

    async fn is_ready(&self) -> bool {
        self.ready
    }
}

/// An approved record; `seq` staggers `created_at` so timestamps are
/// distinct and ordered (higher `seq` is newer).
pub fn approved_record(seq: i64) -> Testimonial {
    let base = Utc.with_ymd_and_hms(2026, 1, 1, 12, 0, 0).unwrap();
    Testimonial {
        id: seq,
        name: format!("Visitor {seq}"),
        email: format!("visitor{seq}@example.com"),
        company: String::new(),
        position: String::new(),
        rating: ((seq % 5) + 1) as i16,
        message: "A thoroughly pleasant experience all around.".into(),
        is_approved: true,
        created_at: base + Duration::seconds(seq),
    }
}

// ---------------------------------------------------------------------------
// App + request helpers
// ---------------------------------------------------------------------------

pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        request_timeout_secs: 30,
        static_dir: "static".to_string(),
    }
}

/// Build the full application router around the given store.
pub fn build_test_app(store: Arc<dyn RecordStore>) -> Router {
    let config = test_config();
    let views = Arc::new(ViewEngine::new().expect("templates must compile"));
    let state = AppState {
        store,
        views,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn post_form(app: Router, uri: &str, body: String) -> Response {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn post_json(app: Router, uri: &str, json: serde_json::Value) -> Response {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn body_string(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

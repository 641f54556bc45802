//! Handlers for the testimonial pages: public listing, submission form,
//! and submission processing.
//!
//! Each handler converts the store failures it expects into a rendered
//! page itself; only template failures and malformed bodies propagate to
//! the [`AppError`](crate::error::AppError) boundary.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use ovation_core::stats::listing_stats;
use ovation_core::testimonial::LISTING_LIMIT;
use ovation_core::validation::{self, RawSubmission};
use ovation_db::store::StoreError;

use crate::error::AppResult;
use crate::extract::FormOrJson;
use crate::state::AppState;
use crate::views::{HomeContext, MessageContext, SubmitContext, TestimonialView};

const HOME_TITLE: &str = "Customer Testimonials";
const SUBMIT_TITLE: &str = "Share Your Experience";

const STORE_UNAVAILABLE_MSG: &str =
    "Database connection unavailable. Please make sure the database is running.";
const LIST_FAILED_MSG: &str = "Unable to load testimonials at this time.";

// ---------------------------------------------------------------------------
// GET /
// ---------------------------------------------------------------------------

/// Render the home page: up to 20 approved testimonials, newest first,
/// with count and average rating.
pub async fn list_testimonials(State(state): State<AppState>) -> AppResult<Response> {
    if !state.store.is_ready().await {
        return error_page(&state, STORE_UNAVAILABLE_MSG);
    }

    let records = match state.store.find_approved(LISTING_LIMIT).await {
        Ok(records) => records,
        Err(StoreError::Unavailable(reason)) => {
            tracing::error!(%reason, "Failed to fetch testimonials");
            return error_page(&state, STORE_UNAVAILABLE_MSG);
        }
        Err(err) => {
            tracing::error!(error = %err, "Failed to fetch testimonials");
            return error_page(&state, LIST_FAILED_MSG);
        }
    };

    let ratings: Vec<i16> = records.iter().map(|r| r.rating).collect();
    let context = HomeContext {
        title: HOME_TITLE,
        testimonials: records.iter().map(TestimonialView::from_record).collect(),
        stats: listing_stats(&ratings).into(),
    };

    let html = state.views.render("home", &context)?;
    Ok(Html(html).into_response())
}

// ---------------------------------------------------------------------------
// GET /submit
// ---------------------------------------------------------------------------

/// Render the empty submission form.
pub async fn show_form(State(state): State<AppState>) -> AppResult<Response> {
    let context = SubmitContext::new(SUBMIT_TITLE, Vec::new(), RawSubmission::default());
    let html = state.views.render("submit", &context)?;
    Ok(Html(html).into_response())
}

// ---------------------------------------------------------------------------
// POST /submit
// ---------------------------------------------------------------------------

/// Validate and persist a submission.
///
/// Invalid input re-renders the form with every violation and the raw
/// input echoed back, as a success status: redisplaying the form is not
/// itself an error response. Exactly one insert attempt is made per valid
/// submission; nothing is retried.
pub async fn submit_testimonial(
    State(state): State<AppState>,
    FormOrJson(raw): FormOrJson<RawSubmission>,
) -> AppResult<Response> {
    let input = match validation::validate(&raw) {
        Ok(input) => input,
        Err(errors) => {
            tracing::debug!(violations = errors.len(), "Submission failed validation");
            return form_page(&state, errors, raw);
        }
    };

    if !state.store.is_ready().await {
        return error_page(&state, STORE_UNAVAILABLE_MSG);
    }

    match state.store.insert(&input).await {
        Ok(record) => {
            tracing::info!(id = record.id, rating = record.rating, "Testimonial submitted");
            let context = MessageContext {
                title: "Thank You!",
                message: "Your testimonial has been submitted successfully!".into(),
            };
            let html = state.views.render("success", &context)?;
            Ok(Html(html).into_response())
        }
        Err(StoreError::Rejected(errors)) => {
            tracing::warn!(violations = errors.len(), "Store rejected submission shape");
            form_page(&state, errors, raw)
        }
        Err(StoreError::Unavailable(reason)) => {
            tracing::error!(%reason, "Failed to save testimonial");
            error_page(&state, STORE_UNAVAILABLE_MSG)
        }
    }
}

// ---------------------------------------------------------------------------
// Fallback
// ---------------------------------------------------------------------------

/// Render the not-found page for any unmatched route.
pub async fn not_found(State(state): State<AppState>) -> AppResult<Response> {
    let context = MessageContext {
        title: "Page Not Found",
        message: "The page you are looking for does not exist.".into(),
    };
    let html = state.views.render("404", &context)?;
    Ok((StatusCode::NOT_FOUND, Html(html)).into_response())
}

// ---------------------------------------------------------------------------
// Page helpers
// ---------------------------------------------------------------------------

/// The submission form with errors and the visitor's input echoed back.
fn form_page(
    state: &AppState,
    errors: Vec<ovation_core::testimonial::FieldError>,
    form_data: RawSubmission,
) -> AppResult<Response> {
    let context = SubmitContext::new(SUBMIT_TITLE, errors, form_data);
    let html = state.views.render("submit", &context)?;
    Ok(Html(html).into_response())
}

/// The generic error page with a failure status.
fn error_page(state: &AppState, message: &str) -> AppResult<Response> {
    let context = MessageContext {
        title: "Error",
        message: message.into(),
    };
    let html = state.views.render("error", &context)?;
    Ok((StatusCode::INTERNAL_SERVER_ERROR, Html(html)).into_response())
}

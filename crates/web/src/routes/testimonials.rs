//! Route definitions for the testimonial pages.

use axum::routing::get;
use axum::Router;

use crate::handlers::testimonials;
use crate::state::AppState;

/// Testimonial page routes.
///
/// ```text
/// GET  /        -> list_testimonials
/// GET  /submit  -> show_form
/// POST /submit  -> submit_testimonial
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(testimonials::list_testimonials))
        .route(
            "/submit",
            get(testimonials::show_form).post(testimonials::submit_testimonial),
        )
}

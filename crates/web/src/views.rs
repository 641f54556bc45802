//! The HTML view engine and template contexts.
//!
//! Templates are compiled once at startup from sources embedded in the
//! binary. No helper callbacks are registered with the engine: dates,
//! star strings, and truncation are computed by `ovation_core::format`
//! while the context is built, and stored-sanitized fields are emitted
//! with triple-stash since they are already HTML-escaped.

use handlebars::Handlebars;
use serde::Serialize;

use ovation_core::error::CoreError;
use ovation_core::format::{format_date, stars, truncate};
use ovation_core::stats::ListingStats;
use ovation_core::testimonial::{FieldError, RATING_MAX, RATING_MIN};
use ovation_core::validation::RawSubmission;
use ovation_db::models::testimonial::Testimonial;

/// Messages shown on the home page limit their preview to this many
/// characters.
const MESSAGE_PREVIEW_CHARS: usize = 280;

/// Compiled template registry. Built once at startup, shared via `Arc`.
pub struct ViewEngine {
    registry: Handlebars<'static>,
}

impl ViewEngine {
    pub fn new() -> Result<Self, CoreError> {
        let mut registry = Handlebars::new();

        let partials = [
            ("header", include_str!("../templates/partials/header.hbs")),
            ("footer", include_str!("../templates/partials/footer.hbs")),
        ];
        for (name, source) in partials {
            registry
                .register_partial(name, source)
                .map_err(|e| CoreError::Template(e.to_string()))?;
        }

        let templates = [
            ("home", include_str!("../templates/home.hbs")),
            ("submit", include_str!("../templates/submit.hbs")),
            ("success", include_str!("../templates/success.hbs")),
            ("error", include_str!("../templates/error.hbs")),
            ("404", include_str!("../templates/404.hbs")),
        ];
        for (name, source) in templates {
            registry
                .register_template_string(name, source)
                .map_err(|e| CoreError::Template(e.to_string()))?;
        }

        Ok(Self { registry })
    }

    pub fn render<T: Serialize>(&self, view: &str, context: &T) -> Result<String, CoreError> {
        self.registry
            .render(view, context)
            .map_err(|e| CoreError::Template(e.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Template contexts
// ---------------------------------------------------------------------------

/// Context for the `home` view.
#[derive(Debug, Serialize)]
pub struct HomeContext {
    pub title: &'static str,
    pub testimonials: Vec<TestimonialView>,
    pub stats: StatsView,
}

/// A testimonial prepared for display.
#[derive(Debug, Serialize)]
pub struct TestimonialView {
    pub name: String,
    pub company: String,
    pub position: String,
    pub rating: i16,
    pub stars: String,
    pub message: String,
    pub created_at: String,
}

impl TestimonialView {
    pub fn from_record(record: &Testimonial) -> Self {
        Self {
            name: record.name.clone(),
            company: record.company.clone(),
            position: record.position.clone(),
            rating: record.rating,
            stars: stars(record.rating),
            message: truncate(&record.message, MESSAGE_PREVIEW_CHARS),
            created_at: format_date(&record.created_at),
        }
    }
}

/// Stats with the mean pre-formatted to one decimal for display.
#[derive(Debug, Serialize)]
pub struct StatsView {
    pub total: usize,
    pub average_rating: String,
}

impl From<ListingStats> for StatsView {
    fn from(stats: ListingStats) -> Self {
        Self {
            total: stats.total,
            average_rating: format!("{:.1}", stats.average_rating),
        }
    }
}

/// Context for the `submit` view, both the empty form and re-renders
/// with errors and the visitor's raw input echoed back.
#[derive(Debug, Serialize)]
pub struct SubmitContext {
    pub title: &'static str,
    pub errors: Vec<FieldError>,
    pub form_data: RawSubmission,
    pub rating_options: Vec<RatingOption>,
}

impl SubmitContext {
    pub fn new(title: &'static str, errors: Vec<FieldError>, form_data: RawSubmission) -> Self {
        let selected = form_data
            .rating
            .as_deref()
            .and_then(|r| r.trim().parse::<i16>().ok());
        Self {
            title,
            errors,
            form_data,
            rating_options: rating_options(selected),
        }
    }
}

/// One star-rating radio button. Replaces the template engine's equality
/// helper: which option is checked is decided here, not in the template.
#[derive(Debug, Serialize)]
pub struct RatingOption {
    pub value: i16,
    pub selected: bool,
}

fn rating_options(selected: Option<i16>) -> Vec<RatingOption> {
    (RATING_MIN..=RATING_MAX)
        .map(|value| RatingOption {
            value,
            selected: selected == Some(value),
        })
        .collect()
}

/// Context for the `success`, `error`, and `404` views.
#[derive(Debug, Serialize)]
pub struct MessageContext {
    pub title: &'static str,
    pub message: String,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

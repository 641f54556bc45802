//! Testimonial field constraints, user-facing messages, and the
//! validated submission DTO.
//!
//! The bounds here are the single source of truth for the validation
//! pipeline; the database schema re-states them as named CHECK
//! constraints so a write the application failed to catch still maps
//! back to a field.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Field bounds
// ---------------------------------------------------------------------------

/// Minimum length of `name` after trimming (characters).
pub const NAME_MIN: usize = 2;
/// Maximum length of `name` after trimming (characters).
pub const NAME_MAX: usize = 100;
/// Maximum length of the optional `company` and `position` fields.
pub const AFFILIATION_MAX: usize = 100;
/// Inclusive rating bounds.
pub const RATING_MIN: i16 = 1;
pub const RATING_MAX: i16 = 5;
/// Minimum length of `message` after trimming (characters).
pub const MESSAGE_MIN: usize = 10;
/// Maximum length of `message` after trimming (characters).
pub const MESSAGE_MAX: usize = 1000;

/// Public listing is capped at this many records, newest first.
pub const LISTING_LIMIT: i64 = 20;

// ---------------------------------------------------------------------------
// User-facing field messages
// ---------------------------------------------------------------------------

pub const MSG_NAME: &str = "Name must be between 2 and 100 characters";
pub const MSG_EMAIL: &str = "Please enter a valid email address";
pub const MSG_COMPANY: &str = "Company name cannot exceed 100 characters";
pub const MSG_POSITION: &str = "Position cannot exceed 100 characters";
pub const MSG_RATING_REQUIRED: &str = "Rating is required";
pub const MSG_RATING_RANGE: &str = "Rating must be between 1 and 5";
pub const MSG_MESSAGE: &str = "Message must be between 10 and 1000 characters";

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

/// A single field-level validation failure, rendered next to the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// A fully validated, sanitized submission ready to persist.
///
/// Only the validation pipeline constructs this; `company` and `position`
/// are the empty string when the visitor left them blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewTestimonial {
    pub name: String,
    pub email: String,
    pub company: String,
    pub position: String,
    pub rating: i16,
    pub message: String,
}

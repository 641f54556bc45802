//! The submission validation pipeline.
//!
//! An ordered list of independent per-field checks. Every check runs;
//! violations are aggregated rather than short-circuited, so the form can
//! show the visitor everything that is wrong at once. Each field
//! contributes at most one error.
//!
//! Lengths are Unicode scalar counts measured after trimming and before
//! escaping.

use serde::{Deserialize, Deserializer, Serialize};
use validator::ValidateEmail;

use crate::sanitize::{escape_html, normalize_email};
use crate::testimonial::{
    FieldError, NewTestimonial, AFFILIATION_MAX, MESSAGE_MAX, MESSAGE_MIN, MSG_COMPANY, MSG_EMAIL,
    MSG_MESSAGE, MSG_NAME, MSG_POSITION, MSG_RATING_RANGE, MSG_RATING_REQUIRED, NAME_MAX, NAME_MIN,
    RATING_MAX, RATING_MIN,
};

/// A submission exactly as it arrived, before any validation.
///
/// All fields are optional so a partially filled form still deserializes;
/// missing fields fail their checks instead of failing extraction. The
/// struct is also serialized back into the form template so the visitor
/// can correct their input in place.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawSubmission {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    /// Arrives as a string from form encoding and as a number from JSON.
    #[serde(default, deserialize_with = "de_opt_string_or_number")]
    pub rating: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Accept either a string or a bare number for a field, keeping the raw
/// text for validation.
fn de_opt_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrNumber {
        Str(String),
        Int(i64),
        Float(f64),
    }

    Ok(Option::<StringOrNumber>::deserialize(deserializer)?.map(|v| match v {
        StringOrNumber::Str(s) => s,
        StringOrNumber::Int(n) => n.to_string(),
        StringOrNumber::Float(n) => n.to_string(),
    }))
}

/// Run the full pipeline over a raw submission.
///
/// Returns the sanitized submission, or every field violation found.
pub fn validate(raw: &RawSubmission) -> Result<NewTestimonial, Vec<FieldError>> {
    let name = check_name(raw.name.as_deref());
    let email = check_email(raw.email.as_deref());
    let company = check_optional(raw.company.as_deref(), "company", MSG_COMPANY);
    let position = check_optional(raw.position.as_deref(), "position", MSG_POSITION);
    let rating = check_rating(raw.rating.as_deref());
    let message = check_message(raw.message.as_deref());

    match (name, email, company, position, rating, message) {
        (Ok(name), Ok(email), Ok(company), Ok(position), Ok(rating), Ok(message)) => {
            Ok(NewTestimonial {
                name,
                email,
                company,
                position,
                rating,
                message,
            })
        }
        (name, email, company, position, rating, message) => {
            let mut errors = Vec::new();
            errors.extend(name.err());
            errors.extend(email.err());
            errors.extend(company.err());
            errors.extend(position.err());
            errors.extend(rating.err());
            errors.extend(message.err());
            Err(errors)
        }
    }
}

// ---------------------------------------------------------------------------
// Per-field checks
// ---------------------------------------------------------------------------

fn check_name(value: Option<&str>) -> Result<String, FieldError> {
    let trimmed = value.unwrap_or("").trim();
    let len = trimmed.chars().count();
    if len < NAME_MIN || len > NAME_MAX {
        return Err(FieldError::new("name", MSG_NAME));
    }
    Ok(escape_html(trimmed))
}

fn check_email(value: Option<&str>) -> Result<String, FieldError> {
    let trimmed = value.unwrap_or("").trim();
    if !trimmed.validate_email() {
        return Err(FieldError::new("email", MSG_EMAIL));
    }
    Ok(normalize_email(trimmed))
}

/// `company` and `position` share one rule: blank means absent (stored as
/// the empty string), present means at most [`AFFILIATION_MAX`] characters.
fn check_optional(value: Option<&str>, field: &str, message: &str) -> Result<String, FieldError> {
    let trimmed = value.unwrap_or("").trim();
    if trimmed.is_empty() {
        return Ok(String::new());
    }
    if trimmed.chars().count() > AFFILIATION_MAX {
        return Err(FieldError::new(field, message));
    }
    Ok(escape_html(trimmed))
}

fn check_rating(value: Option<&str>) -> Result<i16, FieldError> {
    let raw = match value {
        Some(s) if !s.trim().is_empty() => s.trim(),
        _ => return Err(FieldError::new("rating", MSG_RATING_REQUIRED)),
    };
    match raw.parse::<i16>() {
        Ok(n) if (RATING_MIN..=RATING_MAX).contains(&n) => Ok(n),
        _ => Err(FieldError::new("rating", MSG_RATING_RANGE)),
    }
}

fn check_message(value: Option<&str>) -> Result<String, FieldError> {
    let trimmed = value.unwrap_or("").trim();
    let len = trimmed.chars().count();
    if len < MESSAGE_MIN || len > MESSAGE_MAX {
        return Err(FieldError::new("message", MSG_MESSAGE));
    }
    Ok(escape_html(trimmed))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

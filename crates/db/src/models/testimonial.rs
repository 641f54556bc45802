//! Testimonial entity model.

use serde::Serialize;
use sqlx::FromRow;

use ovation_core::types::{DbId, Timestamp};

/// A row from the `testimonials` table.
///
/// `name`, `company`, `position`, and `message` are stored HTML-escaped;
/// `company` and `position` are the empty string when the visitor left
/// them blank. Rows are immutable once written.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Testimonial {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub company: String,
    pub position: String,
    pub rating: i16,
    pub message: String,
    pub is_approved: bool,
    pub created_at: Timestamp,
}

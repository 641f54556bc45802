//! Postgres-backed [`RecordStore`] implementation.

use async_trait::async_trait;

use ovation_core::testimonial::{
    FieldError, NewTestimonial, MSG_COMPANY, MSG_EMAIL, MSG_MESSAGE, MSG_NAME, MSG_POSITION,
    MSG_RATING_RANGE,
};

use crate::models::testimonial::Testimonial;
use crate::store::{RecordStore, StoreError};
use crate::DbPool;

/// Column list for `testimonials` queries. `position` is quoted because
/// it collides with the SQL keyword.
const COLUMNS: &str =
    "id, name, email, company, \"position\", rating, message, is_approved, created_at";

/// SQLSTATE for a CHECK constraint violation.
const CHECK_VIOLATION: &str = "23514";

/// Record store over the `testimonials` table.
pub struct PgRecordStore {
    pool: DbPool,
}

impl PgRecordStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecordStore for PgRecordStore {
    async fn find_approved(&self, limit: i64) -> Result<Vec<Testimonial>, StoreError> {
        let query = format!(
            "SELECT {COLUMNS} FROM testimonials \
             WHERE is_approved = TRUE \
             ORDER BY created_at DESC \
             LIMIT $1"
        );
        sqlx::query_as::<_, Testimonial>(&query)
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(classify_error)
    }

    async fn insert(&self, input: &NewTestimonial) -> Result<Testimonial, StoreError> {
        let query = format!(
            "INSERT INTO testimonials \
                (name, email, company, \"position\", rating, message) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Testimonial>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.company)
            .bind(&input.position)
            .bind(input.rating)
            .bind(&input.message)
            .fetch_one(&self.pool)
            .await
            .map_err(classify_error)
    }

    async fn is_ready(&self) -> bool {
        crate::health_check(&self.pool).await.is_ok()
    }
}

/// Classify a sqlx error into a [`StoreError`].
///
/// A CHECK violation on one of the named `ck_testimonials_*` constraints
/// is a shape rejection and maps back to the violated field; everything
/// else surfaces as the store being unavailable.
fn classify_error(err: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.code().as_deref() == Some(CHECK_VIOLATION) {
            let constraint = db_err.constraint().unwrap_or("unknown");
            if let Some(field_error) = constraint_field_error(constraint) {
                tracing::warn!(constraint, "Store rejected testimonial shape");
                return StoreError::Rejected(vec![field_error]);
            }
        }
    }
    tracing::error!(error = %err, "Record store error");
    StoreError::Unavailable(err.to_string())
}

/// Map a `ck_testimonials_<field>_*` constraint name to the field error
/// the validation pipeline would have produced for the same violation.
fn constraint_field_error(constraint: &str) -> Option<FieldError> {
    let suffix = constraint.strip_prefix("ck_testimonials_")?;
    let (field, message) = match suffix {
        "name_length" => ("name", MSG_NAME),
        "email_format" => ("email", MSG_EMAIL),
        "company_length" => ("company", MSG_COMPANY),
        "position_length" => ("position", MSG_POSITION),
        "rating_range" => ("rating", MSG_RATING_RANGE),
        "message_length" => ("message", MSG_MESSAGE),
        _ => return None,
    };
    Some(FieldError::new(field, message))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

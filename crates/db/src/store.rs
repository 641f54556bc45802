//! The record store collaborator interface.
//!
//! Handlers depend on `Arc<dyn RecordStore>` rather than a concrete pool,
//! so the store is an explicitly constructed, passed-in instance — and
//! integration tests can substitute an in-memory fake.

use async_trait::async_trait;

use ovation_core::testimonial::{FieldError, NewTestimonial};

use crate::models::testimonial::Testimonial;

/// How a store operation failed.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The store rejected the record's shape despite local validation
    /// passing. Carries field errors in the same form the validation
    /// pipeline produces, so the form can re-render identically.
    #[error("record store rejected the write")]
    Rejected(Vec<FieldError>),

    /// The store is unreachable or failed for reasons unrelated to the
    /// record itself. Never retried.
    #[error("record store unavailable: {0}")]
    Unavailable(String),
}

/// Find/insert operations against the testimonial store.
///
/// Records are never updated or deleted through this interface; approval
/// is an external administrative concern.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Up to `limit` approved testimonials, newest first.
    async fn find_approved(&self, limit: i64) -> Result<Vec<Testimonial>, StoreError>;

    /// Persist a validated submission, returning the stored row.
    async fn insert(&self, input: &NewTestimonial) -> Result<Testimonial, StoreError>;

    /// Whether the store is currently reachable.
    async fn is_ready(&self) -> bool;
}

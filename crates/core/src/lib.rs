//! Domain logic for the testimonial wall.
//!
//! Everything here is synchronous and pure: the validation pipeline,
//! sanitization, aggregate stats, and display formatting. Persistence and
//! HTTP concerns live in `ovation-db` and `ovation-web`.

pub mod error;
pub mod format;
pub mod sanitize;
pub mod stats;
pub mod testimonial;
pub mod types;
pub mod validation;

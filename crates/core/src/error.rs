//! Domain-level error type shared across crates.

/// Errors originating in domain logic or its immediate collaborators.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A value violates a domain constraint.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A view template failed to compile or render.
    #[error("Template error: {0}")]
    Template(String),

    /// Anything else that should never reach the user verbatim.
    #[error("Internal error: {0}")]
    Internal(String),
}

//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`HbnbError`]
//! via `#[from]`; there are no stringly-typed catch-all variants.

/// Top-level error returned by services and ports.
#[derive(Debug, thiserror::Error)]
pub enum HbnbError {
    /// The request payload broke a domain rule.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// A referenced record does not exist.
    #[error("record not found")]
    NotFound(#[from] NotFoundError),

    /// The storage backend failed.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Payload validation failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The body is absent, not JSON, or not a JSON object.
    #[error("Not a JSON")]
    NotAJson,

    /// A required key is absent from the payload.
    #[error("Missing {0}")]
    MissingField(&'static str),

    /// A known key carries a value of the wrong JSON type.
    #[error("Invalid value for {0}")]
    InvalidField(String),
}

/// A record lookup by id resolved to nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    /// Kind of the missing record (`"Place"`, `"User"`, …).
    pub entity: &'static str,
    /// The id as it was supplied by the caller.
    pub id: String,
}

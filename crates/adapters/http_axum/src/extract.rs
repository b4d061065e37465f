//! Request body extraction.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use serde_json::Value;

use hbnb_domain::error::ValidationError;
use hbnb_domain::payload::{self, Payload};

/// A JSON body whose rejection is handled by the endpoint itself.
pub(crate) type JsonBody = Result<Json<Value>, JsonRejection>;

/// Accept a create or update body. A missing body, a body that is not JSON
/// and JSON that is not an object are all rejected alike.
pub(crate) fn payload(body: JsonBody) -> Result<Payload, ValidationError> {
    match body {
        Ok(Json(value)) => payload::from_value(value),
        Err(rejection) => {
            tracing::debug!(%rejection, "rejected request body");
            Err(ValidationError::NotAJson)
        }
    }
}

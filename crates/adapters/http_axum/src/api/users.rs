//! JSON REST handlers specific to users.

use axum::extract::State;

use hbnb_app::ports::Storage;
use hbnb_domain::user::User;

use super::records::CreateResponse;
use crate::error::ApiError;
use crate::extract::{self, JsonBody};
use crate::state::AppState;

/// `POST /api/v1/users`
///
/// `email` and `password` are required, checked in that order.
pub async fn create<S: Storage>(
    State(state): State<AppState<S>>,
    body: JsonBody,
) -> Result<CreateResponse<User>, ApiError> {
    let payload = extract::payload(body)?;
    let created = state.records.create_user(payload).await?;
    Ok(CreateResponse::created(created))
}

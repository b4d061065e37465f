//! JSON REST handlers specific to states.

use axum::extract::State;

use hbnb_app::ports::Storage;
use hbnb_domain::state::State as StateRecord;

use super::records::CreateResponse;
use crate::error::ApiError;
use crate::extract::{self, JsonBody};
use crate::state::AppState;

/// `POST /api/v1/states`
pub async fn create<S: Storage>(
    State(state): State<AppState<S>>,
    body: JsonBody,
) -> Result<CreateResponse<StateRecord>, ApiError> {
    let payload = extract::payload(body)?;
    let created = state.records.create_state(payload).await?;
    Ok(CreateResponse::created(created))
}

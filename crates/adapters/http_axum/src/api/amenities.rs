//! JSON REST handlers specific to amenities.

use axum::extract::State;

use hbnb_app::ports::Storage;
use hbnb_domain::amenity::Amenity;

use super::records::CreateResponse;
use crate::error::ApiError;
use crate::extract::{self, JsonBody};
use crate::state::AppState;

/// `POST /api/v1/amenities`
pub async fn create<S: Storage>(
    State(state): State<AppState<S>>,
    body: JsonBody,
) -> Result<CreateResponse<Amenity>, ApiError> {
    let payload = extract::payload(body)?;
    let created = state.records.create_amenity(payload).await?;
    Ok(CreateResponse::created(created))
}

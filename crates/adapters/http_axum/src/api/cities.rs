//! JSON REST handlers specific to cities.

use axum::extract::{Path, State};

use hbnb_app::ports::Storage;
use hbnb_domain::city::City;
use hbnb_domain::state::State as StateRecord;

use super::records::CreateResponse;
use crate::error::ApiError;
use crate::extract::{self, JsonBody};
use crate::state::AppState;

/// `POST /api/v1/states/{state_id}/cities`
pub async fn create<S: Storage>(
    State(state): State<AppState<S>>,
    Path(state_id): Path<String>,
    body: JsonBody,
) -> Result<CreateResponse<City>, ApiError> {
    let parent = state.records.get::<StateRecord>(&state_id).await?;
    let payload = extract::payload(body)?;
    let created = state.records.create_city(&parent, payload).await?;
    Ok(CreateResponse::created(created))
}

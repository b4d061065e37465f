//! JSON REST handlers specific to reviews.

use axum::extract::{Path, State};

use hbnb_app::ports::Storage;
use hbnb_domain::place::Place;
use hbnb_domain::review::Review;

use super::records::CreateResponse;
use crate::error::ApiError;
use crate::extract::{self, JsonBody};
use crate::state::AppState;

/// `POST /api/v1/places/{place_id}/reviews`
///
/// The author named by `user_id` must exist before `text` is checked.
pub async fn create<S: Storage>(
    State(state): State<AppState<S>>,
    Path(place_id): Path<String>,
    body: JsonBody,
) -> Result<CreateResponse<Review>, ApiError> {
    let place = state.records.get::<Place>(&place_id).await?;
    let payload = extract::payload(body)?;
    let created = state.records.create_review(&place, payload).await?;
    Ok(CreateResponse::created(created))
}

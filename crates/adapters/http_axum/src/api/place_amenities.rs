//! JSON REST handlers for the amenities offered by a place.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use hbnb_app::ports::Storage;
use hbnb_app::services::place_service::AmenityLink;
use hbnb_domain::amenity::Amenity;

use super::records::{DeleteResponse, ListResponse};
use crate::error::ApiError;
use crate::representation::Representation;
use crate::state::AppState;

/// Possible responses from the link endpoint.
pub enum LinkResponse {
    Created(Json<Representation<Amenity>>),
    Existing(Json<Representation<Amenity>>),
}

impl IntoResponse for LinkResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
            Self::Existing(json) => json.into_response(),
        }
    }
}

/// `GET /api/v1/places/{place_id}/amenities`
pub async fn list<S: Storage>(
    State(state): State<AppState<S>>,
    Path(place_id): Path<String>,
) -> Result<ListResponse<Amenity>, ApiError> {
    let amenities = state.places.amenities_of(&place_id).await?;
    Ok(ListResponse::Ok(Json(Representation::many(amenities))))
}

/// `POST /api/v1/places/{place_id}/amenities/{amenity_id}`
pub async fn link<S: Storage>(
    State(state): State<AppState<S>>,
    Path((place_id, amenity_id)): Path<(String, String)>,
) -> Result<LinkResponse, ApiError> {
    let response = match state.places.link_amenity(&place_id, &amenity_id).await? {
        AmenityLink::Created(amenity) => LinkResponse::Created(Json(amenity.into())),
        AmenityLink::Existing(amenity) => LinkResponse::Existing(Json(amenity.into())),
    };
    Ok(response)
}

/// `DELETE /api/v1/places/{place_id}/amenities/{amenity_id}`
pub async fn unlink<S: Storage>(
    State(state): State<AppState<S>>,
    Path((place_id, amenity_id)): Path<(String, String)>,
) -> Result<DeleteResponse, ApiError> {
    state.places.unlink_amenity(&place_id, &amenity_id).await?;
    Ok(DeleteResponse::Ok)
}

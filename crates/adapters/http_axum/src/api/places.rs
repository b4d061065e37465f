//! JSON REST handlers specific to places: creation and search.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use hbnb_app::ports::Storage;
use hbnb_domain::city::City;
use hbnb_domain::place::Place;
use hbnb_domain::search::PlaceQuery;

use super::records::CreateResponse;
use crate::error::ApiError;
use crate::extract::{self, JsonBody};
use crate::representation::Representation;
use crate::state::AppState;

/// `POST /api/v1/cities/{city_id}/places`
///
/// `user_id` and `name` are required, checked in that order, before the
/// host is looked up.
pub async fn create<S: Storage>(
    State(state): State<AppState<S>>,
    Path(city_id): Path<String>,
    body: JsonBody,
) -> Result<CreateResponse<Place>, ApiError> {
    let city = state.records.get::<City>(&city_id).await?;
    let payload = extract::payload(body)?;
    let created = state.records.create_place(&city, payload).await?;
    Ok(CreateResponse::created(created))
}

#[derive(Serialize)]
struct SearchError {
    error: &'static str,
}

/// Possible responses from the search endpoint.
///
/// A rejected body is answered with its own error document rather than the
/// shared [`ApiError`] one.
pub enum SearchResponse {
    Ok(Json<Vec<Representation<Place>>>),
    NotAJson,
}

impl IntoResponse for SearchResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
            Self::NotAJson => (
                StatusCode::BAD_REQUEST,
                Json(SearchError {
                    error: "Not a JSON",
                }),
            )
                .into_response(),
        }
    }
}

/// `POST /api/v1/places_search`
///
/// The body must be a JSON object; its lists are optional.
pub async fn search<S: Storage>(
    State(state): State<AppState<S>>,
    body: JsonBody,
) -> Result<SearchResponse, ApiError> {
    let Some(query) = parse_query(body) else {
        return Ok(SearchResponse::NotAJson);
    };
    let places = state.places.search(&query).await?;
    Ok(SearchResponse::Ok(Json(Representation::many(places))))
}

fn parse_query(body: JsonBody) -> Option<PlaceQuery> {
    let value = match body {
        Ok(Json(value)) if value.is_object() => value,
        Ok(_) => return None,
        Err(rejection) => {
            tracing::debug!(%rejection, "rejected search body");
            return None;
        }
    };
    match serde_json::from_value(value) {
        Ok(query) => Some(query),
        Err(err) => {
            tracing::debug!(%err, "malformed search criteria");
            None
        }
    }
}

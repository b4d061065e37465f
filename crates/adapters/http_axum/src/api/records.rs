//! Handlers shared by every record type: list, get, update, delete.
//!
//! They are mounted once per record type with the record named by turbofish,
//! e.g. `records::get::<S, Amenity>`.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use hbnb_app::ports::{ChildRepository, Repository, Storage};
use hbnb_domain::record::{Child, Record};

use crate::error::ApiError;
use crate::extract::{self, JsonBody};
use crate::representation::Representation;
use crate::state::AppState;

/// Possible responses from a list endpoint.
pub enum ListResponse<R> {
    Ok(Json<Vec<Representation<R>>>),
}

impl<R: Serialize> IntoResponse for ListResponse<R> {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from a get or update endpoint.
pub enum GetResponse<R> {
    Ok(Json<Representation<R>>),
}

impl<R: Serialize> IntoResponse for GetResponse<R> {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from a create endpoint.
pub enum CreateResponse<R> {
    Created(Json<Representation<R>>),
}

impl<R: Record> CreateResponse<R> {
    pub(crate) fn created(record: R) -> Self {
        Self::Created(Json(record.into()))
    }
}

impl<R: Serialize> IntoResponse for CreateResponse<R> {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from a delete endpoint.
pub enum DeleteResponse {
    /// Rendered as an empty JSON object.
    Ok,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok => (StatusCode::OK, Json(serde_json::Map::new())).into_response(),
        }
    }
}

/// `GET /api/v1/<records>`
pub async fn list<S, R>(State(state): State<AppState<S>>) -> Result<ListResponse<R>, ApiError>
where
    S: Storage + Repository<R>,
    R: Record,
{
    let records = state.records.list::<R>().await?;
    Ok(ListResponse::Ok(Json(Representation::many(records))))
}

/// `GET /api/v1/<parents>/{id}/<records>`
pub async fn list_children<S, R>(
    State(state): State<AppState<S>>,
    Path(parent_id): Path<String>,
) -> Result<ListResponse<R>, ApiError>
where
    S: Storage + ChildRepository<R> + Repository<R::Parent>,
    R: Child,
{
    let records = state.records.list_children::<R>(&parent_id).await?;
    Ok(ListResponse::Ok(Json(Representation::many(records))))
}

/// `GET /api/v1/<records>/{id}`
pub async fn get<S, R>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> Result<GetResponse<R>, ApiError>
where
    S: Storage + Repository<R>,
    R: Record,
{
    let record = state.records.get::<R>(&id).await?;
    Ok(GetResponse::Ok(Json(record.into())))
}

/// `PUT /api/v1/<records>/{id}`
///
/// An unknown id is reported before a malformed body.
pub async fn update<S, R>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
    body: JsonBody,
) -> Result<GetResponse<R>, ApiError>
where
    S: Storage + Repository<R>,
    R: Record,
{
    let payload = match extract::payload(body) {
        Ok(payload) => payload,
        Err(err) => {
            state.records.get::<R>(&id).await?;
            return Err(err.into());
        }
    };
    let record = state.records.update::<R>(&id, payload).await?;
    Ok(GetResponse::Ok(Json(record.into())))
}

/// `DELETE /api/v1/<records>/{id}`
pub async fn delete<S, R>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    S: Storage + Repository<R>,
    R: Record,
{
    state.records.delete::<R>(&id).await?;
    Ok(DeleteResponse::Ok)
}

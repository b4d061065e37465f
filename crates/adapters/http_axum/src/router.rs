//! Axum router assembly.

use axum::Router;
use axum::http::Uri;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use hbnb_app::ports::Storage;
use hbnb_domain::error::{HbnbError, NotFoundError};

use crate::error::ApiError;
use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Nests the API routes under `/api/v1` and answers every other path with
/// the JSON not-found body. Includes a [`TraceLayer`] that logs each HTTP
/// request/response at the `DEBUG` level using the `tracing` ecosystem, and
/// the given [`CorsLayer`].
pub fn build<S: Storage>(state: AppState<S>, cors: CorsLayer) -> Router {
    Router::new()
        .nest("/api/v1", crate::api::routes())
        .fallback(not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn not_found(uri: Uri) -> ApiError {
    HbnbError::from(NotFoundError {
        entity: "Route",
        id: uri.path().to_string(),
    })
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use hbnb_app::ports::{ChildRepository, Repository};
    use hbnb_app::services::place_service::PlaceService;
    use hbnb_app::services::record_service::RecordService;
    use hbnb_domain::amenity::Amenity;
    use hbnb_domain::city::City;
    use hbnb_domain::place::Place;
    use hbnb_domain::record::{Child, Record};
    use hbnb_domain::review::Review;
    use hbnb_domain::state::State;
    use hbnb_domain::user::User;
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    #[derive(Clone, Copy)]
    struct StubStorage;

    macro_rules! stub {
        (child $record:ty) => {
            stub!($record);

            impl ChildRepository<$record> for StubStorage {
                async fn find_by_parent(
                    &self,
                    _parent: <<$record as Child>::Parent as Record>::Id,
                ) -> Result<Vec<$record>, HbnbError> {
                    Ok(vec![])
                }
            }
        };
        ($record:ty) => {
            impl Repository<$record> for StubStorage {
                async fn create(&self, record: $record) -> Result<$record, HbnbError> {
                    Ok(record)
                }
                async fn get_by_id(
                    &self,
                    _id: <$record as Record>::Id,
                ) -> Result<Option<$record>, HbnbError> {
                    Ok(None)
                }
                async fn get_all(&self) -> Result<Vec<$record>, HbnbError> {
                    Ok(vec![])
                }
                async fn update(&self, record: $record) -> Result<$record, HbnbError> {
                    Ok(record)
                }
                async fn delete(&self, _id: <$record as Record>::Id) -> Result<(), HbnbError> {
                    Ok(())
                }
                async fn count(&self) -> Result<u64, HbnbError> {
                    Ok(0)
                }
            }
        };
    }

    stub!(State);
    stub!(Amenity);
    stub!(User);
    stub!(child City);
    stub!(child Place);
    stub!(child Review);

    fn app() -> Router {
        let state = AppState::new(
            RecordService::new(StubStorage),
            PlaceService::new(StubStorage),
        );
        build(state, CorsLayer::permissive())
    }

    async fn call(method: &str, uri: &str) -> (StatusCode, Value) {
        let response = app()
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn should_return_ok_when_status_called() {
        let (status, body) = call("GET", "/api/v1/status").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"status": "OK"}));
    }

    #[tokio::test]
    async fn should_return_json_not_found_for_unknown_route() {
        let (status, body) = call("GET", "/api/v1/nowhere").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"error": "Not found"}));
    }

    #[tokio::test]
    async fn should_return_not_found_for_missing_record() {
        let (status, body) = call("GET", "/api/v1/states/not-a-uuid").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"error": "Not found"}));
    }

    #[tokio::test]
    async fn should_report_missing_record_before_missing_body_on_update() {
        let (status, _) = call("PUT", "/api/v1/amenities/not-a-uuid").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_answer_search_without_body_with_inline_error() {
        let (status, body) = call("POST", "/api/v1/places_search").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "Not a JSON"}));
    }

    #[tokio::test]
    async fn should_reject_create_without_body() {
        let (status, body) = call("POST", "/api/v1/states").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({"error": "Bad Request", "description": "Not a JSON"})
        );
    }

    #[tokio::test]
    async fn should_list_empty_collection() {
        let (status, body) = call("GET", "/api/v1/users").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }
}

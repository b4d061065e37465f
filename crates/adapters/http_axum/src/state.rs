//! Shared application state for axum handlers.

use std::sync::Arc;

use hbnb_app::ports::Storage;
use hbnb_app::services::place_service::PlaceService;
use hbnb_app::services::record_service::RecordService;

/// Application state shared across all axum handlers.
///
/// Generic over the storage to avoid dynamic dispatch. `Clone` is
/// implemented manually so the storage itself does not need to be `Clone`.
pub struct AppState<S> {
    /// Record CRUD service.
    pub records: Arc<RecordService<S>>,
    /// Place search and amenity links.
    pub places: Arc<PlaceService<S>>,
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            records: Arc::clone(&self.records),
            places: Arc::clone(&self.places),
        }
    }
}

impl<S: Storage> AppState<S> {
    /// Create a new application state from service instances.
    pub fn new(records: RecordService<S>, places: PlaceService<S>) -> Self {
        Self {
            records: Arc::new(records),
            places: Arc::new(places),
        }
    }
}

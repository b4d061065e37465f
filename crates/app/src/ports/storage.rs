//! Storage port: repository traits for persistence.
//!
//! Every record type is persisted through the same [`Repository`] shape;
//! record types owned by a parent additionally support [`ChildRepository`].
//! A single storage handle implements all of them, which [`Storage`]
//! captures as one bound.

use std::future::Future;

use hbnb_domain::amenity::Amenity;
use hbnb_domain::city::City;
use hbnb_domain::error::HbnbError;
use hbnb_domain::place::Place;
use hbnb_domain::record::{Child, Record};
use hbnb_domain::review::Review;
use hbnb_domain::state::State;
use hbnb_domain::user::User;

/// Repository for persisting and querying records of type `R`.
pub trait Repository<R: Record> {
    /// Insert a new record.
    fn create(&self, record: R) -> impl Future<Output = Result<R, HbnbError>> + Send;

    /// Get a record by its unique identifier.
    fn get_by_id(&self, id: R::Id) -> impl Future<Output = Result<Option<R>, HbnbError>> + Send;

    /// Get every record, in storage order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<R>, HbnbError>> + Send;

    /// Overwrite an existing record.
    fn update(&self, record: R) -> impl Future<Output = Result<R, HbnbError>> + Send;

    /// Delete a record by its unique identifier.
    fn delete(&self, id: R::Id) -> impl Future<Output = Result<(), HbnbError>> + Send;

    /// Number of stored records.
    fn count(&self) -> impl Future<Output = Result<u64, HbnbError>> + Send;
}

/// Scoped listing for records owned by a parent.
pub trait ChildRepository<R: Child>: Repository<R> {
    /// Get every record owned by `parent`.
    fn find_by_parent(
        &self,
        parent: <R::Parent as Record>::Id,
    ) -> impl Future<Output = Result<Vec<R>, HbnbError>> + Send;
}

/// A storage handle able to persist every record type.
pub trait Storage:
    Repository<State>
    + Repository<Amenity>
    + Repository<User>
    + ChildRepository<City>
    + ChildRepository<Place>
    + ChildRepository<Review>
    + Send
    + Sync
    + 'static
{
}

impl<T> Storage for T where
    T: Repository<State>
        + Repository<Amenity>
        + Repository<User>
        + ChildRepository<City>
        + ChildRepository<Place>
        + ChildRepository<Review>
        + Send
        + Sync
        + 'static
{
}

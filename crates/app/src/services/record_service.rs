//! Record service: CRUD use-cases shared by every record type.
//!
//! Reading, updating and deleting look the same for every record, so they are
//! written once against [`Record`]. Creation differs per type (required keys,
//! parent links, referenced users) and gets one method per record.

use serde::Serialize;

use hbnb_domain::amenity::Amenity;
use hbnb_domain::city::City;
use hbnb_domain::error::HbnbError;
use hbnb_domain::payload::{self, Payload};
use hbnb_domain::place::Place;
use hbnb_domain::record::{Child, Record};
use hbnb_domain::review::Review;
use hbnb_domain::state::State;
use hbnb_domain::time::now;
use hbnb_domain::user::User;

use super::fetch;
use crate::ports::{ChildRepository, Repository, Storage};

/// Number of stored records per type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub amenities: u64,
    pub cities: u64,
    pub places: u64,
    pub reviews: u64,
    pub states: u64,
    pub users: u64,
}

/// Application service for record CRUD operations.
pub struct RecordService<S> {
    storage: S,
}

impl<S> RecordService<S> {
    /// Create a new service backed by the given storage.
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Look up a record by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] when no record with `id` exists,
    /// or a storage error.
    #[tracing::instrument(skip(self), fields(kind = R::KIND))]
    pub async fn get<R>(&self, id: &str) -> Result<R, HbnbError>
    where
        R: Record,
        S: Repository<R>,
    {
        fetch::<S, R>(&self.storage, id).await
    }

    /// List every record of a type.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list<R>(&self) -> Result<Vec<R>, HbnbError>
    where
        R: Record,
        S: Repository<R>,
    {
        self.storage.get_all().await
    }

    /// List the records owned by the parent identified by `parent_id`.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] when the parent does not exist,
    /// or a storage error.
    #[tracing::instrument(skip(self), fields(kind = R::KIND))]
    pub async fn list_children<R>(&self, parent_id: &str) -> Result<Vec<R>, HbnbError>
    where
        R: Child,
        S: ChildRepository<R> + Repository<R::Parent>,
    {
        let parent = fetch::<S, R::Parent>(&self.storage, parent_id).await?;
        <S as ChildRepository<R>>::find_by_parent(&self.storage, parent.id()).await
    }

    /// Apply an update payload to an existing record.
    ///
    /// Protected keys are dropped, unknown keys are kept as extra attributes
    /// and `updated_at` is refreshed.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] if the record does not exist,
    /// [`HbnbError::Validation`] on a mistyped known key, or a storage error.
    #[tracing::instrument(skip(self, payload), fields(kind = R::KIND))]
    pub async fn update<R>(&self, id: &str, payload: Payload) -> Result<R, HbnbError>
    where
        R: Record,
        S: Repository<R>,
    {
        let mut record = fetch::<S, R>(&self.storage, id).await?;
        record.merge(payload)?;
        record.touch(now());
        self.storage.update(record).await
    }

    /// Delete a record by id.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] if the record does not exist,
    /// or a storage error.
    #[tracing::instrument(skip(self), fields(kind = R::KIND))]
    pub async fn delete<R>(&self, id: &str) -> Result<(), HbnbError>
    where
        R: Record,
        S: Repository<R>,
    {
        let record = fetch::<S, R>(&self.storage, id).await?;
        self.storage.delete(record.id()).await
    }

    /// Create a state.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::Validation`] when `name` is missing,
    /// or a storage error.
    #[tracing::instrument(skip_all)]
    pub async fn create_state(&self, payload: Payload) -> Result<State, HbnbError>
    where
        S: Repository<State>,
    {
        let state = State::from_payload(payload)?;
        self.storage.create(state).await
    }

    /// Create a city inside `state`.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::Validation`] when `name` is missing,
    /// or a storage error.
    #[tracing::instrument(skip_all, fields(state_id = %state.id))]
    pub async fn create_city(&self, state: &State, payload: Payload) -> Result<City, HbnbError>
    where
        S: Repository<City>,
    {
        let city = City::from_payload(state.id, payload)?;
        self.storage.create(city).await
    }

    /// Create an amenity.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::Validation`] when `name` is missing,
    /// or a storage error.
    #[tracing::instrument(skip_all)]
    pub async fn create_amenity(&self, payload: Payload) -> Result<Amenity, HbnbError>
    where
        S: Repository<Amenity>,
    {
        let amenity = Amenity::from_payload(payload)?;
        self.storage.create(amenity).await
    }

    /// Create a user.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::Validation`] when `email` or `password` is
    /// missing, or a storage error.
    #[tracing::instrument(skip_all)]
    pub async fn create_user(&self, payload: Payload) -> Result<User, HbnbError>
    where
        S: Repository<User>,
    {
        let user = User::from_payload(payload)?;
        self.storage.create(user).await
    }

    /// Create a place inside `city`, hosted by the user named in the payload.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::Validation`] when `user_id` or `name` is missing,
    /// [`HbnbError::NotFound`] when the user does not exist, or a storage
    /// error.
    #[tracing::instrument(skip_all, fields(city_id = %city.id))]
    pub async fn create_place(&self, city: &City, payload: Payload) -> Result<Place, HbnbError>
    where
        S: Repository<User> + Repository<Place>,
    {
        let user_ref = payload::reference(&payload, "user_id")?;
        payload::ensure_present(&payload, "name")?;
        let user = fetch::<S, User>(&self.storage, &user_ref).await?;

        let place = Place::from_payload(city.id, user.id, payload)?;
        <S as Repository<Place>>::create(&self.storage, place).await
    }

    /// Create a review of `place`, written by the user named in the payload.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::Validation`] when `user_id` or `text` is missing,
    /// [`HbnbError::NotFound`] when the user does not exist, or a storage
    /// error.
    #[tracing::instrument(skip_all, fields(place_id = %place.id))]
    pub async fn create_review(&self, place: &Place, payload: Payload) -> Result<Review, HbnbError>
    where
        S: Repository<User> + Repository<Review>,
    {
        let user_ref = payload::reference(&payload, "user_id")?;
        let user = fetch::<S, User>(&self.storage, &user_ref).await?;

        let review = Review::from_payload(place.id, user.id, payload)?;
        <S as Repository<Review>>::create(&self.storage, review).await
    }

    /// Count the stored records of every type.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repositories.
    pub async fn stats(&self) -> Result<Stats, HbnbError>
    where
        S: Storage,
    {
        Ok(Stats {
            amenities: <S as Repository<Amenity>>::count(&self.storage).await?,
            cities: <S as Repository<City>>::count(&self.storage).await?,
            places: <S as Repository<Place>>::count(&self.storage).await?,
            reviews: <S as Repository<Review>>::count(&self.storage).await?,
            states: <S as Repository<State>>::count(&self.storage).await?,
            users: <S as Repository<User>>::count(&self.storage).await?,
        })
    }
}

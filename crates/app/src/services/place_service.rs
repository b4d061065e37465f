//! Place service: search across the geography and place/amenity links.

use hbnb_domain::amenity::Amenity;
use hbnb_domain::city::City;
use hbnb_domain::error::{HbnbError, NotFoundError};
use hbnb_domain::place::Place;
use hbnb_domain::search::{self, PlaceQuery};
use hbnb_domain::state::State;
use hbnb_domain::time::now;

use super::{fetch, lookup};
use crate::ports::{ChildRepository, Repository, Storage};

/// Outcome of linking an amenity to a place.
#[derive(Debug, Clone, PartialEq)]
pub enum AmenityLink {
    /// The link was added.
    Created(Amenity),
    /// The place already offered the amenity.
    Existing(Amenity),
}

/// Application service for place search and amenity links.
pub struct PlaceService<S> {
    storage: S,
}

impl<S: Storage> PlaceService<S> {
    /// Create a new service backed by the given storage.
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Search places by state, city and amenity criteria.
    ///
    /// Without state or city criteria every place is a candidate; otherwise
    /// the candidates are the places of the resolved states' cities plus the
    /// places of the resolved cities, with unknown ids skipped. Candidates
    /// are de-duplicated and must offer every requested amenity.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repositories.
    #[tracing::instrument(skip(self))]
    pub async fn search(&self, query: &PlaceQuery) -> Result<Vec<Place>, HbnbError> {
        let candidates = if query.is_unscoped() {
            <S as Repository<Place>>::get_all(&self.storage).await?
        } else {
            let mut candidates = Vec::new();
            for state_id in &query.states {
                let Some(state) = lookup::<S, State>(&self.storage, state_id).await? else {
                    continue;
                };
                let cities =
                    <S as ChildRepository<City>>::find_by_parent(&self.storage, state.id).await?;
                for city in cities {
                    candidates.extend(
                        <S as ChildRepository<Place>>::find_by_parent(&self.storage, city.id)
                            .await?,
                    );
                }
            }
            for city_id in &query.cities {
                let Some(city) = lookup::<S, City>(&self.storage, city_id).await? else {
                    continue;
                };
                candidates.extend(
                    <S as ChildRepository<Place>>::find_by_parent(&self.storage, city.id).await?,
                );
            }
            candidates
        };

        let places = search::dedup_by_id(candidates);
        let Some(required) = query.amenity_ids() else {
            return Ok(Vec::new());
        };
        let places = search::retain_with_amenities(places, &required);
        tracing::debug!(count = places.len(), "place search complete");
        Ok(places)
    }

    /// List the amenities linked to a place. Dangling links are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] when the place does not exist,
    /// or a storage error.
    #[tracing::instrument(skip(self))]
    pub async fn amenities_of(&self, place_id: &str) -> Result<Vec<Amenity>, HbnbError> {
        let place = fetch::<S, Place>(&self.storage, place_id).await?;
        let mut amenities = Vec::with_capacity(place.amenity_ids.len());
        for amenity_id in place.amenity_ids {
            if let Some(amenity) =
                <S as Repository<Amenity>>::get_by_id(&self.storage, amenity_id).await?
            {
                amenities.push(amenity);
            }
        }
        Ok(amenities)
    }

    /// Link an amenity to a place.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] when the place or the amenity does not
    /// exist, or a storage error.
    #[tracing::instrument(skip(self))]
    pub async fn link_amenity(
        &self,
        place_id: &str,
        amenity_id: &str,
    ) -> Result<AmenityLink, HbnbError> {
        let mut place = fetch::<S, Place>(&self.storage, place_id).await?;
        let amenity = fetch::<S, Amenity>(&self.storage, amenity_id).await?;

        if !place.link_amenity(amenity.id) {
            return Ok(AmenityLink::Existing(amenity));
        }
        place.updated_at = now();
        <S as Repository<Place>>::update(&self.storage, place).await?;
        Ok(AmenityLink::Created(amenity))
    }

    /// Remove the link between a place and an amenity.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] when the place or the amenity does not
    /// exist or when they are not linked, or a storage error.
    #[tracing::instrument(skip(self))]
    pub async fn unlink_amenity(&self, place_id: &str, amenity_id: &str) -> Result<(), HbnbError> {
        let mut place = fetch::<S, Place>(&self.storage, place_id).await?;
        let amenity = fetch::<S, Amenity>(&self.storage, amenity_id).await?;

        if !place.unlink_amenity(amenity.id) {
            return Err(NotFoundError {
                entity: "Amenity link",
                id: format!("{place_id}/{amenity_id}"),
            }
            .into());
        }
        place.updated_at = now();
        <S as Repository<Place>>::update(&self.storage, place).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::memory::MemoryStorage;
    use hbnb_domain::id::{CityId, UserId};

    struct Fixture {
        storage: MemoryStorage,
        svc: PlaceService<MemoryStorage>,
    }

    impl Fixture {
        fn new() -> Self {
            let storage = MemoryStorage::default();
            let svc = PlaceService::new(storage.clone());
            Self { storage, svc }
        }

        async fn state(&self, name: &str) -> State {
            <MemoryStorage as Repository<State>>::create(&self.storage, State::new(name))
                .await
                .unwrap()
        }

        async fn city(&self, state: &State, name: &str) -> City {
            <MemoryStorage as Repository<City>>::create(&self.storage, City::new(state.id, name))
                .await
                .unwrap()
        }

        async fn amenity(&self, name: &str) -> Amenity {
            <MemoryStorage as Repository<Amenity>>::create(&self.storage, Amenity::new(name))
                .await
                .unwrap()
        }

        async fn place(&self, city: &City, name: &str, amenities: &[&Amenity]) -> Place {
            let mut place = Place::new(city.id, UserId::new(), name);
            for amenity in amenities {
                place.link_amenity(amenity.id);
            }
            <MemoryStorage as Repository<Place>>::create(&self.storage, place)
                .await
                .unwrap()
        }
    }

    fn names(places: &[Place]) -> Vec<String> {
        let mut names: Vec<String> = places.iter().map(|p| p.name.clone()).collect();
        names.sort();
        names
    }

    #[tokio::test]
    async fn should_return_every_place_when_query_is_empty() {
        let fx = Fixture::new();
        let texas = fx.state("Texas").await;
        let austin = fx.city(&texas, "Austin").await;
        fx.place(&austin, "Loft", &[]).await;
        fx.place(&austin, "Cabin", &[]).await;

        let result = fx.svc.search(&PlaceQuery::default()).await.unwrap();
        assert_eq!(names(&result), vec!["Cabin", "Loft"]);
    }

    #[tokio::test]
    async fn should_return_place_once_when_reachable_via_state_and_city() {
        let fx = Fixture::new();
        let texas = fx.state("Texas").await;
        let austin = fx.city(&texas, "Austin").await;
        fx.place(&austin, "Loft", &[]).await;

        let query = PlaceQuery {
            states: vec![texas.id.to_string()],
            cities: vec![austin.id.to_string()],
            ..PlaceQuery::default()
        };
        let result = fx.svc.search(&query).await.unwrap();
        assert_eq!(names(&result), vec!["Loft"]);
    }

    #[tokio::test]
    async fn should_union_states_and_cities_and_skip_unknown_ids() {
        let fx = Fixture::new();
        let texas = fx.state("Texas").await;
        let ohio = fx.state("Ohio").await;
        let austin = fx.city(&texas, "Austin").await;
        let dallas = fx.city(&texas, "Dallas").await;
        let akron = fx.city(&ohio, "Akron").await;
        fx.place(&austin, "Loft", &[]).await;
        fx.place(&dallas, "Ranch", &[]).await;
        fx.place(&akron, "Barn", &[]).await;

        let query = PlaceQuery {
            states: vec![texas.id.to_string(), "nope".to_string()],
            cities: vec![akron.id.to_string(), CityId::new().to_string()],
            ..PlaceQuery::default()
        };
        let result = fx.svc.search(&query).await.unwrap();
        assert_eq!(names(&result), vec!["Barn", "Loft", "Ranch"]);
    }

    #[tokio::test]
    async fn should_require_all_requested_amenities() {
        let fx = Fixture::new();
        let texas = fx.state("Texas").await;
        let austin = fx.city(&texas, "Austin").await;
        let wifi = fx.amenity("wifi").await;
        let pool = fx.amenity("pool").await;
        fx.place(&austin, "Only wifi", &[&wifi]).await;
        fx.place(&austin, "Both", &[&wifi, &pool]).await;

        let query = PlaceQuery {
            amenities: vec![wifi.id.to_string(), pool.id.to_string()],
            ..PlaceQuery::default()
        };
        let result = fx.svc.search(&query).await.unwrap();
        assert_eq!(names(&result), vec!["Both"]);
    }

    #[tokio::test]
    async fn should_return_nothing_for_malformed_amenity_id() {
        let fx = Fixture::new();
        let texas = fx.state("Texas").await;
        let austin = fx.city(&texas, "Austin").await;
        fx.place(&austin, "Loft", &[]).await;

        let query = PlaceQuery {
            amenities: vec!["wifi".to_string()],
            ..PlaceQuery::default()
        };
        assert!(fx.svc.search(&query).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_link_list_and_unlink_amenities() {
        let fx = Fixture::new();
        let texas = fx.state("Texas").await;
        let austin = fx.city(&texas, "Austin").await;
        let place = fx.place(&austin, "Loft", &[]).await;
        let wifi = fx.amenity("wifi").await;
        let place_id = place.id.to_string();
        let wifi_id = wifi.id.to_string();

        let first = fx.svc.link_amenity(&place_id, &wifi_id).await.unwrap();
        assert_eq!(first, AmenityLink::Created(wifi.clone()));
        let second = fx.svc.link_amenity(&place_id, &wifi_id).await.unwrap();
        assert_eq!(second, AmenityLink::Existing(wifi.clone()));

        let linked = fx.svc.amenities_of(&place_id).await.unwrap();
        assert_eq!(linked, vec![wifi]);

        fx.svc.unlink_amenity(&place_id, &wifi_id).await.unwrap();
        let result = fx.svc.unlink_amenity(&place_id, &wifi_id).await;
        assert!(matches!(result, Err(HbnbError::NotFound(_))));
        assert!(fx.svc.amenities_of(&place_id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_return_not_found_when_linking_unknown_amenity() {
        let fx = Fixture::new();
        let texas = fx.state("Texas").await;
        let austin = fx.city(&texas, "Austin").await;
        let place = fx.place(&austin, "Loft", &[]).await;

        let result = fx
            .svc
            .link_amenity(&place.id.to_string(), &CityId::new().to_string())
            .await;
        assert!(matches!(result, Err(HbnbError::NotFound(ref e)) if e.entity == "Amenity"));
    }
}

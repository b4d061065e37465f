//! In-memory [`Storage`](crate::ports::Storage) used by the service tests.

use std::sync::{Arc, Mutex};

use hbnb_domain::amenity::Amenity;
use hbnb_domain::city::City;
use hbnb_domain::error::HbnbError;
use hbnb_domain::id::{CityId, PlaceId, StateId};
use hbnb_domain::place::Place;
use hbnb_domain::record::{Child, Record};
use hbnb_domain::review::Review;
use hbnb_domain::state::State;
use hbnb_domain::user::User;

use crate::ports::{ChildRepository, Repository};

/// Clones share the same tables.
#[derive(Default, Clone)]
pub(crate) struct MemoryStorage {
    states: Arc<Mutex<Vec<State>>>,
    cities: Arc<Mutex<Vec<City>>>,
    amenities: Arc<Mutex<Vec<Amenity>>>,
    users: Arc<Mutex<Vec<User>>>,
    places: Arc<Mutex<Vec<Place>>>,
    reviews: Arc<Mutex<Vec<Review>>>,
}

macro_rules! table {
    ($record:ty, $field:ident) => {
        impl Repository<$record> for MemoryStorage {
            async fn create(&self, record: $record) -> Result<$record, HbnbError> {
                self.$field.lock().unwrap().push(record.clone());
                Ok(record)
            }

            async fn get_by_id(
                &self,
                id: <$record as Record>::Id,
            ) -> Result<Option<$record>, HbnbError> {
                let rows = self.$field.lock().unwrap();
                Ok(rows.iter().find(|row| row.id() == id).cloned())
            }

            async fn get_all(&self) -> Result<Vec<$record>, HbnbError> {
                Ok(self.$field.lock().unwrap().clone())
            }

            async fn update(&self, record: $record) -> Result<$record, HbnbError> {
                let mut rows = self.$field.lock().unwrap();
                if let Some(row) = rows.iter_mut().find(|row| row.id() == record.id()) {
                    *row = record.clone();
                }
                Ok(record)
            }

            async fn delete(&self, id: <$record as Record>::Id) -> Result<(), HbnbError> {
                self.$field.lock().unwrap().retain(|row| row.id() != id);
                Ok(())
            }

            async fn count(&self) -> Result<u64, HbnbError> {
                Ok(self.$field.lock().unwrap().len() as u64)
            }
        }
    };
}

macro_rules! children {
    ($record:ty, $field:ident, $parent_id:ty) => {
        impl ChildRepository<$record> for MemoryStorage {
            async fn find_by_parent(&self, parent: $parent_id) -> Result<Vec<$record>, HbnbError> {
                let rows = self.$field.lock().unwrap();
                Ok(rows
                    .iter()
                    .filter(|row| row.parent_id() == parent)
                    .cloned()
                    .collect())
            }
        }
    };
}

table!(State, states);
table!(City, cities);
table!(Amenity, amenities);
table!(User, users);
table!(Place, places);
table!(Review, reviews);

children!(City, cities, StateId);
children!(Place, places, CityId);
children!(Review, reviews, PlaceId);

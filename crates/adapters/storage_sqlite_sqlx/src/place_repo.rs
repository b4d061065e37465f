//! `SQLite` implementation of [`ChildRepository<Place>`].
//!
//! Linked amenity ids are stored as a JSON array in `amenity_ids`.

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row};

use hbnb_app::ports::{ChildRepository, Repository};
use hbnb_domain::error::HbnbError;
use hbnb_domain::id::{CityId, PlaceId};
use hbnb_domain::place::Place;

use crate::codec;
use crate::error::StorageError;
use crate::storage::SqliteStorage;

struct Wrapper(Place);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let city_id: String = row.try_get("city_id")?;
        let user_id: String = row.try_get("user_id")?;
        let amenity_ids: String = row.try_get("amenity_ids")?;
        let extra: String = row.try_get("extra")?;
        let created_at: String = row.try_get("created_at")?;
        let updated_at: String = row.try_get("updated_at")?;

        Ok(Self(Place {
            id: codec::decode_id(&id)?,
            city_id: codec::decode_id(&city_id)?,
            user_id: codec::decode_id(&user_id)?,
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            number_rooms: row.try_get("number_rooms")?,
            number_bathrooms: row.try_get("number_bathrooms")?,
            max_guest: row.try_get("max_guest")?,
            price_by_night: row.try_get("price_by_night")?,
            latitude: row.try_get("latitude")?,
            longitude: row.try_get("longitude")?,
            amenity_ids: codec::decode_json(&amenity_ids)?,
            extra: codec::decode_json(&extra)?,
            created_at: codec::decode_timestamp(&created_at)?,
            updated_at: codec::decode_timestamp(&updated_at)?,
        }))
    }
}

const INSERT: &str = "INSERT INTO places (id, city_id, user_id, name, description, number_rooms, number_bathrooms, max_guest, price_by_night, latitude, longitude, amenity_ids, extra, created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM places WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM places ORDER BY rowid";
const SELECT_BY_CITY: &str = "SELECT * FROM places WHERE city_id = ? ORDER BY rowid";
const UPDATE: &str = "UPDATE places SET name = ?, description = ?, number_rooms = ?, number_bathrooms = ?, max_guest = ?, price_by_night = ?, latitude = ?, longitude = ?, amenity_ids = ?, extra = ?, updated_at = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM places WHERE id = ?";
const COUNT: &str = "SELECT COUNT(*) FROM places";

impl Repository<Place> for SqliteStorage {
    fn create(&self, place: Place) -> impl Future<Output = Result<Place, HbnbError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(INSERT)
                .bind(place.id.to_string())
                .bind(place.city_id.to_string())
                .bind(place.user_id.to_string())
                .bind(&place.name)
                .bind(&place.description)
                .bind(place.number_rooms)
                .bind(place.number_bathrooms)
                .bind(place.max_guest)
                .bind(place.price_by_night)
                .bind(place.latitude)
                .bind(place.longitude)
                .bind(codec::encode_json(&place.amenity_ids)?)
                .bind(codec::encode_json(&place.extra)?)
                .bind(codec::encode_timestamp(place.created_at))
                .bind(codec::encode_timestamp(place.updated_at))
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(place)
        }
    }

    fn get_by_id(
        &self,
        id: PlaceId,
    ) -> impl Future<Output = Result<Option<Place>, HbnbError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.to_string())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(row.map(|w| w.0))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Place>, HbnbError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn update(&self, place: Place) -> impl Future<Output = Result<Place, HbnbError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(UPDATE)
                .bind(&place.name)
                .bind(&place.description)
                .bind(place.number_rooms)
                .bind(place.number_bathrooms)
                .bind(place.max_guest)
                .bind(place.price_by_night)
                .bind(place.latitude)
                .bind(place.longitude)
                .bind(codec::encode_json(&place.amenity_ids)?)
                .bind(codec::encode_json(&place.extra)?)
                .bind(codec::encode_timestamp(place.updated_at))
                .bind(place.id.to_string())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(place)
        }
    }

    fn delete(&self, id: PlaceId) -> impl Future<Output = Result<(), HbnbError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(DELETE_BY_ID)
                .bind(id.to_string())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(())
        }
    }

    fn count(&self) -> impl Future<Output = Result<u64, HbnbError>> + Send {
        let pool = self.pool.clone();
        async move { Ok(codec::count(&pool, COUNT).await?) }
    }
}

impl ChildRepository<Place> for SqliteStorage {
    fn find_by_parent(
        &self,
        city_id: CityId,
    ) -> impl Future<Output = Result<Vec<Place>, HbnbError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_BY_CITY)
                .bind(city_id.to_string())
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }
}

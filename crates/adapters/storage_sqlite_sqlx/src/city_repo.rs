//! `SQLite` implementation of [`ChildRepository<City>`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row};

use hbnb_app::ports::{ChildRepository, Repository};
use hbnb_domain::city::City;
use hbnb_domain::error::HbnbError;
use hbnb_domain::id::{CityId, StateId};

use crate::codec;
use crate::error::StorageError;
use crate::storage::SqliteStorage;

struct Wrapper(City);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let state_id: String = row.try_get("state_id")?;
        let extra: String = row.try_get("extra")?;
        let created_at: String = row.try_get("created_at")?;
        let updated_at: String = row.try_get("updated_at")?;

        Ok(Self(City {
            id: codec::decode_id(&id)?,
            state_id: codec::decode_id(&state_id)?,
            name: row.try_get("name")?,
            extra: codec::decode_json(&extra)?,
            created_at: codec::decode_timestamp(&created_at)?,
            updated_at: codec::decode_timestamp(&updated_at)?,
        }))
    }
}

const INSERT: &str = "INSERT INTO cities (id, state_id, name, extra, created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM cities WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM cities ORDER BY rowid";
const SELECT_BY_STATE: &str = "SELECT * FROM cities WHERE state_id = ? ORDER BY rowid";
const UPDATE: &str = "UPDATE cities SET name = ?, extra = ?, updated_at = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM cities WHERE id = ?";
const COUNT: &str = "SELECT COUNT(*) FROM cities";

impl Repository<City> for SqliteStorage {
    fn create(&self, city: City) -> impl Future<Output = Result<City, HbnbError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(INSERT)
                .bind(city.id.to_string())
                .bind(city.state_id.to_string())
                .bind(&city.name)
                .bind(codec::encode_json(&city.extra)?)
                .bind(codec::encode_timestamp(city.created_at))
                .bind(codec::encode_timestamp(city.updated_at))
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(city)
        }
    }

    fn get_by_id(&self, id: CityId) -> impl Future<Output = Result<Option<City>, HbnbError>> + Send {
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

    fn get_all(&self) -> impl Future<Output = Result<Vec<City>, HbnbError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn update(&self, city: City) -> impl Future<Output = Result<City, HbnbError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(UPDATE)
                .bind(&city.name)
                .bind(codec::encode_json(&city.extra)?)
                .bind(codec::encode_timestamp(city.updated_at))
                .bind(city.id.to_string())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(city)
        }
    }

    fn delete(&self, id: CityId) -> impl Future<Output = Result<(), HbnbError>> + Send {
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

impl ChildRepository<City> for SqliteStorage {
    fn find_by_parent(
        &self,
        state_id: StateId,
    ) -> impl Future<Output = Result<Vec<City>, HbnbError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_BY_STATE)
                .bind(state_id.to_string())
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }
}

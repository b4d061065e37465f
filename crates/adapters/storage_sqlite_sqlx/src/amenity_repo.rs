//! `SQLite` implementation of [`Repository<Amenity>`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row};

use hbnb_app::ports::Repository;
use hbnb_domain::amenity::Amenity;
use hbnb_domain::error::HbnbError;
use hbnb_domain::id::AmenityId;

use crate::codec;
use crate::error::StorageError;
use crate::storage::SqliteStorage;

struct Wrapper(Amenity);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let extra: String = row.try_get("extra")?;
        let created_at: String = row.try_get("created_at")?;
        let updated_at: String = row.try_get("updated_at")?;

        Ok(Self(Amenity {
            id: codec::decode_id(&id)?,
            name: row.try_get("name")?,
            extra: codec::decode_json(&extra)?,
            created_at: codec::decode_timestamp(&created_at)?,
            updated_at: codec::decode_timestamp(&updated_at)?,
        }))
    }
}

const INSERT: &str =
    "INSERT INTO amenities (id, name, extra, created_at, updated_at) VALUES (?, ?, ?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM amenities WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM amenities ORDER BY rowid";
const UPDATE: &str = "UPDATE amenities SET name = ?, extra = ?, updated_at = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM amenities WHERE id = ?";
const COUNT: &str = "SELECT COUNT(*) FROM amenities";

impl Repository<Amenity> for SqliteStorage {
    fn create(&self, amenity: Amenity) -> impl Future<Output = Result<Amenity, HbnbError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(INSERT)
                .bind(amenity.id.to_string())
                .bind(&amenity.name)
                .bind(codec::encode_json(&amenity.extra)?)
                .bind(codec::encode_timestamp(amenity.created_at))
                .bind(codec::encode_timestamp(amenity.updated_at))
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(amenity)
        }
    }

    fn get_by_id(
        &self,
        id: AmenityId,
    ) -> impl Future<Output = Result<Option<Amenity>, HbnbError>> + Send {
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

    fn get_all(&self) -> impl Future<Output = Result<Vec<Amenity>, HbnbError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn update(&self, amenity: Amenity) -> impl Future<Output = Result<Amenity, HbnbError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(UPDATE)
                .bind(&amenity.name)
                .bind(codec::encode_json(&amenity.extra)?)
                .bind(codec::encode_timestamp(amenity.updated_at))
                .bind(amenity.id.to_string())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(amenity)
        }
    }

    fn delete(&self, id: AmenityId) -> impl Future<Output = Result<(), HbnbError>> + Send {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::testing::setup;

    #[tokio::test]
    async fn should_create_update_and_delete_amenity() {
        let storage = setup().await;
        let mut wifi = Repository::<Amenity>::create(&storage, Amenity::new("Wifi"))
            .await
            .unwrap();

        wifi.name = "Fast wifi".to_string();
        Repository::<Amenity>::update(&storage, wifi.clone())
            .await
            .unwrap();
        let fetched = Repository::<Amenity>::get_by_id(&storage, wifi.id)
            .await
            .unwrap();
        assert_eq!(fetched, Some(wifi.clone()));

        Repository::<Amenity>::delete(&storage, wifi.id)
            .await
            .unwrap();
        assert_eq!(Repository::<Amenity>::count(&storage).await.unwrap(), 0);
    }
}

//! `SQLite` implementation of [`ChildRepository<Review>`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row};

use hbnb_app::ports::{ChildRepository, Repository};
use hbnb_domain::error::HbnbError;
use hbnb_domain::id::{PlaceId, ReviewId};
use hbnb_domain::review::Review;

use crate::codec;
use crate::error::StorageError;
use crate::storage::SqliteStorage;

struct Wrapper(Review);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let place_id: String = row.try_get("place_id")?;
        let user_id: String = row.try_get("user_id")?;
        let extra: String = row.try_get("extra")?;
        let created_at: String = row.try_get("created_at")?;
        let updated_at: String = row.try_get("updated_at")?;

        Ok(Self(Review {
            id: codec::decode_id(&id)?,
            place_id: codec::decode_id(&place_id)?,
            user_id: codec::decode_id(&user_id)?,
            text: row.try_get("text")?,
            extra: codec::decode_json(&extra)?,
            created_at: codec::decode_timestamp(&created_at)?,
            updated_at: codec::decode_timestamp(&updated_at)?,
        }))
    }
}

const INSERT: &str = "INSERT INTO reviews (id, place_id, user_id, text, extra, created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM reviews WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM reviews ORDER BY rowid";
const SELECT_BY_PLACE: &str = "SELECT * FROM reviews WHERE place_id = ? ORDER BY rowid";
const UPDATE: &str = "UPDATE reviews SET text = ?, extra = ?, updated_at = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM reviews WHERE id = ?";
const COUNT: &str = "SELECT COUNT(*) FROM reviews";

impl Repository<Review> for SqliteStorage {
    fn create(&self, review: Review) -> impl Future<Output = Result<Review, HbnbError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(INSERT)
                .bind(review.id.to_string())
                .bind(review.place_id.to_string())
                .bind(review.user_id.to_string())
                .bind(&review.text)
                .bind(codec::encode_json(&review.extra)?)
                .bind(codec::encode_timestamp(review.created_at))
                .bind(codec::encode_timestamp(review.updated_at))
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(review)
        }
    }

    fn get_by_id(
        &self,
        id: ReviewId,
    ) -> impl Future<Output = Result<Option<Review>, HbnbError>> + Send {
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

    fn get_all(&self) -> impl Future<Output = Result<Vec<Review>, HbnbError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn update(&self, review: Review) -> impl Future<Output = Result<Review, HbnbError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(UPDATE)
                .bind(&review.text)
                .bind(codec::encode_json(&review.extra)?)
                .bind(codec::encode_timestamp(review.updated_at))
                .bind(review.id.to_string())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(review)
        }
    }

    fn delete(&self, id: ReviewId) -> impl Future<Output = Result<(), HbnbError>> + Send {
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

impl ChildRepository<Review> for SqliteStorage {
    fn find_by_parent(
        &self,
        place_id: PlaceId,
    ) -> impl Future<Output = Result<Vec<Review>, HbnbError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_BY_PLACE)
                .bind(place_id.to_string())
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }
}

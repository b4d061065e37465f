//! `SQLite` implementation of [`Repository<User>`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row};

use hbnb_app::ports::Repository;
use hbnb_domain::error::HbnbError;
use hbnb_domain::id::UserId;
use hbnb_domain::user::User;

use crate::codec;
use crate::error::StorageError;
use crate::storage::SqliteStorage;

struct Wrapper(User);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let extra: String = row.try_get("extra")?;
        let created_at: String = row.try_get("created_at")?;
        let updated_at: String = row.try_get("updated_at")?;

        Ok(Self(User {
            id: codec::decode_id(&id)?,
            email: row.try_get("email")?,
            password: row.try_get("password")?,
            first_name: row.try_get("first_name")?,
            last_name: row.try_get("last_name")?,
            extra: codec::decode_json(&extra)?,
            created_at: codec::decode_timestamp(&created_at)?,
            updated_at: codec::decode_timestamp(&updated_at)?,
        }))
    }
}

const INSERT: &str = "INSERT INTO users (id, email, password, first_name, last_name, extra, created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM users WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM users ORDER BY rowid";
const UPDATE: &str = "UPDATE users SET email = ?, password = ?, first_name = ?, last_name = ?, extra = ?, updated_at = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM users WHERE id = ?";
const COUNT: &str = "SELECT COUNT(*) FROM users";

impl Repository<User> for SqliteStorage {
    fn create(&self, user: User) -> impl Future<Output = Result<User, HbnbError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(INSERT)
                .bind(user.id.to_string())
                .bind(&user.email)
                .bind(&user.password)
                .bind(&user.first_name)
                .bind(&user.last_name)
                .bind(codec::encode_json(&user.extra)?)
                .bind(codec::encode_timestamp(user.created_at))
                .bind(codec::encode_timestamp(user.updated_at))
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(user)
        }
    }

    fn get_by_id(&self, id: UserId) -> impl Future<Output = Result<Option<User>, HbnbError>> + Send {
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

    fn get_all(&self) -> impl Future<Output = Result<Vec<User>, HbnbError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn update(&self, user: User) -> impl Future<Output = Result<User, HbnbError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(UPDATE)
                .bind(&user.email)
                .bind(&user.password)
                .bind(&user.first_name)
                .bind(&user.last_name)
                .bind(codec::encode_json(&user.extra)?)
                .bind(codec::encode_timestamp(user.updated_at))
                .bind(user.id.to_string())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(user)
        }
    }

    fn delete(&self, id: UserId) -> impl Future<Output = Result<(), HbnbError>> + Send {
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

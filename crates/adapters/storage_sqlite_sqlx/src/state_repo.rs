//! `SQLite` implementation of [`Repository<State>`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row};

use hbnb_app::ports::Repository;
use hbnb_domain::error::HbnbError;
use hbnb_domain::id::StateId;
use hbnb_domain::state::State;

use crate::codec;
use crate::error::StorageError;
use crate::storage::SqliteStorage;

/// Wrapper for converting database rows into domain [`State`].
struct Wrapper(State);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let extra: String = row.try_get("extra")?;
        let created_at: String = row.try_get("created_at")?;
        let updated_at: String = row.try_get("updated_at")?;

        Ok(Self(State {
            id: codec::decode_id(&id)?,
            name: row.try_get("name")?,
            extra: codec::decode_json(&extra)?,
            created_at: codec::decode_timestamp(&created_at)?,
            updated_at: codec::decode_timestamp(&updated_at)?,
        }))
    }
}

const INSERT: &str =
    "INSERT INTO states (id, name, extra, created_at, updated_at) VALUES (?, ?, ?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM states WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM states ORDER BY rowid";
const UPDATE: &str = "UPDATE states SET name = ?, extra = ?, updated_at = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM states WHERE id = ?";
const COUNT: &str = "SELECT COUNT(*) FROM states";

impl Repository<State> for SqliteStorage {
    fn create(&self, state: State) -> impl Future<Output = Result<State, HbnbError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(INSERT)
                .bind(state.id.to_string())
                .bind(&state.name)
                .bind(codec::encode_json(&state.extra)?)
                .bind(codec::encode_timestamp(state.created_at))
                .bind(codec::encode_timestamp(state.updated_at))
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(state)
        }
    }

    fn get_by_id(
        &self,
        id: StateId,
    ) -> impl Future<Output = Result<Option<State>, HbnbError>> + Send {
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

    fn get_all(&self) -> impl Future<Output = Result<Vec<State>, HbnbError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn update(&self, state: State) -> impl Future<Output = Result<State, HbnbError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(UPDATE)
                .bind(&state.name)
                .bind(codec::encode_json(&state.extra)?)
                .bind(codec::encode_timestamp(state.updated_at))
                .bind(state.id.to_string())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(state)
        }
    }

    fn delete(&self, id: StateId) -> impl Future<Output = Result<(), HbnbError>> + Send {
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
    use serde_json::json;

    #[tokio::test]
    async fn should_create_and_retrieve_state_when_valid() {
        let storage = setup().await;
        let state = State::new("California");
        let id = state.id;

        Repository::<State>::create(&storage, state.clone()).await.unwrap();

        let fetched = Repository::<State>::get_by_id(&storage, id).await.unwrap().unwrap();
        assert_eq!(fetched, state);
    }

    #[tokio::test]
    async fn should_return_none_when_state_not_found() {
        let storage = setup().await;
        let result = Repository::<State>::get_by_id(&storage, StateId::new()).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn should_list_states_in_insertion_order() {
        let storage = setup().await;
        Repository::<State>::create(&storage, State::new("Texas")).await.unwrap();
        Repository::<State>::create(&storage, State::new("Alabama")).await.unwrap();

        let all: Vec<State> = Repository::<State>::get_all(&storage).await.unwrap();
        let names: Vec<&str> = all.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Texas", "Alabama"]);
        assert_eq!(Repository::<State>::count(&storage).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn should_store_extra_attributes_through_roundtrip() {
        let storage = setup().await;
        let mut state = State::new("Ohio");
        state.extra.insert("motto".to_string(), json!("With God"));
        state.extra.insert("rank".to_string(), json!(17));
        let id = state.id;
        Repository::<State>::create(&storage, state).await.unwrap();

        let fetched = Repository::<State>::get_by_id(&storage, id).await.unwrap().unwrap();
        assert_eq!(fetched.extra.get("motto"), Some(&json!("With God")));
        assert_eq!(fetched.extra.get("rank"), Some(&json!(17)));
    }

    #[tokio::test]
    async fn should_update_state_when_exists() {
        let storage = setup().await;
        let mut state = State::new("Nevada");
        let id = state.id;
        Repository::<State>::create(&storage, state.clone()).await.unwrap();

        state.name = "Utah".to_string();
        Repository::<State>::update(&storage, state).await.unwrap();

        let fetched = Repository::<State>::get_by_id(&storage, id).await.unwrap().unwrap();
        assert_eq!(fetched.name, "Utah");
    }

    #[tokio::test]
    async fn should_delete_state_when_exists() {
        let storage = setup().await;
        let state = State::new("Oregon");
        let id = state.id;
        Repository::<State>::create(&storage, state).await.unwrap();

        Repository::<State>::delete(&storage, id).await.unwrap();

        assert!(Repository::<State>::get_by_id(&storage, id).await.unwrap().is_none());
    }
}

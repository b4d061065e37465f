//! Column encoding shared by the repositories.

use std::str::FromStr;

use serde::Serialize;
use serde::de::DeserializeOwned;
use sqlx::SqlitePool;

use hbnb_domain::time::Timestamp;

use crate::error::StorageError;

pub(crate) fn decode_id<T>(raw: &str) -> Result<T, sqlx::Error>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    T::from_str(raw).map_err(|err| sqlx::Error::Decode(Box::new(err)))
}

pub(crate) fn decode_timestamp(raw: &str) -> Result<Timestamp, sqlx::Error> {
    chrono::DateTime::parse_from_rfc3339(raw)
        .map(|ts| ts.to_utc())
        .map_err(|err| sqlx::Error::Decode(Box::new(err)))
}

pub(crate) fn decode_json<T: DeserializeOwned>(raw: &str) -> Result<T, sqlx::Error> {
    serde_json::from_str(raw).map_err(|err| sqlx::Error::Decode(Box::new(err)))
}

pub(crate) fn encode_json<T: Serialize>(value: &T) -> Result<String, StorageError> {
    Ok(serde_json::to_string(value)?)
}

pub(crate) fn encode_timestamp(ts: Timestamp) -> String {
    ts.to_rfc3339()
}

/// Run a `SELECT COUNT(*)` statement.
pub(crate) async fn count(pool: &SqlitePool, sql: &'static str) -> Result<u64, StorageError> {
    let total: i64 = sqlx::query_scalar(sql).fetch_one(pool).await?;
    Ok(u64::try_from(total).unwrap_or_default())
}

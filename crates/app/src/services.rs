//! Application services: use-case implementations.
//!
//! Each service struct accepts a storage implementation via a generic
//! parameter (constructor injection), keeping this layer decoupled from
//! concrete adapters.

pub mod place_service;
pub mod record_service;

#[cfg(test)]
pub(crate) mod memory;

use hbnb_domain::error::{HbnbError, NotFoundError};
use hbnb_domain::record::Record;

use crate::ports::Repository;

/// Resolve a caller-supplied id. Ids that do not parse resolve to nothing.
pub(crate) async fn lookup<S, R>(storage: &S, id: &str) -> Result<Option<R>, HbnbError>
where
    S: Repository<R>,
    R: Record,
{
    let Ok(id) = id.parse::<R::Id>() else {
        return Ok(None);
    };
    storage.get_by_id(id).await
}

/// Like [`lookup`], failing with [`HbnbError::NotFound`] when absent.
pub(crate) async fn fetch<S, R>(storage: &S, id: &str) -> Result<R, HbnbError>
where
    S: Repository<R>,
    R: Record,
{
    lookup::<S, R>(storage, id).await?.ok_or_else(|| {
        NotFoundError {
            entity: R::KIND,
            id: id.to_string(),
        }
        .into()
    })
}

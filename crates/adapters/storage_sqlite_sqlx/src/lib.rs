//! # hbnb-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `hbnb-app::ports::storage`
//! - Manage the `SQLite` connection pool lifecycle (open once, close on shutdown)
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between domain records and database rows
//!
//! Child records are removed with their parent by `ON DELETE CASCADE`
//! foreign keys, so the pool always enables foreign key enforcement.
//!
//! ## Dependency rule
//! Depends on `hbnb-app` (for port traits) and `hbnb-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod amenity_repo;
mod city_repo;
mod codec;
pub mod error;
mod place_repo;
pub mod pool;
mod review_repo;
mod state_repo;
mod storage;
mod user_repo;

pub use error::StorageError;
pub use pool::{Config, Database};
pub use storage::SqliteStorage;

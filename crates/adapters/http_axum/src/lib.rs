//! # hbnb-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the JSON REST API under `/api/v1` (`/states`, `/cities`,
//!   `/amenities`, `/users`, `/places`, `/reviews`, `/places_search`, …)
//! - Map HTTP requests into application service calls (driving adapter)
//! - Render records with their `__class__` name and map domain errors into
//!   the shared `{"error": …}` body
//!
//! ## Dependency rule
//! Depends on `hbnb-app` (for port traits and services) and `hbnb-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
mod extract;
pub mod representation;
pub mod router;
pub mod state;

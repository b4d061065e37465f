//! # hbnb-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `Repository<R>`: CRUD for any record type
//!   - `ChildRepository<R>`: listing records owned by a parent
//!   - `Storage`: one handle implementing every repository
//! - Define **driving/inbound ports** as use-case structs:
//!   - `RecordService`: generic get/list/update/delete plus per-type create
//!   - `PlaceService`: place search and place/amenity links
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `hbnb-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;

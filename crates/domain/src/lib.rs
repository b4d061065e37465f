//! # hbnb-domain
//!
//! Pure domain model for the hbnb rental listing service.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define the six **records**: states, cities, amenities, users, places,
//!   reviews, each with an open attribute bag for unknown payload keys
//! - Define the [`record::Record`] / [`record::Child`] capabilities the
//!   generic CRUD use-cases are written against
//! - Decode loosely-typed JSON payloads into records
//! - Provide the pure steps of the **place search** (criteria, de-duplication,
//!   amenity filtering)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod payload;
pub mod record;
pub mod time;

pub mod amenity;
pub mod city;
pub mod place;
pub mod review;
pub mod search;
pub mod state;
pub mod user;

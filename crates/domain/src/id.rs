//! Typed identifier newtypes backed by UUIDs.
//!
//! Ids are rendered as lowercase hyphenated UUIDs and only that spelling
//! parses back, so every record has exactly one textual id.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

/// A string that is not the canonical form of an id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid id {0:?}")]
pub struct ParseIdError(String);

fn parse_canonical(s: &str) -> Result<uuid::Uuid, ParseIdError> {
    match uuid::Uuid::parse_str(s) {
        Ok(uuid) if uuid.hyphenated().to_string() == s => Ok(uuid),
        _ => Err(ParseIdError(s.to_string())),
    }
}

macro_rules! define_id {
    ($(#[doc = $doc:expr])* $name:ident) => {
        $(#[doc = $doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
        #[serde(transparent)]
        pub struct $name(uuid::Uuid);

        impl Default for $name {
            fn default() -> Self {
                Self(uuid::Uuid::new_v4())
            }
        }

        impl $name {
            /// Generate a new random identifier.
            #[must_use]
            pub fn new() -> Self {
                Self::default()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl FromStr for $name {
            type Err = ParseIdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                parse_canonical(s).map(Self)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                raw.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

define_id!(
    /// Unique identifier for a [`State`](crate::state::State).
    StateId
);

define_id!(
    /// Unique identifier for a [`City`](crate::city::City).
    CityId
);

define_id!(
    /// Unique identifier for an [`Amenity`](crate::amenity::Amenity).
    AmenityId
);

define_id!(
    /// Unique identifier for a [`User`](crate::user::User).
    UserId
);

define_id!(
    /// Unique identifier for a [`Place`](crate::place::Place).
    PlaceId
);

define_id!(
    /// Unique identifier for a [`Review`](crate::review::Review).
    ReviewId
);

//! Place: a rentable listing in a city, hosted by a user.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::city::City;
use crate::error::ValidationError;
use crate::id::{AmenityId, CityId, PlaceId, UserId};
use crate::payload::{self, Payload};
use crate::record::{Child, Record};
use crate::time::{Timestamp, now};

/// A listing. Amenities are referenced by id; the list is not checked
/// against existing amenities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub id: PlaceId,
    pub city_id: CityId,
    pub user_id: UserId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub number_rooms: i64,
    #[serde(default)]
    pub number_bathrooms: i64,
    #[serde(default)]
    pub max_guest: i64,
    #[serde(default)]
    pub price_by_night: i64,
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
    #[serde(default)]
    pub amenity_ids: Vec<AmenityId>,
    #[serde(flatten)]
    pub extra: Payload,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Place {
    #[must_use]
    pub fn new(city_id: CityId, user_id: UserId, name: impl Into<String>) -> Self {
        let ts = now();
        Self {
            id: PlaceId::new(),
            city_id,
            user_id,
            name: name.into(),
            description: String::new(),
            number_rooms: 0,
            number_bathrooms: 0,
            max_guest: 0,
            price_by_night: 0,
            latitude: 0.0,
            longitude: 0.0,
            amenity_ids: Vec::new(),
            extra: Payload::new(),
            created_at: ts,
            updated_at: ts,
        }
    }

    /// Build a place from a create payload. City and host are resolved by
    /// the caller; the matching payload keys are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingField`] when `name` is absent, or
    /// [`ValidationError::InvalidField`] on a mistyped known key.
    pub fn from_payload(
        city_id: CityId,
        user_id: UserId,
        payload: Payload,
    ) -> Result<Self, ValidationError> {
        let mut place = Self::new(city_id, user_id, payload::require::<String>(&payload, "name")?);
        place.merge(payload)?;
        Ok(place)
    }

    /// Whether the place offers every amenity in `required`.
    #[must_use]
    pub fn has_amenities(&self, required: &[AmenityId]) -> bool {
        required.iter().all(|id| self.amenity_ids.contains(id))
    }

    /// Add an amenity link. Returns `false` if it was already linked.
    pub fn link_amenity(&mut self, amenity_id: AmenityId) -> bool {
        if self.amenity_ids.contains(&amenity_id) {
            return false;
        }
        self.amenity_ids.push(amenity_id);
        true
    }

    /// Remove an amenity link. Returns `false` if it was not linked.
    pub fn unlink_amenity(&mut self, amenity_id: AmenityId) -> bool {
        let before = self.amenity_ids.len();
        self.amenity_ids.retain(|id| *id != amenity_id);
        self.amenity_ids.len() != before
    }
}

impl Record for Place {
    type Id = PlaceId;

    const KIND: &'static str = "Place";
    const PROTECTED: &'static [&'static str] = &["user_id", "city_id"];

    fn id(&self) -> PlaceId {
        self.id
    }

    fn touch(&mut self, at: Timestamp) {
        self.updated_at = at;
    }

    fn assign(&mut self, key: &str, value: Value) -> Result<(), ValidationError> {
        match key {
            "name" => self.name = payload::decode(key, value)?,
            "description" => self.description = payload::decode(key, value)?,
            "number_rooms" => self.number_rooms = payload::decode(key, value)?,
            "number_bathrooms" => self.number_bathrooms = payload::decode(key, value)?,
            "max_guest" => self.max_guest = payload::decode(key, value)?,
            "price_by_night" => self.price_by_night = payload::decode(key, value)?,
            "latitude" => self.latitude = payload::decode(key, value)?,
            "longitude" => self.longitude = payload::decode(key, value)?,
            "amenity_ids" => self.amenity_ids = payload::decode(key, value)?,
            _ => {
                self.extra.insert(key.to_string(), value);
            }
        }
        Ok(())
    }
}

impl Child for Place {
    type Parent = City;

    fn parent_id(&self) -> CityId {
        self.city_id
    }
}

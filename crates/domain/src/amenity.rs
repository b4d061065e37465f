//! Amenity: a feature places can offer (wifi, pool, …).

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ValidationError;
use crate::id::AmenityId;
use crate::payload::{self, Payload};
use crate::record::Record;
use crate::time::{Timestamp, now};

/// An amenity referenced by places through their amenity id list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Amenity {
    pub id: AmenityId,
    pub name: String,
    #[serde(flatten)]
    pub extra: Payload,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Amenity {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let ts = now();
        Self {
            id: AmenityId::new(),
            name: name.into(),
            extra: Payload::new(),
            created_at: ts,
            updated_at: ts,
        }
    }

    /// Build an amenity from a create payload.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingField`] when `name` is absent.
    pub fn from_payload(payload: Payload) -> Result<Self, ValidationError> {
        let mut amenity = Self::new(payload::require::<String>(&payload, "name")?);
        amenity.merge(payload)?;
        Ok(amenity)
    }
}

impl Record for Amenity {
    type Id = AmenityId;

    const KIND: &'static str = "Amenity";
    const PROTECTED: &'static [&'static str] = &[];

    fn id(&self) -> AmenityId {
        self.id
    }

    fn touch(&mut self, at: Timestamp) {
        self.updated_at = at;
    }

    fn assign(&mut self, key: &str, value: Value) -> Result<(), ValidationError> {
        match key {
            "name" => self.name = payload::decode(key, value)?,
            _ => {
                self.extra.insert(key.to_string(), value);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn should_keep_unknown_keys_as_extra_attributes() {
        let payload = payload::from_value(json!({"name": "Wifi", "speed": 300})).unwrap();
        let amenity = Amenity::from_payload(payload).unwrap();
        assert_eq!(amenity.extra.get("speed"), Some(&json!(300)));
    }

    #[test]
    fn should_reject_non_string_name_on_update() {
        let mut amenity = Amenity::new("Pool");
        let result = amenity.assign("name", json!(["Pool"]));
        assert_eq!(result, Err(ValidationError::InvalidField("name".to_string())));
        assert_eq!(amenity.name, "Pool");
    }
}

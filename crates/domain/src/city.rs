//! City: belongs to a state, owns many places.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ValidationError;
use crate::id::{CityId, StateId};
use crate::payload::{self, Payload};
use crate::record::{Child, Record};
use crate::state::State;
use crate::time::{Timestamp, now};

/// A city inside a [`State`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub id: CityId,
    pub state_id: StateId,
    pub name: String,
    #[serde(flatten)]
    pub extra: Payload,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl City {
    /// Create a fresh city in the given state.
    #[must_use]
    pub fn new(state_id: StateId, name: impl Into<String>) -> Self {
        let ts = now();
        Self {
            id: CityId::new(),
            state_id,
            name: name.into(),
            extra: Payload::new(),
            created_at: ts,
            updated_at: ts,
        }
    }

    /// Build a city from a create payload. The owning state always comes
    /// from `state_id`, whatever the payload says.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingField`] when `name` is absent.
    pub fn from_payload(state_id: StateId, payload: Payload) -> Result<Self, ValidationError> {
        let mut city = Self::new(state_id, payload::require::<String>(&payload, "name")?);
        city.merge(payload)?;
        Ok(city)
    }
}

impl Record for City {
    type Id = CityId;

    const KIND: &'static str = "City";
    const PROTECTED: &'static [&'static str] = &["state_id"];

    fn id(&self) -> CityId {
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

impl Child for City {
    type Parent = State;

    fn parent_id(&self) -> StateId {
        self.state_id
    }
}

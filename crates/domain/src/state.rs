//! State: top of the geography, owning many cities.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ValidationError;
use crate::id::StateId;
use crate::payload::{self, Payload};
use crate::record::Record;
use crate::time::{Timestamp, now};

/// A state (region) grouping cities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct State {
    pub id: StateId,
    pub name: String,
    #[serde(flatten)]
    pub extra: Payload,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl State {
    /// Create a fresh state with a new id and current timestamps.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let ts = now();
        Self {
            id: StateId::new(),
            name: name.into(),
            extra: Payload::new(),
            created_at: ts,
            updated_at: ts,
        }
    }

    /// Build a state from a create payload.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingField`] when `name` is absent, or
    /// [`ValidationError::InvalidField`] on a mistyped known key.
    pub fn from_payload(payload: Payload) -> Result<Self, ValidationError> {
        let mut state = Self::new(payload::require::<String>(&payload, "name")?);
        state.merge(payload)?;
        Ok(state)
    }
}

impl Record for State {
    type Id = StateId;

    const KIND: &'static str = "State";
    const PROTECTED: &'static [&'static str] = &[];

    fn id(&self) -> StateId {
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

//! Review: a user's text about a place.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ValidationError;
use crate::id::{PlaceId, ReviewId, UserId};
use crate::payload::{self, Payload};
use crate::place::Place;
use crate::record::{Child, Record};
use crate::time::{Timestamp, now};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: ReviewId,
    pub place_id: PlaceId,
    pub user_id: UserId,
    pub text: String,
    #[serde(flatten)]
    pub extra: Payload,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Review {
    #[must_use]
    pub fn new(place_id: PlaceId, user_id: UserId, text: impl Into<String>) -> Self {
        let ts = now();
        Self {
            id: ReviewId::new(),
            place_id,
            user_id,
            text: text.into(),
            extra: Payload::new(),
            created_at: ts,
            updated_at: ts,
        }
    }

    /// Build a review from a create payload.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingField`] when `text` is absent.
    pub fn from_payload(
        place_id: PlaceId,
        user_id: UserId,
        payload: Payload,
    ) -> Result<Self, ValidationError> {
        let mut review = Self::new(place_id, user_id, payload::require::<String>(&payload, "text")?);
        review.merge(payload)?;
        Ok(review)
    }
}

impl Record for Review {
    type Id = ReviewId;

    const KIND: &'static str = "Review";
    const PROTECTED: &'static [&'static str] = &["user_id", "place_id"];

    fn id(&self) -> ReviewId {
        self.id
    }

    fn touch(&mut self, at: Timestamp) {
        self.updated_at = at;
    }

    fn assign(&mut self, key: &str, value: Value) -> Result<(), ValidationError> {
        match key {
            "text" => self.text = payload::decode(key, value)?,
            _ => {
                self.extra.insert(key.to_string(), value);
            }
        }
        Ok(())
    }
}

impl Child for Review {
    type Parent = Place;

    fn parent_id(&self) -> PlaceId {
        self.place_id
    }
}

//! User: owner of places and author of reviews.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ValidationError;
use crate::id::UserId;
use crate::payload::{self, Payload};
use crate::record::Record;
use crate::time::{Timestamp, now};

/// A registered user.
///
/// The password is persisted but never serialized into a representation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub email: String,
    #[serde(skip_serializing, default)]
    pub password: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(flatten)]
    pub extra: Payload,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl User {
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        let ts = now();
        Self {
            id: UserId::new(),
            email: email.into(),
            password: password.into(),
            first_name: String::new(),
            last_name: String::new(),
            extra: Payload::new(),
            created_at: ts,
            updated_at: ts,
        }
    }

    /// Build a user from a create payload.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingField`] when `email` or `password`
    /// is absent, checked in that order.
    pub fn from_payload(payload: Payload) -> Result<Self, ValidationError> {
        let email: String = payload::require(&payload, "email")?;
        let password: String = payload::require(&payload, "password")?;
        let mut user = Self::new(email, password);
        user.merge(payload)?;
        Ok(user)
    }
}

impl Record for User {
    type Id = UserId;

    const KIND: &'static str = "User";
    const PROTECTED: &'static [&'static str] = &["email"];

    fn id(&self) -> UserId {
        self.id
    }

    fn touch(&mut self, at: Timestamp) {
        self.updated_at = at;
    }

    fn assign(&mut self, key: &str, value: Value) -> Result<(), ValidationError> {
        match key {
            "password" => self.password = payload::decode(key, value)?,
            "first_name" => self.first_name = payload::decode(key, value)?,
            "last_name" => self.last_name = payload::decode(key, value)?,
            _ => {
                self.extra.insert(key.to_string(), value);
            }
        }
        Ok(())
    }
}

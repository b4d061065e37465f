//! Capabilities shared by every persisted record type.
//!
//! [`Record`] is what the generic CRUD use-cases and handlers are written
//! against: an identity, a class name for the wire representation, and a
//! permissive field assignment used by the update path. [`Child`] adds the
//! single parent link that scoped listings (cities of a state, places of a
//! city, reviews of a place) follow.

use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

use serde::Serialize;
use serde_json::Value;

use crate::error::ValidationError;
use crate::payload::Payload;
use crate::time::Timestamp;

/// Keys no payload may ever overwrite, on any record type.
pub const BASE_PROTECTED: &[&str] = &["id", "created_at", "updated_at", "__class__"];

/// A persisted, identifiable, serializable record.
pub trait Record: Clone + Serialize + Send + Sync + 'static {
    /// Typed identifier of the record.
    type Id: Copy + Eq + Hash + fmt::Debug + fmt::Display + FromStr + Send + Sync + 'static;

    /// Class name reported under `__class__` in the representation.
    const KIND: &'static str;

    /// Record-specific keys dropped from update payloads, on top of
    /// [`BASE_PROTECTED`].
    const PROTECTED: &'static [&'static str];

    /// The record identifier.
    fn id(&self) -> Self::Id;

    /// Mark the record as modified at `at`.
    fn touch(&mut self, at: Timestamp);

    /// Assign a single key. Unknown keys are kept in the record's attribute
    /// bag.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidField`] when a known key carries a
    /// value of the wrong type.
    fn assign(&mut self, key: &str, value: Value) -> Result<(), ValidationError>;

    /// Whether `key` must be ignored when it appears in a payload.
    fn is_protected(key: &str) -> bool {
        BASE_PROTECTED.contains(&key) || Self::PROTECTED.contains(&key)
    }

    /// Assign every non-protected key of `payload`.
    ///
    /// # Errors
    ///
    /// Propagates the first [`Record::assign`] failure.
    fn merge(&mut self, payload: Payload) -> Result<(), ValidationError> {
        for (key, value) in payload {
            if Self::is_protected(&key) {
                continue;
            }
            self.assign(&key, value)?;
        }
        Ok(())
    }
}

/// A record owned by exactly one parent record.
pub trait Child: Record {
    /// The owning record type.
    type Parent: Record;

    /// Identifier of the owning record.
    fn parent_id(&self) -> <Self::Parent as Record>::Id;
}

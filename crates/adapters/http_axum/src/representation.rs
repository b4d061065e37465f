//! Wire representation of records.

use serde::Serialize;

use hbnb_domain::record::Record;

/// A record as rendered in responses: its attributes plus a `__class__` key
/// naming the record type.
#[derive(Debug, Serialize)]
pub struct Representation<R> {
    #[serde(rename = "__class__")]
    class: &'static str,
    #[serde(flatten)]
    record: R,
}

impl<R: Record> From<R> for Representation<R> {
    fn from(record: R) -> Self {
        Self {
            class: R::KIND,
            record,
        }
    }
}

impl<R: Record> Representation<R> {
    /// Wrap every record of a listing.
    #[must_use]
    pub fn many(records: Vec<R>) -> Vec<Self> {
        records.into_iter().map(Self::from).collect()
    }
}

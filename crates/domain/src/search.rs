//! Place search criteria and the pure filtering steps of a search.
//!
//! Resolving states and cities into candidate places needs storage and lives
//! in the application layer; everything after that (de-duplication and the
//! amenity filter) is plain data manipulation and lives here.

use std::collections::HashSet;

use serde::{Deserialize, Deserializer};

use crate::id::AmenityId;
use crate::place::Place;

/// Body of a place search. Every list is optional; `null` counts as empty.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
pub struct PlaceQuery {
    #[serde(default, deserialize_with = "nullable")]
    pub states: Vec<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub cities: Vec<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub amenities: Vec<String>,
}

fn nullable<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Vec<String>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl PlaceQuery {
    /// No state or city criteria: every place is a candidate.
    #[must_use]
    pub fn is_unscoped(&self) -> bool {
        self.states.is_empty() && self.cities.is_empty()
    }

    /// Parse the requested amenity ids.
    ///
    /// Returns `None` when one of them is not a well-formed id: no place can
    /// carry it, so the search can only come back empty.
    #[must_use]
    pub fn amenity_ids(&self) -> Option<Vec<AmenityId>> {
        self.amenities.iter().map(|id| id.parse().ok()).collect()
    }
}

/// Keep one place per id, in order of first appearance.
#[must_use]
pub fn dedup_by_id(places: Vec<Place>) -> Vec<Place> {
    let mut seen = HashSet::with_capacity(places.len());
    places
        .into_iter()
        .filter(|place| seen.insert(place.id))
        .collect()
}

/// Keep only the places offering every amenity in `required`.
#[must_use]
pub fn retain_with_amenities(mut places: Vec<Place>, required: &[AmenityId]) -> Vec<Place> {
    if !required.is_empty() {
        places.retain(|place| place.has_amenities(required));
    }
    places
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::{CityId, UserId};

    fn place(name: &str) -> Place {
        Place::new(CityId::new(), UserId::new(), name)
    }

    #[test]
    fn should_default_missing_and_null_lists_to_empty() {
        let query: PlaceQuery = serde_json::from_str(r#"{"states": null}"#).unwrap();
        assert!(query.is_unscoped());
        assert!(query.amenities.is_empty());
    }

    #[test]
    fn should_be_scoped_when_cities_given() {
        let query: PlaceQuery = serde_json::from_str(r#"{"cities": ["c1"]}"#).unwrap();
        assert!(!query.is_unscoped());
    }

    #[test]
    fn should_reject_non_list_criteria() {
        let result: Result<PlaceQuery, _> = serde_json::from_str(r#"{"states": "s1"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn should_return_none_when_amenity_id_is_malformed() {
        let query = PlaceQuery {
            amenities: vec!["wifi".to_string()],
            ..PlaceQuery::default()
        };
        assert!(query.amenity_ids().is_none());
    }

    #[test]
    fn should_parse_well_formed_amenity_ids() {
        let wifi = AmenityId::new();
        let query = PlaceQuery {
            amenities: vec![wifi.to_string()],
            ..PlaceQuery::default()
        };
        assert_eq!(query.amenity_ids(), Some(vec![wifi]));
    }

    #[test]
    fn should_keep_one_place_per_id() {
        let a = place("A");
        let b = place("B");
        let result = dedup_by_id(vec![a.clone(), b.clone(), a.clone()]);
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].id, a.id);
        assert_eq!(result[1].id, b.id);
    }

    #[test]
    fn should_filter_with_and_semantics() {
        let wifi = AmenityId::new();
        let pool = AmenityId::new();

        let mut only_wifi = place("Only wifi");
        only_wifi.link_amenity(wifi);
        let mut both = place("Both");
        both.link_amenity(wifi);
        both.link_amenity(pool);

        let result = retain_with_amenities(vec![only_wifi, both.clone()], &[wifi, pool]);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, both.id);
    }

    #[test]
    fn should_keep_everything_when_no_amenity_required() {
        let result = retain_with_amenities(vec![place("A"), place("B")], &[]);
        assert_eq!(result.len(), 2);
    }
}

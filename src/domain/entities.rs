//! Domain entities. Pure data structures for the core business.
//!
//! No Teamup/Discord client types here; adapters deserialize straight into these.

use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;

/// Fallback shown when an event's category has no entry in the [`CategoryMap`].
pub const UNKNOWN_CATEGORY: &str = "Unknown category";

/// One calendar week, Monday through Sunday, `offset` weeks away from the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub offset: i64,
}

/// Identifier issued by the calendar provider.
///
/// Teamup sends event ids as strings and sub-calendar ids as integers; both land here as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(from = "IdRepr")]
pub struct ProviderId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum IdRepr {
    Int(i64),
    Text(String),
}

impl From<IdRepr> for ProviderId {
    fn from(repr: IdRepr) -> Self {
        match repr {
            IdRepr::Int(n) => Self(n.to_string()),
            IdRepr::Text(s) => Self(s),
        }
    }
}

impl ProviderId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An event as returned by the provider. Read-only input to the core.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawEvent {
    pub id: ProviderId,
    #[serde(default)]
    pub title: Option<String>,
    /// ISO-8601 local start, e.g. `2026-10-15T09:00:00+02:00`.
    #[serde(default, rename = "start_dt")]
    pub start: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default, rename = "subcalendar_id")]
    pub category: Option<ProviderId>,
}

/// A sub-calendar as listed by the provider.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Category {
    pub id: ProviderId,
    pub name: String,
}

/// Category id -> display name. Rebuilt from scratch on every fetch.
#[derive(Debug, Clone, Default)]
pub struct CategoryMap {
    names: HashMap<ProviderId, String>,
}

impl CategoryMap {
    pub fn from_categories(categories: impl IntoIterator<Item = Category>) -> Self {
        Self {
            names: categories.into_iter().map(|c| (c.id, c.name)).collect(),
        }
    }

    /// Display name for `id`, or [`UNKNOWN_CATEGORY`].
    pub fn resolve(&self, id: Option<&ProviderId>) -> &str {
        id.and_then(|id| self.names.get(id))
            .map(String::as_str)
            .unwrap_or(UNKNOWN_CATEGORY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_deserializes_teamup_shape() {
        let json = r#"{
            "id": "1180",
            "title": "Standup",
            "start_dt": "2026-10-15T09:00:00+02:00",
            "location": "",
            "notes": null,
            "subcalendar_id": 5,
            "subcalendar_ids": [5]
        }"#;
        let ev: RawEvent = serde_json::from_str(json).unwrap();
        assert_eq!(ev.id.as_str(), "1180");
        assert_eq!(ev.start.as_deref(), Some("2026-10-15T09:00:00+02:00"));
        assert_eq!(ev.location.as_deref(), Some(""));
        assert_eq!(ev.notes, None);
        assert_eq!(ev.category, Some(ProviderId::new("5")));
    }

    #[test]
    fn test_event_missing_optional_fields() {
        let ev: RawEvent = serde_json::from_str(r#"{"id": 7}"#).unwrap();
        assert_eq!(ev.id.as_str(), "7");
        assert!(ev.title.is_none());
        assert!(ev.start.is_none());
        assert!(ev.category.is_none());
    }

    #[test]
    fn test_category_map_resolves_and_falls_back() {
        let map = CategoryMap::from_categories(vec![Category {
            id: ProviderId::new("5"),
            name: "Scrims".to_string(),
        }]);
        assert_eq!(map.resolve(Some(&ProviderId::new("5"))), "Scrims");
        assert_eq!(map.resolve(Some(&ProviderId::new("6"))), UNKNOWN_CATEGORY);
        assert_eq!(map.resolve(None), UNKNOWN_CATEGORY);
    }
}

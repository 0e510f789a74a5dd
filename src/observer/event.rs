//! Repository change notifications
//!
//! `RawEvent` is one change as the store reports it. `RepositoryEvent` is the
//! folded view of every change to one resource, with property changes
//! attributed to the node that owns the property.

use crate::rdf::vocab::REPOSITORY_NAMESPACE;
use crate::store::node::parent_path;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::fmt;

/// Kind of a low-level store change. Discriminants are the store's codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventType {
    NodeAdded = 1,
    NodeRemoved = 2,
    PropertyAdded = 4,
    PropertyRemoved = 8,
    PropertyChanged = 16,
    NodeMoved = 32,
    Persist = 64,
}

impl EventType {
    pub const ALL: [EventType; 7] = [
        EventType::NodeAdded,
        EventType::NodeRemoved,
        EventType::PropertyAdded,
        EventType::PropertyRemoved,
        EventType::PropertyChanged,
        EventType::NodeMoved,
        EventType::Persist,
    ];

    pub fn code(self) -> u32 {
        self as u32
    }

    pub fn from_code(code: u32) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.code() == code)
    }

    /// Human readable name
    pub fn name(self) -> &'static str {
        match self {
            EventType::NodeAdded => "node added",
            EventType::NodeRemoved => "node removed",
            EventType::PropertyAdded => "property added",
            EventType::PropertyRemoved => "property removed",
            EventType::PropertyChanged => "property changed",
            EventType::NodeMoved => "node moved",
            EventType::Persist => "persist",
        }
    }

    fn constant(self) -> &'static str {
        match self {
            EventType::NodeAdded => "NODE_ADDED",
            EventType::NodeRemoved => "NODE_REMOVED",
            EventType::PropertyAdded => "PROPERTY_ADDED",
            EventType::PropertyRemoved => "PROPERTY_REMOVED",
            EventType::PropertyChanged => "PROPERTY_CHANGED",
            EventType::NodeMoved => "NODE_MOVED",
            EventType::Persist => "PERSIST",
        }
    }

    /// Event-type URI in the repository namespace
    pub fn uri(self) -> String {
        format!("{}{}", REPOSITORY_NAMESPACE, self.constant())
    }

    /// Whether the change is to a property rather than a node
    pub fn is_property_event(self) -> bool {
        matches!(
            self,
            EventType::PropertyAdded | EventType::PropertyRemoved | EventType::PropertyChanged
        )
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single change notification as the store reports it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawEvent {
    pub event_type: EventType,

    /// Path of the changed item; for property events this is the property path
    pub path: String,

    /// Identifier of the changed node
    pub identifier: String,

    pub timestamp: DateTime<Utc>,

    #[serde(default)]
    pub user_id: Option<String>,

    #[serde(default)]
    pub user_data: Option<String>,

    #[serde(default)]
    pub info: HashMap<String, String>,
}

impl RawEvent {
    pub fn new(
        event_type: EventType,
        path: impl Into<String>,
        identifier: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            event_type,
            path: path.into(),
            identifier: identifier.into(),
            timestamp,
            user_id: None,
            user_data: None,
            info: HashMap::new(),
        }
    }

    pub fn with_user(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    /// Path of the resource the change belongs to.
    ///
    /// Property events are truncated to their parent node's path.
    pub fn resource_path(&self) -> &str {
        if self.event_type.is_property_event() {
            parent_path(&self.path).unwrap_or(&self.path)
        } else {
            &self.path
        }
    }

    /// Name of the changed property, for property events
    pub fn property_name(&self) -> Option<&str> {
        if !self.event_type.is_property_event() {
            return None;
        }
        self.path.rsplit('/').next().filter(|name| !name.is_empty())
    }
}

/// Changes to one resource, folded together
#[derive(Debug, Clone, PartialEq)]
pub struct RepositoryEvent {
    path: String,
    identifier: String,
    timestamp: DateTime<Utc>,
    user_id: Option<String>,
    user_data: Option<String>,
    info: HashMap<String, String>,
    types: BTreeSet<EventType>,
    properties: BTreeSet<String>,
}

impl RepositoryEvent {
    pub fn from_raw(raw: &RawEvent) -> Self {
        let mut event = Self {
            path: raw.resource_path().to_string(),
            identifier: raw.identifier.clone(),
            timestamp: raw.timestamp,
            user_id: raw.user_id.clone(),
            user_data: raw.user_data.clone(),
            info: raw.info.clone(),
            types: BTreeSet::new(),
            properties: BTreeSet::new(),
        };
        event.absorb(raw);
        event
    }

    /// Fold another change to the same resource into this event
    pub fn absorb(&mut self, raw: &RawEvent) {
        self.types.insert(raw.event_type);
        if let Some(name) = raw.property_name() {
            self.properties.insert(name.to_string());
        }
    }

    /// Normalized resource path
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    pub fn user_data(&self) -> Option<&str> {
        self.user_data.as_deref()
    }

    pub fn info(&self) -> &HashMap<String, String> {
        &self.info
    }

    /// Folded change types, ordered by code
    pub fn types(&self) -> &BTreeSet<EventType> {
        &self.types
    }

    pub fn properties(&self) -> &BTreeSet<String> {
        &self.properties
    }
}

impl fmt::Display for RepositoryEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let types: Vec<&str> = self.types.iter().map(|t| t.name()).collect();
        let properties: Vec<&str> = self.properties.iter().map(String::as_str).collect();
        write!(
            f,
            "RepositoryEvent{{types: {}, properties: {}, path: {}, date: {}}}",
            types.join(","),
            properties.join(","),
            self.path,
            self.timestamp.timestamp_millis()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(ms: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(ms).unwrap()
    }

    #[test]
    fn test_event_type_codes() {
        for event_type in EventType::ALL {
            assert_eq!(EventType::from_code(event_type.code()), Some(event_type));
        }
        assert_eq!(EventType::from_code(3), None);
        assert_eq!(
            EventType::NodeAdded.uri(),
            "http://fedora.info/definitions/v4/repository#NODE_ADDED"
        );
    }

    #[test]
    fn test_property_event_path_is_parent() {
        let raw = RawEvent::new(EventType::PropertyChanged, "/books/moby/dc:title", "id", at(0));
        assert_eq!(raw.resource_path(), "/books/moby");
        assert_eq!(raw.property_name(), Some("dc:title"));

        let event = RepositoryEvent::from_raw(&raw);
        assert_eq!(event.path(), "/books/moby");
        assert!(event.properties().contains("dc:title"));
    }

    #[test]
    fn test_node_event_keeps_path() {
        let raw = RawEvent::new(EventType::NodeAdded, "/books/moby", "id", at(0)).with_user("alice");
        let event = RepositoryEvent::from_raw(&raw);
        assert_eq!(event.path(), "/books/moby");
        assert!(event.properties().is_empty());
        assert_eq!(event.user_id(), Some("alice"));
    }

    #[test]
    fn test_raw_event_from_yaml() {
        let yaml = r#"
event_type: PROPERTY_ADDED
path: /a/dc:title
identifier: abc
timestamp: 2024-01-01T00:00:00Z
info:
  source: import
"#;
        let raw: RawEvent = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(raw.event_type, EventType::PropertyAdded);
        assert_eq!(raw.info.get("source").map(String::as_str), Some("import"));
    }
}

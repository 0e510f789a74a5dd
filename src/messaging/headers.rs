//! Message headers describing a repository event

use crate::observer::RepositoryEvent;
use crate::rdf::vocab::repository_term;
use indexmap::IndexMap;
use std::fmt;

pub const TIMESTAMP_HEADER_NAME: &str = repository_term!("timestamp");
pub const IDENTIFIER_HEADER_NAME: &str = repository_term!("identifier");
pub const EVENT_TYPE_HEADER_NAME: &str = repository_term!("eventType");
pub const PROPERTIES_HEADER_NAME: &str = repository_term!("properties");

/// Typed message header value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderValue {
    Long(i64),
    String(String),
}

impl HeaderValue {
    pub fn as_long(&self) -> Option<i64> {
        match self {
            HeaderValue::Long(value) => Some(*value),
            HeaderValue::String(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            HeaderValue::String(value) => Some(value),
            HeaderValue::Long(_) => None,
        }
    }
}

impl fmt::Display for HeaderValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeaderValue::Long(value) => write!(f, "{}", value),
            HeaderValue::String(value) => f.write_str(value),
        }
    }
}

/// Header name → value, in insertion order
pub type Headers = IndexMap<String, HeaderValue>;

/// Builds message headers for an event
pub trait MessageFactory {
    fn headers(&self, event: &RepositoryEvent) -> Headers;
}

/// Timestamp, identifier, event types and changed properties
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultMessageFactory;

impl MessageFactory for DefaultMessageFactory {
    fn headers(&self, event: &RepositoryEvent) -> Headers {
        let mut headers = Headers::new();
        headers.insert(
            TIMESTAMP_HEADER_NAME.to_string(),
            HeaderValue::Long(event.timestamp().timestamp_millis()),
        );
        headers.insert(
            IDENTIFIER_HEADER_NAME.to_string(),
            HeaderValue::String(event.path().to_string()),
        );
        let types: Vec<String> = event.types().iter().map(|t| t.uri()).collect();
        headers.insert(
            EVENT_TYPE_HEADER_NAME.to_string(),
            HeaderValue::String(types.join(",")),
        );
        if !event.properties().is_empty() {
            let properties: Vec<&str> = event.properties().iter().map(String::as_str).collect();
            headers.insert(
                PROPERTIES_HEADER_NAME.to_string(),
                HeaderValue::String(properties.join(",")),
            );
        }
        headers
    }
}

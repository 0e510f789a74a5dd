//! Property values and value types of the content store

use super::node::Node;
use super::{RepositoryError, RepositoryResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Store-native value type tag
///
/// Discriminants are the repository's numeric type codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub enum PropertyType {
    Undefined = 0,
    String = 1,
    Binary = 2,
    Long = 3,
    Double = 4,
    Date = 5,
    Boolean = 6,
    Name = 7,
    Path = 8,
    Reference = 9,
    WeakReference = 10,
    Uri = 11,
    Decimal = 12,
}

impl PropertyType {
    pub const ALL: [PropertyType; 13] = [
        PropertyType::Undefined,
        PropertyType::String,
        PropertyType::Binary,
        PropertyType::Long,
        PropertyType::Double,
        PropertyType::Date,
        PropertyType::Boolean,
        PropertyType::Name,
        PropertyType::Path,
        PropertyType::Reference,
        PropertyType::WeakReference,
        PropertyType::Uri,
        PropertyType::Decimal,
    ];

    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.code() == code)
    }

    /// Repository name of the type
    pub fn name(self) -> &'static str {
        match self {
            PropertyType::Undefined => "undefined",
            PropertyType::String => "String",
            PropertyType::Binary => "Binary",
            PropertyType::Long => "Long",
            PropertyType::Double => "Double",
            PropertyType::Date => "Date",
            PropertyType::Boolean => "Boolean",
            PropertyType::Name => "Name",
            PropertyType::Path => "Path",
            PropertyType::Reference => "Reference",
            PropertyType::WeakReference => "WeakReference",
            PropertyType::Uri => "URI",
            PropertyType::Decimal => "Decimal",
        }
    }

    pub fn is_reference(self) -> bool {
        matches!(self, PropertyType::Reference | PropertyType::WeakReference)
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single property value
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Binary(Vec<u8>),
    Long(i64),
    Double(f64),
    Date(DateTime<Utc>),
    Boolean(bool),
    Name(String),
    Path(String),
    /// Identifier of the referenced node
    Reference(String),
    /// Identifier of the weakly referenced node
    WeakReference(String),
    Uri(String),
    /// Lexical form of a decimal
    Decimal(String),
}

impl Value {
    pub fn property_type(&self) -> PropertyType {
        match self {
            Value::String(_) => PropertyType::String,
            Value::Binary(_) => PropertyType::Binary,
            Value::Long(_) => PropertyType::Long,
            Value::Double(_) => PropertyType::Double,
            Value::Date(_) => PropertyType::Date,
            Value::Boolean(_) => PropertyType::Boolean,
            Value::Name(_) => PropertyType::Name,
            Value::Path(_) => PropertyType::Path,
            Value::Reference(_) => PropertyType::Reference,
            Value::WeakReference(_) => PropertyType::WeakReference,
            Value::Uri(_) => PropertyType::Uri,
            Value::Decimal(_) => PropertyType::Decimal,
        }
    }

    /// Parse a lexical value as the given type
    pub fn parse(property_type: PropertyType, lexical: &str) -> RepositoryResult<Self> {
        let invalid = || RepositoryError::ValueFormat {
            property_type,
            value: lexical.to_string(),
        };
        let value = match property_type {
            PropertyType::String | PropertyType::Undefined => Value::String(lexical.to_string()),
            PropertyType::Binary => Value::Binary(lexical.as_bytes().to_vec()),
            PropertyType::Long => Value::Long(lexical.parse().map_err(|_| invalid())?),
            PropertyType::Double => Value::Double(lexical.parse().map_err(|_| invalid())?),
            PropertyType::Boolean => Value::Boolean(lexical.parse().map_err(|_| invalid())?),
            PropertyType::Date => Value::Date(
                DateTime::parse_from_rfc3339(lexical)
                    .map_err(|_| invalid())?
                    .with_timezone(&Utc),
            ),
            PropertyType::Decimal => {
                lexical.parse::<f64>().map_err(|_| invalid())?;
                Value::Decimal(lexical.to_string())
            }
            PropertyType::Name => Value::Name(lexical.to_string()),
            PropertyType::Path => Value::Path(lexical.to_string()),
            PropertyType::Reference => Value::Reference(lexical.to_string()),
            PropertyType::WeakReference => Value::WeakReference(lexical.to_string()),
            PropertyType::Uri => Value::Uri(lexical.to_string()),
        };
        Ok(value)
    }

    /// String form of the value, as the store would render it
    pub fn as_string(&self) -> String {
        match self {
            Value::String(s)
            | Value::Name(s)
            | Value::Path(s)
            | Value::Reference(s)
            | Value::WeakReference(s)
            | Value::Uri(s)
            | Value::Decimal(s) => s.clone(),
            Value::Binary(bytes) => String::from_utf8_lossy(bytes).into_owned(),
            Value::Long(l) => l.to_string(),
            Value::Double(d) => d.to_string(),
            Value::Date(d) => d.to_rfc3339(),
            Value::Boolean(b) => b.to_string(),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<i64> for Value {
    fn from(l: i64) -> Self {
        Value::Long(l)
    }
}

impl From<f64> for Value {
    fn from(d: f64) -> Self {
        Value::Double(d)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

/// A property read from a node
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    /// Node owning the property
    pub parent: Node,
    pub name: String,
    pub property_type: PropertyType,
    pub values: Vec<Value>,
    pub multiple: bool,
}

impl Property {
    /// First value as a string, the way single-valued configuration
    /// properties are read
    pub fn string(&self) -> RepositoryResult<String> {
        self.values
            .first()
            .map(Value::as_string)
            .ok_or_else(|| RepositoryError::ValueFormat {
                property_type: self.property_type,
                value: format!("{} has no value", self.name),
            })
    }
}

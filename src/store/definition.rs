//! Node-type and property definitions registered with the content store

use super::property::PropertyType;
use serde::{Deserialize, Serialize};

/// Definition of a property declared by a node type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyDefinition {
    /// Prefixed property name (`dc:title`), or an unprefixed internal name
    pub name: String,

    /// Value type every value of the property must have
    pub required_type: PropertyType,

    #[serde(default)]
    pub multiple: bool,
}

impl PropertyDefinition {
    pub fn new(name: impl Into<String>, required_type: PropertyType) -> Self {
        Self {
            name: name.into(),
            required_type,
            multiple: false,
        }
    }
}

/// Definition of a node type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeTypeDefinition {
    pub name: String,

    #[serde(default)]
    pub supertypes: Vec<String>,

    #[serde(default)]
    pub mixin: bool,

    #[serde(default)]
    pub properties: Vec<PropertyDefinition>,
}

impl NodeTypeDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            supertypes: Vec::new(),
            mixin: false,
            properties: Vec::new(),
        }
    }

    pub fn with_supertype(mut self, supertype: impl Into<String>) -> Self {
        self.supertypes.push(supertype.into());
        self
    }

    pub fn with_property(mut self, property: PropertyDefinition) -> Self {
        self.properties.push(property);
        self
    }
}

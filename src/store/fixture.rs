//! YAML repository fixtures for the in-memory store
//!
//! ```yaml
//! workspace: default
//! nodes:
//!   - path: /books
//!     type: nt:folder
//!     mixins: [ldp:BasicContainer]
//!     properties:
//!       - name: dc:title
//!         type: String
//!         values: [Books]
//! ```
//!
//! Nodes are created in listed order, so parents come before children.
//! Reference and weak reference values are written as target paths and are
//! resolved once every node exists.

use super::definition::NodeTypeDefinition;
use super::memory::MemoryStore;
use super::property::{PropertyType, Value};
use super::{ContentStore, RepositoryError};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::info;

/// Fixture loading errors
#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

pub type FixtureResult<T> = Result<T, FixtureError>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyFixture {
    pub name: String,

    #[serde(rename = "type", default = "default_property_type")]
    pub property_type: PropertyType,

    #[serde(default)]
    pub values: Vec<String>,

    /// Force multi-valued storage even for a single value
    #[serde(default)]
    pub multiple: bool,
}

fn default_property_type() -> PropertyType {
    PropertyType::String
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeFixture {
    pub path: String,

    #[serde(rename = "type", default = "default_node_type")]
    pub primary_type: String,

    #[serde(default)]
    pub identifier: Option<String>,

    #[serde(default)]
    pub mixins: Vec<String>,

    #[serde(default)]
    pub properties: Vec<PropertyFixture>,
}

fn default_node_type() -> String {
    "nt:folder".to_string()
}

/// Declarative description of a repository
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RepositoryFixture {
    #[serde(default)]
    pub workspace: Option<String>,

    #[serde(default)]
    pub node_types: Vec<NodeTypeDefinition>,

    #[serde(default)]
    pub nodes: Vec<NodeFixture>,
}

impl RepositoryFixture {
    pub fn from_yaml_str(yaml: &str) -> FixtureResult<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> FixtureResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&text)
    }

    /// Build an in-memory store holding the fixture's nodes
    pub fn build(&self) -> FixtureResult<MemoryStore> {
        let mut store = match &self.workspace {
            Some(name) => MemoryStore::with_workspace(name.clone()),
            None => MemoryStore::new(),
        };
        for definition in &self.node_types {
            store.register_node_type(definition.clone());
        }

        for node in &self.nodes {
            match &node.identifier {
                Some(id) => store.add_node_with_identifier(&node.path, id, &node.primary_type)?,
                None => store.add_node(&node.path, &node.primary_type)?,
            };
            for mixin in &node.mixins {
                store.add_mixin(&node.path, mixin)?;
            }
        }

        // Second pass: references need their targets to exist.
        for node in &self.nodes {
            for property in &node.properties {
                let mut values = property
                    .values
                    .iter()
                    .map(|lexical| resolve_value(&store, property.property_type, lexical))
                    .collect::<Result<Vec<_>, _>>()?;
                if values.len() == 1 && !property.multiple {
                    store.set_property(&node.path, &property.name, values.remove(0))?;
                } else {
                    store.set_values(&node.path, &property.name, property.property_type, values)?;
                }
            }
        }

        info!(
            "Loaded fixture with {} nodes into workspace {}",
            store.node_count(),
            store.workspace()
        );
        Ok(store)
    }
}

fn resolve_value(
    store: &MemoryStore,
    property_type: PropertyType,
    lexical: &str,
) -> Result<Value, RepositoryError> {
    if !property_type.is_reference() {
        return Value::parse(property_type, lexical);
    }
    let target = store
        .get_node(lexical)
        .ok_or_else(|| RepositoryError::ReferentNotFound(lexical.to_string()))?;
    Value::parse(property_type, target.identifier())
}

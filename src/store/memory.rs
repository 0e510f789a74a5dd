//! In-memory content store
//!
//! Nodes are kept in an insertion-ordered map keyed by path, which gives the
//! store a stable enumeration order for children, properties and inbound
//! references.

use super::definition::NodeTypeDefinition;
use super::node::{child_path, parent_path, Node};
use super::property::{Property, PropertyType, Value};
use super::{ContentStore, RepositoryError, RepositoryResult};
use indexmap::IndexMap;
use std::collections::HashMap;
use tracing::debug;
use uuid::Uuid;

/// Primary type given to the root node
pub const ROOT_NODE_TYPE: &str = "mode:root";

#[derive(Debug, Clone)]
struct StoredProperty {
    property_type: PropertyType,
    values: Vec<Value>,
    multiple: bool,
}

#[derive(Debug, Clone)]
struct NodeRecord {
    identifier: String,
    primary_type: String,
    mixins: Vec<String>,
    properties: IndexMap<String, StoredProperty>,
    /// Child paths in creation order
    children: Vec<String>,
}

impl NodeRecord {
    fn new(identifier: String, primary_type: String) -> Self {
        Self {
            identifier,
            primary_type,
            mixins: Vec::new(),
            properties: IndexMap::new(),
            children: Vec::new(),
        }
    }
}

/// In-memory content store
#[derive(Debug, Clone)]
pub struct MemoryStore {
    workspace: String,

    /// Path -> node record
    nodes: IndexMap<String, NodeRecord>,

    /// Identifier -> path
    identifiers: HashMap<String, String>,

    node_types: Vec<NodeTypeDefinition>,
}

impl MemoryStore {
    /// Create a store holding only the root node
    pub fn new() -> Self {
        Self::with_workspace("default")
    }

    pub fn with_workspace(workspace: impl Into<String>) -> Self {
        let mut store = Self {
            workspace: workspace.into(),
            nodes: IndexMap::new(),
            identifiers: HashMap::new(),
            node_types: Vec::new(),
        };
        let root_id = Uuid::new_v4().to_string();
        store.identifiers.insert(root_id.clone(), "/".to_string());
        store
            .nodes
            .insert("/".to_string(), NodeRecord::new(root_id, ROOT_NODE_TYPE.to_string()));
        store
    }

    /// Create a node under an existing parent, with a generated identifier
    pub fn add_node(&mut self, path: &str, primary_type: &str) -> RepositoryResult<Node> {
        self.add_node_with_identifier(path, &Uuid::new_v4().to_string(), primary_type)
    }

    pub fn add_node_with_identifier(
        &mut self,
        path: &str,
        identifier: &str,
        primary_type: &str,
    ) -> RepositoryResult<Node> {
        if self.nodes.contains_key(path) {
            return Err(RepositoryError::ItemExists(path.to_string()));
        }
        if self.identifiers.contains_key(identifier) {
            return Err(RepositoryError::ItemExists(identifier.to_string()));
        }
        let parent = parent_path(path).ok_or_else(|| RepositoryError::PathNotFound(path.to_string()))?;
        let name = path[parent.len()..].trim_start_matches('/');
        if name.is_empty() || child_path(parent, name) != path {
            return Err(RepositoryError::PathNotFound(path.to_string()));
        }
        self.record_mut(parent)?.children.push(path.to_string());

        self.nodes.insert(
            path.to_string(),
            NodeRecord::new(identifier.to_string(), primary_type.to_string()),
        );
        self.identifiers.insert(identifier.to_string(), path.to_string());
        debug!("Created node {} ({}) in workspace {}", path, primary_type, self.workspace);

        Ok(Node::new(path, identifier))
    }

    pub fn add_mixin(&mut self, path: &str, mixin: &str) -> RepositoryResult<()> {
        let record = self.record_mut(path)?;
        if record.primary_type != mixin && !record.mixins.iter().any(|m| m == mixin) {
            record.mixins.push(mixin.to_string());
        }
        Ok(())
    }

    /// Set a single-valued property
    pub fn set_property(&mut self, path: &str, name: &str, value: impl Into<Value>) -> RepositoryResult<()> {
        let value = value.into();
        let property = StoredProperty {
            property_type: value.property_type(),
            values: vec![value],
            multiple: false,
        };
        self.record_mut(path)?.properties.insert(name.to_string(), property);
        Ok(())
    }

    /// Set a multi-valued property; every value must have `property_type`
    pub fn set_values(
        &mut self,
        path: &str,
        name: &str,
        property_type: PropertyType,
        values: Vec<Value>,
    ) -> RepositoryResult<()> {
        if let Some(bad) = values.iter().find(|v| v.property_type() != property_type) {
            return Err(RepositoryError::ValueFormat {
                property_type,
                value: bad.as_string(),
            });
        }
        let property = StoredProperty {
            property_type,
            values,
            multiple: true,
        };
        self.record_mut(path)?.properties.insert(name.to_string(), property);
        Ok(())
    }

    /// Point a reference property at the node found at `target_path`
    pub fn set_reference(&mut self, path: &str, name: &str, target_path: &str) -> RepositoryResult<()> {
        let target = self.record(target_path)?.identifier.clone();
        self.set_property(path, name, Value::Reference(target))
    }

    pub fn register_node_type(&mut self, definition: NodeTypeDefinition) {
        self.node_types.retain(|d| d.name != definition.name);
        self.node_types.push(definition);
    }

    pub fn get_node(&self, path: &str) -> Option<Node> {
        self.nodes
            .get(path)
            .map(|record| Node::new(path, record.identifier.clone()))
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn record(&self, path: &str) -> RepositoryResult<&NodeRecord> {
        self.nodes
            .get(path)
            .ok_or_else(|| RepositoryError::PathNotFound(path.to_string()))
    }

    fn record_mut(&mut self, path: &str) -> RepositoryResult<&mut NodeRecord> {
        self.nodes
            .get_mut(path)
            .ok_or_else(|| RepositoryError::PathNotFound(path.to_string()))
    }

    fn inbound(&self, node: &Node, kind: PropertyType, name: Option<&str>) -> RepositoryResult<Vec<Property>> {
        self.record(node.path())?;
        let mut found = Vec::new();
        for (path, record) in &self.nodes {
            for (property_name, property) in &record.properties {
                if property.property_type != kind || name.map_or(false, |n| n != property_name.as_str()) {
                    continue;
                }
                let points_here = property.values.iter().any(|v| match v {
                    Value::Reference(id) | Value::WeakReference(id) => id == node.identifier(),
                    _ => false,
                });
                if points_here {
                    found.push(to_property(path, record, property_name, property));
                }
            }
        }
        Ok(found)
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

fn to_property(path: &str, record: &NodeRecord, name: &str, stored: &StoredProperty) -> Property {
    Property {
        parent: Node::new(path, record.identifier.clone()),
        name: name.to_string(),
        property_type: stored.property_type,
        values: stored.values.clone(),
        multiple: stored.multiple,
    }
}

impl ContentStore for MemoryStore {
    fn workspace(&self) -> &str {
        &self.workspace
    }

    fn node_at(&self, path: &str) -> RepositoryResult<Option<Node>> {
        Ok(self.get_node(path))
    }

    fn node_by_identifier(&self, identifier: &str) -> RepositoryResult<Option<Node>> {
        Ok(self
            .identifiers
            .get(identifier)
            .map(|path| Node::new(path.clone(), identifier)))
    }

    fn node_types(&self, node: &Node) -> RepositoryResult<Vec<String>> {
        let record = self.record(node.path())?;
        let mut types = Vec::with_capacity(record.mixins.len() + 1);
        types.push(record.primary_type.clone());
        types.extend(record.mixins.iter().cloned());
        Ok(types)
    }

    fn properties(&self, node: &Node) -> RepositoryResult<Vec<Property>> {
        let record = self.record(node.path())?;
        Ok(record
            .properties
            .iter()
            .map(|(name, stored)| to_property(node.path(), record, name, stored))
            .collect())
    }

    fn property(&self, node: &Node, name: &str) -> RepositoryResult<Option<Property>> {
        let record = self.record(node.path())?;
        Ok(record
            .properties
            .get(name)
            .map(|stored| to_property(node.path(), record, name, stored)))
    }

    fn children(&self, node: &Node) -> RepositoryResult<Vec<Node>> {
        let record = self.record(node.path())?;
        record
            .children
            .iter()
            .map(|path| {
                self.get_node(path)
                    .ok_or_else(|| RepositoryError::PathNotFound(path.clone()))
            })
            .collect()
    }

    fn references(&self, node: &Node, name: Option<&str>) -> RepositoryResult<Vec<Property>> {
        self.inbound(node, PropertyType::Reference, name)
    }

    fn weak_references(&self, node: &Node, name: Option<&str>) -> RepositoryResult<Vec<Property>> {
        self.inbound(node, PropertyType::WeakReference, name)
    }

    fn node_type_definitions(&self) -> RepositoryResult<Vec<NodeTypeDefinition>> {
        Ok(self.node_types.clone())
    }
}

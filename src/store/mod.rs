//! Content store capability
//!
//! The projection engine never owns repository data. It reads nodes,
//! properties, references and type metadata through [`ContentStore`], and
//! every read can fail with a [`RepositoryError`].
//!
//! [`MemoryStore`] is an in-memory implementation used by the CLI, the
//! benchmarks and the tests.

pub mod definition;
pub mod fixture;
pub mod memory;
pub mod node;
pub mod property;

pub use definition::{NodeTypeDefinition, PropertyDefinition};
pub use fixture::{FixtureError, FixtureResult, RepositoryFixture};
pub use memory::MemoryStore;
pub use node::Node;
pub use property::{Property, PropertyType, Value};

use thiserror::Error;

/// Errors raised while reading the content store
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RepositoryError {
    #[error("Path not found: {0}")]
    PathNotFound(String),

    #[error("Item already exists: {0}")]
    ItemExists(String),

    #[error("Referenced node not found: {0}")]
    ReferentNotFound(String),

    #[error("Invalid {property_type} value: {value}")]
    ValueFormat {
        property_type: PropertyType,
        value: String,
    },

    #[error("Repository access failed: {0}")]
    Access(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Read capability over a hierarchical, typed content store
///
/// Sequences are returned in the store's enumeration order.
pub trait ContentStore {
    /// Name of the workspace this store exposes
    fn workspace(&self) -> &str;

    fn node_at(&self, path: &str) -> RepositoryResult<Option<Node>>;

    fn node_by_identifier(&self, identifier: &str) -> RepositoryResult<Option<Node>>;

    /// Primary type followed by mixin types
    fn node_types(&self, node: &Node) -> RepositoryResult<Vec<String>>;

    fn properties(&self, node: &Node) -> RepositoryResult<Vec<Property>>;

    fn children(&self, node: &Node) -> RepositoryResult<Vec<Node>>;

    /// Strong reference properties pointing at `node`, optionally by name
    fn references(&self, node: &Node, name: Option<&str>) -> RepositoryResult<Vec<Property>>;

    /// Weak reference properties pointing at `node`, optionally by name
    fn weak_references(&self, node: &Node, name: Option<&str>) -> RepositoryResult<Vec<Property>>;

    fn node_type_definitions(&self) -> RepositoryResult<Vec<NodeTypeDefinition>> {
        Ok(Vec::new())
    }

    fn property(&self, node: &Node, name: &str) -> RepositoryResult<Option<Property>> {
        Ok(self.properties(node)?.into_iter().find(|p| p.name == name))
    }

    fn child(&self, node: &Node, name: &str) -> RepositoryResult<Option<Node>> {
        Ok(self.children(node)?.into_iter().find(|c| c.name() == name))
    }

    fn is_node_type(&self, node: &Node, node_type: &str) -> RepositoryResult<bool> {
        Ok(self.node_types(node)?.iter().any(|t| t == node_type))
    }
}

/// Read session bound to the workspace a node lives in
#[derive(Clone, Copy)]
pub struct Session<'a> {
    store: &'a dyn ContentStore,
}

impl<'a> Session<'a> {
    pub fn new(store: &'a dyn ContentStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &'a dyn ContentStore {
        self.store
    }

    pub fn workspace(&self) -> &'a str {
        self.store.workspace()
    }

    /// Resolve a reference value to the node it identifies
    pub fn referent(&self, identifier: &str) -> RepositoryResult<Node> {
        self.store
            .node_by_identifier(identifier)?
            .ok_or_else(|| RepositoryError::ReferentNotFound(identifier.to_string()))
    }

    /// Resolve a path value to the node at that path
    pub fn node_at(&self, path: &str) -> RepositoryResult<Node> {
        self.store
            .node_at(path)?
            .ok_or_else(|| RepositoryError::PathNotFound(path.to_string()))
    }
}

impl std::fmt::Debug for Session<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("workspace", &self.store.workspace())
            .finish()
    }
}

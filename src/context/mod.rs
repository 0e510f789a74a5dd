//! Node projection strategies
//!
//! A node is described by concatenating the streams of one or more
//! [`RdfContext`] strategies. Each strategy is a plain function from a bound
//! node ([`NodeScope`]) to a triple stream; [`NodeContext`] binds the node's
//! identity eagerly and defers running the strategies until the stream is
//! pulled.
//!
//! # Example
//!
//! ```rust
//! use ldp_projection::context::{Projector, RdfContext};
//! use ldp_projection::identifiers::HttpIdentifierTranslator;
//! use ldp_projection::rdf::NamespaceRegistry;
//! use ldp_projection::store::MemoryStore;
//!
//! let mut store = MemoryStore::new();
//! store.add_node("/books", "nt:folder").unwrap();
//! store.add_mixin("/books", "ldp:BasicContainer").unwrap();
//! store.add_node("/books/moby", "nt:folder").unwrap();
//!
//! let translator = HttpIdentifierTranslator::new("http://localhost:8080/rest");
//! let namespaces = NamespaceRegistry::new();
//! let projector = Projector::new(&store, &translator, &namespaces);
//!
//! let stream = projector.describe_path("/books", &[RdfContext::LdpMembership]);
//! assert_eq!(stream.topic().unwrap().as_str(), "http://localhost:8080/rest/books");
//! let triples = stream.try_collect().unwrap();
//! assert_eq!(triples.len(), 1);
//! ```

mod blank;
mod container;
mod hash;
mod node;
mod properties;
mod references;
mod types;

pub use container::{ContainerClassification, Insertion};
pub use node::NodeContext;

use crate::error::ProjectionResult;
use crate::identifiers::IdentifierTranslator;
use crate::rdf::{NamedNode, NamespaceRegistry, TripleStream};
use crate::store::{ContentStore, Node, RepositoryError, Session};
use std::fmt;
use std::str::FromStr;

/// Projection strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RdfContext {
    /// `rdf:type` for each node type
    Types,
    /// The node's own non-internal properties
    Properties,
    /// Blank nodes reachable through the node's references
    BlankNodes,
    /// Sub-resources under the node's hash segment
    HashChildren,
    /// LDP membership triples
    LdpMembership,
    /// Inbound strong then weak references
    References,
}

impl RdfContext {
    pub const ALL: [RdfContext; 6] = [
        RdfContext::Types,
        RdfContext::Properties,
        RdfContext::BlankNodes,
        RdfContext::HashChildren,
        RdfContext::LdpMembership,
        RdfContext::References,
    ];

    /// Strategies safe to run on fragment and blank nodes: none of them
    /// fans out into further containment or reference discovery.
    pub const RESTRICTED: [RdfContext; 3] = [
        RdfContext::Types,
        RdfContext::Properties,
        RdfContext::BlankNodes,
    ];

    pub fn name(self) -> &'static str {
        match self {
            RdfContext::Types => "types",
            RdfContext::Properties => "properties",
            RdfContext::BlankNodes => "blank-nodes",
            RdfContext::HashChildren => "hash",
            RdfContext::LdpMembership => "membership",
            RdfContext::References => "references",
        }
    }

    fn generate<'a>(self, scope: &NodeScope<'a>) -> ProjectionResult<TripleStream<'a>> {
        match self {
            RdfContext::Types => types::triples(scope),
            RdfContext::Properties => properties::triples(scope),
            RdfContext::BlankNodes => blank::triples(scope),
            RdfContext::HashChildren => hash::triples(scope),
            RdfContext::LdpMembership => container::triples(scope),
            RdfContext::References => references::triples(scope),
        }
    }
}

impl fmt::Display for RdfContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RdfContext {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RdfContext::ALL
            .iter()
            .copied()
            .find(|c| c.name() == s)
            .ok_or_else(|| format!("unknown context '{}'", s))
    }
}

/// Read-only inputs shared by every projection
#[derive(Clone, Copy)]
pub struct Projector<'a> {
    store: &'a dyn ContentStore,
    translator: &'a dyn IdentifierTranslator,
    namespaces: &'a NamespaceRegistry,
    hash_segment: &'a str,
}

impl<'a> Projector<'a> {
    pub fn new(
        store: &'a dyn ContentStore,
        translator: &'a dyn IdentifierTranslator,
        namespaces: &'a NamespaceRegistry,
    ) -> Self {
        Self {
            store,
            translator,
            namespaces,
            hash_segment: "#",
        }
    }

    /// Use a different name for the reserved fragment child
    pub fn with_hash_segment(mut self, hash_segment: &'a str) -> Self {
        self.hash_segment = hash_segment;
        self
    }

    pub fn store(&self) -> &'a dyn ContentStore {
        self.store
    }

    pub fn translator(&self) -> &'a dyn IdentifierTranslator {
        self.translator
    }

    pub fn namespaces(&self) -> &'a NamespaceRegistry {
        self.namespaces
    }

    pub fn hash_segment(&self) -> &'a str {
        self.hash_segment
    }

    /// Bind a node for projection
    pub fn context(&self, node: Option<Node>) -> NodeContext<'a> {
        NodeContext::new(*self, node)
    }

    /// Describe `node` with the given strategies, in order
    pub fn describe(&self, node: Option<Node>, contexts: &[RdfContext]) -> TripleStream<'a> {
        self.context(node).describe(contexts)
    }

    /// Describe the node at `path`.
    ///
    /// The topic is derived from the path alone; the node itself is looked
    /// up when the stream is first pulled.
    pub fn describe_path(&self, path: &str, contexts: &[RdfContext]) -> TripleStream<'a> {
        let topic = self.translator.to_resource(path).ok();
        let projector = *self;
        let path = path.to_string();
        let contexts = contexts.to_vec();
        TripleStream::deferred(move || {
            let node = projector
                .store
                .node_at(&path)?
                .ok_or(RepositoryError::PathNotFound(path))?;
            Ok(projector.describe(Some(node), &contexts))
        })
        .topic_of(topic)
    }
}

impl fmt::Debug for Projector<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Projector")
            .field("workspace", &self.store.workspace())
            .field("hash_segment", &self.hash_segment)
            .finish()
    }
}

/// A node bound for triple generation
#[derive(Clone)]
pub(crate) struct NodeScope<'a> {
    pub projector: Projector<'a>,
    pub session: Session<'a>,
    pub node: Node,
    pub subject: NamedNode,
}

impl<'a> NodeScope<'a> {
    pub fn store(&self) -> &'a dyn ContentStore {
        self.session.store()
    }
}

//! LDP Projection
//!
//! Projects nodes of a hierarchical, typed content repository into Linked
//! Data Platform RDF triples.
//!
//! # Architecture
//!
//! - [`store`]: the content store capability the engine reads from, plus an
//!   in-memory implementation and YAML fixtures
//! - [`identifiers`]: store path ↔ resource IRI translation
//! - [`rdf`]: terms, triples, namespaces and the lazy [`TripleStream`]
//! - [`convert`]: store values and properties → RDF terms and triples
//! - [`context`]: projection strategies (types, properties, blank nodes,
//!   hash resources, LDP membership, inbound references)
//! - [`mapping`]: node-type and property definitions → RDFS
//! - [`observer`] / [`messaging`]: change-event coalescing and header
//!   construction for publication
//!
//! Nothing is read from the store until a stream is pulled, and any store
//! failure ends the stream with a single [`RepositoryRuntimeError`].
//!
//! ## Example Usage
//!
//! ```rust
//! use ldp_projection::context::{Projector, RdfContext};
//! use ldp_projection::identifiers::HttpIdentifierTranslator;
//! use ldp_projection::rdf::NamespaceRegistry;
//! use ldp_projection::store::MemoryStore;
//!
//! let mut store = MemoryStore::new();
//! store.add_node("/books", "nt:folder").unwrap();
//! store.set_property("/books", "dc:title", "Books").unwrap();
//!
//! let translator = HttpIdentifierTranslator::new("http://localhost:8080/rest");
//! let namespaces = NamespaceRegistry::new();
//! let projector = Projector::new(&store, &translator, &namespaces);
//!
//! let triples = projector
//!     .describe_path("/books", &[RdfContext::Types, RdfContext::Properties])
//!     .try_collect()
//!     .unwrap();
//! // nt:folder and the title
//! assert_eq!(triples.len(), 2);
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod context;
pub mod convert;
pub mod error;
pub mod identifiers;
pub mod mapping;
pub mod messaging;
pub mod observer;
pub mod rdf;
pub mod store;

// Re-export main types for convenience
pub use config::{ConfigError, ConfigResult, ProjectionConfig};

pub use context::{ContainerClassification, Insertion, NodeContext, Projector, RdfContext};

pub use error::{ProjectionResult, RepositoryRuntimeError};

pub use identifiers::{HttpIdentifierTranslator, IdentifierTranslator, TranslationError};

pub use mapping::{schema_triples, NodeTypeToTriples, PropertyDefinitionToTriples};

pub use messaging::{DefaultMessageFactory, EventPublisher, EventSink, HeaderValue, Headers, MessageFactory};

pub use observer::{EventCoalescer, EventType, RawEvent, RepositoryEvent};

pub use rdf::{Literal, NamedNode, NamespaceRegistry, RdfObject, Triple, TripleStream};

pub use store::{
    ContentStore, MemoryStore, Node, Property, PropertyType, RepositoryError, RepositoryFixture,
    Session, Value,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}

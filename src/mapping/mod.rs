//! Schema projection
//!
//! Node-type and property definitions registered with the store become RDFS
//! vocabulary: classes for node types, properties with domains and, where the
//! value type has an XSD counterpart, ranges.

mod item_definition;
mod node_type;
mod property_definition;

pub use item_definition::ItemDefinitionToTriples;
pub use node_type::NodeTypeToTriples;
pub use property_definition::{range_for_type, PropertyDefinitionToTriples};

use crate::error::ProjectionResult;
use crate::rdf::{NamespaceRegistry, TripleStream};
use crate::store::ContentStore;
use tracing::debug;

/// RDFS description of every node type the store defines.
///
/// Definitions are read when the stream is first pulled.
pub fn schema_triples<'a>(store: &'a dyn ContentStore, namespaces: &'a NamespaceRegistry) -> TripleStream<'a> {
    TripleStream::deferred(move || -> ProjectionResult<TripleStream<'a>> {
        let definitions = store.node_type_definitions()?;
        debug!("Projecting {} node type definitions", definitions.len());

        let mapper = NodeTypeToTriples::new(namespaces);
        let mut stream = TripleStream::empty();
        for definition in &definitions {
            stream.concat(TripleStream::from_triples(mapper.triples(definition)?));
        }
        Ok(stream)
    })
}

//! Property definitions → RDFS ranges

use super::item_definition::ItemDefinitionToTriples;
use crate::error::ProjectionResult;
use crate::rdf::{split_prefixed, NamedNode, NamespaceRegistry, Triple};
use crate::store::{PropertyDefinition, PropertyType};
use oxrdf::vocab::{rdfs, xsd};
use oxrdf::NamedNodeRef;
use tracing::{debug, trace};

/// XSD datatype for a store value type, `None` if there is no equivalent
pub fn range_for_type(property_type: PropertyType) -> Option<NamedNodeRef<'static>> {
    match property_type {
        PropertyType::Boolean => Some(xsd::BOOLEAN),
        PropertyType::Date => Some(xsd::DATE),
        PropertyType::Decimal | PropertyType::Double => Some(xsd::DECIMAL),
        PropertyType::Long => Some(xsd::LONG),
        PropertyType::Uri
        | PropertyType::Reference
        | PropertyType::WeakReference
        | PropertyType::Path => Some(xsd::ANY_URI),
        PropertyType::Binary | PropertyType::String => Some(xsd::STRING),
        PropertyType::Undefined | PropertyType::Name => None,
    }
}

/// Turns a property definition into its range plus the item triples
#[derive(Debug, Clone)]
pub struct PropertyDefinitionToTriples<'a> {
    items: ItemDefinitionToTriples<'a>,
}

impl<'a> PropertyDefinitionToTriples<'a> {
    /// Definitions will hang off `domain`
    pub fn new(domain: NamedNode, namespaces: &'a NamespaceRegistry) -> Self {
        Self {
            items: ItemDefinitionToTriples::new(domain, namespaces),
        }
    }

    pub fn triples(&self, definition: &PropertyDefinition) -> ProjectionResult<Vec<Triple>> {
        if split_prefixed(&definition.name).is_none() {
            debug!(
                "Discarding property definition {} without namespace",
                definition.name
            );
            return Ok(Vec::new());
        }

        let mut triples = Vec::with_capacity(4);
        match range_for_type(definition.required_type) {
            Some(range) => {
                trace!(
                    "Adding range {} for property {} of type {}",
                    range,
                    definition.name,
                    definition.required_type
                );
                triples.push(Triple::new(
                    self.items.resource(&definition.name)?,
                    rdfs::RANGE,
                    NamedNode::from(range),
                ));
            }
            None => trace!(
                "Skipping range for property {} of unmappable type {}",
                definition.name,
                definition.required_type
            ),
        }
        triples.extend(self.items.triples(&definition.name)?);
        Ok(triples)
    }
}

//! Node-type definitions → RDFS classes

use super::property_definition::PropertyDefinitionToTriples;
use crate::error::ProjectionResult;
use crate::rdf::{split_prefixed, Literal, NamedNode, NamespaceRegistry, Triple};
use crate::store::NodeTypeDefinition;
use oxrdf::vocab::{rdf, rdfs};
use tracing::debug;

#[derive(Debug, Clone, Copy)]
pub struct NodeTypeToTriples<'a> {
    namespaces: &'a NamespaceRegistry,
}

impl<'a> NodeTypeToTriples<'a> {
    pub fn new(namespaces: &'a NamespaceRegistry) -> Self {
        Self { namespaces }
    }

    pub fn triples(&self, definition: &NodeTypeDefinition) -> ProjectionResult<Vec<Triple>> {
        if split_prefixed(&definition.name).is_none() {
            debug!("Discarding node type {} without namespace", definition.name);
            return Ok(Vec::new());
        }
        let class = NamedNode::new(&self.namespaces.expand(&definition.name)?)?;

        let mut triples = vec![
            Triple::new(class.clone(), rdf::TYPE, NamedNode::from(rdfs::CLASS)),
            Triple::new(class.clone(), rdfs::LABEL, Literal::simple(definition.name.as_str())),
        ];
        for supertype in &definition.supertypes {
            if split_prefixed(supertype).is_none() {
                continue;
            }
            let superclass = NamedNode::new(&self.namespaces.expand(supertype)?)?;
            triples.push(Triple::new(class.clone(), rdfs::SUB_CLASS_OF, superclass));
        }

        let properties = PropertyDefinitionToTriples::new(class, self.namespaces);
        for property in &definition.properties {
            triples.extend(properties.triples(property)?);
        }
        Ok(triples)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{PropertyDefinition, PropertyType};

    #[test]
    fn test_class_triples() {
        let namespaces = NamespaceRegistry::new();
        let definition = NodeTypeDefinition::new("fedora:Container")
            .with_supertype("fedora:Resource")
            .with_supertype("internal")
            .with_property(PropertyDefinition::new("dc:title", PropertyType::String))
            .with_property(PropertyDefinition::new("hidden", PropertyType::String));

        let triples = NodeTypeToTriples::new(&namespaces).triples(&definition).unwrap();
        assert_eq!(triples.len(), 7);
        assert_eq!(triples[0].object.as_named_node().unwrap().as_str(), rdfs::CLASS.as_str());
        assert_eq!(
            triples[2].object.as_named_node().unwrap().as_str(),
            "http://fedora.info/definitions/v4/repository#Resource"
        );
        let domains: Vec<_> = triples
            .iter()
            .filter(|t| t.predicate.as_str() == rdfs::DOMAIN.as_str())
            .collect();
        assert_eq!(domains.len(), 1);
        assert_eq!(
            domains[0].object.as_named_node().unwrap().as_str(),
            "http://fedora.info/definitions/v4/repository#Container"
        );
    }
}

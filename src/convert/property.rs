//! Property ↔ predicate conversion

use super::value::ValueConverter;
use crate::error::ProjectionResult;
use crate::identifiers::IdentifierTranslator;
use crate::rdf::vocab::{INTERNAL_PREFIXES, REFERENCE_PROPERTY_SUFFIX};
use crate::rdf::{split_prefixed, NamedNode, NamespaceRegistry, Triple};
use crate::store::{Property, PropertyType};

/// Predicate for a store property name, `None` for unprefixed names.
///
/// The reference suffix is dropped, so `ex:author_ref` and `ex:author`
/// share a predicate.
pub fn predicate_for_property(
    namespaces: &NamespaceRegistry,
    name: &str,
) -> ProjectionResult<Option<NamedNode>> {
    if split_prefixed(name).is_none() {
        return Ok(None);
    }
    let name = name.strip_suffix(REFERENCE_PROPERTY_SUFFIX).unwrap_or(name);
    let iri = namespaces.expand(name)?;
    Ok(Some(NamedNode::new(&iri)?))
}

/// Store property name for a predicate, `None` when no prefix covers it
pub fn property_name_for_predicate(namespaces: &NamespaceRegistry, predicate: &NamedNode) -> Option<String> {
    namespaces.compact(predicate.as_str())
}

/// Whether a property is store bookkeeping that never becomes a triple
pub fn is_internal_property(property: &Property) -> bool {
    if property.property_type == PropertyType::Binary {
        return true;
    }
    match split_prefixed(&property.name) {
        Some((prefix, _)) => INTERNAL_PREFIXES.contains(&prefix),
        None => true,
    }
}

/// Turns one property into one triple per value
///
/// The subject is the node owning the property.
#[derive(Clone, Copy)]
pub struct PropertyToTriples<'a> {
    values: ValueConverter<'a>,
    translator: &'a dyn IdentifierTranslator,
    namespaces: &'a NamespaceRegistry,
}

impl<'a> PropertyToTriples<'a> {
    pub fn new(
        values: ValueConverter<'a>,
        translator: &'a dyn IdentifierTranslator,
        namespaces: &'a NamespaceRegistry,
    ) -> Self {
        Self {
            values,
            translator,
            namespaces,
        }
    }

    pub fn triples(&self, property: &Property) -> ProjectionResult<Vec<Triple>> {
        let Some(predicate) = predicate_for_property(self.namespaces, &property.name)? else {
            return Ok(Vec::new());
        };
        let subject = self.translator.node_to_resource(&property.parent)?;
        property
            .values
            .iter()
            .map(|value| {
                Ok(Triple::new(
                    subject.clone(),
                    predicate.clone(),
                    self.values.convert(value)?,
                ))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{Node, Value};

    #[test]
    fn test_predicate_for_property() {
        let namespaces = NamespaceRegistry::new();
        assert_eq!(
            predicate_for_property(&namespaces, "dc:title").unwrap().unwrap().as_str(),
            "http://purl.org/dc/elements/1.1/title"
        );
        assert_eq!(
            predicate_for_property(&namespaces, "dcterms:isPartOf_ref")
                .unwrap()
                .unwrap()
                .as_str(),
            "http://purl.org/dc/terms/isPartOf"
        );
        assert!(predicate_for_property(&namespaces, "title").unwrap().is_none());
        assert!(predicate_for_property(&namespaces, "nope:title").is_err());
    }

    #[test]
    fn test_property_name_for_predicate() {
        let namespaces = NamespaceRegistry::new();
        let predicate = NamedNode::new("http://purl.org/dc/terms/hasPart").unwrap();
        assert_eq!(
            property_name_for_predicate(&namespaces, &predicate),
            Some("dcterms:hasPart".to_string())
        );
    }

    #[test]
    fn test_internal_properties() {
        let property = |name: &str, property_type| Property {
            parent: Node::new("/a", "id"),
            name: name.to_string(),
            property_type,
            values: vec![Value::from("x")],
            multiple: false,
        };
        assert!(is_internal_property(&property("jcr:primaryType", PropertyType::Name)));
        assert!(is_internal_property(&property("unprefixed", PropertyType::String)));
        assert!(is_internal_property(&property("ex:data", PropertyType::Binary)));
        assert!(!is_internal_property(&property("dc:title", PropertyType::String)));
    }
}

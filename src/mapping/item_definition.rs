//! Triples shared by every item definition

use crate::error::ProjectionResult;
use crate::rdf::{Literal, NamedNode, NamespaceRegistry, Triple};
use oxrdf::vocab::{rdf, rdfs};

/// Declares a defined item as an `rdf:Property` of its owning type
#[derive(Debug, Clone)]
pub struct ItemDefinitionToTriples<'a> {
    domain: NamedNode,
    namespaces: &'a NamespaceRegistry,
}

impl<'a> ItemDefinitionToTriples<'a> {
    pub fn new(domain: NamedNode, namespaces: &'a NamespaceRegistry) -> Self {
        Self { domain, namespaces }
    }

    pub fn domain(&self) -> &NamedNode {
        &self.domain
    }

    /// Resource naming the item
    pub fn resource(&self, name: &str) -> ProjectionResult<NamedNode> {
        Ok(NamedNode::new(&self.namespaces.expand(name)?)?)
    }

    pub fn triples(&self, name: &str) -> ProjectionResult<Vec<Triple>> {
        let resource = self.resource(name)?;
        Ok(vec![
            Triple::new(resource.clone(), rdf::TYPE, NamedNode::from(rdf::PROPERTY)),
            Triple::new(resource.clone(), rdfs::DOMAIN, self.domain.clone()),
            Triple::new(resource, rdfs::LABEL, Literal::simple(name)),
        ])
    }
}

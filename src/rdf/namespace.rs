//! Namespace registry
//!
//! The content store names types and properties with `prefix:local` names.
//! This registry expands them to IRIs and compacts predicate IRIs back into
//! store property names.

use indexmap::IndexMap;
use thiserror::Error;

/// Prefix errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PrefixError {
    /// Unknown prefix
    #[error("Unknown prefix: {0}")]
    UnknownPrefix(String),

    /// Name has no `prefix:` part
    #[error("Not a prefixed name: {0}")]
    NotPrefixed(String),
}

pub type PrefixResult<T> = Result<T, PrefixError>;

/// Namespace registry seeded with the repository's standard prefixes
#[derive(Debug, Clone)]
pub struct NamespaceRegistry {
    /// Prefix → IRI mappings, in registration order
    prefixes: IndexMap<String, String>,
}

impl NamespaceRegistry {
    pub fn new() -> Self {
        let mut registry = Self {
            prefixes: IndexMap::new(),
        };

        registry.register("rdf", "http://www.w3.org/1999/02/22-rdf-syntax-ns#");
        registry.register("rdfs", "http://www.w3.org/2000/01/rdf-schema#");
        registry.register("xsd", "http://www.w3.org/2001/XMLSchema#");
        registry.register("ldp", "http://www.w3.org/ns/ldp#");
        registry.register("fedora", "http://fedora.info/definitions/v4/repository#");
        registry.register("premis", "http://www.loc.gov/premis/rdf/v1#");
        registry.register("dc", "http://purl.org/dc/elements/1.1/");
        registry.register("dcterms", "http://purl.org/dc/terms/");
        registry.register("foaf", "http://xmlns.com/foaf/0.1/");
        registry.register("jcr", "http://www.jcp.org/jcr/1.0");
        registry.register("nt", "http://www.jcp.org/jcr/nt/1.0");
        registry.register("mix", "http://www.jcp.org/jcr/mix/1.0");
        registry.register("mode", "http://www.modeshape.org/1.0");

        registry
    }

    /// Register (or replace) a prefix
    pub fn register(&mut self, prefix: impl Into<String>, iri: impl Into<String>) {
        self.prefixes.insert(prefix.into(), iri.into());
    }

    /// Get the IRI bound to a prefix
    pub fn namespace(&self, prefix: &str) -> PrefixResult<&str> {
        self.prefixes
            .get(prefix)
            .map(|s| s.as_str())
            .ok_or_else(|| PrefixError::UnknownPrefix(prefix.to_string()))
    }

    /// Expand `prefix:local` to a full IRI
    pub fn expand(&self, name: &str) -> PrefixResult<String> {
        let (prefix, local) = split_prefixed(name)
            .ok_or_else(|| PrefixError::NotPrefixed(name.to_string()))?;
        let iri = self.namespace(prefix)?;
        Ok(format!("{}{}", iri, local))
    }

    /// Compact an IRI to `prefix:local` using the longest matching namespace
    pub fn compact(&self, iri: &str) -> Option<String> {
        self.prefixes
            .iter()
            .filter(|(_, namespace)| !namespace.is_empty() && iri.starts_with(namespace.as_str()))
            .max_by_key(|(_, namespace)| namespace.len())
            .map(|(prefix, namespace)| format!("{}:{}", prefix, &iri[namespace.len()..]))
    }

    pub fn len(&self) -> usize {
        self.prefixes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }
}

impl Default for NamespaceRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Split a `prefix:local` name. Names without a colon are unprefixed.
pub fn split_prefixed(name: &str) -> Option<(&str, &str)> {
    name.split_once(':')
}

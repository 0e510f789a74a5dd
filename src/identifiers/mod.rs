//! Identifier translation
//!
//! Converts between store paths and the resource IRIs clients see. Every
//! projection strategy resolves node identity through an
//! [`IdentifierTranslator`]; the translation is deterministic and bijective
//! over the translator's domain.

mod http;

pub use http::HttpIdentifierTranslator;

use crate::rdf::NamedNode;
use crate::store::Node;
use thiserror::Error;

/// Translation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TranslationError {
    /// Resource IRI outside the translator's base
    #[error("Resource outside of repository domain: {0}")]
    OutOfDomain(String),

    /// Store path that cannot be addressed
    #[error("Invalid repository path: {0}")]
    InvalidPath(String),

    /// Translated IRI failed validation
    #[error("Invalid resource IRI: {0}")]
    InvalidIri(String),
}

pub type TranslationResult<T> = Result<T, TranslationError>;

/// Bidirectional mapping between store paths and resource IRIs
pub trait IdentifierTranslator {
    /// Resource IRI of the node at `path`
    fn to_resource(&self, path: &str) -> TranslationResult<NamedNode>;

    /// Store path addressed by `resource`
    fn to_path(&self, resource: &NamedNode) -> TranslationResult<String>;

    /// Whether `resource` belongs to this translator's domain
    fn in_domain(&self, resource: &NamedNode) -> bool;

    fn node_to_resource(&self, node: &Node) -> TranslationResult<NamedNode> {
        self.to_resource(node.path())
    }
}

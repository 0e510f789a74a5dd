//! Error surfaced to consumers of triple streams

use crate::identifiers::TranslationError;
use crate::rdf::{PrefixError, RdfError};
use crate::store::RepositoryError;
use thiserror::Error;

/// The single runtime error kind carried by triple streams.
///
/// Every failure met while reading the store or building terms during
/// evaluation is converted into this type and yielded as the stream's last item.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RepositoryRuntimeError {
    #[error("Repository access failed: {0}")]
    Repository(#[from] RepositoryError),

    #[error("RDF construction failed: {0}")]
    Rdf(#[from] RdfError),

    #[error("Namespace resolution failed: {0}")]
    Namespace(#[from] PrefixError),

    #[error("Identifier translation failed: {0}")]
    Translation(#[from] TranslationError),
}

pub type ProjectionResult<T> = Result<T, RepositoryRuntimeError>;

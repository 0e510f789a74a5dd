//! RDF primitives for the projection engine
//!
//! - RDF terms and triples (wrappers over oxrdf)
//! - Lazy, concatenable triple streams
//! - Namespace registry for `prefix:local` store names
//! - Vocabulary constants

mod namespace;
mod stream;
mod types;
pub mod vocab;

pub use namespace::{split_prefixed, NamespaceRegistry, PrefixError, PrefixResult};
pub use stream::TripleStream;
pub use types::{Literal, NamedNode, RdfError, RdfObject, RdfResult, Triple};

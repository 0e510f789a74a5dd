//! `rdf:type` triples

use super::NodeScope;
use crate::error::ProjectionResult;
use crate::rdf::{split_prefixed, NamedNode, PrefixError, Triple, TripleStream};
use oxrdf::vocab::rdf;
use tracing::trace;

/// One `rdf:type` triple per node type whose prefix is registered
pub(super) fn triples<'a>(scope: &NodeScope<'a>) -> ProjectionResult<TripleStream<'a>> {
    let namespaces = scope.projector.namespaces();
    let mut triples = Vec::new();

    for node_type in scope.store().node_types(&scope.node)? {
        if split_prefixed(&node_type).is_none() {
            trace!("Skipping unprefixed type {} on {}", node_type, scope.node.path());
            continue;
        }
        let iri = match namespaces.expand(&node_type) {
            Ok(iri) => iri,
            Err(PrefixError::UnknownPrefix(prefix)) => {
                trace!("Skipping type {} with unregistered prefix {}", node_type, prefix);
                continue;
            }
            Err(e) => return Err(e.into()),
        };
        triples.push(Triple::new(scope.subject.clone(), rdf::TYPE, NamedNode::new(&iri)?));
    }

    Ok(TripleStream::from_triples(triples))
}

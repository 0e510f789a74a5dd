//! Hash-segment (fragment) sub-resources
//!
//! Children of the reserved hash child are projected with the restricted
//! strategy set only. That set has no hash strategy, so a fragment's own
//! hash children are never reached.

use super::{NodeScope, RdfContext};
use crate::error::ProjectionResult;
use crate::rdf::TripleStream;
use tracing::debug;

pub(super) fn triples<'a>(scope: &NodeScope<'a>) -> ProjectionResult<TripleStream<'a>> {
    let store = scope.store();
    let Some(hash) = store.child(&scope.node, scope.projector.hash_segment())? else {
        return Ok(TripleStream::empty());
    };

    let children = store.children(&hash)?;
    debug!("Projecting {} hash resources of {}", children.len(), scope.node.path());

    let mut stream = TripleStream::empty();
    for child in children {
        stream.concat(
            scope
                .projector
                .context(Some(child))
                .describe(&RdfContext::RESTRICTED),
        );
    }
    Ok(stream)
}

//! Triples for a node's own properties

use super::NodeScope;
use crate::convert::{is_internal_property, PropertyToTriples, ValueConverter};
use crate::error::ProjectionResult;
use crate::rdf::TripleStream;

pub(super) fn triples<'a>(scope: &NodeScope<'a>) -> ProjectionResult<TripleStream<'a>> {
    let translator = scope.projector.translator();
    let converter = PropertyToTriples::new(
        ValueConverter::new(scope.session, translator),
        translator,
        scope.projector.namespaces(),
    );

    let mut stream = TripleStream::empty();
    for property in scope.store().properties(&scope.node)? {
        if is_internal_property(&property) {
            continue;
        }
        stream.concat(TripleStream::from_triples(converter.triples(&property)?));
    }
    Ok(stream)
}

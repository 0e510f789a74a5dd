//! Inbound reference triples
//!
//! Every property elsewhere in the store that references the topic becomes
//! triples with the referencing node as subject. Strong references come
//! first, then weak ones.

use super::NodeScope;
use crate::convert::{PropertyToTriples, ValueConverter};
use crate::error::ProjectionResult;
use crate::rdf::TripleStream;
use crate::store::Property;

pub(super) fn triples<'a>(scope: &NodeScope<'a>) -> ProjectionResult<TripleStream<'a>> {
    let translator = scope.projector.translator();
    let converter = PropertyToTriples::new(
        ValueConverter::new(scope.session, translator),
        translator,
        scope.projector.namespaces(),
    );

    let strong_scope = scope.clone();
    let weak_scope = scope.clone();
    let strong = TripleStream::deferred(move || {
        let refs = strong_scope.store().references(&strong_scope.node, None)?;
        to_stream(&converter, refs)
    });
    let weak = TripleStream::deferred(move || {
        let refs = weak_scope.store().weak_references(&weak_scope.node, None)?;
        to_stream(&converter, refs)
    });

    Ok(strong.chain(weak))
}

fn to_stream<'a>(
    converter: &PropertyToTriples<'a>,
    properties: Vec<Property>,
) -> ProjectionResult<TripleStream<'a>> {
    let mut stream = TripleStream::empty();
    for property in &properties {
        stream.concat(TripleStream::from_triples(converter.triples(property)?));
    }
    Ok(stream)
}

//! Blank-node (anonymous structure) triples
//!
//! Blank nodes are stored as ordinary nodes typed `fedora:Skolem` and linked
//! through reference properties. Every blank node reachable from the topic
//! through such references is described with its types and properties.

use super::{NodeScope, RdfContext};
use crate::error::ProjectionResult;
use crate::rdf::vocab::FEDORA_BLANK_NODE;
use crate::rdf::TripleStream;
use crate::store::Value;
use std::collections::{HashSet, VecDeque};
use tracing::trace;

pub(super) fn triples<'a>(scope: &NodeScope<'a>) -> ProjectionResult<TripleStream<'a>> {
    let store = scope.store();
    let mut visited = HashSet::from([scope.node.path().to_string()]);
    let mut pending = VecDeque::from([scope.node.clone()]);
    let mut stream = TripleStream::empty();

    while let Some(node) = pending.pop_front() {
        for property in store.properties(&node)? {
            if !property.property_type.is_reference() {
                continue;
            }
            for value in &property.values {
                let (Value::Reference(id) | Value::WeakReference(id)) = value else {
                    continue;
                };
                let referent = scope.session.referent(id)?;
                if visited.contains(referent.path())
                    || !store.is_node_type(&referent, FEDORA_BLANK_NODE)?
                {
                    continue;
                }
                trace!("Describing blank node {} from {}", referent.path(), node.path());
                visited.insert(referent.path().to_string());
                stream.concat(
                    scope
                        .projector
                        .context(Some(referent.clone()))
                        .describe(&[RdfContext::Types, RdfContext::Properties]),
                );
                pending.push_back(referent);
            }
        }
    }

    Ok(stream)
}

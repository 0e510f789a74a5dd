//! Node context: eager identity, deferred triples

use super::{NodeScope, Projector, RdfContext};
use crate::identifiers::TranslationResult;
use crate::rdf::{NamedNode, TripleStream};
use crate::store::{Node, Session};
use tracing::trace;

/// A node bound to a projector.
///
/// Construction resolves the node's identity and binds a session but reads
/// nothing from the store. Streams built from the context run their
/// strategy when first pulled, so a context can be streamed any number of
/// times.
///
/// An absent node yields empty streams.
pub struct NodeContext<'a> {
    projector: Projector<'a>,
    node: Option<Node>,
    session: Option<Session<'a>>,
    topic: Option<TranslationResult<NamedNode>>,
}

impl<'a> NodeContext<'a> {
    pub fn new(projector: Projector<'a>, node: Option<Node>) -> Self {
        let session = node.as_ref().map(|_| Session::new(projector.store()));
        let topic = node
            .as_ref()
            .map(|node| projector.translator().node_to_resource(node));
        Self {
            projector,
            node,
            session,
            topic,
        }
    }

    pub fn node(&self) -> Option<&Node> {
        self.node.as_ref()
    }

    pub fn session(&self) -> Option<Session<'a>> {
        self.session
    }

    /// Translated identity of the node, if it has one
    pub fn topic(&self) -> Option<&NamedNode> {
        self.topic.as_ref().and_then(|t| t.as_ref().ok())
    }

    /// Lazily produced triples of one strategy
    pub fn stream(&self, context: RdfContext) -> TripleStream<'a> {
        let (Some(node), Some(session), Some(topic)) = (&self.node, self.session, &self.topic) else {
            return TripleStream::empty();
        };
        let subject = match topic {
            Ok(subject) => subject.clone(),
            Err(e) => return TripleStream::failure(e.clone()),
        };

        let scope = NodeScope {
            projector: self.projector,
            session,
            node: node.clone(),
            subject: subject.clone(),
        };
        TripleStream::deferred(move || {
            trace!("Projecting {} with {} context", scope.node.path(), context);
            context.generate(&scope)
        })
        .topic_of(Some(subject))
    }

    /// Concatenation of several strategies, in the given order
    pub fn describe(&self, contexts: &[RdfContext]) -> TripleStream<'a> {
        let mut stream = TripleStream::empty().topic_of(self.topic().cloned());
        for context in contexts {
            stream.concat(self.stream(*context));
        }
        stream
    }
}

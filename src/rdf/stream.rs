//! Lazy triple streams
//!
//! A [`TripleStream`] is an ordered queue of triple sources with a topic, the
//! subject the stream primarily describes. Sources are plain iterators, so
//! nothing is read from the store until the consumer pulls; `concat` only
//! appends another source to the queue.
//!
//! Items are `Result`s. A store-access failure surfaces as a single `Err`
//! item after which the stream is finished.

use super::types::{NamedNode, Triple};
use crate::error::{ProjectionResult, RepositoryRuntimeError};
use std::collections::{HashSet, VecDeque};
use std::fmt;
use std::iter;

type Source<'a> = Box<dyn Iterator<Item = ProjectionResult<Triple>> + 'a>;

/// Lazily evaluated, concatenable sequence of triples
pub struct TripleStream<'a> {
    topic: Option<NamedNode>,
    sources: VecDeque<Source<'a>>,
    failed: bool,
}

impl<'a> TripleStream<'a> {
    /// An empty stream without a topic
    pub fn empty() -> Self {
        Self {
            topic: None,
            sources: VecDeque::new(),
            failed: false,
        }
    }

    /// An empty stream describing `topic`
    pub fn with_topic(topic: NamedNode) -> Self {
        let mut stream = Self::empty();
        stream.topic = Some(topic);
        stream
    }

    /// A stream over already-built triples
    pub fn from_triples<I>(triples: I) -> Self
    where
        I: IntoIterator<Item = Triple>,
        I::IntoIter: 'a,
    {
        Self::from_results(triples.into_iter().map(Ok))
    }

    /// A stream over fallible triple production
    pub fn from_results<I>(results: I) -> Self
    where
        I: Iterator<Item = ProjectionResult<Triple>> + 'a,
    {
        let mut stream = Self::empty();
        stream.sources.push_back(Box::new(results));
        stream
    }

    /// A stream whose content is computed by `produce` on first pull.
    ///
    /// If `produce` fails, its error is the only item the stream yields.
    pub fn deferred<F>(produce: F) -> Self
    where
        F: FnOnce() -> ProjectionResult<TripleStream<'a>> + 'a,
    {
        let source = iter::once_with(produce).flat_map(|produced| -> Source<'a> {
            match produced {
                Ok(stream) => Box::new(stream),
                Err(e) => Box::new(iter::once(Err(e))),
            }
        });
        Self::from_results(source)
    }

    /// A stream that yields only `error`
    pub fn failure(error: impl Into<RepositoryRuntimeError>) -> Self {
        Self::from_results(iter::once(Err(error.into())))
    }

    pub fn topic(&self) -> Option<&NamedNode> {
        self.topic.as_ref()
    }

    pub fn set_topic(&mut self, topic: NamedNode) {
        self.topic = Some(topic);
    }

    /// Builder form of [`set_topic`](Self::set_topic)
    pub fn topic_of(mut self, topic: Option<NamedNode>) -> Self {
        self.topic = topic;
        self
    }

    /// Append `other`'s production after everything already queued.
    ///
    /// Neither side is evaluated. `other`'s topic is discarded.
    pub fn concat(&mut self, other: TripleStream<'a>) {
        if other.failed {
            return;
        }
        self.sources.extend(other.sources);
    }

    /// Builder form of [`concat`](Self::concat)
    pub fn chain(mut self, other: TripleStream<'a>) -> Self {
        self.concat(other);
        self
    }

    /// Drain the stream, stopping at the first error
    pub fn try_collect(self) -> ProjectionResult<Vec<Triple>> {
        self.collect()
    }

    /// Drain the stream into a set, dropping duplicates
    pub fn try_into_set(self) -> ProjectionResult<HashSet<Triple>> {
        self.collect()
    }
}

impl Default for TripleStream<'_> {
    fn default() -> Self {
        Self::empty()
    }
}

impl Iterator for TripleStream<'_> {
    type Item = ProjectionResult<Triple>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        while let Some(source) = self.sources.front_mut() {
            match source.next() {
                Some(Ok(triple)) => return Some(Ok(triple)),
                Some(Err(e)) => {
                    self.failed = true;
                    self.sources.clear();
                    return Some(Err(e));
                }
                None => {
                    self.sources.pop_front();
                }
            }
        }
        None
    }
}

impl fmt::Debug for TripleStream<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TripleStream")
            .field("topic", &self.topic)
            .field("pending_sources", &self.sources.len())
            .field("failed", &self.failed)
            .finish()
    }
}

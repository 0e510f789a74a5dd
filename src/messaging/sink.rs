//! Delivery of events and their headers to a sink

use super::headers::{Headers, MessageFactory};
use crate::observer::RepositoryEvent;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SinkError {
    #[error("Sink closed")]
    Closed,

    #[error("Publication failed: {0}")]
    Publish(String),
}

pub type SinkResult<T> = Result<T, SinkError>;

/// Destination for published events
pub trait EventSink {
    fn publish(&mut self, event: &RepositoryEvent, headers: Headers) -> SinkResult<()>;
}

/// Keeps everything published, in order
#[derive(Debug, Default)]
pub struct MemorySink {
    pub messages: Vec<(RepositoryEvent, Headers)>,
}

impl EventSink for MemorySink {
    fn publish(&mut self, event: &RepositoryEvent, headers: Headers) -> SinkResult<()> {
        self.messages.push((event.clone(), headers));
        Ok(())
    }
}

/// Pairs a message factory with a sink
pub struct EventPublisher<F, S> {
    factory: F,
    sink: S,
}

impl<F: MessageFactory, S: EventSink> EventPublisher<F, S> {
    pub fn new(factory: F, sink: S) -> Self {
        Self { factory, sink }
    }

    pub fn publish(&mut self, event: &RepositoryEvent) -> SinkResult<()> {
        let headers = self.factory.headers(event);
        debug!("Publishing {} with {} headers", event.path(), headers.len());
        self.sink.publish(event, headers).map_err(|e| {
            warn!("Failed to publish event for {}: {}", event.path(), e);
            e
        })
    }

    /// Publish every event, stopping at the first failure
    pub fn publish_all<'e>(&mut self, events: impl IntoIterator<Item = &'e RepositoryEvent>) -> SinkResult<usize> {
        let mut published = 0;
        for event in events {
            self.publish(event)?;
            published += 1;
        }
        Ok(published)
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}

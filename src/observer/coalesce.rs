//! Folding raw events into one event per resource path

use super::event::{RawEvent, RepositoryEvent};
use indexmap::IndexMap;
use tracing::{debug, trace};

/// Folds raw change notifications into one event per resource path.
///
/// Events with the same normalized path merge regardless of type; the
/// merged event keeps the timestamp, user and identifier of the first
/// change seen for that path. Output is in first-seen order.
#[derive(Debug, Default)]
pub struct EventCoalescer {
    events: IndexMap<String, RepositoryEvent>,
}

impl EventCoalescer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, raw: &RawEvent) {
        let path = raw.resource_path();
        match self.events.get_mut(path) {
            Some(event) => {
                trace!("Folding {} at {} into existing event", raw.event_type, raw.path);
                event.absorb(raw);
            }
            None => {
                self.events.insert(path.to_string(), RepositoryEvent::from_raw(raw));
            }
        }
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Take the coalesced events, leaving the coalescer empty
    pub fn drain(&mut self) -> Vec<RepositoryEvent> {
        let events: Vec<RepositoryEvent> = self.events.drain(..).map(|(_, event)| event).collect();
        debug!("Coalesced into {} events", events.len());
        events
    }

    /// Coalesce a batch in one go
    pub fn coalesce<'e>(raw: impl IntoIterator<Item = &'e RawEvent>) -> Vec<RepositoryEvent> {
        let mut coalescer = Self::new();
        for event in raw {
            coalescer.push(event);
        }
        coalescer.drain()
    }
}

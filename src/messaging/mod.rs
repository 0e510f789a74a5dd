//! Event publication
//!
//! Coalesced events are turned into message headers by a
//! [`MessageFactory`] and handed to an [`EventSink`]. The sink owns the
//! transport; this crate only decides what goes into the headers.

mod headers;
mod sink;

pub use headers::{
    DefaultMessageFactory, HeaderValue, Headers, MessageFactory, EVENT_TYPE_HEADER_NAME,
    IDENTIFIER_HEADER_NAME, PROPERTIES_HEADER_NAME, TIMESTAMP_HEADER_NAME,
};
pub use sink::{EventPublisher, EventSink, MemorySink, SinkError, SinkResult};

//! Store change notifications
//!
//! The store reports low-level changes as [`RawEvent`]s, one per touched
//! item. [`EventCoalescer`] folds them into [`RepositoryEvent`]s, one per
//! resource, which is what downstream publication works with.

mod coalesce;
mod event;

pub use coalesce::EventCoalescer;
pub use event::{EventType, RawEvent, RepositoryEvent};

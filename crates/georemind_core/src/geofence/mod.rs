//! Geofence transition handling.
//!
//! # Responsibility
//! - Model platform-delivered geofence transition events.
//! - Bridge "entered region" events to a user notification, off the
//!   delivery thread.
//!
//! # Invariants
//! - Event submission never blocks the platform delivery path.
//! - A failure while resolving or dispatching one event is contained to
//!   that event.

mod event;
mod handler;

pub use event::{GeofenceTransition, GeofencingEvent, TriggeringRegion};
pub use handler::{EventResolver, GeofenceError, GeofenceEventHandler, HandlerOutcome};

//! Core domain logic for georemind, a location-bound reminder system.
//! This crate is the single source of truth for business invariants:
//! reminder persistence, geofence-transition resolution, and the
//! UI-observable state models.

pub mod db;
pub mod geofence;
pub mod logging;
pub mod model;
pub mod notify;
pub mod service;
pub mod state;
pub mod store;

pub use geofence::{
    EventResolver, GeofenceError, GeofenceEventHandler, GeofenceTransition, GeofencingEvent,
    HandlerOutcome, TriggeringRegion,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::reminder::{Reminder, ReminderDraft, ReminderId, ValidationError};
pub use notify::{LogNotifier, NotificationContent, NotificationSink, NotifyError};
pub use service::reminder_repository::{ReminderError, ReminderRepository, ReminderResult};
pub use state::{Observable, RemindersListModel, SaveReminderModel};
pub use store::reminder_store::{ReminderStore, SqliteReminderStore, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}

//! Notification dispatch port.
//!
//! # Responsibility
//! - Define the narrow contract the geofence flow uses to reach the user.
//! - Ship a logging implementation for headless/diagnostic runs.
//!
//! # Invariants
//! - Dispatch is fire-and-forget from the caller's perspective; failures
//!   are reported to the immediate caller only and never retried.

use crate::model::reminder::{Reminder, ReminderId};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Payload handed to the platform notification renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationContent {
    pub title: String,
    pub description: Option<String>,
    pub location: String,
    pub latitude: f64,
    pub longitude: f64,
    pub reminder_id: ReminderId,
}

impl From<&Reminder> for NotificationContent {
    fn from(reminder: &Reminder) -> Self {
        Self {
            title: reminder.title.clone(),
            description: reminder.description.clone(),
            location: reminder.location.clone(),
            latitude: reminder.latitude,
            longitude: reminder.longitude,
            reminder_id: reminder.id,
        }
    }
}

/// Notification dispatch failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotifyError {
    /// The backend rejected or failed to render the notification.
    Backend(String),
}

impl Display for NotifyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Backend(message) => write!(f, "notification dispatch failed: {message}"),
        }
    }
}

impl Error for NotifyError {}

/// Sink for rendered notifications.
///
/// Implementations must be shareable with the geofence worker thread.
pub trait NotificationSink: Send + Sync {
    fn dispatch(&self, content: &NotificationContent) -> Result<(), NotifyError>;
}

/// Sink that records dispatches to the structured log only.
///
/// Default wiring for the CLI probe and any headless environment without a
/// platform notification channel.
#[derive(Debug, Default)]
pub struct LogNotifier;

impl NotificationSink for LogNotifier {
    fn dispatch(&self, content: &NotificationContent) -> Result<(), NotifyError> {
        info!(
            "event=notification_dispatched module=notify status=ok id={} location={} lat={} lon={}",
            content.reminder_id, content.location, content.latitude, content.longitude
        );
        Ok(())
    }
}

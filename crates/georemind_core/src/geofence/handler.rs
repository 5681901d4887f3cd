//! Geofence transition resolver and background handler.
//!
//! # Responsibility
//! - Resolve an "entered region" event to its reminder and dispatch one
//!   notification.
//! - Run resolution on a dedicated worker thread, decoupled from any UI
//!   loop and from the platform's event delivery path.
//!
//! # Invariants
//! - Per event, the state machine is `Received -> Resolved | Ignored`.
//! - A lookup miss is silently dropped; no user-visible error exists for
//!   a geofence that outlived its reminder.
//! - Shutdown drains the queue before the worker exits, so submitted
//!   events are never lost.

use crate::geofence::event::{GeofenceTransition, GeofencingEvent};
use crate::model::reminder::ReminderId;
use crate::notify::{NotificationContent, NotificationSink};
use crate::service::reminder_repository::ReminderRepository;
use crate::store::reminder_store::ReminderStore;
use log::{debug, error, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::mpsc::{self, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

/// Terminal state of one event's resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandlerOutcome {
    /// A notification was dispatched for the matching reminder.
    Resolved,
    /// The event was dropped: errored, wrong transition kind, no region,
    /// unknown id, or dispatch failure.
    Ignored,
}

/// Handler-level submission error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeofenceError {
    /// The worker thread could not be created.
    SpawnFailed(String),
    /// The worker is gone; the event cannot be queued.
    WorkerUnavailable,
}

impl Display for GeofenceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SpawnFailed(message) => {
                write!(f, "geofence worker could not be started: {message}")
            }
            Self::WorkerUnavailable => write!(f, "geofence worker is not running"),
        }
    }
}

impl Error for GeofenceError {}

/// Synchronous event resolution: lookup plus notification dispatch.
///
/// Owns the repository it reads from; the threaded handler moves a resolver
/// onto its worker, and tests can drive one directly.
pub struct EventResolver<S: ReminderStore> {
    repository: ReminderRepository<S>,
    notifier: Arc<dyn NotificationSink>,
}

impl<S: ReminderStore> EventResolver<S> {
    pub fn new(repository: ReminderRepository<S>, notifier: Arc<dyn NotificationSink>) -> Self {
        Self {
            repository,
            notifier,
        }
    }

    /// Runs one event through the `Received -> Resolved | Ignored` machine.
    pub fn resolve(&self, event: &GeofencingEvent) -> HandlerOutcome {
        if let Some(code) = event.error_code {
            warn!("event=geofence_event module=geofence status=ignored reason=platform_error error_code={code}");
            return HandlerOutcome::Ignored;
        }

        if event.transition != GeofenceTransition::Enter {
            debug!(
                "event=geofence_event module=geofence status=ignored reason=transition_kind kind={:?}",
                event.transition
            );
            return HandlerOutcome::Ignored;
        }

        let Some(region) = event.triggering_regions.first() else {
            warn!("event=geofence_event module=geofence status=ignored reason=no_triggering_region");
            return HandlerOutcome::Ignored;
        };

        let id = match region.request_id.parse::<ReminderId>() {
            Ok(id) => id,
            Err(_) => {
                warn!(
                    "event=geofence_event module=geofence status=ignored reason=invalid_request_id request_id={}",
                    region.request_id
                );
                return HandlerOutcome::Ignored;
            }
        };

        let reminder = match self.repository.get_reminder(&id) {
            Ok(reminder) => reminder,
            Err(err) => {
                // Silent drop: there is no UI present to surface this to.
                info!("event=geofence_event module=geofence status=ignored reason=lookup_failed id={id} error={err}");
                return HandlerOutcome::Ignored;
            }
        };

        match self.notifier.dispatch(&NotificationContent::from(&reminder)) {
            Ok(()) => {
                info!("event=geofence_event module=geofence status=resolved id={id}");
                HandlerOutcome::Resolved
            }
            Err(err) => {
                error!("event=geofence_event module=geofence status=ignored reason=dispatch_failed id={id} error={err}");
                HandlerOutcome::Ignored
            }
        }
    }
}

/// Background geofence handler with its own worker thread.
///
/// The platform delivery path calls [`submit`](Self::submit) and returns
/// immediately; resolution happens on the worker. Dropping the handler
/// closes the queue and joins the worker after the backlog drains.
pub struct GeofenceEventHandler {
    sender: Option<Sender<GeofencingEvent>>,
    worker: Option<JoinHandle<()>>,
}

impl GeofenceEventHandler {
    /// Spawns the worker thread around the given resolver.
    pub fn spawn<S>(resolver: EventResolver<S>) -> Result<Self, GeofenceError>
    where
        S: ReminderStore + Send + 'static,
    {
        let (sender, receiver) = mpsc::channel::<GeofencingEvent>();
        let worker = thread::Builder::new()
            .name("geofence-worker".to_string())
            .spawn(move || {
                // Loop ends when every sender is dropped and the queue is
                // drained; each event's outcome is contained to itself.
                while let Ok(event) = receiver.recv() {
                    let _ = resolver.resolve(&event);
                }
                debug!("event=geofence_worker module=geofence status=stopped");
            })
            .map_err(|err| GeofenceError::SpawnFailed(err.to_string()))?;

        Ok(Self {
            sender: Some(sender),
            worker: Some(worker),
        })
    }

    /// Queues one event for background resolution without blocking.
    pub fn submit(&self, event: GeofencingEvent) -> Result<(), GeofenceError> {
        let sender = self
            .sender
            .as_ref()
            .ok_or(GeofenceError::WorkerUnavailable)?;
        sender
            .send(event)
            .map_err(|_| GeofenceError::WorkerUnavailable)
    }

    /// Closes the queue and waits for the backlog to finish.
    pub fn shutdown(mut self) {
        self.finish();
    }

    fn finish(&mut self) {
        drop(self.sender.take());
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                error!("event=geofence_worker module=geofence status=error reason=worker_panicked");
            }
        }
    }
}

impl Drop for GeofenceEventHandler {
    fn drop(&mut self) {
        self.finish();
    }
}

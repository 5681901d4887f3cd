//! Reminder repository: outcome-typed façade over the record store.
//!
//! # Responsibility
//! - Own the "not found" policy for lookups by id.
//! - Keep user-facing error literals stable for compatibility.
//!
//! # Invariants
//! - No storage fault crosses this boundary unwrapped.
//! - All operations are uniformly fallible; failures are reported once and
//!   never retried.

use crate::model::reminder::{Reminder, ReminderId};
use crate::store::reminder_store::{ReminderStore, StoreError};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ReminderResult<T> = Result<T, ReminderError>;

/// Repository-level outcome error.
///
/// `Display` strings for `NotFound` and `Unavailable` are compatibility
/// literals asserted by tests; do not reword them.
#[derive(Debug)]
pub enum ReminderError {
    /// Lookup by id matched no record.
    NotFound,
    /// The listing mechanism itself signalled absence, as opposed to a
    /// legitimately empty list.
    Unavailable,
    /// Storage fault passed through in wrapped form.
    Store(StoreError),
}

impl Display for ReminderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound => write!(f, "Reminder not found!"),
            Self::Unavailable => write!(f, "Reminder list is empty"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ReminderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NotFound | Self::Unavailable => None,
            Self::Store(err) => Some(err),
        }
    }
}

impl From<StoreError> for ReminderError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Outcome-typed repository over any [`ReminderStore`].
pub struct ReminderRepository<S: ReminderStore> {
    store: S,
}

impl<S: ReminderStore> ReminderRepository<S> {
    /// Creates a repository using the provided store implementation.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Persists a reminder, replacing any record with the same id.
    pub fn save_reminder(&self, reminder: &Reminder) -> ReminderResult<()> {
        self.store.insert_or_replace(reminder)?;
        info!(
            "event=reminder_saved module=repository status=ok id={}",
            reminder.id
        );
        Ok(())
    }

    /// Returns every stored reminder. An empty list is a success.
    ///
    /// Only this operation maps a store-level `Unavailable` to
    /// [`ReminderError::Unavailable`]; the empty-list literal belongs to the
    /// retrieval mechanism, not to writes.
    pub fn get_reminders(&self) -> ReminderResult<Vec<Reminder>> {
        let reminders = match self.store.get_all() {
            Ok(reminders) => reminders,
            Err(StoreError::Unavailable(message)) => {
                warn!(
                    "event=reminders_listed module=repository status=unavailable error={message}"
                );
                return Err(ReminderError::Unavailable);
            }
            Err(err) => return Err(err.into()),
        };
        info!(
            "event=reminders_listed module=repository status=ok count={}",
            reminders.len()
        );
        Ok(reminders)
    }

    /// Returns the reminder for `id`, or [`ReminderError::NotFound`].
    pub fn get_reminder(&self, id: &ReminderId) -> ReminderResult<Reminder> {
        match self.store.get_by_id(id)? {
            Some(reminder) => Ok(reminder),
            None => {
                warn!("event=reminder_lookup module=repository status=not_found id={id}");
                Err(ReminderError::NotFound)
            }
        }
    }

    /// Removes every stored reminder, returning the removed count.
    pub fn delete_all_reminders(&self) -> ReminderResult<usize> {
        let deleted = self.store.delete_all()?;
        info!(
            "event=reminders_cleared module=repository status=ok count={deleted}"
        );
        Ok(deleted)
    }
}

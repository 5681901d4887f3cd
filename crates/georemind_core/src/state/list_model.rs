//! Reminders list screen state.

use crate::model::reminder::Reminder;
use crate::service::reminder_repository::ReminderRepository;
use crate::state::observable::Observable;
use crate::store::reminder_store::ReminderStore;

/// Observable state behind the reminders list screen.
///
/// Single writer: all mutations go through
/// [`load_reminders`](Self::load_reminders); the UI only reads or
/// subscribes.
pub struct RemindersListModel<S: ReminderStore> {
    repository: ReminderRepository<S>,
    /// True while a load is in flight.
    pub loading: Observable<bool>,
    /// Current list contents; empty until the first successful load.
    pub reminders: Observable<Vec<Reminder>>,
    /// True when the screen should show its empty state: zero records or a
    /// failed load.
    pub show_no_data: Observable<bool>,
    /// Transient user-facing notice, set on load failure.
    pub notice: Observable<Option<String>>,
}

impl<S: ReminderStore> RemindersListModel<S> {
    pub fn new(repository: ReminderRepository<S>) -> Self {
        Self {
            repository,
            loading: Observable::new(false),
            reminders: Observable::new(Vec::new()),
            show_no_data: Observable::new(true),
            notice: Observable::new(None),
        }
    }

    /// Loads all reminders and publishes list, empty-state flag, and any
    /// failure notice.
    pub fn load_reminders(&self) {
        self.loading.set(true);

        match self.repository.get_reminders() {
            Ok(reminders) => {
                self.show_no_data.set(reminders.is_empty());
                self.reminders.set(reminders);
            }
            Err(err) => {
                self.notice.set(Some(err.to_string()));
                self.show_no_data.set(true);
            }
        }

        self.loading.set(false);
    }
}

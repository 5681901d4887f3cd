//! Save-reminder screen state and validation orchestration.

use crate::model::reminder::{Reminder, ReminderDraft, ValidationError};
use crate::service::reminder_repository::ReminderRepository;
use crate::state::observable::Observable;
use crate::store::reminder_store::ReminderStore;

const REMINDER_SAVED_NOTICE: &str = "Reminder Saved !";

/// Observable state behind the save-reminder screen.
pub struct SaveReminderModel<S: ReminderStore> {
    repository: ReminderRepository<S>,
    /// True while a save is in flight.
    pub loading: Observable<bool>,
    /// Transient user-facing notice: validation message, save error, or
    /// the saved confirmation.
    pub notice: Observable<Option<String>>,
    /// In-progress input slots filled by the screen.
    pub draft: Observable<ReminderDraft>,
}

impl<S: ReminderStore> SaveReminderModel<S> {
    pub fn new(repository: ReminderRepository<S>) -> Self {
        Self {
            repository,
            loading: Observable::new(false),
            notice: Observable::new(None),
            draft: Observable::default(),
        }
    }

    /// Checks the draft against the save rules without touching storage.
    ///
    /// On failure the rule's message is published as the notice. The first
    /// failing rule wins: title before location.
    pub fn validate_entered_data(
        &self,
        draft: &ReminderDraft,
    ) -> Result<Reminder, ValidationError> {
        match draft.validate() {
            Ok(reminder) => Ok(reminder),
            Err(err) => {
                self.notice.set(Some(err.to_string()));
                Err(err)
            }
        }
    }

    /// Validates and, when valid, persists the draft.
    ///
    /// Returns true when a reminder was saved. A validation failure blocks
    /// the save and leaves storage untouched.
    pub fn validate_and_save(&self, draft: &ReminderDraft) -> bool {
        let Ok(reminder) = self.validate_entered_data(draft) else {
            return false;
        };

        self.loading.set(true);
        let saved = match self.repository.save_reminder(&reminder) {
            Ok(()) => {
                self.notice
                    .set(Some(format!("{REMINDER_SAVED_NOTICE} {}", reminder.location)));
                true
            }
            Err(err) => {
                self.notice.set(Some(err.to_string()));
                false
            }
        };
        self.loading.set(false);

        if saved {
            self.on_clear();
        }
        saved
    }

    /// Resets the draft slots, e.g. after a completed save or when the
    /// screen is left.
    pub fn on_clear(&self) {
        self.draft.set(ReminderDraft::default());
    }
}

use georemind_core::db::open_db_in_memory;
use georemind_core::{
    Reminder, ReminderRepository, ReminderStore, RemindersListModel, SqliteReminderStore,
    StoreError, StoreResult,
};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

fn model_with_reminders(reminders: &[Reminder]) -> RemindersListModel<SqliteReminderStore> {
    let conn = open_db_in_memory().unwrap();
    let repository = ReminderRepository::new(SqliteReminderStore::new(conn));
    for reminder in reminders {
        repository.save_reminder(reminder).unwrap();
    }
    RemindersListModel::new(repository)
}

fn sample_reminder() -> Reminder {
    Reminder::new(
        "Something",
        Some("Doing something".to_string()),
        "School",
        55.822801,
        37.606469,
    )
}

#[test]
fn loading_flag_toggles_on_then_off() {
    let model = model_with_reminders(&[sample_reminder()]);

    let transitions = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&transitions);
    model.loading.subscribe(move |value: &bool| {
        sink.lock().expect("transition log lock").push(*value);
    });

    model.load_reminders();

    let transitions = transitions.lock().expect("transition log lock");
    assert_eq!(transitions.as_slice(), [true, false]);
    assert!(!model.loading.get());
}

#[test]
fn load_populates_list_and_clears_empty_state() {
    let model = model_with_reminders(&[sample_reminder()]);

    model.load_reminders();

    assert_eq!(model.reminders.get().len(), 1);
    assert!(!model.show_no_data.get());
    assert_eq!(model.notice.get(), None);
}

#[test]
fn load_with_zero_records_sets_empty_state() {
    let model = model_with_reminders(&[]);

    model.load_reminders();

    assert!(model.reminders.get().is_empty());
    assert!(model.show_no_data.get());
}

#[test]
fn list_is_empty_again_after_delete_all() {
    let conn = open_db_in_memory().unwrap();
    let repository = ReminderRepository::new(SqliteReminderStore::new(conn));
    repository.save_reminder(&sample_reminder()).unwrap();
    repository.delete_all_reminders().unwrap();

    let model = RemindersListModel::new(repository);
    model.load_reminders();

    assert!(model.reminders.get().is_empty());
    assert!(model.show_no_data.get());
}

struct FailingStore;

impl ReminderStore for FailingStore {
    fn insert_or_replace(&self, _reminder: &Reminder) -> StoreResult<()> {
        Err(StoreError::Unavailable("forced".to_string()))
    }

    fn get_by_id(&self, _id: &Uuid) -> StoreResult<Option<Reminder>> {
        Err(StoreError::Unavailable("forced".to_string()))
    }

    fn get_all(&self) -> StoreResult<Vec<Reminder>> {
        Err(StoreError::Unavailable("forced".to_string()))
    }

    fn delete_all(&self) -> StoreResult<usize> {
        Err(StoreError::Unavailable("forced".to_string()))
    }
}

#[test]
fn failed_load_surfaces_notice_and_empty_state() {
    let model = RemindersListModel::new(ReminderRepository::new(FailingStore));

    model.load_reminders();

    assert_eq!(model.notice.get().as_deref(), Some("Reminder list is empty"));
    assert!(model.show_no_data.get());
    assert!(!model.loading.get());
}

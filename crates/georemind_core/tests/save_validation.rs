use georemind_core::db::open_db_in_memory;
use georemind_core::{
    Reminder, ReminderDraft, ReminderRepository, ReminderStore, SaveReminderModel,
    SqliteReminderStore, StoreResult, ValidationError,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

fn new_model() -> SaveReminderModel<SqliteReminderStore> {
    let conn = open_db_in_memory().unwrap();
    SaveReminderModel::new(ReminderRepository::new(SqliteReminderStore::new(conn)))
}

struct CountingStore {
    writes: Arc<AtomicUsize>,
}

impl ReminderStore for CountingStore {
    fn insert_or_replace(&self, _reminder: &Reminder) -> StoreResult<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn get_by_id(&self, _id: &Uuid) -> StoreResult<Option<Reminder>> {
        Ok(None)
    }

    fn get_all(&self) -> StoreResult<Vec<Reminder>> {
        Ok(Vec::new())
    }

    fn delete_all(&self) -> StoreResult<usize> {
        Ok(0)
    }
}

fn full_draft() -> ReminderDraft {
    ReminderDraft {
        title: Some("Something".to_string()),
        description: Some("Doing something".to_string()),
        location: Some("School".to_string()),
        latitude: Some(56.4553454),
        longitude: Some(56.4553454),
    }
}

#[test]
fn valid_draft_saves_and_publishes_confirmation() {
    let model = new_model();

    assert!(model.validate_and_save(&full_draft()));

    let notice = model.notice.get().expect("confirmation notice expected");
    assert_eq!(notice, "Reminder Saved ! School");
    assert!(!model.loading.get());
    // Draft slots are reset after a completed save.
    assert_eq!(model.draft.get(), ReminderDraft::default());
}

#[test]
fn null_title_blocks_save_with_title_message() {
    let model = new_model();
    let mut draft = full_draft();
    draft.title = None;

    assert!(!model.validate_and_save(&draft));
    assert_eq!(model.notice.get().as_deref(), Some("Please enter title"));
}

#[test]
fn empty_title_blocks_save_with_title_message() {
    let model = new_model();
    let mut draft = full_draft();
    draft.title = Some(String::new());

    assert!(!model.validate_and_save(&draft));
    assert_eq!(model.notice.get().as_deref(), Some("Please enter title"));
}

#[test]
fn null_location_blocks_save_with_location_message() {
    let model = new_model();
    let mut draft = full_draft();
    draft.location = None;

    assert!(!model.validate_and_save(&draft));
    assert_eq!(model.notice.get().as_deref(), Some("Please select location"));
}

#[test]
fn empty_location_blocks_save_with_location_message() {
    let model = new_model();
    let mut draft = full_draft();
    draft.location = Some(String::new());

    assert!(!model.validate_and_save(&draft));
    assert_eq!(model.notice.get().as_deref(), Some("Please select location"));
}

#[test]
fn validation_failure_leaves_storage_untouched() {
    let writes = Arc::new(AtomicUsize::new(0));
    let store = CountingStore {
        writes: Arc::clone(&writes),
    };
    let model = SaveReminderModel::new(ReminderRepository::new(store));

    let mut draft = full_draft();
    draft.title = None;
    assert!(!model.validate_and_save(&draft));
    assert_eq!(writes.load(Ordering::SeqCst), 0);

    assert!(model.validate_and_save(&full_draft()));
    assert_eq!(writes.load(Ordering::SeqCst), 1);
}

#[test]
fn validate_entered_data_reports_rule_without_saving() {
    let model = new_model();
    let mut draft = full_draft();
    draft.location = Some(String::new());

    let err = model
        .validate_entered_data(&draft)
        .expect_err("location rule should fail");
    assert_eq!(err, ValidationError::MissingLocation);
    assert_eq!(model.notice.get().as_deref(), Some("Please select location"));
}

#[test]
fn loading_flag_toggles_during_save() {
    let model = new_model();

    let transitions = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&transitions);
    model.loading.subscribe(move |value: &bool| {
        sink.lock().expect("transition log lock").push(*value);
    });

    assert!(model.validate_and_save(&full_draft()));

    let transitions = transitions.lock().expect("transition log lock");
    assert_eq!(transitions.as_slice(), [true, false]);
}

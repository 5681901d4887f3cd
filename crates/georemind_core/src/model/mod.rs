//! Domain model for location-bound reminders.
//!
//! # Responsibility
//! - Define the canonical reminder record persisted by the store.
//! - Provide the pre-validation draft shape used by save flows.
//!
//! # Invariants
//! - Every stored reminder is identified by a stable `ReminderId`.
//! - A `Reminder` always carries a non-nil id and usable coordinates;
//!   incomplete user input only ever exists as a `ReminderDraft`.

pub mod reminder;
